// Dweve BenchCmp - Benchmark variant comparison
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI command implementations

mod compare;
mod completion;
mod pair;
mod variants;

pub use compare::compare;
pub use completion::{completion, installation_instructions};
pub use pair::pair;
pub use variants::variants;

use crate::cli::args::{AnalysisArgs, InputArgs};
use crate::error::CliError;
use benchcmp_core::Analysis;
use benchcmp_csv::load_file;
use std::io::{self, Write};
use tracing::info;

/// Loads the input file and runs the analysis.
///
/// Rows the loader skipped are merged into the analysis so reports count
/// them alongside rows with malformed identifiers.
///
/// # Errors
///
/// Returns `Err` if the arguments are invalid, the file cannot be loaded or
/// the analysis fails (e.g. no aggregate rows).
pub fn load_analysis(input: &InputArgs, args: &AnalysisArgs) -> Result<Analysis, CliError> {
    let loader = input.loader_config()?;
    let config = args.analysis_config()?;
    let path = input.path();

    info!(path = %path.display(), "loading benchmark export");
    let loaded = load_file(&path, &loader, &config.key_parser(), config.malformed_rows)?;

    Ok(Analysis::run(loaded.records, config)?.with_skipped_rows(loaded.skipped))
}

/// Write a report to stdout.
///
/// # Errors
///
/// Returns `Err` if writing to stdout fails.
pub fn write_output(content: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
