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

//! Variants command - what the export contains

use super::{load_analysis, write_output};
use crate::cli::args::{AnalysisArgs, InputArgs, OutputArgs, OutputFormat};
use crate::error::CliError;
use crate::report::{self, json, text};

/// Lists discovered variants with their families and size coverage.
///
/// # Errors
///
/// Returns `Err` if loading fails or no aggregate rows are found.
pub fn variants(
    input: &InputArgs,
    args: &AnalysisArgs,
    output: &OutputArgs,
) -> Result<(), CliError> {
    let analysis = load_analysis(input, args)?;
    let infos = report::variant_infos(&analysis);

    let out = match output.format {
        OutputFormat::Text => text::render_variants(&infos, analysis.table().len()),
        OutputFormat::Json => json::render_variants(&infos)?,
    };
    write_output(&out)
}
