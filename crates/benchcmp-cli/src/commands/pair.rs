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

//! Pair command - speedup of one variant against another

use super::{load_analysis, write_output};
use crate::cli::args::{AnalysisArgs, InputArgs, OutputArgs, OutputFormat};
use crate::error::CliError;
use crate::report::{json, text};

/// Pairwise comparison of `base` against `other`.
///
/// # Errors
///
/// Returns `Err` if loading fails, either name is not a discovered variant
/// (the message lists the available ones), the names are equal, or a zero
/// divisor is hit under `--on-zero error`.
pub fn pair(
    base: &str,
    other: &str,
    input: &InputArgs,
    args: &AnalysisArgs,
    output: &OutputArgs,
) -> Result<(), CliError> {
    let analysis = load_analysis(input, args)?;
    analysis.variants().require(base)?;
    analysis.variants().require(other)?;
    if base == other {
        return Err(CliError::invalid_input(format!(
            "cannot compare '{}' with itself",
            base
        )));
    }

    let series = analysis.pair(base, other)?;

    let report = match output.format {
        OutputFormat::Text => text::render_pair(&analysis, &series),
        OutputFormat::Json => json::render_report(&analysis, [&series])?,
    };
    write_output(&report)
}
