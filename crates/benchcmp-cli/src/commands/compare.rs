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

//! Compare command - speedups for every ordered pair of variants

use super::{load_analysis, write_output};
use crate::cli::args::{AnalysisArgs, InputArgs, OutputArgs, OutputFormat};
use crate::error::CliError;
use crate::report::{json, text};

/// N-way comparison.
///
/// Loads the export, aligns every variant on the size axis and prints one
/// speedup series per ordered pair of distinct variants, grouped by base.
///
/// # Errors
///
/// Returns `Err` if loading fails, no aggregate rows are found, or a zero
/// divisor is hit under `--on-zero error`.
pub fn compare(
    input: &InputArgs,
    args: &AnalysisArgs,
    output: &OutputArgs,
) -> Result<(), CliError> {
    let analysis = load_analysis(input, args)?;
    let groups = analysis.speedups()?;

    let report = match output.format {
        OutputFormat::Text => text::render_compare(&analysis, &groups),
        OutputFormat::Json => json::render_report(
            &analysis,
            groups.iter().flat_map(|group| group.series.iter()),
        )?,
    };
    write_output(&report)
}
