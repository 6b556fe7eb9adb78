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

//! JSON reports.
//!
//! Every analysis report has the shape
//! `{ "variants": [...], "table": [...], "speedups": [...], "skipped": [...] }`.
//! Table rows hold one value per variant in `variants` order, `null` where a
//! variant has no measurement. Undefined speedups are `null` with
//! `"undefined": true`.

use super::VariantInfo;
use crate::error::CliError;
use benchcmp_core::{AlignedRow, Analysis, SkippedRow, SpeedupSeries, SpeedupSummary, VariantSet};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    variants: &'a VariantSet,
    table: &'a [AlignedRow],
    speedups: Vec<SeriesReport<'a>>,
    skipped: &'a [SkippedRow],
}

#[derive(Debug, Serialize)]
struct SeriesReport<'a> {
    base: &'a str,
    other: &'a str,
    label: String,
    points: Vec<PointReport>,
    summary: Option<SpeedupSummary>,
}

#[derive(Debug, Serialize)]
struct PointReport {
    size: u64,
    percent: Option<f64>,
    undefined: bool,
}

impl<'a> From<&'a SpeedupSeries> for SeriesReport<'a> {
    fn from(series: &'a SpeedupSeries) -> Self {
        Self {
            base: series.base(),
            other: series.other(),
            label: series.label(),
            points: series
                .points()
                .iter()
                .map(|p| PointReport {
                    size: p.size,
                    percent: p.percent.value(),
                    undefined: p.percent.is_undefined(),
                })
                .collect(),
            summary: series.summary(),
        }
    }
}

/// Renders an analysis plus the given series.
///
/// # Errors
///
/// [`CliError::JsonFormat`] if serialization fails.
pub fn render_report<'a, I>(analysis: &Analysis, series: I) -> Result<String, CliError>
where
    I: IntoIterator<Item = &'a SpeedupSeries>,
{
    let report = Report {
        variants: analysis.variants(),
        table: analysis.table().rows(),
        speedups: series.into_iter().map(SeriesReport::from).collect(),
        skipped: analysis.skipped(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Renders the variant listing.
///
/// # Errors
///
/// [`CliError::JsonFormat`] if serialization fails.
pub fn render_variants(infos: &[VariantInfo]) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(infos)?)
}
