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

//! Plain-text reports.

use super::VariantInfo;
use benchcmp_core::{
    format_percent, format_time_ns, AlignedTable, Analysis, Percent, SkippedRow, SpeedupGroup,
    SpeedupSeries,
};
use colored::Colorize;
use std::fmt::Write;

const SIZE_HEADER: &str = "size";
const ABSENT: &str = "-";
const UNDEFINED: &str = "undefined";

/// Full N-way report: table, every series grouped by base, skipped rows.
pub fn render_compare(analysis: &Analysis, groups: &[SpeedupGroup]) -> String {
    let mut out = render_table(analysis.table());
    for group in groups {
        out.push('\n');
        let _ = writeln!(out, "{}", format!("Base: {}", group.base).bold());
        if group.series.is_empty() {
            let _ = writeln!(out, "  no other variant to compare against");
        }
        for series in &group.series {
            out.push_str(&render_series(series));
        }
    }
    out.push_str(&render_skipped(analysis.skipped()));
    out
}

/// Pairwise report: both timings and the speedup per shared size.
pub fn render_pair(analysis: &Analysis, series: &SpeedupSeries) -> String {
    let table = analysis.table();
    let header = vec![
        SIZE_HEADER.to_string(),
        series.base().to_string(),
        series.other().to_string(),
        "speedup".to_string(),
    ];
    let rows: Vec<Vec<String>> = series
        .points()
        .iter()
        .map(|point| {
            vec![
                point.size.to_string(),
                time_cell(table.value(point.size, series.base())),
                time_cell(table.value(point.size, series.other())),
                percent_cell(point.percent),
            ]
        })
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "{}", series.label().bold());
    out.push_str(&render_grid(&header, &rows));
    if series.is_empty() {
        let _ = writeln!(out, "  no size measured by both variants");
    }
    out.push_str(&render_summary(series));
    out.push_str(&render_skipped(analysis.skipped()));
    out
}

/// Variant listing with family and coverage per variant.
pub fn render_variants(infos: &[VariantInfo], total_sizes: usize) -> String {
    let header = vec![
        "variant".to_string(),
        "families".to_string(),
        "coverage".to_string(),
        "sizes".to_string(),
    ];
    let rows: Vec<Vec<String>> = infos
        .iter()
        .map(|info| {
            let range = match (info.sizes.first(), info.sizes.last()) {
                (Some(lo), Some(hi)) if lo == hi => lo.to_string(),
                (Some(lo), Some(hi)) => format!("{}..{}", lo, hi),
                _ => ABSENT.to_string(),
            };
            vec![
                info.name.clone(),
                if info.families.is_empty() {
                    ABSENT.to_string()
                } else {
                    info.families.join(", ")
                },
                format!("{}/{}", info.sizes.len(), total_sizes),
                range,
            ]
        })
        .collect();
    render_grid(&header, &rows)
}

/// The aligned table, one column per variant.
pub fn render_table(table: &AlignedTable) -> String {
    let mut header = vec![SIZE_HEADER.to_string()];
    header.extend(table.variants().iter().map(str::to_string));

    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            let mut cells = vec![row.size().to_string()];
            cells.extend(row.values().iter().map(|v| time_cell(*v)));
            cells
        })
        .collect();

    render_grid(&header, &rows)
}

/// One series block: label, one line per size, summary.
pub fn render_series(series: &SpeedupSeries) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {}", series.label());
    if series.is_empty() {
        let _ = writeln!(out, "    no size measured by both variants");
        return out;
    }

    let width = series
        .points()
        .iter()
        .map(|p| p.size.to_string().len())
        .max()
        .unwrap_or(0)
        .max(SIZE_HEADER.len());
    for point in series.points() {
        let _ = writeln!(
            out,
            "    {:>width$}  {}",
            point.size,
            colorize_percent(point.percent, percent_cell(point.percent)),
            width = width
        );
    }
    out.push_str(&render_summary(series));
    out
}

fn render_summary(series: &SpeedupSeries) -> String {
    let mut out = String::new();
    if let Some(summary) = series.summary() {
        let _ = write!(
            out,
            "    summary: min {}, max {}, mean {}",
            format_percent(summary.min),
            format_percent(summary.max),
            format_percent(summary.mean)
        );
        if summary.undefined > 0 {
            let _ = write!(out, " ({} undefined)", summary.undefined);
        }
        out.push('\n');
    }
    out
}

fn render_skipped(skipped: &[SkippedRow]) -> String {
    if skipped.is_empty() {
        return String::new();
    }
    format!(
        "\n{}\n",
        format!("Skipped {} malformed row(s)", skipped.len()).yellow()
    )
}

/// Right-aligned grid; the first column is the row key.
fn render_grid(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:>w$}", cell, w = w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", line(header).bold());
    for row in rows {
        let _ = writeln!(out, "{}", line(row.as_slice()));
    }
    out
}

fn time_cell(value: Option<f64>) -> String {
    value.map_or_else(|| ABSENT.to_string(), format_time_ns)
}

fn percent_cell(percent: Percent) -> String {
    match percent {
        Percent::Value(v) => format_percent(v),
        Percent::Undefined => UNDEFINED.to_string(),
    }
}

fn colorize_percent(percent: Percent, text: String) -> colored::ColoredString {
    match percent {
        Percent::Value(v) if v > 0.0 => text.green(),
        Percent::Value(v) if v < 0.0 => text.red(),
        Percent::Value(_) => text.normal(),
        Percent::Undefined => text.yellow(),
    }
}
