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

//! Speedup metrics between variants of an aligned table.
//!
//! The speedup of `base` against `other` at one size is
//!
//! ```text
//! percent = (base - other) / other * 100
//! ```
//!
//! so a positive value means `base` is that many percent slower than `other`.
//! The metric is not symmetric: swapping the pair changes the divisor.

use crate::align::AlignedTable;
use crate::config::ZeroDivisionPolicy;
use crate::error::{AnalysisError, Result};

/// Speedup value at one size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Percent {
    /// A finite (or NaN-propagated) percentage.
    Value(f64),
    /// The `other` value was zero.
    Undefined,
}

impl Percent {
    /// The percentage, if defined.
    pub fn value(self) -> Option<f64> {
        match self {
            Percent::Value(v) => Some(v),
            Percent::Undefined => None,
        }
    }

    /// Returns `true` for [`Percent::Undefined`].
    pub fn is_undefined(self) -> bool {
        matches!(self, Percent::Undefined)
    }
}

/// One `(size, percent)` entry of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpeedupPoint {
    /// Size of the entry.
    pub size: u64,
    /// Speedup at that size.
    pub percent: Percent,
}

/// Descriptive statistics over the defined points of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpeedupSummary {
    /// Number of defined points.
    pub defined: usize,
    /// Number of undefined points.
    pub undefined: usize,
    /// Smallest defined percentage.
    pub min: f64,
    /// Largest defined percentage.
    pub max: f64,
    /// Arithmetic mean of defined percentages.
    pub mean: f64,
}

/// Speedup of `base` against `other` over the sizes both cover.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpeedupSeries {
    base: String,
    other: String,
    points: Vec<SpeedupPoint>,
}

impl SpeedupSeries {
    /// Base variant.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Variant the base is compared against.
    pub fn other(&self) -> &str {
        &self.other
    }

    /// Display label, `"<other> vs <base>"`.
    pub fn label(&self) -> String {
        format!("{} vs {}", self.other, self.base)
    }

    /// Entries in ascending size order.
    pub fn points(&self) -> &[SpeedupPoint] {
        &self.points
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the two variants share no size.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Entry at `size`; `None` if either variant is absent there.
    pub fn get(&self, size: u64) -> Option<Percent> {
        self.points
            .binary_search_by_key(&size, |p| p.size)
            .ok()
            .map(|idx| self.points[idx].percent)
    }

    /// Defined percentage at `size`.
    pub fn percent_at(&self, size: u64) -> Option<f64> {
        self.get(size).and_then(Percent::value)
    }

    /// Min / max / mean over the defined points, `None` if there are none.
    pub fn summary(&self) -> Option<SpeedupSummary> {
        let defined: Vec<f64> = self.points.iter().filter_map(|p| p.percent.value()).collect();
        if defined.is_empty() {
            return None;
        }
        let min = defined.iter().copied().fold(f64::INFINITY, f64::min);
        let max = defined.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = defined.iter().sum::<f64>() / defined.len() as f64;
        Some(SpeedupSummary {
            defined: defined.len(),
            undefined: self.points.len() - defined.len(),
            min,
            max,
            mean,
        })
    }
}

/// All series sharing one base variant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpeedupGroup {
    /// Base variant.
    pub base: String,
    /// One series per other variant, in column order.
    pub series: Vec<SpeedupSeries>,
}

/// Percentage speedup of `base` against `other`; `None` if `other` is zero.
///
/// ```
/// use benchcmp_core::speedup_percent;
///
/// assert_eq!(speedup_percent(100.0, 50.0), Some(100.0));
/// assert_eq!(speedup_percent(50.0, 100.0), Some(-50.0));
/// assert_eq!(speedup_percent(1.0, 0.0), None);
/// ```
pub fn speedup_percent(base: f64, other: f64) -> Option<f64> {
    if other == 0.0 {
        None
    } else {
        Some((base - other) / other * 100.0)
    }
}

/// Speedup series for one ordered pair, selected by name.
///
/// # Errors
///
/// * [`AnalysisError::BenchmarkNotFound`] if either name is not a variant of
///   the table (exact, case-sensitive).
/// * [`AnalysisError::DivisionByZero`] if `other` is zero somewhere and the
///   policy is [`ZeroDivisionPolicy::Error`].
///
/// # Examples
///
/// ```
/// use benchcmp_core::{pairwise, Analysis, AnalysisConfig, RawRecord, ZeroDivisionPolicy};
///
/// let analysis = Analysis::run(
///     vec![
///         RawRecord::new(1, "g/BM_A/1_mean", 100.0),
///         RawRecord::new(2, "g/BM_B/1_mean", 50.0),
///     ],
///     AnalysisConfig::default(),
/// )
/// .unwrap();
///
/// let series = pairwise(analysis.table(), "A", "B", ZeroDivisionPolicy::Undefined).unwrap();
/// assert_eq!(series.percent_at(1), Some(100.0));
/// assert!(pairwise(analysis.table(), "A", "C", ZeroDivisionPolicy::Undefined).is_err());
/// ```
pub fn pairwise(
    table: &AlignedTable,
    base: &str,
    other: &str,
    policy: ZeroDivisionPolicy,
) -> Result<SpeedupSeries> {
    let base_idx = table.variants().require(base)?;
    let other_idx = table.variants().require(other)?;
    series_between(table, base_idx, other_idx, policy)
}

/// Every ordered pair of distinct variants, grouped by base.
///
/// Produces `n * (n - 1)` series for `n` variants. Groups and the series
/// inside each group follow the table's column order.
///
/// # Errors
///
/// [`AnalysisError::DivisionByZero`] under [`ZeroDivisionPolicy::Error`].
pub fn speedup_matrix(
    table: &AlignedTable,
    policy: ZeroDivisionPolicy,
) -> Result<Vec<SpeedupGroup>> {
    let count = table.variants().len();
    let mut groups = Vec::with_capacity(count);
    for base_idx in 0..count {
        let series = (0..count)
            .filter(|&other_idx| other_idx != base_idx)
            .map(|other_idx| series_between(table, base_idx, other_idx, policy))
            .collect::<Result<Vec<_>>>()?;
        groups.push(SpeedupGroup {
            base: table.variants().names()[base_idx].clone(),
            series,
        });
    }
    Ok(groups)
}

fn series_between(
    table: &AlignedTable,
    base_idx: usize,
    other_idx: usize,
    policy: ZeroDivisionPolicy,
) -> Result<SpeedupSeries> {
    let names = table.variants().names();
    let mut points = Vec::new();

    for row in table.rows() {
        let (Some(base), Some(other)) = (row.get(base_idx), row.get(other_idx)) else {
            continue;
        };
        let percent = match (speedup_percent(base, other), policy) {
            (Some(value), _) => Percent::Value(value),
            (None, ZeroDivisionPolicy::Undefined) => Percent::Undefined,
            (None, ZeroDivisionPolicy::Error) => {
                return Err(AnalysisError::DivisionByZero {
                    base: names[base_idx].clone(),
                    other: names[other_idx].clone(),
                    size: row.size(),
                });
            }
        };
        points.push(SpeedupPoint {
            size: row.size(),
            percent,
        });
    }

    Ok(SpeedupSeries {
        base: names[base_idx].clone(),
        other: names[other_idx].clone(),
        points,
    })
}
