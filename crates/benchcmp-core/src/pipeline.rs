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

//! End-to-end analysis: key parsing, alignment and speedup derivation.

use crate::align::{align, AlignedTable, VariantSet};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::metrics::{pairwise, speedup_matrix, SpeedupGroup, SpeedupSeries};
use crate::record::{parse_records, Measurement, RawRecord, SkippedRow};
use tracing::info;

/// The result of one analysis run. Built once, read-only afterwards.
///
/// # Examples
///
/// ```
/// use benchcmp_core::{Analysis, AnalysisConfig, RawRecord};
///
/// let analysis = Analysis::run(
///     vec![
///         RawRecord::new(1, "g/BM_A/1_mean", 100.0),
///         RawRecord::new(2, "g/BM_B/1_mean", 50.0),
///         RawRecord::new(3, "g/BM_A/2_mean", 210.0),
///     ],
///     AnalysisConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(analysis.variants().names(), ["A", "B"]);
/// assert_eq!(analysis.table().sizes(), vec![1, 2]);
///
/// let groups = analysis.speedups().unwrap();
/// assert_eq!(groups[0].series[0].percent_at(1), Some(100.0));
/// assert_eq!(groups[0].series[0].percent_at(2), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    config: AnalysisConfig,
    measurements: Vec<Measurement>,
    skipped: Vec<SkippedRow>,
    table: AlignedTable,
}

impl Analysis {
    /// Parses, filters and aligns `records`.
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::MalformedIdentifier`](crate::AnalysisError::MalformedIdentifier)
    ///   under the abort policy.
    /// * [`AnalysisError::NoBenchmarksFound`](crate::AnalysisError::NoBenchmarksFound)
    ///   when no aggregate row survives.
    pub fn run<I>(records: I, config: AnalysisConfig) -> Result<Self>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let parsed = parse_records(records, &config)?;
        let variants = VariantSet::discover(&parsed.measurements, &config)?;
        let table = align(&parsed.measurements, &variants);

        info!(
            measurements = parsed.measurements.len(),
            variants = variants.len(),
            sizes = table.len(),
            skipped = parsed.skipped.len(),
            "analysis complete"
        );

        Ok(Self {
            config,
            measurements: parsed.measurements,
            skipped: parsed.skipped,
            table,
        })
    }

    /// Adds rows skipped before key parsing (e.g. by a loader), keeping the
    /// list ordered by line.
    pub fn with_skipped_rows(mut self, rows: Vec<SkippedRow>) -> Self {
        self.skipped.extend(rows);
        self.skipped.sort_by_key(|row| row.line);
        self
    }

    /// Configuration the run used.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Aggregate measurements in input order.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Rows skipped as malformed.
    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// Discovered variants in column order.
    pub fn variants(&self) -> &VariantSet {
        self.table.variants()
    }

    /// The aligned table.
    pub fn table(&self) -> &AlignedTable {
        &self.table
    }

    /// N-way mode: every ordered pair of distinct variants.
    pub fn speedups(&self) -> Result<Vec<SpeedupGroup>> {
        speedup_matrix(&self.table, self.config.zero_division)
    }

    /// Pairwise mode: one ordered pair selected by name.
    pub fn pair(&self, base: &str, other: &str) -> Result<SpeedupSeries> {
        pairwise(&self.table, base, other, self.config.zero_division)
    }

    /// Families seen for `variant`, in first-seen order.
    pub fn families(&self, variant: &str) -> Vec<&str> {
        let mut families: Vec<&str> = Vec::new();
        for m in self.measurements.iter().filter(|m| m.variant == variant) {
            if !families.contains(&m.family.as_str()) {
                families.push(&m.family);
            }
        }
        families
    }
}
