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

//! Alignment of measurements onto a shared size axis.
//!
//! The aligner pivots aggregate rows into one table keyed by size with one
//! column per variant. Sizes are the union over all variants and a variant
//! without a row at some size gets an absent cell there (left join), never a
//! dropped row.

use crate::config::{AnalysisConfig, VariantOrder};
use crate::error::{AnalysisError, Result};
use crate::record::Measurement;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::{debug, warn};

/// Ordered, non-empty set of discovered variant names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VariantSet {
    names: Vec<String>,
}

impl VariantSet {
    /// Collects the distinct variants of `rows` in the configured order.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NoBenchmarksFound`] when `rows` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchcmp_core::{parse_records, AnalysisConfig, RawRecord, VariantOrder, VariantSet};
    ///
    /// let records = vec![
    ///     RawRecord::new(1, "g/BM_b/1_mean", 1.0),
    ///     RawRecord::new(2, "g/BM_B/1_mean", 1.0),
    ///     RawRecord::new(3, "g/BM_a/1_mean", 1.0),
    /// ];
    /// let config = AnalysisConfig::default();
    /// let rows = parse_records(records, &config).unwrap().measurements;
    ///
    /// let lexical = VariantSet::discover(&rows, &config).unwrap();
    /// assert_eq!(lexical.names(), ["B", "a", "b"]);
    ///
    /// let config = AnalysisConfig { variant_order: VariantOrder::FirstSeen, ..config };
    /// let first_seen = VariantSet::discover(&rows, &config).unwrap();
    /// assert_eq!(first_seen.names(), ["b", "B", "a"]);
    /// ```
    pub fn discover(rows: &[Measurement], config: &AnalysisConfig) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut names: Vec<String> = rows
            .iter()
            .filter(|row| seen.insert(row.variant.as_str()))
            .map(|row| row.variant.clone())
            .collect();

        if names.is_empty() {
            return Err(AnalysisError::NoBenchmarksFound {
                marker: config.marker.clone(),
                suffix: config.aggregate_suffix.clone(),
            });
        }

        if config.variant_order == VariantOrder::Lexical {
            names.sort();
        }
        Ok(Self { names })
    }

    /// Variant names in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of variants (never zero).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the names in column order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Column index of `name`, exact case-sensitive match.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Returns `true` if `name` is a discovered variant.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Column index of `name`, or [`AnalysisError::BenchmarkNotFound`]
    /// listing every available variant.
    pub fn require(&self, name: &str) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| AnalysisError::BenchmarkNotFound {
                name: name.to_string(),
                available: self.names.clone(),
            })
    }
}

/// One size of the aligned table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlignedRow {
    size: u64,
    values: Vec<Option<f64>>,
}

impl AlignedRow {
    /// Size of this row.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// One optional value per variant, in column order.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Value of the variant at column `index`.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }
}

/// Size-indexed table with one optional value per variant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlignedTable {
    variants: VariantSet,
    rows: Vec<AlignedRow>,
}

impl AlignedTable {
    /// Variants in column order.
    pub fn variants(&self) -> &VariantSet {
        &self.variants
    }

    /// Rows in ascending size order.
    pub fn rows(&self) -> &[AlignedRow] {
        &self.rows
    }

    /// The size axis, ascending and deduplicated.
    pub fn sizes(&self) -> Vec<u64> {
        self.rows.iter().map(AlignedRow::size).collect()
    }

    /// Number of sizes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no sizes.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at `size`, if that size is on the axis.
    pub fn row(&self, size: u64) -> Option<&AlignedRow> {
        self.rows
            .binary_search_by_key(&size, AlignedRow::size)
            .ok()
            .map(|idx| &self.rows[idx])
    }

    /// Value of `variant` at `size`; `None` when either is unknown or the
    /// cell is absent.
    pub fn value(&self, size: u64, variant: &str) -> Option<f64> {
        let column = self.variants.position(variant)?;
        self.row(size)?.get(column)
    }

    /// Full column of `variant` over the size axis.
    pub fn column(&self, variant: &str) -> Option<Vec<(u64, Option<f64>)>> {
        let column = self.variants.position(variant)?;
        Some(
            self.rows
                .iter()
                .map(|row| (row.size, row.get(column)))
                .collect(),
        )
    }

    /// Number of sizes at which `variant` has a value.
    pub fn coverage(&self, variant: &str) -> usize {
        self.column(variant)
            .map(|col| col.iter().filter(|(_, v)| v.is_some()).count())
            .unwrap_or(0)
    }
}

/// Aligns measurements onto the union of their sizes.
///
/// A duplicate `(variant, size)` pair keeps the last row seen in input order
/// and logs a warning. Rows whose variant is not in `variants` are ignored.
///
/// # Examples
///
/// ```
/// use benchcmp_core::{align, parse_records, AnalysisConfig, RawRecord, VariantSet};
///
/// let records = vec![
///     RawRecord::new(1, "g/BM_A/1_mean", 100.0),
///     RawRecord::new(2, "g/BM_A/2_mean", 180.0),
///     RawRecord::new(3, "g/BM_B/1_mean", 50.0),
/// ];
/// let config = AnalysisConfig::default();
/// let rows = parse_records(records, &config).unwrap().measurements;
/// let variants = VariantSet::discover(&rows, &config).unwrap();
/// let table = align(&rows, &variants);
///
/// assert_eq!(table.sizes(), vec![1, 2]);
/// assert_eq!(table.value(1, "B"), Some(50.0));
/// assert_eq!(table.value(2, "B"), None);
/// ```
pub fn align(rows: &[Measurement], variants: &VariantSet) -> AlignedTable {
    // Step 1: global size axis
    let sizes: BTreeSet<u64> = rows
        .iter()
        .filter(|row| variants.contains(&row.variant))
        .map(|row| row.size)
        .collect();

    // Step 2: one size -> measurement map per variant
    let mut columns: Vec<BTreeMap<u64, &Measurement>> = vec![BTreeMap::new(); variants.len()];
    for row in rows {
        let Some(column) = variants.position(&row.variant) else {
            continue;
        };
        if let Some(previous) = columns[column].insert(row.size, row) {
            warn!(
                variant = %row.variant,
                size = row.size,
                kept_line = row.line,
                dropped_line = previous.line,
                "duplicate measurement, keeping the last one"
            );
        }
    }

    // Step 3: left join every column onto the size axis
    let rows: Vec<AlignedRow> = sizes
        .into_iter()
        .map(|size| AlignedRow {
            size,
            values: columns
                .iter()
                .map(|column| column.get(&size).map(|m| m.value))
                .collect(),
        })
        .collect();

    debug!(
        sizes = rows.len(),
        variants = variants.len(),
        "aligned measurements"
    );

    AlignedTable {
        variants: variants.clone(),
        rows,
    }
}
