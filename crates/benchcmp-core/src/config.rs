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

//! Analysis configuration.
//!
//! Everything that shapes the result of a run beyond the input rows lives in
//! [`AnalysisConfig`]: the identifier grammar tokens, the variant ordering,
//! and the policies for zero divisors and malformed rows.

/// Default variant marker that prefixes the variant segment of an identifier.
pub const DEFAULT_MARKER: &str = "BM_";

/// Default suffix carried by aggregate (mean) rows.
pub const DEFAULT_AGGREGATE_SUFFIX: &str = "_mean";

/// Column order of variants in the aligned table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum VariantOrder {
    /// Order of first appearance in the input.
    FirstSeen,
    /// Case-sensitive lexical order.
    #[default]
    Lexical,
}

/// What to do when the `other` value of a speedup is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ZeroDivisionPolicy {
    /// Record the point as [`Percent::Undefined`](crate::Percent::Undefined).
    #[default]
    Undefined,
    /// Fail with [`AnalysisError::DivisionByZero`](crate::AnalysisError::DivisionByZero).
    Error,
}

/// What to do with an aggregate row that cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MalformedRowPolicy {
    /// Skip the row, log a warning and record it as a [`SkippedRow`](crate::SkippedRow).
    #[default]
    Skip,
    /// Abort the run on the first malformed row.
    Abort,
}

/// Configuration for an analysis run.
///
/// # Examples
///
/// ```
/// use benchcmp_core::{AnalysisConfig, VariantOrder};
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.marker, "BM_");
/// assert_eq!(config.aggregate_suffix, "_mean");
/// assert_eq!(config.variant_order, VariantOrder::Lexical);
///
/// let config = AnalysisConfig {
///     variant_order: VariantOrder::FirstSeen,
///     family: Some("StringConcatFixture".to_string()),
///     ..Default::default()
/// };
/// assert!(config.family.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Prefix of the variant segment (default: `BM_`).
    pub marker: String,

    /// Suffix marking aggregate rows (default: `_mean`).
    pub aggregate_suffix: String,

    /// Variant column order (default: lexical).
    pub variant_order: VariantOrder,

    /// Zero-divisor handling for speedups (default: undefined sentinel).
    pub zero_division: ZeroDivisionPolicy,

    /// Malformed aggregate row handling (default: skip with warning).
    pub malformed_rows: MalformedRowPolicy,

    /// Keep only rows of this benchmark family, if set.
    pub family: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            aggregate_suffix: DEFAULT_AGGREGATE_SUFFIX.to_string(),
            variant_order: VariantOrder::default(),
            zero_division: ZeroDivisionPolicy::default(),
            malformed_rows: MalformedRowPolicy::default(),
            family: None,
        }
    }
}

impl AnalysisConfig {
    /// Builds the key parser for this configuration.
    pub fn key_parser(&self) -> crate::KeyParser {
        crate::KeyParser::new(&self.marker, &self.aggregate_suffix)
    }
}
