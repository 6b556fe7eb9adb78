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

//! Raw input rows and the measurements derived from them.

use crate::config::{AnalysisConfig, MalformedRowPolicy};
use crate::error::{AnalysisError, Result};
use tracing::{debug, warn};

/// One row as produced by a record loader.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// Data line in the source (1-based, header excluded).
    pub line: usize,
    /// Raw benchmark identifier (the `name` column).
    pub identifier: String,
    /// Timing value, nanoseconds assumed.
    pub value: f64,
}

impl RawRecord {
    /// Creates a raw record.
    pub fn new(line: usize, identifier: impl Into<String>, value: f64) -> Self {
        Self {
            line,
            identifier: identifier.into(),
            value,
        }
    }
}

/// An aggregate row with its identifier parsed into a key.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Measurement {
    /// Data line in the source.
    pub line: usize,
    /// Raw identifier.
    pub identifier: String,
    /// Benchmark family.
    pub family: String,
    /// Variant under test.
    pub variant: String,
    /// Swept size parameter.
    pub size: u64,
    /// Timing value.
    pub value: f64,
    /// Always `true` for measurements that reach the aligner.
    pub is_aggregate: bool,
}

/// A row dropped under [`MalformedRowPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SkippedRow {
    /// Data line in the source.
    pub line: usize,
    /// Raw identifier.
    pub identifier: String,
    /// Human readable reason.
    pub reason: String,
}

/// Output of the key-parsing stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRows {
    /// Aggregate rows in input order.
    pub measurements: Vec<Measurement>,
    /// Aggregate rows that were skipped as malformed.
    pub skipped: Vec<SkippedRow>,
}

/// Runs the key parser over raw records.
///
/// Non-aggregate rows are dropped before parsing. Rows outside the configured
/// family, if any, are dropped after parsing. Malformed aggregate rows are
/// handled per [`AnalysisConfig::malformed_rows`].
///
/// # Errors
///
/// Returns [`AnalysisError::MalformedIdentifier`] for the first malformed
/// aggregate row when the policy is [`MalformedRowPolicy::Abort`].
///
/// # Examples
///
/// ```
/// use benchcmp_core::{parse_records, AnalysisConfig, RawRecord};
///
/// let records = vec![
///     RawRecord::new(1, "g/BM_A/1", 98.0),
///     RawRecord::new(2, "g/BM_A/1_mean", 100.0),
///     RawRecord::new(3, "g/BM_A/oops_mean", 1.0),
/// ];
/// let parsed = parse_records(records, &AnalysisConfig::default()).unwrap();
/// assert_eq!(parsed.measurements.len(), 1);
/// assert_eq!(parsed.skipped.len(), 1);
/// ```
pub fn parse_records<I>(records: I, config: &AnalysisConfig) -> Result<ParsedRows>
where
    I: IntoIterator<Item = RawRecord>,
{
    let parser = config.key_parser();
    let mut parsed = ParsedRows::default();
    let mut non_aggregate = 0usize;
    let mut other_family = 0usize;

    for record in records {
        if !parser.is_aggregate(&record.identifier) {
            non_aggregate += 1;
            continue;
        }

        let key = match parser.parse(&record.identifier) {
            Ok(key) => key,
            Err(source) => match config.malformed_rows {
                MalformedRowPolicy::Abort => {
                    return Err(AnalysisError::MalformedIdentifier {
                        line: record.line,
                        identifier: record.identifier,
                        source,
                    });
                }
                MalformedRowPolicy::Skip => {
                    warn!(
                        line = record.line,
                        identifier = %record.identifier,
                        "skipping malformed row: {}",
                        source
                    );
                    parsed.skipped.push(SkippedRow {
                        line: record.line,
                        identifier: record.identifier,
                        reason: source.to_string(),
                    });
                    continue;
                }
            },
        };

        if let Some(family) = &config.family {
            if &key.family != family {
                other_family += 1;
                continue;
            }
        }

        parsed.measurements.push(Measurement {
            line: record.line,
            identifier: record.identifier,
            family: key.family,
            variant: key.variant,
            size: key.size,
            value: record.value,
            is_aggregate: key.is_aggregate,
        });
    }

    debug!(
        kept = parsed.measurements.len(),
        skipped = parsed.skipped.len(),
        non_aggregate,
        other_family,
        "parsed benchmark keys"
    );
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeyError;

    fn records() -> Vec<RawRecord> {
        vec![
            RawRecord::new(1, "g/BM_A/1", 99.0),
            RawRecord::new(2, "g/BM_A/1_mean", 100.0),
            RawRecord::new(3, "g/BM_A/1_stddev", 2.0),
            RawRecord::new(4, "h/BM_B/2_mean", 50.0),
            RawRecord::new(5, "g/BM_/2_mean", 1.0),
        ]
    }

    #[test]
    fn test_non_aggregate_rows_are_dropped() {
        let parsed = parse_records(records(), &AnalysisConfig::default()).unwrap();
        let ids: Vec<&str> = parsed
            .measurements
            .iter()
            .map(|m| m.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["g/BM_A/1_mean", "h/BM_B/2_mean"]);
        assert!(parsed.measurements.iter().all(|m| m.is_aggregate));
    }

    #[test]
    fn test_skip_policy_records_skipped_rows() {
        let parsed = parse_records(records(), &AnalysisConfig::default()).unwrap();
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].line, 5);
        assert!(parsed.skipped[0].reason.contains("empty"));
    }

    #[test]
    fn test_abort_policy_fails_on_first_malformed_row() {
        let config = AnalysisConfig {
            malformed_rows: MalformedRowPolicy::Abort,
            ..Default::default()
        };
        let err = parse_records(records(), &config).unwrap_err();
        match err {
            AnalysisError::MalformedIdentifier {
                line,
                identifier,
                source,
            } => {
                assert_eq!(line, 5);
                assert_eq!(identifier, "g/BM_/2_mean");
                assert!(matches!(source, KeyError::EmptyVariant { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_family_filter() {
        let config = AnalysisConfig {
            family: Some("h".to_string()),
            ..Default::default()
        };
        let parsed = parse_records(records(), &config).unwrap();
        assert_eq!(parsed.measurements.len(), 1);
        assert_eq!(parsed.measurements[0].variant, "B");
    }

    #[test]
    fn test_measurement_fields() {
        let parsed = parse_records(records(), &AnalysisConfig::default()).unwrap();
        let m = &parsed.measurements[0];
        assert_eq!(m.line, 2);
        assert_eq!(m.family, "g");
        assert_eq!(m.variant, "A");
        assert_eq!(m.size, 1);
        assert_eq!(m.value, 100.0);
    }
}
