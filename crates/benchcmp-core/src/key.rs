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

//! Benchmark identifier tokenizer and key parser.
//!
//! Identifiers follow the Google Benchmark naming scheme:
//!
//! ```text
//! [<family>/]*<marker><variant>[/<arg>]*/<size-token>[<aggregate-suffix>]
//! ```
//!
//! For example `StringConcatFixture/BM_CordConcat/64_mean` has the family
//! `StringConcatFixture`, the variant `CordConcat` and the size `64`, and is an
//! aggregate row. Only the digits of the final segment count towards the size,
//! so `BM_Arena/8/threads:4_mean` has the size `4`.
//!
//! # Examples
//!
//! ```
//! use benchcmp_core::KeyParser;
//!
//! let parser = KeyParser::default();
//! let key = parser.parse("group/BM_Variant/123_mean").unwrap();
//! assert_eq!(key.family, "group");
//! assert_eq!(key.variant, "Variant");
//! assert_eq!(key.size, 123);
//! assert!(key.is_aggregate);
//! ```

use crate::config::{DEFAULT_AGGREGATE_SUFFIX, DEFAULT_MARKER};
use crate::error::KeyError;

/// Path separator between identifier segments.
pub const SEGMENT_SEPARATOR: char = '/';

/// A classified segment of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A segment before the variant segment.
    Family(&'a str),
    /// The variant name, marker already removed.
    Variant(&'a str),
    /// A segment between the variant and the size token.
    Arg(&'a str),
    /// The final segment, aggregate suffix already removed.
    Size(&'a str),
}

/// Parsed, comparable key of a benchmark identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BenchmarkKey {
    /// Segments before the variant, joined with `/`. Empty if there are none.
    pub family: String,
    /// Variant name.
    pub variant: String,
    /// Swept size parameter.
    pub size: u64,
    /// Whether the identifier carries the aggregate suffix.
    pub is_aggregate: bool,
}

/// Tokenizer and parser for benchmark identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyParser {
    marker: String,
    aggregate_suffix: String,
}

impl Default for KeyParser {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER, DEFAULT_AGGREGATE_SUFFIX)
    }
}

impl KeyParser {
    /// Creates a parser for the given variant marker and aggregate suffix.
    pub fn new(marker: impl Into<String>, aggregate_suffix: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            aggregate_suffix: aggregate_suffix.into(),
        }
    }

    /// Variant marker in effect.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Aggregate suffix in effect.
    pub fn aggregate_suffix(&self) -> &str {
        &self.aggregate_suffix
    }

    /// Returns `true` if `identifier` names an aggregate (mean) row.
    ///
    /// ```
    /// use benchcmp_core::KeyParser;
    ///
    /// let parser = KeyParser::default();
    /// assert!(parser.is_aggregate("g/BM_A/1_mean"));
    /// assert!(!parser.is_aggregate("g/BM_A/1"));
    /// assert!(!parser.is_aggregate("g/BM_A/1_stddev"));
    /// ```
    pub fn is_aggregate(&self, identifier: &str) -> bool {
        identifier.trim().ends_with(self.aggregate_suffix.as_str())
    }

    /// Splits an identifier into classified segments.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Empty`], [`KeyError::MissingMarker`],
    /// [`KeyError::EmptyVariant`] or [`KeyError::MissingSize`] when the
    /// identifier does not have the expected shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchcmp_core::{KeyParser, Segment};
    ///
    /// let parser = KeyParser::default();
    /// let segments = parser.tokenize("Fixture/BM_Cord/8/64_mean").unwrap();
    /// assert_eq!(
    ///     segments,
    ///     vec![
    ///         Segment::Family("Fixture"),
    ///         Segment::Variant("Cord"),
    ///         Segment::Arg("8"),
    ///         Segment::Size("64"),
    ///     ]
    /// );
    /// ```
    pub fn tokenize<'a>(&self, identifier: &'a str) -> Result<Vec<Segment<'a>>, KeyError> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return Err(KeyError::Empty);
        }

        let body = trimmed
            .strip_suffix(self.aggregate_suffix.as_str())
            .unwrap_or(trimmed);
        let raw: Vec<&str> = body.split(SEGMENT_SEPARATOR).collect();

        let variant_idx = raw
            .iter()
            .position(|segment| segment.starts_with(self.marker.as_str()))
            .ok_or_else(|| KeyError::MissingMarker {
                marker: self.marker.clone(),
            })?;

        let variant = &raw[variant_idx][self.marker.len()..];
        if variant.is_empty() {
            return Err(KeyError::EmptyVariant {
                marker: self.marker.clone(),
            });
        }

        let last = raw.len() - 1;
        if variant_idx == last {
            return Err(KeyError::MissingSize {
                variant: variant.to_string(),
            });
        }

        let mut segments = Vec::with_capacity(raw.len());
        segments.extend(raw[..variant_idx].iter().map(|&s| Segment::Family(s)));
        segments.push(Segment::Variant(variant));
        segments.extend(raw[variant_idx + 1..last].iter().map(|&s| Segment::Arg(s)));
        segments.push(Segment::Size(raw[last]));
        Ok(segments)
    }

    /// Parses an identifier into a [`BenchmarkKey`].
    ///
    /// Non-aggregate identifiers parse too; callers filter on
    /// [`BenchmarkKey::is_aggregate`] (or [`KeyParser::is_aggregate`] before
    /// parsing).
    ///
    /// # Errors
    ///
    /// Any [`KeyError`] from [`KeyParser::tokenize`], plus
    /// [`KeyError::NonNumericSize`] and [`KeyError::SizeOverflow`] for the
    /// size token.
    pub fn parse(&self, identifier: &str) -> Result<BenchmarkKey, KeyError> {
        let is_aggregate = self.is_aggregate(identifier);
        let segments = self.tokenize(identifier)?;

        let mut family: Vec<&str> = Vec::new();
        let mut variant = "";
        let mut size_token = "";
        for segment in segments {
            match segment {
                Segment::Family(s) => family.push(s),
                Segment::Variant(s) => variant = s,
                Segment::Arg(_) => {}
                Segment::Size(s) => size_token = s,
            }
        }

        Ok(BenchmarkKey {
            family: family.join("/"),
            variant: variant.to_string(),
            size: parse_size(size_token)?,
            is_aggregate,
        })
    }
}

/// Keeps only the ASCII digits of a size token and parses them.
fn parse_size(token: &str) -> Result<u64, KeyError> {
    let digits: String = token.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(KeyError::NonNumericSize {
            token: token.to_string(),
        });
    }
    digits.parse::<u64>().map_err(|_| KeyError::SizeOverflow {
        token: token.to_string(),
    })
}
