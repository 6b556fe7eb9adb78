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

//! Error types for key parsing, alignment and metric derivation.

use thiserror::Error;

/// Reasons a benchmark identifier could not be turned into a key.
///
/// Each variant is one class of malformed input recognised by
/// [`KeyParser::parse`](crate::KeyParser::parse).
///
/// # Examples
///
/// ```
/// use benchcmp_core::KeyError;
///
/// let err = KeyError::NonNumericSize {
///     token: "real_time".to_string(),
/// };
/// assert_eq!(err.to_string(), "size token 'real_time' contains no digits");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The identifier is empty or only whitespace.
    #[error("identifier is empty")]
    Empty,

    /// No path segment starts with the variant marker.
    #[error("no segment starts with marker '{marker}'")]
    MissingMarker {
        /// The marker that was searched for.
        marker: String,
    },

    /// The marker segment has nothing after the marker.
    #[error("variant name after marker '{marker}' is empty")]
    EmptyVariant {
        /// The marker that was found.
        marker: String,
    },

    /// The variant segment is the last segment, so there is no size token.
    #[error("no size segment after variant '{variant}'")]
    MissingSize {
        /// The variant name that was parsed.
        variant: String,
    },

    /// The size token has no digit characters.
    #[error("size token '{token}' contains no digits")]
    NonNumericSize {
        /// The raw size token (aggregate suffix already stripped).
        token: String,
    },

    /// The digits of the size token do not fit in a `u64`.
    #[error("size token '{token}' overflows a 64-bit size")]
    SizeOverflow {
        /// The raw size token (aggregate suffix already stripped).
        token: String,
    },
}

/// Errors raised by the analysis pipeline.
///
/// All of these are fatal for the current invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// An aggregate row carries an identifier the key parser rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchcmp_core::{AnalysisError, KeyError};
    ///
    /// let err = AnalysisError::MalformedIdentifier {
    ///     line: 4,
    ///     identifier: "g/A/1_mean".to_string(),
    ///     source: KeyError::MissingMarker { marker: "BM_".to_string() },
    /// };
    /// assert!(err.to_string().contains("line 4"));
    /// ```
    #[error("malformed benchmark identifier '{identifier}' at line {line}: {source}")]
    MalformedIdentifier {
        /// Data line of the offending row (1-based).
        line: usize,
        /// Raw identifier.
        identifier: String,
        /// Why the identifier was rejected.
        #[source]
        source: KeyError,
    },

    /// No aggregate row with a variant marker was found.
    #[error("no benchmarks with marker '{marker}' and suffix '{suffix}' found")]
    NoBenchmarksFound {
        /// Variant marker in effect.
        marker: String,
        /// Aggregate suffix in effect.
        suffix: String,
    },

    /// A requested variant name does not match any discovered variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchcmp_core::AnalysisError;
    ///
    /// let err = AnalysisError::BenchmarkNotFound {
    ///     name: "Cord".to_string(),
    ///     available: vec!["Arena".to_string(), "NoArena".to_string()],
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "benchmark 'Cord' not found (available: Arena, NoArena)"
    /// );
    /// ```
    #[error("benchmark '{name}' not found (available: {})", .available.join(", "))]
    BenchmarkNotFound {
        /// The name that was requested.
        name: String,
        /// All discovered variant names, in table order.
        available: Vec<String>,
    },

    /// The `other` variant measured zero at some size and the zero-division
    /// policy is [`ZeroDivisionPolicy::Error`](crate::ZeroDivisionPolicy::Error).
    #[error("division by zero computing speedup of '{base}' over '{other}' at size {size}")]
    DivisionByZero {
        /// Base variant.
        base: String,
        /// Variant whose value was zero.
        other: String,
        /// Size at which it happened.
        size: u64,
    },
}

/// Convenience type alias for `Result` with `AnalysisError`.
pub type Result<T> = std::result::Result<T, AnalysisError>;
