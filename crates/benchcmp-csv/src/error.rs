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

//! Error types for loading benchmark exports.

use std::path::PathBuf;
use thiserror::Error;

/// CSV loading error types.
///
/// Row-level variants carry the data line (1-based, header excluded) so a
/// report can point at the offending row.
///
/// # Examples
///
/// ```
/// use benchcmp_csv::CsvError;
///
/// let err = CsvError::MissingColumn("real_time".to_string());
/// assert_eq!(err.to_string(), "Missing required column: real_time");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// The input file does not exist.
    #[error("Input file not found: {}", path.display())]
    SourceNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Missing required column in the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The input file exceeds the configured size limit.
    ///
    /// ```
    /// use benchcmp_csv::CsvError;
    ///
    /// let err = CsvError::FileTooLarge {
    ///     path: "big.csv".into(),
    ///     size: 2048,
    ///     limit: 1024,
    /// };
    /// assert!(err.to_string().contains("BENCHCMP_MAX_FILE_SIZE"));
    /// ```
    #[error(
        "File '{}' is too large ({size} bytes). Maximum allowed size is {limit} bytes; \
         set BENCHCMP_MAX_FILE_SIZE (in bytes) to raise it",
        path.display()
    )]
    FileTooLarge {
        /// Path of the file.
        path: PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// CSV parsing error at a specific line.
    ///
    /// ```
    /// use benchcmp_csv::CsvError;
    ///
    /// let err = CsvError::ParseError {
    ///     line: 42,
    ///     message: "invalid UTF-8".to_string(),
    /// };
    /// assert!(err.to_string().contains("line 42"));
    /// ```
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Data line where the error occurred.
        line: usize,
        /// Detailed error message.
        message: String,
    },

    /// A timing cell is not a number.
    ///
    /// ```
    /// use benchcmp_csv::CsvError;
    ///
    /// let err = CsvError::InvalidValue {
    ///     line: 3,
    ///     identifier: "g/BM_A/1_mean".to_string(),
    ///     column: "real_time".to_string(),
    ///     value: "fast".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid value 'fast' in column 'real_time' at line 3 (g/BM_A/1_mean)"
    /// );
    /// ```
    #[error("Invalid value '{value}' in column '{column}' at line {line} ({identifier})")]
    InvalidValue {
        /// Data line of the row.
        line: usize,
        /// Identifier of the row.
        identifier: String,
        /// Column holding the value.
        column: String,
        /// The raw cell.
        value: String,
    },

    /// A cell the loader reads is not valid UTF-8.
    ///
    /// ```
    /// use benchcmp_csv::CsvError;
    ///
    /// let err = CsvError::InvalidEncoding {
    ///     line: 2,
    ///     identifier: "g/BM_A/1_mean".to_string(),
    ///     column: "real_time".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid UTF-8 in column 'real_time' at line 2 (g/BM_A/1_mean)"
    /// );
    /// ```
    #[error("Invalid UTF-8 in column '{column}' at line {line} ({identifier})")]
    InvalidEncoding {
        /// Data line of the row.
        line: usize,
        /// Identifier of the row, lossily decoded.
        identifier: String,
        /// Column holding the undecodable cell.
        column: String,
    },

    /// Row count exceeded security limit.
    ///
    /// ```
    /// use benchcmp_csv::CsvError;
    ///
    /// let err = CsvError::SecurityLimit { limit: 10 };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Security limit exceeded: row count exceeds maximum 10"
    /// );
    /// ```
    #[error("Security limit exceeded: row count exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
    },

    /// I/O error during reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// An aggregate row failed to load and the policy is to abort.
    #[error("Malformed row at line {line} ({identifier}): {reason}")]
    MalformedRow {
        /// Data line of the row.
        line: usize,
        /// Identifier of the row.
        identifier: String,
        /// What went wrong.
        reason: String,
    },
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;

impl CsvError {
    /// Data line the error refers to, for row-level errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            CsvError::ParseError { line, .. }
            | CsvError::InvalidValue { line, .. }
            | CsvError::InvalidEncoding { line, .. }
            | CsvError::MalformedRow { line, .. } => Some(*line),
            _ => None,
        }
    }
}
