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

//! Structured error types for the benchcmp CLI.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the message as
//! `Error: <message>` and exits with status 1.

use benchcmp_core::AnalysisError;
use benchcmp_csv::CsvError;
use std::io;
use thiserror::Error;

/// The main error type for benchcmp CLI operations.
///
/// # Examples
///
/// ```rust
/// use benchcmp_cli::error::CliError;
///
/// let err = CliError::invalid_input("delimiter must be a single ASCII character");
/// assert_eq!(
///     err.to_string(),
///     "Invalid input: delimiter must be a single ASCII character"
/// );
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// Loading the export failed.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// The analysis rejected the data or the request.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an invalid-input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: err.to_string(),
        }
    }
}
