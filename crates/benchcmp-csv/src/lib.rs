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

//! CSV loader for benchmark exports.
//!
//! Reads a delimited export (Google Benchmark's `--benchmark_format=csv` or
//! anything with a name and a timing column) into
//! [`RawRecord`](benchcmp_core::RawRecord)s for `benchcmp-core`.
//!
//! # Features
//!
//! - **Lazy**: [`RecordReader`] yields rows one at a time
//! - **Configurable**: delimiter, column names, whitespace trimming
//! - **Bounded**: row-count and file-size limits (`BENCHCMP_MAX_FILE_SIZE`)
//! - **Policy-aware**: [`collect_records`] applies the malformed-row policy
//!
//! # Examples
//!
//! ```no_run
//! use benchcmp_core::{Analysis, AnalysisConfig};
//! use benchcmp_csv::{load_file, LoaderConfig};
//!
//! let config = AnalysisConfig::default();
//! let loaded = load_file(
//!     "results.csv",
//!     &LoaderConfig::default(),
//!     &config.key_parser(),
//!     config.malformed_rows,
//! )
//! .unwrap();
//!
//! let analysis = Analysis::run(loaded.records, config)
//!     .unwrap()
//!     .with_skipped_rows(loaded.skipped);
//! println!("{} variants", analysis.variants().len());
//! ```

mod error;
mod loader;

pub use error::{CsvError, Result};
pub use loader::{
    collect_records, load_file, max_file_size_from_env, LoadedRecords, LoaderConfig,
    RecordReader, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_ROWS, MAX_FILE_SIZE_ENV,
};
