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

//! Shared CSV fixtures and builders for benchcmp tests.
//!
//! # Quick Start
//!
//! ```rust
//! use benchcmp_test::fixtures;
//! use benchcmp_test::fixtures::builders::CsvBuilder;
//!
//! // Pre-built exports
//! let csv = fixtures::two_variants();
//! assert!(csv.starts_with("name,"));
//!
//! // Custom exports
//! let csv = CsvBuilder::new()
//!     .aggregate("g", "A", 1, 100.0)
//!     .aggregate("g", "B", 1, 50.0)
//!     .build();
//! assert_eq!(csv.lines().count(), 3);
//! ```

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> String)>;

/// Canonical benchmark exports.
pub mod fixtures;

pub use fixtures::*;

/// Write all fixtures to a directory as .csv files.
#[cfg(feature = "generate")]
pub fn write_fixtures_to_dir(dir: &std::path::Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    for (name, fixture_fn) in fixtures::all() {
        std::fs::write(dir.join(format!("{}.csv", name)), fixture_fn())?;
    }
    Ok(())
}
