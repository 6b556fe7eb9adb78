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

//! Canonical benchmark exports.
//!
//! - **exports**: well-formed CSV exports with various variant coverage
//! - **errors**: broken exports and malformed identifiers
//! - **builders**: fluent builder for custom exports

pub mod builders;
pub mod errors;
mod exports;

pub use exports::*;

use crate::FixtureList;

/// Returns all well-formed fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("google_benchmark", google_benchmark),
        ("two_variants", two_variants),
        ("three_variants", three_variants),
        ("partial_coverage", partial_coverage),
        ("single_variant", single_variant),
        ("zero_timing", zero_timing),
        ("with_malformed_rows", with_malformed_rows),
    ]
}
