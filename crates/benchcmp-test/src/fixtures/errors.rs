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

//! Error test fixtures.

/// Broken CSV exports.
///
/// Each tuple contains (name, csv_text).
pub fn invalid_csv_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("missing_name_column", "label,real_time\ng/BM_A/1_mean,1\n"),
        ("missing_value_column", "name,cpu_time\ng/BM_A/1_mean,1\n"),
        ("empty", ""),
    ]
}

/// Aggregate identifiers that fail key parsing.
///
/// Each tuple contains (name, identifier).
pub fn malformed_identifiers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty_body", "_mean"),
        ("missing_marker", "group/Variant/1_mean"),
        ("empty_variant", "group/BM_/1_mean"),
        ("missing_size", "group/BM_Variant_mean"),
        ("non_numeric_size", "group/BM_Variant/large_mean"),
        ("size_overflow", "group/BM_Variant/99999999999999999999999_mean"),
    ]
}

/// Timing cells that are not numbers.
pub fn invalid_values() -> Vec<&'static str> {
    vec!["fast", "", "1.2.3", "NaNx"]
}
