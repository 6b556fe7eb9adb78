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

//! Human readable rendering of durations and percentages.

/// Renders a duration in nanoseconds with the largest fitting unit.
///
/// Thresholds are fixed at 10³, 10⁶ and 10⁹; the value is printed with two
/// decimal places.
///
/// # Examples
///
/// ```
/// use benchcmp_core::format_time_ns;
///
/// assert_eq!(format_time_ns(999.0), "999.00 ns");
/// assert_eq!(format_time_ns(1500.0), "1.50 µs");
/// assert_eq!(format_time_ns(2_000_000.0), "2.00 ms");
/// assert_eq!(format_time_ns(3_000_000_000.0), "3.00 s");
/// ```
pub fn format_time_ns(ns: f64) -> String {
    if ns < 1e3 {
        format!("{:.2} ns", ns)
    } else if ns < 1e6 {
        format!("{:.2} µs", ns / 1e3)
    } else if ns < 1e9 {
        format!("{:.2} ms", ns / 1e6)
    } else {
        format!("{:.2} s", ns / 1e9)
    }
}

/// Renders a speedup percentage with two decimal places.
///
/// ```
/// use benchcmp_core::format_percent;
///
/// assert_eq!(format_percent(12.346), "12.35 %");
/// assert_eq!(format_percent(-50.0), "-50.00 %");
/// ```
pub fn format_percent(percent: f64) -> String {
    format!("{:.2} %", percent)
}
