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

//! Well-formed benchmark exports.

use super::builders::CsvBuilder;

/// Header written by Google Benchmark's `--benchmark_format=csv`.
pub const GOOGLE_BENCHMARK_HEADER: &str = "name,iterations,real_time,cpu_time,time_unit,bytes_per_second,items_per_second,label,error_occurred,error_message";

/// A verbatim Google Benchmark export with repetitions.
///
/// Two variants (`Cord`, `String`) over sizes 1, 8 and 64, each with raw
/// iteration rows plus `_mean`, `_median` and `_stddev` aggregates.
pub fn google_benchmark() -> String {
    let mut out = String::from(GOOGLE_BENCHMARK_HEADER);
    out.push('\n');
    let timings = [
        ("Cord", [(1u64, 41.2), (8, 53.9), (64, 120.5)]),
        ("String", [(1u64, 20.6), (8, 31.1), (64, 241.0)]),
    ];
    for (variant, points) in timings {
        for (size, mean) in points {
            let base = format!("StringConcatFixture/BM_{}/{}", variant, size);
            for rep in 0..2 {
                let t = mean + rep as f64;
                out.push_str(&format!("\"{}\",1000000,{},{},ns,,,,,\n", base, t, t));
            }
            out.push_str(&format!("\"{}_mean\",2,{},{},ns,,,,,\n", base, mean, mean));
            out.push_str(&format!("\"{}_median\",2,{},{},ns,,,,,\n", base, mean, mean));
            out.push_str(&format!("\"{}_stddev\",2,0.5,0.5,ns,,,,,\n", base));
        }
    }
    out.push_str("\"StringConcatFixture/BM_Broken/1\",0,,,,,,,true,\"setup failed\"\n");
    out
}

/// Two variants at two sizes, full coverage.
///
/// `A` is 100 ns / 300 ns, `B` is 50 ns / 600 ns.
pub fn two_variants() -> String {
    CsvBuilder::new()
        .aggregate("g", "A", 1, 100.0)
        .aggregate("g", "B", 1, 50.0)
        .aggregate("g", "A", 2, 300.0)
        .aggregate("g", "B", 2, 600.0)
        .build()
}

/// Three variants at one size.
pub fn three_variants() -> String {
    CsvBuilder::new()
        .aggregate("g", "A", 1, 100.0)
        .aggregate("g", "B", 1, 50.0)
        .aggregate("g", "C", 1, 200.0)
        .build()
}

/// `B` lacks sizes 2 and 4.
pub fn partial_coverage() -> String {
    CsvBuilder::new()
        .aggregate("g", "A", 1, 100.0)
        .aggregate("g", "A", 2, 200.0)
        .aggregate("g", "A", 4, 400.0)
        .aggregate("g", "B", 1, 50.0)
        .build()
}

/// A single variant, no pairs to compare.
pub fn single_variant() -> String {
    CsvBuilder::new()
        .aggregate("g", "Solo", 16, 1500.0)
        .aggregate("g", "Solo", 32, 2_000_000.0)
        .build()
}

/// `B` reports zero time at size 1.
pub fn zero_timing() -> String {
    CsvBuilder::new()
        .aggregate("g", "A", 1, 10.0)
        .aggregate("g", "B", 1, 0.0)
        .build()
}

/// Valid rows mixed with malformed aggregate identifiers.
pub fn with_malformed_rows() -> String {
    CsvBuilder::new()
        .aggregate("g", "A", 1, 100.0)
        .row("g/BM_A/size_mean", "5")
        .aggregate("g", "B", 1, 50.0)
        .row("g/NoMarker/1_mean", "7")
        .build()
}
