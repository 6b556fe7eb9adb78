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

//! Property-based tests for report rendering.

use benchcmp_cli::report::{json, text};
use benchcmp_core::{Analysis, AnalysisConfig, RawRecord};
use proptest::prelude::*;

fn analysis_from(points: &[(u8, u16, u32)]) -> Option<Analysis> {
    let records: Vec<RawRecord> = points
        .iter()
        .enumerate()
        .map(|(i, (variant, size, value))| {
            RawRecord::new(
                i + 1,
                format!("g/BM_V{}/{}_mean", variant, size),
                f64::from(*value),
            )
        })
        .collect();
    Analysis::run(records, AnalysisConfig::default()).ok()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: the text table has a header plus one line per size.
    #[test]
    fn prop_text_table_has_one_line_per_size(
        points in prop::collection::vec((0u8..4, 0u16..64, 0u32..1_000_000), 1..40)
    ) {
        colored::control::set_override(false);
        let analysis = analysis_from(&points).unwrap();
        let out = text::render_table(analysis.table());
        prop_assert_eq!(out.lines().count(), analysis.table().len() + 1);
    }

    /// Property: the JSON report always parses and lists n * (n - 1) series.
    #[test]
    fn prop_json_report_parses(
        points in prop::collection::vec((0u8..4, 0u16..64, 0u32..1_000_000), 1..40)
    ) {
        let analysis = analysis_from(&points).unwrap();
        let groups = analysis.speedups().unwrap();
        let series = groups.iter().flat_map(|g| g.series.iter());
        let out = json::render_report(&analysis, series).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        let n = analysis.variants().len();
        prop_assert_eq!(value["speedups"].as_array().unwrap().len(), n * (n - 1));
        prop_assert_eq!(value["table"].as_array().unwrap().len(), analysis.table().len());
    }
}
