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

//! End-to-end scenarios for the analysis pipeline.

use benchcmp_core::{
    Analysis, AnalysisConfig, AnalysisError, MalformedRowPolicy, Percent, RawRecord,
    VariantOrder, ZeroDivisionPolicy,
};

fn records(rows: &[(&str, f64)]) -> Vec<RawRecord> {
    rows.iter()
        .enumerate()
        .map(|(i, (name, value))| RawRecord::new(i + 1, *name, *value))
        .collect()
}

fn run(rows: &[(&str, f64)]) -> Analysis {
    Analysis::run(records(rows), AnalysisConfig::default()).unwrap()
}

// ============================================================================
// Alignment
// ============================================================================

#[test]
fn test_two_variants_full_coverage() {
    let analysis = run(&[
        ("StringConcatFixture/BM_Cord/1_mean", 10.0),
        ("StringConcatFixture/BM_String/1_mean", 20.0),
        ("StringConcatFixture/BM_Cord/2_mean", 30.0),
        ("StringConcatFixture/BM_String/2_mean", 15.0),
    ]);

    assert_eq!(analysis.variants().names(), ["Cord", "String"]);
    assert_eq!(analysis.table().sizes(), vec![1, 2]);
    assert_eq!(analysis.table().value(1, "Cord"), Some(10.0));
    assert_eq!(analysis.table().value(2, "String"), Some(15.0));

    let series = analysis.pair("Cord", "String").unwrap();
    assert_eq!(series.percent_at(1), Some(-50.0));
    assert_eq!(series.percent_at(2), Some(100.0));
}

#[test]
fn test_partial_coverage_left_join() {
    let analysis = run(&[
        ("g/BM_A/1_mean", 100.0),
        ("g/BM_A/2_mean", 100.0),
        ("g/BM_A/4_mean", 100.0),
        ("g/BM_B/2_mean", 50.0),
    ]);

    let table = analysis.table();
    assert_eq!(table.sizes(), vec![1, 2, 4]);
    assert_eq!(table.value(1, "B"), None);
    assert_eq!(table.value(4, "B"), None);
    assert_eq!(table.coverage("A"), 3);
    assert_eq!(table.coverage("B"), 1);

    let series = analysis.pair("A", "B").unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series.percent_at(2), Some(100.0));
}

#[test]
fn test_sizes_sorted_numerically() {
    let analysis = run(&[
        ("g/BM_A/1024_mean", 1.0),
        ("g/BM_A/8_mean", 1.0),
        ("g/BM_A/64_mean", 1.0),
    ]);
    assert_eq!(analysis.table().sizes(), vec![8, 64, 1024]);
}

#[test]
fn test_non_aggregate_rows_ignored() {
    let analysis = run(&[
        ("g/BM_A/1", 99.0),
        ("g/BM_A/1_mean", 100.0),
        ("g/BM_A/1_median", 101.0),
        ("g/BM_A/1_stddev", 2.0),
    ]);
    assert_eq!(analysis.measurements().len(), 1);
    assert_eq!(analysis.table().value(1, "A"), Some(100.0));
}

#[test]
fn test_duplicate_key_last_wins() {
    let analysis = run(&[("g/BM_A/1_mean", 1.0), ("g/BM_A/1_mean", 2.0)]);
    assert_eq!(analysis.table().value(1, "A"), Some(2.0));
}

// ============================================================================
// Variant discovery
// ============================================================================

#[test]
fn test_variant_order_lexical_by_default() {
    let analysis = run(&[("g/BM_Zeta/1_mean", 1.0), ("g/BM_Alpha/1_mean", 1.0)]);
    assert_eq!(analysis.variants().names(), ["Alpha", "Zeta"]);
}

#[test]
fn test_variant_order_first_seen() {
    let config = AnalysisConfig {
        variant_order: VariantOrder::FirstSeen,
        ..Default::default()
    };
    let analysis = Analysis::run(
        records(&[("g/BM_Zeta/1_mean", 1.0), ("g/BM_Alpha/1_mean", 1.0)]),
        config,
    )
    .unwrap();
    assert_eq!(analysis.variants().names(), ["Zeta", "Alpha"]);
}

#[test]
fn test_family_filter() {
    let config = AnalysisConfig {
        family: Some("Fast".to_string()),
        ..Default::default()
    };
    let analysis = Analysis::run(
        records(&[
            ("Fast/BM_A/1_mean", 1.0),
            ("Slow/BM_B/1_mean", 1.0),
        ]),
        config,
    )
    .unwrap();
    assert_eq!(analysis.variants().names(), ["A"]);
}

#[test]
fn test_empty_input_reports_no_benchmarks() {
    let err = Analysis::run(Vec::new(), AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::NoBenchmarksFound { .. }));
}

// ============================================================================
// Speedups
// ============================================================================

#[test]
fn test_three_variants_matrix() {
    let analysis = run(&[
        ("g/BM_A/1_mean", 100.0),
        ("g/BM_B/1_mean", 50.0),
        ("g/BM_C/1_mean", 200.0),
    ]);
    let groups = analysis.speedups().unwrap();

    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|g| g.series.len() == 2));

    let labels: Vec<String> = groups[0].series.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["B vs A", "C vs A"]);
    assert_eq!(groups[0].series[0].percent_at(1), Some(100.0));
    assert_eq!(groups[0].series[1].percent_at(1), Some(-50.0));
    assert_eq!(groups[2].series[0].percent_at(1), Some(100.0));
}

#[test]
fn test_single_variant_has_no_pairs() {
    let analysis = run(&[("g/BM_A/1_mean", 100.0)]);
    let groups = analysis.speedups().unwrap();
    assert_eq!(groups.len(), 1);
    assert!(groups[0].series.is_empty());
}

#[test]
fn test_pair_unknown_variant() {
    let analysis = run(&[("g/BM_A/1_mean", 1.0), ("g/BM_B/1_mean", 1.0)]);
    match analysis.pair("A", "a").unwrap_err() {
        AnalysisError::BenchmarkNotFound { name, available } => {
            assert_eq!(name, "a");
            assert_eq!(available, vec!["A".to_string(), "B".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_zero_divisor_policies() {
    let rows = [("g/BM_A/1_mean", 10.0), ("g/BM_B/1_mean", 0.0)];

    let analysis = run(&rows);
    let series = analysis.pair("A", "B").unwrap();
    assert_eq!(series.get(1), Some(Percent::Undefined));

    let config = AnalysisConfig {
        zero_division: ZeroDivisionPolicy::Error,
        ..Default::default()
    };
    let analysis = Analysis::run(records(&rows), config).unwrap();
    assert!(matches!(
        analysis.pair("A", "B"),
        Err(AnalysisError::DivisionByZero { size: 1, .. })
    ));
    assert!(analysis.pair("B", "A").is_ok());
}

// ============================================================================
// Malformed rows
// ============================================================================

#[test]
fn test_malformed_rows_skipped() {
    let analysis = run(&[
        ("g/BM_A/1_mean", 1.0),
        ("g/BM_A/abc_mean", 2.0),
        ("g/Other/1_mean", 3.0),
    ]);
    assert_eq!(analysis.measurements().len(), 1);
    let lines: Vec<usize> = analysis.skipped().iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![2, 3]);
}

#[test]
fn test_malformed_rows_abort() {
    let config = AnalysisConfig {
        malformed_rows: MalformedRowPolicy::Abort,
        ..Default::default()
    };
    let err = Analysis::run(
        records(&[("g/BM_A/1_mean", 1.0), ("g/BM_A/abc_mean", 2.0)]),
        config,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::MalformedIdentifier { line: 2, .. }
    ));
}

#[test]
fn test_run_is_deterministic() {
    let rows = [
        ("g/BM_B/2_mean", 5.0),
        ("g/BM_A/1_mean", 1.0),
        ("g/BM_A/2_mean", 2.0),
        ("g/BM_B/1_mean", 4.0),
    ];
    let first = run(&rows);
    let second = run(&rows);
    assert_eq!(first, second);
    assert_eq!(first.speedups().unwrap(), second.speedups().unwrap());
}
