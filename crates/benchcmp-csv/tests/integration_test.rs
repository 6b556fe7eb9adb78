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

//! Integration tests: exports on disk through to an analysis.

use benchcmp_core::{Analysis, AnalysisConfig, KeyParser, MalformedRowPolicy};
use benchcmp_csv::{collect_records, load_file, CsvError, LoaderConfig, RecordReader};
use benchcmp_test::fixtures;
use benchcmp_test::fixtures::builders::CsvBuilder;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn analyze(content: &str) -> Analysis {
    let config = AnalysisConfig::default();
    let file = write_temp(content);
    let loaded = load_file(
        file.path(),
        &LoaderConfig::default(),
        &config.key_parser(),
        config.malformed_rows,
    )
    .unwrap();
    Analysis::run(loaded.records, config)
        .unwrap()
        .with_skipped_rows(loaded.skipped)
}

#[test]
fn test_google_benchmark_export() {
    let analysis = analyze(&fixtures::google_benchmark());

    assert_eq!(analysis.variants().names(), ["Cord", "String"]);
    assert_eq!(analysis.table().sizes(), vec![1, 8, 64]);
    assert_eq!(analysis.table().value(64, "String"), Some(241.0));
    assert!(analysis.skipped().is_empty());

    let series = analysis.pair("Cord", "String").unwrap();
    assert_eq!(series.len(), 3);
    assert!(series.percent_at(64).unwrap() < 0.0);
}

#[test]
fn test_partial_coverage_from_file() {
    let analysis = analyze(&fixtures::partial_coverage());
    assert_eq!(analysis.table().sizes(), vec![1, 2, 4]);
    assert_eq!(analysis.table().value(2, "B"), None);
}

#[test]
fn test_source_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("results.csv");
    let err = RecordReader::open(&missing, &LoaderConfig::default()).err().unwrap();
    assert!(matches!(err, CsvError::SourceNotFound { .. }));
}

#[test]
fn test_file_too_large() {
    let file = write_temp(&fixtures::two_variants());
    let config = LoaderConfig {
        max_file_size: 8,
        ..Default::default()
    };
    let err = RecordReader::open(file.path(), &config).err().unwrap();
    assert!(matches!(err, CsvError::FileTooLarge { limit: 8, .. }));
}

#[test]
fn test_invalid_csv_samples() {
    for (name, csv) in fixtures::errors::invalid_csv_samples() {
        let result = RecordReader::from_reader(csv.as_bytes(), &LoaderConfig::default());
        assert!(
            matches!(result, Err(CsvError::MissingColumn(_))),
            "sample {} should fail with a missing column",
            name
        );
    }
}

#[test]
fn test_invalid_values_skip_and_abort() {
    for value in fixtures::errors::invalid_values() {
        let csv = CsvBuilder::new()
            .aggregate("g", "A", 1, 1.0)
            .row("g/BM_A/2_mean", value)
            .build();

        let reader = RecordReader::from_reader(csv.as_bytes(), &LoaderConfig::default()).unwrap();
        let loaded =
            collect_records(reader, &KeyParser::default(), MalformedRowPolicy::Skip).unwrap();
        assert_eq!(loaded.records.len(), 1, "value {:?}", value);
        assert_eq!(loaded.skipped.len(), 1, "value {:?}", value);

        let reader = RecordReader::from_reader(csv.as_bytes(), &LoaderConfig::default()).unwrap();
        let err = collect_records(reader, &KeyParser::default(), MalformedRowPolicy::Abort)
            .unwrap_err();
        assert_eq!(err.line(), Some(2));
    }
}

#[test]
fn test_custom_columns() {
    let csv = CsvBuilder::new()
        .columns("benchmark", "cpu_time")
        .delimiter('\t')
        .aggregate("g", "A", 1, 3.0)
        .build();
    let config = LoaderConfig {
        delimiter: b'\t',
        name_column: "benchmark".to_string(),
        value_column: "cpu_time".to_string(),
        ..Default::default()
    };
    let records: Vec<_> = RecordReader::from_reader(csv.as_bytes(), &config)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value, 3.0);
}

#[test]
fn test_skipped_rows_merge_in_line_order() {
    let analysis = analyze(
        &CsvBuilder::new()
            .aggregate("g", "A", 1, 1.0)
            .row("g/BM_A/2_mean", "bad")
            .row("g/BM_A/x_mean", "3")
            .build(),
    );
    let lines: Vec<usize> = analysis.skipped().iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![2, 3]);
}
