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

//! Read benchmark exports into raw records.

use crate::error::{CsvError, Result};
use benchcmp_core::{KeyParser, MalformedRowPolicy, RawRecord, SkippedRow};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Default maximum number of data rows.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Default maximum input file size (1 GB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "BENCHCMP_MAX_FILE_SIZE";

/// Get the maximum file size from the environment or use the default.
///
/// Unset or unparsable values fall back to [`DEFAULT_MAX_FILE_SIZE`].
pub fn max_file_size_from_env() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Configuration for reading an export.
///
/// # Examples
///
/// ```
/// use benchcmp_csv::LoaderConfig;
///
/// let config = LoaderConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert_eq!(config.name_column, "name");
/// assert_eq!(config.value_column, "real_time");
/// assert_eq!(config.max_rows, 1_000_000);
///
/// let config = LoaderConfig {
///     value_column: "cpu_time".to_string(),
///     delimiter: b';',
///     ..Default::default()
/// };
/// assert_eq!(config.value_column, "cpu_time");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,

    /// Column holding the benchmark identifier (default: `name`).
    pub name_column: String,

    /// Column holding the timing (default: `real_time`).
    pub value_column: String,

    /// Whether to trim whitespace around fields (default: `true`).
    pub trim: bool,

    /// Maximum number of data rows (default: 1,000,000).
    pub max_rows: usize,

    /// Maximum file size in bytes for [`RecordReader::open`]
    /// (default: `BENCHCMP_MAX_FILE_SIZE` or 1 GB).
    pub max_file_size: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            name_column: "name".to_string(),
            value_column: "real_time".to_string(),
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
            max_file_size: max_file_size_from_env(),
        }
    }
}

/// Lazy iterator over the rows of an export.
///
/// Yields one [`RawRecord`] per data row, or a row-level error carrying the
/// data line. Columns other than the name and value columns are ignored and
/// need not be valid UTF-8.
///
/// # Examples
///
/// ```
/// use benchcmp_csv::{LoaderConfig, RecordReader};
///
/// let csv = "name,iterations,real_time\ng/BM_A/1_mean,10,12.5\n";
/// let reader = RecordReader::from_reader(csv.as_bytes(), &LoaderConfig::default()).unwrap();
/// let records: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].identifier, "g/BM_A/1_mean");
/// assert_eq!(records[0].value, 12.5);
/// ```
pub struct RecordReader<R: Read> {
    rows: csv::ByteRecordsIntoIter<R>,
    name_idx: usize,
    value_idx: usize,
    name_column: String,
    value_column: String,
    max_rows: usize,
    line: usize,
    done: bool,
}

impl RecordReader<File> {
    /// Opens an export on disk.
    ///
    /// # Errors
    ///
    /// * [`CsvError::SourceNotFound`] if the file does not exist.
    /// * [`CsvError::FileTooLarge`] if it exceeds `max_file_size`.
    /// * [`CsvError::MissingColumn`] if the header lacks a required column.
    pub fn open(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CsvError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let size = std::fs::metadata(path)?.len();
        if size > config.max_file_size {
            return Err(CsvError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit: config.max_file_size,
            });
        }

        debug!(path = %path.display(), size, "opening benchmark export");
        Self::from_reader(File::open(path)?, config)
    }
}

impl<R: Read> RecordReader<R> {
    /// Wraps any reader. The header row is read immediately.
    ///
    /// # Errors
    ///
    /// [`CsvError::MissingColumn`] if the header lacks the name or value
    /// column, [`CsvError::CsvLib`] if the header cannot be read.
    pub fn from_reader(reader: R, config: &LoaderConfig) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(if config.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let position = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| CsvError::MissingColumn(column.to_string()))
        };
        let name_idx = position(&config.name_column)?;
        let value_idx = position(&config.value_column)?;

        Ok(Self {
            rows: csv_reader.into_byte_records(),
            name_idx,
            value_idx,
            name_column: config.name_column.clone(),
            value_column: config.value_column.clone(),
            max_rows: config.max_rows,
            line: 0,
            done: false,
        })
    }

    fn convert(&self, record: &csv::ByteRecord) -> Result<RawRecord> {
        let name = record.get(self.name_idx).unwrap_or_default();
        let cell = record.get(self.value_idx).unwrap_or_default();

        let identifier = std::str::from_utf8(name).map_err(|_| CsvError::InvalidEncoding {
            line: self.line,
            identifier: String::from_utf8_lossy(name).into_owned(),
            column: self.name_column.clone(),
        })?;
        let cell = std::str::from_utf8(cell).map_err(|_| CsvError::InvalidEncoding {
            line: self.line,
            identifier: identifier.to_string(),
            column: self.value_column.clone(),
        })?;

        // Timings must be finite: NaN would slip past the zero-divisor check.
        let value = cell
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CsvError::InvalidValue {
                line: self.line,
                identifier: identifier.to_string(),
                column: self.value_column.clone(),
                value: cell.to_string(),
            })?;

        Ok(RawRecord::new(self.line, identifier, value))
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.rows.next()?;
        self.line += 1;

        if self.line > self.max_rows {
            self.done = true;
            return Some(Err(CsvError::SecurityLimit {
                limit: self.max_rows,
            }));
        }

        Some(match result {
            Ok(record) => self.convert(&record),
            Err(e) => Err(CsvError::ParseError {
                line: self.line,
                message: e.to_string(),
            }),
        })
    }
}

/// Records drained from a reader, plus the rows skipped on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedRecords {
    /// Rows that loaded, in input order.
    pub records: Vec<RawRecord>,
    /// Aggregate rows dropped under [`MalformedRowPolicy::Skip`].
    pub skipped: Vec<SkippedRow>,
}

/// Drains a reader, applying the malformed-row policy to rows that fail to
/// load.
///
/// A row fails to load when its timing is not a finite number or when its
/// name or timing cell is not valid UTF-8. A failing row that is not an
/// aggregate row is dropped silently: Google Benchmark writes error rows with
/// an empty timing. A failing aggregate row is skipped with a warning, or
/// aborts the load, per `policy`. Errors that are not tied to a single row
/// are always returned.
///
/// # Errors
///
/// * [`CsvError::MalformedRow`] under [`MalformedRowPolicy::Abort`].
/// * Any non-row error from the reader ([`CsvError::SecurityLimit`],
///   [`CsvError::ParseError`], ...).
///
/// # Examples
///
/// ```
/// use benchcmp_core::{KeyParser, MalformedRowPolicy};
/// use benchcmp_csv::{collect_records, LoaderConfig, RecordReader};
///
/// let csv = "name,real_time\ng/BM_A/1,\ng/BM_A/1_mean,oops\ng/BM_A/2_mean,4\n";
/// let reader = RecordReader::from_reader(csv.as_bytes(), &LoaderConfig::default()).unwrap();
/// let loaded = collect_records(reader, &KeyParser::default(), MalformedRowPolicy::Skip).unwrap();
///
/// assert_eq!(loaded.records.len(), 1);
/// assert_eq!(loaded.skipped.len(), 1);
/// assert_eq!(loaded.skipped[0].line, 2);
/// ```
pub fn collect_records<I>(
    reader: I,
    parser: &KeyParser,
    policy: MalformedRowPolicy,
) -> Result<LoadedRecords>
where
    I: IntoIterator<Item = Result<RawRecord>>,
{
    let mut loaded = LoadedRecords::default();

    for item in reader {
        let (line, identifier, reason) = match item {
            Ok(record) => {
                loaded.records.push(record);
                continue;
            }
            Err(CsvError::InvalidValue {
                line,
                identifier,
                column,
                value,
            }) => (
                line,
                identifier,
                format!("invalid value '{}' in column '{}'", value, column),
            ),
            Err(CsvError::InvalidEncoding {
                line,
                identifier,
                column,
            }) => (
                line,
                identifier,
                format!("invalid UTF-8 in column '{}'", column),
            ),
            Err(err) => return Err(err),
        };

        if !parser.is_aggregate(&identifier) {
            debug!(line, identifier = %identifier, "dropping malformed non-aggregate row");
            continue;
        }
        match policy {
            MalformedRowPolicy::Abort => {
                return Err(CsvError::MalformedRow {
                    line,
                    identifier,
                    reason,
                });
            }
            MalformedRowPolicy::Skip => {
                warn!(line, identifier = %identifier, "skipping row: {}", reason);
                loaded.skipped.push(SkippedRow {
                    line,
                    identifier,
                    reason,
                });
            }
        }
    }

    debug!(
        records = loaded.records.len(),
        skipped = loaded.skipped.len(),
        "export loaded"
    );
    Ok(loaded)
}

/// Opens `path` and drains it with [`collect_records`].
///
/// # Errors
///
/// Any error of [`RecordReader::open`] or [`collect_records`].
pub fn load_file(
    path: impl AsRef<Path>,
    config: &LoaderConfig,
    parser: &KeyParser,
    policy: MalformedRowPolicy,
) -> Result<LoadedRecords> {
    let reader = RecordReader::open(path, config)?;
    collect_records(reader, parser, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(csv: &str) -> RecordReader<&[u8]> {
        RecordReader::from_reader(csv.as_bytes(), &LoaderConfig::default()).unwrap()
    }

    #[test]
    fn test_missing_name_column() {
        let err =
            RecordReader::from_reader("label,real_time\n".as_bytes(), &LoaderConfig::default())
                .err()
                .unwrap();
        assert!(matches!(err, CsvError::MissingColumn(ref c) if c == "name"));
    }

    #[test]
    fn test_missing_value_column() {
        let err = RecordReader::from_reader("name,cpu_time\n".as_bytes(), &LoaderConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, CsvError::MissingColumn(ref c) if c == "real_time"));
    }

    #[test]
    fn test_extra_columns_and_order() {
        let records: Vec<RawRecord> = reader("real_time,x,name\n5,y,g/BM_A/1_mean\n")
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(records, vec![RawRecord::new(1, "g/BM_A/1_mean", 5.0)]);
    }

    #[test]
    fn test_invalid_value_carries_line() {
        let results: Vec<Result<RawRecord>> = reader("name,real_time\na,1\nb,x\n").collect();
        assert!(results[0].is_ok());
        match &results[1] {
            Err(CsvError::InvalidValue { line, identifier, value, .. }) => {
                assert_eq!(*line, 2);
                assert_eq!(identifier, "b");
                assert_eq!(value, "x");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_short_row_is_invalid_value() {
        let results: Vec<Result<RawRecord>> = reader("name,real_time\ng/BM_A/1_mean\n").collect();
        assert!(matches!(results[0], Err(CsvError::InvalidValue { .. })));
    }

    #[test]
    fn test_security_limit() {
        let config = LoaderConfig {
            max_rows: 2,
            ..Default::default()
        };
        let csv = "name,real_time\na,1\nb,2\nc,3\nd,4\n";
        let results: Vec<Result<RawRecord>> =
            RecordReader::from_reader(csv.as_bytes(), &config).unwrap().collect();
        assert_eq!(results.len(), 3);
        assert!(matches!(
            results[2],
            Err(CsvError::SecurityLimit { limit: 2 })
        ));
    }

    #[test]
    fn test_custom_delimiter() {
        let config = LoaderConfig {
            delimiter: b';',
            ..Default::default()
        };
        let records: Vec<RawRecord> =
            RecordReader::from_reader("name;real_time\ng/BM_A/1_mean; 2.5\n".as_bytes(), &config)
                .unwrap()
                .collect::<Result<_>>()
                .unwrap();
        assert_eq!(records[0].value, 2.5);
    }

    #[test]
    fn test_collect_abort_on_aggregate() {
        let err = collect_records(
            reader("name,real_time\ng/BM_A/1_mean,bad\n"),
            &KeyParser::default(),
            MalformedRowPolicy::Abort,
        )
        .unwrap_err();
        assert!(matches!(err, CsvError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn test_collect_drops_non_aggregate_even_on_abort() {
        let loaded = collect_records(
            reader("name,real_time\ng/BM_A/1,\ng/BM_A/1_mean,3\n"),
            &KeyParser::default(),
            MalformedRowPolicy::Abort,
        )
        .unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert!(loaded.skipped.is_empty());
    }

    fn byte_reader(csv: &[u8]) -> RecordReader<&[u8]> {
        RecordReader::from_reader(csv, &LoaderConfig::default()).unwrap()
    }

    #[test]
    fn test_invalid_utf8_in_ignored_column() {
        let csv = b"name,real_time,label\n\
                    g/BM_A/1_mean,10,\n\
                    g/BM_B/1_mean,5,\n\
                    g/BM_A/2,7,\xff\xfe\n";
        let loaded = collect_records(
            byte_reader(csv),
            &KeyParser::default(),
            MalformedRowPolicy::Skip,
        )
        .unwrap();
        assert_eq!(loaded.records.len(), 3);
        assert_eq!(loaded.records[2], RawRecord::new(3, "g/BM_A/2", 7.0));
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn test_invalid_utf8_in_value_column() {
        let csv = b"name,real_time\ng/BM_A/1_mean,\xff\ng/BM_A/2_mean,4\n";
        let results: Vec<Result<RawRecord>> = byte_reader(csv).collect();
        assert!(matches!(
            results[0],
            Err(CsvError::InvalidEncoding { line: 1, ref column, .. }) if column == "real_time"
        ));
        assert!(results[1].is_ok());

        let loaded = collect_records(
            byte_reader(csv),
            &KeyParser::default(),
            MalformedRowPolicy::Skip,
        )
        .unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.skipped[0].identifier, "g/BM_A/1_mean");
        assert!(loaded.skipped[0].reason.contains("invalid UTF-8"));

        let err = collect_records(
            byte_reader(csv),
            &KeyParser::default(),
            MalformedRowPolicy::Abort,
        )
        .unwrap_err();
        assert!(matches!(err, CsvError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn test_invalid_utf8_in_non_aggregate_name_is_dropped() {
        let csv = b"name,real_time\ng/BM_\xffA/1,3\ng/BM_A/1_mean,4\n";
        let loaded = collect_records(
            byte_reader(csv),
            &KeyParser::default(),
            MalformedRowPolicy::Abort,
        )
        .unwrap();
        assert_eq!(loaded.records, vec![RawRecord::new(2, "g/BM_A/1_mean", 4.0)]);
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let results: Vec<Result<RawRecord>> =
            reader("name,real_time\na,nan\nb,inf\nc,-inf\nd,NaN\ne,1e3\n").collect();
        for result in &results[..4] {
            assert!(matches!(result, Err(CsvError::InvalidValue { .. })));
        }
        assert_eq!(results[4].as_ref().unwrap().value, 1000.0);
    }
}
