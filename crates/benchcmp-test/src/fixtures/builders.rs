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

//! Builder for customizable benchmark exports.

use benchcmp_core::RawRecord;

/// Builder for CSV benchmark exports.
///
/// # Examples
///
/// ```
/// use benchcmp_test::fixtures::builders::CsvBuilder;
///
/// let csv = CsvBuilder::new()
///     .columns("benchmark", "time")
///     .aggregate("g", "A", 8, 12.5)
///     .iteration("g", "A", 8, 12.0)
///     .build();
///
/// assert_eq!(csv, "benchmark,time\ng/BM_A/8_mean,12.5\ng/BM_A/8,12\n");
/// ```
#[derive(Debug, Clone)]
pub struct CsvBuilder {
    name_column: String,
    value_column: String,
    delimiter: char,
    rows: Vec<(String, String)>,
}

impl Default for CsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvBuilder {
    /// Creates a builder with `name` / `real_time` columns and `,` delimiter.
    pub fn new() -> Self {
        Self {
            name_column: "name".to_string(),
            value_column: "real_time".to_string(),
            delimiter: ',',
            rows: Vec::new(),
        }
    }

    /// Sets the column names.
    pub fn columns(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.name_column = name.into();
        self.value_column = value.into();
        self
    }

    /// Sets the field delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Adds a `_mean` aggregate row.
    pub fn aggregate(self, family: &str, variant: &str, size: u64, value: f64) -> Self {
        let name = format!("{}/BM_{}/{}_mean", family, variant, size);
        self.row(name, value.to_string())
    }

    /// Adds a raw iteration row (no aggregate suffix).
    pub fn iteration(self, family: &str, variant: &str, size: u64, value: f64) -> Self {
        let name = format!("{}/BM_{}/{}", family, variant, size);
        self.row(name, value.to_string())
    }

    /// Adds a row verbatim.
    pub fn row(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.push((name.into(), value.into()));
        self
    }

    /// Renders the export.
    pub fn build(&self) -> String {
        let d = self.delimiter;
        let mut out = format!("{}{}{}\n", self.name_column, d, self.value_column);
        for (name, value) in &self.rows {
            out.push_str(&format!("{}{}{}\n", name, d, value));
        }
        out
    }

    /// The rows as raw records, numbered from line 1. Rows whose value is
    /// not a number are left out.
    pub fn records(&self) -> Vec<RawRecord> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(i, (name, value))| {
                value
                    .parse::<f64>()
                    .ok()
                    .map(|v| RawRecord::new(i + 1, name.clone(), v))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter() {
        let csv = CsvBuilder::new().delimiter(';').aggregate("g", "A", 1, 2.0).build();
        assert_eq!(csv, "name;real_time\ng/BM_A/1_mean;2\n");
    }

    #[test]
    fn test_records_skip_invalid_values() {
        let records = CsvBuilder::new()
            .aggregate("g", "A", 1, 2.0)
            .row("g/BM_A/2_mean", "oops")
            .records();
        assert_eq!(records, vec![RawRecord::new(1, "g/BM_A/1_mean", 2.0)]);
    }
}
