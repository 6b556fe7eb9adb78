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

//! Option groups shared by the analysis commands.

use crate::error::CliError;
use benchcmp_core::{
    AnalysisConfig, MalformedRowPolicy, VariantOrder, ZeroDivisionPolicy,
    DEFAULT_AGGREGATE_SUFFIX, DEFAULT_MARKER,
};
use benchcmp_csv::LoaderConfig;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Where to read from and how to read it.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Benchmark export (defaults to results.csv)
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: Option<PathBuf>,

    /// Column holding the benchmark identifier
    #[arg(long, default_value = "name")]
    pub name_column: String,

    /// Column holding the timing in nanoseconds
    #[arg(long, default_value = "real_time")]
    pub value_column: String,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,
}

/// Input file used when none is given.
pub const DEFAULT_INPUT: &str = "results.csv";

impl InputArgs {
    /// The input path, defaulting to [`DEFAULT_INPUT`].
    pub fn path(&self) -> PathBuf {
        self.csv_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    /// Builds the loader configuration.
    ///
    /// # Errors
    ///
    /// [`CliError::InvalidInput`] if the delimiter is not one ASCII character.
    pub fn loader_config(&self) -> Result<LoaderConfig, CliError> {
        let delimiter = match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => *b,
            _ if self.delimiter == "\\t" => b'\t',
            _ => {
                return Err(CliError::invalid_input(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    self.delimiter
                )))
            }
        };
        Ok(LoaderConfig {
            delimiter,
            name_column: self.name_column.clone(),
            value_column: self.value_column.clone(),
            ..Default::default()
        })
    }
}

/// How rows are interpreted and compared.
#[derive(Args, Debug, Clone)]
pub struct AnalysisArgs {
    /// Keep only benchmarks of this family (e.g. StringConcatFixture)
    #[arg(long)]
    pub family: Option<String>,

    /// Prefix marking the variant segment
    #[arg(long, default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Suffix marking aggregate rows
    #[arg(long, default_value = DEFAULT_AGGREGATE_SUFFIX)]
    pub suffix: String,

    /// Variant column order
    #[arg(long, value_enum, default_value_t = OrderArg::Lexical)]
    pub order: OrderArg,

    /// What to do when the compared-against time is zero
    #[arg(long, value_enum, default_value_t = ZeroArg::Undefined)]
    pub on_zero: ZeroArg,

    /// What to do with malformed aggregate rows
    #[arg(long, value_enum, default_value_t = MalformedArg::Skip)]
    pub on_malformed: MalformedArg,
}

impl AnalysisArgs {
    /// Builds the analysis configuration.
    ///
    /// # Errors
    ///
    /// [`CliError::InvalidInput`] if the marker or suffix is empty.
    pub fn analysis_config(&self) -> Result<AnalysisConfig, CliError> {
        if self.marker.is_empty() {
            return Err(CliError::invalid_input("--marker must not be empty"));
        }
        if self.suffix.is_empty() {
            return Err(CliError::invalid_input("--suffix must not be empty"));
        }
        Ok(AnalysisConfig {
            marker: self.marker.clone(),
            aggregate_suffix: self.suffix.clone(),
            variant_order: self.order.into(),
            zero_division: self.on_zero.into(),
            malformed_rows: self.on_malformed.into(),
            family: self.family.clone(),
        })
    }
}

/// Report rendering options.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned tables for a terminal
    Text,
    /// Pretty-printed JSON
    Json,
}

/// `--order` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Order of first appearance in the file
    FirstSeen,
    /// Byte-wise lexical order
    Lexical,
}

impl From<OrderArg> for VariantOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::FirstSeen => VariantOrder::FirstSeen,
            OrderArg::Lexical => VariantOrder::Lexical,
        }
    }
}

/// `--on-zero` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ZeroArg {
    /// Report the point as undefined
    Undefined,
    /// Fail the command
    Error,
}

impl From<ZeroArg> for ZeroDivisionPolicy {
    fn from(arg: ZeroArg) -> Self {
        match arg {
            ZeroArg::Undefined => ZeroDivisionPolicy::Undefined,
            ZeroArg::Error => ZeroDivisionPolicy::Error,
        }
    }
}

/// `--on-malformed` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MalformedArg {
    /// Warn, count and continue
    Skip,
    /// Fail the command on the first malformed row
    Abort,
}

impl From<MalformedArg> for MalformedRowPolicy {
    fn from(arg: MalformedArg) -> Self {
        match arg {
            MalformedArg::Skip => MalformedRowPolicy::Skip,
            MalformedArg::Abort => MalformedRowPolicy::Abort,
        }
    }
}
