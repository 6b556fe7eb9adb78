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

//! Command-line interface definitions.
//!
//! - [`Cli`]: top-level parser with global verbosity flags
//! - [`Commands`]: `compare`, `pair`, `variants`, `completion`
//! - [`args`]: option groups shared by the analysis commands

pub mod args;

pub use args::DEFAULT_INPUT;

use crate::commands;
use crate::error::CliError;
use args::{AnalysisArgs, InputArgs, OutputArgs};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Compare benchmark variants across input sizes.
///
/// Reads a CSV benchmark export (e.g. Google Benchmark's
/// `--benchmark_format=csv`), aligns the `_mean` rows of every `BM_<variant>`
/// by size, and reports percentage speedups between variants.
///
/// # Examples
///
/// ```bash
/// # Every ordered pair of variants
/// benchcmp compare results.csv
///
/// # One pair, as JSON
/// benchcmp pair Cord String results.csv --format json
///
/// # What is in the file
/// benchcmp variants results.csv
/// ```
#[derive(Parser, Debug)]
#[command(name = "benchcmp")]
#[command(author, version, long_about = None)]
#[command(about = "Compare benchmark variants across input sizes")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Speedups for every ordered pair of variants
    ///
    /// Exits with status 1 if the file holds no aggregate benchmark rows.
    Compare {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        analysis: AnalysisArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Speedup of one variant against another
    ///
    /// Variant names match exactly and case-sensitively.
    Pair {
        /// Base variant
        #[arg(value_name = "VARIANT1")]
        base: String,

        /// Variant the base is compared against
        #[arg(value_name = "VARIANT2")]
        other: String,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        analysis: AnalysisArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List discovered variants with their families and size coverage
    Variants {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        analysis: AnalysisArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL", value_enum)]
        shell: Shell,

        /// Print installation instructions instead of generating script
        #[arg(short, long)]
        install: bool,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if loading, analysis or writing the report fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Compare {
                input,
                analysis,
                output,
            } => commands::compare(&input, &analysis, &output),
            Commands::Pair {
                base,
                other,
                input,
                analysis,
                output,
            } => commands::pair(&base, &other, &input, &analysis, &output),
            Commands::Variants {
                input,
                analysis,
                output,
            } => commands::variants(&input, &analysis, &output),
            Commands::Completion { shell, install } => {
                if install {
                    println!("{}", commands::installation_instructions(shell));
                    Ok(())
                } else {
                    commands::completion(shell)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_pair_requires_two_variants() {
        let err = Cli::try_parse_from(["benchcmp", "pair", "A"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_pair_positionals() {
        let cli = Cli::try_parse_from(["benchcmp", "pair", "A", "B", "data.csv"]).unwrap();
        match cli.command {
            Commands::Pair {
                base, other, input, ..
            } => {
                assert_eq!(base, "A");
                assert_eq!(other, "B");
                assert_eq!(input.path(), PathBuf::from("data.csv"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_default_input() {
        let cli = Cli::try_parse_from(["benchcmp", "compare"]).unwrap();
        match cli.command {
            Commands::Compare { input, .. } => {
                assert_eq!(input.path(), PathBuf::from("results.csv"))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["benchcmp", "-vv", "compare"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["benchcmp", "-v", "-q", "compare"]).is_err());
    }
}
