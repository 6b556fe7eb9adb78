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

//! Benchmark variant alignment and speedup metrics.
//!
//! This crate turns rows of a benchmark export (identifier + timing) into a
//! size-indexed table with one column per benchmark variant, and derives
//! percentage speedups between any two variants.
//!
//! # Pipeline
//!
//! - [`key`]: tokenizes identifiers like `Fixture/BM_Cord/64_mean` into
//!   family, variant, size and an aggregate flag
//! - [`parse_records`]: keeps aggregate rows and applies the malformed-row policy
//! - [`align`]: pivots rows onto the union of sizes (left join)
//! - [`pairwise`] / [`speedup_matrix`]: speedup series between variants
//! - [`format_time_ns`]: display formatting for nanosecond timings
//!
//! [`Analysis`] runs the whole pipeline in one call.
//!
//! # Examples
//!
//! ```
//! use benchcmp_core::{format_time_ns, Analysis, AnalysisConfig, RawRecord};
//!
//! let records = vec![
//!     RawRecord::new(1, "g/BM_A/1_mean", 100.0),
//!     RawRecord::new(2, "g/BM_B/1_mean", 50.0),
//! ];
//! let analysis = Analysis::run(records, AnalysisConfig::default()).unwrap();
//!
//! let series = analysis.pair("A", "B").unwrap();
//! assert_eq!(series.percent_at(1), Some(100.0));
//! assert_eq!(format_time_ns(analysis.table().value(1, "A").unwrap()), "100.00 ns");
//! ```

pub mod align;
mod config;
mod error;
mod format;
pub mod key;
pub mod metrics;
mod pipeline;
mod record;

pub use align::{align, AlignedRow, AlignedTable, VariantSet};
pub use config::{
    AnalysisConfig, MalformedRowPolicy, VariantOrder, ZeroDivisionPolicy,
    DEFAULT_AGGREGATE_SUFFIX, DEFAULT_MARKER,
};
pub use error::{AnalysisError, KeyError, Result};
pub use format::{format_percent, format_time_ns};
pub use key::{BenchmarkKey, KeyParser, Segment};
pub use metrics::{
    pairwise, speedup_matrix, speedup_percent, Percent, SpeedupGroup, SpeedupPoint,
    SpeedupSeries, SpeedupSummary,
};
pub use pipeline::Analysis;
pub use record::{parse_records, Measurement, ParsedRows, RawRecord, SkippedRow};
