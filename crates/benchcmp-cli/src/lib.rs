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

//! benchcmp CLI library.
//!
//! Command parsing, report rendering and command implementations for the
//! `benchcmp` binary.
//!
//! # Commands
//!
//! - **compare**: speedups for every ordered pair of variants (N-way mode)
//! - **pair**: speedup of one named variant against another
//! - **variants**: discovered variants with families and size coverage
//! - **completion**: shell completion scripts
//!
//! # Exit status
//!
//! `0` on success and for `--help` / `--version`; `1` for usage errors and
//! any failure (missing file, missing column, no benchmarks, unknown variant).
//!
//! # Environment
//!
//! - `BENCHCMP_MAX_FILE_SIZE`: maximum input size in bytes (default 1 GB)
//! - `RUST_LOG`: log filter, overrides `-v` / `-q`

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod report;
