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

//! Report rendering.
//!
//! - [`text`]: aligned tables for a terminal
//! - [`json`]: machine-readable output via `serde_json`

pub mod json;
pub mod text;

use benchcmp_core::Analysis;
use serde::Serialize;

/// What the `variants` command reports for one variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantInfo {
    /// Variant name.
    pub name: String,
    /// Families the variant was seen in, first-seen order.
    pub families: Vec<String>,
    /// Sizes with a measurement, ascending.
    pub sizes: Vec<u64>,
}

/// Summarizes every variant of `analysis` in column order.
pub fn variant_infos(analysis: &Analysis) -> Vec<VariantInfo> {
    let table = analysis.table();
    analysis
        .variants()
        .iter()
        .map(|name| VariantInfo {
            name: name.to_string(),
            families: analysis
                .families(name)
                .into_iter()
                .map(str::to_string)
                .collect(),
            sizes: table
                .column(name)
                .unwrap_or_default()
                .into_iter()
                .filter_map(|(size, value)| value.map(|_| size))
                .collect(),
        })
        .collect()
}
