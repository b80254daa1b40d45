// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Feature`] and [`Scenario`] records produced by parsing.
//!
//! Both records are constructed once per parse pass and never mutated
//! afterwards. Serialized field names follow the external JSON document
//! format consumed by downstream tooling, not Rust conventions.

use serde::{Deserialize, Serialize};

/// A parsed feature file: one named unit of behavior under test, containing
/// its [`Scenario`]s in file order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Name from the single `Feature:` header line.
    #[serde(rename = "Feature")]
    pub name: String,

    /// [`Scenario`]s in the order they appear in the file.
    #[serde(rename = "Scenarios")]
    pub scenarios: Vec<Scenario>,

    /// Numeric identifier derived from the file name prefix
    /// (`<integer>_<description>.feature`).
    #[serde(rename = "FeatureId")]
    pub id: u64,

    /// Name of the file this [`Feature`] was read from.
    #[serde(rename = "FeatureFileName")]
    pub source_file_name: String,
}

/// A single named test case of a [`Feature`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Name from the `Scenario:` (or `Scenario Outline:`) header line.
    #[serde(rename = "Scenario")]
    pub name: String,

    /// Tags from the `Tags:` line, in source order. Empty if the scenario
    /// carries no `Tags:` line.
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,

    /// All step lines concatenated into one blob, preserving original line
    /// breaks. Outline `Examples:` blocks and their table rows are retained
    /// here verbatim.
    #[serde(rename = "Steps")]
    pub steps: String,

    /// 1-based position of this [`Scenario`] within its [`Feature`],
    /// assigned during parsing rather than parsed from content.
    #[serde(rename = "scenarioId")]
    pub local_index: u64,

    /// Image file names referenced from the steps via `!image_` markers,
    /// in source order.
    #[serde(rename = "images")]
    pub images: Vec<String>,

    /// Whether the header line declared a `Scenario Outline`.
    ///
    /// Model-only: the external JSON document format has no field for it.
    #[serde(skip)]
    pub is_outline: bool,
}
