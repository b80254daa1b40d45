// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Single-pass feature file parser.
//!
//! [`feature_file()`] drives a small explicit state machine over the
//! [`classify`]d lines of one file, accumulating scenarios in a builder
//! scoped to that pass and emitting the completed [`Feature`] at end of
//! input.
//!
//! Scenario boundaries are blank-line-delimited, with one exception: the
//! first blank line after a `Scenario Outline:` header is swallowed into the
//! steps blob instead of closing the scenario, so the outline's `Examples`
//! table, which follows a blank line, stays inside the same scenario. End of
//! input acts as an implicit terminator, so a file without a trailing blank
//! line keeps its last scenario.
//!
//! [`classify`]: super::line::classify

use std::mem;

use crate::{
    error::{Error, Result},
    feature::{Feature, Scenario},
    parse::line::{self, Line},
};

/// Parser states while walking a feature file's lines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// Between scenarios. Only a scenario header opens one; any other
    /// content here is ignored, so stray blank lines cannot emit scenarios.
    BeforeScenario,

    /// Accumulating scenario content. A blank line closes the scenario,
    /// unless it's an outline's first blank line.
    InScenario,

    /// Past an outline's swallowed blank line, inside its trailing
    /// `Examples` block. The next blank line closes the scenario.
    InOutlineExamples,
}

/// Accumulator for the scenario currently being parsed.
///
/// Scoped to one [`feature_file()`] pass; [`take_scenario()`] drains it back
/// to empty for the next scenario of the same file.
///
/// [`take_scenario()`]: ScenarioBuilder::take_scenario
#[derive(Debug, Default)]
struct ScenarioBuilder {
    /// Name from the last seen scenario header.
    name: String,

    /// Whether that header declared a `Scenario Outline`.
    is_outline: bool,

    /// Tags from the last seen `Tags:` line.
    tags: Vec<String>,

    /// Buffered step lines, joined on emit.
    steps: Vec<String>,

    /// Image file names referenced so far.
    images: Vec<String>,
}

impl ScenarioBuilder {
    /// Starts a new scenario, keeping whatever content has accumulated.
    ///
    /// A repeated header without an intervening blank line overwrites the
    /// name only, matching the blank-line-delimited boundary rules.
    fn start(&mut self, name: String, is_outline: bool) {
        self.name = name;
        self.is_outline = is_outline;
    }

    /// Emits the accumulated [`Scenario`] under the given 1-based index and
    /// resets this builder.
    fn take_scenario(&mut self, local_index: u64) -> Scenario {
        Scenario {
            name: mem::take(&mut self.name),
            tags: mem::take(&mut self.tags),
            steps: mem::take(&mut self.steps).join("\n"),
            local_index,
            images: mem::take(&mut self.images),
            is_outline: mem::take(&mut self.is_outline),
        }
    }
}

/// Parses the `content` of one feature file into a [`Feature`].
///
/// `id` and `source_file_name` are attached to the record as-is; deriving
/// them from the file name is the aggregator's job.
///
/// # Errors
///
/// - [`Error::MissingFeatureHeader`], if no line contains `Feature:`.
/// - [`Error::MalformedImageTag`], if a line contains the `!image_` marker
///   but no valid image file name.
pub fn feature_file(
    id: u64,
    source_file_name: impl Into<String>,
    content: &str,
) -> Result<Feature> {
    let source_file_name = source_file_name.into();
    let name = feature_name(content).ok_or_else(|| {
        Error::MissingFeatureHeader { file: source_file_name.clone() }
    })?;

    let mut state = State::BeforeScenario;
    let mut current = ScenarioBuilder::default();
    let mut scenarios = vec![];
    let mut counter = 0;

    for raw in content.lines() {
        match line::classify(raw)? {
            Line::ScenarioHeader { name } => {
                current.start(name, false);
                state = State::InScenario;
            }
            Line::OutlineHeader { name } => {
                current.start(name, true);
                state = State::InScenario;
            }
            Line::TagLine(tags) if state != State::BeforeScenario => {
                current.tags = tags;
            }
            Line::StepLine(step) if state != State::BeforeScenario => {
                current.steps.push(step);
            }
            Line::ImageLine { step, image }
                if state != State::BeforeScenario =>
            {
                current.steps.push(step);
                current.images.push(image);
            }
            Line::ExamplesLine(raw) | Line::TableRow(raw)
                if state != State::BeforeScenario =>
            {
                current.steps.push(raw.to_owned());
            }
            Line::Blank => match state {
                State::BeforeScenario => {}
                State::InScenario if current.is_outline => {
                    // Swallowed so the Examples table following this blank
                    // line stays inside the same scenario.
                    current.steps.push(String::new());
                    state = State::InOutlineExamples;
                }
                State::InScenario | State::InOutlineExamples => {
                    counter += 1;
                    scenarios.push(current.take_scenario(counter));
                    state = State::BeforeScenario;
                }
            },
            _ => {}
        }
    }

    // End of input is an implicit terminator: a file without a trailing
    // blank line keeps its last scenario.
    if state != State::BeforeScenario {
        counter += 1;
        scenarios.push(current.take_scenario(counter));
    }

    Ok(Feature { name, scenarios, id, source_file_name })
}

/// Locates the `Feature:` header line and extracts the feature name.
fn feature_name(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|l| l.split_once("Feature:"))
        .map(|(_, rest)| rest.trim().to_owned())
}
