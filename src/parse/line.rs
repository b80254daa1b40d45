// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tagged-line classifier for the feature file micro-grammar.
//!
//! A feature file interleaves several line-oriented micro-grammars: the
//! feature header, scenario/outline headers, tag lines, step lines, embedded
//! image references, `Examples` blocks and their table rows. [`classify()`]
//! resolves each raw line into exactly one [`Line`], applying the checks in a
//! fixed priority order, so the state machine in [`builder`] never has to
//! inspect raw text itself.
//!
//! [`builder`]: crate::parse::builder

use itertools::Itertools as _;
use lazy_regex::regex;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Step keywords opening a [`Line::Step`].
const STEP_KEYWORDS: [&str; 5] = ["Given:", "When:", "Then:", "And:", "But:"];

/// Marker introducing an inline image reference.
const IMAGE_MARKER: &str = "!image_";

/// One line of a feature file, classified.
///
/// Classification priority (first match wins): scenario/outline header, tag
/// line, step line, image line, `Examples` line, table row, blank, feature
/// header, other.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line<'a> {
    /// `Scenario:` header opening a new scenario.
    ScenarioHeader {
        /// Scenario name, with the label stripped.
        name: String,
    },

    /// `Scenario Outline:` header (any scenario header mentioning `Outline`)
    /// opening a new parametrized scenario.
    OutlineHeader {
        /// Scenario name, with the label stripped.
        name: String,
    },

    /// `Tags:` line carrying comma-separated scenario labels.
    TagLine(Vec<String>),

    /// `Given:`/`When:`/`Then:`/`And:`/`But:` step, whitespace-collapsed.
    StepLine(String),

    /// Step line carrying an `!image_` reference.
    ImageLine {
        /// The whole line, whitespace-collapsed, to be kept among the steps.
        step: String,

        /// Referenced image file name.
        image: String,
    },

    /// `Examples` header of an outline, kept verbatim among the steps.
    ExamplesLine(&'a str),

    /// `|`-delimited table row, kept verbatim among the steps.
    TableRow(&'a str),

    /// Blank line: a scenario terminator, except right after an outline
    /// header.
    Blank,

    /// `Feature:` header line.
    FeatureHeader {
        /// Feature name, with the label stripped.
        name: String,
    },

    /// Anything else; ignored by the parser.
    Other,
}

/// Classifies a single raw `line` of a feature file.
///
/// # Errors
///
/// [`Error::MalformedImageTag`], if the line contains the `!image_` marker
/// but no valid image file name follows it.
pub fn classify(line: &str) -> Result<Line<'_>> {
    if line.contains("Scenario:") || line.contains("Scenario Outline:") {
        let name = scenario_name(line);
        return Ok(if line.contains("Outline") {
            Line::OutlineHeader { name }
        } else {
            Line::ScenarioHeader { name }
        });
    }
    if line.contains("Tags:") {
        return Ok(Line::TagLine(tags(line)));
    }
    if STEP_KEYWORDS.iter().any(|kw| line.contains(kw)) {
        return Ok(Line::StepLine(collapse_whitespace(line)));
    }
    if line.contains(IMAGE_MARKER) {
        let step = collapse_whitespace(line);
        let image = image_file_name(&step)?;
        return Ok(Line::ImageLine { step, image });
    }
    if line.contains("Examples") {
        return Ok(Line::ExamplesLine(line));
    }
    if line.contains('|') {
        return Ok(Line::TableRow(line));
    }
    if line.trim().is_empty() {
        return Ok(Line::Blank);
    }
    if let Some((_, rest)) = line.split_once("Feature:") {
        return Ok(Line::FeatureHeader { name: rest.trim().to_owned() });
    }
    Ok(Line::Other)
}

/// Collapses every whitespace run in `line` into a single space, trimming
/// both ends.
pub(crate) fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().join(" ")
}

/// Extracts the scenario name out of a header `line`, stripping the
/// `Scenario Outline:` or `Scenario:` label.
fn scenario_name(line: &str) -> String {
    line.split_once("Scenario Outline:")
        .or_else(|| line.split_once("Scenario:"))
        .map_or(line, |(_, rest)| rest)
        .trim()
        .to_owned()
}

/// Splits a `Tags:` line into its comma-separated labels.
fn tags(line: &str) -> Vec<String> {
    let list = line
        .split_once("Tags:")
        .map_or(line, |(_, rest)| rest)
        .trim();
    if list.is_empty() {
        vec![]
    } else {
        list.split(", ").map(ToOwned::to_owned).collect()
    }
}

/// Extracts the image file name following the `!image_` marker in `line`.
///
/// # Errors
///
/// [`Error::MalformedImageTag`], if no `<word-chars>.(png|jpg|jpeg)` token
/// follows the marker.
fn image_file_name(line: &str) -> Result<String> {
    /// [`Regex`] matching an image file name.
    static IMAGE_NAME_REGEX: &Lazy<Regex> =
        regex!(r"\w+\.(?:png|jpg|jpeg)");

    let (_, after_marker) = line
        .split_once(IMAGE_MARKER)
        .unwrap_or_else(|| unreachable!("caller checked for `{IMAGE_MARKER}`"));

    IMAGE_NAME_REGEX
        .find(after_marker)
        .map(|m| m.as_str().to_owned())
        .ok_or_else(|| Error::MalformedImageTag { line: line.to_owned() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_scenario_header() {
        assert_eq!(
            classify("    Scenario: Access app").unwrap(),
            Line::ScenarioHeader { name: "Access app".into() },
        );
    }

    #[test]
    fn classifies_outline_header() {
        assert_eq!(
            classify("    Scenario Outline: Zap with <remote>").unwrap(),
            Line::OutlineHeader { name: "Zap with <remote>".into() },
        );
    }

    #[test]
    fn outline_detection_is_lexical() {
        // `Outline` anywhere in a scenario header makes it an outline.
        assert_eq!(
            classify("Scenario: Outline of the flow").unwrap(),
            Line::OutlineHeader { name: "Outline of the flow".into() },
        );
    }

    #[test]
    fn splits_tag_line_on_comma_space() {
        assert_eq!(
            classify("        Tags: uat, regression, desco").unwrap(),
            Line::TagLine(vec![
                "uat".into(),
                "regression".into(),
                "desco".into(),
            ]),
        );
    }

    #[test]
    fn empty_tag_line_yields_no_tags() {
        assert_eq!(classify("Tags:").unwrap(), Line::TagLine(vec![]));
    }

    #[test]
    fn collapses_step_line_whitespace() {
        assert_eq!(
            classify("        Given:   app screen    is opened").unwrap(),
            Line::StepLine("Given: app screen is opened".into()),
        );
    }

    #[test]
    fn recognizes_every_step_keyword() {
        for kw in ["Given:", "When:", "Then:", "And:", "But:"] {
            let line = format!("    {kw} something happens");
            assert!(
                matches!(classify(&line).unwrap(), Line::StepLine(_)),
                "`{kw}` must classify as a step",
            );
        }
    }

    #[test]
    fn extracts_image_file_name() {
        assert_eq!(
            classify("        !image_login_ok.png|thumbnail!").unwrap(),
            Line::ImageLine {
                step: "!image_login_ok.png|thumbnail!".into(),
                image: "login_ok.png".into(),
            },
        );
    }

    #[test]
    fn accepts_jpg_and_jpeg_images() {
        for (raw, name) in [
            ("!image_shot.jpg|thumbnail!", "shot.jpg"),
            ("!image_shot.jpeg|thumbnail!", "shot.jpeg"),
        ] {
            match classify(raw).unwrap() {
                Line::ImageLine { image, .. } => assert_eq!(image, name),
                l => panic!("expected image line, got {l:?}"),
            }
        }
    }

    #[test]
    fn malformed_image_tag_fails() {
        let err = classify("    !image_broken").unwrap_err();
        assert!(matches!(err, Error::MalformedImageTag { .. }));

        let err = classify("    !image_shot.gif|thumbnail!").unwrap_err();
        assert!(matches!(err, Error::MalformedImageTag { .. }));
    }

    #[test]
    fn examples_and_table_rows_stay_verbatim() {
        assert_eq!(
            classify("    Examples:").unwrap(),
            Line::ExamplesLine("    Examples:"),
        );
        assert_eq!(
            classify("      | remote | decoder |").unwrap(),
            Line::TableRow("      | remote | decoder |"),
        );
    }

    #[test]
    fn tag_line_wins_over_step_and_table() {
        // Priority order of the original dispatch: tags before steps before
        // table rows.
        assert_eq!(
            classify("Tags: Given:, a|b").unwrap(),
            Line::TagLine(vec!["Given:".into(), "a|b".into()]),
        );
    }

    #[test]
    fn step_wins_over_table_row() {
        assert_eq!(
            classify("Given: a | b").unwrap(),
            Line::StepLine("Given: a | b".into()),
        );
    }

    #[test]
    fn classifies_blank_feature_header_and_other() {
        assert_eq!(classify("   \t ").unwrap(), Line::Blank);
        assert_eq!(
            classify("Feature: Access App").unwrap(),
            Line::FeatureHeader { name: "Access App".into() },
        );
        assert_eq!(classify("some stray prose").unwrap(), Line::Other);
    }
}
