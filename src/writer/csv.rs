// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CSV test-plan writer.
//!
//! Semicolon-delimited with every field quoted, so downstream spreadsheet
//! imports don't trip over commas or line breaks inside the steps blob.

use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::{error::Result, project::Row};

/// Header row of the test-plan CSV.
const HEADER: [&str; 6] =
    ["FeatureId", "ScenarioId", "Feature", "Scenario", "Tags", "Steps"];

/// Writes `rows` to `path` as a semicolon-delimited CSV, header row first.
///
/// # Errors
///
/// If the file cannot be created or a record fails to write.
pub fn write(path: impl AsRef<Path>, rows: &[Row]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)?;

    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record([
            row.feature_id.to_string().as_str(),
            row.scenario_id.to_string().as_str(),
            row.feature.as_str(),
            row.scenario.as_str(),
            row.tags.as_str(),
            row.steps.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
