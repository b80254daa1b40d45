// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pure projections of the nested [`Feature`] model.
//!
//! Two target shapes: flat [`Row`]s for tabular export, and per-ticket
//! [`TicketFields`] maps for the tracker. Submission ordering and any I/O
//! belong to the writers and [`tracker::submit`], not here.
//!
//! [`tracker::submit`]: crate::tracker::submit

use itertools::Itertools as _;
use serde_json::json;

use crate::{
    feature::{Feature, Scenario},
    tracker::config::ProjectConfig,
};

/// One flat row of the tabular export: a single [`Scenario`] together with
/// its [`Feature`] context.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    /// [`Feature::id`] of the containing feature.
    pub feature_id: u64,

    /// [`Scenario::local_index`] within the feature.
    pub scenario_id: u64,

    /// [`Feature::name`].
    pub feature: String,

    /// [`Scenario::name`].
    pub scenario: String,

    /// [`Scenario::tags`], comma-joined into a single cell.
    pub tags: String,

    /// [`Scenario::steps`] blob.
    pub steps: String,
}

/// Ticket field map in the shape the tracker's create-issue endpoint
/// expects.
///
/// Custom field keys are configuration, so this stays a dynamic map rather
/// than a serde-derived struct.
pub type TicketFields = serde_json::Map<String, serde_json::Value>;

/// Flattens `features` into one [`Row`] per [`Scenario`], preserving feature
/// order and scenario order within each feature.
#[must_use]
pub fn rows(features: &[Feature]) -> Vec<Row> {
    features
        .iter()
        .flat_map(|feature| {
            feature.scenarios.iter().map(|scenario| Row {
                feature_id: feature.id,
                scenario_id: scenario.local_index,
                feature: feature.name.clone(),
                scenario: scenario.name.clone(),
                tags: scenario.tags.iter().join(", "),
                steps: scenario.steps.clone(),
            })
        })
        .collect()
}

/// Projects a [`Feature`] into the field map of its tracker ticket.
#[must_use]
pub fn feature_ticket(
    feature: &Feature,
    config: &ProjectConfig,
) -> TicketFields {
    let mut fields = TicketFields::new();
    fields.insert("project".into(), json!({ "key": config.project_key }));
    fields.insert("summary".into(), json!(feature.name));
    fields.insert(
        "issuetype".into(),
        json!({ "name": config.feature_type_name }),
    );
    fields.insert(
        config.fields.feature_file.clone(),
        json!(feature.source_file_name),
    );
    fields
}

/// Projects a [`Scenario`] into the field map of its tracker ticket.
///
/// The scenario's position goes into the order custom field as a decimal
/// number, and referenced image names are space-joined into the description
/// for the submission glue to resolve and attach.
#[must_use]
pub fn scenario_ticket(
    scenario: &Scenario,
    config: &ProjectConfig,
) -> TicketFields {
    let mut fields = TicketFields::new();
    fields.insert("project".into(), json!({ "key": config.project_key }));
    fields.insert("summary".into(), json!(scenario.name));
    fields.insert("labels".into(), json!(scenario.tags));
    fields.insert(
        config.fields.scenario_steps.clone(),
        json!(scenario.steps),
    );
    fields.insert(
        config.fields.scenario_order.clone(),
        json!(scenario.local_index as f64),
    );
    fields.insert(
        "issuetype".into(),
        json!({ "name": config.scenario_type_name }),
    );
    fields
        .insert("description".into(), json!(scenario.images.iter().join(" ")));
    fields
}
