// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sequential submission of the feature collection to the tracker.
//!
//! Per feature: the feature ticket first, linked back to the fixed test-plan
//! ticket, then its scenario tickets in order, each linked to both the test
//! plan and the feature, with referenced screenshots attached. One creation
//! call per record, no retry.
//!
//! A ticket or link failure aborts the batch. A failed image attachment is
//! the single tolerated partial failure: it's logged and skipped, since
//! attachments are auxiliary to the ticket itself.

use std::path::Path;

use tracing::{error, info};

use crate::{
    error::Result,
    feature::{Feature, Scenario},
    project,
    tracker::{client::Client, config::ProjectConfig},
};

/// Pushes every [`Feature`] and its [`Scenario`]s to the tracker as linked
/// tickets.
///
/// # Errors
///
/// On the first failed ticket creation or link; already-created tickets are
/// not rolled back.
pub fn push(
    features: &[Feature],
    client: &Client,
    config: &ProjectConfig,
    images_dir: &Path,
) -> Result<()> {
    for feature in features {
        info!(summary = %feature.name, "creating feature ticket");
        let feature_key =
            client.create_ticket(&project::feature_ticket(feature, config))?;
        client.create_link(
            &config.test_plan_link_type,
            &config.test_plan_key,
            &feature_key,
        )?;

        for scenario in &feature.scenarios {
            push_scenario(scenario, &feature_key, client, config, images_dir)?;
        }
    }
    Ok(())
}

/// Creates one scenario ticket, its links, and its image attachments.
fn push_scenario(
    scenario: &Scenario,
    feature_key: &str,
    client: &Client,
    config: &ProjectConfig,
    images_dir: &Path,
) -> Result<()> {
    info!(summary = %scenario.name, "creating scenario ticket");
    let key =
        client.create_ticket(&project::scenario_ticket(scenario, config))?;
    client.create_link(
        &config.test_plan_link_type,
        &config.test_plan_key,
        &key,
    )?;
    client.create_link(&config.feature_link_type, feature_key, &key)?;

    for image in &scenario.images {
        let path = images_dir.join(image);
        if let Err(e) = client.attach_file(&key, &path) {
            error!(key = %key, image = %image, "skipping attachment: {e}");
        }
    }
    Ok(())
}
