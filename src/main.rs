// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{env, process};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use feature_sync::{
    cli, collection, project,
    tracker::{self, Credentials, ProjectConfig},
    writer, Error, Result,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(cli::Opts::parsed()) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(opts: cli::Opts) -> Result<()> {
    let features = collection::load_dir(&opts.features_dir)?;
    info!(count = features.len(), "parsed feature files");

    writer::json::write(&opts.json, &features)?;
    writer::csv::write(&opts.csv, &project::rows(&features))?;
    info!(
        json = %opts.json.display(),
        csv = %opts.csv.display(),
        "wrote test plan",
    );

    if opts.push {
        let client =
            tracker::Client::new(&opts.server, credentials_from_env()?);
        let mut config = ProjectConfig::default();
        if let Some(key) = opts.project_key {
            config.project_key = key;
        }
        if let Some(key) = opts.test_plan_key {
            config.test_plan_key = key;
        }
        tracker::submit::push(&features, &client, &config, &opts.images_dir)?;
    }

    Ok(())
}

/// Resolves tracker credentials from the process environment.
///
/// This is the only place the environment is read; everything below the bin
/// glue takes explicit configuration.
fn credentials_from_env() -> Result<Credentials> {
    let var = |name: &'static str| {
        env::var(name).map_err(|_| Error::MissingCredential { name })
    };
    Ok(Credentials {
        username: var("TRACKER_USERNAME")?,
        password: var("TRACKER_PASSWORD")?,
    })
}
