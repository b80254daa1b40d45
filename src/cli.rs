// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI (command line interface) of the `feature-sync` executable.

use std::path::PathBuf;

use clap::Parser;

/// Root CLI of the `feature-sync` executable.
#[derive(Clone, Debug, Parser)]
#[command(
    name = "feature-sync",
    about = "Turns BDD feature files into a JSON/CSV test plan and tracker \
             tickets"
)]
pub struct Opts {
    /// Directory containing the `*.feature` files.
    #[arg(long, value_name = "dir", default_value = "features")]
    pub features_dir: PathBuf,

    /// Path of the generated JSON document.
    #[arg(long, value_name = "file", default_value = "features.json")]
    pub json: PathBuf,

    /// Path of the generated CSV test plan.
    #[arg(long, value_name = "file", default_value = "TestPlan.csv")]
    pub csv: PathBuf,

    /// Push the parsed features to the issue tracker as linked tickets.
    ///
    /// Requires `TRACKER_USERNAME` and `TRACKER_PASSWORD` in the
    /// environment.
    #[arg(long)]
    pub push: bool,

    /// Base URL of the tracker server.
    #[arg(long, value_name = "url", default_value = "https://jira.tid.es")]
    pub server: String,

    /// Directory holding the screenshots referenced from scenario steps.
    #[arg(long, value_name = "dir", default_value = "images")]
    pub images_dir: PathBuf,

    /// Tracker project key to create tickets in.
    #[arg(long, value_name = "key")]
    pub project_key: Option<String>,

    /// Key of the test-plan ticket created tickets are linked back to.
    #[arg(long, value_name = "key")]
    pub test_plan_key: Option<String>,
}

impl Opts {
    /// Shortcut for [`clap::Parser::parse()`], which doesn't require the
    /// trait being imported.
    #[must_use]
    pub fn parsed() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_flat_file_layout() {
        let opts = Opts::try_parse_from(["feature-sync"]).unwrap();

        assert_eq!(opts.features_dir, PathBuf::from("features"));
        assert_eq!(opts.json, PathBuf::from("features.json"));
        assert_eq!(opts.csv, PathBuf::from("TestPlan.csv"));
        assert_eq!(opts.images_dir, PathBuf::from("images"));
        assert!(!opts.push);
        assert!(opts.project_key.is_none());
    }

    #[test]
    fn push_and_overrides_parse() {
        let opts = Opts::try_parse_from([
            "feature-sync",
            "--push",
            "--project-key",
            "QAX",
            "--test-plan-key",
            "QAX-1",
            "--server",
            "https://tracker.example.com",
        ])
        .unwrap();

        assert!(opts.push);
        assert_eq!(opts.project_key.as_deref(), Some("QAX"));
        assert_eq!(opts.test_plan_key.as_deref(), Some("QAX-1"));
        assert_eq!(opts.server, "https://tracker.example.com");
    }
}
