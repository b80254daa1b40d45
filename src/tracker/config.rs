// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tracker configuration.
//!
//! Everything the tracker integration needs is passed in explicitly through
//! these structs; nothing in the library reads the process environment. The
//! bin glue resolves credentials from the environment and hands them over.

/// Basic-auth credentials of the tracker account.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// Account user name.
    pub username: String,

    /// Account password.
    pub password: String,
}

/// Tracker-side identifiers of the target project.
///
/// Defaults mirror the QA test-plan project this tool was built around;
/// override per deployment via the CLI.
#[derive(Clone, Debug)]
pub struct ProjectConfig {
    /// Key of the project tickets are created in.
    pub project_key: String,

    /// Key of the top-level test-plan ticket every created ticket is linked
    /// back to.
    pub test_plan_key: String,

    /// Link type name used for test-plan membership links.
    pub test_plan_link_type: String,

    /// Link type name used for feature → scenario links.
    pub feature_link_type: String,

    /// Issue type name of feature tickets.
    pub feature_type_name: String,

    /// Issue type name of scenario tickets.
    pub scenario_type_name: String,

    /// Custom field ids of the project's ticket screens.
    pub fields: CustomFields,
}

/// Tracker custom field ids.
#[derive(Clone, Debug)]
pub struct CustomFields {
    /// Field holding the source feature file name on feature tickets.
    pub feature_file: String,

    /// Field holding the steps blob on scenario tickets.
    pub scenario_steps: String,

    /// Field holding the scenario's position within its feature.
    pub scenario_order: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_key: "QALARN".into(),
            test_plan_key: "QALARN-1".into(),
            test_plan_link_type: "Test Plan".into(),
            feature_link_type: "Feature".into(),
            feature_type_name: "Feature".into(),
            scenario_type_name: "Scenario".into(),
            fields: CustomFields::default(),
        }
    }
}

impl Default for CustomFields {
    fn default() -> Self {
        Self {
            feature_file: "customfield_22100".into(),
            scenario_steps: "customfield_22114".into(),
            scenario_order: "customfield_22109".into(),
        }
    }
}
