// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One-shot batch pipeline turning a directory of BDD-style feature files
//! into a structured test plan.
//!
//! The flow is: [`collection`] lists and parses the files into immutable
//! [`Feature`] records (the [`parse`] module holds the line classifier and
//! state machine doing the heavy lifting), [`project`] flattens those
//! records into tabular rows and ticket field maps, and the [`writer`] and
//! [`tracker`] modules hand the results to the outside world (JSON and CSV
//! files, tracker tickets).
//!
//! Feature files follow a Gherkin-like micro-grammar with an inline image
//! attachment convention:
//!
//! ```gherkin
//! Feature: Access App
//!     Scenario: Access app with remote control in decoder
//!         Tags: uat, regression, desco
//!         Given: app screen is opened
//!         When: app is selected
//!         Then: initial screen of the app is displayed
//!         !image_initial_screen.png|thumbnail!
//! ```

pub mod cli;
pub mod collection;
pub mod error;
pub mod feature;
pub mod parse;
pub mod project;
pub mod tracker;
pub mod writer;

pub use self::{
    error::{Error, Result},
    feature::{Feature, Scenario},
};
