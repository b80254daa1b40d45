// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Minimal blocking client for the tracker's REST API.
//!
//! Only the three calls this pipeline needs: create a ticket, link two
//! tickets, attach a file. Calls are made sequentially with no automatic
//! retry; resilience is out of scope.

use std::path::Path;

use reqwest::blocking;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{
    error::{Error, Result},
    project::TicketFields,
    tracker::config::Credentials,
};

/// Header disabling the tracker's XSRF check on multipart uploads.
const NO_XSRF_CHECK: (&str, &str) = ("X-Atlassian-Token", "no-check");

/// Create-issue response body.
#[derive(Debug, Deserialize)]
struct CreatedTicket {
    /// Key of the created ticket, e.g. `QALARN-17`.
    key: String,
}

/// Blocking tracker REST client.
#[derive(Debug)]
pub struct Client {
    /// Base URL of the tracker server, without a trailing slash.
    base_url: String,

    /// Credentials sent as HTTP basic auth on every request.
    credentials: Credentials,

    /// Underlying HTTP client.
    http: blocking::Client,
}

impl Client {
    /// Creates a new [`Client`] against `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            credentials,
            http: blocking::Client::new(),
        }
    }

    /// Creates a ticket from the given field map and returns its key.
    ///
    /// # Errors
    ///
    /// If the request fails or the tracker rejects it.
    pub fn create_ticket(&self, fields: &TicketFields) -> Result<String> {
        let response = self
            .post("/rest/api/2/issue")
            .json(&json!({ "fields": fields }))
            .send()?;
        let ticket: CreatedTicket = Self::checked(response)?.json()?;
        info!(key = %ticket.key, "created ticket");
        Ok(ticket.key)
    }

    /// Links `outward` under `inward` with the given link type.
    ///
    /// # Errors
    ///
    /// If the request fails or the tracker rejects it.
    pub fn create_link(
        &self,
        link_type: &str,
        inward: &str,
        outward: &str,
    ) -> Result<()> {
        info!(link_type, inward, outward, "linking tickets");
        let response = self
            .post("/rest/api/2/issueLink")
            .json(&json!({
                "type": { "name": link_type },
                "inwardIssue": { "key": inward },
                "outwardIssue": { "key": outward },
            }))
            .send()?;
        Self::checked(response).map(drop)
    }

    /// Uploads the file at `path` as an attachment of the `key` ticket.
    ///
    /// # Errors
    ///
    /// If the file cannot be read, the request fails, or the tracker
    /// rejects it.
    pub fn attach_file(&self, key: &str, path: &Path) -> Result<()> {
        info!(key, path = %path.display(), "attaching file");
        let form = blocking::multipart::Form::new().file("file", path)?;
        let response = self
            .post(&format!("/rest/api/2/issue/{key}/attachments"))
            .header(NO_XSRF_CHECK.0, NO_XSRF_CHECK.1)
            .multipart(form)
            .send()?;
        Self::checked(response).map(drop)
    }

    /// Builds an authenticated POST request to `path`.
    fn post(&self, path: &str) -> blocking::RequestBuilder {
        self.http
            .post(format!("{}{path}", self.base_url))
            .basic_auth(
                &self.credentials.username,
                Some(&self.credentials.password),
            )
    }

    /// Turns a non-success response into an [`Error::Tracker`].
    fn checked(response: blocking::Response) -> Result<blocking::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::Tracker {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            })
        }
    }
}
