// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Consolidated error type for the whole pipeline.
//!
//! Parse errors are fatal to the batch: a malformed feature file aborts
//! processing instead of silently omitting a [`Feature`]. The only
//! logged-and-skipped failure lives in [`tracker::submit`], for image
//! attachments, which are auxiliary to the ticket itself.
//!
//! [`Feature`]: crate::Feature
//! [`tracker::submit`]: crate::tracker::submit

use std::io;

use derive_more::{Display, Error};

/// Top-level error of any pipeline operation.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Feature file contains no `Feature:` header line.
    #[display("no `Feature:` header line found in `{file}`")]
    MissingFeatureHeader {
        /// Name of the offending feature file.
        #[error(not(source))]
        file: String,
    },

    /// Line contains the `!image_` marker, but no valid image file name
    /// follows it.
    #[display(
        "malformed image reference (expected `!image_<NAME>.png|thumbnail!`) \
         in line: {line}"
    )]
    MalformedImageTag {
        /// The offending line, whitespace-normalized.
        #[error(not(source))]
        line: String,
    },

    /// Feature file name doesn't start with a numeric identifier.
    #[display(
        "expected feature file named `<integer>_<description>.feature`, \
         got `{name}`"
    )]
    InvalidFeatureFileName {
        /// The offending file name.
        #[error(not(source))]
        name: String,
    },

    /// Feature files directory contains no `*.feature` files.
    #[display("no *.feature files found in directory `{dir}`")]
    NoFeatureFilesFound {
        /// Path of the searched directory.
        #[error(not(source))]
        dir: String,
    },

    /// Tracker credential is absent from the process environment.
    #[display("`{name}` is not set in the process environment")]
    MissingCredential {
        /// Name of the absent environment variable.
        #[error(not(source))]
        name: &'static str,
    },

    /// I/O error during file operations.
    #[display("I/O operation failed: {_0}")]
    Io(io::Error),

    /// JSON serialization failure.
    #[display("JSON serialization failed: {_0}")]
    Json(serde_json::Error),

    /// CSV writing failure.
    #[display("CSV writing failed: {_0}")]
    Csv(csv::Error),

    /// Transport-level tracker failure.
    #[display("tracker request failed: {_0}")]
    Http(reqwest::Error),

    /// Tracker answered with a non-success status.
    #[display("tracker rejected request with status {status}: {message}")]
    Tracker {
        /// HTTP status code of the response.
        status: u16,

        /// Response body, as returned by the tracker.
        message: String,
    },
}

/// Result type alias using [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn display_formatting() {
        let err = Error::MissingFeatureHeader {
            file: "001_login.feature".into(),
        };
        assert!(err.to_string().contains("no `Feature:` header line"));
        assert!(err.to_string().contains("001_login.feature"));

        let err = Error::MalformedImageTag { line: "!image_broken".into() };
        assert!(err.to_string().contains("malformed image reference"));

        let err =
            Error::InvalidFeatureFileName { name: "login.feature".into() };
        assert!(err.to_string().contains("<integer>_<description>.feature"));

        let err = Error::NoFeatureFilesFound { dir: "features/".into() };
        assert!(err.to_string().contains("no *.feature files"));
    }

    #[test]
    fn io_conversion_preserves_source() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        assert!(matches!(err, Error::Io(_)));
        assert!(err.source().is_some());
        if let Some(source) = err.source() {
            assert!(source.to_string().contains("file not found"));
        }
    }

    #[test]
    fn json_conversion() {
        let json_err =
            serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("JSON serialization failed"));
    }
}
