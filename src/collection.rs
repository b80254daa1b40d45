// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Aggregation of a feature files directory into an ordered [`Feature`]
//! collection.
//!
//! Files are expected to be named `<integer>_<description>.feature`; the
//! integer prefix becomes the [`Feature::id`] and orders the collection.
//! Identifiers are informally unique: duplicates survive, and the stable
//! sort keeps their listing order.

use std::{fs, path::Path};

use tracing::info;

use crate::{
    error::{Error, Result},
    feature::Feature,
    parse,
};

/// Loads every `*.feature` file under `dir` and returns the parsed
/// [`Feature`]s, sorted by ascending [`Feature::id`].
///
/// # Errors
///
/// - [`Error::NoFeatureFilesFound`], if `dir` contains no `*.feature` files.
/// - [`Error::InvalidFeatureFileName`], if a file name doesn't start with a
///   numeric identifier.
/// - Any error of [`parse::feature_file()`]; a single malformed file aborts
///   the whole batch rather than being silently omitted.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<Feature>> {
    let dir = dir.as_ref();
    let mut features = vec![];

    for file_name in list_feature_files(dir)? {
        let id = feature_id(&file_name)?;
        let content = fs::read_to_string(dir.join(&file_name))?;
        info!(file = %file_name, id, "parsing feature file");
        features.push(parse::feature_file(id, file_name, &content)?);
    }

    features.sort_by_key(|f| f.id);
    Ok(features)
}

/// Lists the names of `*.feature` files directly under `dir`.
///
/// # Errors
///
/// [`Error::NoFeatureFilesFound`], if there are none.
fn list_feature_files(dir: &Path) -> Result<Vec<String>> {
    let walker = globwalk::GlobWalkerBuilder::new(dir, "*.feature")
        .max_depth(1)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| unreachable!("valid glob pattern: {e}"));

    let files = walker
        .filter_map(std::result::Result::ok)
        .filter_map(|entry| {
            entry.file_name().to_str().map(ToOwned::to_owned)
        })
        .collect::<Vec<_>>();

    if files.is_empty() {
        return Err(Error::NoFeatureFilesFound {
            dir: dir.display().to_string(),
        });
    }
    Ok(files)
}

/// Derives the numeric feature identifier from a file name: the substring
/// before the first underscore.
///
/// # Errors
///
/// [`Error::InvalidFeatureFileName`], if that substring isn't an integer.
fn feature_id(file_name: &str) -> Result<u64> {
    file_name
        .split('_')
        .next()
        .and_then(|prefix| prefix.parse().ok())
        .ok_or_else(|| Error::InvalidFeatureFileName {
            name: file_name.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn feature_content(name: &str) -> String {
        format!(
            "Feature: {name}\n    \
             Scenario: check {name}\n        \
             Given: something\n\n",
        )
    }

    fn write_features(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), feature_content(name)).unwrap();
        }
    }

    #[test]
    fn aggregates_in_ascending_id_order() {
        let dir = tempfile::tempdir().unwrap();
        write_features(
            dir.path(),
            &["003_x.feature", "001_y.feature", "002_z.feature"],
        );

        let features = load_dir(dir.path()).unwrap();

        let ids = features.iter().map(|f| f.id).collect::<Vec<_>>();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(features[0].source_file_name, "001_y.feature");
    }

    #[test]
    fn strips_leading_zeroes_from_ids() {
        let dir = tempfile::tempdir().unwrap();
        write_features(dir.path(), &["007_bond.feature"]);

        let features = load_dir(dir.path()).unwrap();
        assert_eq!(features[0].id, 7);
    }

    #[test]
    fn ignores_non_feature_files() {
        let dir = tempfile::tempdir().unwrap();
        write_features(dir.path(), &["001_y.feature"]);
        fs::write(dir.path().join("notes.txt"), "not a feature").unwrap();

        let features = load_dir(dir.path()).unwrap();
        assert_eq!(features.len(), 1);
    }

    #[test]
    fn empty_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::NoFeatureFilesFound { .. }));
    }

    #[test]
    fn non_numeric_prefix_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_features(dir.path(), &["login_test.feature"]);

        let err = load_dir(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidFeatureFileName { name } if name == "login_test.feature",
        ));
    }

    #[test]
    fn file_name_without_underscore_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_features(dir.path(), &["12.feature"]);

        let err = load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidFeatureFileName { .. }));
    }

    #[test]
    fn duplicate_ids_survive_with_stable_order() {
        let dir = tempfile::tempdir().unwrap();
        write_features(
            dir.path(),
            &["001_first.feature", "001_second.feature"],
        );

        let features = load_dir(dir.path()).unwrap();
        assert_eq!(features.len(), 2);
        assert!(features.iter().all(|f| f.id == 1));
    }
}
