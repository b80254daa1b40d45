// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! JSON document writer.

use std::{fs::File, io::BufWriter, path::Path};

use crate::{error::Result, feature::Feature};

/// Writes `features` to `path` as a single compact JSON array.
///
/// # Errors
///
/// If the file cannot be created or serialization fails.
pub fn write(path: impl AsRef<Path>, features: &[Feature]) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), features)?;
    Ok(())
}
