// SPDX-License-Identifier: MPL-2.0
//! Feed input: media records and feed file loading.

mod record;

pub use record::{sample_feed, AspectRatio, MediaRecord};

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct FeedFile {
    #[serde(default)]
    videos: Vec<MediaRecord>,
}

/// Loads an ordered sequence of media records from a TOML feed file.
///
/// The file holds a list of `[[videos]]` tables matching [`MediaRecord`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_feed(path: &Path) -> Result<Vec<MediaRecord>> {
    let content = fs::read_to_string(path)?;
    let feed: FeedFile =
        toml::from_str(&content).map_err(|e| Error::Feed(format!("{}: {}", path.display(), e)))?;
    Ok(feed.videos)
}
