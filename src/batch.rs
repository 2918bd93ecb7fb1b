//! Batch file parsing
//!
//! A batch file is a JSON list of video identifiers, in either of two
//! shapes: a plain array of id/URL strings, or the object an upstream
//! playlist-listing tool emits (`{"items": [{"id": ...}, ...]}`).

use crate::url::VideoId;
use crate::{BatchError, KakologError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BatchFile {
    Ids(Vec<String>),
    Playlist { items: Vec<BatchItem> },
}

#[derive(Debug, Deserialize)]
struct BatchItem {
    id: String,
}

/// Loads the video identifiers listed in a batch file, in file order
pub fn load_batch(path: &Path) -> Result<Vec<VideoId>> {
    let contents = fs::read_to_string(path).map_err(BatchError::Io)?;
    let parsed: BatchFile = serde_json::from_str(&contents).map_err(BatchError::Parse)?;

    let raw_ids = match parsed {
        BatchFile::Ids(ids) => ids,
        BatchFile::Playlist { items } => items.into_iter().map(|item| item.id).collect(),
    };
    if raw_ids.is_empty() {
        return Err(KakologError::Batch(BatchError::Empty));
    }

    raw_ids.iter().map(|raw| raw.parse()).collect()
}
