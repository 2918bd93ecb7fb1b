//! Normalized transcript output

use crate::replay::ChatEvent;
use crate::url::VideoId;
use crate::OutputError;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the normalized transcript as `<out_dir>/<video_id>.json`
///
/// The file is an ordered JSON array of chat events; the output directory
/// is created if missing.
pub fn write_transcript(
    out_dir: &Path,
    video_id: &VideoId,
    events: &[ChatEvent],
) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(out_dir)?;

    let path = out_dir.join(format!("{}.json", video_id));
    let json = serde_json::to_string_pretty(events)?;
    fs::write(&path, json)?;

    tracing::debug!("write {}", path.display());
    Ok(path)
}
