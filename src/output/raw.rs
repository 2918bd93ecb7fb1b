//! Raw-page artifacts
//!
//! Debug mode keeps the untransformed JSON body of every continuation page:
//! one pretty-printed file per page under `<out_dir>/<video_id>/`, named
//! with a zero-padded page counter, afterwards archived into
//! `<out_dir>/<video_id>.zip` with the source directory removed.

use crate::replay::RawPage;
use crate::url::VideoId;
use crate::OutputError;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes one file per raw page, returning the per-video directory
pub fn write_raw_pages(
    out_dir: &Path,
    video_id: &VideoId,
    pages: &[RawPage],
) -> Result<PathBuf, OutputError> {
    let dir = out_dir.join(video_id.as_str());
    fs::create_dir_all(&dir)?;

    for (counter, page) in pages.iter().enumerate() {
        let path = dir.join(format!("{}_raw_live_chat_{:03}.json", video_id, counter));
        fs::write(&path, serde_json::to_string_pretty(page)?)?;
        tracing::debug!("write {}", path.display());
    }

    Ok(dir)
}

/// Archives a raw-page directory into a sibling `<dir>.zip` and removes it
///
/// Entries are stored as `<dir name>/<file name>` so the archive unpacks
/// back into the directory it replaced. An existing archive is overwritten.
pub fn archive_raw_dir(dir: &Path) -> Result<PathBuf, OutputError> {
    let zip_path = dir.with_extension("zip");
    if zip_path.exists() {
        fs::remove_file(&zip_path)?;
    }

    let dir_name = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    entries.sort();

    let mut writer = ZipWriter::new(File::create(&zip_path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in &entries {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        writer.start_file(format!("{}/{}", dir_name, file_name), options)?;
        std::io::copy(&mut File::open(path)?, &mut writer)?;
    }
    writer.finish()?;

    fs::remove_dir_all(dir)?;
    tracing::debug!("archived raw pages to {}", zip_path.display());
    Ok(zip_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_pages_named_by_counter() {
        let dir = tempfile::tempdir().unwrap();
        let video_id: VideoId = "S7qRc7SmMds".parse().unwrap();
        let pages = vec![json!({"page": 0}), json!({"page": 1})];

        let raw_dir = write_raw_pages(dir.path(), &video_id, &pages).unwrap();

        assert!(raw_dir.join("S7qRc7SmMds_raw_live_chat_000.json").exists());
        assert!(raw_dir.join("S7qRc7SmMds_raw_live_chat_001.json").exists());
    }

    #[test]
    fn test_archive_replaces_directory_with_zip() {
        let dir = tempfile::tempdir().unwrap();
        let video_id: VideoId = "S7qRc7SmMds".parse().unwrap();
        let pages = vec![json!({"page": 0}), json!({"page": 1})];

        let raw_dir = write_raw_pages(dir.path(), &video_id, &pages).unwrap();
        let zip_path = archive_raw_dir(&raw_dir).unwrap();

        assert!(zip_path.exists());
        assert!(!raw_dir.exists());

        let mut archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        assert_eq!(archive.len(), 2);
        assert!(archive
            .by_name("S7qRc7SmMds/S7qRc7SmMds_raw_live_chat_000.json")
            .is_ok());
    }

    #[test]
    fn test_archive_overwrites_existing_zip() {
        let dir = tempfile::tempdir().unwrap();
        let video_id: VideoId = "S7qRc7SmMds".parse().unwrap();

        let raw_dir = write_raw_pages(dir.path(), &video_id, &[json!({"page": 0})]).unwrap();
        archive_raw_dir(&raw_dir).unwrap();

        // Second run with more pages replaces the first archive
        let raw_dir = write_raw_pages(
            dir.path(),
            &video_id,
            &[json!({"page": 0}), json!({"page": 1})],
        )
        .unwrap();
        let zip_path = archive_raw_dir(&raw_dir).unwrap();

        let archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        assert_eq!(archive.len(), 2);
    }
}
