//! Output artifacts
//!
//! Consumes a finished [`crate::replay::CrawlResult`]:
//! - the normalized transcript, one JSON array per video
//! - raw continuation pages (debug only), one file per page, archived into
//!   a single zip container afterwards

mod json;
mod raw;

pub use json::write_transcript;
pub use raw::{archive_raw_dir, write_raw_pages};
