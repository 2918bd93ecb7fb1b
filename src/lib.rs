//! Kakolog: an archived live chat replay extractor
//!
//! This crate walks the undocumented continuation-token pagination protocol
//! behind YouTube's chat replay, normalizing the heterogeneous chat-event
//! wire format into a stable structured record.

pub mod batch;
pub mod config;
pub mod crawler;
pub mod output;
pub mod replay;
pub mod url;

use std::time::Duration;
use thiserror::Error;

/// Main error type for kakolog operations
#[derive(Debug, Error)]
pub enum KakologError {
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("request failed for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("continuation token re-issued by server: {token}")]
    ContinuationCycle { token: String },

    #[error("crawl deadline of {deadline:?} exceeded")]
    DeadlineExceeded { deadline: Duration },

    #[error("crawl cancelled")]
    Cancelled,

    #[error("invalid video URL or id: {0}")]
    InvalidVideoId(String),

    #[error("output error: {0}")]
    Output(#[from] OutputError),

    #[error("batch file error: {0}")]
    Batch(#[from] BatchError),
}

/// Errors locating or parsing the embedded bootstrap data and replay pages
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("continuation token not found in embedded bootstrap data")]
    ContinuationNotFound,

    #[error("failed to parse replay page as JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Errors writing transcript and raw-page artifacts
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize transcript: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to archive raw pages: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Errors reading a batch file of video identifiers
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read batch file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse batch file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("batch file contains no video identifiers")]
    Empty,
}

/// Result type alias for kakolog operations
pub type Result<T> = std::result::Result<T, KakologError>;

// Re-export commonly used types
pub use config::{CancelFlag, CrawlConfig, PaidMessagePolicy};
pub use crawler::ReplayCrawler;
pub use replay::{ChatEvent, CrawlResult, VariantTag};
pub use url::VideoId;
