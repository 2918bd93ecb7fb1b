//! Crawler module for walking a video's chat replay
//!
//! This module owns the request side of the system:
//! - building the HTTP client with the mandatory replay headers
//! - fetching and classifying response bodies
//! - the sequential continuation walk itself

mod coordinator;
mod fetcher;

pub use coordinator::ReplayCrawler;
pub use fetcher::{build_http_client, fetch_page, PageBody, DESKTOP_USER_AGENT};
