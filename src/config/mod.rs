//! Configuration for replay crawls
//!
//! There is no configuration file: every knob is set by the caller (the CLI
//! binary, or a test) and threaded explicitly through the crawler. Nothing
//! in this crate reads process-wide state.

mod types;

pub use types::{CancelFlag, CrawlConfig, PaidMessagePolicy};
