//! URL handling: video identifier parsing and replay endpoint construction

mod endpoints;
mod video;

pub use endpoints::{continuation_url, watch_url};
pub use video::VideoId;
