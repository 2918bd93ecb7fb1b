//! Chat replay wire-format handling
//!
//! This module contains the pure, request-free half of the system:
//! - locating the first continuation token inside the watch page HTML
//! - decoding continuation JSON pages into an action batch plus next token
//! - normalizing the tagged renderer variants into [`ChatEvent`] records

mod bootstrap;
mod normalize;
mod page;
mod types;

pub use bootstrap::extract_first_continuation;
pub use normalize::normalize_batch;
pub use page::{decode_page, DecodedPage};
pub use types::{ChatEvent, CrawlResult, RawPage, VariantTag};
