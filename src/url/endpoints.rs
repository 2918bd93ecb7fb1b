//! Replay endpoint construction
//!
//! Two endpoints matter:
//! - the canonical watch page, which serves the HTML embedding the bootstrap
//!   JSON on the first request;
//! - the replay continuation endpoint, which serves one JSON page per
//!   continuation token. `pbj=1` requests JSON rendering of the endpoint.

use super::VideoId;

/// Builds the canonical watch page URL for a video
pub fn watch_url(base_url: &str, video_id: &VideoId) -> String {
    format!("{}/watch?v={}", base_url, video_id)
}

/// Builds the replay continuation endpoint URL for a token
///
/// Tokens are opaque and already URL-safe as issued by the server; they are
/// interpolated verbatim.
pub fn continuation_url(base_url: &str, token: &str) -> String {
    format!(
        "{}/live_chat_replay/get_live_chat_replay?continuation={}&pbj=1",
        base_url, token
    )
}
