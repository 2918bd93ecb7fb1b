//! Continuation JSON page decoding
//!
//! A continuation page carries two things at fixed paths: the action batch
//! and the next continuation token. Both are optional on the wire. A page
//! with no actions is legitimate, and an absent token is the normal end of
//! replay signal, so neither absence is an error here.

use serde_json::Value;

/// Path to the action batch within a continuation page
const ACTIONS_POINTER: &str = "/response/continuationContents/liveChatContinuation/actions";

/// Path to the next continuation token; index 0 is the replay continuation
const CONTINUATION_POINTER: &str =
    "/response/continuationContents/liveChatContinuation/continuations/0/liveChatReplayContinuationData/continuation";

/// The decoded contents of one continuation page
#[derive(Debug)]
pub struct DecodedPage<'a> {
    /// Raw chat actions, in server order; empty when the page carries none
    pub actions: &'a [Value],

    /// Token for the next page; `None` signals the end of the replay
    pub next_continuation: Option<String>,
}

/// Decodes a continuation page into its action batch and next token
pub fn decode_page(page: &Value) -> DecodedPage<'_> {
    let actions = page
        .pointer(ACTIONS_POINTER)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let next_continuation = page
        .pointer(CONTINUATION_POINTER)
        .and_then(Value::as_str)
        .map(str::to_owned);

    DecodedPage {
        actions,
        next_continuation,
    }
}
