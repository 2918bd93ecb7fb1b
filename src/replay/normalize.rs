//! Chat variant normalization
//!
//! Maps raw chat-action records onto [`ChatEvent`]s. Each action nests its
//! payload item behind a fixed path; the item is keyed by exactly one
//! renderer tag, and dispatch on that tag decides which fields survive into
//! the normalized record. Unknown tags are logged and skipped, never fatal:
//! the platform adds renderer kinds without notice and a transcript crawl
//! must shrug them off.

use crate::config::PaidMessagePolicy;
use serde_json::Value;

use super::types::{ChatEvent, VariantTag};

/// Path from a raw action to its chat item
///
/// Superchats appear a second time as ticker actions (the bar pinned above
/// the chat pane); those carry no item at this path and are skipped, which
/// is what keeps them from being double-counted.
const ITEM_POINTER: &str = "/replayChatItemAction/actions/0/addChatItemAction/item";

/// Normalizes one action batch into chat events, preserving batch order
///
/// Pure function of its inputs: no state is kept between calls.
pub fn normalize_batch(actions: &[Value], policy: PaidMessagePolicy) -> Vec<ChatEvent> {
    actions
        .iter()
        .filter_map(|action| normalize_action(action, policy))
        .collect()
}

/// Normalizes a single action to zero or one chat event
fn normalize_action(action: &Value, policy: PaidMessagePolicy) -> Option<ChatEvent> {
    let item = action.pointer(ITEM_POINTER)?;
    let (key, renderer) = variant_entry(item)?;
    let variant = VariantTag::from_key(key);

    match variant {
        VariantTag::TextMessage => Some(ChatEvent {
            timestamp: timestamp(renderer),
            author_id: author_id(renderer),
            author_name: author_name(renderer),
            message: message_text(renderer),
            super_chat_amount: None,
            variant,
        }),

        VariantTag::PaidMessage => {
            let message = message_text(renderer);
            if message.is_none() && policy == PaidMessagePolicy::DropEmpty {
                tracing::debug!("dropping superchat without message text");
                return None;
            }
            Some(ChatEvent {
                timestamp: timestamp(renderer),
                author_id: author_id(renderer),
                author_name: author_name(renderer),
                message,
                super_chat_amount: super_chat_amount(renderer),
                variant,
            })
        }

        // No stable text payload on these; nothing to transcribe
        VariantTag::PaidSticker
        | VariantTag::LegacyPaidMessage
        | VariantTag::ViewerEngagementMessage
        | VariantTag::PlaceholderItem => None,

        VariantTag::Unknown(ref unknown_key) => {
            tracing::warn!("unknown chat item renderer: {}", unknown_key);
            None
        }
    }
}

/// The item's single top-level key identifies its renderer variant
fn variant_entry(item: &Value) -> Option<(&str, &Value)> {
    item.as_object()
        .and_then(|map| map.iter().next())
        .map(|(key, renderer)| (key.as_str(), renderer))
}

/// Platform-supplied display timestamp, kept opaque
fn timestamp(renderer: &Value) -> String {
    simple_text(renderer, "timestampText").unwrap_or_default()
}

fn author_id(renderer: &Value) -> Option<String> {
    renderer
        .get("authorExternalChannelId")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

fn author_name(renderer: &Value) -> Option<String> {
    simple_text(renderer, "authorName")
}

fn super_chat_amount(renderer: &Value) -> Option<String> {
    simple_text(renderer, "purchaseAmountText")
}

/// Concatenates all `message.runs[].text` in order with no separator
///
/// Emoji runs carry no `text` and contribute nothing. `None` means the
/// message path itself is absent, which is distinct from an empty string.
fn message_text(renderer: &Value) -> Option<String> {
    let runs = renderer.pointer("/message/runs")?.as_array()?;
    Some(
        runs.iter()
            .filter_map(|run| run.get("text").and_then(Value::as_str))
            .collect(),
    )
}

fn simple_text(renderer: &Value, field: &str) -> Option<String> {
    renderer
        .get(field)
        .and_then(|value| value.get("simpleText"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}
