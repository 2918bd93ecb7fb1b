use serde::{Serialize, Serializer};

/// The untransformed decoded JSON body of one continuation response
///
/// Retained only when raw capture is enabled, for audit and debugging; the
/// normalization pipeline never reads these back.
pub type RawPage = serde_json::Value;

/// Renderer variants observed in the chat replay wire format
///
/// The wire item is keyed by exactly one of these renderer names; anything
/// not recognized maps to `Unknown` with the raw key preserved, so a new
/// platform variant shows up in logs instead of silently disappearing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantTag {
    /// Plain chat message
    TextMessage,
    /// Superchat: paid message with an amount and optional text
    PaidMessage,
    /// Paid sticker, no stable text payload
    PaidSticker,
    /// New-member announcement
    LegacyPaidMessage,
    /// Platform system message
    ViewerEngagementMessage,
    /// Removed or placeholder comment
    PlaceholderItem,
    /// Unrecognized renderer key
    Unknown(String),
}

impl VariantTag {
    /// Maps a wire renderer key to its variant tag
    pub fn from_key(key: &str) -> Self {
        match key {
            "liveChatTextMessageRenderer" => Self::TextMessage,
            "liveChatPaidMessageRenderer" => Self::PaidMessage,
            "liveChatPaidStickerRenderer" => Self::PaidSticker,
            "liveChatLegacyPaidMessageRenderer" => Self::LegacyPaidMessage,
            "liveChatViewerEngagementMessageRenderer" => Self::ViewerEngagementMessage,
            "liveChatPlaceholderItemRenderer" => Self::PlaceholderItem,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The wire renderer key this tag corresponds to
    pub fn as_key(&self) -> &str {
        match self {
            Self::TextMessage => "liveChatTextMessageRenderer",
            Self::PaidMessage => "liveChatPaidMessageRenderer",
            Self::PaidSticker => "liveChatPaidStickerRenderer",
            Self::LegacyPaidMessage => "liveChatLegacyPaidMessageRenderer",
            Self::ViewerEngagementMessage => "liveChatViewerEngagementMessageRenderer",
            Self::PlaceholderItem => "liveChatPlaceholderItemRenderer",
            Self::Unknown(key) => key,
        }
    }
}

impl Serialize for VariantTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_key())
    }
}

/// One normalized chat event
///
/// Immutable once created; which optional fields are populated is determined
/// by the variant. The timestamp is the platform-supplied display string,
/// preserved opaque rather than reinterpreted as a duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEvent {
    pub timestamp: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_chat_amount: Option<String>,

    pub variant: VariantTag,
}

/// Everything one video's crawl produced, owned by the caller after `run()`
#[derive(Debug, Clone)]
pub struct CrawlResult {
    pub video_id: String,

    /// Normalized events, in action-batch order within each page and in
    /// continuation-chain order across pages
    pub events: Vec<ChatEvent>,

    /// Untransformed pages, empty unless raw capture was enabled
    pub raw_pages: Vec<RawPage>,

    /// Number of continuation pages consumed
    pub pages_fetched: usize,
}
