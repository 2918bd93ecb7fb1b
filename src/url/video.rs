use crate::KakologError;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// A YouTube video identifier
///
/// Parses from a bare id (`S7qRc7SmMds`), a watch URL
/// (`https://www.youtube.com/watch?v=S7qRc7SmMds`), or a short link
/// (`https://youtu.be/S7qRc7SmMds`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VideoId {
    type Err = KakologError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(KakologError::InvalidVideoId(input.to_string()));
        }

        if input.contains("://") {
            return from_url(input);
        }

        if looks_like_id(input) {
            Ok(VideoId(input.to_string()))
        } else {
            Err(KakologError::InvalidVideoId(input.to_string()))
        }
    }
}

fn from_url(input: &str) -> Result<VideoId, KakologError> {
    let url =
        Url::parse(input).map_err(|_| KakologError::InvalidVideoId(input.to_string()))?;

    // Short links carry the id as the first path segment
    if url.host_str() == Some("youtu.be") {
        let id = url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|segment| looks_like_id(segment));
        return match id {
            Some(id) => Ok(VideoId(id.to_string())),
            None => Err(KakologError::InvalidVideoId(input.to_string())),
        };
    }

    // Watch URLs carry it in the `v` query parameter
    url.query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| looks_like_id(id))
        .map(VideoId)
        .ok_or_else(|| KakologError::InvalidVideoId(input.to_string()))
}

/// Video ids are URL-safe base64: letters, digits, `-` and `_`
fn looks_like_id(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
