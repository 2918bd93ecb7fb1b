//! HTTP fetching for the replay crawl
//!
//! Every request carries two mandatory headers: a desktop-browser
//! user-agent and the Japanese accept-language. The continuation endpoint
//! refuses or alters replay responses without them, so both are fixed
//! constants here rather than knobs.

use crate::config::CrawlConfig;
use crate::{KakologError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Client;

/// Desktop browser user-agent string sent on every request
pub const DESKTOP_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/78.0.3904.108 Safari/537.36";

/// Locale requested from the platform
const ACCEPT_LANGUAGE_JA: &str = "ja";

/// Initial watch pages start with this literal marker; everything else the
/// replay endpoints serve is JSON
const HTML_DOCTYPE_MARKER: &str = "<!doctype html>";

/// A fetched response body, classified by kind
#[derive(Debug)]
pub enum PageBody {
    /// Full HTML watch page, served on the first request of a crawl
    InitialHtml(String),

    /// Continuation JSON page
    ContinuationJson(String),
}

/// Builds the HTTP client used for a whole crawl
///
/// Timeouts come from the crawl configuration; headers are fixed.
pub fn build_http_client(config: &CrawlConfig) -> std::result::Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_JA));

    Client::builder()
        .user_agent(DESKTOP_USER_AGENT)
        .default_headers(headers)
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues one GET and classifies the body
///
/// # Errors
///
/// Any non-2xx status or network failure is fatal to the crawl; there is no
/// retry at this layer.
pub async fn fetch_page(client: &Client, url: &str) -> Result<PageBody> {
    tracing::debug!("request url: {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| KakologError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(KakologError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| KakologError::Http {
            url: url.to_string(),
            source,
        })?;

    Ok(classify_body(body))
}

fn classify_body(body: String) -> PageBody {
    if body.starts_with(HTML_DOCTYPE_MARKER) {
        PageBody::InitialHtml(body)
    } else {
        PageBody::ContinuationJson(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = CrawlConfig::default();
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_doctype_body_is_initial_html() {
        let body = "<!doctype html><html><head></head><body></body></html>".to_string();
        assert!(matches!(classify_body(body), PageBody::InitialHtml(_)));
    }

    #[test]
    fn test_json_body_is_continuation_page() {
        let body = r#"{"response":{}}"#.to_string();
        assert!(matches!(classify_body(body), PageBody::ContinuationJson(_)));
    }

    #[test]
    fn test_classification_is_prefix_sensitive() {
        // The marker must lead the body; a doctype later in the text does
        // not make it an initial page
        let body = r#"{"html":"<!doctype html>"}"#.to_string();
        assert!(matches!(classify_body(body), PageBody::ContinuationJson(_)));
    }
}
