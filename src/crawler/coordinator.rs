//! Crawl coordination: the sequential continuation walk
//!
//! A replay is paginated behind a chain of opaque continuation tokens, each
//! discovered only from the previous response, so one video's crawl is
//! inherently sequential. The coordinator owns that loop: fetch, classify,
//! route HTML to the bootstrap extractor and JSON to the normalizer, advance
//! the cursor, stop when the server stops issuing tokens.
//!
//! Additions over the bare protocol walk: a seen-token cycle guard (a
//! malformed response that re-issues a token would otherwise loop forever),
//! an overall crawl deadline, and a cooperative cancellation flag, both
//! checked at each iteration.

use crate::config::CrawlConfig;
use crate::crawler::fetcher::{build_http_client, fetch_page, PageBody};
use crate::replay::{
    decode_page, extract_first_continuation, normalize_batch, ChatEvent, CrawlResult, RawPage,
};
use crate::url::{continuation_url, watch_url, VideoId};
use crate::{ExtractionError, KakologError, Result};
use reqwest::Client;
use serde_json::Value;
use std::collections::HashSet;
use std::time::Instant;

/// Walks one video's chat replay from watch page to final continuation
///
/// A crawler is cheap to construct and holds no per-crawl state; `run` may
/// be called for any number of videos, and distinct crawlers are fully
/// independent, so callers are free to schedule videos in parallel.
pub struct ReplayCrawler {
    config: CrawlConfig,
    client: Client,
}

impl ReplayCrawler {
    /// Creates a crawler, building its HTTP client once from the config
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let client = build_http_client(&config).map_err(|source| KakologError::Http {
            url: config.base_url.clone(),
            source,
        })?;
        Ok(Self { config, client })
    }

    /// Crawls the full chat replay of one video
    ///
    /// Returns the ordered event sequence (plus raw pages when capture is
    /// enabled). Any error aborts this video's crawl entirely; batch
    /// callers catch per video and continue.
    pub async fn run(&self, video_id: &VideoId) -> Result<CrawlResult> {
        tracing::info!("start chat replay crawl, video id: {}", video_id);
        let started = Instant::now();

        let mut events: Vec<ChatEvent> = Vec::new();
        let mut raw_pages: Vec<RawPage> = Vec::new();
        let mut pages_fetched = 0usize;
        let mut seen_tokens: HashSet<String> = HashSet::new();
        let mut url = watch_url(&self.config.base_url, video_id);

        loop {
            self.check_budget(started)?;

            match fetch_page(&self.client, &url).await? {
                PageBody::InitialHtml(body) => {
                    let token = extract_first_continuation(&body)?;
                    tracing::debug!("first continuation: '{}'", token);
                    seen_tokens.insert(token.clone());
                    url = continuation_url(&self.config.base_url, &token);
                }

                PageBody::ContinuationJson(body) => {
                    let page: Value =
                        serde_json::from_str(&body).map_err(ExtractionError::InvalidJson)?;

                    let decoded = decode_page(&page);
                    events.extend(normalize_batch(
                        decoded.actions,
                        self.config.paid_message_policy,
                    ));
                    let next = decoded.next_continuation;

                    pages_fetched += 1;
                    if self.config.capture_raw {
                        raw_pages.push(page);
                    }

                    match next {
                        Some(token) => {
                            if !seen_tokens.insert(token.clone()) {
                                return Err(KakologError::ContinuationCycle { token });
                            }
                            tracing::debug!("next continuation: '{}'", token);
                            url = continuation_url(&self.config.base_url, &token);
                        }
                        None => {
                            tracing::debug!("end of live chat replay");
                            break;
                        }
                    }
                }
            }
        }

        tracing::info!(
            "crawl finished for {}: {} events over {} pages in {:?}",
            video_id,
            events.len(),
            pages_fetched,
            started.elapsed()
        );

        Ok(CrawlResult {
            video_id: video_id.to_string(),
            events,
            raw_pages,
            pages_fetched,
        })
    }

    /// Cancellation and deadline are both checked once per loop iteration
    fn check_budget(&self, started: Instant) -> Result<()> {
        if self.config.cancel.is_cancelled() {
            return Err(KakologError::Cancelled);
        }
        if let Some(deadline) = self.config.crawl_deadline {
            if started.elapsed() > deadline {
                return Err(KakologError::DeadlineExceeded { deadline });
            }
        }
        Ok(())
    }
}
