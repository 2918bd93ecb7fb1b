use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// What to do with a paid message (superchat) that carries no text.
///
/// Observed implementations disagree here, so the behavior is an explicit
/// configuration choice rather than a hardcoded policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaidMessagePolicy {
    /// Drop the event entirely when the message text is absent
    #[default]
    DropEmpty,

    /// Keep the event with timestamp, author, and amount populated
    KeepAmountOnly,
}

/// Cooperative cancellation flag, checked at every crawl loop iteration
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of every crawl holding a clone of this flag
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Per-crawl configuration, threaded explicitly through the crawler
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Base URL of the platform; overridable so tests can point the crawler
    /// at a mock server
    pub base_url: String,

    /// Timeout applied to each individual HTTP request
    pub request_timeout: Duration,

    /// Timeout for establishing a connection
    pub connect_timeout: Duration,

    /// Overall wall-clock budget for one video's crawl; `None` means
    /// unbounded
    pub crawl_deadline: Option<Duration>,

    /// Retain the untransformed JSON body of every continuation page
    pub capture_raw: bool,

    /// Handling of superchats without message text
    pub paid_message_policy: PaidMessagePolicy,

    /// Cooperative cancellation signal
    pub cancel: CancelFlag,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.youtube.com".to_string(),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            crawl_deadline: None,
            capture_raw: false,
            paid_message_policy: PaidMessagePolicy::default(),
            cancel: CancelFlag::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_drops_empty() {
        assert_eq!(PaidMessagePolicy::default(), PaidMessagePolicy::DropEmpty);
    }

    #[test]
    fn test_cancel_flag_shared_across_clones() {
        let flag = CancelFlag::new();
        let clone = flag.clone();
        assert!(!clone.is_cancelled());

        flag.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_default_config_targets_platform() {
        let config = CrawlConfig::default();
        assert_eq!(config.base_url, "https://www.youtube.com");
        assert!(!config.capture_raw);
        assert!(config.crawl_deadline.is_none());
    }
}
