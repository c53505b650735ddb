//! Debounced lookups for as-you-type input
//!
//! Each keystroke replaces the pending timer; a lookup only starts once the
//! input has been quiet for the configured period. Lookups that already
//! started are left to finish, but every request carries a sequence number
//! and a result is published only while it is the newest request. A slow
//! answer for an old query can never overwrite the answer for a newer one.
//!
//! Must be used from within a Tokio runtime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::article::ArticleResult;
use crate::lookup::ArticleLookupService;

/// An accepted lookup result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupUpdate {
    /// Sequence number of the request that produced this result
    pub seq: u64,
    /// Query as it was typed
    pub query: String,
    pub result: ArticleResult,
}

/// Single-flight debounced wrapper around [`ArticleLookupService`]
pub struct DebouncedLookup {
    service: ArticleLookupService,
    quiet: Duration,
    latest_seq: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
    updates: Arc<watch::Sender<Option<LookupUpdate>>>,
}

impl DebouncedLookup {
    pub fn new(service: ArticleLookupService, quiet: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            service,
            quiet,
            latest_seq: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            updates: Arc::new(tx),
        }
    }

    /// Receiver that observes every accepted result
    pub fn subscribe(&self) -> watch::Receiver<Option<LookupUpdate>> {
        self.updates.subscribe()
    }

    /// Most recently accepted result
    pub fn latest(&self) -> Option<LookupUpdate> {
        self.updates.borrow().clone()
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Register a change of the input text.
    ///
    /// Cancels a timer that has not fired yet and schedules a lookup after
    /// the quiet period. Returns the sequence number of the new request.
    pub fn input(&self, text: &str) -> u64 {
        let seq = self.next_seq();

        let service = self.service.clone();
        let latest_seq = Arc::clone(&self.latest_seq);
        let updates = Arc::clone(&self.updates);
        let quiet = self.quiet;
        let query = text.to_string();

        let timer = tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            // Detached so a later keystroke cannot abort a started request
            tokio::spawn(run_and_publish(service, latest_seq, updates, seq, query));
        });

        self.replace_timer(Some(timer));
        seq
    }

    /// Look up `text` right away, bypassing the quiet period.
    ///
    /// Returns the update if it was accepted, `None` if a newer request
    /// superseded it while it ran.
    pub async fn flush(&self, text: &str) -> Option<LookupUpdate> {
        let seq = self.next_seq();
        self.replace_timer(None);

        run_and_publish(
            self.service.clone(),
            Arc::clone(&self.latest_seq),
            Arc::clone(&self.updates),
            seq,
            text.to_string(),
        )
        .await
    }

    fn next_seq(&self) -> u64 {
        self.latest_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn replace_timer(&self, timer: Option<JoinHandle<()>>) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = std::mem::replace(&mut *pending, timer) {
            previous.abort();
        }
    }
}

impl Drop for DebouncedLookup {
    fn drop(&mut self) {
        self.replace_timer(None);
    }
}

async fn run_and_publish(
    service: ArticleLookupService,
    latest_seq: Arc<AtomicU64>,
    updates: Arc<watch::Sender<Option<LookupUpdate>>>,
    seq: u64,
    query: String,
) -> Option<LookupUpdate> {
    let result = service.lookup_article(&query).await;
    let update = LookupUpdate { seq, query, result };

    let accepted = updates.send_if_modified(|current| {
        let newest = latest_seq.load(Ordering::SeqCst) == seq;
        let newer_than_shown = current.as_ref().map_or(true, |shown| shown.seq < seq);
        if newest && newer_than_shown {
            *current = Some(update.clone());
            true
        } else {
            false
        }
    });

    if accepted {
        Some(update)
    } else {
        tracing::debug!(seq, query = %update.query, "Discarding stale lookup result");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::{Article, Source};
    use crate::dictionary::LocalDictionary;
    use crate::error::FetchError;
    use crate::remote::PageFetcher;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    /// Answers "De" for every word after a per-word delay
    struct DelayedFetcher {
        calls: AtomicUsize,
    }

    impl DelayedFetcher {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }

        fn delay_for(word: &str) -> Duration {
            if word.starts_with("traag") {
                Duration::from_secs(5)
            } else {
                Duration::from_millis(10)
            }
        }
    }

    #[async_trait]
    impl PageFetcher for DelayedFetcher {
        async fn fetch(&self, word: &str) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Self::delay_for(word)).await;
            Ok(format!("<h1>De {}</h1>", word))
        }
    }

    fn debounced(fetcher: Arc<DelayedFetcher>) -> DebouncedLookup {
        let dictionary = LocalDictionary::parse("huis|het\n").unwrap();
        let service = ArticleLookupService::new(Arc::new(dictionary), fetcher);
        DebouncedLookup::new(service, Duration::from_millis(300))
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_input_runs_one_lookup() {
        let fetcher = Arc::new(DelayedFetcher::new());
        let lookup = debounced(fetcher.clone());
        let mut rx = lookup.subscribe();

        lookup.input("f");
        lookup.input("fi");
        let seq = lookup.input("fiets");

        rx.changed().await.unwrap();
        let update = rx.borrow().clone().unwrap();

        assert_eq!(update.seq, seq);
        assert_eq!(update.query, "fiets");
        assert_eq!(update.result.full_word(), "de fiets");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_happens_before_quiet_period() {
        let fetcher = Arc::new(DelayedFetcher::new());
        let lookup = debounced(fetcher.clone());

        lookup.input("huis");
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(lookup.latest().is_none());

        tokio::time::sleep(Duration::from_millis(200)).await;
        let update = lookup.latest().unwrap();
        assert_eq!(update.result.article(), Article::Het);
        assert_eq!(update.result.source(), Source::Local);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_stale_result_is_discarded() {
        let fetcher = Arc::new(DelayedFetcher::new());
        let lookup = debounced(fetcher.clone());

        // Starts a 5s fetch once the timer fires
        lookup.input("traagwoord");
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);

        let seq = lookup.input("tafel");
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(lookup.latest().unwrap().query, "tafel");

        // Let the old request finish; it must not replace the newer answer
        tokio::time::sleep(Duration::from_secs(10)).await;
        let update = lookup.latest().unwrap();
        assert_eq!(update.seq, seq);
        assert_eq!(update.result.full_word(), "de tafel");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_cancels_pending_timer() {
        let fetcher = Arc::new(DelayedFetcher::new());
        let lookup = debounced(fetcher.clone());

        lookup.input("fie");
        let update = lookup.flush("fiets").await.unwrap();
        assert_eq!(update.result.full_word(), "de fiets");

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(lookup.latest().unwrap().query, "fiets");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_superseded_returns_none() {
        let fetcher = Arc::new(DelayedFetcher::new());
        let lookup = Arc::new(debounced(fetcher));

        let slow = {
            let lookup = Arc::clone(&lookup);
            tokio::spawn(async move { lookup.flush("traagwoord").await })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;

        let fast = lookup.flush("tafel").await;
        assert!(fast.is_some());
        assert!(slow.await.unwrap().is_none());
        assert_eq!(lookup.latest().unwrap().query, "tafel");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_publishes_empty_result() {
        let lookup = debounced(Arc::new(DelayedFetcher::new()));
        let update = lookup.flush("   ").await.unwrap();
        assert_eq!(update.result, ArticleResult::empty());
    }
}
