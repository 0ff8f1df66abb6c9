//! Time-bounded memory of recent fetches.

use anyhow::Result;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tracing::debug;

use super::client::{fetch_top_n, PageSource};
use super::types::{FetchRequest, CACHE_TTL};
use crate::article::ArticleRecord;
use crate::TARGET_WEB_REQUEST;

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Key/value store whose entries vanish after a fixed time to live.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, CacheEntry<V>>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| &entry.value)
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, CacheEntry::new(value, self.ttl));
    }

    /// Drops expired entries, returning how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Wraps a [`PageSource`] so identical requests within the TTL reuse the last
/// result.
pub struct CachedFetcher<S> {
    source: S,
    cache: TtlCache<FetchRequest, Vec<ArticleRecord>>,
}

impl<S: PageSource> CachedFetcher<S> {
    pub fn new(source: S) -> Self {
        Self::with_ttl(source, CACHE_TTL)
    }

    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        Self {
            source,
            cache: TtlCache::new(ttl),
        }
    }

    pub async fn fetch(&mut self, request: &FetchRequest) -> Result<Vec<ArticleRecord>> {
        if let Some(records) = self.cache.get(request) {
            debug!(
                target: TARGET_WEB_REQUEST,
                "Serving {} cached articles", records.len()
            );
            return Ok(records.clone());
        }

        self.cache.purge_expired();
        let records = fetch_top_n(&self.source, request).await?;
        self.cache.insert(request.clone(), records.clone());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::newsdata::NewsDataPage;
    use std::cell::Cell;

    struct CountingSource {
        calls: Cell<usize>,
    }

    impl PageSource for CountingSource {
        async fn fetch_page(
            &self,
            _request: &FetchRequest,
            _page: Option<&str>,
        ) -> Result<NewsDataPage> {
            self.calls.set(self.calls.get() + 1);
            Ok(NewsDataPage {
                status: "success".to_string(),
                results: Some(vec![ArticleRecord::new(format!("call {}", self.calls.get()))]),
                next_page: None,
            })
        }
    }

    #[test]
    fn test_entries_expire() {
        let mut cache = TtlCache::new(Duration::ZERO);
        cache.insert("k", 1);
        assert_eq!(cache.get(&"k"), None);
        assert_eq!(cache.purge_expired(), 1);
        assert!(cache.is_empty());

        let mut cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("k", 1);
        assert_eq!(cache.get(&"k"), Some(&1));
        assert_eq!(cache.purge_expired(), 0);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_request_is_served_from_cache() {
        let mut fetcher = CachedFetcher::new(CountingSource { calls: Cell::new(0) });
        let request = FetchRequest::default();

        let first = fetcher.fetch(&request).await.unwrap();
        let second = fetcher.fetch(&request).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(fetcher.source.calls.get(), 1);

        let other = FetchRequest {
            count: 20,
            ..FetchRequest::default()
        };
        fetcher.fetch(&other).await.unwrap();
        assert_eq!(fetcher.source.calls.get(), 2);
    }

    #[tokio::test]
    async fn test_expired_result_is_refetched() {
        let mut fetcher =
            CachedFetcher::with_ttl(CountingSource { calls: Cell::new(0) }, Duration::ZERO);
        let request = FetchRequest::default();

        fetcher.fetch(&request).await.unwrap();
        let again = fetcher.fetch(&request).await.unwrap();
        assert_eq!(again[0].title(), "call 2");
    }
}
