//! In-process single-flight response cache.
//!
//! [`ResponseCache`] memoizes the result of an async computation per string
//! key for the lifetime of the process. Under concurrent calls with the
//! same key, at most one computation runs; the other callers wait for its
//! result. Failed computations are not cached, so a later call may retry.
//!
//! The cache is passed to its consumers as an explicit dependency rather
//! than held in a global.

use std::collections::HashMap;
use std::error::Error;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};
use tracing::debug;

/// Single-flight memoization map from string keys to computed values.
///
/// Values are handed out as clones of the cached entry. No TTL and no
/// eviction: entries live until the process exits.
#[derive(Debug, Default)]
pub struct ResponseCache<V> {
    entries: Mutex<HashMap<String, Arc<OnceCell<V>>>>,
}

impl<V: Clone> ResponseCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key`, computing it on first use.
    ///
    /// `compute` is only invoked on a cache miss. Concurrent callers with
    /// the same key share one in-flight computation; the map lock is never
    /// held across the computation itself.
    ///
    /// # Errors
    ///
    /// Propagates the computation's error. The error is not cached.
    pub async fn get_or_compute<F, Fut>(&self, key: &str, compute: F) -> Result<V, Box<dyn Error>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, Box<dyn Error>>>,
    {
        let cell = {
            let mut entries = self.entries.lock().await;
            entries
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        if let Some(value) = cell.get() {
            debug!(key, "Cache hit");
            return Ok(value.clone());
        }

        let value = cell.get_or_try_init(compute).await?;
        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_second_call_is_a_cache_hit() {
        let cache: ResponseCache<String> = ResponseCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let value = cache
                .get_or_compute("k", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("v".to_string())
                })
                .await
                .unwrap();
            assert_eq!(value, "v");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_one_computation() {
        let cache: ResponseCache<String> = ResponseCache::new();
        let calls = AtomicUsize::new(0);

        let first = cache.get_or_compute("k", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok("v".to_string())
        });
        let second = cache.get_or_compute("k", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok("other".to_string())
        });

        let (a, b) = tokio::join!(first, second);
        assert_eq!(a.unwrap(), "v");
        assert_eq!(b.unwrap(), "v");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_distinct_keys_compute_separately() {
        let cache: ResponseCache<String> = ResponseCache::new();
        let calls = AtomicUsize::new(0);

        for key in ["a", "b"] {
            cache
                .get_or_compute(key, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(key.to_string())
                })
                .await
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cache: ResponseCache<String> = ResponseCache::new();
        let calls = AtomicUsize::new(0);

        let failed = cache
            .get_or_compute("k", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<String, _>("network down".into())
            })
            .await;
        assert!(failed.is_err());

        let value = cache
            .get_or_compute("k", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("v".to_string())
            })
            .await
            .unwrap();

        assert_eq!(value, "v");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
