//! Request limiter for the Sheets API
//!
//! Caps the number of in-flight HTTP requests a [`SheetsClient`](super::SheetsClient)
//! issues. This is a quota guard for the transport only; it does not serialize
//! writes to overlapping cells.

use log::debug;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use super::store::StoreError;

/// Semaphore-based limiter shared by clones of the same client
#[derive(Debug, Clone)]
pub struct RequestLimiter {
    semaphore: Arc<Semaphore>,
    max_concurrent_requests: usize,
}

impl RequestLimiter {
    /// A limit of zero is raised to one
    pub fn new(max_concurrent_requests: usize) -> Self {
        let max_concurrent_requests = max_concurrent_requests.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent_requests)),
            max_concurrent_requests,
        }
    }

    /// Wait for a permit. The permit is released when dropped.
    pub async fn acquire(&self) -> Result<OwnedSemaphorePermit, StoreError> {
        if self.semaphore.available_permits() == 0 {
            debug!(
                "Request limiter: waiting for permit ({} in use)",
                self.max_concurrent_requests
            );
        }

        self.semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| StoreError::Other("request limiter closed".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{Duration, timeout};

    #[tokio::test]
    async fn test_limiter_caps_in_flight_requests() {
        let limiter = RequestLimiter::new(2);

        let p1 = limiter.acquire().await.unwrap();
        let _p2 = limiter.acquire().await.unwrap();
        assert!(timeout(Duration::from_millis(20), limiter.acquire()).await.is_err());

        drop(p1);
        assert!(timeout(Duration::from_millis(500), limiter.acquire()).await.is_ok());
    }

    #[tokio::test]
    async fn test_acquire_waits_for_release() {
        let limiter = RequestLimiter::new(1);
        let limiter_clone = limiter.clone();

        let permit = limiter.acquire().await.unwrap();

        let handle = tokio::spawn(async move {
            let _permit = limiter_clone.acquire().await.unwrap();
            true
        });

        tokio::time::sleep(Duration::from_millis(10)).await;
        drop(permit);

        let result = timeout(Duration::from_millis(500), handle).await;
        assert!(matches!(result, Ok(Ok(true))));
    }

    #[tokio::test]
    async fn test_zero_limit_still_allows_one_request() {
        let limiter = RequestLimiter::new(0);
        assert!(timeout(Duration::from_millis(500), limiter.acquire()).await.is_ok());
    }
}
