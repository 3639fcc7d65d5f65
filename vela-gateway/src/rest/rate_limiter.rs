//! Local request rate limiting.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Sliding-window rate limiter.
///
/// Tracks request timestamps inside a rolling window and blocks (or
/// reports a wait time) once the window is full. Purely local; exchange
/// side limits are surfaced separately as `ExchangeError::RateLimited`.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    timestamps: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    /// Create a rate limiter allowing `max_requests` per `window`.
    #[must_use]
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            timestamps: Mutex::new(VecDeque::with_capacity(max_requests as usize)),
        }
    }

    /// Create a rate limiter allowing `max_requests` per second.
    #[must_use]
    pub fn per_second(max_requests: u32) -> Self {
        Self::new(max_requests, Duration::from_secs(1))
    }

    /// Time to wait before the next request is allowed, if any.
    #[must_use]
    pub fn wait_time(&self) -> Option<Duration> {
        let mut timestamps = self.timestamps.lock();
        let now = Instant::now();
        Self::evict_expired(&mut timestamps, now, self.window);

        if timestamps.len() < self.max_requests as usize {
            return None;
        }

        timestamps
            .front()
            .map(|oldest| (*oldest + self.window).saturating_duration_since(now))
    }

    /// Record a request if the window has room, returning whether it
    /// was admitted.
    pub fn try_acquire(&self) -> bool {
        let mut timestamps = self.timestamps.lock();
        let now = Instant::now();
        Self::evict_expired(&mut timestamps, now, self.window);

        if timestamps.len() < self.max_requests as usize {
            timestamps.push_back(now);
            true
        } else {
            false
        }
    }

    /// Wait until a request slot is available, then claim it.
    pub async fn acquire(&self) {
        loop {
            if self.try_acquire() {
                return;
            }
            let delay = self.wait_time().unwrap_or(Duration::from_millis(10));
            tokio::time::sleep(delay).await;
        }
    }

    /// Number of requests currently inside the window.
    #[must_use]
    pub fn current_count(&self) -> usize {
        let mut timestamps = self.timestamps.lock();
        Self::evict_expired(&mut timestamps, Instant::now(), self.window);
        timestamps.len()
    }

    /// Clear all recorded requests.
    pub fn reset(&self) {
        self.timestamps.lock().clear();
    }

    fn evict_expired(timestamps: &mut VecDeque<Instant>, now: Instant, window: Duration) {
        while let Some(front) = timestamps.front() {
            if now.duration_since(*front) >= window {
                timestamps.pop_front();
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_acquire_within_limit() {
        let limiter = RateLimiter::per_second(3);

        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
        assert_eq!(limiter.current_count(), 3);
    }

    #[test]
    fn test_wait_time_when_full() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));

        assert!(limiter.wait_time().is_none());
        assert!(limiter.try_acquire());
        let wait = limiter.wait_time().unwrap();
        assert!(wait > Duration::from_secs(50));
    }

    #[test]
    fn test_window_expiry() {
        let limiter = RateLimiter::new(1, Duration::from_millis(10));

        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
        std::thread::sleep(Duration::from_millis(20));
        assert!(limiter.try_acquire());
    }

    #[test]
    fn test_reset() {
        let limiter = RateLimiter::per_second(1);
        assert!(limiter.try_acquire());
        limiter.reset();
        assert_eq!(limiter.current_count(), 0);
        assert!(limiter.try_acquire());
    }

    #[tokio::test]
    async fn test_acquire_waits_for_slot() {
        let limiter = RateLimiter::new(1, Duration::from_millis(20));

        limiter.acquire().await;
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
