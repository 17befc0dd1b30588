//! Rate limiting service for controlling request frequency.

use crate::config::RateLimitConfig;
use crate::services::repository::RequestLog;

/// Fixed-window rate limiter backed by the request log table
///
/// The decision is a single aggregate query: count the records created within
/// the trailing window and compare against the threshold. The count is taken
/// after the current request's own record has been inserted, so the check is
/// always inclusive of itself. Concurrent requests are not serialized against
/// each other, so the cap is approximate under load.
#[derive(Clone)]
pub struct FixedWindowLimiter {
    config: RateLimitConfig,
}

impl FixedWindowLimiter {
    /// Create a new rate limiter with the given configuration
    pub fn new(config: RateLimitConfig) -> Self {
        Self { config }
    }

    /// Whether a trailing-window count of `count` is still under the threshold
    pub fn is_within_limit(&self, count: i64) -> bool {
        count < self.config.max_requests as i64
    }

    /// Check the trailing-window count against the threshold
    ///
    /// Returns `true` if the request should be allowed, `false` if limited.
    pub async fn check(&self, log: &impl RequestLog) -> Result<bool, sqlx::Error> {
        let count = log.count_recent_requests(self.config.window_seconds).await?;
        Ok(self.is_within_limit(count))
    }
}
