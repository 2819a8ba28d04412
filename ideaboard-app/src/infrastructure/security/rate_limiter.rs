use dashmap::DashMap;
use ideaboard_errors::AppError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

const MAX_SUBMISSIONS_PER_MINUTE: u32 = 5;
const MAX_SUBMISSIONS_PER_HOUR: u32 = 30;
const CLEANUP_INTERVAL_SECS: u64 = 300;

#[derive(Clone)]
struct RequestRecord {
    minute_count: u32,
    hour_count: u32,
    minute_start: Instant,
    hour_start: Instant,
}

impl Default for RequestRecord {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            minute_count: 0,
            hour_count: 0,
            minute_start: now,
            hour_start: now,
        }
    }
}

/// Per-author submission limits, kept in process memory.
#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<DashMap<Uuid, RequestRecord>>,
    last_cleanup: Arc<std::sync::Mutex<Instant>>,
    per_minute: u32,
    per_hour: u32,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::with_limits(MAX_SUBMISSIONS_PER_MINUTE, MAX_SUBMISSIONS_PER_HOUR)
    }

    pub fn with_limits(per_minute: u32, per_hour: u32) -> Self {
        Self {
            requests: Arc::new(DashMap::new()),
            last_cleanup: Arc::new(std::sync::Mutex::new(Instant::now())),
            per_minute,
            per_hour,
        }
    }

    pub fn check_rate_limit(&self, user_id: Uuid) -> Result<(), RateLimitError> {
        self.maybe_cleanup();

        let now = Instant::now();
        let mut record = self.requests.entry(user_id).or_default();

        if now.duration_since(record.minute_start) > Duration::from_secs(60) {
            record.minute_count = 0;
            record.minute_start = now;
        }

        if now.duration_since(record.hour_start) > Duration::from_secs(3600) {
            record.hour_count = 0;
            record.hour_start = now;
        }

        if record.minute_count >= self.per_minute {
            let wait_secs = 60u64.saturating_sub(now.duration_since(record.minute_start).as_secs());
            return Err(RateLimitError::TooManyPerMinute(wait_secs));
        }

        if record.hour_count >= self.per_hour {
            let wait_secs = 3600u64.saturating_sub(now.duration_since(record.hour_start).as_secs());
            return Err(RateLimitError::TooManyPerHour(wait_secs));
        }

        record.minute_count += 1;
        record.hour_count += 1;

        Ok(())
    }

    fn maybe_cleanup(&self) {
        let Ok(mut last_cleanup) = self.last_cleanup.lock() else {
            return;
        };
        if last_cleanup.elapsed() > Duration::from_secs(CLEANUP_INTERVAL_SECS) {
            let now = Instant::now();
            self.requests
                .retain(|_, v| now.duration_since(v.hour_start) < Duration::from_secs(3600));
            *last_cleanup = now;
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitError {
    TooManyPerMinute(u64),
    TooManyPerHour(u64),
}

impl RateLimitError {
    pub fn message(&self) -> String {
        match self {
            Self::TooManyPerMinute(secs) => {
                format!("Too many ideas at once! Wait {} seconds.", secs)
            }
            Self::TooManyPerHour(secs) => {
                format!("You have reached the hourly limit. Wait {} minutes.", secs / 60 + 1)
            }
        }
    }
}

impl From<RateLimitError> for AppError {
    fn from(err: RateLimitError) -> Self {
        AppError::ResourceExhausted(err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_the_minute_limit() {
        let limiter = RateLimiter::with_limits(3, 100);
        let user = Uuid::new_v4();

        for _ in 0..3 {
            assert!(limiter.check_rate_limit(user).is_ok());
        }
        assert!(matches!(
            limiter.check_rate_limit(user),
            Err(RateLimitError::TooManyPerMinute(_))
        ));
    }

    #[test]
    fn hourly_limit_applies_independently() {
        let limiter = RateLimiter::with_limits(10, 2);
        let user = Uuid::new_v4();

        limiter.check_rate_limit(user).unwrap();
        limiter.check_rate_limit(user).unwrap();
        assert!(matches!(
            limiter.check_rate_limit(user),
            Err(RateLimitError::TooManyPerHour(_))
        ));
    }

    #[test]
    fn users_are_limited_separately() {
        let limiter = RateLimiter::with_limits(1, 10);
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        assert!(limiter.check_rate_limit(a).is_ok());
        assert!(limiter.check_rate_limit(a).is_err());
        assert!(limiter.check_rate_limit(b).is_ok());
    }

    #[test]
    fn converts_to_resource_exhausted() {
        let err: AppError = RateLimitError::TooManyPerMinute(12).into();
        assert_eq!(err.code(), "resource-exhausted");
        assert!(err.user_message().contains("12"));
    }
}
