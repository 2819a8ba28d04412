mod input_sanitizer;
mod rate_limiter;

pub use input_sanitizer::InputSanitizer;
pub use rate_limiter::{RateLimitError, RateLimiter};
