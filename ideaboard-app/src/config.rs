use crate::domain::UpvoteMode;
use crate::infrastructure::feed::DEFAULT_FEED_CAPACITY;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Unset or empty runs the board in demo mode.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub upvote_mode: UpvoteMode,
    pub feed_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            upvote_mode: UpvoteMode::default(),
            feed_capacity: DEFAULT_FEED_CAPACITY,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_max_connections = match read("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => parse_positive("DATABASE_MAX_CONNECTIONS", &raw)?,
            None => defaults.database_max_connections,
        };

        let upvote_mode = match read("UPVOTE_MODE") {
            Some(raw) => raw
                .parse()
                .map_err(|reason| ConfigError::Invalid { key: "UPVOTE_MODE", reason })?,
            None => defaults.upvote_mode,
        };

        let feed_capacity = match read("FEED_CAPACITY") {
            Some(raw) => parse_positive::<usize>("FEED_CAPACITY", &raw)?,
            None => defaults.feed_capacity,
        };

        Ok(Self {
            database_url: read("DATABASE_URL"),
            database_max_connections,
            upvote_mode,
            feed_capacity,
        })
    }
}

fn parse_positive<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match raw.parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::Invalid {
            key,
            reason: format!("expected a positive integer, got `{raw}`"),
        }),
    }
}
