use super::Idea;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    Persistent,
    /// In-memory board used when no database is configured. Nothing survives
    /// a restart.
    Demo,
}

impl StoreMode {
    pub fn is_persistent(self) -> bool {
        matches!(self, Self::Persistent)
    }
}

/// Full idea list, newest first, as pushed to live subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub mode: StoreMode,
    pub ideas: Vec<Idea>,
}
