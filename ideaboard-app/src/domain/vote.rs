use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ledger entry: one per `(idea_id, user_id)`, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRecord {
    pub idea_id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub voted_at: chrono::DateTime<chrono::Utc>,
}

/// Which upvote entry point is the source of truth for a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpvoteMode {
    /// Plain counter increment, any number per user.
    Counter,
    /// One vote per user, enforced through the vote ledger.
    #[default]
    Ledger,
}

impl fmt::Display for UpvoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Counter => f.write_str("counter"),
            Self::Ledger => f.write_str("ledger"),
        }
    }
}

impl FromStr for UpvoteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "counter" => Ok(Self::Counter),
            "ledger" => Ok(Self::Ledger),
            other => Err(format!("unknown upvote mode `{other}`")),
        }
    }
}

/// Request body shared by the remote callables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRequest {
    #[serde(default)]
    pub idea_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpvoteResponse {
    pub success: bool,
    pub upvotes: i32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteStatus {
    pub has_voted: bool,
    pub voted_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<Option<VoteRecord>> for VoteStatus {
    fn from(record: Option<VoteRecord>) -> Self {
        Self {
            has_voted: record.is_some(),
            voted_at: record.map(|r| r.voted_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteCount {
    pub vote_count: u64,
}
