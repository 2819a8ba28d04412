use crate::domain::{AuthSession, VoteCount, VoteStatus};
use crate::infrastructure::security::InputSanitizer;
use crate::infrastructure::store::IdeaStore;
use ideaboard_errors::AppError;
use std::sync::Arc;

/// Read-only views over the vote ledger.
pub struct VoteQueries {
    store: Arc<IdeaStore>,
}

impl VoteQueries {
    pub fn new(store: Arc<IdeaStore>) -> Self {
        Self { store }
    }

    /// Whether the caller has a ledger entry for the idea. Callers can only
    /// ask about themselves.
    pub async fn has_voted(
        &self,
        caller: Option<AuthSession>,
        idea_id: Option<&str>,
    ) -> Result<VoteStatus, AppError> {
        let caller = caller.ok_or(AppError::Unauthenticated)?;
        let idea_id = InputSanitizer::idea_id(idea_id)?;

        let record = self.store.find_vote(idea_id, caller.user_id).await?;
        Ok(VoteStatus::from(record))
    }

    pub async fn count_votes(&self, idea_id: Option<&str>) -> Result<VoteCount, AppError> {
        let idea_id = InputSanitizer::idea_id(idea_id)?;
        let vote_count = self.store.count_votes(idea_id).await?;
        Ok(VoteCount { vote_count })
    }
}
