use super::publish_board;
use crate::domain::{AuthSession, StoreMode, UpvoteMode, UpvoteResponse};
use crate::infrastructure::feed::IdeaFeed;
use crate::infrastructure::security::InputSanitizer;
use crate::infrastructure::store::IdeaStore;
use ideaboard_errors::AppError;
use std::sync::Arc;

/// Both upvote entry points. Only the one matching the configured
/// [`UpvoteMode`] is accepted, so the counter has a single source of truth.
pub struct UpvoteIdea {
    store: Arc<IdeaStore>,
    feed: IdeaFeed,
    mode: UpvoteMode,
}

impl UpvoteIdea {
    pub fn new(store: Arc<IdeaStore>, feed: IdeaFeed, mode: UpvoteMode) -> Self {
        Self { store, feed, mode }
    }

    pub fn mode(&self) -> UpvoteMode {
        self.mode
    }

    /// Counter mode: no identity, no ledger. Returns the new count.
    pub async fn execute_ungated(&self, idea_id: Option<&str>) -> Result<i32, AppError> {
        if self.mode != UpvoteMode::Counter {
            return Err(AppError::FailedPrecondition(
                "Counter upvotes are disabled; use upvoteIdea.".to_string(),
            ));
        }
        let idea_id = InputSanitizer::idea_id(idea_id)?;

        let upvotes = self.store.increment_upvotes(idea_id).await?;
        tracing::info!(idea_id = %idea_id, upvotes, "Idea upvoted");

        publish_board(&self.store, &self.feed).await;
        Ok(upvotes)
    }

    /// Ledger mode: one vote per caller per idea.
    pub async fn execute_gated(
        &self,
        caller: Option<AuthSession>,
        idea_id: Option<&str>,
    ) -> Result<UpvoteResponse, AppError> {
        let caller = caller.ok_or(AppError::Unauthenticated)?;
        if self.mode != UpvoteMode::Ledger {
            return Err(AppError::FailedPrecondition(
                "Ledger upvotes are disabled on this board.".to_string(),
            ));
        }
        let idea_id = InputSanitizer::idea_id(idea_id)?;

        let upvotes = self.store.cast_vote(idea_id, caller.user_id).await?;
        tracing::info!(idea_id = %idea_id, user_id = %caller.user_id, upvotes, "Idea upvoted");

        publish_board(&self.store, &self.feed).await;

        let message = match self.store.mode() {
            StoreMode::Persistent => "Idea upvoted successfully!",
            StoreMode::Demo => "Demo mode: vote counted locally and will not be saved.",
        };
        Ok(UpvoteResponse {
            success: true,
            upvotes,
            message: message.to_string(),
        })
    }

    /// Entry point for the board UI: whichever mode is configured.
    pub async fn execute(&self, caller: Option<AuthSession>, idea_id: Option<&str>) -> Result<i32, AppError> {
        match self.mode {
            UpvoteMode::Counter => self.execute_ungated(idea_id).await,
            UpvoteMode::Ledger => self.execute_gated(caller, idea_id).await.map(|r| r.upvotes),
        }
    }
}
