use super::publish_board;
use crate::domain::{AuthSession, Idea};
use crate::infrastructure::feed::IdeaFeed;
use crate::infrastructure::security::{InputSanitizer, RateLimiter};
use crate::infrastructure::store::IdeaStore;
use ideaboard_errors::AppError;
use std::sync::Arc;

pub struct SubmitIdea {
    store: Arc<IdeaStore>,
    feed: IdeaFeed,
    rate_limiter: RateLimiter,
}

impl SubmitIdea {
    pub fn new(store: Arc<IdeaStore>, feed: IdeaFeed, rate_limiter: RateLimiter) -> Self {
        Self {
            store,
            feed,
            rate_limiter,
        }
    }

    pub async fn execute(&self, author: Option<AuthSession>, text: &str) -> Result<Idea, AppError> {
        let author = author.ok_or(AppError::Unauthenticated)?;
        let text = InputSanitizer::idea_text(text)?;
        self.rate_limiter.check_rate_limit(author.user_id)?;

        let idea = self.store.create_idea(Idea::new(text, author.user_id)).await?;
        tracing::info!(idea_id = %idea.id, author_id = %idea.author_id, "Idea submitted");

        publish_board(&self.store, &self.feed).await;
        Ok(idea)
    }
}
