use crate::domain::BoardSnapshot;
use crate::infrastructure::store::IdeaStore;
use ideaboard_errors::AppError;
use std::sync::Arc;

pub struct ListIdeas {
    store: Arc<IdeaStore>,
}

impl ListIdeas {
    pub fn new(store: Arc<IdeaStore>) -> Self {
        Self { store }
    }

    /// Every idea, most recent first.
    pub async fn snapshot(&self) -> Result<BoardSnapshot, AppError> {
        self.store.snapshot().await
    }
}
