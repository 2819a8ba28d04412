use crate::domain::{BoardSnapshot, Idea, StoreMode, VoteRecord};
use crate::infrastructure::db::{Repositories, UpvoteOutcome};
use crate::infrastructure::demo::DemoBoard;
use ideaboard_errors::AppError;
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

/// Handle to wherever ideas live. Built once at startup and passed down
/// explicitly.
pub enum IdeaStore {
    Connected(Repositories),
    Unconfigured(DemoBoard),
}

impl IdeaStore {
    pub fn connected(db: DatabaseConnection) -> Self {
        Self::Connected(Repositories::new(db))
    }

    pub fn unconfigured() -> Self {
        Self::Unconfigured(DemoBoard::seeded())
    }

    pub fn mode(&self) -> StoreMode {
        match self {
            Self::Connected(_) => StoreMode::Persistent,
            Self::Unconfigured(_) => StoreMode::Demo,
        }
    }

    pub async fn create_idea(&self, idea: Idea) -> Result<Idea, AppError> {
        match self {
            Self::Connected(repos) => repos
                .ideas
                .create(&idea)
                .await
                .map(Idea::from)
                .map_err(store_error),
            Self::Unconfigured(board) => Ok(board.insert(idea)),
        }
    }

    pub async fn find_idea(&self, id: Uuid) -> Result<Option<Idea>, AppError> {
        match self {
            Self::Connected(repos) => repos
                .ideas
                .find_by_id(id)
                .await
                .map(|m| m.map(Idea::from))
                .map_err(store_error),
            Self::Unconfigured(board) => Ok(board.find(id)),
        }
    }

    pub async fn snapshot(&self) -> Result<BoardSnapshot, AppError> {
        let ideas = match self {
            Self::Connected(repos) => repos
                .ideas
                .list_recent()
                .await
                .map_err(store_error)?
                .into_iter()
                .map(Idea::from)
                .collect(),
            Self::Unconfigured(board) => board.list_recent(),
        };

        Ok(BoardSnapshot {
            mode: self.mode(),
            ideas,
        })
    }

    /// Ungated increment; returns the new counter value.
    pub async fn increment_upvotes(&self, idea_id: Uuid) -> Result<i32, AppError> {
        let outcome = match self {
            Self::Connected(repos) => repos.ideas.increment_upvotes(idea_id).await.map_err(store_error)?,
            Self::Unconfigured(board) => board.increment(idea_id),
        };
        outcome_to_count(outcome)
    }

    /// Ledger-gated increment; returns the new counter value.
    pub async fn cast_vote(&self, idea_id: Uuid, user_id: Uuid) -> Result<i32, AppError> {
        let outcome = match self {
            Self::Connected(repos) => repos.votes.cast(idea_id, user_id).await.map_err(store_error)?,
            Self::Unconfigured(board) => board.cast(idea_id, user_id),
        };
        outcome_to_count(outcome)
    }

    pub async fn find_vote(&self, idea_id: Uuid, user_id: Uuid) -> Result<Option<VoteRecord>, AppError> {
        match self {
            Self::Connected(repos) => repos
                .votes
                .find(idea_id, user_id)
                .await
                .map(|m| m.map(VoteRecord::from))
                .map_err(store_error),
            Self::Unconfigured(board) => Ok(board.vote(idea_id, user_id)),
        }
    }

    pub async fn count_votes(&self, idea_id: Uuid) -> Result<u64, AppError> {
        match self {
            Self::Connected(repos) => repos.votes.count_for_idea(idea_id).await.map_err(store_error),
            Self::Unconfigured(board) => Ok(board.count_votes(idea_id)),
        }
    }
}

fn outcome_to_count(outcome: UpvoteOutcome) -> Result<i32, AppError> {
    match outcome {
        UpvoteOutcome::Applied(count) => Ok(count),
        UpvoteOutcome::IdeaMissing => Err(AppError::NotFound),
        UpvoteOutcome::AlreadyVoted => Err(AppError::AlreadyExists),
        UpvoteOutcome::Contended => Err(AppError::Aborted),
    }
}

fn store_error(err: DbErr) -> AppError {
    tracing::error!("Idea store error: {}", err);
    AppError::Internal(err.to_string())
}
