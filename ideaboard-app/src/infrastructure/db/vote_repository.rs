use super::entities::{idea, vote, Vote};
use super::transaction::{compare_and_increment, lock_idea, run_with_retries, Step, UpvoteOutcome};
use sea_orm::{entity::*, query::*, DatabaseConnection, DatabaseTransaction, DbErr, PaginatorTrait, SqlErr};
use uuid::Uuid;

#[derive(Clone)]
pub struct VoteRepository {
    db: DatabaseConnection,
}

impl VoteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, idea_id: Uuid, user_id: Uuid) -> Result<Option<vote::Model>, DbErr> {
        Vote::find_by_id((idea_id, user_id)).one(&self.db).await
    }

    pub async fn count_for_idea(&self, idea_id: Uuid) -> Result<u64, DbErr> {
        Vote::find()
            .filter(vote::Column::IdeaId.eq(idea_id))
            .count(&self.db)
            .await
    }

    /// Gated upvote: the ledger row and the counter increment commit together
    /// or not at all.
    pub async fn cast(&self, idea_id: Uuid, user_id: Uuid) -> Result<UpvoteOutcome, DbErr> {
        run_with_retries(&self.db, idea_id, |txn| {
            Box::pin(async move {
                match lock_idea(txn, idea_id).await? {
                    Some(current) => apply_vote(txn, &current, user_id).await,
                    None => Ok(Step::Rollback(UpvoteOutcome::IdeaMissing)),
                }
            })
        })
        .await
    }
}

/// Write half of a gated upvote. The ledger's primary key rejects a second
/// vote for the same pair, including one racing in from another transaction.
pub(super) async fn apply_vote(
    txn: &DatabaseTransaction,
    current: &idea::Model,
    user_id: Uuid,
) -> Result<Step, DbErr> {
    let ledger = vote::ActiveModel {
        idea_id: Set(current.id),
        user_id: Set(user_id),
        voted_at: Set(chrono::Utc::now()),
    };
    match Vote::insert(ledger).exec_without_returning(txn).await {
        Ok(_) => {}
        Err(err) if is_unique_violation(&err) => return Ok(Step::Rollback(UpvoteOutcome::AlreadyVoted)),
        Err(err) => return Err(err),
    }

    // A failed swap rolls the ledger row back with it.
    if compare_and_increment(txn, current).await? {
        Ok(Step::Commit(UpvoteOutcome::Applied(current.upvotes + 1)))
    } else {
        Ok(Step::Conflict)
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
