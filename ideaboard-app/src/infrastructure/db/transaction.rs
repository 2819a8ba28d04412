use super::entities::{idea, Idea};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QuerySelect, TransactionTrait,
};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use uuid::Uuid;

/// Attempts made by an upvote transaction before it reports contention.
pub const MAX_TRANSACTION_ATTEMPTS: u32 = 5;

const BACKOFF_STEP_MS: u64 = 10;

/// Result of one upvote transaction, before it is mapped to a caller-facing
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpvoteOutcome {
    /// Committed; carries the new counter value.
    Applied(i32),
    IdeaMissing,
    AlreadyVoted,
    /// Every attempt lost its compare-and-swap.
    Contended,
}

/// What one attempt asks the retry loop to do with its transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    Commit(UpvoteOutcome),
    Rollback(UpvoteOutcome),
    /// The counter moved under us; roll back and try again.
    Conflict,
}

pub(super) type AttemptFuture<'c> = Pin<Box<dyn Future<Output = Result<Step, DbErr>> + Send + 'c>>;

/// Runs `attempt` in a fresh transaction until it commits, rolls back with
/// an outcome, or the attempt budget is spent.
pub(super) async fn run_with_retries<F>(db: &DatabaseConnection, idea_id: Uuid, mut attempt: F) -> Result<UpvoteOutcome, DbErr>
where
    F: for<'c> FnMut(&'c DatabaseTransaction) -> AttemptFuture<'c>,
{
    for n in 1..=MAX_TRANSACTION_ATTEMPTS {
        let txn = db.begin().await?;

        let step = match attempt(&txn).await {
            Ok(step) => step,
            Err(err) => {
                txn.rollback().await?;
                return Err(err);
            }
        };

        match step {
            Step::Commit(outcome) => {
                txn.commit().await?;
                return Ok(outcome);
            }
            Step::Rollback(outcome) => {
                txn.rollback().await?;
                return Ok(outcome);
            }
            Step::Conflict => {
                txn.rollback().await?;
                tracing::debug!(idea_id = %idea_id, attempt = n, "upvote lost compare-and-swap, retrying");
                backoff(n).await;
            }
        }
    }

    tracing::warn!(idea_id = %idea_id, "upvote gave up after {} attempts", MAX_TRANSACTION_ATTEMPTS);
    Ok(UpvoteOutcome::Contended)
}

/// `SELECT ... FOR UPDATE`: concurrent upvotes on one idea queue on the row
/// and each reads the value the previous one committed.
pub(super) async fn lock_idea<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<idea::Model>, DbErr> {
    Idea::find_by_id(id).lock_exclusive().one(conn).await
}

/// `UPDATE ideas SET upvotes = n + 1 WHERE id = ? AND upvotes = n`.
///
/// Returns false when another writer changed the counter since `current`
/// was read.
pub(super) async fn compare_and_increment<C: ConnectionTrait>(
    conn: &C,
    current: &idea::Model,
) -> Result<bool, DbErr> {
    let result = Idea::update_many()
        .col_expr(idea::Column::Upvotes, Expr::value(current.upvotes + 1))
        .filter(idea::Column::Id.eq(current.id))
        .filter(idea::Column::Upvotes.eq(current.upvotes))
        .exec(conn)
        .await?;

    Ok(result.rows_affected == 1)
}

async fn backoff(attempt: u32) {
    tokio::time::sleep(Duration::from_millis(BACKOFF_STEP_MS * u64::from(attempt))).await;
}
