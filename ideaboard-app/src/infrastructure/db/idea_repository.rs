use super::entities::{idea, Idea};
use super::transaction::{compare_and_increment, lock_idea, run_with_retries, Step, UpvoteOutcome};
use sea_orm::{entity::*, query::*, DatabaseConnection, DatabaseTransaction, DbErr};
use uuid::Uuid;

#[derive(Clone)]
pub struct IdeaRepository {
    db: DatabaseConnection,
}

impl IdeaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, idea_data: &crate::domain::Idea) -> Result<idea::Model, DbErr> {
        let active = idea::ActiveModel {
            id: Set(idea_data.id),
            text: Set(idea_data.text.clone()),
            upvotes: Set(0),
            author_id: Set(idea_data.author_id),
            created_at: Set(chrono::Utc::now()),
        };
        active.insert(&self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<idea::Model>, DbErr> {
        Idea::find_by_id(id).one(&self.db).await
    }

    /// All ideas, newest first.
    pub async fn list_recent(&self) -> Result<Vec<idea::Model>, DbErr> {
        Idea::find()
            .order_by_desc(idea::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Ungated increment. The row is locked for the transaction and the
    /// write is a compare-and-swap, so two callers can never both apply the
    /// same read.
    pub async fn increment_upvotes(&self, id: Uuid) -> Result<UpvoteOutcome, DbErr> {
        run_with_retries(&self.db, id, |txn| {
            Box::pin(async move {
                match lock_idea(txn, id).await? {
                    Some(current) => apply_increment(txn, &current).await,
                    None => Ok(Step::Rollback(UpvoteOutcome::IdeaMissing)),
                }
            })
        })
        .await
    }
}

/// Write half of an ungated upvote, against a counter read under lock.
pub(super) async fn apply_increment(txn: &DatabaseTransaction, current: &idea::Model) -> Result<Step, DbErr> {
    if compare_and_increment(txn, current).await? {
        Ok(Step::Commit(UpvoteOutcome::Applied(current.upvotes + 1)))
    } else {
        Ok(Step::Conflict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Idea as DomainIdea, IdeaText};
    use crate::infrastructure::db::transaction::rival;
    use crate::infrastructure::db::{testing, MAX_TRANSACTION_ATTEMPTS};

    fn idea(text: &str) -> DomainIdea {
        DomainIdea::new(IdeaText::parse(text).unwrap(), Uuid::new_v4())
    }

    #[tokio::test]
    async fn create_assigns_zero_upvotes_and_server_time() {
        let repo = IdeaRepository::new(testing::connect().await);
        let mut submitted = idea("server clocks win");
        submitted.upvotes = 42;

        let before = chrono::Utc::now();
        let stored = repo.create(&submitted).await.unwrap();

        assert_eq!(stored.upvotes, 0);
        assert!(stored.created_at >= before);
        let found = repo.find_by_id(submitted.id).await.unwrap().unwrap();
        assert_eq!(found.text, "server clocks win");
        assert_eq!(found.author_id, submitted.author_id);
    }

    #[tokio::test]
    async fn list_recent_is_newest_first() {
        let repo = IdeaRepository::new(testing::connect().await);
        let first = idea("first");
        let second = idea("second");
        repo.create(&first).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        repo.create(&second).await.unwrap();

        let ids: Vec<Uuid> = repo.list_recent().await.unwrap().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn increment_returns_new_count() {
        let repo = IdeaRepository::new(testing::connect().await);
        let submitted = idea("count me");
        repo.create(&submitted).await.unwrap();

        assert_eq!(repo.increment_upvotes(submitted.id).await.unwrap(), UpvoteOutcome::Applied(1));
        assert_eq!(repo.increment_upvotes(submitted.id).await.unwrap(), UpvoteOutcome::Applied(2));
    }

    #[tokio::test]
    async fn increment_on_missing_idea_reports_it() {
        let repo = IdeaRepository::new(testing::connect().await);
        assert_eq!(
            repo.increment_upvotes(Uuid::new_v4()).await.unwrap(),
            UpvoteOutcome::IdeaMissing
        );
    }

    #[tokio::test]
    async fn stale_compare_and_swap_does_not_write() {
        let db = testing::connect().await;
        let repo = IdeaRepository::new(db.clone());
        let submitted = idea("stale read");
        let mut stale = repo.create(&submitted).await.unwrap();
        repo.increment_upvotes(submitted.id).await.unwrap();

        stale.upvotes = 0;
        assert!(!compare_and_increment(&db, &stale).await.unwrap());
        assert_eq!(repo.find_by_id(submitted.id).await.unwrap().unwrap().upvotes, 1);
    }

    #[tokio::test]
    async fn lost_compare_and_swap_is_retried_from_a_fresh_read() {
        let db = testing::connect().await;
        let repo = IdeaRepository::new(db.clone());
        let submitted = idea("retry me");
        repo.create(&submitted).await.unwrap();
        let id = submitted.id;

        let mut attempts = 0;
        let outcome = run_with_retries(&db, id, |txn| {
            attempts += 1;
            let first = attempts == 1;
            Box::pin(async move {
                let current = lock_idea(txn, id).await?.unwrap();
                if first {
                    rival::bump(txn, id).await?;
                }
                apply_increment(txn, &current).await
            })
        })
        .await
        .unwrap();

        assert_eq!(attempts, 2);
        assert_eq!(outcome, UpvoteOutcome::Applied(1));
        assert_eq!(repo.find_by_id(id).await.unwrap().unwrap().upvotes, 1);
    }

    #[tokio::test]
    async fn losing_every_attempt_reports_contention_without_writing() {
        let db = testing::connect().await;
        let repo = IdeaRepository::new(db.clone());
        let submitted = idea("always beaten");
        repo.create(&submitted).await.unwrap();
        let id = submitted.id;

        let mut attempts = 0;
        let outcome = run_with_retries(&db, id, |txn| {
            attempts += 1;
            Box::pin(async move {
                let current = lock_idea(txn, id).await?.unwrap();
                rival::bump(txn, id).await?;
                apply_increment(txn, &current).await
            })
        })
        .await
        .unwrap();

        assert_eq!(outcome, UpvoteOutcome::Contended);
        assert_eq!(attempts, MAX_TRANSACTION_ATTEMPTS);
        assert_eq!(repo.find_by_id(id).await.unwrap().unwrap().upvotes, 0);
    }
}
