#![allow(dead_code)]

use ideaboard_app::config::AppConfig;
use ideaboard_app::domain::{AuthSession, Idea, UpvoteMode};
use ideaboard_app::infrastructure::db::{create_connection, run_migrations};
use ideaboard_app::infrastructure::store::IdeaStore;
use ideaboard_app::AppContext;
use uuid::Uuid;

/// Context over a fresh in-memory SQLite database.
///
/// The pool holds a single connection, so every transaction runs against the
/// same in-memory database and concurrent callers queue on the pool.
pub async fn persistent_context(mode: UpvoteMode) -> AppContext {
    let db = create_connection("sqlite::memory:", 1).await.expect("connect sqlite");
    run_migrations(&db).await.expect("create schema");

    let config = AppConfig {
        upvote_mode: mode,
        ..AppConfig::default()
    };
    AppContext::new(&config, IdeaStore::connected(db))
}

pub fn user() -> AuthSession {
    AuthSession::new(Uuid::new_v4())
}

pub async fn submit(ctx: &AppContext, text: &str) -> Idea {
    ctx.submit_idea
        .execute(Some(user()), text)
        .await
        .expect("submit idea")
}

pub async fn upvotes_of(ctx: &AppContext, id: Uuid) -> i32 {
    ctx.list_ideas
        .snapshot()
        .await
        .expect("snapshot")
        .ideas
        .into_iter()
        .find(|i| i.id == id)
        .expect("idea present")
        .upvotes
}
