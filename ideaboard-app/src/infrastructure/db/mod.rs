pub mod entities;
mod idea_repository;
mod transaction;
mod vote_repository;

pub use idea_repository::IdeaRepository;
pub use transaction::{UpvoteOutcome, MAX_TRANSACTION_ATTEMPTS};
pub use vote_repository::VoteRepository;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use std::time::Duration;

pub async fn create_connection(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .sqlx_logging(false);

    Database::connect(opt).await
}

/// Creates the tables and indexes derived from the entities. Safe to run on
/// every start.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut ideas = schema.create_table_from_entity(entities::Idea);
    ideas.if_not_exists();
    db.execute(backend.build(&ideas)).await?;

    let mut votes = schema.create_table_from_entity(entities::Vote);
    votes.if_not_exists();
    db.execute(backend.build(&votes)).await?;

    for mut index in schema.create_index_from_entity(entities::Idea) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    Ok(())
}

/// Repositories over one pooled connection.
#[derive(Clone)]
pub struct Repositories {
    pub ideas: IdeaRepository,
    pub votes: VoteRepository,
}

impl Repositories {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            ideas: IdeaRepository::new(db.clone()),
            votes: VoteRepository::new(db),
        }
    }
}
