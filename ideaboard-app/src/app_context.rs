use crate::application::{ListIdeas, SubmitIdea, UpvoteIdea, VoteQueries};
use crate::config::AppConfig;
use crate::domain::StoreMode;
use crate::infrastructure::auth::AnonymousAuth;
use crate::infrastructure::db;
use crate::infrastructure::feed::IdeaFeed;
use crate::infrastructure::security::RateLimiter;
use crate::infrastructure::store::IdeaStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub list_ideas: Arc<ListIdeas>,
    pub submit_idea: Arc<SubmitIdea>,
    pub upvote_idea: Arc<UpvoteIdea>,
    pub vote_queries: Arc<VoteQueries>,
    pub auth: AnonymousAuth,
    pub feed: IdeaFeed,
    pub store_mode: StoreMode,
}

impl AppContext {
    pub fn new(config: &AppConfig, store: IdeaStore) -> Self {
        Self::with_rate_limiter(config, store, RateLimiter::new())
    }

    pub fn with_rate_limiter(config: &AppConfig, store: IdeaStore, rate_limiter: RateLimiter) -> Self {
        let store_mode = store.mode();
        let store = Arc::new(store);
        let feed = IdeaFeed::new(config.feed_capacity);

        Self {
            list_ideas: Arc::new(ListIdeas::new(store.clone())),
            submit_idea: Arc::new(SubmitIdea::new(store.clone(), feed.clone(), rate_limiter)),
            upvote_idea: Arc::new(UpvoteIdea::new(store.clone(), feed.clone(), config.upvote_mode)),
            vote_queries: Arc::new(VoteQueries::new(store)),
            auth: AnonymousAuth::new(),
            feed,
            store_mode,
        }
    }

    /// Connects to the configured database, falling back to the in-memory
    /// demo board when none is configured or it cannot be reached.
    pub async fn from_config(config: &AppConfig) -> Self {
        Self::new(config, Self::open_store(config).await)
    }

    async fn open_store(config: &AppConfig) -> IdeaStore {
        let Some(url) = config.database_url.as_deref() else {
            tracing::warn!("DATABASE_URL not set. Running in demo mode; ideas will not be saved.");
            return IdeaStore::unconfigured();
        };

        let conn = match db::create_connection(url, config.database_max_connections).await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!("Database unreachable ({}). Running in demo mode.", e);
                return IdeaStore::unconfigured();
            }
        };

        if let Err(e) = db::run_migrations(&conn).await {
            tracing::warn!("Failed to prepare schema ({}). Running in demo mode.", e);
            return IdeaStore::unconfigured();
        }

        tracing::info!("Connected to idea store");
        IdeaStore::connected(conn)
    }
}
