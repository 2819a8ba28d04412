pub mod auth;
pub mod board_forms;
pub mod callable;
pub mod ideas;
pub mod shell;

use axum::Router;
use ideaboard_app::AppContext;
use time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

const SESSION_IDLE_DAYS: i64 = 30;

/// Every non-Leptos route, with the application context already applied.
pub fn routes<S>(ctx: AppContext) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(auth::router())
        .merge(board_forms::router())
        .merge(callable::router())
        .merge(ideas::router())
        .with_state(ctx)
}

/// Cookie sessions carrying the anonymous user id.
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_IDLE_DAYS)))
}
