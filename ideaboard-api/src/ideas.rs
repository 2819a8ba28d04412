use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::{get, post};
use axum::{Json, Router};
use ideaboard_app::domain::{BoardSnapshot, Idea};
use ideaboard_app::AppContext;
use ideaboard_errors::AppError;
use serde::Deserialize;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tower_sessions::Session;

#[derive(Debug, Default, Deserialize)]
pub struct NewIdea {
    #[serde(default)]
    pub text: String,
}

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/v1/ideas", get(list_ideas).post(create_idea))
        .route("/v1/ideas/stream", get(stream_ideas))
        .route("/v1/ideas/{id}/upvote", post(upvote_idea))
}

async fn list_ideas(State(ctx): State<AppContext>) -> Result<Json<BoardSnapshot>, AppError> {
    ctx.list_ideas.snapshot().await.map(Json)
}

async fn create_idea(
    State(ctx): State<AppContext>,
    session: Session,
    body: Bytes,
) -> Result<(StatusCode, Json<Idea>), AppError> {
    let author = ctx.auth.current(&session).await?.ok_or(AppError::Unauthenticated)?;
    let request: NewIdea = serde_json::from_slice(&body)
        .map_err(|e| AppError::InvalidArgument(format!("Malformed request body: {}", e)))?;

    let idea = ctx.submit_idea.execute(Some(author), &request.text).await?;
    Ok((StatusCode::CREATED, Json(idea)))
}

/// Counter-mode upvote. No identity is required.
async fn upvote_idea(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    ctx.upvote_idea.execute_ungated(Some(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Live board: the current snapshot, then one per committed change.
async fn stream_ideas(
    State(ctx): State<AppContext>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, AppError> {
    // Subscribe before reading so no commit falls between the two.
    let updates = BroadcastStream::new(ctx.feed.subscribe()).filter_map(|message| match message {
        Ok(snapshot) => Some(snapshot),
        Err(lagged) => {
            tracing::debug!("Live board subscriber skipped ahead: {}", lagged);
            None
        }
    });
    let initial = ctx.list_ideas.snapshot().await?;

    let events = tokio_stream::once(initial)
        .chain(updates)
        .map(|snapshot| Event::default().json_data(snapshot));

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}
