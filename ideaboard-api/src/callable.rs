//! Remote callables: `POST /callable/<name>` with a JSON `{ "ideaId": ... }`
//! body. Failures come back as `{ "code", "message" }` with the RPC code.

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use ideaboard_app::domain::{IdeaRequest, UpvoteResponse, VoteCount, VoteStatus};
use ideaboard_app::AppContext;
use ideaboard_errors::AppError;
use tower_sessions::Session;

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/callable/upvoteIdea", post(upvote_idea))
        .route("/callable/hasUserVoted", post(has_user_voted))
        .route("/callable/getVoteCount", post(get_vote_count))
}

/// An empty body is treated as `{}` so a missing id surfaces as
/// `invalid-argument` rather than a framework rejection.
pub fn parse_request(body: &[u8]) -> Result<IdeaRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(IdeaRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::InvalidArgument(format!("Malformed request body: {}", e)))
}

async fn upvote_idea(
    State(ctx): State<AppContext>,
    session: Session,
    body: Bytes,
) -> Result<Json<UpvoteResponse>, AppError> {
    let caller = ctx.auth.current(&session).await?.ok_or(AppError::Unauthenticated)?;
    let request = parse_request(&body)?;

    ctx.upvote_idea
        .execute_gated(Some(caller), request.idea_id.as_deref())
        .await
        .map(Json)
        .inspect_err(|e| tracing::info!("upvoteIdea rejected: {}", e))
}

async fn has_user_voted(
    State(ctx): State<AppContext>,
    session: Session,
    body: Bytes,
) -> Result<Json<VoteStatus>, AppError> {
    let caller = ctx.auth.current(&session).await?.ok_or(AppError::Unauthenticated)?;
    let request = parse_request(&body)?;

    ctx.vote_queries
        .has_voted(Some(caller), request.idea_id.as_deref())
        .await
        .map(Json)
}

async fn get_vote_count(
    State(ctx): State<AppContext>,
    body: Bytes,
) -> Result<Json<VoteCount>, AppError> {
    let request = parse_request(&body)?;

    ctx.vote_queries
        .count_votes(request.idea_id.as_deref())
        .await
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_body_is_an_empty_request() {
        assert!(parse_request(b"").unwrap().idea_id.is_none());
        assert!(parse_request(b"  \n").unwrap().idea_id.is_none());
    }

    #[test]
    fn malformed_body_is_invalid_argument() {
        assert!(matches!(
            parse_request(b"{ideaId"),
            Err(AppError::InvalidArgument(_))
        ));
    }
}
