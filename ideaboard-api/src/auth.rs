use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use ideaboard_app::domain::AuthSession;
use ideaboard_app::AppContext;
use ideaboard_errors::AppError;
use serde::Serialize;
use tower_sessions::Session;

#[derive(Serialize)]
pub struct MeResponse {
    pub authenticated: bool,
    pub user: Option<AuthSession>,
}

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/auth/anonymous", post(sign_in_anonymously))
        .route("/auth/me", get(me))
}

async fn sign_in_anonymously(
    State(ctx): State<AppContext>,
    session: Session,
) -> Result<Json<AuthSession>, AppError> {
    ctx.auth.authenticate(&session).await.map(Json)
}

async fn me(State(ctx): State<AppContext>, session: Session) -> Result<Json<MeResponse>, AppError> {
    let user = ctx.auth.current(&session).await?;
    Ok(Json(MeResponse {
        authenticated: user.is_some(),
        user,
    }))
}
