//! Plain HTML form posts from the board page. Success redirects back to the
//! board; failures render an error page with the matching status.

use crate::shell::render_error_page;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::post;
use axum::{Form, Router};
use ideaboard_app::AppContext;
use ideaboard_errors::AppError;
use serde::Deserialize;
use tower_sessions::Session;

#[derive(Deserialize)]
pub struct IdeaForm {
    #[serde(default)]
    pub text: String,
}

#[derive(Deserialize)]
pub struct UpvoteForm {
    #[serde(default)]
    pub idea_id: String,
}

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/board/ideas", post(handle_idea_form))
        .route("/board/upvote", post(handle_upvote_form))
}

async fn handle_idea_form(
    State(ctx): State<AppContext>,
    session: Session,
    Form(form): Form<IdeaForm>,
) -> Response {
    let author = match ctx.auth.current(&session).await {
        Ok(author) => author,
        Err(e) => return error_response(e),
    };

    match ctx.submit_idea.execute(author, &form.text).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => error_response(e),
    }
}

async fn handle_upvote_form(
    State(ctx): State<AppContext>,
    session: Session,
    Form(form): Form<UpvoteForm>,
) -> Response {
    let caller = match ctx.auth.current(&session).await {
        Ok(caller) => caller,
        Err(e) => return error_response(e),
    };

    let idea_id = Some(form.idea_id.as_str()).filter(|id| !id.is_empty());
    match ctx.upvote_idea.execute(caller, idea_id).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(err: AppError) -> Response {
    (err.status_code(), Html(render_error_page(err.user_message()))).into_response()
}
