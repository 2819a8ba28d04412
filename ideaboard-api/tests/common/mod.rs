#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use ideaboard_app::config::AppConfig;
use ideaboard_app::domain::UpvoteMode;
use ideaboard_app::infrastructure::demo::DemoBoard;
use ideaboard_app::infrastructure::store::IdeaStore;
use ideaboard_app::AppContext;
use tower::ServiceExt;

/// Router with the same session layer production uses, over an empty
/// in-memory board.
pub fn build_test_app(mode: UpvoteMode) -> (Router, AppContext) {
    let config = AppConfig {
        upvote_mode: mode,
        ..AppConfig::default()
    };
    let ctx = AppContext::new(&config, IdeaStore::Unconfigured(DemoBoard::new()));

    let app = Router::new()
        .merge(ideaboard_api::routes(ctx.clone()))
        .layer(ideaboard_api::session_layer());
    (app, ctx)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, cookie: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::post(uri).header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn post_form(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut builder =
        Request::post(uri).header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Signs in anonymously and returns the session cookie plus the user id.
pub async fn sign_in(app: &Router) -> (String, String) {
    let response = send(app, Request::post("/auth/anonymous").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .expect("sign-in must set a session cookie")
        .to_string();
    let json = body_json(response).await;
    (cookie, json["userId"].as_str().unwrap().to_string())
}

/// Submits an idea through the JSON API and returns its id.
pub async fn create_idea(app: &Router, cookie: &str, text: &str) -> String {
    let response = send(
        app,
        post_json("/v1/ideas", Some(cookie), serde_json::json!({ "text": text })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}
