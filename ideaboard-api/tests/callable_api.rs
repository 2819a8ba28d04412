//! Gated upvote and ledger queries over the remote-callable surface.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_idea, post_json, send, sign_in};
use ideaboard_app::domain::UpvoteMode;
use serde_json::json;

#[tokio::test]
async fn upvote_without_session_is_unauthenticated() {
    let (app, _) = build_test_app(UpvoteMode::Ledger);

    let response = send(&app, post_json("/callable/upvoteIdea", None, json!({ "ideaId": "x" }))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "unauthenticated");
}

#[tokio::test]
async fn upvote_without_idea_id_is_invalid_argument() {
    let (app, _) = build_test_app(UpvoteMode::Ledger);
    let (cookie, _) = sign_in(&app).await;

    let response = send(&app, post_json("/callable/upvoteIdea", Some(&cookie), json!({}))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "invalid-argument");
    assert_eq!(json["message"], "ideaId is required.");
}

#[tokio::test]
async fn upvote_on_unknown_idea_is_not_found() {
    let (app, _) = build_test_app(UpvoteMode::Ledger);
    let (cookie, _) = sign_in(&app).await;

    let body = json!({ "ideaId": uuid::Uuid::new_v4().to_string() });
    let response = send(&app, post_json("/callable/upvoteIdea", Some(&cookie), body)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "not-found");
}

#[tokio::test]
async fn second_upvote_from_same_user_is_already_exists() {
    let (app, _) = build_test_app(UpvoteMode::Ledger);
    let (cookie, _) = sign_in(&app).await;
    let idea_id = create_idea(&app, &cookie, "vote for me once").await;
    let body = json!({ "ideaId": idea_id });

    let response = send(&app, post_json("/callable/upvoteIdea", Some(&cookie), body.clone())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["upvotes"], 1);

    let response = send(&app, post_json("/callable/upvoteIdea", Some(&cookie), body.clone())).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "already-exists");

    let (other, _) = sign_in(&app).await;
    let response = send(&app, post_json("/callable/upvoteIdea", Some(&other), body)).await;
    assert_eq!(body_json(response).await["upvotes"], 2);
}

#[tokio::test]
async fn vote_status_and_count_follow_the_ledger() {
    let (app, _) = build_test_app(UpvoteMode::Ledger);
    let (cookie, _) = sign_in(&app).await;
    let idea_id = create_idea(&app, &cookie, "count my votes").await;
    let body = json!({ "ideaId": idea_id });

    let status = body_json(send(&app, post_json("/callable/hasUserVoted", Some(&cookie), body.clone())).await).await;
    assert_eq!(status["hasVoted"], false);
    assert!(status["votedAt"].is_null());

    send(&app, post_json("/callable/upvoteIdea", Some(&cookie), body.clone())).await;

    let status = body_json(send(&app, post_json("/callable/hasUserVoted", Some(&cookie), body.clone())).await).await;
    assert_eq!(status["hasVoted"], true);
    assert!(status["votedAt"].is_string());

    let count = body_json(send(&app, post_json("/callable/getVoteCount", None, body)).await).await;
    assert_eq!(count["voteCount"], 1);
}

#[tokio::test]
async fn has_voted_requires_a_session() {
    let (app, _) = build_test_app(UpvoteMode::Ledger);

    let response = send(&app, post_json("/callable/hasUserVoted", None, json!({ "ideaId": "x" }))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn gated_upvote_is_refused_in_counter_mode() {
    let (app, _) = build_test_app(UpvoteMode::Counter);
    let (cookie, _) = sign_in(&app).await;
    let idea_id = create_idea(&app, &cookie, "counter board").await;

    let response = send(&app, post_json("/callable/upvoteIdea", Some(&cookie), json!({ "ideaId": idea_id }))).await;
    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    assert_eq!(body_json(response).await["code"], "failed-precondition");
}
