//! Listing order and live delivery.

mod common;

use common::{persistent_context, submit};
use ideaboard_app::domain::{StoreMode, UpvoteMode};
use std::time::Duration;

#[tokio::test]
async fn listing_is_newest_first() {
    let ctx = persistent_context(UpvoteMode::Ledger).await;

    let mut submitted = Vec::new();
    for text in ["oldest", "middle", "newest"] {
        submitted.push(submit(&ctx, text).await.id);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    submitted.reverse();

    let snapshot = ctx.list_ideas.snapshot().await.unwrap();
    let listed: Vec<_> = snapshot.ideas.iter().map(|i| i.id).collect();

    assert_eq!(snapshot.mode, StoreMode::Persistent);
    assert_eq!(listed, submitted);
}

#[tokio::test]
async fn new_idea_arrives_in_next_push() {
    let ctx = persistent_context(UpvoteMode::Ledger).await;
    let mut rx = ctx.feed.subscribe();

    let idea = submit(&ctx, "push me").await;

    let snapshot = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("push within timeout")
        .expect("feed open");
    assert_eq!(snapshot.ideas.first().map(|i| i.id), Some(idea.id));
}

#[tokio::test]
async fn upvote_push_carries_new_count() {
    let ctx = persistent_context(UpvoteMode::Counter).await;
    let idea = submit(&ctx, "watch me grow").await;
    let mut rx = ctx.feed.subscribe();

    ctx.upvote_idea
        .execute_ungated(Some(&idea.id.to_string()))
        .await
        .unwrap();

    let snapshot = rx.recv().await.unwrap();
    let pushed = snapshot.ideas.iter().find(|i| i.id == idea.id).unwrap();
    assert_eq!(pushed.upvotes, 1);
}
