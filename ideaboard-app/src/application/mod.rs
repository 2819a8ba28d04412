mod list_ideas;
mod submit_idea;
mod upvote_idea;
mod vote_queries;

pub use list_ideas::ListIdeas;
pub use submit_idea::SubmitIdea;
pub use upvote_idea::UpvoteIdea;
pub use vote_queries::VoteQueries;

use crate::infrastructure::feed::IdeaFeed;
use crate::infrastructure::store::IdeaStore;

/// Pushes the committed board to live subscribers. The mutation already
/// succeeded, so a failed re-read is only logged.
async fn publish_board(store: &IdeaStore, feed: &IdeaFeed) {
    match store.snapshot().await {
        Ok(snapshot) => {
            let delivered = feed.publish(snapshot);
            tracing::debug!(delivered, "Published board snapshot");
        }
        Err(e) => tracing::warn!("Could not refresh live board: {}", e),
    }
}
