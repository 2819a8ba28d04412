mod board;
mod idea;
mod user;
mod vote;

pub use board::{BoardSnapshot, StoreMode};
pub use idea::{Idea, IdeaText, MAX_IDEA_CHARS};
pub use user::AuthSession;
pub use vote::{IdeaRequest, UpvoteMode, UpvoteResponse, VoteCount, VoteRecord, VoteStatus};
