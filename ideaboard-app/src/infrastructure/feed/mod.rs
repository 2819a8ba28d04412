mod idea_feed;

pub use idea_feed::{IdeaFeed, DEFAULT_FEED_CAPACITY};
