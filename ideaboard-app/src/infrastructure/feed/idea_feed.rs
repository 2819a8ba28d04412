use crate::domain::BoardSnapshot;
use tokio::sync::broadcast;

pub const DEFAULT_FEED_CAPACITY: usize = 16;

/// Live query over the idea list. Every committed change publishes the full
/// ordered list, so a subscriber that lags only needs the latest snapshot.
#[derive(Clone)]
pub struct IdeaFeed {
    sender: broadcast::Sender<BoardSnapshot>,
}

impl IdeaFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BoardSnapshot> {
        self.sender.subscribe()
    }

    /// Returns how many subscribers received the snapshot.
    pub fn publish(&self, snapshot: BoardSnapshot) -> usize {
        self.sender.send(snapshot).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for IdeaFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_CAPACITY)
    }
}
