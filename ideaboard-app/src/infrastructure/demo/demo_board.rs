use crate::domain::{Idea, VoteRecord};
use crate::infrastructure::db::UpvoteOutcome;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

const DEMO_IDEAS: &[&str] = &[
    "Welcome to the Idea Board! This is a demo idea. Configure a database to start saving real ideas.",
    "Set DATABASE_URL in your .env file to enable persistence and shared live updates.",
];

#[derive(Default)]
struct DemoState {
    ideas: Vec<Idea>,
    votes: HashMap<(Uuid, Uuid), VoteRecord>,
}

/// Local, non-persistent stand-in for the database. The mutex makes every
/// operation atomic, so it keeps the same guarantees as the SQL path.
pub struct DemoBoard {
    state: Mutex<DemoState>,
}

impl DemoBoard {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(DemoState::default()),
        }
    }

    /// Board pre-filled with the welcome ideas shown in demo mode. Each
    /// seeded upvote has a matching ledger entry from a demo voter.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let mut state = DemoState::default();

        for (i, text) in DEMO_IDEAS.iter().enumerate() {
            let idea = Idea {
                id: Uuid::new_v4(),
                text: (*text).to_string(),
                upvotes: 5 - 2 * i as i32,
                created_at: now - Duration::hours(i as i64),
                author_id: Uuid::nil(),
            };
            for _ in 0..idea.upvotes {
                let user_id = Uuid::new_v4();
                state.votes.insert(
                    (idea.id, user_id),
                    VoteRecord {
                        idea_id: idea.id,
                        user_id,
                        voted_at: idea.created_at,
                    },
                );
            }
            state.ideas.push(idea);
        }

        Self {
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DemoState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, mut idea: Idea) -> Idea {
        idea.upvotes = 0;
        idea.created_at = Utc::now();
        self.lock().ideas.push(idea.clone());
        idea
    }

    pub fn find(&self, id: Uuid) -> Option<Idea> {
        self.lock().ideas.iter().find(|i| i.id == id).cloned()
    }

    pub fn list_recent(&self) -> Vec<Idea> {
        let mut ideas = self.lock().ideas.clone();
        ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        ideas
    }

    pub fn increment(&self, id: Uuid) -> UpvoteOutcome {
        let mut state = self.lock();
        match state.ideas.iter_mut().find(|i| i.id == id) {
            Some(idea) => {
                idea.upvotes += 1;
                UpvoteOutcome::Applied(idea.upvotes)
            }
            None => UpvoteOutcome::IdeaMissing,
        }
    }

    pub fn cast(&self, idea_id: Uuid, user_id: Uuid) -> UpvoteOutcome {
        let mut state = self.lock();
        let state = &mut *state;

        let Some(idea) = state.ideas.iter_mut().find(|i| i.id == idea_id) else {
            return UpvoteOutcome::IdeaMissing;
        };
        if state.votes.contains_key(&(idea_id, user_id)) {
            return UpvoteOutcome::AlreadyVoted;
        }

        state.votes.insert(
            (idea_id, user_id),
            VoteRecord {
                idea_id,
                user_id,
                voted_at: Utc::now(),
            },
        );
        idea.upvotes += 1;
        UpvoteOutcome::Applied(idea.upvotes)
    }

    pub fn vote(&self, idea_id: Uuid, user_id: Uuid) -> Option<VoteRecord> {
        self.lock().votes.get(&(idea_id, user_id)).cloned()
    }

    pub fn count_votes(&self, idea_id: Uuid) -> u64 {
        self.lock().votes.keys().filter(|(idea, _)| *idea == idea_id).count() as u64
    }
}

impl Default for DemoBoard {
    fn default() -> Self {
        Self::new()
    }
}
