mod anonymous;

pub use anonymous::{AnonymousAuth, SESSION_USER_KEY};
