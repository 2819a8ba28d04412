use serde::{Deserialize, Serialize};

/// Handle returned by anonymous sign-in. The user id is opaque and stable for
/// the lifetime of the cookie session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user_id: uuid::Uuid,
}

impl AuthSession {
    pub fn new(user_id: uuid::Uuid) -> Self {
        Self { user_id }
    }
}
