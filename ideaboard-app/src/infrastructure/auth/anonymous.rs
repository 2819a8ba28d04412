use crate::domain::AuthSession;
use ideaboard_errors::AppError;
use tower_sessions::Session;
use uuid::Uuid;

pub const SESSION_USER_KEY: &str = "user_id";

/// Anonymous sign-in backed by the cookie session. Nothing happens until a
/// caller invokes [`AnonymousAuth::authenticate`].
#[derive(Clone, Default)]
pub struct AnonymousAuth;

impl AnonymousAuth {
    pub fn new() -> Self {
        Self
    }

    /// Returns the session's existing identity, or mints and stores a new one.
    pub async fn authenticate(&self, session: &Session) -> Result<AuthSession, AppError> {
        if let Some(existing) = self.current(session).await? {
            return Ok(existing);
        }

        let user_id = Uuid::new_v4();
        session
            .insert(SESSION_USER_KEY, user_id)
            .await
            .map_err(session_error)?;

        tracing::info!(%user_id, "Signed in anonymously");
        Ok(AuthSession::new(user_id))
    }

    pub async fn current(&self, session: &Session) -> Result<Option<AuthSession>, AppError> {
        let user_id: Option<Uuid> = session
            .get(SESSION_USER_KEY)
            .await
            .map_err(session_error)?;

        Ok(user_id.map(AuthSession::new))
    }
}

fn session_error(err: tower_sessions::session::Error) -> AppError {
    tracing::error!("Session store error: {}", err);
    AppError::Internal(err.to_string())
}
