use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Failure kinds shared by the server, the remote callables and the UI.
///
/// `Display` renders `"<code>: <detail>"` so the kind survives being carried
/// as a plain string (e.g. inside a server function error) and can be
/// recovered with [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("unauthenticated: user must be authenticated")]
    Unauthenticated,

    #[error("invalid-argument: {0}")]
    InvalidArgument(String),

    #[error("not-found: idea not found")]
    NotFound,

    #[error("already-exists: user has already upvoted this idea")]
    AlreadyExists,

    #[error("aborted: too many concurrent updates on this idea")]
    Aborted,

    #[error("failed-precondition: {0}")]
    FailedPrecondition(String),

    #[error("resource-exhausted: {0}")]
    ResourceExhausted(String),

    #[error("internal: {0}")]
    Internal(String),
}

impl FromStr for AppError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, detail) = s.split_once(": ").unwrap_or((s, ""));
        let detail = detail.to_string();

        Ok(match code {
            "unauthenticated" => AppError::Unauthenticated,
            "invalid-argument" => AppError::InvalidArgument(detail),
            "not-found" => AppError::NotFound,
            "already-exists" => AppError::AlreadyExists,
            "aborted" => AppError::Aborted,
            "failed-precondition" => AppError::FailedPrecondition(detail),
            "resource-exhausted" => AppError::ResourceExhausted(detail),
            "internal" => AppError::Internal(detail),
            _ => AppError::Internal(s.to_string()),
        })
    }
}

impl AppError {
    /// Remote-procedure status code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::InvalidArgument(_) => "invalid-argument",
            Self::NotFound => "not-found",
            Self::AlreadyExists => "already-exists",
            Self::Aborted => "aborted",
            Self::FailedPrecondition(_) => "failed-precondition",
            Self::ResourceExhausted(_) => "resource-exhausted",
            Self::Internal(_) => "internal",
        }
    }

    pub fn user_message(&self) -> &str {
        match self {
            Self::Unauthenticated => "Please wait for sign-in to complete, then try again.",
            Self::InvalidArgument(msg) => msg,
            Self::NotFound => "This idea no longer exists. Please refresh the page.",
            Self::AlreadyExists => "You have already upvoted this idea!",
            Self::Aborted => "Lots of people are voting right now. Please try again.",
            Self::FailedPrecondition(_) => "This action is not enabled on this board.",
            Self::ResourceExhausted(msg) => msg,
            Self::Internal(_) => "Something went wrong on our side. Please try again later.",
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        code: &'static str,
        message: String,
    }

    impl AppError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
                AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                AppError::NotFound => StatusCode::NOT_FOUND,
                AppError::AlreadyExists | AppError::Aborted => StatusCode::CONFLICT,
                AppError::FailedPrecondition(_) => StatusCode::PRECONDITION_FAILED,
                AppError::ResourceExhausted(_) => StatusCode::TOO_MANY_REQUESTS,
                AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = self.status_code();
            let message = match &self {
                // Store details stay in the logs.
                AppError::Internal(_) => "An error occurred while processing the request.".to_string(),
                other => other.user_message().to_string(),
            };
            (status, Json(ErrorResponse { code: self.code(), message })).into_response()
        }
    }
}
