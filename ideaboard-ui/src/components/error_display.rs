use ideaboard_errors::AppError;
use leptos::prelude::*;

/// Heading shown above the message, by error kind.
pub fn error_title(err: &AppError) -> &'static str {
    match err {
        AppError::Unauthenticated => "Not signed in yet",
        AppError::InvalidArgument(_) => "That didn't look right",
        AppError::NotFound => "Idea not found",
        AppError::AlreadyExists => "Already voted",
        AppError::Aborted | AppError::ResourceExhausted(_) => "Slow down a little",
        AppError::FailedPrecondition(_) | AppError::Internal(_) => "Something went wrong",
    }
}

/// Server-rendered error card. The board has no client runtime, so the way
/// back is a plain link that reloads it.
#[component]
pub fn ErrorDisplay(error: AppError) -> impl IntoView {
    view! {
        <div class="error" role="alert">
            <p class="error__title">{error_title(&error)}</p>
            <p class="error__message">{error.user_message().to_string()}</p>
            <a href="/" class="error__retry">"Reload the board"</a>
        </div>
    }
}
