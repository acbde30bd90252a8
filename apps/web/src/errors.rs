use thiserror::Error;

use crate::api_client::RequestError;
use crate::routes::Route;
use crate::session::SessionError;

/// Page-level error type.
/// Pages catch these at the action boundary and show `Display` to the user.
#[derive(Debug, Error)]
pub enum AppError {
    /// A request failed; the message is the backend `detail` or the call's fallback.
    #[error("{0}")]
    Request(#[from] RequestError),

    /// A request failed and the page shows a fixed alert instead of the backend message.
    #[error("{message}")]
    Action {
        message: &'static str,
        #[source]
        source: RequestError,
    },

    #[error(transparent)]
    Session(#[from] SessionError),

    /// A required form field is missing or too short.
    #[error("{0}")]
    Validation(String),

    /// No session token. A navigation condition, not a failed request.
    #[error("You are not signed in")]
    SignedOut,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn action(message: &'static str) -> impl FnOnce(RequestError) -> AppError {
        move |source| {
            tracing::warn!("{message}: {source}");
            AppError::Action { message, source }
        }
    }

    /// The line shown on the terminal. Request failures and form errors are shown
    /// exactly as their message, like an alert.
    pub fn report(&self) -> String {
        match self {
            AppError::SignedOut => format!(
                "Redirecting to {}: run `{}` first",
                Route::SignIn,
                Route::SignIn.command()
            ),
            AppError::Request(_) | AppError::Action { .. } | AppError::Validation(_) => {
                self.to_string()
            }
            AppError::Session(_) | AppError::Io(_) => format!("Error: {self}"),
        }
    }

    /// Process exit code for the terminal front end.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::SignedOut => 2,
            AppError::Validation(_) => 3,
            AppError::Request(_) | AppError::Action { .. } => 4,
            AppError::Session(_) | AppError::Io(_) => 1,
        }
    }
}
