use tracing::debug;

use crate::errors::AppError;
use crate::routes::Route;
use crate::session::TokenStore;

/// Mount check for gated pages: no token means "go to sign-in".
pub fn require_session(route: Route, tokens: &dyn TokenStore) -> Result<(), AppError> {
    if !route.requires_session() || tokens.get_token().is_some() {
        return Ok(());
    }
    debug!("No session token on {route}; redirecting to {}", Route::SignIn);
    Err(AppError::SignedOut)
}
