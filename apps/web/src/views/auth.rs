//! Sign-in and sign-up form view models.
//!
//! Both persist a fresh token on success. Nothing else in the front end writes it.

use tracing::info;

use crate::api::AuthClient;
use crate::errors::AppError;
use crate::models::auth::{Role, SignInRequest, SignUpRequest};
use crate::routes::Route;
use crate::session::TokenStore;

pub const PASSWORD_MIN_CHARS: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// Signs in, stores the token and returns where to go next.
    pub async fn submit(&self, auth: &AuthClient, tokens: &dyn TokenStore) -> Result<Route, AppError> {
        require("Email", &self.email)?;
        require("Password", &self.password)?;

        let response = auth
            .sign_in(&SignInRequest {
                email: self.email.trim().to_string(),
                password: self.password.clone(),
            })
            .await?;
        tokens.set_token(&response.token)?;
        info!("Signed in as {}", self.email.trim());
        Ok(Route::Dashboard)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignUpOutcome {
    pub message: String,
    pub next: Route,
}

impl SignUpForm {
    /// Creates the account. Navigates to the dashboard only when the backend also
    /// issued a token; otherwise the user signs in next.
    pub async fn submit(
        &self,
        auth: &AuthClient,
        tokens: &dyn TokenStore,
    ) -> Result<SignUpOutcome, AppError> {
        require("Full name", &self.name)?;
        require("Email", &self.email)?;
        require("Password", &self.password)?;
        if self.password.chars().count() < PASSWORD_MIN_CHARS {
            return Err(AppError::Validation(format!(
                "Password must be at least {PASSWORD_MIN_CHARS} characters"
            )));
        }

        let response = auth
            .sign_up(&SignUpRequest {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                password: self.password.clone(),
                role: self.role,
            })
            .await?;
        info!("Account created for {} as {}", response.email, response.role);

        let next = match response.token.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(token) => {
                tokens.set_token(token)?;
                Route::Dashboard
            }
            None => Route::SignIn,
        };
        Ok(SignUpOutcome {
            message: format!("Account created for {} as {}", response.email, response.role),
            next,
        })
    }
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}
