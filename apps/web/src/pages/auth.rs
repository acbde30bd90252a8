use std::io::Write;

use crate::errors::AppError;
use crate::models::auth::Role;
use crate::pages;
use crate::routes::Route;
use crate::state::AppState;
use crate::views::auth::{SignInForm, SignUpForm};

/// Submits the sign-in form. On success the token is saved and the dashboard is shown.
pub async fn sign_in(
    state: &AppState,
    form: SignInForm,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let next = form.submit(&state.api.auth, state.tokens.as_ref()).await?;
    writeln!(out, "Signed in. Redirecting to {next}")?;
    writeln!(out)?;
    pages::navigate(state, next, out).await
}

/// Submits the sign-up form.
pub async fn sign_up(
    state: &AppState,
    form: SignUpForm,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let outcome = form.submit(&state.api.auth, state.tokens.as_ref()).await?;
    writeln!(out, "{}", outcome.message)?;
    match outcome.next {
        Route::SignIn => writeln!(out, "Sign in with: {}", Route::SignIn.command())?,
        next => {
            writeln!(out, "Redirecting to {next}")?;
            writeln!(out)?;
            pages::navigate(state, next, out).await?;
        }
    }
    Ok(())
}

pub fn render_sign_in(out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "Sign in")?;
    writeln!(
        out,
        "  {} --email <EMAIL> [--password <PASSWORD>]",
        Route::SignIn.command()
    )?;
    writeln!(out, "No account? {}", Route::SignUp.command())?;
    Ok(())
}

pub fn render_sign_up(out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "Create your account")?;
    writeln!(out, "Choose your role and complete your profile to begin.")?;
    for role in [Role::Hr, Role::Candidate] {
        writeln!(
            out,
            "  --role {:<10} {}: {}",
            role.as_str(),
            role.label(),
            role.description()
        )?;
    }
    writeln!(
        out,
        "  {} --name <NAME> --email <EMAIL> [--password <PASSWORD>] [--role <ROLE>]",
        Route::SignUp.command()
    )?;
    writeln!(out, "Already have an account? {}", Route::SignIn.command())?;
    Ok(())
}
