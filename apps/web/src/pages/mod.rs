// Pages: compose view models, run one user action, and render text.
// Gated pages check the session on mount and fail with `AppError::SignedOut`.

pub mod auth;
pub mod candidate;
pub mod guard;
pub mod hr;
pub mod landing;
pub mod overview;

use std::io::{self, BufRead, Write};

use crate::errors::AppError;
use crate::routes::Route;
use crate::state::AppState;

/// Shows the default view of `route`.
pub async fn navigate(
    state: &AppState,
    route: Route,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match route {
        Route::Landing => landing::render(out),
        Route::SignIn => auth::render_sign_in(out),
        Route::SignUp => auth::render_sign_up(out),
        Route::Dashboard => overview::render(out),
        Route::HrDashboard => hr::handle(state, hr::HrAction::Show, |_| Ok(false), out).await,
        Route::CandidateDashboard => {
            candidate::handle(state, candidate::CandidateAction::Show, None, out).await
        }
    }
}

/// Asks a yes/no question on the terminal. Anything but "y"/"yes" is a no.
pub fn confirm_on_terminal(question: &str) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{question} [y/N] ")?;
    stderr.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Reads one line from the terminal after printing `prompt`.
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{prompt}")?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Api;
    use crate::api_client::ApiClient;
    use crate::config::Config;
    use crate::session::{MemoryTokenStore, SharedTokenStore};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn state(tokens: SharedTokenStore) -> AppState {
        let base_url = "http://127.0.0.1:9";
        AppState {
            api: Api::new(ApiClient::new(base_url, tokens.clone())),
            tokens,
            config: Config {
                api_url: base_url.to_string(),
                token_path: PathBuf::from("/nonexistent/token"),
                upload_job_id: "J-1021".to_string(),
                candidate_name: "Demo Candidate".to_string(),
                rust_log: "warn".to_string(),
            },
        }
    }

    async fn render(route: Route) -> Result<String, AppError> {
        let state = state(Arc::new(MemoryTokenStore::default()));
        let mut out = Vec::new();
        navigate(&state, route, &mut out).await?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[tokio::test]
    async fn test_landing_links_to_auth_pages() {
        let text = render(Route::Landing).await.unwrap();
        assert!(text.contains("How it works"));
        assert!(text.contains("recruitsage signin"));
        assert!(text.contains("recruitsage signup"));
    }

    #[tokio::test]
    async fn test_overview_is_open_without_session() {
        let text = render(Route::Dashboard).await.unwrap();
        assert!(text.contains("Resumes received"));
        assert!(text.contains("113"));
    }

    #[tokio::test]
    async fn test_sign_up_page_lists_roles() {
        let text = render(Route::SignUp).await.unwrap();
        assert!(text.contains("HR / Recruiter"));
        assert!(text.contains("--role candidate"));
    }

    #[tokio::test]
    async fn test_gated_dashboards_redirect_without_session() {
        assert!(matches!(
            render(Route::HrDashboard).await,
            Err(AppError::SignedOut)
        ));
        assert!(matches!(
            render(Route::CandidateDashboard).await,
            Err(AppError::SignedOut)
        ));
    }
}
