mod api;
mod api_client;
mod cli;
mod config;
mod errors;
mod models;
mod pages;
mod routes;
mod session;
mod state;
#[cfg(test)]
mod test_support;
mod views;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::Api;
use crate::api_client::ApiClient;
use crate::config::Config;
use crate::session::{FileTokenStore, SharedTokenStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cmd::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    // Page text goes to stdout; logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let file_store = FileTokenStore::new(config.token_path.clone());
    debug!("Session token file: {}", file_store.path().display());
    let tokens: SharedTokenStore = Arc::new(file_store);

    let client = ApiClient::new(&config.api_url, tokens.clone());
    debug!("RecruitSage v{} against {}", env!("CARGO_PKG_VERSION"), client.base_url());
    let state = AppState {
        api: Api::new(client),
        tokens,
        config,
    };

    match cli::run(cmd, &state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.report());
            ExitCode::from(err.exit_code())
        }
    }
}
