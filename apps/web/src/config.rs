use std::path::PathBuf;

use anyhow::{Context, Result};

const TOKEN_FILE_NAME: &str = "token";
const DEFAULT_UPLOAD_JOB_ID: &str = "J-1021";
const DEFAULT_CANDIDATE_NAME: &str = "Demo Candidate";

/// Frontend configuration loaded from environment variables.
/// Fails at startup if the API base URL is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub token_path: PathBuf,
    pub upload_job_id: String,
    pub candidate_name: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the process env.
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = normalize_base_url(&require_var(&var, "RECRUITSAGE_API_URL")?);
        let token_path = match var("RECRUITSAGE_TOKEN_PATH") {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_token_path()?,
        };

        Ok(Config {
            api_url,
            token_path,
            upload_job_id: var("RECRUITSAGE_UPLOAD_JOB_ID")
                .unwrap_or_else(|| DEFAULT_UPLOAD_JOB_ID.to_string()),
            candidate_name: var("RECRUITSAGE_CANDIDATE_NAME")
                .unwrap_or_else(|| DEFAULT_CANDIDATE_NAME.to_string()),
            rust_log: var("RUST_LOG").unwrap_or_else(|| "warn".to_string()),
        })
    }
}

fn require_var(var: impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn default_token_path() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .context("Could not determine a config directory; set RECRUITSAGE_TOKEN_PATH")?;
    Ok(dir.join("recruitsage").join(TOKEN_FILE_NAME))
}

/// Paths are appended verbatim, so a trailing slash would double up.
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_url_names_the_variable() {
        let err =
            Config::from_vars(vars(&[("RECRUITSAGE_TOKEN_PATH", "/tmp/token")])).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "Required environment variable 'RECRUITSAGE_API_URL' is not set"
        );
    }

    #[test]
    fn test_defaults_fill_optional_values() {
        let config = Config::from_vars(vars(&[
            ("RECRUITSAGE_API_URL", "http://localhost:8000/"),
            ("RECRUITSAGE_TOKEN_PATH", "/tmp/recruitsage-token"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.token_path, PathBuf::from("/tmp/recruitsage-token"));
        assert_eq!(config.upload_job_id, "J-1021");
        assert_eq!(config.candidate_name, "Demo Candidate");
        assert_eq!(config.rust_log, "warn");
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let config = Config::from_vars(vars(&[
            ("RECRUITSAGE_API_URL", "https://api.example.com"),
            ("RECRUITSAGE_TOKEN_PATH", "/tmp/t"),
            ("RECRUITSAGE_UPLOAD_JOB_ID", "J-7"),
            ("RECRUITSAGE_CANDIDATE_NAME", "Ada"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.upload_job_id, "J-7");
        assert_eq!(config.candidate_name, "Ada");
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_blank_token_path_uses_config_dir() {
        let result = Config::from_vars(vars(&[
            ("RECRUITSAGE_API_URL", "http://localhost:8000"),
            ("RECRUITSAGE_TOKEN_PATH", "  "),
        ]));
        match dirs::config_dir() {
            Some(dir) => assert_eq!(
                result.unwrap().token_path,
                dir.join("recruitsage").join("token")
            ),
            None => assert!(result.is_err()),
        }
    }

    #[test]
    fn test_normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:8000/"),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize_base_url(" http://api.example.com//"),
            "http://api.example.com"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_path_prefix() {
        assert_eq!(
            normalize_base_url("https://example.com/api/v1"),
            "https://example.com/api/v1"
        );
    }
}
