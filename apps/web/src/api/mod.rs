//! Resource clients: one thin, typed wrapper per backend resource family.
//!
//! Each operation fixes a path, a method and a fallback message, then delegates to
//! `ApiClient`. Errors pass through untouched.

pub mod auth;
pub mod jobs;
pub mod ranking;
pub mod resumes;

use crate::api_client::ApiClient;

pub use auth::AuthClient;
pub use jobs::{JobBoard, JobsClient};
pub use ranking::RankingClient;
pub use resumes::{ResumesClient, UploadFile};

/// Every resource client, sharing one session-aware `ApiClient`.
#[derive(Clone)]
pub struct Api {
    pub auth: AuthClient,
    pub jobs: JobsClient,
    pub ranking: RankingClient,
    pub resumes: ResumesClient,
}

impl Api {
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthClient::new(client.clone()),
            jobs: JobsClient::new(client.clone()),
            ranking: RankingClient::new(client.clone()),
            resumes: ResumesClient::new(client),
        }
    }
}
