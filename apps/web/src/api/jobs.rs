use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::api_client::{ApiClient, ApiRequest, RequestError};
use crate::models::job::{unwrap_created, Job, JobDraft};

/// Candidate-facing listing.
const OPENINGS_PATH: &str = "/jobs";
/// HR-facing collection. Differs from `OPENINGS_PATH` on the backend; both are used as-is.
const POSTINGS_PATH: &str = "/jobs/jobs";

/// Partial update body. Absent fields are left alone by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&JobDraft> for JobPatch {
    fn from(draft: &JobDraft) -> Self {
        Self {
            title: Some(draft.title.clone()),
            location: Some(draft.location.clone()),
            description: Some(draft.description.clone()),
        }
    }
}

/// The HR job-posting operations. Implement this to swap the backend without
/// touching the HR dashboard.
#[async_trait]
pub trait JobBoard: Send + Sync {
    async fn list_postings(&self) -> Result<Vec<Job>, RequestError>;
    async fn create_posting(&self, draft: &JobDraft) -> Result<Job, RequestError>;
    async fn update_posting(&self, id: &str, patch: &JobPatch) -> Result<Job, RequestError>;
    async fn delete_posting(&self, id: &str) -> Result<(), RequestError>;
}

#[derive(Clone)]
pub struct JobsClient {
    api: ApiClient,
}

impl JobsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// GET /jobs: open roles shown to candidates.
    pub async fn list_openings(&self) -> Result<Vec<Job>, RequestError> {
        let value = self
            .api
            .request(ApiRequest::get(OPENINGS_PATH).fallback("Failed to fetch jobs"))
            .await?;
        Ok(Job::list_from_value(&value))
    }
}

#[async_trait]
impl JobBoard for JobsClient {
    /// GET /jobs/jobs
    async fn list_postings(&self) -> Result<Vec<Job>, RequestError> {
        let value = self
            .api
            .request(ApiRequest::get(POSTINGS_PATH).fallback("Failed to load jobs"))
            .await?;
        Ok(Job::list_from_value(&value))
    }

    /// POST /jobs/jobs
    async fn create_posting(&self, draft: &JobDraft) -> Result<Job, RequestError> {
        let value = self
            .api
            .request(
                ApiRequest::post(POSTINGS_PATH)
                    .json(draft)
                    .fallback("Failed to create job"),
            )
            .await?;
        Ok(Job::from_value(unwrap_created(&value)))
    }

    /// PATCH /jobs/jobs/{id}
    async fn update_posting(&self, id: &str, patch: &JobPatch) -> Result<Job, RequestError> {
        let value: Value = self
            .api
            .request(
                ApiRequest::patch(POSTINGS_PATH)
                    .segment(id)
                    .json(patch)
                    .fallback("Failed to update job"),
            )
            .await?;
        Ok(Job::from_value(&value))
    }

    /// DELETE /jobs/jobs/{id}
    async fn delete_posting(&self, id: &str) -> Result<(), RequestError> {
        self.api
            .request(
                ApiRequest::delete(POSTINGS_PATH)
                    .segment(id)
                    .fallback("Failed to delete job"),
            )
            .await?;
        Ok(())
    }
}
