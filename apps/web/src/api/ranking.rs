use crate::api_client::{ApiClient, ApiRequest, RequestError};
use crate::models::rank::{RankRequest, RankScore};

#[derive(Clone)]
pub struct RankingClient {
    api: ApiClient,
}

impl RankingClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// POST /rank
    pub async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<RankScore, RequestError> {
        self.api
            .request_as(
                ApiRequest::post("/rank")
                    .json(&RankRequest {
                        resume_text,
                        job_description,
                    })
                    .fallback("Ranking failed"),
            )
            .await
    }
}
