use std::path::Path;

use bytes::Bytes;
use reqwest::multipart::{Form, Part};

use crate::api_client::{ApiClient, ApiRequest, RequestError};
use crate::models::resume::{ResumeDetail, UploadResult};

/// A resume file held in memory between "choose" and "upload".
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub contents: Bytes,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    pub async fn read(path: &Path) -> std::io::Result<Self> {
        let contents = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());
        Ok(Self::new(file_name, contents))
    }

    /// Mime type for the formats the upload form offers; others go untyped.
    fn mime(&self) -> Option<&'static str> {
        let ext = Path::new(&self.file_name)
            .extension()?
            .to_str()?
            .to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some("application/pdf"),
            "doc" => Some("application/msword"),
            "docx" => {
                Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
            }
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct ResumesClient {
    api: ApiClient,
}

impl ResumesClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// POST /resumes/upload (multipart: file, job_id, candidate_name)
    pub async fn upload(
        &self,
        file: &UploadFile,
        job_id: &str,
        candidate_name: &str,
    ) -> Result<UploadResult, RequestError> {
        let fallback = "Upload failed";
        let mut part = Part::stream(file.contents.clone()).file_name(file.file_name.clone());
        if let Some(mime) = file.mime() {
            part = part
                .mime_str(mime)
                .map_err(|e| RequestError::transport(fallback, e))?;
        }
        let form = Form::new()
            .part("file", part)
            .text("job_id", job_id.to_string())
            .text("candidate_name", candidate_name.to_string());

        self.api
            .request_as(
                ApiRequest::post("/resumes/upload")
                    .multipart(form)
                    .fallback(fallback),
            )
            .await
    }

    /// GET /resumes/{resume_id}
    pub async fn get(&self, resume_id: &str) -> Result<ResumeDetail, RequestError> {
        self.api
            .request_as(
                ApiRequest::get("/resumes")
                    .segment(resume_id)
                    .fallback("Could not fetch resume text"),
            )
            .await
    }
}
