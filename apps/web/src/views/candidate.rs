//! Candidate dashboard view model.
//!
//! Flow: load openings → (optionally) select one → choose a file → upload →
//! preview. Preview fetches the extracted text and then ranks it against the
//! selected job description; the two calls are sequenced because ranking needs
//! the text. Failures land in `message`, never in a panic.

use tracing::info;

use crate::api::{JobsClient, RankingClient, ResumesClient, UploadFile};
use crate::models::job::Job;
use crate::models::rank::RankScore;

/// Characters of extracted text shown in the preview.
pub const PREVIEW_CHARS: usize = 800;

/// Ranked against when no job (or a job without description) is selected.
pub const DEFAULT_JOB_DESCRIPTION: &str =
    "React Next.js frontend developer with API integration experience";

/// Form fields sent with every upload.
#[derive(Debug, Clone)]
pub struct UploadDefaults {
    pub job_id: String,
    pub candidate_name: String,
}

/// One row of the "My applications" table.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub job: &'static str,
    pub company: &'static str,
    pub status: &'static str,
    pub applied: &'static str,
}

/// Placeholder rows; no applications endpoint exists yet.
pub const SAMPLE_APPLICATIONS: &[Application] = &[
    Application {
        job: "Frontend Engineer",
        company: "Acme Corp",
        status: "Under review",
        applied: "2d ago",
    },
    Application {
        job: "Data Analyst",
        company: "Northwind",
        status: "Assessment",
        applied: "5d ago",
    },
];

pub struct CandidateDashboard {
    jobs_client: JobsClient,
    resumes: ResumesClient,
    ranking: RankingClient,
    defaults: UploadDefaults,

    pub jobs: Vec<Job>,
    pub selected_job_id: Option<String>,
    pub selected_job_description: String,
    pub file: Option<UploadFile>,
    pub uploading: bool,
    pub previewing: bool,
    pub message: String,
    pub resume_id: String,
    pub preview: String,
    pub score: Option<RankScore>,
}

impl CandidateDashboard {
    pub fn new(
        jobs_client: JobsClient,
        resumes: ResumesClient,
        ranking: RankingClient,
        defaults: UploadDefaults,
    ) -> Self {
        Self {
            jobs_client,
            resumes,
            ranking,
            defaults,
            jobs: Vec::new(),
            selected_job_id: None,
            selected_job_description: String::new(),
            file: None,
            uploading: false,
            previewing: false,
            message: String::new(),
            resume_id: String::new(),
            preview: String::new(),
            score: None,
        }
    }

    /// Fetches openings. On failure the list stays as it was and the message is set.
    pub async fn load_jobs(&mut self) {
        match self.jobs_client.list_openings().await {
            Ok(jobs) => self.jobs = jobs,
            Err(e) => self.message = e.to_string(),
        }
    }

    /// Selects a job by its (normalized) id. Unknown ids clear the selection.
    pub fn select_job(&mut self, id: &str) -> bool {
        match self.jobs.iter().find(|j| j.id == id) {
            Some(job) => {
                self.selected_job_id = Some(job.id.clone());
                self.selected_job_description = job.description.clone();
                true
            }
            None => {
                self.selected_job_id = None;
                self.selected_job_description.clear();
                false
            }
        }
    }

    pub fn selected_job(&self) -> Option<&Job> {
        let id = self.selected_job_id.as_deref()?;
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn choose_file(&mut self, file: UploadFile) {
        self.file = Some(file);
    }

    /// Uploads the chosen file and keeps the returned resume id.
    pub async fn upload(&mut self) {
        self.message.clear();
        let Some(file) = self.file.as_ref() else {
            self.message = "Please choose a file first.".to_string();
            return;
        };

        // Only a backend-issued id means anything to the upload endpoint.
        let job_id = self
            .selected_job()
            .filter(|j| j.has_backend_id())
            .map(|j| j.id.clone())
            .unwrap_or_else(|| self.defaults.job_id.clone());

        self.uploading = true;
        let result = self
            .resumes
            .upload(file, &job_id, &self.defaults.candidate_name)
            .await;
        self.uploading = false;

        match result {
            Ok(upload) => {
                info!("Uploaded resume {} for job {job_id}", upload.resume_id);
                self.message = upload.summary();
                self.resume_id = upload.resume_id;
                self.preview.clear();
                self.score = None;
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    /// Fetches the extracted text, then scores it against the selected job.
    pub async fn preview(&mut self) {
        self.message.clear();
        self.preview.clear();
        self.score = None;
        if self.resume_id.is_empty() {
            self.message = "Please upload a resume first.".to_string();
            return;
        }

        self.previewing = true;
        self.run_preview().await;
        self.previewing = false;
    }

    async fn run_preview(&mut self) {
        let detail = match self.resumes.get(&self.resume_id).await {
            Ok(detail) => detail,
            Err(e) => {
                self.message = e.to_string();
                return;
            }
        };
        let text = detail.text();
        self.preview = truncate_chars(text, PREVIEW_CHARS);

        let job_description = self.ranking_description().to_string();
        match self.ranking.score(text, &job_description).await {
            Ok(score) => self.score = Some(score),
            Err(e) => self.message = e.to_string(),
        }
    }

    pub fn ranking_description(&self) -> &str {
        if self.selected_job_description.is_empty() {
            DEFAULT_JOB_DESCRIPTION
        } else {
            &self.selected_job_description
        }
    }

    pub fn score_label(&self) -> Option<String> {
        self.score.map(|s| s.percent())
    }

    pub fn applications(&self) -> &'static [Application] {
        SAMPLE_APPLICATIONS
    }
}

/// First `limit` characters (not bytes) of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
