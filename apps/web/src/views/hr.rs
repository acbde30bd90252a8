//! HR dashboard view model: job postings, the create form, one inline edit form,
//! and the KPIs derived from the list.

use std::sync::Arc;

use tracing::info;

use crate::api::jobs::JobPatch;
use crate::api::JobBoard;
use crate::errors::AppError;
use crate::models::job::{IdSource, Job, JobDraft};

/// Not backed by any endpoint yet; shown as-is.
pub const SHORTLISTED_PLACEHOLDER: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kpis {
    /// Jobs whose status is exactly "Open".
    pub active: usize,
    /// Sum of applicant counts; missing counts are zero.
    pub total_applicants: u64,
    pub shortlisted: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    pub id: String,
    pub form: JobDraft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub name: &'static str,
    pub score: u32,
    pub matched: &'static str,
    pub stage: &'static str,
}

/// Placeholder list; ranking results are not exposed per posting yet.
pub const SAMPLE_TOP_CANDIDATES: &[RankedCandidate] = &[
    RankedCandidate {
        name: "Aarav Shah",
        score: 87,
        matched: "React, TS, Next.js",
        stage: "Shortlisted",
    },
    RankedCandidate {
        name: "Isha Verma",
        score: 82,
        matched: "SQL, Tableau, Python",
        stage: "Interviewing",
    },
    RankedCandidate {
        name: "Rahul Mehta",
        score: 78,
        matched: "FastAPI, Docker, AWS",
        stage: "Screening",
    },
];

pub struct HrDashboard {
    board: Arc<dyn JobBoard>,
    pub jobs: Vec<Job>,
    pub form: JobDraft,
    /// At most one job is editable at a time.
    pub edit: Option<EditState>,
}

impl HrDashboard {
    pub fn new(board: Arc<dyn JobBoard>) -> Self {
        Self {
            board,
            jobs: Vec::new(),
            form: JobDraft::default(),
            edit: None,
        }
    }

    pub async fn load(&mut self) -> Result<(), AppError> {
        self.jobs = self
            .board
            .list_postings()
            .await
            .map_err(AppError::action("Failed to load jobs"))?;
        Ok(())
    }

    pub fn kpis(&self) -> Kpis {
        Kpis {
            active: self.jobs.iter().filter(|j| j.is_open()).count(),
            total_applicants: self.jobs.iter().map(|j| u64::from(j.applicants)).sum(),
            shortlisted: SHORTLISTED_PLACEHOLDER,
        }
    }

    /// Creates a job from the form, appends the backend's copy and resets the form.
    pub async fn create(&mut self) -> Result<&Job, AppError> {
        require("Job title", &self.form.title)?;
        require("Location", &self.form.location)?;

        let job = self
            .board
            .create_posting(&self.form)
            .await
            .map_err(AppError::action("Error creating job"))?;
        info!("Created job {}", job.id);

        self.form = JobDraft::default();
        self.jobs.push(job);
        Ok(&self.jobs[self.jobs.len() - 1])
    }

    /// Drops the create form's contents. Nothing is sent to the backend.
    pub fn save_draft(&mut self) {
        self.form = JobDraft::default();
    }

    /// Opens the edit form for `id`, replacing any edit in progress.
    pub fn start_edit(&mut self, id: &str) -> Result<&mut JobDraft, AppError> {
        let job = self.find(id)?;
        if !job.has_backend_id() {
            return Err(AppError::Validation(format!(
                "Job \"{}\" has no id from the server and cannot be edited",
                job.display_title()
            )));
        }
        let form = JobDraft::from_job(job);
        let edit = self.edit.insert(EditState {
            id: id.to_string(),
            form,
        });
        Ok(&mut edit.form)
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Saves the open edit form and replaces the job with the backend's copy.
    pub async fn submit_edit(&mut self) -> Result<(), AppError> {
        let Some(edit) = self.edit.as_ref() else {
            return Err(AppError::Validation("No job is being edited".to_string()));
        };

        let mut updated = self
            .board
            .update_posting(&edit.id, &JobPatch::from(&edit.form))
            .await
            .map_err(AppError::action("Error updating job"))?;
        // Keep the row addressable even if the response omits the id.
        if !updated.has_backend_id() {
            updated.id = edit.id.clone();
            updated.id_source = IdSource::Backend;
        }

        let id = edit.id.clone();
        for job in self.jobs.iter_mut().filter(|j| j.id == id) {
            *job = updated.clone();
        }
        self.edit = None;
        info!("Updated job {id}");
        Ok(())
    }

    /// Deletes a job. Confirmation happens on the page before this is called.
    pub async fn delete(&mut self, id: &str) -> Result<(), AppError> {
        let job = self.find(id)?;
        if !job.has_backend_id() {
            return Err(AppError::Validation(format!(
                "Job \"{}\" has no id from the server and cannot be deleted",
                job.display_title()
            )));
        }

        self.board
            .delete_posting(id)
            .await
            .map_err(AppError::action("Error deleting job"))?;
        self.jobs.retain(|j| j.id != id);
        if self.edit.as_ref().is_some_and(|e| e.id == id) {
            self.edit = None;
        }
        info!("Deleted job {id}");
        Ok(())
    }

    pub fn top_candidates(&self) -> &'static [RankedCandidate] {
        SAMPLE_TOP_CANDIDATES
    }

    fn find(&self, id: &str) -> Result<&Job, AppError> {
        self.jobs
            .iter()
            .find(|j| j.id == id)
            .ok_or_else(|| AppError::Validation(format!("No job with id {id}")))
    }
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}
