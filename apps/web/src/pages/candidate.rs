use std::io::Write;
use std::path::PathBuf;

use tracing::warn;

use crate::api::UploadFile;
use crate::errors::AppError;
use crate::pages::guard::require_session;
use crate::routes::Route;
use crate::state::AppState;
use crate::views::candidate::{CandidateDashboard, UploadDefaults};

#[derive(Debug, Clone, PartialEq)]
pub enum CandidateAction {
    Show,
    Upload { file: PathBuf },
    Preview { resume_id: String },
    /// Upload, then preview the freshly uploaded resume.
    Screen { file: PathBuf },
}

pub async fn handle(
    state: &AppState,
    action: CandidateAction,
    job: Option<String>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    require_session(Route::CandidateDashboard, state.tokens.as_ref())?;

    let mut page = CandidateDashboard::new(
        state.api.jobs.clone(),
        state.api.resumes.clone(),
        state.api.ranking.clone(),
        UploadDefaults {
            job_id: state.config.upload_job_id.clone(),
            candidate_name: state.config.candidate_name.clone(),
        },
    );
    page.load_jobs().await;
    if let Some(id) = job.as_deref() {
        if !page.select_job(id) {
            warn!("No job with id {id}; ranking against the default description");
        }
    }

    match action {
        CandidateAction::Show => {}
        CandidateAction::Upload { file } => {
            page.choose_file(UploadFile::read(&file).await?);
            page.upload().await;
        }
        CandidateAction::Preview { resume_id } => {
            page.resume_id = resume_id;
            page.preview().await;
        }
        CandidateAction::Screen { file } => {
            page.choose_file(UploadFile::read(&file).await?);
            page.upload().await;
            if !page.resume_id.is_empty() {
                let upload_message = std::mem::take(&mut page.message);
                writeln!(out, "{upload_message}")?;
                page.preview().await;
            }
        }
    }

    render(&page, out)
}

pub fn render(page: &CandidateDashboard, out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "Candidate dashboard")?;
    writeln!(
        out,
        "Complete profile to improve match quality. Upload a recent resume and add key skills."
    )?;

    if !page.message.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", page.message)?;
    }
    if !page.resume_id.is_empty() {
        writeln!(out, "Resume id: {}", page.resume_id)?;
    }
    if !page.preview.is_empty() {
        writeln!(out)?;
        writeln!(out, "Preview")?;
        writeln!(out, "{}", page.preview)?;
    }
    if let Some(score) = page.score_label() {
        writeln!(out)?;
        writeln!(out, "Match score: {score}")?;
    }

    writeln!(out)?;
    writeln!(out, "Recommended jobs")?;
    if page.jobs.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for job in &page.jobs {
        let marker = if page.selected_job_id.as_deref() == Some(job.id.as_str()) {
            '>'
        } else {
            ' '
        };
        writeln!(
            out,
            "{marker} [{}] {} - {}",
            job.id,
            job.display_title(),
            job.display_location()
        )?;
        writeln!(out, "      {} • {}", job.display_company(), job.display_location())?;
        if !job.tags.is_empty() {
            writeln!(out, "      {}", job.tags.join(", "))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "My applications")?;
    writeln!(out, "  {:<20} {:<12} {:<14} Applied", "Job", "Company", "Status")?;
    for app in page.applications() {
        writeln!(
            out,
            "  {:<20} {:<12} {:<14} {}",
            app.job, app.company, app.status, app.applied
        )?;
    }
    Ok(())
}
