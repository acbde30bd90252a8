use std::io::{self, Write};
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::job::JobDraft;
use crate::pages::guard::require_session;
use crate::routes::Route;
use crate::state::AppState;
use crate::views::hr::HrDashboard;

#[derive(Debug, Clone, PartialEq)]
pub enum HrAction {
    Show,
    Create(JobDraft),
    /// Fields left as `None` keep the job's current value.
    Edit {
        id: String,
        title: Option<String>,
        location: Option<String>,
        description: Option<String>,
    },
    Delete { id: String },
}

/// Runs one HR action. `confirm` is asked before anything is deleted.
pub async fn handle(
    state: &AppState,
    action: HrAction,
    confirm: impl FnOnce(&str) -> io::Result<bool>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    require_session(Route::HrDashboard, state.tokens.as_ref())?;

    let mut page = HrDashboard::new(Arc::new(state.api.jobs.clone()));
    if let Err(err) = page.load().await {
        // Edit and delete look the job up in the list; the rest can go on without it.
        if !matches!(action, HrAction::Show | HrAction::Create(_)) {
            return Err(err);
        }
        writeln!(out, "{err}")?;
        writeln!(out)?;
    }

    match action {
        HrAction::Show => {}
        HrAction::Create(draft) => {
            page.form = draft;
            let job = page.create().await?;
            writeln!(out, "Created job {} ({})", job.id, job.display_title())?;
        }
        HrAction::Edit {
            id,
            title,
            location,
            description,
        } => {
            let form = page.start_edit(&id)?;
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(location) = location {
                form.location = location;
            }
            if let Some(description) = description {
                form.description = description;
            }
            page.submit_edit().await?;
            writeln!(out, "Updated job {id}")?;
        }
        HrAction::Delete { id } => {
            if !confirm("Delete this job?")? {
                writeln!(out, "Delete cancelled")?;
            } else {
                page.delete(&id).await?;
                writeln!(out, "Deleted job {id}")?;
            }
        }
    }

    writeln!(out)?;
    render(&page, out)
}

pub fn render(page: &HrDashboard, out: &mut impl Write) -> Result<(), AppError> {
    let kpis = page.kpis();
    writeln!(out, "HR dashboard")?;
    writeln!(out, "  Active jobs       {}", kpis.active)?;
    writeln!(out, "  Total applicants  {}", kpis.total_applicants)?;
    writeln!(out, "  Shortlisted       {}", kpis.shortlisted)?;

    writeln!(out)?;
    writeln!(out, "Your job postings")?;
    writeln!(out, "  {:<12} {:<24} {:<16} Status", "ID", "Role", "Location")?;
    if page.jobs.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for job in &page.jobs {
        writeln!(
            out,
            "  {:<12} {:<24} {:<16} {}",
            job.id,
            job.title.as_deref().unwrap_or(""),
            job.location.as_deref().unwrap_or(""),
            job.status.as_deref().unwrap_or("")
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Top candidates (recent)")?;
    for c in page.top_candidates() {
        writeln!(
            out,
            "  {:<14} {:>3}  {:<22} {}",
            c.name, c.score, c.matched, c.stage
        )?;
    }
    Ok(())
}
