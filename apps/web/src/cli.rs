use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::errors::AppError;
use crate::models::auth::Role;
use crate::models::job::JobDraft;
use crate::pages::{self, candidate::CandidateAction, hr::HrAction};
use crate::routes::Route;
use crate::state::AppState;
use crate::views::auth::{SignInForm, SignUpForm};

#[derive(Parser)]
#[command(name = "recruitsage", version, about = "AI-assisted resume screening from the terminal")]
pub struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Sign in and store the session token
    Signin {
        #[arg(long)]
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: Option<String>,
        #[arg(long, value_enum, default_value_t = Role::Hr)]
        role: Role,
    },
    /// Dashboard overview
    Dashboard,
    /// Candidate dashboard
    Candidate {
        /// Rank against this job's description
        #[arg(long, global = true)]
        job: Option<String>,
        #[command(subcommand)]
        action: Option<CandidateCommand>,
    },
    /// HR dashboard
    Hr {
        #[command(subcommand)]
        action: Option<HrCommand>,
    },
    /// Open a page by its web path, e.g. /dashboard/hr
    Open { path: String },
}

#[derive(Subcommand)]
enum CandidateCommand {
    /// Upload a resume (PDF, DOC, DOCX)
    Upload { file: PathBuf },
    /// Preview a stored resume and score it against the selected job
    Preview { resume_id: String },
    /// Upload a resume, then preview and score it
    Screen { file: PathBuf },
}

#[derive(Subcommand)]
enum HrCommand {
    /// Post a new job
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        location: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Edit a posted job; omitted fields keep their value
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a posted job
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

pub async fn run(cmd: Cmd, state: &AppState) -> Result<(), AppError> {
    let mut out = io::stdout().lock();
    match cmd.command {
        None => pages::navigate(state, Route::Landing, &mut out).await?,
        Some(SubCommandType::Signin { email, password }) => {
            let form = SignInForm {
                email,
                password: password_or_prompt(password)?,
            };
            pages::auth::sign_in(state, form, &mut out).await?;
        }
        Some(SubCommandType::Signup {
            name,
            email,
            password,
            role,
        }) => {
            let form = SignUpForm {
                name,
                email,
                password: password_or_prompt(password)?,
                role,
            };
            pages::auth::sign_up(state, form, &mut out).await?;
        }
        Some(SubCommandType::Dashboard) => {
            pages::navigate(state, Route::Dashboard, &mut out).await?
        }
        Some(SubCommandType::Candidate { job, action }) => {
            let action = match action {
                None => CandidateAction::Show,
                Some(CandidateCommand::Upload { file }) => CandidateAction::Upload { file },
                Some(CandidateCommand::Preview { resume_id }) => {
                    CandidateAction::Preview { resume_id }
                }
                Some(CandidateCommand::Screen { file }) => CandidateAction::Screen { file },
            };
            pages::candidate::handle(state, action, job, &mut out).await?;
        }
        Some(SubCommandType::Hr { action }) => {
            let mut skip_confirm = false;
            let action = match action {
                None => HrAction::Show,
                Some(HrCommand::Create {
                    title,
                    location,
                    description,
                }) => HrAction::Create(JobDraft {
                    title,
                    location,
                    description,
                }),
                Some(HrCommand::Edit {
                    id,
                    title,
                    location,
                    description,
                }) => HrAction::Edit {
                    id,
                    title,
                    location,
                    description,
                },
                Some(HrCommand::Delete { id, yes }) => {
                    skip_confirm = yes;
                    HrAction::Delete { id }
                }
            };
            let confirm = |question: &str| {
                if skip_confirm {
                    Ok(true)
                } else {
                    pages::confirm_on_terminal(question)
                }
            };
            pages::hr::handle(state, action, confirm, &mut out).await?;
        }
        Some(SubCommandType::Open { path }) => {
            let route = Route::from_path(&path)
                .ok_or_else(|| AppError::Validation(format!("No page at {path}")))?;
            pages::navigate(state, route, &mut out).await?;
        }
    }
    out.flush()?;
    Ok(())
}

fn password_or_prompt(password: Option<String>) -> io::Result<String> {
    match password {
        Some(password) => Ok(password),
        None => pages::prompt_line("Password: "),
    }
}
