use std::io::Write;

use crate::errors::AppError;
use crate::routes::Route;

const FEATURES: &[(&str, &str)] = &[
    (
        "Transparent by design",
        "Every score comes with keyword matches and weighting so reviewers understand why.",
    ),
    (
        "Lightning fast",
        "Screen hundreds of resumes in seconds with accurate ranking.",
    ),
    (
        "Role-based access",
        "HR manages postings; candidates apply, upload resumes, and contact HR securely.",
    ),
    (
        "Secure & compliant",
        "Email verification, password rules, and OAuth (Google, LinkedIn) ready.",
    ),
    (
        "Modern dashboards",
        "Clean, minimal UI for HR and candidates with focused actions.",
    ),
    (
        "Scalable APIs",
        "FastAPI backend with clear contracts for jobs, resumes, and messaging.",
    ),
];

const STEPS: &[(&str, &str)] = &[
    (
        "Upload & classify",
        "Add job description and resumes. NLP preprocessing and SVM classify by role.",
    ),
    (
        "Rank & score",
        "TF-IDF + cosine similarity compute match scores with consistent weighting.",
    ),
    (
        "Explain & decide",
        "See matched keywords, strengths, and gaps to make unbiased, auditable decisions.",
    ),
];

const TECHNOLOGY: &[(&str, &[&str])] = &[
    ("Frontend", &["Next.js", "Tailwind CSS", "ShadCN UI"]),
    ("Backend", &["FastAPI", "Python", "Uvicorn"]),
    ("Models", &["Linear SVM", "TF-IDF", "Cosine Similarity"]),
    (
        "Auth & Data",
        &["OAuth (Google/LinkedIn)", "Email/Password", "MongoDB"],
    ),
];

pub fn render(out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "RecruitSage")?;
    writeln!(out, "New - Transparent AI screening")?;
    writeln!(out)?;
    writeln!(out, "AI resume screening that is clear, fair, and fast")?;
    writeln!(
        out,
        "RecruitSage ranks candidates against job descriptions with explainable scores \
         and keyword highlights, so every decision is trusted and auditable."
    )?;

    writeln!(out)?;
    writeln!(out, "Why choose RecruitSage")?;
    for (title, desc) in FEATURES {
        writeln!(out, "  * {title}: {desc}")?;
    }

    writeln!(out)?;
    writeln!(out, "How it works")?;
    for (i, (title, desc)) in STEPS.iter().enumerate() {
        writeln!(out, "  {}. {title}: {desc}", i + 1)?;
    }

    writeln!(out)?;
    writeln!(out, "Powered by modern tech")?;
    for (title, items) in TECHNOLOGY {
        writeln!(out, "  {title}: {}", items.join(", "))?;
    }

    writeln!(out)?;
    for route in [Route::SignIn, Route::SignUp, Route::Dashboard] {
        writeln!(out, "  {:<12} {}", route.path(), route.command())?;
    }
    Ok(())
}
