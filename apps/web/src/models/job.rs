use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

pub const UNTITLED_ROLE: &str = "Untitled role";
pub const DEFAULT_COMPANY: &str = "Company";
pub const DEFAULT_LOCATION: &str = "Location";
/// The only status counted as an active posting.
pub const STATUS_OPEN: &str = "Open";

/// Namespace for ids derived from payload content. Fixed so ids survive restarts.
const JOB_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2b0e_5d3a_4e8f_9a47_0c2d_71b5_e3a9);

/// Where a job's id came from. Only backend ids may be sent back to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdSource {
    Backend,
    Title,
    Derived,
}

/// Canonical job shape. Backend payloads vary (`title`/`role`, `company`/`org`,
/// `description`/`desc`/`details`), so every payload goes through
/// [`Job::from_value`] once at the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub id: String,
    pub id_source: IdSource,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: String,
    pub status: Option<String>,
    pub applicants: u32,
    pub tags: Vec<String>,
}

impl Job {
    pub fn from_value(value: &Value) -> Self {
        let empty = Map::new();
        let obj = value.as_object().unwrap_or(&empty);

        let title = first_text(obj, &["title", "role"]);
        let (id, id_source) = match (scalar_text(obj.get("id")), text(obj.get("title"))) {
            (Some(id), _) => (id, IdSource::Backend),
            (None, Some(title)) => (title, IdSource::Title),
            (None, None) => (derived_id(value), IdSource::Derived),
        };

        Job {
            id,
            id_source,
            title,
            company: first_text(obj, &["company", "org"]),
            location: text(obj.get("location")),
            description: first_text(obj, &["description", "desc", "details"]).unwrap_or_default(),
            status: text(obj.get("status")),
            applicants: obj
                .get("applicants")
                .and_then(Value::as_u64)
                .map(|n| n.min(u32::MAX as u64) as u32)
                .unwrap_or(0),
            tags: obj
                .get("tags")
                .and_then(Value::as_array)
                .map(|tags| {
                    tags.iter()
                        .filter_map(|t| t.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Normalizes a list payload. Anything other than an array is an empty list.
    ///
    /// Synthesized ids that repeat an earlier id in the list get `#<position>`
    /// appended, so every row stays addressable. Backend ids are never rewritten.
    pub fn list_from_value(value: &Value) -> Vec<Job> {
        let mut jobs: Vec<Job> = value
            .as_array()
            .map(|items| items.iter().map(Job::from_value).collect())
            .unwrap_or_default();

        let mut seen = HashSet::new();
        for (position, job) in jobs.iter_mut().enumerate() {
            if !job.has_backend_id() && seen.contains(&job.id) {
                job.id = format!("{}#{position}", job.id);
            }
            seen.insert(job.id.clone());
        }
        jobs
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_ROLE)
    }

    pub fn display_company(&self) -> &str {
        self.company.as_deref().unwrap_or(DEFAULT_COMPANY)
    }

    pub fn display_location(&self) -> &str {
        self.location.as_deref().unwrap_or(DEFAULT_LOCATION)
    }

    pub fn is_open(&self) -> bool {
        self.status.as_deref() == Some(STATUS_OPEN)
    }

    pub fn has_backend_id(&self) -> bool {
        self.id_source == IdSource::Backend
    }
}

/// Editable job fields, shared by the create and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub location: String,
    pub description: String,
}

impl JobDraft {
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone().unwrap_or_default(),
            location: job.location.clone().unwrap_or_default(),
            description: job.description.clone(),
        }
    }
}

/// Job creation responses come either wrapped (`{"job": {...}}`) or bare.
pub fn unwrap_created(value: &Value) -> &Value {
    match value.get("job") {
        Some(job) if job.is_object() => job,
        _ => value,
    }
}

/// Non-empty string value. Empty strings count as absent, like a falsy field.
fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Strings and numbers both make valid ids.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| text(obj.get(*k)))
}

/// serde_json maps are ordered by key, so equal payloads serialize identically.
fn derived_id(value: &Value) -> String {
    let canonical = value.to_string();
    Uuid::new_v5(&JOB_ID_NAMESPACE, canonical.as_bytes()).to_string()
}
