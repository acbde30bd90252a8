use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Hr,
    Candidate,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hr => "hr",
            Role::Candidate => "candidate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Hr => "HR / Recruiter",
            Role::Candidate => "Candidate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Hr => "Post jobs, manage resumes, and contact candidates.",
            Role::Candidate => "Find roles, upload resumes, and track applications.",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// The role is echoed back as a plain string; the backend may know roles we don't.
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpResponse {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sign_up_request_serializes_role_lowercase() {
        let req = SignUpRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string(),
            role: Role::Candidate,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "hunter22",
                "role": "candidate"
            })
        );
    }

    #[test]
    fn test_default_role_is_hr() {
        assert_eq!(Role::default(), Role::Hr);
        assert_eq!(Role::Hr.label(), "HR / Recruiter");
    }
}
