use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of `POST /resumes/upload`. Held until the next upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub resume_id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub size_kb: f64,
    #[serde(default)]
    pub stored_as: Option<String>,
}

impl UploadResult {
    /// Status line shown after a successful upload.
    pub fn summary(&self) -> String {
        let mut line = format!("Uploaded {} ({} KB).", self.filename, format_size(self.size_kb));
        if let Some(stored_as) = self.stored_as.as_deref().filter(|s| !s.is_empty()) {
            line.push_str(&format!(" Saved as {stored_as}."));
        }
        line
    }
}

/// `GET /resumes/{resume_id}`. Only the extracted text is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeDetail {
    #[serde(default)]
    pub extracted_text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResumeDetail {
    pub fn text(&self) -> &str {
        self.extracted_text.as_deref().unwrap_or("")
    }
}

/// `120.0` prints as `120`, `12.5` stays `12.5`.
fn format_size(size_kb: f64) -> String {
    if size_kb.fract() == 0.0 && size_kb.abs() < 1e15 {
        format!("{}", size_kb as i64)
    } else {
        format!("{size_kb}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upload_summary() {
        let upload: UploadResult = serde_json::from_value(json!({
            "resume_id": "r1",
            "filename": "cv.pdf",
            "size_kb": 120,
            "stored_as": "r1.pdf"
        }))
        .unwrap();
        assert_eq!(upload.summary(), "Uploaded cv.pdf (120 KB). Saved as r1.pdf.");
    }

    #[test]
    fn test_upload_without_stored_as() {
        let upload: UploadResult = serde_json::from_value(json!({
            "resume_id": "r1",
            "filename": "cv.pdf",
            "size_kb": 12.5
        }))
        .unwrap();
        assert_eq!(upload.stored_as, None);
        assert_eq!(upload.summary(), "Uploaded cv.pdf (12.5 KB).");
    }

    #[test]
    fn test_resume_detail_keeps_unknown_fields() {
        let detail: ResumeDetail = serde_json::from_value(json!({
            "extracted_text": "Experienced engineer",
            "filename": "cv.pdf"
        }))
        .unwrap();
        assert_eq!(detail.text(), "Experienced engineer");
        assert_eq!(detail.extra.get("filename"), Some(&json!("cv.pdf")));
    }

    #[test]
    fn test_resume_detail_without_text() {
        let detail: ResumeDetail = serde_json::from_value(json!({})).unwrap();
        assert_eq!(detail.text(), "");
    }
}
