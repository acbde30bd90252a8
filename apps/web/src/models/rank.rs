use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct RankRequest<'a> {
    pub resume_text: &'a str,
    pub job_description: &'a str,
}

/// Match percentage for one resume text / job description pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankScore {
    pub score: f64,
}

impl RankScore {
    /// `73.0` renders as `73%`; fractional scores keep up to two decimals.
    pub fn percent(&self) -> String {
        let rounded = (self.score * 100.0).round() / 100.0;
        if rounded.fract() == 0.0 {
            format!("{}%", rounded as i64)
        } else {
            format!("{rounded}%")
        }
    }
}
