use serde::{Deserialize, Serialize};

use crate::text::{lower_dedup, normspace};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobBasics {
    pub title: String,
    pub company: String,
}

/// Normalized job description record. Upstream validation guarantees a
/// non-empty title and company; the engine assumes well-formed input and
/// does not re-check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRecord {
    pub basics: JobBasics,
    pub skills: Vec<String>,
    pub required_certifications: Vec<String>,
    /// Required years of experience; `None` means no requirement.
    pub experience_required_years: Option<u32>,
    /// Detected JD language code.
    pub language: Option<String>,
    /// Full JD source text, also used by the location heuristic.
    pub raw_text: String,
}

impl JobRecord {
    /// Same invariant as [`CandidateRecord::normalize`](super::CandidateRecord::normalize).
    pub fn normalize(&mut self) {
        self.skills = lower_dedup(&self.skills);
        self.skills.sort();
        self.required_certifications = lower_dedup(&self.required_certifications);
        self.required_certifications.sort();
    }

    pub fn title(&self) -> String {
        normspace(&self.basics.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_partial_json() {
        let jd: JobRecord = serde_json::from_str(
            r#"{
                "basics": {"title": "Backend Engineer", "company": "Acme"},
                "skills": ["go", "kubernetes"],
                "experience_required_years": 5
            }"#,
        )
        .unwrap();
        assert_eq!(jd.title(), "Backend Engineer");
        assert_eq!(jd.experience_required_years, Some(5));
        assert!(jd.required_certifications.is_empty());
    }

    #[test]
    fn test_normalize_dedups_certifications() {
        let mut jd = JobRecord {
            required_certifications: vec!["AWS SAA".to_string(), "aws saa".to_string()],
            ..Default::default()
        };
        jd.normalize();
        assert_eq!(jd.required_certifications, vec!["aws saa"]);
    }
}
