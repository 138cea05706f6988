use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::text::{lower_dedup, normspace};

/// Identity block of a parsed CV.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateBasics {
    pub first_name: String,
    pub last_name: String,
    pub current_title: String,
    /// Free-text location as written on the CV ("Paris", "Lyon, France", …).
    pub location: String,
}

/// One position held by the candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Pre-computed by the upstream parser when both dates were readable.
    pub duration_months: Option<u32>,
    pub is_internship: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageSkill {
    pub language: String,
    pub level: String,
}

/// Normalized CV record, as produced by the upstream LLM extraction and
/// schema validation step. Every field may be partially filled; the
/// matching engine treats absence as a scoring condition, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateRecord {
    pub basics: CandidateBasics,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub languages: Vec<LanguageSkill>,
    pub certifications: Vec<String>,
    /// Detected CV language code ("en", "fr", …).
    pub language: Option<String>,
    /// Exact extracted source text, kept for evaluation.
    pub raw_text: String,
}

impl CandidateRecord {
    /// Display name, whitespace-normalized ("First Last").
    pub fn display_name(&self) -> String {
        normspace(&format!("{} {}", self.basics.first_name, self.basics.last_name))
    }

    /// Current title, whitespace-normalized.
    pub fn current_title(&self) -> String {
        normspace(&self.basics.current_title)
    }

    /// Enforces the record invariant on skills and certifications:
    /// lowercase, case-insensitively deduplicated, sorted. Upstream calls
    /// this right after parsing; the engine does not rely on it having run.
    pub fn normalize(&mut self) {
        self.skills = lower_dedup(&self.skills);
        self.skills.sort();
        self.certifications = lower_dedup(&self.certifications);
        self.certifications.sort();
    }
}
