//! Parse-quality evaluation.
//!
//! Scores how faithfully a parsed record reflects its raw source text by
//! comparing per-field strings against an embedding of the full text.
//! Shares the matcher's [`Embedder`]; never mutates the record.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::embedding::{cosine, Embedder, Embedding};
use crate::errors::MatchError;
use crate::models::{CandidateRecord, JobRecord};
use crate::text::{normspace, round4, truncate_chars};

pub const EXCELLENT_THRESHOLD: f64 = 0.85;
pub const GOOD_THRESHOLD: f64 = 0.70;

/// Raw-text context is capped so one oversized document cannot dominate
/// embedding latency.
const MAX_CONTEXT_CHARS: usize = 15_000;

/// Texts shorter than this carry too little signal to embed.
const MIN_EMBED_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseStatus {
    Excellent,
    Good,
    Bad,
}

impl ParseStatus {
    fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            ParseStatus::Excellent
        } else if score >= GOOD_THRESHOLD {
            ParseStatus::Good
        } else {
            ParseStatus::Bad
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldScore {
    pub score: f64,
    pub weight: f64,
    pub status: ParseStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseEvaluation {
    pub field_scores: BTreeMap<String, FieldScore>,
    pub global_score: f64,
    pub global_status: ParseStatus,
}

const CV_FIELD_WEIGHTS: &[(&str, f64)] = &[
    ("name", 1.0),
    ("title", 1.2),
    ("skills", 1.5),
    ("experience", 1.0),
    ("education", 0.6),
    ("certifications", 0.7),
];

const JD_FIELD_WEIGHTS: &[(&str, f64)] = &[
    ("title", 1.2),
    ("skills", 1.5),
    ("certifications", 0.7),
    ("experience_years", 0.6),
];

/// Evaluates parsing quality for CVs and JDs.
#[derive(Clone)]
pub struct ParseEvaluator {
    embedder: Arc<dyn Embedder>,
}

impl ParseEvaluator {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    pub fn evaluate_cv(&self, cv: &CandidateRecord) -> Result<ParseEvaluation, MatchError> {
        self.evaluate(cv_field_strings(cv), &cv.raw_text, CV_FIELD_WEIGHTS)
    }

    pub fn evaluate_jd(&self, jd: &JobRecord) -> Result<ParseEvaluation, MatchError> {
        self.evaluate(jd_field_strings(jd), &jd.raw_text, JD_FIELD_WEIGHTS)
    }

    fn evaluate(
        &self,
        fields: Vec<(&'static str, Vec<String>)>,
        raw_text: &str,
        weights: &[(&str, f64)],
    ) -> Result<ParseEvaluation, MatchError> {
        let context = self.embed_checked(truncate_chars(raw_text, MAX_CONTEXT_CHARS))?;

        let mut field_scores = BTreeMap::new();
        let mut total_weight = 0.0;
        let mut acc = 0.0;

        for (field, strings) in fields {
            if strings.is_empty() {
                continue;
            }
            // Mean similarity over the field's strings (e.g. one per
            // experience entry).
            let mut sims = Vec::with_capacity(strings.len());
            for s in &strings {
                let sim = match (&self.embed_checked(s)?, &context) {
                    (Some(v), Some(ctx)) => cosine(v, ctx),
                    _ => 0.0,
                };
                sims.push(sim);
            }
            let score = sims.iter().sum::<f64>() / sims.len() as f64;

            let weight = weights
                .iter()
                .find(|(name, _)| *name == field)
                .map(|(_, w)| *w)
                .unwrap_or(0.0);
            field_scores.insert(
                field.to_string(),
                FieldScore {
                    score: round4(score),
                    weight,
                    status: ParseStatus::from_score(score),
                },
            );
            if weight > 0.0 {
                total_weight += weight;
                acc += weight * score;
            }
        }

        let global_score = if total_weight > 0.0 {
            acc / total_weight
        } else {
            0.0
        };
        debug!(global_score, fields = field_scores.len(), "parse evaluation computed");
        Ok(ParseEvaluation {
            field_scores,
            global_score: round4(global_score),
            global_status: ParseStatus::from_score(global_score),
        })
    }

    /// Embeds one text, or `None` when it is too short to carry signal.
    fn embed_checked(&self, text: &str) -> Result<Option<Embedding>, MatchError> {
        let t = normspace(text);
        if t.chars().count() < MIN_EMBED_CHARS {
            return Ok(None);
        }
        Ok(self.embedder.embed(&[&t])?.into_iter().next())
    }
}

fn cv_field_strings(cv: &CandidateRecord) -> Vec<(&'static str, Vec<String>)> {
    let mut out = Vec::new();

    let name = cv.display_name();
    if !name.is_empty() {
        out.push(("name", vec![name]));
    }

    let title = normspace(&cv.basics.current_title);
    if !title.is_empty() {
        out.push(("title", vec![title]));
    }

    let skills = joined_sorted(&cv.skills, true);
    if let Some(joined) = skills {
        out.push(("skills", vec![joined]));
    }

    let experiences: Vec<String> = cv
        .experience
        .iter()
        .map(|e| normspace(&format!("{} {}", e.title, e.company)))
        .filter(|s| s.chars().count() >= MIN_EMBED_CHARS)
        .collect();
    if !experiences.is_empty() {
        out.push(("experience", experiences));
    }

    let educations: Vec<String> = cv
        .education
        .iter()
        .map(|d| normspace(&format!("{} {}", d.degree, d.school)))
        .filter(|s| s.chars().count() >= MIN_EMBED_CHARS)
        .collect();
    if !educations.is_empty() {
        out.push(("education", vec![educations.join(", ")]));
    }

    if let Some(joined) = joined_sorted(&cv.certifications, false) {
        out.push(("certifications", vec![joined]));
    }

    out
}

fn jd_field_strings(jd: &JobRecord) -> Vec<(&'static str, Vec<String>)> {
    let mut out = Vec::new();

    let title = normspace(&jd.basics.title);
    if !title.is_empty() {
        out.push(("title", vec![title]));
    }

    if let Some(joined) = joined_sorted(&jd.skills, true) {
        out.push(("skills", vec![joined]));
    }

    if let Some(joined) = joined_sorted(&jd.required_certifications, false) {
        out.push(("certifications", vec![joined]));
    }

    if let Some(years) = jd.experience_required_years {
        out.push(("experience_years", vec![years.to_string()]));
    }

    out
}

/// Joins a list into one sorted, deduplicated, comma-separated string for
/// stable embedding input. `None` when nothing survives normalization.
fn joined_sorted(items: &[String], lowercase: bool) -> Option<String> {
    let mut set: Vec<String> = items
        .iter()
        .map(|s| {
            let n = normspace(s);
            if lowercase {
                n.to_lowercase()
            } else {
                n
            }
        })
        .filter(|s| !s.is_empty())
        .collect();
    set.sort();
    set.dedup();
    if set.is_empty() {
        None
    } else {
        Some(set.join(", "))
    }
}
