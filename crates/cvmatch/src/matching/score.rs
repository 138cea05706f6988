//! Per-dimension similarity scoring.
//!
//! Policy summary: absent input on either side scores 0.0, except the
//! experience dimension where an absent (or zero) JD requirement is a
//! pass and scores 1.0. Every score is clamped to [0, 1].

use serde::{Deserialize, Serialize};

use crate::embedding::{cosine, mean_pool, Embedder};
use crate::errors::MatchError;
use crate::models::{CandidateRecord, JobRecord};

use super::extract;

/// One score per matched dimension. Serializes as the `scores` sub-object
/// of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub title: f64,
    pub skills: f64,
    pub certifications: f64,
    pub experience: f64,
    pub location: f64,
}

/// Computes all five dimension scores for one CV/JD pair.
pub fn score_dimensions(
    embedder: &dyn Embedder,
    cv: &CandidateRecord,
    jd: &JobRecord,
) -> Result<DimensionScores, MatchError> {
    Ok(DimensionScores {
        title: title_score(embedder, cv, jd)?,
        skills: pooled_list_score(embedder, extract::skills_pair(cv, jd))?,
        certifications: pooled_list_score(embedder, extract::certifications_pair(cv, jd))?,
        experience: experience_score(cv, jd),
        location: location_score(cv, jd),
    })
}

/// Cosine similarity of the two title embeddings; 0.0 if either absent.
fn title_score(
    embedder: &dyn Embedder,
    cv: &CandidateRecord,
    jd: &JobRecord,
) -> Result<f64, MatchError> {
    let Some((cv_title, jd_title)) = extract::title_pair(cv, jd) else {
        return Ok(0.0);
    };
    let vectors = embedder.embed(&[&cv_title, &jd_title])?;
    // One vector per input is part of the Embedder contract; surface a
    // violation as an error instead of panicking on the index.
    let [cv_vec, jd_vec] = vectors.as_slice() else {
        return Err(MatchError::Embedding(format!(
            "embedder returned {} vectors for 2 inputs",
            vectors.len()
        )));
    };
    Ok(clamp_unit(cosine(cv_vec, jd_vec)))
}

/// Skills / certifications: embed each side's members, mean-pool into one
/// vector per side, cosine of the pooled vectors. Pooling approximates the
/// "average meaning" of the set without an O(n·m) cross-product.
fn pooled_list_score(
    embedder: &dyn Embedder,
    pair: Option<(Vec<String>, Vec<String>)>,
) -> Result<f64, MatchError> {
    let Some((cv_items, jd_items)) = pair else {
        return Ok(0.0);
    };
    let cv_refs: Vec<&str> = cv_items.iter().map(String::as_str).collect();
    let jd_refs: Vec<&str> = jd_items.iter().map(String::as_str).collect();
    let cv_pooled = mean_pool(&embedder.embed(&cv_refs)?);
    let jd_pooled = mean_pool(&embedder.embed(&jd_refs)?);
    Ok(clamp_unit(cosine(&cv_pooled, &jd_pooled)))
}

/// `min(cv_years / jd_years, 1.0)`; 1.0 when the JD requires nothing
/// (no requirement to fail).
fn experience_score(cv: &CandidateRecord, jd: &JobRecord) -> f64 {
    let jd_years = match jd.experience_required_years {
        Some(y) if y > 0 => f64::from(y),
        _ => return 1.0,
    };
    (extract::cv_experience_years(cv) / jd_years).clamp(0.0, 1.0)
}

/// Binary geographic-mention heuristic: 1.0 iff the CV location string is
/// a literal substring of the JD raw text. Coarse on purpose; see the
/// extraction length floor for the short-token guard.
fn location_score(cv: &CandidateRecord, jd: &JobRecord) -> f64 {
    match (extract::location_needle(cv), extract::jd_haystack(jd)) {
        (Some(needle), Some(haystack)) if haystack.contains(&needle) => 1.0,
        _ => 0.0,
    }
}

fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}
