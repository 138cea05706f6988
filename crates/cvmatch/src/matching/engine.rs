//! Match engine orchestration: `(CV, JD, weights?) -> MatchResult`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::embedding::Embedder;
use crate::errors::MatchError;
use crate::models::{CandidateRecord, JobRecord};
use crate::text::round4;

use super::score::{score_dimensions, DimensionScores};
use super::weights::{WeightOverrides, Weights};

/// Hard cap on the number of CVs accepted by [`MatchEngine::score_bulk`].
pub const BULK_CAP: usize = 100;

/// Result of matching one CV against one JD. Constructed fresh per call;
/// serializes to the wire shape (`scores` sub-object + `global_score`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate_name: String,
    pub cv_title: String,
    pub jd_title: String,
    pub scores: DimensionScores,
    pub global_score: f64,
}

/// One entry of a bulk match, carrying the input position of its CV.
#[derive(Debug, Clone, Serialize)]
pub struct BulkMatchItem {
    pub index: usize,
    pub result: MatchResult,
}

/// The matching engine. Pure and stateless apart from the injected
/// embedder: no I/O, no input mutation, deterministic for a fixed model.
/// Cheap to clone and safe to share across worker threads.
#[derive(Clone)]
pub struct MatchEngine {
    embedder: Arc<dyn Embedder>,
}

impl MatchEngine {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    /// Builds an engine on the process-wide fastembed singleton. Fails
    /// with [`MatchError::ModelInit`] if the model cannot load.
    #[cfg(feature = "local-model")]
    pub fn with_local_model() -> Result<Self, MatchError> {
        Ok(Self::new(crate::embedding::LocalEmbedder::shared()?))
    }

    /// Scores one CV against one JD under the given weights (defaults
    /// merged with any overrides).
    ///
    /// Well-formed records never produce a domain error: missing fields
    /// degrade to component scores per the absent-field policy. Only an
    /// embedder failure propagates.
    pub fn score(
        &self,
        cv: &CandidateRecord,
        jd: &JobRecord,
        overrides: Option<&WeightOverrides>,
    ) -> Result<MatchResult, MatchError> {
        let weights = overrides.map(Weights::merged).unwrap_or_default();
        let raw = score_dimensions(self.embedder.as_ref(), cv, jd)?;
        let global = weights.combine(&raw);

        let result = MatchResult {
            candidate_name: cv.display_name(),
            cv_title: cv.current_title(),
            jd_title: jd.title(),
            scores: DimensionScores {
                title: round4(raw.title),
                skills: round4(raw.skills),
                certifications: round4(raw.certifications),
                experience: round4(raw.experience),
                location: round4(raw.location),
            },
            global_score: round4(global),
        };
        debug!(
            candidate = %result.candidate_name,
            global_score = result.global_score,
            "match computed"
        );
        Ok(result)
    }

    /// Scores every CV against one shared JD, preserving input order via
    /// explicit indices. Rejects lists over [`BULK_CAP`]. Error policy:
    /// short-circuits on the first failing item (an embedder failure
    /// would hit every remaining item anyway).
    pub fn score_bulk(
        &self,
        cvs: &[CandidateRecord],
        jd: &JobRecord,
        overrides: Option<&WeightOverrides>,
    ) -> Result<Vec<BulkMatchItem>, MatchError> {
        if cvs.len() > BULK_CAP {
            return Err(MatchError::BulkCapExceeded {
                count: cvs.len(),
                cap: BULK_CAP,
            });
        }
        let mut results = Vec::with_capacity(cvs.len());
        for (index, cv) in cvs.iter().enumerate() {
            let result = self.score(cv, jd, overrides)?;
            results.push(BulkMatchItem { index, result });
        }
        Ok(results)
    }
}
