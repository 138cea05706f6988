//! CV/JD matching core.
//!
//! Consumes normalized [`CandidateRecord`]/[`JobRecord`] value objects
//! (produced upstream by LLM extraction + schema validation), scores five
//! dimensions — title, skills, certifications, experience, location — and
//! aggregates them into a weighted global score.
//!
//! The embedding model is injected as an [`Embedder`] so the engine stays
//! pure and testable; enable the `local-model` feature for the
//! fastembed-backed implementation.

pub mod config;
pub mod embedding;
pub mod errors;
pub mod evaluation;
pub mod matching;
pub mod models;
pub mod text;

pub use config::Config;
pub use embedding::{Embedder, Embedding, HashingEmbedder};
#[cfg(feature = "local-model")]
pub use embedding::LocalEmbedder;
pub use errors::MatchError;
pub use evaluation::{ParseEvaluation, ParseEvaluator, ParseStatus};
pub use matching::{
    BulkMatchItem, DimensionScores, MatchEngine, MatchResult, WeightOverrides, Weights, BULK_CAP,
};
pub use models::{CandidateRecord, ExperienceEntry, JobRecord};
