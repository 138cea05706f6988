//! The matching/scoring engine: field extraction, per-dimension
//! similarity, weighted aggregation, and the orchestrating [`MatchEngine`].

mod engine;
mod extract;
mod score;
mod weights;

pub use engine::{BulkMatchItem, MatchEngine, MatchResult, BULK_CAP};
pub use score::DimensionScores;
pub use weights::{WeightOverrides, Weights};
