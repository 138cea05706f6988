use thiserror::Error;

/// Error type for the matching core.
///
/// Missing or malformed record fields are *not* errors — they degrade to
/// a 0.0 (or 1.0 for the experience no-requirement case) component score.
/// Only embedder failures and bulk-cap violations surface here.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The embedding model could not be loaded. Fatal to scoring; every
    /// subsequent match depends on it.
    #[error("Embedding model initialization failed: {0}")]
    ModelInit(String),

    /// An embedding call failed after successful initialization.
    #[error("Embedding failed: {0}")]
    Embedding(String),

    /// Bulk match received more CVs than the hard cap allows.
    #[error("Bulk match rejected: {count} CVs exceeds the cap of {cap}")]
    BulkCapExceeded { count: usize, cap: usize },
}
