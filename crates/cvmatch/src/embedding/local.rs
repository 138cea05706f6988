//! fastembed-backed embedder (ONNX runtime, local inference, no network
//! calls after the model files are cached).

use std::sync::{Arc, Mutex};

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::{error, info};

use crate::config::Config;
use crate::errors::MatchError;

use super::{l2_normalize, Embedder, Embedding};

/// Process-wide singleton slot. Holds the first initialization outcome,
/// success or failure; a failure is cached and re-surfaced rather than
/// retried on every call.
static SHARED: Mutex<Option<Result<Arc<LocalEmbedder>, String>>> = Mutex::new(None);

/// Sentence embedder backed by a local fastembed model.
///
/// Inference runs behind an interior mutex (the underlying session is
/// not re-entrant); construction is expensive, so share one instance via
/// [`LocalEmbedder::shared`].
pub struct LocalEmbedder {
    model: Mutex<TextEmbedding>,
    model_name: String,
}

impl LocalEmbedder {
    pub fn new(config: &Config) -> Result<Self, MatchError> {
        let model = model_from_name(&config.embedding_model)?;
        let inner = TextEmbedding::try_new(
            InitOptions::new(model).with_show_download_progress(false),
        )
        .map_err(|e| MatchError::ModelInit(e.to_string()))?;
        info!(model = %config.embedding_model, "embedding model loaded");
        Ok(Self {
            model: Mutex::new(inner),
            model_name: config.embedding_model.clone(),
        })
    }

    /// Returns the lazily-built process-wide instance, configured from the
    /// environment on first use. Concurrent first calls serialize on the
    /// slot mutex, so exactly one model is ever constructed.
    pub fn shared() -> Result<Arc<LocalEmbedder>, MatchError> {
        let mut slot = SHARED
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(outcome) = slot.as_ref() {
            return match outcome {
                Ok(embedder) => Ok(embedder.clone()),
                Err(msg) => Err(MatchError::ModelInit(msg.clone())),
            };
        }
        let outcome = Config::from_env()
            .map_err(|e| MatchError::ModelInit(e.to_string()))
            .and_then(|config| Self::new(&config).map(Arc::new));
        match outcome {
            Ok(embedder) => {
                *slot = Some(Ok(embedder.clone()));
                Ok(embedder)
            }
            Err(e) => {
                error!("embedding model initialization failed: {e}");
                *slot = Some(Err(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl Embedder for LocalEmbedder {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Embedding>, MatchError> {
        let mut model = self
            .model
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut vectors = model
            .embed(texts.to_vec(), None)
            .map_err(|e| MatchError::Embedding(e.to_string()))?;
        // Contract: unit vectors, whatever the model card says.
        for v in vectors.iter_mut() {
            l2_normalize(v);
        }
        Ok(vectors)
    }
}

fn model_from_name(name: &str) -> Result<EmbeddingModel, MatchError> {
    match name {
        "all-MiniLM-L6-v2" => Ok(EmbeddingModel::AllMiniLML6V2),
        "all-MiniLM-L12-v2" => Ok(EmbeddingModel::AllMiniLML12V2),
        "bge-small-en-v1.5" => Ok(EmbeddingModel::BGESmallENV15),
        "bge-base-en-v1.5" => Ok(EmbeddingModel::BGEBaseENV15),
        "bge-large-en-v1.5" => Ok(EmbeddingModel::BGELargeENV15),
        "nomic-embed-text-v1.5" => Ok(EmbeddingModel::NomicEmbedTextV15),
        other => Err(MatchError::ModelInit(format!(
            "unsupported embedding model '{other}'; supported: all-MiniLM-L6-v2, \
             all-MiniLM-L12-v2, bge-small-en-v1.5, bge-base-en-v1.5, \
             bge-large-en-v1.5, nomic-embed-text-v1.5"
        ))),
    }
}
