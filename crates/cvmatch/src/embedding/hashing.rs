use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::errors::MatchError;

use super::{l2_normalize, Embedder, Embedding};

/// Deterministic bag-of-tokens embedder.
///
/// Each lowercase alphanumeric token hashes to one of `dim` buckets; the
/// bucket counts are L2-normalized. Identical token sets therefore map to
/// parallel vectors (cosine 1.0) and disjoint sets to near-orthogonal
/// ones, which is exactly the geometry the scoring tests need without a
/// model download. A text with no tokens embeds to the zero vector.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dim: usize,
}

impl HashingEmbedder {
    pub const DEFAULT_DIM: usize = 256;

    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    fn embed_one(&self, text: &str) -> Embedding {
        let mut v = vec![0.0_f32; self.dim];
        for token in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            let bucket = (hasher.finish() % self.dim as u64) as usize;
            v[bucket] += 1.0;
        }
        l2_normalize(&mut v);
        v
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIM)
    }
}

impl Embedder for HashingEmbedder {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Embedding>, MatchError> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }
}
