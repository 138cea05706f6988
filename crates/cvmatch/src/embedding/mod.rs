//! Text embedding abstraction and vector math.
//!
//! The engine never touches a model directly: it is handed an
//! [`Embedder`] — one expensive model, loaded once, shared read-only.
//! [`HashingEmbedder`] is the deterministic offline backend; the
//! `local-model` feature adds [`LocalEmbedder`](local::LocalEmbedder)
//! on top of fastembed (ONNX runtime).

mod hashing;
#[cfg(feature = "local-model")]
mod local;

pub use hashing::HashingEmbedder;
#[cfg(feature = "local-model")]
pub use local::LocalEmbedder;

use crate::errors::MatchError;

/// A fixed-length vector representation of one text.
pub type Embedding = Vec<f32>;

/// Sentence-embedding backend.
///
/// Contract: one vector per input string, input order preserved, every
/// vector L2-normalized so cosine similarity reduces to a dot product.
/// No minimum text length is enforced here; callers decide whether a
/// field carries enough signal to embed.
pub trait Embedder: Send + Sync {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Embedding>, MatchError>;
}

/// Cosine similarity of two unit vectors (plain dot product, accumulated
/// in f64). Mismatched lengths yield 0.0.
pub fn cosine(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum()
}

/// Scales `v` to unit length in place. A zero vector is left untouched.
pub fn l2_normalize(v: &mut [f32]) {
    let norm = v.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x = (f64::from(*x) / norm) as f32;
        }
    }
}

/// Elementwise mean of a set of unit vectors, re-normalized to unit
/// length. An exactly-zero mean is returned unnormalized. Empty input
/// yields an empty vector; callers guard against embedding empty sets.
pub fn mean_pool(vectors: &[Embedding]) -> Embedding {
    let Some(first) = vectors.first() else {
        return Vec::new();
    };
    let dim = first.len();
    let mut mean = vec![0.0_f32; dim];
    for v in vectors {
        for (m, x) in mean.iter_mut().zip(v.iter()) {
            *m += *x;
        }
    }
    let n = vectors.len() as f32;
    for m in mean.iter_mut() {
        *m /= n;
    }
    l2_normalize(&mut mean);
    mean
}
