use serde::{Deserialize, Serialize};

use super::score::DimensionScores;

/// Importance multipliers per matched dimension. All non-negative; the
/// aggregator normalizes by the sum of applied weights, so they need not
/// sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub title: f64,
    pub skills: f64,
    pub certifications: f64,
    pub experience: f64,
    pub location: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            title: 0.25,
            skills: 0.25,
            certifications: 0.15,
            experience: 0.20,
            location: 0.05,
        }
    }
}

/// Caller-supplied partial weight override, merged over the defaults
/// key-by-key. Negative values clamp to 0, which excludes the dimension.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WeightOverrides {
    pub title: Option<f64>,
    pub skills: Option<f64>,
    pub certifications: Option<f64>,
    pub experience: Option<f64>,
    pub location: Option<f64>,
}

impl Weights {
    pub fn merged(overrides: &WeightOverrides) -> Self {
        let base = Self::default();
        fn pick(over: Option<f64>, default: f64) -> f64 {
            over.map(|w| w.max(0.0)).unwrap_or(default)
        }
        Self {
            title: pick(overrides.title, base.title),
            skills: pick(overrides.skills, base.skills),
            certifications: pick(overrides.certifications, base.certifications),
            experience: pick(overrides.experience, base.experience),
            location: pick(overrides.location, base.location),
        }
    }

    /// Weighted global score. Only dimensions with weight > 0 enter the
    /// numerator and denominator, so zeroing a weight cleanly excludes
    /// that dimension instead of averaging it in as a 0. All weights zero
    /// yields 0.0.
    pub fn combine(&self, scores: &DimensionScores) -> f64 {
        let pairs = [
            (self.title, scores.title),
            (self.skills, scores.skills),
            (self.certifications, scores.certifications),
            (self.experience, scores.experience),
            (self.location, scores.location),
        ];
        let mut num = 0.0;
        let mut den = 0.0;
        for (w, s) in pairs {
            if w > 0.0 {
                num += w * s;
                den += w;
            }
        }
        if den > 0.0 {
            num / den
        } else {
            0.0
        }
    }
}
