//! Z-score feature scaling with parameters fitted elsewhere.

use serde::{Deserialize, Serialize};

use crate::features::{FEATURE_COUNT, FeatureVector};

/// Pre-fitted standard scaler applying `(x - mean) / scale` per feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
}

impl StandardScaler {
    /// Scaler fitted on the classic 150-sample iris table, shipped in the
    /// binary so the artifact tool can provision a fresh checkout.
    pub fn bundled() -> Self {
        Self {
            mean: vec![5.8433, 3.0573, 3.7580, 1.1993],
            scale: vec![0.8253, 0.4344, 1.7594, 0.7596],
        }
    }

    /// Validate dimensions and scale positivity.
    pub fn validate(&self) -> Result<(), String> {
        if self.mean.len() != FEATURE_COUNT {
            return Err(format!(
                "mean has {} entries (expected {FEATURE_COUNT})",
                self.mean.len()
            ));
        }
        if self.scale.len() != FEATURE_COUNT {
            return Err(format!(
                "scale has {} entries (expected {FEATURE_COUNT})",
                self.scale.len()
            ));
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err("mean entries must be finite".to_string());
        }
        if self.scale.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err("scale entries must be finite and > 0".to_string());
        }
        Ok(())
    }

    /// Transform a raw feature vector into normalized feature space.
    ///
    /// Expects a validated scaler; entries beyond the stored parameter
    /// length pass through unchanged.
    pub fn transform(&self, features: &FeatureVector) -> FeatureVector {
        let mut out = *features;
        for ((slot, mean), scale) in out.iter_mut().zip(&self.mean).zip(&self.scale) {
            *slot = (*slot - mean) / scale;
        }
        out
    }
}
