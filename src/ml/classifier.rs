//! Multinomial linear classifier over normalized features.

use serde::{Deserialize, Serialize};

use crate::features::{FEATURE_COUNT, FeatureVector};
use crate::species::{ALL_SPECIES, CLASS_COUNT};

/// Numerically stable softmax over raw logits.
pub fn softmax(raw: &[f32]) -> Vec<f32> {
    if raw.is_empty() {
        return Vec::new();
    }
    let max = raw
        .iter()
        .copied()
        .fold(f32::NEG_INFINITY, |a, b| a.max(b));
    let mut exps = Vec::with_capacity(raw.len());
    let mut sum = 0.0f32;
    for &v in raw {
        let e = (v - max).exp();
        exps.push(e);
        sum += e;
    }
    if sum == 0.0 || !sum.is_finite() {
        return vec![1.0 / raw.len() as f32; raw.len()];
    }
    for v in &mut exps {
        *v /= sum;
    }
    exps
}

/// Versioned pre-fitted classifier mapping normalized features to species
/// probabilities via linear logits and a softmax.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftmaxClassifier {
    pub model_version: i64,
    /// Class labels in training order; must match the species enumeration.
    pub classes: Vec<String>,
    /// Row-major coefficients, one row of `FEATURE_COUNT` values per class.
    pub weights: Vec<f32>,
    pub bias: Vec<f32>,
}

impl SoftmaxClassifier {
    /// Classifier fitted elsewhere on standardized iris measurements,
    /// shipped in the binary so the artifact tool can provision a fresh
    /// checkout.
    pub fn bundled() -> Self {
        Self {
            model_version: 1,
            classes: ALL_SPECIES.iter().map(|s| s.label().to_string()).collect(),
            weights: vec![
                -1.1023, 1.2024, -1.8989, -1.7632, // Setosa
                0.6071, -0.4537, -0.3481, -0.8704, // Versicolor
                0.4952, -0.7487, 2.2470, 2.6336, // Virginica
            ],
            bias: vec![-0.2543, 1.5357, -1.2814],
        }
    }

    /// Validate dimensions and that the class labels match the enumeration.
    pub fn validate(&self) -> Result<(), String> {
        if self.classes.len() != CLASS_COUNT {
            return Err(format!(
                "{} classes (expected {CLASS_COUNT})",
                self.classes.len()
            ));
        }
        for (species, label) in ALL_SPECIES.iter().zip(&self.classes) {
            if species.label() != label {
                return Err(format!(
                    "class label '{label}' does not match expected '{}'",
                    species.label()
                ));
            }
        }
        if self.weights.len() != CLASS_COUNT * FEATURE_COUNT {
            return Err(format!(
                "weights has {} entries (expected {})",
                self.weights.len(),
                CLASS_COUNT * FEATURE_COUNT
            ));
        }
        if self.bias.len() != CLASS_COUNT {
            return Err(format!(
                "bias has {} entries (expected {CLASS_COUNT})",
                self.bias.len()
            ));
        }
        if self.weights.iter().chain(&self.bias).any(|v| !v.is_finite()) {
            return Err("weights and bias entries must be finite".to_string());
        }
        Ok(())
    }

    /// Compute class probabilities for a normalized feature vector.
    pub fn predict_proba(&self, features: &FeatureVector) -> Vec<f32> {
        let classes = self.bias.len();
        if classes == 0 || self.weights.len() != classes * FEATURE_COUNT {
            return Vec::new();
        }
        let mut logits = vec![0.0f32; classes];
        for (class, logit) in logits.iter_mut().enumerate() {
            let mut sum = self.bias[class];
            let base = class * FEATURE_COUNT;
            for (offset, value) in features.iter().enumerate() {
                sum += self.weights[base + offset] * value;
            }
            *logit = sum;
        }
        softmax(&logits)
    }

    /// Return the argmax class index for the given feature vector.
    pub fn predict(&self, features: &FeatureVector) -> usize {
        let proba = self.predict_proba(features);
        let mut best = 0usize;
        let mut best_val = f32::NEG_INFINITY;
        for (idx, &p) in proba.iter().enumerate() {
            if p > best_val {
                best_val = p;
                best = idx;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_model_validates_and_normalizes() {
        let model = SoftmaxClassifier::bundled();
        model.validate().unwrap();
        let proba = model.predict_proba(&[0.0; FEATURE_COUNT]);
        let sum: f32 = proba.iter().sum();
        assert_eq!(proba.len(), CLASS_COUNT);
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn argmax_matches_highest_probability() {
        let model = SoftmaxClassifier::bundled();
        let features = [0.8, -0.1, 1.0, 1.1];
        let proba = model.predict_proba(&features);
        let predicted = model.predict(&features);
        let best = proba
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(idx, _)| idx)
            .unwrap();
        assert_eq!(predicted, best);
    }

    #[test]
    fn validate_rejects_weight_length_mismatch() {
        let mut model = SoftmaxClassifier::bundled();
        model.weights.pop();
        let err = model.validate().unwrap_err();
        assert!(err.contains("weights"));
    }

    #[test]
    fn validate_rejects_reordered_labels() {
        let mut model = SoftmaxClassifier::bundled();
        model.classes.swap(0, 2);
        assert!(model.validate().is_err());
    }

    #[test]
    fn softmax_handles_extreme_logits() {
        let proba = softmax(&[1000.0, 0.0, -1000.0]);
        assert!((proba.iter().sum::<f32>() - 1.0).abs() < 1e-6);
        assert!(proba[0] > 0.99);
    }
}
