//! Forward pass over the loaded artifact pair.

use thiserror::Error;

use crate::features::FeatureVector;
use crate::ml::{SoftmaxClassifier, StandardScaler};
use crate::species::{CLASS_COUNT, Species};

/// Tolerance when checking that a probability distribution sums to one.
const DISTRIBUTION_SUM_TOLERANCE: f32 = 1e-4;

/// Failures surfaced inline by the UI; never fatal for the process.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// The classifier returned an index outside the species enumeration.
    #[error("class index {0} is outside the species enumeration")]
    InvalidClassIndex(usize),
    /// The probability vector does not have one entry per species.
    #[error("classifier produced {got} probabilities (expected {CLASS_COUNT})")]
    WrongDistributionLength { got: usize },
    /// The probability vector contains negative or non-finite entries, or
    /// does not sum to one.
    #[error("classifier produced an invalid probability distribution (sum {sum})")]
    MalformedDistribution { sum: f32 },
}

/// A single classification outcome. Recomputed per request, never stored.
#[derive(Clone, Debug)]
pub struct Prediction {
    pub species: Species,
    /// Maximum predicted probability.
    pub confidence: f32,
    /// Full distribution aligned to the species enumeration.
    pub probabilities: Vec<f32>,
}

/// Scale the raw features, then predict the class and its distribution.
///
/// Pure aside from the arithmetic; call only with artifacts that passed
/// `validate()` at load time.
pub fn run(
    features: &FeatureVector,
    scaler: &StandardScaler,
    classifier: &SoftmaxClassifier,
) -> Result<Prediction, InferenceError> {
    let scaled = scaler.transform(features);
    let index = classifier.predict(&scaled);
    let probabilities = classifier.predict_proba(&scaled);

    if probabilities.len() != CLASS_COUNT {
        return Err(InferenceError::WrongDistributionLength {
            got: probabilities.len(),
        });
    }
    let sum: f32 = probabilities.iter().sum();
    let malformed = probabilities.iter().any(|p| !p.is_finite() || *p < 0.0)
        || (sum - 1.0).abs() > DISTRIBUTION_SUM_TOLERANCE;
    if malformed {
        return Err(InferenceError::MalformedDistribution { sum });
    }

    let species = Species::from_index(index).ok_or(InferenceError::InvalidClassIndex(index))?;
    let confidence = probabilities.iter().copied().fold(0.0f32, f32::max);
    Ok(Prediction {
        species,
        confidence,
        probabilities,
    })
}
