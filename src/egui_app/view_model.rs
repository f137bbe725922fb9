//! Converts predictions into display-ready strings and rows.

use crate::inference::Prediction;
use crate::species::{ALL_SPECIES, Species};

/// Max-probability threshold separating the two confidence buckets.
const HIGH_CONFIDENCE_THRESHOLD: f32 = 0.8;

/// Coarse confidence bucket shown next to the predicted label.
///
/// Two tiers only; the thresholding deliberately has no "low" bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
}

impl ConfidenceTier {
    /// Bucket a maximum probability.
    pub fn for_confidence(confidence: f32) -> Self {
        if confidence > HIGH_CONFIDENCE_THRESHOLD {
            Self::High
        } else {
            Self::Medium
        }
    }

    /// Badge text shown next to the predicted species.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High confidence",
            Self::Medium => "Medium confidence",
        }
    }
}

/// One probability row, in species enumeration order.
#[derive(Clone, Debug)]
pub struct ProbabilityRow {
    pub species: Species,
    /// Raw probability, drives the proportional bar.
    pub fraction: f32,
    pub percent: String,
}

/// Display-ready prediction consumed by the renderer.
#[derive(Clone, Debug)]
pub struct PredictionView {
    pub label: &'static str,
    pub confidence_percent: String,
    pub tier: ConfidenceTier,
    pub rows: Vec<ProbabilityRow>,
}

/// Format a probability as a one-decimal percentage.
pub fn percent(fraction: f32) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Build the display view for a completed prediction.
pub fn prediction_view(prediction: &Prediction) -> PredictionView {
    let rows = ALL_SPECIES
        .iter()
        .zip(&prediction.probabilities)
        .map(|(species, probability)| ProbabilityRow {
            species: *species,
            fraction: *probability,
            percent: percent(*probability),
        })
        .collect();
    PredictionView {
        label: prediction.species.label(),
        confidence_percent: percent(prediction.confidence),
        tier: ConfidenceTier::for_confidence(prediction.confidence),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(species: Species, probabilities: Vec<f32>) -> Prediction {
        let confidence = probabilities.iter().copied().fold(0.0f32, f32::max);
        Prediction {
            species,
            confidence,
            probabilities,
        }
    }

    #[test]
    fn confident_virginica_renders_high_tier() {
        let view = prediction_view(&prediction(Species::Virginica, vec![0.01, 0.04, 0.95]));
        assert_eq!(view.label, "Virginica");
        assert_eq!(view.confidence_percent, "95.0%");
        assert_eq!(view.tier, ConfidenceTier::High);
    }

    #[test]
    fn uncertain_versicolor_renders_medium_tier() {
        let view = prediction_view(&prediction(Species::Versicolor, vec![0.3, 0.45, 0.25]));
        assert_eq!(view.label, "Versicolor");
        assert_eq!(view.tier, ConfidenceTier::Medium);
        assert_eq!(view.confidence_percent, "45.0%");
    }

    #[test]
    fn threshold_is_exclusive_at_the_boundary() {
        assert_eq!(
            ConfidenceTier::for_confidence(0.8),
            ConfidenceTier::Medium
        );
        assert_eq!(
            ConfidenceTier::for_confidence(0.801),
            ConfidenceTier::High
        );
    }

    #[test]
    fn rows_follow_enumeration_order_regardless_of_winner() {
        let view = prediction_view(&prediction(Species::Virginica, vec![0.01, 0.04, 0.95]));
        let labels: Vec<&str> = view.rows.iter().map(|r| r.species.label()).collect();
        assert_eq!(labels, ["Setosa", "Versicolor", "Virginica"]);
        assert_eq!(view.rows[2].percent, "95.0%");
    }
}
