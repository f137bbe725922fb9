//! Slider descriptors and feature vector assembly.
//!
//! The classifier consumes measurements in a fixed order that must match the
//! order used when the artifacts were fitted: sepal length, sepal width,
//! petal length, petal width, all in centimeters.

/// Number of measurements the classifier consumes.
pub const FEATURE_COUNT: usize = 4;

/// Ordered measurement vector handed to the inference adapter.
pub type FeatureVector = [f32; FEATURE_COUNT];

/// Which flower part a control belongs to, used to group the sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureGroup {
    Sepal,
    Petal,
}

/// Static descriptor for one measurement slider.
#[derive(Clone, Copy, Debug)]
pub struct FeatureControl {
    pub label: &'static str,
    pub group: FeatureGroup,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub step: f64,
    /// One-line physical meaning shown on hover.
    pub help: &'static str,
}

/// Slider descriptors in feature-vector order.
pub const FEATURE_CONTROLS: [FeatureControl; FEATURE_COUNT] = [
    FeatureControl {
        label: "Sepal length (cm)",
        group: FeatureGroup::Sepal,
        min: 4.0,
        max: 8.0,
        default: 5.8,
        step: 0.1,
        help: "Length from the sepal base to its tip",
    },
    FeatureControl {
        label: "Sepal width (cm)",
        group: FeatureGroup::Sepal,
        min: 2.0,
        max: 4.5,
        default: 3.0,
        step: 0.1,
        help: "Width at the widest point of the sepal",
    },
    FeatureControl {
        label: "Petal length (cm)",
        group: FeatureGroup::Petal,
        min: 1.0,
        max: 7.0,
        default: 4.0,
        step: 0.1,
        help: "Length from the petal base to its tip",
    },
    FeatureControl {
        label: "Petal width (cm)",
        group: FeatureGroup::Petal,
        min: 0.1,
        max: 2.5,
        default: 1.2,
        step: 0.1,
        help: "Width at the widest point of the petal",
    },
];

/// Current values of the four sliders, in feature-vector order.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderState {
    pub values: [f32; FEATURE_COUNT],
}

impl Default for SliderState {
    fn default() -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, control) in values.iter_mut().zip(FEATURE_CONTROLS.iter()) {
            *slot = control.default;
        }
        Self { values }
    }
}

impl SliderState {
    /// Assemble the fixed-order feature vector from the current values.
    pub fn vector(&self) -> FeatureVector {
        self.values
    }
}
