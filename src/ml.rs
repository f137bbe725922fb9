//! Pre-fitted inference primitives.
//!
//! Both artifact types deserialize from JSON, validate their dimensions at
//! load time, and run forward passes over plain slices. Fitting happens
//! elsewhere; this crate only loads and applies the results.

pub mod classifier;
pub mod scaler;

pub use classifier::{SoftmaxClassifier, softmax};
pub use scaler::StandardScaler;
