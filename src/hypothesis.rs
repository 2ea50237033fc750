//! Provides the `Classifier` trait.

/// Defines the trait for classifiers.
pub mod hypothesis_traits;

pub use hypothesis_traits::Classifier;
