pub mod binning;
pub mod discrete;

// Re-exports so callers can import estimators from approaches::* directly.
pub use binning::discretize;
pub use discrete::mle::DiscreteEntropy;
pub use discrete::DiscreteMutualInformation;
