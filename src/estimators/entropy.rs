use ndarray::{Array1, ArrayView1};
use crate::config::EstimatorConfig;
use crate::error::{CausalError, Result};
use crate::estimators::approaches::{binning, discrete};
pub use crate::estimators::traits::{GlobalValue, LocalValues};

/// Entropy estimation methods
///
/// This struct provides static constructors for entropy estimators over
/// already-discrete codes and over continuous samples binned per [`EstimatorConfig`].
pub struct Entropy;

impl Entropy {
    /// Creates a new maximum-likelihood entropy estimator for 1D integer data
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional array of integer codes
    pub fn new_discrete(data: Array1<i32>) -> discrete::mle::DiscreteEntropy {
        discrete::mle::DiscreteEntropy::new(data)
    }

    /// Creates an entropy estimator for continuous samples, binned per `config`
    ///
    /// The bin count is reduced for small samples as described in
    /// [`EstimatorConfig::effective_bins`].
    ///
    /// # Errors
    ///
    /// `InsufficientData` when fewer than two samples are given, `InvalidBins`
    /// when the configured bin count is below 2.
    pub fn new_binned(
        data: ArrayView1<'_, f64>,
        config: &EstimatorConfig,
    ) -> Result<discrete::mle::DiscreteEntropy> {
        if data.len() < 2 {
            return Err(CausalError::InsufficientData { samples: data.len() });
        }
        let bins = config.effective_bins(data.len())?;
        let codes = binning::discretize(data, bins, config.binning);
        Ok(discrete::mle::DiscreteEntropy::new(codes))
    }
}
