use ndarray::Array1;
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::approaches::discrete::discrete_utils::DiscreteDataset;

/// Standard Shannon entropy estimator for discrete data using maximum likelihood (natural log base).
///
/// Computes H = -Σ p_i ln p_i from empirical probabilities p_i = n_i/N. Local values are
/// the per-sample surprisals -ln p(x), whose mean is the global value.
pub struct DiscreteEntropy {
    dataset: DiscreteDataset,
}

impl DiscreteEntropy {
    pub fn new(data: Array1<i32>) -> Self {
        let dataset = DiscreteDataset::from_data(data);
        Self { dataset }
    }

    /// Number of distinct symbols observed.
    pub fn n_symbols(&self) -> usize {
        self.dataset.k
    }

    pub fn dataset(&self) -> &DiscreteDataset {
        &self.dataset
    }
}

impl GlobalValue for DiscreteEntropy {
    fn global_value(&self) -> f64 {
        self.dataset.entropy()
    }
}

impl LocalValues for DiscreteEntropy {
    fn local_values(&self) -> Array1<f64> {
        let p_local = self.dataset.map_probs();
        -p_local.mapv(f64::ln)
    }
}
