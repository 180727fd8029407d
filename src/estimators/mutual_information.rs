use ndarray::{Array1, Array2, ArrayView1};
use rayon::prelude::*;
use std::borrow::Borrow;

use crate::config::EstimatorConfig;
use crate::dataset::Dataset;
use crate::error::{CausalError, Result};
use crate::estimators::approaches::binning::discretize;
use crate::estimators::approaches::discrete::discrete_utils::reduce_joint_space_compact;
use crate::estimators::approaches::discrete::mle::DiscreteEntropy;
use crate::estimators::approaches::discrete::DiscreteMutualInformation;
use crate::estimators::discretized::DiscretizedDataset;
use crate::estimators::traits::GlobalValue;

/// Mutual information estimation over binned continuous data.
///
/// All values are in nats. Continuous inputs are discretized into a shared
/// number of bins (see [`EstimatorConfig::effective_bins`]) and the estimate is
/// the plug-in MI of the resulting joint histogram.
pub struct MutualInformation;

impl MutualInformation {
    /// Creates an entropy-summation MI estimator over already-discrete codes.
    ///
    /// Supports global and local (pointwise) values.
    pub fn new_discrete<A: Borrow<Array1<i32>>>(
        series: &[A],
    ) -> DiscreteMutualInformation<DiscreteEntropy> {
        DiscreteMutualInformation::new(series, DiscreteEntropy::new)
    }

    /// Estimates `I(X; Y)` with `bins` equal-width bins per variable.
    ///
    /// # Errors
    ///
    /// * `ShapeMismatch` if `x` and `y` differ in length
    /// * `InsufficientData` if fewer than two samples are given
    /// * `InvalidBins` if `bins < 2`
    pub fn estimate(x: &[f64], y: &[f64], bins: usize) -> Result<f64> {
        let config = EstimatorConfig::default().with_bins(bins);
        Self::estimate_with(ArrayView1::from(x), ArrayView1::from(y), &config)
    }

    /// Estimates `I(X; Y)` with the bin count and binning rule from `config`.
    pub fn estimate_with(
        x: ArrayView1<'_, f64>,
        y: ArrayView1<'_, f64>,
        config: &EstimatorConfig,
    ) -> Result<f64> {
        check_columns(&[("x", x.view()), ("y", y.view())])?;
        let n = x.len();
        if n < 2 {
            return Err(CausalError::InsufficientData { samples: n });
        }
        let bins = config.effective_bins(n)?;
        let codes = [
            discretize(x, bins, config.binning),
            discretize(y, bins, config.binning),
        ];
        Ok(Self::new_discrete(&codes).global_value())
    }

    /// Estimates the joint information `I(S1, ..., Sk; T)` the sources carry about the target.
    ///
    /// Sources are binned individually and then collapsed into one joint code.
    /// With no sources the result is 0.
    pub fn estimate_joint(
        sources: &[ArrayView1<'_, f64>],
        target: ArrayView1<'_, f64>,
        config: &EstimatorConfig,
    ) -> Result<f64> {
        let names: Vec<String> = (0..sources.len()).map(|i| format!("source {i}")).collect();
        let mut columns: Vec<(&str, ArrayView1<'_, f64>)> = vec![("target", target.view())];
        columns.extend(names.iter().map(String::as_str).zip(sources.iter().map(|s| s.view())));
        check_columns(&columns)?;

        let n = target.len();
        if n < 2 {
            return Err(CausalError::InsufficientData { samples: n });
        }
        let bins = config.effective_bins(n)?;
        if sources.is_empty() {
            return Ok(0.0);
        }
        let source_codes: Vec<Array1<i32>> = sources
            .iter()
            .map(|s| discretize(*s, bins, config.binning))
            .collect();
        let joint_sources = reduce_joint_space_compact(&source_codes);
        let target_codes = discretize(target, bins, config.binning);
        Ok(Self::new_discrete(&[joint_sources, target_codes]).global_value())
    }

    /// Symmetric matrix of pairwise MI between all variables of a dataset.
    ///
    /// Rows and columns follow the returned (lexicographic) name order. The
    /// diagonal holds each variable's self-information, i.e. its binned entropy.
    /// Pairs are estimated in parallel.
    pub fn pairwise_matrix(
        dataset: &Dataset,
        config: &EstimatorConfig,
    ) -> Result<(Vec<String>, Array2<f64>)> {
        let discretized = DiscretizedDataset::new(dataset, config)?;
        let k = discretized.len();
        let pairs: Vec<(usize, usize)> = (0..k)
            .flat_map(|i| (i + 1..k).map(move |j| (i, j)))
            .collect();
        let values: Vec<f64> = pairs
            .par_iter()
            .map(|&(i, j)| discretized.mutual_information(i, j))
            .collect();

        let mut matrix = Array2::<f64>::zeros((k, k));
        for i in 0..k {
            matrix[[i, i]] = discretized.entropy(i);
        }
        for (&(i, j), &mi) in pairs.iter().zip(values.iter()) {
            matrix[[i, j]] = mi;
            matrix[[j, i]] = mi;
        }
        let names = (0..k).map(|i| discretized.name(i).to_string()).collect();
        Ok((names, matrix))
    }
}

/// Validates raw inputs the way [`Dataset::new`] does: equal lengths, finite values.
fn check_columns(columns: &[(&str, ArrayView1<'_, f64>)]) -> Result<()> {
    let Some((first_name, first)) = columns.first() else {
        return Ok(());
    };
    for (name, values) in columns {
        if values.len() != first.len() {
            return Err(CausalError::ShapeMismatch {
                left: first_name.to_string(),
                left_len: first.len(),
                right: name.to_string(),
                right_len: values.len(),
            });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(CausalError::NonFiniteValue {
                name: name.to_string(),
                index,
                value,
            });
        }
    }
    Ok(())
}
