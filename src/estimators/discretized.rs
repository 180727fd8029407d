// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use ndarray::{Array1, ArrayView1};
use rayon::prelude::*;
use tracing::debug;

use crate::config::EstimatorConfig;
use crate::dataset::Dataset;
use crate::error::{CausalError, Result};
use crate::estimators::approaches::binning::discretize;
use crate::estimators::approaches::discrete::discrete_utils::{
    count_frequencies, entropy_from_counts, reduce_joint_space_compact,
};

/// Bin codes and marginal entropies for every variable of a dataset.
///
/// Built once per selection/decomposition call and dropped with it, so no
/// estimate is ever shared between calls.
pub struct DiscretizedDataset {
    names: Vec<String>,
    index: HashMap<String, usize>,
    codes: Vec<Array1<i32>>,
    entropies: Vec<f64>,
    bins: usize,
    n_samples: usize,
}

impl DiscretizedDataset {
    pub fn new(dataset: &Dataset, config: &EstimatorConfig) -> Result<Self> {
        let columns: Vec<(&str, ArrayView1<'_, f64>)> = dataset.iter().collect();
        Self::from_columns(&columns, dataset.n_samples(), config)
    }

    /// Discretize only the named variables, in the given order.
    ///
    /// Fails with `UnknownVariable` for a name missing from the dataset.
    pub fn with_variables<S: AsRef<str>>(
        dataset: &Dataset,
        names: &[S],
        config: &EstimatorConfig,
    ) -> Result<Self> {
        let columns = names
            .iter()
            .map(|name| Ok((name.as_ref(), dataset.variable(name.as_ref())?)))
            .collect::<Result<Vec<_>>>()?;
        Self::from_columns(&columns, dataset.n_samples(), config)
    }

    fn from_columns(
        columns: &[(&str, ArrayView1<'_, f64>)],
        n_samples: usize,
        config: &EstimatorConfig,
    ) -> Result<Self> {
        if n_samples < 2 {
            return Err(CausalError::InsufficientData { samples: n_samples });
        }
        let bins = config.effective_bins(n_samples)?;
        debug!(
            variables = columns.len(),
            n_samples,
            requested_bins = config.bins,
            bins,
            binning = ?config.binning,
            "discretizing variables"
        );

        let codes: Vec<Array1<i32>> = columns
            .par_iter()
            .map(|(_, values)| discretize(values.view(), bins, config.binning))
            .collect();
        let entropies = codes
            .iter()
            .map(|c| entropy_from_counts(count_frequencies(c).into_values(), n_samples))
            .collect();
        let names: Vec<String> = columns.iter().map(|(name, _)| name.to_string()).collect();
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Ok(Self {
            names,
            index,
            codes,
            entropies,
            bins,
            n_samples,
        })
    }

    /// Bin count actually used after the small-sample reduction.
    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    pub fn codes(&self, idx: usize) -> &Array1<i32> {
        &self.codes[idx]
    }

    /// Marginal entropy (nats) of the binned variable.
    pub fn entropy(&self, idx: usize) -> f64 {
        self.entropies[idx]
    }

    /// Pairwise MI (nats) between two binned variables.
    ///
    /// Exactly symmetric: the joint code reduction and the entropy sum do not
    /// depend on argument order.
    pub fn mutual_information(&self, a: usize, b: usize) -> f64 {
        let joint = reduce_joint_space_compact(&[&self.codes[a], &self.codes[b]]);
        let h_joint = entropy_from_counts(count_frequencies(&joint).into_values(), self.n_samples);
        (self.entropies[a] + self.entropies[b] - h_joint).max(0.0)
    }

    /// Joint MI `I(S1, ..., Sk; T)` with the sources collapsed into one joint code.
    pub fn joint_mutual_information(&self, sources: &[usize], target: usize) -> f64 {
        if sources.is_empty() {
            return 0.0;
        }
        let source_codes: Vec<&Array1<i32>> = sources.iter().map(|&i| &self.codes[i]).collect();
        let joint_sources = reduce_joint_space_compact(&source_codes);
        let joint_all = reduce_joint_space_compact(&[&joint_sources, &self.codes[target]]);

        let h_sources =
            entropy_from_counts(count_frequencies(&joint_sources).into_values(), self.n_samples);
        let h_all = entropy_from_counts(count_frequencies(&joint_all).into_values(), self.n_samples);
        (h_sources + self.entropies[target] - h_all).max(0.0)
    }
}
