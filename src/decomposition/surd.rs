// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Synergistic-Unique-Redundant Decomposition (SURD).
//!
//! Redundancy follows the specific-information lattice of Martínez-Sánchez,
//! Arranz & Lozano-Durán, "Decomposing causality into its synergistic, unique,
//! and redundant components" (Nature Communications, 2024). For every target
//! state `t` the specific information
//!
//! ```text
//! Is(S; t) = Σ_s p(s|t) ln( p(t|s) / p(t) )
//! ```
//!
//! of every non-empty source subset `S` is computed and sorted. The increments
//! between consecutive sorted values, weighted by `p(t)`, are handed out along
//! the sorted order: an increment reached through a single source is shared
//! (redundant) by all sources not yet passed, or unique once only one is left;
//! an increment reached through a larger subset is synergy of that subset.
//! The increments telescope to `Σ_t p(t) max_S Is(S; t) = I(sources; target)`.

use std::collections::HashMap;

use ndarray::{Array1, Array2};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::EstimatorConfig;
use crate::dataset::Dataset;
use crate::error::{CausalError, Result};
use crate::estimators::approaches::discrete::discrete_utils::{
    count_frequencies, reduce_joint_space_compact,
};
use crate::estimators::discretized::DiscretizedDataset;
use crate::results::{SurdContribution, SurdResult};

/// Relative gap between the lattice sum and the joint MI above which a warning is logged.
const RESCALE_WARN_TOLERANCE: f64 = 1e-6;

/// Hard ceiling on sources regardless of configuration; the lattice is enumerated with u64 masks.
pub const MAX_LATTICE_SOURCES: usize = 24;

/// Decomposes the information a set of sources carries about a target.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurdDecomposer {
    config: EstimatorConfig,
}

impl SurdDecomposer {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Decompose `I(sources; target)` over every non-empty subset of `sources`.
    ///
    /// The result does not depend on the order of `sources`: subsets are keyed
    /// by their sorted names.
    ///
    /// # Errors
    ///
    /// * `NoSources` if `sources` is empty
    /// * `UnknownVariable` if a source or the target is not in the dataset
    /// * `DuplicateVariable` if a name appears twice, or the target is also a source
    /// * `TooManySources` if there are more sources than `max_surd_sources`
    /// * `InsufficientData` if fewer than two samples are available
    pub fn decompose<S: AsRef<str>>(
        &self,
        dataset: &Dataset,
        sources: &[S],
        target: &str,
    ) -> Result<SurdResult> {
        if sources.is_empty() {
            return Err(CausalError::NoSources);
        }
        let mut names: Vec<&str> = sources.iter().map(AsRef::as_ref).collect();
        for name in names.iter().copied().chain(std::iter::once(target)) {
            if !dataset.contains(name) {
                return Err(CausalError::UnknownVariable {
                    name: name.to_string(),
                });
            }
        }
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|w| w[0] == w[1]) {
            return Err(CausalError::DuplicateVariable {
                name: pair[0].to_string(),
            });
        }
        if names.binary_search(&target).is_ok() {
            return Err(CausalError::DuplicateVariable {
                name: target.to_string(),
            });
        }
        let max = self.config.max_surd_sources.min(MAX_LATTICE_SOURCES);
        if names.len() > max {
            return Err(CausalError::TooManySources {
                count: names.len(),
                max,
            });
        }

        // Sources occupy 0..k, the target sits at k.
        let mut columns = names.clone();
        columns.push(target);
        let discretized = DiscretizedDataset::with_variables(dataset, &columns, &self.config)?;
        let k = names.len();
        Ok(decompose_discretized(&discretized, k))
    }

    /// Decompose using every variable except `target` as a source.
    pub fn decompose_all(&self, dataset: &Dataset, target: &str) -> Result<SurdResult> {
        if !dataset.contains(target) {
            return Err(CausalError::UnknownVariable {
                name: target.to_string(),
            });
        }
        let sources = dataset.non_target_names(target);
        self.decompose(dataset, &sources, target)
    }
}

/// Run the lattice decomposition with sources at `0..k` and the target at `k`.
fn decompose_discretized(discretized: &DiscretizedDataset, k: usize) -> SurdResult {
    let n = discretized.n_samples();
    let lattice = subset_lattice(k);
    let position: HashMap<&[usize], usize> = lattice
        .iter()
        .enumerate()
        .map(|(i, subset)| (subset.as_slice(), i))
        .collect();
    debug!(sources = k, subsets = lattice.len(), n_samples = n, "building SURD lattice");

    // Target states as dense indices, with their counts.
    let target_counts = count_frequencies(discretized.codes(k));
    let state_of: HashMap<i32, usize> = target_counts
        .keys()
        .enumerate()
        .map(|(state, &code)| (code, state))
        .collect();
    let states: Array1<usize> = discretized.codes(k).mapv(|code| state_of[&code]);
    let state_counts: Vec<usize> = target_counts.values().copied().collect();

    // specific[subset][state]
    let specific: Vec<Vec<f64>> = lattice
        .par_iter()
        .map(|subset| {
            let codes: Vec<&Array1<i32>> = subset.iter().map(|&i| discretized.codes(i)).collect();
            let joint = reduce_joint_space_compact(&codes);
            specific_information(&joint, &states, &state_counts)
        })
        .collect();

    let mut unique = vec![0.0_f64; lattice.len()];
    let mut redundant = vec![0.0_f64; lattice.len()];
    let mut synergistic = vec![0.0_f64; lattice.len()];

    for (state, &count) in state_counts.iter().enumerate() {
        let p_state = count as f64 / n as f64;
        let mut values: Vec<f64> = specific.iter().map(|row| row[state]).collect();

        // A subset of order l+1 only counts once it beats every subset of order l.
        for order in 1..k {
            let max_lower = lattice
                .iter()
                .zip(values.iter())
                .filter(|(subset, _)| subset.len() == order)
                .map(|(_, &v)| v)
                .fold(f64::NEG_INFINITY, f64::max);
            for (subset, value) in lattice.iter().zip(values.iter_mut()) {
                if subset.len() == order + 1 && *value < max_lower {
                    *value = 0.0;
                }
            }
        }

        let mut order: Vec<usize> = (0..lattice.len()).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]).then(a.cmp(&b)));

        let mut remaining: Vec<usize> = (0..k).collect();
        let mut previous = 0.0_f64;
        for idx in order {
            let info = (values[idx] - previous) * p_state;
            previous = values[idx];
            let subset = &lattice[idx];
            if subset.len() == 1 {
                let shared = position[remaining.as_slice()];
                if remaining.len() == 1 {
                    unique[shared] += info;
                } else {
                    redundant[shared] += info;
                }
                remaining.retain(|&v| v != subset[0]);
            } else {
                synergistic[idx] += info;
            }
        }
    }

    let all_sources: Vec<usize> = (0..k).collect();
    let total = discretized.joint_mutual_information(&all_sources, k);
    let lattice_sum: f64 = unique.iter().chain(&redundant).chain(&synergistic).sum();

    if lattice_sum > 0.0 {
        let scale = total / lattice_sum;
        if (scale - 1.0).abs() > RESCALE_WARN_TOLERANCE {
            warn!(total, lattice_sum, "SURD lattice sum deviates from joint MI, rescaling");
        }
        for v in unique
            .iter_mut()
            .chain(redundant.iter_mut())
            .chain(synergistic.iter_mut())
        {
            *v *= scale;
        }
    } else if total > 0.0 {
        warn!(total, "SURD lattice is empty although joint MI is positive");
    }

    let info_leak = (discretized.entropy(k) - total).max(0.0);
    let contributions = lattice
        .iter()
        .enumerate()
        .map(|(i, subset)| SurdContribution {
            variables: subset.iter().map(|&v| discretized.name(v).to_string()).collect(),
            unique: unique[i],
            redundant: redundant[i],
            synergistic: synergistic[i],
        })
        .collect();

    SurdResult::new(contributions, total, info_leak)
}

/// All non-empty subsets of `0..k`, ordered by size and then lexicographically.
pub fn subset_lattice(k: usize) -> Vec<Vec<usize>> {
    let mut subsets: Vec<Vec<usize>> = (1u64..(1u64 << k))
        .map(|mask| (0..k).filter(|&i| mask & (1 << i) != 0).collect())
        .collect();
    subsets.sort_by(|a: &Vec<usize>, b: &Vec<usize>| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    subsets
}

/// Specific information `Is(S; t)` (nats) of a compact joint source code for every target state.
///
/// `joint` holds compact codes `0..m`, `states` the dense target state per sample.
fn specific_information(
    joint: &Array1<i32>,
    states: &Array1<usize>,
    state_counts: &[usize],
) -> Vec<f64> {
    let n = joint.len();
    let m = joint.iter().copied().max().map_or(0, |max| max as usize + 1);
    let mut source_counts = vec![0usize; m];
    let mut pair_counts = Array2::<usize>::zeros((m, state_counts.len()));
    for (&s, &t) in joint.iter().zip(states.iter()) {
        source_counts[s as usize] += 1;
        pair_counts[[s as usize, t]] += 1;
    }

    let n_f = n as f64;
    state_counts
        .iter()
        .enumerate()
        .map(|(t, &c_t)| {
            if c_t == 0 {
                return 0.0;
            }
            let c_t = c_t as f64;
            let mut info = 0.0_f64;
            for (s, &c_s) in source_counts.iter().enumerate() {
                let c_st = pair_counts[[s, t]];
                if c_st == 0 {
                    continue;
                }
                let c_st = c_st as f64;
                // p(s|t) * ln( p(t|s) / p(t) )
                info += (c_st / c_t) * (c_st * n_f / (c_s as f64 * c_t)).ln();
            }
            // Is is a KL divergence, negative values are rounding noise
            info.max(0.0)
        })
        .collect()
}
