// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::EstimatorConfig;
use crate::dataset::Dataset;
use crate::error::{CausalError, Result};
use crate::estimators::discretized::DiscretizedDataset;
use crate::results::FeatureRanking;

/// Greedy minimum-Redundancy-Maximum-Relevance feature selection.
///
/// Each step picks the candidate maximizing `relevance - mean redundancy`,
/// where relevance is `MI(v, target)` and redundancy is the MI between the
/// candidate and the variables already selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct MrmrSelector {
    config: EstimatorConfig,
}

/// A chosen variable and its score at selection time.
#[derive(Debug, Clone)]
struct Selection {
    candidate: usize,
    score: f64,
}

impl MrmrSelector {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Select up to `max_features` variables for predicting `target`.
    ///
    /// `max_features` above the number of non-target variables is clamped, and
    /// `max_features == 0` yields an empty ranking. The ranking is returned
    /// best-first: by score, equal scores by name.
    ///
    /// # Errors
    ///
    /// * `UnknownTarget` if `target` is not in the dataset
    /// * `EmptyDataset` if the target is the only variable
    /// * `InsufficientData` if fewer than two samples are available
    pub fn select(
        &self,
        dataset: &Dataset,
        target: &str,
        max_features: usize,
    ) -> Result<Vec<FeatureRanking>> {
        if !dataset.contains(target) {
            return Err(CausalError::UnknownTarget {
                name: target.to_string(),
            });
        }
        if max_features == 0 {
            return Ok(Vec::new());
        }
        if dataset.n_variables() < 2 {
            return Err(CausalError::EmptyDataset {
                target: target.to_string(),
            });
        }

        let discretized = DiscretizedDataset::new(dataset, &self.config)?;
        let target_idx = discretized
            .index_of(target)
            .ok_or_else(|| CausalError::UnknownTarget {
                name: target.to_string(),
            })?;
        let candidates: Vec<usize> = (0..discretized.len()).filter(|&i| i != target_idx).collect();
        let n_select = max_features.min(candidates.len());
        debug!(
            target,
            candidates = candidates.len(),
            max_features,
            n_select,
            bins = discretized.bins(),
            "starting mRMR selection"
        );

        let relevance: Vec<f64> = candidates
            .par_iter()
            .map(|&c| discretized.mutual_information(c, target_idx))
            .collect();

        // Running sum of MI(candidate, s) over selected s, indexed like `candidates`.
        let mut redundancy_sum = vec![0.0_f64; candidates.len()];
        let mut remaining: Vec<usize> = (0..candidates.len()).collect();
        let mut selected: Vec<Selection> = Vec::with_capacity(n_select);

        while selected.len() < n_select && !remaining.is_empty() {
            let n_selected = selected.len();
            let score_of = |slot: usize| {
                let redundancy = if n_selected == 0 {
                    0.0
                } else {
                    redundancy_sum[slot] / n_selected as f64
                };
                relevance[slot] - redundancy
            };

            let mut best_pos = 0;
            let mut best_score = score_of(remaining[0]);
            for (pos, &slot) in remaining.iter().enumerate().skip(1) {
                let score = score_of(slot);
                let best_slot = remaining[best_pos];
                let better = score
                    .total_cmp(&best_score)
                    .then(relevance[slot].total_cmp(&relevance[best_slot]))
                    .then_with(|| {
                        discretized
                            .name(candidates[best_slot])
                            .cmp(discretized.name(candidates[slot]))
                    });
                if better == Ordering::Greater {
                    best_pos = pos;
                    best_score = score;
                }
            }

            let chosen = remaining.remove(best_pos);
            trace!(
                name = discretized.name(candidates[chosen]),
                score = best_score,
                relevance = relevance[chosen],
                "selected feature"
            );
            selected.push(Selection {
                candidate: candidates[chosen],
                score: best_score,
            });

            if selected.len() < n_select {
                let chosen_var = candidates[chosen];
                let increments: Vec<f64> = remaining
                    .par_iter()
                    .map(|&slot| discretized.mutual_information(candidates[slot], chosen_var))
                    .collect();
                for (&slot, inc) in remaining.iter().zip(increments) {
                    redundancy_sum[slot] += inc;
                }
            }
        }

        selected.sort_by(|a, b| {
            b.score.total_cmp(&a.score).then_with(|| {
                discretized
                    .name(a.candidate)
                    .cmp(discretized.name(b.candidate))
            })
        });

        Ok(selected
            .into_iter()
            .map(|s| FeatureRanking {
                name: discretized.name(s.candidate).to_string(),
                score: s.score,
            })
            .collect())
    }
}
