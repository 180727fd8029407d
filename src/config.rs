// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::error::{CausalError, Result};

/// Default number of histogram bins per variable.
pub const DEFAULT_BINS: usize = 10;

/// Default ceiling on the number of SURD sources (the lattice has `2^n - 1` subsets).
pub const DEFAULT_MAX_SURD_SOURCES: usize = 10;

/// Rule used to map continuous samples onto integer bin codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Binning {
    /// Bins of identical width spanning `[min, max]`.
    #[default]
    EqualWidth,
    /// Bins holding (approximately) the same number of samples, assigned by rank.
    Quantile,
}

/// Parameters shared by the MI estimator, the mRMR selector and the SURD decomposer.
///
/// Deserializes with defaults for missing fields, so a partial TOML/JSON table is enough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Requested bins per variable, before the small-sample reduction.
    pub bins: usize,
    pub binning: Binning,
    pub max_surd_sources: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            binning: Binning::EqualWidth,
            max_surd_sources: DEFAULT_MAX_SURD_SOURCES,
        }
    }
}

impl EstimatorConfig {
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    pub fn with_binning(mut self, binning: Binning) -> Self {
        self.binning = binning;
        self
    }

    pub fn with_max_surd_sources(mut self, max: usize) -> Self {
        self.max_surd_sources = max;
        self
    }

    /// Number of bins actually used for `n_samples` observations.
    ///
    /// When `n_samples < bins²` the joint histogram would be too sparse, so the
    /// count drops to `max(floor(sqrt(n_samples)), 2)`.
    pub fn effective_bins(&self, n_samples: usize) -> Result<usize> {
        if self.bins < 2 {
            return Err(CausalError::InvalidBins { bins: self.bins });
        }
        let cells = self.bins.saturating_mul(self.bins);
        if n_samples < cells {
            let reduced = (n_samples as f64).sqrt().floor() as usize;
            Ok(reduced.clamp(2, self.bins))
        } else {
            Ok(self.bins)
        }
    }
}
