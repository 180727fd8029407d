// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output records of the selector and the decomposer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One selected variable and its incremental mRMR score at the time it was chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRanking {
    pub name: String,
    pub score: f64,
}

impl fmt::Display for FeatureRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeatureRanking(name='{}', score={:.4})", self.name, self.score)
    }
}

/// Information (nats) assigned to one subset of the SURD lattice.
///
/// Singletons only carry `unique`; larger subsets only carry `redundant` and
/// `synergistic`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurdContribution {
    /// Source names, sorted.
    pub variables: Vec<String>,
    pub unique: f64,
    pub redundant: f64,
    pub synergistic: f64,
}

impl SurdContribution {
    pub fn total(&self) -> f64 {
        self.unique + self.redundant + self.synergistic
    }
}

/// Decomposition of `I(sources; target)` over every non-empty subset of sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurdResult {
    contributions: Vec<SurdContribution>,
    total: f64,
    info_leak: f64,
}

impl SurdResult {
    /// `contributions` must already be in lattice order (size, then names).
    pub(crate) fn new(contributions: Vec<SurdContribution>, total: f64, info_leak: f64) -> Self {
        Self {
            contributions,
            total,
            info_leak,
        }
    }

    /// All subsets, ordered by size and then lexicographically.
    pub fn contributions(&self) -> &[SurdContribution] {
        &self.contributions
    }

    /// Contribution of a subset, given in any order.
    pub fn get<S: AsRef<str>>(&self, variables: &[S]) -> Option<&SurdContribution> {
        let mut key: Vec<&str> = variables.iter().map(AsRef::as_ref).collect();
        key.sort_unstable();
        self.contributions
            .iter()
            .find(|c| c.variables.iter().map(String::as_str).eq(key.iter().copied()))
    }

    pub fn unique(&self, variable: &str) -> f64 {
        self.get(&[variable]).map_or(0.0, |c| c.unique)
    }

    pub fn redundant<S: AsRef<str>>(&self, variables: &[S]) -> f64 {
        self.get(variables).map_or(0.0, |c| c.redundant)
    }

    pub fn synergistic<S: AsRef<str>>(&self, variables: &[S]) -> f64 {
        self.get(variables).map_or(0.0, |c| c.synergistic)
    }

    /// Joint mutual information between all sources and the target.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Target entropy left unexplained by the sources, `H(T | sources)`.
    pub fn info_leak(&self) -> f64 {
        self.info_leak
    }

    /// Sum of every contribution; equals [`SurdResult::total`] up to rounding.
    pub fn contribution_sum(&self) -> f64 {
        self.contributions.iter().map(SurdContribution::total).sum()
    }

    /// Collapse the lattice into one number per component.
    pub fn summary(&self) -> SurdSummary {
        let mut summary = SurdSummary {
            redundant: 0.0,
            unique: 0.0,
            synergistic: 0.0,
            total: self.total,
        };
        for c in &self.contributions {
            summary.redundant += c.redundant;
            summary.unique += c.unique;
            summary.synergistic += c.synergistic;
        }
        summary
    }
}

/// Lattice-wide totals of a [`SurdResult`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurdSummary {
    pub redundant: f64,
    pub unique: f64,
    pub synergistic: f64,
    pub total: f64,
}

impl SurdSummary {
    /// Share of the total that is unique information, 0 when nothing is explained.
    pub fn unique_ratio(&self) -> f64 {
        if self.total > 0.0 {
            self.unique / self.total
        } else {
            0.0
        }
    }
}

impl fmt::Display for SurdSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SurdResult(redundant={:.4}, unique={:.4}, synergistic={:.4}, total={:.4})",
            self.redundant, self.unique, self.synergistic, self.total
        )
    }
}

/// SURD and mRMR drivers of a case dataset compared against a control dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurdComparison {
    pub case: SurdSummary,
    pub control: SurdSummary,
    /// Selected for the case but not for the control, sorted.
    pub disjoint_drivers: Vec<String>,
    /// Selected for both, sorted.
    pub shared_drivers: Vec<String>,
    /// `|unique/total (case) - unique/total (control)|`.
    pub specificity_score: f64,
}
