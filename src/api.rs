// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-function entry points for binding layers.
//!
//! Adapters for data frames, files or other tabular sources are expected to
//! produce a name → samples mapping and call [`run_mrmr_from_dict`].

use std::collections::BTreeSet;

use tracing::info;

use crate::config::EstimatorConfig;
use crate::dataset::Dataset;
use crate::decomposition::SurdDecomposer;
use crate::error::Result;
use crate::results::{FeatureRanking, SurdComparison, SurdResult};
use crate::selection::MrmrSelector;

/// Number of features `run_mrmr` callers typically request.
pub const DEFAULT_MAX_FEATURES: usize = 10;

/// mRMR feature selection with the default estimator configuration.
pub fn run_mrmr(dataset: &Dataset, target: &str, max_features: usize) -> Result<Vec<FeatureRanking>> {
    run_mrmr_with_config(dataset, target, max_features, &EstimatorConfig::default())
}

pub fn run_mrmr_with_config(
    dataset: &Dataset,
    target: &str,
    max_features: usize,
    config: &EstimatorConfig,
) -> Result<Vec<FeatureRanking>> {
    MrmrSelector::new(*config).select(dataset, target, max_features)
}

/// mRMR over a column mapping, e.g. `HashMap<String, Vec<f64>>` or `[(&str, Vec<f64>); N]`.
pub fn run_mrmr_from_dict<I, S, V>(
    columns: I,
    target: &str,
    max_features: usize,
) -> Result<Vec<FeatureRanking>>
where
    I: IntoIterator<Item = (S, V)>,
    S: Into<String>,
    V: Into<Vec<f64>>,
{
    let dataset = Dataset::new(columns)?;
    run_mrmr(&dataset, target, max_features)
}

/// mRMR over row-major data with one name per column.
pub fn run_mrmr_from_rows<S: AsRef<str>>(
    rows: &[Vec<f64>],
    column_names: &[S],
    target: &str,
    max_features: usize,
) -> Result<Vec<FeatureRanking>> {
    let dataset = Dataset::from_rows(rows, column_names)?;
    run_mrmr(&dataset, target, max_features)
}

/// SURD decomposition of `I(sources; target)` with the default estimator configuration.
pub fn run_surd<S: AsRef<str>>(dataset: &Dataset, sources: &[S], target: &str) -> Result<SurdResult> {
    run_surd_with_config(dataset, sources, target, &EstimatorConfig::default())
}

pub fn run_surd_with_config<S: AsRef<str>>(
    dataset: &Dataset,
    sources: &[S],
    target: &str,
    config: &EstimatorConfig,
) -> Result<SurdResult> {
    SurdDecomposer::new(*config).decompose(dataset, sources, target)
}

/// Compare a case dataset against a control dataset sharing the same target.
///
/// Both are decomposed with every non-target variable as a source, and the
/// top `max_features` mRMR drivers of each are split into case-only and
/// shared sets.
///
/// # Errors
///
/// Since the SURD lattice covers all non-target variables, a dataset with
/// more of them than [`EstimatorConfig::max_surd_sources`] fails with
/// `TooManySources`. Narrow wide datasets to their candidate drivers first,
/// e.g. with [`run_mrmr`], or raise the limit through
/// [`run_surd_dual_with_config`].
pub fn run_surd_dual(
    case: &Dataset,
    control: &Dataset,
    target: &str,
    max_features: usize,
) -> Result<SurdComparison> {
    run_surd_dual_with_config(case, control, target, max_features, &EstimatorConfig::default())
}

pub fn run_surd_dual_with_config(
    case: &Dataset,
    control: &Dataset,
    target: &str,
    max_features: usize,
    config: &EstimatorConfig,
) -> Result<SurdComparison> {
    info!(
        case_samples = case.n_samples(),
        control_samples = control.n_samples(),
        target,
        "running dual SURD analysis"
    );
    let decomposer = SurdDecomposer::new(*config);
    let case_summary = decomposer.decompose_all(case, target)?.summary();
    let control_summary = decomposer.decompose_all(control, target)?.summary();

    let selector = MrmrSelector::new(*config);
    let case_drivers: BTreeSet<String> = selector
        .select(case, target, max_features)?
        .into_iter()
        .map(|r| r.name)
        .collect();
    let control_drivers: BTreeSet<String> = selector
        .select(control, target, max_features)?
        .into_iter()
        .map(|r| r.name)
        .collect();

    let specificity_score = (case_summary.unique_ratio() - control_summary.unique_ratio()).abs();

    Ok(SurdComparison {
        case: case_summary,
        control: control_summary,
        disjoint_drivers: case_drivers.difference(&control_drivers).cloned().collect(),
        shared_drivers: case_drivers.intersection(&control_drivers).cloned().collect(),
        specificity_score,
    })
}

/// Crate version, for diagnostics only.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
