// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # causalmeasure
//!
//! Information-theoretic feature selection and causal decomposition over
//! continuous data: mRMR ranking and SURD (Synergistic-Unique-Redundant
//! Decomposition), both built on a histogram mutual information estimator.
//!
//! ## Quick Start
//!
//! ```rust
//! use causalmeasure::{run_mrmr_from_dict, run_surd, Dataset};
//!
//! let x1: Vec<f64> = (0..200).map(|i| (i % 17) as f64).collect();
//! let x2: Vec<f64> = (0..200).map(|i| (i % 5) as f64).collect();
//! let target: Vec<f64> = x1.iter().map(|v| v * 2.0).collect();
//!
//! let ranking = run_mrmr_from_dict(
//!     [("x1", x1.clone()), ("x2", x2.clone()), ("target", target.clone())],
//!     "target",
//!     2,
//! )
//! .unwrap();
//! assert_eq!(ranking[0].name, "x1");
//!
//! let dataset = Dataset::new([("x1", x1), ("x2", x2), ("target", target)]).unwrap();
//! let surd = run_surd(&dataset, &["x1", "x2"], "target").unwrap();
//! assert!((surd.contribution_sum() - surd.total()).abs() < 1e-9);
//! ```
//!
//! ## Architecture
//!
//! 1. **Entry points** ([`api`]): `run_mrmr`, `run_mrmr_from_dict`, `run_surd`, ...
//! 2. **Algorithms**: [`selection::MrmrSelector`] and [`decomposition::SurdDecomposer`]
//! 3. **Estimators** ([`estimators`]): binning, discrete entropy and mutual information
//! 4. **Core data**: [`Dataset`], [`EstimatorConfig`], [`CausalError`] and the [`results`] records
//!
//! Everything is synchronous and pure. Independent MI evaluations run on the
//! rayon pool, and results are always combined in a fixed order.
//! Values are in nats.

pub mod api;
pub mod config;
pub mod dataset;
pub mod decomposition;
pub mod error;
pub mod estimators;
pub mod results;
pub mod selection;

pub use api::{
    DEFAULT_MAX_FEATURES, run_mrmr, run_mrmr_from_dict, run_mrmr_from_rows, run_mrmr_with_config,
    run_surd, run_surd_dual, run_surd_dual_with_config, run_surd_with_config, version,
};
pub use config::{Binning, EstimatorConfig};
pub use dataset::Dataset;
pub use error::{CausalError, Result};
pub use estimators::mutual_information::MutualInformation;
pub use results::{FeatureRanking, SurdComparison, SurdContribution, SurdResult, SurdSummary};
