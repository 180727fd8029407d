// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: histogram entropy over integer codes and the
// entropy-summation mutual information built on top of it.

pub mod discrete_utils;
pub mod mle;

use crate::estimators::approaches::discrete::discrete_utils::reduce_joint_space_compact;
use crate::estimators::traits::{GlobalValue, LocalValues};
use ndarray::Array1;
use std::borrow::Borrow;

/// Discrete Mutual Information estimator using the entropy-summation formula.
///
/// This estimator can wrap any discrete entropy estimator. For two variables
/// `H(X) + H(Y) - H(X, Y)` equals `Σ p(x,y) ln(p(x,y) / (p(x) p(y)))` over the
/// occupied cells of the joint histogram.
pub struct DiscreteMutualInformation<E> {
    marginals: Vec<E>,
    joint: E,
}

impl<E> DiscreteMutualInformation<E> {
    pub fn new<A, F>(series: &[A], constructor: F) -> Self
    where
        A: Borrow<Array1<i32>>,
        F: Fn(Array1<i32>) -> E,
    {
        let marginals = series
            .iter()
            .map(|s| constructor(s.borrow().clone()))
            .collect();
        let joint_codes = reduce_joint_space_compact(series);
        let joint = constructor(joint_codes);
        Self { marginals, joint }
    }
}

impl<E: GlobalValue> GlobalValue for DiscreteMutualInformation<E> {
    fn global_value(&self) -> f64 {
        let h_marginals: f64 = self.marginals.iter().map(|m| m.global_value()).sum();
        let h_joint = self.joint.global_value();
        // I(X1; ...; Xn) = sum H(Xi) - H(X1, ..., Xn), clamped against rounding below zero
        (h_marginals - h_joint).max(0.0)
    }
}

impl<E: LocalValues> LocalValues for DiscreteMutualInformation<E> {
    fn local_values(&self) -> Array1<f64> {
        // i(x,y) = h(x) + h(y) - h(x,y)
        let mut res = Array1::zeros(self.joint.local_values().len());
        for m in &self.marginals {
            res += &m.local_values();
        }
        res -= &self.joint.local_values();
        res
    }
}
