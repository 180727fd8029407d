// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use causalmeasure::MutualInformation;
use causalmeasure::estimators::{GlobalValue, LocalValues};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

fn generate_random_codes(size: usize, alphabet_size: i32, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0..alphabet_size)).collect()
}

/// Plug-in MI straight from the joint histogram: Σ p(x,y) ln(p(x,y) / (p(x) p(y))).
fn histogram_mi(x: &[i32], y: &[i32]) -> f64 {
    use std::collections::HashMap;
    let n = x.len() as f64;
    let mut joint: HashMap<(i32, i32), f64> = HashMap::new();
    let mut px: HashMap<i32, f64> = HashMap::new();
    let mut py: HashMap<i32, f64> = HashMap::new();
    for (&a, &b) in x.iter().zip(y.iter()) {
        *joint.entry((a, b)).or_insert(0.0) += 1.0 / n;
        *px.entry(a).or_insert(0.0) += 1.0 / n;
        *py.entry(b).or_insert(0.0) += 1.0 / n;
    }
    joint
        .iter()
        .map(|(&(a, b), &p)| p * (p / (px[&a] * py[&b])).ln())
        .sum()
}

#[rstest]
#[case(vec![0, 0, 1, 1, 0, 1, 0, 1], vec![0, 1, 0, 1, 0, 1, 0, 1])]
#[case(vec![1, 1, 2, 2, 3, 3], vec![1, 2, 1, 2, 1, 2])]
#[case(generate_random_codes(200, 4, 42), generate_random_codes(200, 4, 43))]
#[case(generate_random_codes(300, 6, 7), generate_random_codes(300, 3, 8))]
fn discrete_mi_matches_histogram_formula(#[case] x_vec: Vec<i32>, #[case] y_vec: Vec<i32>) {
    let expected = histogram_mi(&x_vec, &y_vec).max(0.0);
    let est = MutualInformation::new_discrete(&[Array1::from(x_vec), Array1::from(y_vec)]);
    assert_abs_diff_eq!(est.global_value(), expected, epsilon = 1e-10);
}

#[test]
fn discrete_mi_local_values_average_to_global() {
    let x: Vec<i32> = generate_random_codes(150, 3, 11);
    // y depends on x with some noise
    let noise = generate_random_codes(150, 2, 12);
    let y: Vec<i32> = x.iter().zip(noise.iter()).map(|(a, b)| a + b).collect();

    let est = MutualInformation::new_discrete(&[Array1::from(x), Array1::from(y)]);
    let locals = est.local_values();
    assert_eq!(locals.len(), 150);
    assert!(est.global_value() > 0.1);
    assert_abs_diff_eq!(est.global_from_local(), est.global_value(), epsilon = 1e-10);
}

#[test]
fn discrete_mi_of_identical_codes_is_entropy() {
    let x = Array1::from(vec![0, 1, 2, 3, 0, 1, 2, 3]);
    let est = MutualInformation::new_discrete(&[x.clone(), x]);
    assert_abs_diff_eq!(est.global_value(), 4f64.ln(), epsilon = 1e-12);
}
