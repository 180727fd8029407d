// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::config::Binning;

/// Discretize a continuous series into integer bin codes in `0..bins`.
///
/// A constant series always maps to the single code 0, whatever the rule.
pub fn discretize(values: ArrayView1<'_, f64>, bins: usize, binning: Binning) -> Array1<i32> {
    match binning {
        Binning::EqualWidth => equal_width_codes(values, bins),
        Binning::Quantile => quantile_codes(values, bins),
    }
}

/// Equal-width bins over `[min, max]`; the maximum falls into the last bin.
pub fn equal_width_codes(values: ArrayView1<'_, f64>, bins: usize) -> Array1<i32> {
    if values.is_empty() || bins == 0 {
        return Array1::zeros(values.len());
    }
    let min_v = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_v = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Halved so the span of finite inputs near f64::MAX stays finite.
    let (low, span) = (min_v / 2.0, max_v / 2.0 - min_v / 2.0);
    if span <= 0.0 {
        return Array1::zeros(values.len());
    }

    let last = (bins - 1) as i32;
    values.mapv(|v| {
        let bin = ((v / 2.0 - low) / span * bins as f64).floor() as i32;
        bin.clamp(0, last)
    })
}

/// Rank-based bins: sample with rank `r` goes to `floor(r * bins / n)`.
///
/// Tied values share the rank of the first member of their tie group, so equal
/// inputs always land in the same bin.
pub fn quantile_codes(values: ArrayView1<'_, f64>, bins: usize) -> Array1<i32> {
    let n = values.len();
    if n == 0 || bins == 0 {
        return Array1::zeros(n);
    }
    let order = stable_argsort(values);
    let mut codes = Array1::<i32>::zeros(n);

    let mut group_rank = 0usize;
    for (rank, &idx) in order.iter().enumerate() {
        if rank > 0 && values[idx] != values[order[rank - 1]] {
            group_rank = rank;
        }
        let bin = (group_rank * bins) / n;
        codes[idx] = bin.min(bins - 1) as i32;
    }
    codes
}

/// Stable argsort for f64 values.
///
/// Returns indices that would sort the series in ascending order. Ties are
/// resolved by the original index order.
pub fn stable_argsort(values: ArrayView1<'_, f64>) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&i, &j| values[i].total_cmp(&values[j]));
    idx
}
