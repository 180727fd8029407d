use ndarray::Array1;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};

/// Shared dataset for histogram-based estimators over integer codes.
pub struct DiscreteDataset {
    /// Original integer data (1D)
    pub data: Array1<i32>,
    /// Counts per unique symbol, ordered by symbol
    pub counts: BTreeMap<i32, usize>,
    /// Total number of observations
    pub n: usize,
    /// Number of unique symbols
    pub k: usize,
}

impl DiscreteDataset {
    /// Build a DiscreteDataset from raw 1D integer data
    pub fn from_data(data: Array1<i32>) -> Self {
        let n = data.len();
        let counts = count_frequencies(&data);
        let k = counts.len();
        Self { data, counts, n, k }
    }

    /// Map each sample to its empirical probability
    pub fn map_probs(&self) -> Array1<f64> {
        let n_f = self.n as f64;
        self.data.mapv(|v| self.counts[&v] as f64 / n_f)
    }

    /// Maximum-likelihood entropy in nats.
    pub fn entropy(&self) -> f64 {
        entropy_from_counts(self.counts.values().copied(), self.n)
    }
}

/// Maximum-likelihood Shannon entropy (nats) of a histogram.
///
/// Counts are summed in ascending order so the result only depends on the
/// multiset of counts, never on symbol labels or map iteration order.
pub fn entropy_from_counts<I: IntoIterator<Item = usize>>(counts: I, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let mut sorted: Vec<usize> = counts.into_iter().filter(|&c| c > 0).collect();
    sorted.sort_unstable();
    let n_f = n as f64;
    let mut h = 0.0_f64;
    for cnt in sorted {
        let p = cnt as f64 / n_f;
        h -= p * p.ln();
    }
    h
}

/// Count the occurrences of each value in an array.
pub fn count_frequencies(data: &Array1<i32>) -> BTreeMap<i32, usize> {
    match data.as_slice() {
        Some(slice) => count_frequencies_slice(slice),
        None => count_frequencies_slice(&data.to_vec()),
    }
}

/// Count frequencies from a raw slice of i32 values with a dense mode for small ranges.
pub fn count_frequencies_slice(data: &[i32]) -> BTreeMap<i32, usize> {
    if data.is_empty() {
        return BTreeMap::new();
    }

    let mut min_v = i32::MAX;
    let mut max_v = i32::MIN;
    for &v in data.iter() {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }

    // Dense mode if values are non-negative and the range is small.
    const MAX_DENSE_RANGE: i32 = 4096;
    if min_v >= 0 && max_v - min_v <= MAX_DENSE_RANGE {
        let len = (max_v - min_v) as usize + 1;
        let mut dense = vec![0usize; len];
        for &v in data.iter() {
            dense[(v - min_v) as usize] += 1;
        }
        return dense
            .into_iter()
            .enumerate()
            .filter(|&(_, cnt)| cnt != 0)
            .map(|(i, cnt)| (min_v + i as i32, cnt))
            .collect();
    }

    let mut frequency_map = BTreeMap::new();
    for &value in data.iter() {
        *frequency_map.entry(value).or_insert(0) += 1;
    }
    frequency_map
}

/// Reduce multiple code arrays (aligned by index) into a single compact joint code space.
///
/// Given k arrays of equal length containing i32 codes, this function produces a
/// single `Array1<i32>` where each position's tuple of codes is mapped to a unique compact ID.
/// IDs are assigned in first-occurrence order, so the result does not depend on the
/// order of the input arrays.
pub fn reduce_joint_space_compact<A: Borrow<Array1<i32>>>(code_arrays: &[A]) -> Array1<i32> {
    if code_arrays.is_empty() {
        return Array1::zeros(0);
    }
    let len = code_arrays[0].borrow().len();
    for arr in code_arrays.iter() {
        assert_eq!(
            arr.borrow().len(),
            len,
            "All code arrays must have the same length for joint reduction"
        );
    }
    let mut map: HashMap<Vec<i32>, i32> = HashMap::new();
    let mut out: Vec<i32> = Vec::with_capacity(len);
    let k = code_arrays.len();
    for i in 0..len {
        let key: Vec<i32> = code_arrays.iter().map(|arr| arr.borrow()[i]).collect();
        debug_assert_eq!(key.len(), k);
        let next_id = map.len() as i32;
        let id = *map.entry(key).or_insert(next_id);
        out.push(id);
    }
    Array1::from(out)
}
