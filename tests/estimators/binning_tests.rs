use causalmeasure::Binning;
use causalmeasure::estimators::approaches::binning::{
    discretize, equal_width_codes, quantile_codes, stable_argsort,
};
use ndarray::{Array1, array};
use rstest::rstest;

#[test]
fn equal_width_splits_range_evenly() {
    let values: Array1<f64> = (0..10).map(f64::from).collect();
    let codes = equal_width_codes(values.view(), 5);
    assert_eq!(codes, array![0, 0, 1, 1, 2, 2, 3, 3, 4, 4]);
}

#[test]
fn equal_width_puts_maximum_in_last_bin() {
    let values = array![-2.0, 0.0, 2.0];
    assert_eq!(equal_width_codes(values.view(), 4), array![0, 2, 3]);
}

#[test]
fn equal_width_handles_span_beyond_f64_max() {
    // max - min overflows to infinity here
    let values = array![-1e308, -4e307, 4e307, 1e308];
    assert_eq!(equal_width_codes(values.view(), 4), array![0, 1, 2, 3]);
    assert_eq!(equal_width_codes(values.view(), 2), array![0, 0, 1, 1]);
}

#[test]
fn quantile_assigns_by_rank_and_keeps_ties_together() {
    let values = array![5.0, 1.0, 3.0, 3.0, 2.0, 4.0];
    let codes = quantile_codes(values.view(), 3);
    assert_eq!(codes, array![2, 0, 1, 1, 0, 2]);
}

#[test]
fn quantile_codes_are_invariant_to_monotone_transforms() {
    let values = array![0.3, -1.2, 4.5, 2.2, 0.0, 9.1, -3.3, 1.1];
    let transformed = values.mapv(f64::exp);
    assert_eq!(
        quantile_codes(values.view(), 4),
        quantile_codes(transformed.view(), 4)
    );
}

#[rstest]
#[case(Binning::EqualWidth)]
#[case(Binning::Quantile)]
fn constant_series_maps_to_single_code(#[case] binning: Binning) {
    let values = Array1::from_elem(12, 3.25);
    let codes = discretize(values.view(), 6, binning);
    assert!(codes.iter().all(|&c| c == 0));
}

#[rstest]
#[case(Binning::EqualWidth)]
#[case(Binning::Quantile)]
fn codes_stay_within_bin_range(#[case] binning: Binning) {
    let values: Array1<f64> = (0..97).map(|i| ((i * 37) % 101) as f64 * 0.7 - 20.0).collect();
    let codes = discretize(values.view(), 7, binning);
    assert!(codes.iter().all(|&c| (0..7).contains(&c)));
    // every bin is used for a spread-out series
    for bin in 0..7 {
        assert!(codes.iter().any(|&c| c == bin), "bin {bin} unused");
    }
}

#[test]
fn stable_argsort_resolves_ties_by_index() {
    let values = array![2.0, 1.0, 2.0, 0.5, 1.0];
    assert_eq!(stable_argsort(values.view()), vec![3, 1, 4, 0, 2]);
}
