use causalmeasure::{Binning, CausalError, EstimatorConfig};
use rstest::rstest;

#[test]
fn default_config() {
    let config = EstimatorConfig::default();
    assert_eq!(config.bins, 10);
    assert_eq!(config.binning, Binning::EqualWidth);
    assert_eq!(config.max_surd_sources, 10);
}

#[rstest]
#[case(10, 1000, 10)]
#[case(10, 100, 10)]
#[case(10, 99, 9)]
#[case(10, 50, 7)]
#[case(10, 3, 2)]
#[case(3, 4, 2)]
#[case(2, 2, 2)]
fn effective_bins_shrinks_for_small_samples(
    #[case] bins: usize,
    #[case] n_samples: usize,
    #[case] expected: usize,
) {
    let config = EstimatorConfig::default().with_bins(bins);
    assert_eq!(config.effective_bins(n_samples).unwrap(), expected);
}

#[rstest]
#[case(0)]
#[case(1)]
fn effective_bins_rejects_degenerate_bin_counts(#[case] bins: usize) {
    let config = EstimatorConfig::default().with_bins(bins);
    assert_eq!(
        config.effective_bins(500),
        Err(CausalError::InvalidBins { bins })
    );
}

#[test]
fn config_deserializes_with_defaults() {
    let config: EstimatorConfig = serde_json::from_str(r#"{"bins": 8}"#).unwrap();
    assert_eq!(config, EstimatorConfig::default().with_bins(8));

    let config: EstimatorConfig =
        serde_json::from_str(r#"{"binning": "quantile", "max_surd_sources": 4}"#).unwrap();
    assert_eq!(config.binning, Binning::Quantile);
    assert_eq!(config.max_surd_sources, 4);
    assert_eq!(config.bins, 10);
}

#[test]
fn config_round_trips_through_json() {
    let config = EstimatorConfig::default()
        .with_bins(6)
        .with_binning(Binning::Quantile)
        .with_max_surd_sources(3);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"quantile\""));
    let back: EstimatorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
