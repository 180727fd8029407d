use std::collections::HashMap;

use approx::assert_abs_diff_eq;
use causalmeasure::{
    CausalError, FeatureRanking, SurdResult, run_mrmr, run_mrmr_from_dict, run_mrmr_from_rows,
    run_surd, version,
};

use crate::test_helpers::{balanced_pair, dataset, uniform_column};

#[test]
fn from_dict_matches_dataset_entry_point() {
    let a = uniform_column(300, 1);
    let b = uniform_column(300, 2);
    let t: Vec<f64> = a.iter().zip(b.iter()).map(|(x, y)| 2.0 * x + 0.1 * y).collect();

    let mut columns: HashMap<String, Vec<f64>> = HashMap::new();
    columns.insert("a".into(), a.clone());
    columns.insert("b".into(), b.clone());
    columns.insert("t".into(), t.clone());

    let from_dict = run_mrmr_from_dict(columns, "t", 2).unwrap();
    let from_dataset = run_mrmr(&dataset(vec![("a", a), ("b", b), ("t", t)]), "t", 2).unwrap();
    assert_eq!(from_dict, from_dataset);
    assert_eq!(from_dict[0].name, "a");
}

#[test]
fn from_dict_reports_shape_mismatch() {
    let err = run_mrmr_from_dict([("a", vec![1.0, 2.0, 3.0]), ("t", vec![1.0, 2.0])], "t", 1)
        .unwrap_err();
    assert!(matches!(err, CausalError::ShapeMismatch { left_len: 3, right_len: 2, .. }));
}

#[test]
fn from_rows_matches_columns() {
    let (a, b) = balanced_pair(64, 4);
    let rows: Vec<Vec<f64>> = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| vec![*x, *y, *x])
        .collect();
    let ranking = run_mrmr_from_rows(&rows, &["a", "b", "t"], "t", 2).unwrap();
    let expected = run_mrmr(&dataset(vec![("a", a.clone()), ("b", b), ("t", a)]), "t", 2).unwrap();
    assert_eq!(ranking, expected);
    assert_eq!(ranking[0].name, "a");
}

#[test]
fn version_matches_package() {
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    assert!(!version().is_empty());
}

#[test]
fn feature_ranking_display_and_serde() {
    let ranking = FeatureRanking {
        name: "x1".into(),
        score: 0.123456,
    };
    assert_eq!(ranking.to_string(), "FeatureRanking(name='x1', score=0.1235)");

    let json = serde_json::to_string(&ranking).unwrap();
    assert_eq!(json, r#"{"name":"x1","score":0.123456}"#);
    let back: FeatureRanking = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ranking);
}

#[test]
fn surd_result_round_trips_through_json() {
    let (a, b) = balanced_pair(400, 4);
    let ds = dataset(vec![("A", a.clone()), ("B", b), ("T", a)]);
    let result = run_surd(&ds, &["A", "B"], "T").unwrap();

    let value: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["contributions"].as_array().unwrap().len(), 3);
    assert_eq!(value["contributions"][0]["variables"][0], "A");

    let back: SurdResult = serde_json::from_value(value).unwrap();
    assert_eq!(back.contributions().len(), result.contributions().len());
    assert_abs_diff_eq!(back.total(), result.total(), epsilon = 1e-12);
    assert_abs_diff_eq!(back.unique("A"), 4f64.ln(), epsilon = 1e-9);
    assert!(back.get(&["missing"]).is_none());
    assert_eq!(back.unique("missing"), 0.0);
}
