use causalmeasure::estimators::GlobalValue;
use causalmeasure::estimators::entropy::Entropy;
use causalmeasure::{Dataset, EstimatorConfig, run_surd};
use proptest::prelude::*;

use crate::test_helpers::{categorical_column, dataset};

/// Sources named `s0..sk` plus a target `t` built from them with some noise.
fn random_system() -> impl Strategy<Value = (Dataset, usize)> {
    (1usize..5, 20usize..300, any::<u64>()).prop_map(|(k, n, seed)| {
        let mut columns: Vec<(String, Vec<f64>)> = (0..k)
            .map(|i| (format!("s{i}"), categorical_column(n, 3, seed.wrapping_add(i as u64))))
            .collect();
        let noise = categorical_column(n, 2, seed.wrapping_add(1000));
        let target = (0..n)
            .map(|row| columns.iter().map(|(_, c)| c[row]).sum::<f64>() + noise[row])
            .collect();
        columns.push(("t".to_string(), target));
        (Dataset::new(columns).unwrap(), k)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn contributions_are_non_negative_and_sum_to_total((ds, k) in random_system()) {
        let sources: Vec<String> = (0..k).map(|i| format!("s{i}")).collect();
        let result = run_surd(&ds, &sources, "t").unwrap();

        prop_assert_eq!(result.contributions().len(), (1 << k) - 1);
        for c in result.contributions() {
            prop_assert!(c.unique >= 0.0 && c.redundant >= 0.0 && c.synergistic >= 0.0);
        }
        let tolerance = 1e-6 * result.total().max(1e-3);
        prop_assert!((result.contribution_sum() - result.total()).abs() <= tolerance);
        prop_assert!(result.info_leak() >= 0.0);

        let h_target = Entropy::new_binned(ds.get("t").unwrap(), &EstimatorConfig::default())
            .unwrap()
            .global_value();
        prop_assert!((result.total() + result.info_leak() - h_target).abs() < 1e-9);
    }

    #[test]
    fn source_order_does_not_matter((ds, k) in random_system()) {
        let forward: Vec<String> = (0..k).map(|i| format!("s{i}")).collect();
        let backward: Vec<String> = forward.iter().rev().cloned().collect();
        prop_assert_eq!(
            run_surd(&ds, &forward, "t").unwrap(),
            run_surd(&ds, &backward, "t").unwrap()
        );
    }
}

#[test]
fn repeated_runs_are_identical() {
    let ds = dataset(vec![
        ("a", categorical_column(500, 4, 1)),
        ("b", categorical_column(500, 4, 2)),
        ("c", categorical_column(500, 4, 3)),
        ("t", categorical_column(500, 4, 4)),
    ]);
    let first = run_surd(&ds, &["a", "b", "c"], "t").unwrap();
    for _ in 0..5 {
        assert_eq!(run_surd(&ds, &["c", "a", "b"], "t").unwrap(), first);
    }
}
