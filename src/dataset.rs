// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;

use ndarray::{Array1, ArrayView1};

use crate::error::{CausalError, Result};

/// Immutable collection of named, equally long sample sequences.
///
/// Variables are kept in lexicographic name order so every computation over a
/// dataset visits them in the same order. Values must be finite; the dataset
/// never imputes or drops samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    variables: BTreeMap<String, Array1<f64>>,
    n_samples: usize,
}

impl Dataset {
    /// Build a dataset from `(name, values)` pairs.
    pub fn new<I, S, V>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<Vec<f64>>,
    {
        let mut variables = BTreeMap::new();
        // (name, len) of the first column, for ShapeMismatch reports
        let mut reference: Option<(String, usize)> = None;

        for (name, values) in columns {
            let name = name.into();
            let values: Vec<f64> = values.into();

            if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(CausalError::NonFiniteValue { name, index, value });
            }
            match &reference {
                Some((ref_name, ref_len)) if *ref_len != values.len() => {
                    return Err(CausalError::ShapeMismatch {
                        left: ref_name.clone(),
                        left_len: *ref_len,
                        right: name,
                        right_len: values.len(),
                    });
                }
                Some(_) => {}
                None => reference = Some((name.clone(), values.len())),
            }
            if variables.contains_key(&name) {
                return Err(CausalError::DuplicateVariable { name });
            }
            variables.insert(name, Array1::from(values));
        }

        let n_samples = reference.map(|(_, len)| len).unwrap_or(0);
        Ok(Self { variables, n_samples })
    }

    /// Build a dataset from row-major data and matching column names.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<f64>], column_names: &[S]) -> Result<Self> {
        let n_cols = column_names.len();
        let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(rows.len()); n_cols];
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(CausalError::ShapeMismatch {
                    left: "column_names".to_string(),
                    left_len: n_cols,
                    right: format!("row {row_idx}"),
                    right_len: row.len(),
                });
            }
            for (col, &value) in columns.iter_mut().zip(row.iter()) {
                col.push(value);
            }
        }
        Self::new(
            column_names
                .iter()
                .map(|name| name.as_ref().to_string())
                .zip(columns),
        )
    }

    /// Number of samples per variable (0 for a dataset without variables).
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn n_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Variable names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.variables.get(name).map(|v| v.view())
    }

    /// Like [`Dataset::get`], but reports a missing name as `UnknownVariable`.
    pub fn variable(&self, name: &str) -> Result<ArrayView1<'_, f64>> {
        self.get(name).ok_or_else(|| CausalError::UnknownVariable {
            name: name.to_string(),
        })
    }

    /// All names except `target`, in lexicographic order.
    pub fn non_target_names(&self, target: &str) -> Vec<String> {
        self.variables
            .keys()
            .filter(|name| name.as_str() != target)
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ArrayView1<'_, f64>)> {
        self.variables.iter().map(|(name, v)| (name.as_str(), v.view()))
    }
}
