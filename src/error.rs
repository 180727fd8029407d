// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors raised by dataset construction, estimation, selection and decomposition.
///
/// Every variant names the offending variable(s) or parameter so the caller can
/// correct its input. None of them is transient.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CausalError {
    #[error("shape mismatch: `{left}` has {left_len} samples but `{right}` has {right_len}")]
    ShapeMismatch {
        left: String,
        left_len: usize,
        right: String,
        right_len: usize,
    },

    #[error("insufficient data: {samples} samples, at least 2 required")]
    InsufficientData { samples: usize },

    #[error("target `{name}` not found in dataset")]
    UnknownTarget { name: String },

    #[error("variable `{name}` not found in dataset")]
    UnknownVariable { name: String },

    #[error("dataset has no variables besides target `{target}`")]
    EmptyDataset { target: String },

    #[error("too many sources: {count} given, at most {max} supported")]
    TooManySources { count: usize, max: usize },

    #[error("no source variables given")]
    NoSources,

    #[error("variable `{name}` given more than once")]
    DuplicateVariable { name: String },

    #[error("non-finite value {value} in `{name}` at index {index}")]
    NonFiniteValue { name: String, index: usize, value: f64 },

    #[error("bin count must be at least 2, got {bins}")]
    InvalidBins { bins: usize },
}

pub type Result<T> = std::result::Result<T, CausalError>;
