// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for transfer entropy estimation.

use thiserror::Error;

/// Result type for estimator construction.
pub type Result<T> = std::result::Result<T, TeError>;

/// Errors that can occur while estimating transfer entropy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TeError {
    /// Source and destination series differ in length.
    #[error("source and destination lengths differ ({source_len} != {destination_len})")]
    LengthMismatch {
        source_len: usize,
        destination_len: usize,
    },

    /// Series too short to produce a single embedded state.
    #[error("series of length {len} leaves no embedded states; need more than {required} samples")]
    InsufficientLength { len: usize, required: usize },

    /// Normalisation denominator is zero while the value itself is not negligible.
    #[error("normalisation undefined: value {value} with upper bound {upper_bound}")]
    DegenerateNormalization { value: f64, upper_bound: f64 },

    /// Precounted tables do not have the key widths implied by the lags.
    #[error("table {table} has width {found}, expected {expected} for the given lags")]
    InconsistentTables {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    /// A log-factorial sum left the finite range.
    #[error("non-finite intermediate result in {stage}")]
    NonFinite { stage: &'static str },
}
