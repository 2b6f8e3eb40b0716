// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::hash::Hash;

use ndarray::Array1;

use crate::error::Result;
use crate::estimators::approaches::discrete::ReducedTransferEntropy;
use crate::estimators::options::TeOptions;
use crate::estimators::traits::GlobalValue;

/// Compute the transfer entropy from `source` (x) to `destination` (y), in nats.
///
/// `src_hist_len` (k) and `dest_hist_len` (l) are the history lengths of the
/// source and destination. See [`TeOptions`] for correction and normalisation.
///
/// # Errors
///
/// Fails on mismatched lengths, on series with no sample beyond `max(k, l)`,
/// and when normalisation would divide a non-negligible value by zero.
pub fn transfer_entropy<T>(
    source: &Array1<T>,
    destination: &Array1<T>,
    src_hist_len: usize,
    dest_hist_len: usize,
    options: &TeOptions,
) -> Result<f64>
where
    T: Eq + Hash + Clone,
{
    ReducedTransferEntropy::new(source, destination, src_hist_len, dest_hist_len, *options)
        .map(|est| est.global_value())
}

pub struct TransferEntropy;

impl TransferEntropy {
    /// Create a finite-size corrected, normalised discrete transfer entropy estimator.
    pub fn new_discrete_reduced<T: Eq + Hash + Clone>(
        source: &Array1<T>,
        destination: &Array1<T>,
        src_hist_len: usize,
        dest_hist_len: usize,
    ) -> Result<ReducedTransferEntropy> {
        ReducedTransferEntropy::new(
            source,
            destination,
            src_hist_len,
            dest_hist_len,
            TeOptions::default(),
        )
    }

    /// Create a Maximum-Likelihood (plug-in) discrete transfer entropy estimator.
    ///
    /// No correction and no normalisation; the value is the log multinomial sum.
    pub fn new_discrete_mle<T: Eq + Hash + Clone>(
        source: &Array1<T>,
        destination: &Array1<T>,
        src_hist_len: usize,
        dest_hist_len: usize,
    ) -> Result<ReducedTransferEntropy> {
        ReducedTransferEntropy::new(
            source,
            destination,
            src_hist_len,
            dest_hist_len,
            TeOptions::plain(),
        )
    }

    /// Create a discrete transfer entropy estimator with explicit options.
    pub fn new_discrete_with_options<T: Eq + Hash + Clone>(
        source: &Array1<T>,
        destination: &Array1<T>,
        src_hist_len: usize,
        dest_hist_len: usize,
        options: TeOptions,
    ) -> Result<ReducedTransferEntropy> {
        ReducedTransferEntropy::new(source, destination, src_hist_len, dest_hist_len, options)
    }
}
