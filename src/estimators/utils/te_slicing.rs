// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;
use std::hash::Hash;

use ndarray::{Array1, Array2};
use tracing::trace;

use crate::error::{Result, TeError};

/// Source and destination series re-coded onto a shared compact alphabet.
#[derive(Debug, Clone)]
pub struct EncodedPair {
    pub source: Array1<i32>,
    pub destination: Array1<i32>,
    /// Number of distinct symbols across both series.
    pub alphabet_size: usize,
}

/// Map every symbol of `source` and `destination` to a compact i32 code.
///
/// Codes are handed out in first-occurrence order, scanning the source first and
/// the destination second, so the same input always yields the same codes.
pub fn encode_alphabet<T>(source: &Array1<T>, destination: &Array1<T>) -> EncodedPair
where
    T: Eq + Hash + Clone,
{
    let mut codes: HashMap<T, i32> = HashMap::new();
    let mut encode = |v: &T| {
        let next = codes.len() as i32;
        *codes.entry(v.clone()).or_insert(next)
    };
    let source = source.map(&mut encode);
    let destination = destination.map(&mut encode);
    EncodedPair {
        source,
        destination,
        alphabet_size: codes.len(),
    }
}

/// Number of leading samples consumed by the embedding.
#[inline]
pub fn max_lag(src_hist_len: usize, dest_hist_len: usize) -> usize {
    src_hist_len.max(dest_hist_len)
}

/// Build the joint delay embedding for TE(source -> destination).
///
/// Row `i` corresponds to time `t = max(k, l) + i` and holds
/// `(y[t], y[t-1], ..., y[t-l], x[t-1], ..., x[t-k])`, i.e. destination future,
/// destination history (most recent first) and source history (most recent first).
///
/// Returns an array of shape `(N - max(k, l), 1 + l + k)`.
pub fn te_embedding<T: Clone + Default>(
    source: &Array1<T>,
    destination: &Array1<T>,
    src_hist_len: usize,
    dest_hist_len: usize,
) -> Result<Array2<T>> {
    let n = destination.len();
    if source.len() != n {
        return Err(TeError::LengthMismatch {
            source_len: source.len(),
            destination_len: n,
        });
    }
    let max_delay = max_lag(src_hist_len, dest_hist_len);
    if max_delay >= n {
        return Err(TeError::InsufficientLength {
            len: n,
            required: max_delay,
        });
    }

    let n_samples = n - max_delay;
    let width = 1 + dest_hist_len + src_hist_len;
    let mut embedding = Array2::default((n_samples, width));

    for (idx, base_idx) in (max_delay..n).enumerate() {
        embedding[(idx, 0)] = destination[base_idx].clone();

        for j in 1..=dest_hist_len {
            embedding[(idx, j)] = destination[base_idx - j].clone();
        }

        for j in 1..=src_hist_len {
            embedding[(idx, dest_hist_len + j)] = source[base_idx - j].clone();
        }
    }

    trace!(n_samples, width, "built delay embedding");
    Ok(embedding)
}

/// Split an embedding back into `(dest_future, dest_history, src_history)` blocks.
///
/// Useful for inspecting which columns belong to which variable.
pub fn te_slices<T: Clone>(
    embedding: &Array2<T>,
    src_hist_len: usize,
    dest_hist_len: usize,
) -> (Array2<T>, Array2<T>, Array2<T>) {
    use ndarray::s;
    debug_assert_eq!(embedding.ncols(), 1 + dest_hist_len + src_hist_len);
    let dest_future = embedding.slice(s![.., 0..1]).to_owned();
    let dest_history = embedding.slice(s![.., 1..1 + dest_hist_len]).to_owned();
    let src_history = embedding.slice(s![.., 1 + dest_hist_len..]).to_owned();
    (dest_future, dest_history, src_history)
}
