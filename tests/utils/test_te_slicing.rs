// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, array};
use reduced_te::TeError;
use reduced_te::estimators::utils::te_slicing::{encode_alphabet, te_embedding, te_slices};
use rstest::rstest;

#[test]
fn embedding_rows_are_future_then_histories() {
    let x = array![10, 11, 12, 13, 14];
    let y = array![20, 21, 22, 23, 24];
    let embedding = te_embedding(&x, &y, 2, 1).unwrap();
    assert_eq!(
        embedding,
        array![
            [22, 21, 11, 10],
            [23, 22, 12, 11],
            [24, 23, 13, 12],
        ]
    );
}

#[test]
fn histories_are_most_recent_first() {
    let x = array![0, 1, 2, 3, 4, 5];
    let y = array![10, 11, 12, 13, 14, 15];
    let embedding = te_embedding(&x, &y, 1, 3).unwrap();
    assert_eq!(embedding.row(0).to_vec(), vec![13, 12, 11, 10, 2]);
    assert_eq!(embedding.row(2).to_vec(), vec![15, 14, 13, 12, 4]);
}

#[rstest]
#[case(10, 0, 0)]
#[case(10, 1, 1)]
#[case(10, 3, 1)]
#[case(10, 1, 4)]
#[case(5, 4, 4)]
fn embedding_shape(#[case] n: usize, #[case] k: usize, #[case] l: usize) {
    let x: Array1<i32> = Array1::from_iter(0..n as i32);
    let y: Array1<i32> = Array1::from_iter(100..100 + n as i32);
    let embedding = te_embedding(&x, &y, k, l).unwrap();
    assert_eq!(embedding.nrows(), n - k.max(l));
    assert_eq!(embedding.ncols(), 1 + k + l);
    // First column is the destination from t = max(k, l) onward, in order.
    for (i, v) in embedding.column(0).iter().enumerate() {
        assert_eq!(*v, y[k.max(l) + i]);
    }
}

#[test]
fn zero_lags_embed_destination_only() {
    let x = array![1, 2, 3];
    let y = array![4, 5, 6];
    let embedding = te_embedding(&x, &y, 0, 0).unwrap();
    assert_eq!(embedding, array![[4], [5], [6]]);
}

#[test]
fn embedding_rejects_length_mismatch() {
    let err = te_embedding(&array![1, 2, 3], &array![1, 2], 1, 1).unwrap_err();
    assert_eq!(
        err,
        TeError::LengthMismatch {
            source_len: 3,
            destination_len: 2
        }
    );
}

#[test]
fn embedding_rejects_short_series() {
    let err = te_embedding(&array![1, 2, 3], &array![1, 2, 3], 3, 1).unwrap_err();
    assert_eq!(
        err,
        TeError::InsufficientLength {
            len: 3,
            required: 3
        }
    );
}

#[test]
fn slices_split_embedding_columns() {
    let x = array![10, 11, 12, 13, 14];
    let y = array![20, 21, 22, 23, 24];
    let embedding = te_embedding(&x, &y, 2, 1).unwrap();
    let (future, dest_hist, src_hist) = te_slices(&embedding, 2, 1);
    assert_eq!(future, array![[22], [23], [24]]);
    assert_eq!(dest_hist, array![[21], [22], [23]]);
    assert_eq!(src_hist, array![[11, 10], [12, 11], [13, 12]]);
}

#[test]
fn alphabet_codes_follow_first_occurrence() {
    let x = array!["b", "a", "b", "c"];
    let y = array!["d", "a", "c", "b"];
    let encoded = encode_alphabet(&x, &y);
    assert_eq!(encoded.source, array![0, 1, 0, 2]);
    assert_eq!(encoded.destination, array![3, 1, 2, 0]);
    assert_eq!(encoded.alphabet_size, 4);
}
