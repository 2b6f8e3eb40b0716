// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reference values for a fixed three-symbol pair, evaluated independently with
//! double-precision `lgamma`.

use approx::assert_abs_diff_eq;
use reduced_te::estimators::transfer_entropy::{TransferEntropy, transfer_entropy};
use reduced_te::estimators::{GlobalValue, TeOptions};
use rstest::rstest;

use crate::test_helpers::mixed_pair;

const EPS: f64 = 1e-9;

#[rstest]
#[case(1, 1, 9.508591395777202, -5.595568890015974)]
#[case(2, 1, 10.694215061434937, -8.000440948980616)]
#[case(1, 2, 7.6778635006782086, -4.199476480324922)]
#[case(2, 2, 9.0641578617981, -5.821336912757591)]
fn raw_and_reduced_correction(
    #[case] k: usize,
    #[case] l: usize,
    #[case] raw: f64,
    #[case] correction: f64,
) {
    let (x, y) = mixed_pair();
    let est = TransferEntropy::new_discrete_reduced(&x, &y, k, l).unwrap();
    assert_eq!(est.alphabet_size(), 3);
    assert_abs_diff_eq!(est.raw_value(), raw, epsilon = EPS);
    assert_abs_diff_eq!(est.correction(), correction, epsilon = EPS);
    assert_abs_diff_eq!(est.corrected_value(), raw + correction, epsilon = EPS);
}

#[rstest]
#[case(1, 1, 0.42972011603595084)]
#[case(2, 1, 0.473463588876335)]
#[case(1, 2, 0.7150287444518971)]
#[case(2, 2, 1.0)]
fn reduced_normalised(#[case] k: usize, #[case] l: usize, #[case] expected: f64) {
    let (x, y) = mixed_pair();
    let te = transfer_entropy(&x, &y, k, l, &TeOptions::default()).unwrap();
    assert_abs_diff_eq!(te, expected, epsilon = EPS);
}

#[rstest]
#[case(1, 1, 0.6467748318910994)]
#[case(2, 1, 0.7811728416297511)]
#[case(1, 2, 0.8470575664880482)]
#[case(2, 2, 1.0)]
fn uncorrected_normalised(#[case] k: usize, #[case] l: usize, #[case] expected: f64) {
    let (x, y) = mixed_pair();
    let options = TeOptions::plain().with_norm(true);
    let te = transfer_entropy(&x, &y, k, l, &options).unwrap();
    assert_abs_diff_eq!(te, expected, epsilon = EPS);
}

#[rstest]
#[case(1, 1, 3.508591395777202, 0.40321461150559623)]
#[case(2, 1, -13.305784938565063, -0.5544077057735443)]
#[case(1, 2, -10.322136499321791, -0.5734520277400995)]
#[case(2, 2, -62.9358421382019, -0.8741089185861375)]
fn constant_correction(
    #[case] k: usize,
    #[case] l: usize,
    #[case] unnormalised: f64,
    #[case] normalised: f64,
) {
    let (x, y) = mixed_pair();
    let options = TeOptions::plain().with_constant_correction(true);
    let te = transfer_entropy(&x, &y, k, l, &options).unwrap();
    assert_abs_diff_eq!(te, unnormalised, epsilon = EPS);

    let te_norm = transfer_entropy(&x, &y, k, l, &options.with_norm(true)).unwrap();
    assert_abs_diff_eq!(te_norm, normalised, epsilon = EPS);
}

#[rstest]
#[case(1, 1, 10.973163995026667, 0.3855450569911637)]
#[case(2, 1, 13.690592512429145, 0.5449551541588412)]
#[case(1, 2, 12.206072645530174, 0.7427830813562599)]
#[case(2, 2, 14.978661367769956, 1.0)]
fn stirling_variant(
    #[case] k: usize,
    #[case] l: usize,
    #[case] raw: f64,
    #[case] reduced_normalised: f64,
) {
    let (x, y) = mixed_pair();
    let plain = TeOptions::plain().with_stirling(true);
    let te = transfer_entropy(&x, &y, k, l, &plain).unwrap();
    assert_abs_diff_eq!(te, raw, epsilon = EPS);

    let est = TransferEntropy::new_discrete_with_options(
        &x,
        &y,
        k,
        l,
        TeOptions::default().with_stirling(true),
    )
    .unwrap();
    assert_abs_diff_eq!(est.global_value(), reduced_normalised, epsilon = EPS);
}

#[rstest]
#[case(1, 1)]
#[case(2, 1)]
#[case(1, 2)]
fn reduced_takes_precedence_over_constant(#[case] k: usize, #[case] l: usize) {
    let (x, y) = mixed_pair();
    let reduced = transfer_entropy(&x, &y, k, l, &TeOptions::default()).unwrap();
    let both = transfer_entropy(
        &x,
        &y,
        k,
        l,
        &TeOptions::default().with_constant_correction(true),
    )
    .unwrap();
    assert_eq!(reduced.to_bits(), both.to_bits());
}

#[test]
fn mle_factory_is_plain_estimate() {
    let (x, y) = mixed_pair();
    let est = TransferEntropy::new_discrete_mle(&x, &y, 1, 1).unwrap();
    assert_eq!(est.correction(), 0.0);
    assert_abs_diff_eq!(est.global_value(), 9.508591395777202, epsilon = EPS);
    assert_eq!(est.breakdown().upper_bound, None);
}
