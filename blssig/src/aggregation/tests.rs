// Copyright 2024 Wallet Core Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::iter;

use proptest::prelude::*;

use super::*;
use crate::error::ErrorKind;
use crate::test_utils::BLSSigner;
use crate::{AugSchemeMPL, Bls12381};

fn signatures(n: u8) -> Vec<Signature<Bls12381>> {
    (0..n)
        .map(|i| {
            let signer = BLSSigner::from_seed(i + 1).unwrap();
            signer.sign(format!("message {i}").as_bytes()).unwrap()
        })
        .collect()
}

#[test]
fn test_aggregate_empty_fails() {
    let err = aggregate_signatures::<Bls12381, _>(iter::empty()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = aggregate_public_keys::<Bls12381, _>(iter::empty()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_aggregate_single_is_identity() {
    let sigs = signatures(1);
    let aggregated = AugSchemeMPL::aggregate(&sigs).unwrap();
    assert_eq!(aggregated, sigs[0]);
}

/// Decoding stops at the first malformed element and later items are never
/// pulled from the iterator.
#[test]
fn test_aggregate_fails_fast() {
    let sigs = signatures(1);
    let items = iter::once(Ok(sigs[0]))
        .chain(iter::once(Signature::from_hex("not hex")))
        .chain(iter::from_fn(|| -> Option<Result<Signature<Bls12381>>> {
            panic!("aggregation continued past a malformed signature")
        }));

    let err = aggregate_signatures(items).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidHex);
}

#[test]
fn test_aggregate_public_keys_matches_scalar_sum() {
    // pk(a) + pk(b) == pk(a + b) for small scalars
    let key = |v: u8| {
        let mut bytes = [0u8; 32];
        bytes[31] = v;
        crate::PrivateKey::<Bls12381>::from_bytes(&bytes).unwrap()
    };
    let a = AugSchemeMPL::derive_public_key(&key(3)).unwrap();
    let b = AugSchemeMPL::derive_public_key(&key(4)).unwrap();
    let sum = AugSchemeMPL::derive_public_key(&key(7)).unwrap();

    assert_eq!(AugSchemeMPL::aggregate_public_keys(&[a, b]).unwrap(), sum);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn test_aggregate_order_independent(order in Just((0..4usize).collect::<Vec<_>>()).prop_shuffle()) {
        let sigs = signatures(4);
        let shuffled: Vec<_> = order.iter().map(|&i| sigs[i]).collect();

        let expected = AugSchemeMPL::aggregate(&sigs).unwrap();
        prop_assert_eq!(AugSchemeMPL::aggregate(&shuffled).unwrap(), expected);
    }
}
