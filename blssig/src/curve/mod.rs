// Copyright 2024 Wallet Core Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

//! Narrow arithmetic interface the signature scheme is written against.
//!
//! Everything the scheme needs from a pairing-friendly curve goes through
//! [`PairingCurve`]: scalar decoding, scalar multiplication and addition on
//! both groups, hashing onto G2, the pairing check and point encodings.
//! Public keys live in G1 and signatures in G2 (minimal-pubkey-size variant).

mod bls12381;

pub use bls12381::Bls12381;

use std::fmt::Debug;

use zeroize::Zeroize;

use crate::error::CurveError;

pub trait PairingCurve {
    /// Element of the scalar field.
    type Scalar: Copy + Zeroize;
    /// Element of the public key group.
    type G1: Copy + PartialEq + Debug;
    /// Element of the signature group.
    type G2: Copy + PartialEq + Debug;

    /// Length of a big-endian scalar encoding.
    const SCALAR_LENGTH: usize;
    /// Length of a compressed G1 encoding.
    const G1_LENGTH: usize;
    /// Length of a compressed G2 encoding.
    const G2_LENGTH: usize;

    /// Decodes a canonical big-endian scalar. Returns `None` when the value is
    /// not strictly below the group order or has the wrong length.
    fn scalar_from_be_bytes(bytes: &[u8]) -> Option<Self::Scalar>;

    /// Reduces an arbitrarily long big-endian integer modulo the group order.
    fn scalar_reduce_be(bytes: &[u8]) -> Result<Self::Scalar, CurveError>;

    fn scalar_to_be_bytes(scalar: &Self::Scalar) -> Vec<u8>;

    fn scalar_is_zero(scalar: &Self::Scalar) -> bool;

    /// Multiplies the G1 generator by `scalar`.
    fn scalar_multiply_g1(scalar: &Self::Scalar) -> Self::G1;

    fn scalar_multiply_g2(point: &Self::G2, scalar: &Self::Scalar) -> Self::G2;

    fn identity_g1() -> Self::G1;

    fn identity_g2() -> Self::G2;

    fn is_identity_g1(point: &Self::G1) -> bool;

    fn add_g1(a: &Self::G1, b: &Self::G1) -> Self::G1;

    fn add_g2(a: &Self::G2, b: &Self::G2) -> Self::G2;

    /// Hashes `message` onto the prime-order subgroup of G2 under the domain
    /// separation tag `dst`.
    fn hash_to_g2(message: &[u8], dst: &[u8]) -> Result<Self::G2, CurveError>;

    /// Checks `e(g1, signature) == prod e(pairs[i].0, pairs[i].1)`.
    fn pairing_check(signature: &Self::G2, pairs: &[(Self::G1, Self::G2)])
    -> Result<bool, CurveError>;

    fn encode_g1(point: &Self::G1) -> Vec<u8>;

    /// Decodes a compressed G1 point, checking curve and subgroup membership.
    fn decode_g1(bytes: &[u8]) -> Option<Self::G1>;

    fn encode_g2(point: &Self::G2) -> Vec<u8>;

    /// Decodes a compressed G2 point, checking curve and subgroup membership.
    fn decode_g2(bytes: &[u8]) -> Option<Self::G2>;
}
