// Copyright 2024 Wallet Core Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use bls12_381::hash_to_curve::{ExpandMsgXmd, HashToCurve};
use bls12_381::{
    G1Affine, G1Projective, G2Affine, G2Prepared, G2Projective, Gt, Scalar, multi_miller_loop,
};
use sha2::Sha256;
use zeroize::Zeroize;

use super::PairingCurve;
use crate::error::CurveError;

/// BLS12-381 in the ZCash compressed serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bls12381;

/// Widest input accepted by `Scalar::from_bytes_wide`.
const WIDE_SCALAR_LENGTH: usize = 64;

impl PairingCurve for Bls12381 {
    type Scalar = Scalar;
    type G1 = G1Affine;
    type G2 = G2Affine;

    const SCALAR_LENGTH: usize = 32;
    const G1_LENGTH: usize = 48;
    const G2_LENGTH: usize = 96;

    fn scalar_from_be_bytes(bytes: &[u8]) -> Option<Scalar> {
        let mut le: [u8; 32] = bytes.try_into().ok()?;
        le.reverse();
        let scalar = Option::from(Scalar::from_bytes(&le));
        le.zeroize();
        scalar
    }

    fn scalar_reduce_be(bytes: &[u8]) -> Result<Scalar, CurveError> {
        if bytes.len() > WIDE_SCALAR_LENGTH {
            return Err(CurveError(
                format!(
                    "cannot reduce {} bytes, at most {WIDE_SCALAR_LENGTH} are supported",
                    bytes.len()
                )
                .into(),
            ));
        }

        let mut wide = [0u8; WIDE_SCALAR_LENGTH];
        for (dst, src) in wide.iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }
        let scalar = Scalar::from_bytes_wide(&wide);
        wide.zeroize();
        Ok(scalar)
    }

    fn scalar_to_be_bytes(scalar: &Scalar) -> Vec<u8> {
        let mut bytes = scalar.to_bytes();
        bytes.reverse();
        let encoded = bytes.to_vec();
        bytes.zeroize();
        encoded
    }

    fn scalar_is_zero(scalar: &Scalar) -> bool {
        *scalar == Scalar::from(0u64)
    }

    fn scalar_multiply_g1(scalar: &Scalar) -> G1Affine {
        G1Affine::from(G1Projective::generator() * scalar)
    }

    fn scalar_multiply_g2(point: &G2Affine, scalar: &Scalar) -> G2Affine {
        G2Affine::from(G2Projective::from(point) * scalar)
    }

    fn identity_g1() -> G1Affine {
        G1Affine::identity()
    }

    fn identity_g2() -> G2Affine {
        G2Affine::identity()
    }

    fn is_identity_g1(point: &G1Affine) -> bool {
        point.is_identity().into()
    }

    fn add_g1(a: &G1Affine, b: &G1Affine) -> G1Affine {
        G1Affine::from(G1Projective::from(a) + b)
    }

    fn add_g2(a: &G2Affine, b: &G2Affine) -> G2Affine {
        G2Affine::from(G2Projective::from(a) + b)
    }

    fn hash_to_g2(message: &[u8], dst: &[u8]) -> Result<G2Affine, CurveError> {
        let point =
            <G2Projective as HashToCurve<ExpandMsgXmd<Sha256>>>::hash_to_curve(message, dst);
        Ok(G2Affine::from(point))
    }

    fn pairing_check(
        signature: &G2Affine,
        pairs: &[(G1Affine, G2Affine)],
    ) -> Result<bool, CurveError> {
        // e(g1, S) == prod e(P_i, Q_i)  <=>  e(-g1, S) * prod e(P_i, Q_i) == 1
        let neg_generator = -G1Affine::generator();
        let signature = G2Prepared::from(*signature);
        let prepared: Vec<(G1Affine, G2Prepared)> = pairs
            .iter()
            .map(|(p, q)| (*p, G2Prepared::from(*q)))
            .collect();

        let mut terms: Vec<(&G1Affine, &G2Prepared)> = Vec::with_capacity(prepared.len() + 1);
        terms.push((&neg_generator, &signature));
        terms.extend(prepared.iter().map(|(p, q)| (p, q)));

        let result = multi_miller_loop(&terms).final_exponentiation();
        Ok(result == Gt::identity())
    }

    fn encode_g1(point: &G1Affine) -> Vec<u8> {
        point.to_compressed().to_vec()
    }

    fn decode_g1(bytes: &[u8]) -> Option<G1Affine> {
        let bytes: &[u8; 48] = bytes.try_into().ok()?;
        Option::from(G1Affine::from_compressed(bytes))
    }

    fn encode_g2(point: &G2Affine) -> Vec<u8> {
        point.to_compressed().to_vec()
    }

    fn decode_g2(bytes: &[u8]) -> Option<G2Affine> {
        let bytes: &[u8; 96] = bytes.try_into().ok()?;
        Option::from(G2Affine::from_compressed(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RFC 9380 J.10.1, msg = "abc", compressed
    const QUUX_DST: &[u8] = b"QUUX-V01-CS02-with-BLS12381G2_XMD:SHA-256_SSWU_RO_";
    const QUUX_ABC: &str = "939cddbccdc5e91b9623efd38c49f81a6f83f175e80b06fc374de9eb4b41dfe4ca3a230ed250fbe3a2acf73a41177fd802c2d18e033b960562aae3cab37a27ce00d80ccd5ba4b7fe0e7a210245129dbec7780ccc7954725f4168aff2787776e6";

    #[test]
    fn test_hash_to_g2_rfc_vector() {
        let point = Bls12381::hash_to_g2(b"abc", QUUX_DST).unwrap();
        assert_eq!(hex::encode(Bls12381::encode_g2(&point)), QUUX_ABC);
    }

    #[test]
    fn test_scalar_encoding_is_big_endian() {
        let scalar = Scalar::from(0x0102u64);
        let bytes = Bls12381::scalar_to_be_bytes(&scalar);
        assert_eq!(bytes.len(), Bls12381::SCALAR_LENGTH);
        assert_eq!(&bytes[30..], &[0x01, 0x02]);
        assert_eq!(Bls12381::scalar_from_be_bytes(&bytes), Some(scalar));
    }

    #[test]
    fn test_scalar_zeroize_clears_value() {
        let mut scalar = Scalar::from(0xdead_beefu64);
        assert!(!Bls12381::scalar_is_zero(&scalar));
        scalar.zeroize();
        assert!(Bls12381::scalar_is_zero(&scalar));
    }
}
