// Copyright 2024 Wallet Core Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

//! BLS signature implementation using the augmented scheme ("AugSchemeMPL").
//!
//! It uses the BLS12_381 curve with G1 for public keys and G2 for signatures.
//! Each message is prefixed with the signer's public key before it is hashed
//! onto G2, which prevents rogue public-key attacks without a proof of
//! possession.
//!
//! The scheme is written against the [`PairingCurve`] capability trait. The
//! [`Bls12381`] backend is built on the `bls12_381` crate. String-based hosts
//! use the functions in [`hex_api`].

mod aggregation;
pub mod curve;
mod error;
pub mod hex_api;
pub mod keygen;
mod keys;
mod scheme;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use aggregation::{aggregate_public_keys, aggregate_signatures};
pub use curve::{Bls12381, PairingCurve};
pub use error::{BLSError, CurveError, ErrorKind, Result};
pub use keygen::{KEYGEN_SALT_PRE_V4, generate_key, generate_key_with_salt};
pub use keys::{
    BLS_PRIVATE_KEY_LENGTH, BLS_PUBLIC_KEY_LENGTH, BLS_SIGNATURE_LENGTH, HashPoint, PrivateKey,
    PublicKey, Signature,
};
pub use scheme::{AUG_SCHEME_DST, AugSchemeMPL};
