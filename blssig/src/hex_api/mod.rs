// Copyright 2024 Wallet Core Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

//! Hex-string entry points for hosts that exchange keys, hashes and
//! signatures as strings.
//!
//! Inputs may use either case and an optional `0x` prefix. Outputs are
//! lowercase without a prefix. Every input is decoded and validated before
//! any curve arithmetic runs.

use tracing::debug;

use crate::aggregation::aggregate_signatures;
use crate::curve::Bls12381;
use crate::error::Result;
use crate::keys::{HashPoint, PrivateKey, PublicKey, Signature, decode_hex};
use crate::scheme::AugSchemeMPL;


type Scheme = AugSchemeMPL<Bls12381>;

/// Derives the hex public key of a hex private key.
pub fn derive_public_key(private_key: &str) -> Result<String> {
    Scheme::public_key_from(private_key).map(|pk| pk.to_hex())
}

/// Derives the hex public key of a 32-byte big-endian private key.
pub fn derive_public_key_from_bytes(private_key: &[u8]) -> Result<String> {
    Scheme::public_key_from(private_key).map(|pk| pk.to_hex())
}

/// Maps `public_key || message` onto G2 and returns the compressed point.
pub fn hash_to_curve(public_key: &str, message: &str) -> Result<String> {
    let public_key = PublicKey::from_hex(public_key)?;
    let message = decode_hex(message)?;
    Scheme::hash_to_curve(&public_key, &message).map(|hash| hash.to_hex())
}

pub fn sign(private_key: &[u8], message: &str) -> Result<String> {
    let private_key = PrivateKey::from_bytes(private_key)?;
    let message = decode_hex(message)?;
    Scheme::sign(&private_key, &message).map(|sig| sig.to_hex())
}

/// Signs a precomputed hash point.
pub fn sign_hash(hash: &str, private_key: &[u8]) -> Result<String> {
    let hash = HashPoint::from_hex(hash)?;
    let private_key = PrivateKey::from_bytes(private_key)?;
    Scheme::sign_hash(&private_key, &hash).map(|sig| sig.to_hex())
}

/// Aggregates hex signatures, stopping at the first one that fails to decode.
pub fn aggregate<S: AsRef<str>>(signatures: &[S]) -> Result<String> {
    debug!(count = signatures.len(), "aggregating hex signatures");
    let signatures = signatures
        .iter()
        .map(|sig| Signature::<Bls12381>::from_hex(sig.as_ref()));
    aggregate_signatures(signatures).map(|sig| sig.to_hex())
}

/// Verifies hex signatures against a hex public key and hex message.
///
/// `Ok(false)` means the check ran and failed. `Err(_)` means the inputs were
/// malformed and nothing was checked.
pub fn verify<S: AsRef<str>>(signatures: &[S], public_key: &str, message: &str) -> Result<bool> {
    let signatures = signatures
        .iter()
        .map(|sig| Signature::<Bls12381>::from_hex(sig.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    let public_key = PublicKey::from_hex(public_key)?;
    let message = decode_hex(message)?;
    Scheme::verify(&signatures, &public_key, &message)
}

/// Boolean-only form of [`verify`] for callers that cannot receive errors.
/// Malformed input reads as `false`.
pub fn verify_bool<S: AsRef<str>>(signatures: &[S], public_key: &str, message: &str) -> bool {
    verify(signatures, public_key, message).unwrap_or_else(|err| {
        debug!(%err, "verification could not run");
        false
    })
}
