// Copyright 2024 Wallet Core Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

//! secp256k1 Diffie-Hellman with a pluggable shared-point hash.
//!
//! The point multiplication is always the same. What differs between
//! protocols is how the affine shared point `(x, y)` is turned into the
//! 32-byte secret, which is what [`EcdhHasher`] captures:
//! - [`RawX`] returns the x-coordinate untouched. The card secure channel
//!   defines its session secret this way, so it must not be hashed.
//! - [`Sha256Compressed`] is libsecp256k1's default,
//!   `SHA256((0x02 | (y & 1)) || x)`.


use k256::elliptic_curve::group::Curve;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{FieldBytes, PublicKey, SecretKey};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;
use zeroize::Zeroizing;

/// Length of an affine coordinate and of the shared secret.
pub const COORDINATE_LENGTH: usize = 32;

/// secp256k1 private key length in bytes
pub const PRIVATE_KEY_LENGTH: usize = 32;

#[derive(Error, Debug, PartialEq)]
pub enum EcdhError {
    #[error("invalid private key length: expected {PRIVATE_KEY_LENGTH} bytes, got {0}")]
    InvalidPrivateKeyLength(usize),
    #[error("private key is zero or not less than the curve order")]
    InvalidPrivateKey,
    #[error("public key is not a valid SEC1 encoded secp256k1 point")]
    InvalidPublicKey,
    #[error("shared point is the point at infinity")]
    IdentityPoint,
}

/// Returns the shared point's x-coordinate verbatim. `y` is ignored.
///
/// This never fails.
pub fn compute_shared_x(
    x: &[u8; COORDINATE_LENGTH],
    _y: &[u8; COORDINATE_LENGTH],
) -> [u8; COORDINATE_LENGTH] {
    *x
}

/// Turns the affine coordinates of the shared point into the shared secret.
pub trait EcdhHasher {
    fn hash(
        &self,
        x: &[u8; COORDINATE_LENGTH],
        y: &[u8; COORDINATE_LENGTH],
    ) -> [u8; COORDINATE_LENGTH];
}

/// Any `Fn(x, y) -> secret` callback can serve as a hasher.
impl<F> EcdhHasher for F
where
    F: Fn(&[u8; COORDINATE_LENGTH], &[u8; COORDINATE_LENGTH]) -> [u8; COORDINATE_LENGTH],
{
    fn hash(
        &self,
        x: &[u8; COORDINATE_LENGTH],
        y: &[u8; COORDINATE_LENGTH],
    ) -> [u8; COORDINATE_LENGTH] {
        self(x, y)
    }
}

/// Unhashed x-coordinate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawX;

impl EcdhHasher for RawX {
    fn hash(
        &self,
        x: &[u8; COORDINATE_LENGTH],
        y: &[u8; COORDINATE_LENGTH],
    ) -> [u8; COORDINATE_LENGTH] {
        compute_shared_x(x, y)
    }
}

/// SHA-256 of the compressed shared point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Compressed;

impl EcdhHasher for Sha256Compressed {
    fn hash(
        &self,
        x: &[u8; COORDINATE_LENGTH],
        y: &[u8; COORDINATE_LENGTH],
    ) -> [u8; COORDINATE_LENGTH] {
        let version = 0x02 | (y[COORDINATE_LENGTH - 1] & 0x01);
        let mut hasher = Sha256::new();
        hasher.update([version]);
        hasher.update(x);

        let mut secret = [0u8; COORDINATE_LENGTH];
        secret.copy_from_slice(&hasher.finalize());
        secret
    }
}

/// Multiplies a SEC1 public key (33 or 65 bytes) by a 32-byte big-endian
/// private scalar and hashes the shared point with `hasher`.
pub fn shared_secret<H: EcdhHasher>(
    private_key: &[u8],
    public_key: &[u8],
    hasher: &H,
) -> Result<[u8; COORDINATE_LENGTH], EcdhError> {
    if private_key.len() != PRIVATE_KEY_LENGTH {
        return Err(EcdhError::InvalidPrivateKeyLength(private_key.len()));
    }
    let secret = SecretKey::from_bytes(FieldBytes::from_slice(private_key))
        .map_err(|_| EcdhError::InvalidPrivateKey)?;
    let public =
        PublicKey::from_sec1_bytes(public_key).map_err(|_| EcdhError::InvalidPublicKey)?;

    let shared = (public.to_projective() * *secret.to_nonzero_scalar()).to_affine();
    let encoded = shared.to_encoded_point(false);
    let (Some(x), Some(y)) = (encoded.x(), encoded.y()) else {
        debug!("ECDH produced the point at infinity");
        return Err(EcdhError::IdentityPoint);
    };

    let mut x_bytes = Zeroizing::new([0u8; COORDINATE_LENGTH]);
    let mut y_bytes = Zeroizing::new([0u8; COORDINATE_LENGTH]);
    x_bytes.copy_from_slice(x);
    y_bytes.copy_from_slice(y);

    Ok(hasher.hash(&x_bytes, &y_bytes))
}

/// Shared secret as the raw x-coordinate, see [`RawX`].
pub fn raw_shared_secret(
    private_key: &[u8],
    public_key: &[u8],
) -> Result<[u8; COORDINATE_LENGTH], EcdhError> {
    shared_secret(private_key, public_key, &RawX)
}
