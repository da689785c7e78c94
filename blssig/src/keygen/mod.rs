// Copyright 2024 Wallet Core Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

//! Deterministic private key derivation (`KeyGen` / `HKDF_mod_r`).
//!
//! See <https://eips.ethereum.org/EIPS/eip-2333#hkdf_mod_r-1> and
//! <https://datatracker.ietf.org/doc/html/draft-irtf-cfrg-bls-signature-05#section-2.3>.
//! [`generate_key`] uses the salt of draft v4 and later,
//! `SHA256("BLS-SIG-KEYGEN-SALT-")`. Keys created under the earlier drafts are
//! regenerated with [`generate_key_with_salt`] and [`KEYGEN_SALT_PRE_V4`].

use hkdf::Hkdf;
use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroize;

use crate::curve::{Bls12381, PairingCurve};
use crate::error::{BLSError, Result};
use crate::keys::PrivateKey;

#[cfg(test)]
mod tests;

/// Salt of the drafts prior to v4. Its SHA-256 is the current default salt.
pub const KEYGEN_SALT_PRE_V4: &[u8] = b"BLS-SIG-KEYGEN-SALT-";

/// `L = ceil((3 * ceil(log2(r))) / 16)` for BLS12-381.
const KEYGEN_OKM_LENGTH: usize = 48;

/// Minimum input keying material length.
pub const KEYGEN_MIN_IKM_LENGTH: usize = 32;

/// Derives a private key from at least 32 bytes of input keying material.
///
/// `key_info` is optional context information and may be empty. It is always
/// followed by `I2OSP(L, 2)`. Wallet SDKs that append the suffix only when no
/// `key_info` is given derive different keys for a non-empty `key_info`, so
/// keys shared with them must use an empty `key_info`.
pub fn generate_key(ikm: &[u8], key_info: &[u8]) -> Result<PrivateKey> {
    let salt = Sha256::digest(KEYGEN_SALT_PRE_V4);
    generate_key_with_salt(ikm, &salt, key_info)
}

/// [`generate_key`] with a caller-chosen initial salt. Whenever a candidate
/// key reduces to zero, the salt is replaced by its SHA-256 and derivation is
/// retried.
pub fn generate_key_with_salt(ikm: &[u8], salt: &[u8], key_info: &[u8]) -> Result<PrivateKey> {
    if ikm.len() < KEYGEN_MIN_IKM_LENGTH {
        return Err(BLSError::InvalidArgument(
            format!(
                "input keying material must be at least {KEYGEN_MIN_IKM_LENGTH} bytes, got {}",
                ikm.len()
            )
            .into(),
        ));
    }

    // IKM || I2OSP(0, 1)
    let mut ikm_padded = Vec::with_capacity(ikm.len() + 1);
    ikm_padded.extend_from_slice(ikm);
    ikm_padded.push(0);

    // key_info || I2OSP(L, 2)
    let mut info = Vec::with_capacity(key_info.len() + 2);
    info.extend_from_slice(key_info);
    info.extend_from_slice(&(KEYGEN_OKM_LENGTH as u16).to_be_bytes());

    let mut salt = salt.to_vec();
    let mut okm = [0u8; KEYGEN_OKM_LENGTH];
    let mut attempts = 1usize;

    let result = loop {
        let hkdf = Hkdf::<Sha256>::new(Some(salt.as_slice()), &ikm_padded);
        if hkdf.expand(&info, &mut okm).is_err() {
            break Err(BLSError::CryptoRuntime("HKDF-Expand output too long".into()));
        }

        let mut scalar = Bls12381::scalar_reduce_be(&okm)?;
        if !Bls12381::scalar_is_zero(&scalar) {
            let key = PrivateKey::from_scalar(&scalar);
            scalar.zeroize();
            break key;
        }

        salt = Sha256::digest(&salt).to_vec();
        attempts += 1;
    };

    ikm_padded.zeroize();
    okm.zeroize();
    debug!(attempts, "derived private key");
    result
}
