// Copyright 2024 Wallet Core Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::marker::PhantomData;

use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::aggregation::{aggregate_public_keys, aggregate_signatures};
use crate::curve::{Bls12381, PairingCurve};
use crate::error::{BLSError, Result};
use crate::keys::{HashPoint, PrivateKey, PublicKey, Signature};


/// Domain separation tag of the augmented scheme, minimal-pubkey-size ciphersuite
pub const AUG_SCHEME_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_AUG_";

/// Augmented BLS signature scheme ("AugSchemeMPL")
///
/// - public keys in G1, signatures in G2
/// - every message is prefixed with the signer's public key before it is
///   hashed onto G2, which rules out rogue-key attacks without a proof of
///   possession
///
/// Stateless: all operations are associated functions and safe to call
/// concurrently.
pub struct AugSchemeMPL<C: PairingCurve = Bls12381>(PhantomData<C>);

impl<C: PairingCurve> AugSchemeMPL<C> {
    /// Multiplies the G1 generator by the private scalar.
    pub fn derive_public_key(private_key: &PrivateKey<C>) -> Result<PublicKey<C>> {
        let mut scalar = private_key.scalar()?;
        let point = C::scalar_multiply_g1(&scalar);
        scalar.zeroize();
        Ok(PublicKey(point))
    }

    /// Same as [`Self::derive_public_key`], accepting a hex string or raw bytes.
    pub fn public_key_from<K>(private_key: K) -> Result<PublicKey<C>>
    where
        K: TryInto<PrivateKey<C>, Error = BLSError>,
    {
        Self::derive_public_key(&private_key.try_into()?)
    }

    /// Maps `public_key || message` onto G2.
    pub fn hash_to_curve(public_key: &PublicKey<C>, message: &[u8]) -> Result<HashPoint<C>> {
        let mut augmented = public_key.to_bytes();
        augmented.extend_from_slice(message);
        let point = C::hash_to_g2(&augmented, AUG_SCHEME_DST)?;
        Ok(HashPoint(point))
    }

    pub fn sign(private_key: &PrivateKey<C>, message: &[u8]) -> Result<Signature<C>> {
        let public_key = Self::derive_public_key(private_key)?;
        let hash = Self::hash_to_curve(&public_key, message)?;
        debug!(message_len = message.len(), "signing message");
        Self::sign_hash(private_key, &hash)
    }

    /// Signs a hash point that was computed out of band, e.g. against the
    /// combined public key of a multi-signer group.
    pub fn sign_hash(private_key: &PrivateKey<C>, hash: &HashPoint<C>) -> Result<Signature<C>> {
        let mut scalar = private_key.scalar()?;
        let point = C::scalar_multiply_g2(&hash.0, &scalar);
        scalar.zeroize();
        Ok(Signature(point))
    }

    /// Sums the signatures. Fails on an empty slice.
    pub fn aggregate(signatures: &[Signature<C>]) -> Result<Signature<C>> {
        aggregate_signatures(signatures.iter().copied().map(Ok))
    }

    /// Sums the public keys into a combined key. Fails on an empty slice.
    pub fn aggregate_public_keys(public_keys: &[PublicKey<C>]) -> Result<PublicKey<C>> {
        aggregate_public_keys(public_keys.iter().copied().map(Ok))
    }

    /// Verifies `signatures` (aggregated if there is more than one) against a
    /// single public key and message.
    ///
    /// A signature that does not satisfy the pairing equation yields
    /// `Ok(false)`. Errors are reserved for inputs the check cannot run on.
    pub fn verify(
        signatures: &[Signature<C>],
        public_key: &PublicKey<C>,
        message: &[u8],
    ) -> Result<bool> {
        let signature = match signatures {
            [] => return Err(BLSError::InvalidArgument("empty signatures provided".into())),
            [single] => *single,
            _ => Self::aggregate(signatures)?,
        };
        Self::verify_single(&signature, public_key, message)
    }

    fn verify_single(
        signature: &Signature<C>,
        public_key: &PublicKey<C>,
        message: &[u8],
    ) -> Result<bool> {
        let hash = Self::hash_to_curve(public_key, message)?;
        let valid = C::pairing_check(&signature.0, &[(public_key.0, hash.0)])?;
        trace!(valid, "pairing check");
        Ok(valid)
    }

    /// Verifies an aggregate signature over distinct `(public key, message)`
    /// pairs, i.e. `e(g1, S) == prod e(pk_i, H(pk_i, m_i))`.
    pub fn aggregate_verify<M: AsRef<[u8]>>(
        public_keys: &[PublicKey<C>],
        messages: &[M],
        signature: &Signature<C>,
    ) -> Result<bool> {
        if public_keys.is_empty() {
            return Err(BLSError::InvalidArgument("empty public keys provided".into()));
        }
        if public_keys.len() != messages.len() {
            return Err(BLSError::InvalidArgument(
                format!(
                    "mismatched number of public keys and messages: {} != {}",
                    public_keys.len(),
                    messages.len()
                )
                .into(),
            ));
        }

        let mut pairs = Vec::with_capacity(public_keys.len());
        for (public_key, message) in public_keys.iter().zip(messages) {
            let hash = Self::hash_to_curve(public_key, message.as_ref())?;
            pairs.push((public_key.0, hash.0));
        }

        let valid = C::pairing_check(&signature.0, &pairs)?;
        debug!(signers = public_keys.len(), valid, "verified aggregate signature");
        Ok(valid)
    }
}
