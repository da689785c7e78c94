// Copyright 2024 Wallet Core Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

//! Point-wise aggregation of signatures (G2) and public keys (G1).
//!
//! Inputs are consumed in a single pass that keeps only the running sum. Each
//! item may still be undecoded, so a malformed element aborts the whole
//! aggregation as soon as it is reached and no partial sum escapes.

use tracing::debug;

use crate::curve::PairingCurve;
use crate::error::{BLSError, Result};
use crate::keys::{PublicKey, Signature};

#[cfg(test)]
mod tests;

/// Sums signatures. Group addition commutes, so the order of `sigs` does not
/// affect the result.
pub fn aggregate_signatures<C, I>(sigs: I) -> Result<Signature<C>>
where
    C: PairingCurve,
    I: IntoIterator<Item = Result<Signature<C>>>,
{
    let mut aggregated_point = C::identity_g2();
    let mut count = 0usize;

    for sig in sigs {
        let sig = sig?;
        aggregated_point = C::add_g2(&aggregated_point, &sig.0);
        count += 1;
    }

    if count == 0 {
        return Err(BLSError::InvalidArgument("empty signatures provided".into()));
    }

    debug!(count, "aggregated signatures");
    Ok(Signature(aggregated_point))
}

/// Sums public keys into the combined key of a multi-signer group.
///
/// Fails if the sum is the point at infinity, since such a key cannot be
/// decoded again.
pub fn aggregate_public_keys<C, I>(pub_keys: I) -> Result<PublicKey<C>>
where
    C: PairingCurve,
    I: IntoIterator<Item = Result<PublicKey<C>>>,
{
    let mut aggregated_point = C::identity_g1();
    let mut count = 0usize;

    for pub_key in pub_keys {
        let pub_key = pub_key?;
        aggregated_point = C::add_g1(&aggregated_point, &pub_key.0);
        count += 1;
    }

    if count == 0 {
        return Err(BLSError::InvalidArgument("empty public keys provided".into()));
    }
    if C::is_identity_g1(&aggregated_point) {
        return Err(BLSError::InvalidArgument(
            "aggregated public key is the point at infinity".into(),
        ));
    }

    debug!(count, "aggregated public keys");
    Ok(PublicKey(aggregated_point))
}
