// Copyright 2024 Wallet Core Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use rand::RngCore;

use crate::keygen::generate_key;
use crate::{AugSchemeMPL, PrivateKey, PublicKey, Result, Signature};

/// BLS signer for testing
pub struct BLSSigner {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl BLSSigner {
    pub fn new(private_key: PrivateKey) -> Result<Self> {
        let public_key = AugSchemeMPL::derive_public_key(&private_key)?;
        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// Signer whose key is derived from `seed` repeated over 32 bytes.
    pub fn from_seed(seed: u8) -> Result<Self> {
        Self::new(generate_key(&[seed; 32], &[])?)
    }

    pub fn random() -> Result<Self> {
        let mut ikm = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut ikm);
        Self::new(generate_key(&ikm, &[])?)
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn sign(&self, msg: &[u8]) -> Result<Signature> {
        AugSchemeMPL::sign(&self.private_key, msg)
    }
}
