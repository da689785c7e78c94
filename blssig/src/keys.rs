// Copyright 2024 Wallet Core Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

//! Typed values exchanged with the signature scheme.
//!
//! All of them are validated on construction: a [`PrivateKey`] is always a
//! nonzero scalar below the group order, a [`PublicKey`] is always a
//! non-identity point of the prime-order subgroup of G1, and [`Signature`] and
//! [`HashPoint`] are always subgroup points of G2.

use std::fmt;
use std::marker::PhantomData;

use zeroize::Zeroize;

use crate::curve::{Bls12381, PairingCurve};
use crate::error::{BLSError, Result};

/// BLS12-381 private key length in bytes
pub const BLS_PRIVATE_KEY_LENGTH: usize = 32;

/// BLS12-381 public key length in bytes
pub const BLS_PUBLIC_KEY_LENGTH: usize = 48;

/// BLS12-381 signature length in bytes
pub const BLS_SIGNATURE_LENGTH: usize = 96;

/// Decodes hex in either case, with an optional `0x` prefix.
pub(crate) fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    Ok(hex::decode(digits)?)
}

/// Big-endian private scalar. The encoding is wiped from memory on drop.
pub struct PrivateKey<C: PairingCurve = Bls12381> {
    bytes: Vec<u8>,
    _curve: PhantomData<C>,
}

impl<C: PairingCurve> PrivateKey<C> {
    /// Decodes a big-endian scalar, rejecting zero and values not below the
    /// group order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != C::SCALAR_LENGTH {
            return Err(BLSError::byte_count(
                "private key",
                C::SCALAR_LENGTH,
                bytes.len(),
            ));
        }
        let mut scalar = C::scalar_from_be_bytes(bytes).ok_or(BLSError::InvalidArgument(
            "private key is not less than the group order".into(),
        ))?;
        let key = Self::from_scalar(&scalar);
        scalar.zeroize();
        key
    }

    pub fn from_hex(input: &str) -> Result<Self> {
        let mut bytes = decode_hex(input)?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    pub(crate) fn from_scalar(scalar: &C::Scalar) -> Result<Self> {
        if C::scalar_is_zero(scalar) {
            return Err(BLSError::InvalidArgument("private key is zero".into()));
        }
        Ok(Self {
            bytes: C::scalar_to_be_bytes(scalar),
            _curve: PhantomData,
        })
    }

    pub(crate) fn scalar(&self) -> Result<C::Scalar> {
        // Only validated encodings are ever stored.
        C::scalar_from_be_bytes(&self.bytes)
            .ok_or(BLSError::CryptoRuntime("stored private key is corrupt".into()))
    }

    /// Big-endian scalar encoding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl<C: PairingCurve> Drop for PrivateKey<C> {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl<C: PairingCurve> Clone for PrivateKey<C> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _curve: PhantomData,
        }
    }
}

impl<C: PairingCurve> PartialEq for PrivateKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<C: PairingCurve> fmt::Debug for PrivateKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

impl<C: PairingCurve> TryFrom<&[u8]> for PrivateKey<C> {
    type Error = BLSError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl<C: PairingCurve> TryFrom<&str> for PrivateKey<C> {
    type Error = BLSError;

    fn try_from(input: &str) -> Result<Self> {
        Self::from_hex(input)
    }
}

impl<C: PairingCurve> TryFrom<&PrivateKey<C>> for PrivateKey<C> {
    type Error = BLSError;

    fn try_from(key: &PrivateKey<C>) -> Result<Self> {
        Ok(key.clone())
    }
}

/// Compressed G1 public key.
pub struct PublicKey<C: PairingCurve = Bls12381>(pub(crate) C::G1);

impl<C: PairingCurve> PublicKey<C> {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != C::G1_LENGTH {
            return Err(BLSError::byte_count("public key", C::G1_LENGTH, bytes.len()));
        }
        let point = C::decode_g1(bytes).ok_or(BLSError::InvalidArgument(
            "public key is not a valid G1 element".into(),
        ))?;
        if C::is_identity_g1(&point) {
            return Err(BLSError::InvalidArgument(
                "public key is the point at infinity".into(),
            ));
        }
        Ok(Self(point))
    }

    pub fn from_hex(input: &str) -> Result<Self> {
        Self::from_bytes(&decode_hex(input)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        C::encode_g1(&self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

/// Implements the value-type plumbing shared by the point wrappers. Deriving
/// would put bounds on `C` itself instead of on its group elements.
macro_rules! impl_point_traits {
    ($name:ident) => {
        impl<C: PairingCurve> Clone for $name<C> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<C: PairingCurve> Copy for $name<C> {}

        impl<C: PairingCurve> PartialEq for $name<C> {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl<C: PairingCurve> fmt::Debug for $name<C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }
    };
}

impl_point_traits!(PublicKey);
impl_point_traits!(Signature);
impl_point_traits!(HashPoint);

/// Decodes a compressed G2 element, as used by both signatures and hash points.
fn decode_g2<C: PairingCurve>(bytes: &[u8], what: &'static str) -> Result<C::G2> {
    if bytes.len() != C::G2_LENGTH {
        return Err(BLSError::byte_count(what, C::G2_LENGTH, bytes.len()));
    }
    C::decode_g2(bytes).ok_or_else(|| {
        BLSError::InvalidArgument(format!("{what} is not a valid G2 element").into())
    })
}

/// Compressed G2 signature. Aggregated signatures share the same type.
pub struct Signature<C: PairingCurve = Bls12381>(pub(crate) C::G2);

impl<C: PairingCurve> Signature<C> {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode_g2::<C>(bytes, "signature").map(Self)
    }

    pub fn from_hex(input: &str) -> Result<Self> {
        Self::from_bytes(&decode_hex(input)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        C::encode_g2(&self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

/// Result of mapping `public key || message` onto G2.
pub struct HashPoint<C: PairingCurve = Bls12381>(pub(crate) C::G2);

impl<C: PairingCurve> HashPoint<C> {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode_g2::<C>(bytes, "hash").map(Self)
    }

    pub fn from_hex(input: &str) -> Result<Self> {
        Self::from_bytes(&decode_hex(input)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        C::encode_g2(&self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}
