// Copyright 2024 Wallet Core Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::borrow::Cow;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BLSError {
    /// Input is not a hexadecimal string.
    #[error("invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Input decoded to the wrong number of bytes for a fixed-size encoding.
    #[error("invalid {what} length: expected {expected} bytes, got {actual}")]
    InvalidByteCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Reserved for proof-of-possession schemes.
    #[error("invalid proof of possession")]
    InvalidProofOfPossession,

    /// Input has the right shape but is not a valid value, e.g. a zero scalar
    /// or a point that is not in the prime-order subgroup.
    #[error("invalid argument: {0}")]
    InvalidArgument(Cow<'static, str>),

    /// The arithmetic backend reported an internal failure.
    #[error("crypto runtime error: {0}")]
    CryptoRuntime(Cow<'static, str>),

    #[error("unknown error")]
    Unknown,
}

/// Error codes surfaced to callers that switch on the failure kind rather
/// than on the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidHex,
    InvalidByteCount,
    InvalidProofOfPossession,
    InvalidArgument,
    CryptoRuntime,
    Unknown,
}

impl BLSError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BLSError::InvalidHex(_) => ErrorKind::InvalidHex,
            BLSError::InvalidByteCount { .. } => ErrorKind::InvalidByteCount,
            BLSError::InvalidProofOfPossession => ErrorKind::InvalidProofOfPossession,
            BLSError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            BLSError::CryptoRuntime(_) => ErrorKind::CryptoRuntime,
            BLSError::Unknown => ErrorKind::Unknown,
        }
    }

    pub(crate) fn byte_count(what: &'static str, expected: usize, actual: usize) -> Self {
        BLSError::InvalidByteCount {
            what,
            expected,
            actual,
        }
    }
}

/// Failure raised by a [`PairingCurve`](crate::curve::PairingCurve) backend.
#[derive(Error, Debug, PartialEq)]
#[error("{0}")]
pub struct CurveError(pub Cow<'static, str>);

impl From<CurveError> for BLSError {
    fn from(err: CurveError) -> Self {
        BLSError::CryptoRuntime(err.0)
    }
}

pub type Result<T> = std::result::Result<T, BLSError>;
