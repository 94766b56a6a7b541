//! Error types shared by MGF1 and MGF-TP-1.

use crate::hash::HashError;

/// Errors returned by the mask generation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The hash collaborator failed. The inner error is passed through unchanged.
    Hash(HashError),
    /// A caller-supplied output or working buffer cannot hold the generated data.
    BufferTooSmall {
        /// Minimum byte count required.
        needed: usize,
        /// Actual byte count supplied.
        actual: usize,
    },
    /// Digest length is zero or larger than [`MAX_DIGEST_BYTES`](crate::MAX_DIGEST_BYTES).
    InvalidDigestLength(usize),
    /// Seed is longer than [`MAX_SEED_BYTES`](crate::MAX_SEED_BYTES).
    SeedTooLong {
        /// Seed length received.
        len: usize,
        /// Largest accepted seed length.
        max: usize,
    },
    /// Serialized generator state has the wrong length for its digest.
    InvalidStateLength {
        /// Expected byte count (`digest_len + 4`).
        expected: usize,
        /// Actual byte count received.
        actual: usize,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Hash(err) => write!(f, "hash failure: {err}"),
            Self::BufferTooSmall { needed, actual } => {
                write!(f, "buffer too small: need {needed} bytes, got {actual}")
            }
            Self::InvalidDigestLength(len) => write!(f, "invalid digest length {len}"),
            Self::SeedTooLong { len, max } => {
                write!(f, "seed too long: {len} bytes, at most {max} allowed")
            }
            Self::InvalidStateLength { expected, actual } => {
                write!(f, "invalid state length: expected {expected}, got {actual}")
            }
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Hash(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HashError> for Error {
    #[inline]
    fn from(err: HashError) -> Self {
        Self::Hash(err)
    }
}
