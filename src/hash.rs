//! Hash collaborator used by MGF1.
//!
//! The mask generation functions never pick a hash themselves: the caller
//! passes a [`HashAlgorithm`] together with something implementing
//! [`HashDigest`]. [`RustCryptoDigest`] is the stock implementation backed by
//! the RustCrypto `sha1`, `sha2` and `sha3` crates.
//!
//! NTRUEncrypt parameter sets use SHA-1 (112/128-bit sets) and SHA-256
//! (192/256-bit sets).
//! Ref: https://github.com/NTRUOpenSourceProject/ntru-crypto/blob/master/reference-code/C/Encrypt/src/ntru_crypto_hash.c

use sha1::Sha1;
use sha2::Sha256;
use sha3::{Digest, Sha3_256};

/// Hash function selector passed through to the [`HashDigest`] collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-1, 20-byte digest
    Sha1,
    /// SHA-256, 32-byte digest
    Sha256,
    /// SHA3-256, 32-byte digest
    Sha3_256,
}

impl HashAlgorithm {
    /// Output size of the algorithm in bytes.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 | Self::Sha3_256 => 32,
        }
    }
}

/// Failures reported by a [`HashDigest`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// The implementation does not provide the requested algorithm.
    UnsupportedAlgorithm,
    /// The output buffer length does not match the algorithm's digest size.
    BadLength {
        /// Digest size of the algorithm.
        expected: usize,
        /// Length of the output buffer supplied.
        actual: usize,
    },
    /// Any other failure inside the hash implementation.
    Failure,
}

impl core::fmt::Display for HashError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedAlgorithm => f.write_str("unsupported hash algorithm"),
            Self::BadLength { expected, actual } => {
                write!(f, "bad digest length: expected {expected}, got {actual}")
            }
            Self::Failure => f.write_str("hash computation failed"),
        }
    }
}

impl core::error::Error for HashError {}

/// One-shot message digest.
///
/// Implementations must be deterministic: identical `(alg, input)` pairs
/// always produce identical output. `out.len()` is the digest length the
/// caller declared for `alg`.
pub trait HashDigest {
    /// Hash `input` with `alg`, writing exactly `out.len()` bytes to `out`.
    fn digest(&mut self, alg: HashAlgorithm, input: &[u8], out: &mut [u8])
    -> Result<(), HashError>;
}

impl<H: HashDigest + ?Sized> HashDigest for &mut H {
    #[inline]
    fn digest(
        &mut self,
        alg: HashAlgorithm,
        input: &[u8],
        out: &mut [u8],
    ) -> Result<(), HashError> {
        (**self).digest(alg, input, out)
    }
}

/// [`HashDigest`] backed by the RustCrypto hash crates.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoDigest;

impl HashDigest for RustCryptoDigest {
    fn digest(
        &mut self,
        alg: HashAlgorithm,
        input: &[u8],
        out: &mut [u8],
    ) -> Result<(), HashError> {
        let expected = alg.digest_len();
        if out.len() != expected {
            return Err(HashError::BadLength {
                expected,
                actual: out.len(),
            });
        }

        match alg {
            HashAlgorithm::Sha1 => out.copy_from_slice(&Sha1::digest(input)),
            HashAlgorithm::Sha256 => out.copy_from_slice(&Sha256::digest(input)),
            HashAlgorithm::Sha3_256 => out.copy_from_slice(&Sha3_256::digest(input)),
        }
        Ok(())
    }
}
