#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//!
//! # Security Warning
//!
//! MGF-TP-1 uses rejection sampling, so the number of hash calls (and the
//! running time) depends on the generated octets. This matches the
//! NTRUEncrypt reference implementation and is not constant time.
//!
//! # Usage
//!
//! ```
//! use ntru_mgf::{HashAlgorithm, RustCryptoDigest, mgftp1, working_buffer_len};
//!
//! let alg = HashAlgorithm::Sha256;
//! let digest_len = alg.digest_len();
//! let min_calls = 2;
//!
//! let mut buf = [0u8; 64];
//! assert!(buf.len() >= working_buffer_len(digest_len, min_calls));
//!
//! let mut trits = [0u8; 101];
//! mgftp1(RustCryptoDigest, alg, digest_len, min_calls, b"seed", &mut buf, &mut trits).unwrap();
//! assert!(trits.iter().all(|&t| t <= 2));
//! ```

#[cfg(test)]
mod test_util;

mod error;

/// Hash collaborator
pub mod hash;

/// MGF1
pub mod mgf1;

/// MGF-TP-1
pub mod mgftp1;

/// Octet/trit conversion
pub mod trits;

#[cfg(test)]
extern crate std;

pub use error::Error;
pub use hash::{HashAlgorithm, HashDigest, HashError, RustCryptoDigest};
pub use mgf1::{COUNTER_BYTES, MAX_DIGEST_BYTES, MAX_SEED_BYTES, Mgf1State, Mgf1Stream, mgf1};
pub use mgftp1::{TritExpander, mgftp1, working_buffer_len};
pub use trits::{OCTET_REJECT_THRESHOLD, TRITS_PER_OCTET, octet_to_trits, trits_to_octet};
