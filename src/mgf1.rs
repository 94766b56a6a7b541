//! MGF1: counter-mode mask generation over a [`HashDigest`].
//!
//! The generator state is a running digest `Z` followed by a 4-octet
//! big-endian counter. Seeding sets `Z = Hash(seed)` and zeroes the counter;
//! every block of output is `Hash(Z || counter)`, after which the counter is
//! incremented. Calls without a seed continue from the current state, so a
//! mask can be produced a few blocks at a time.
//!
//! Spec: IEEE Std 1363.1-2008, MGF1 (as used by NTRUEncrypt).
//! Ref: https://github.com/NTRUOpenSourceProject/ntru-crypto/blob/master/reference-code/C/Encrypt/src/ntru_crypto_ntru_mgf1.c

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    Error,
    hash::{HashAlgorithm, HashDigest},
};

/// Size of the big-endian block counter appended to the digest.
pub const COUNTER_BYTES: usize = 4;

/// Largest digest length the generator state can hold (SHA-512 size).
pub const MAX_DIGEST_BYTES: usize = 64;

/// Largest seed accepted by [`Mgf1State::seed`].
pub const MAX_SEED_BYTES: usize = u16::MAX as usize;

/// MGF1 generator state: running digest plus block counter.
///
/// The serialized form written by [`Mgf1State::write_bytes`] is
/// `digest || counter_be32`, which is also exactly the hash input of the
/// next output block.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Mgf1State {
    digest: [u8; MAX_DIGEST_BYTES],
    digest_len: usize,
    counter: u32,
}

impl Mgf1State {
    /// Create an unseeded state (zero digest, zero counter) for a
    /// `digest_len`-byte hash.
    pub fn new(digest_len: usize) -> Result<Self, Error> {
        if digest_len == 0 || digest_len > MAX_DIGEST_BYTES {
            return Err(Error::InvalidDigestLength(digest_len));
        }
        Ok(Self {
            digest: [0u8; MAX_DIGEST_BYTES],
            digest_len,
            counter: 0,
        })
    }

    /// Create a state for `alg` and seed it with `seed`.
    pub fn seeded<H: HashDigest + ?Sized>(
        hash: &mut H,
        alg: HashAlgorithm,
        seed: &[u8],
    ) -> Result<Self, Error> {
        let mut state = Self::new(alg.digest_len())?;
        state.seed(hash, alg, seed)?;
        Ok(state)
    }

    /// Restore a state from its `digest || counter_be32` encoding.
    pub fn from_bytes(digest_len: usize, bytes: &[u8]) -> Result<Self, Error> {
        let mut state = Self::new(digest_len)?;
        let expected = state.encoded_len();
        if bytes.len() != expected {
            return Err(Error::InvalidStateLength {
                expected,
                actual: bytes.len(),
            });
        }

        let (digest, counter) = bytes.split_at(digest_len);
        state.digest[..digest_len].copy_from_slice(digest);
        state.counter = u32::from_be_bytes([counter[0], counter[1], counter[2], counter[3]]);
        Ok(state)
    }

    /// Write the `digest || counter_be32` encoding into `out`.
    pub fn write_bytes(&self, out: &mut [u8]) -> Result<(), Error> {
        let expected = self.encoded_len();
        if out.len() != expected {
            return Err(Error::InvalidStateLength {
                expected,
                actual: out.len(),
            });
        }
        out[..self.digest_len].copy_from_slice(self.digest());
        out[self.digest_len..].copy_from_slice(&self.counter.to_be_bytes());
        Ok(())
    }

    /// Length of the serialized state: `digest_len + 4`.
    #[inline]
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        self.digest_len + COUNTER_BYTES
    }

    /// Digest length in bytes.
    #[inline]
    #[must_use]
    pub const fn digest_len(&self) -> usize {
        self.digest_len
    }

    /// Number of blocks produced since the last seeding, modulo 2^32.
    #[inline]
    #[must_use]
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    /// The running digest `Z`.
    #[inline]
    #[must_use]
    pub fn digest(&self) -> &[u8] {
        &self.digest[..self.digest_len]
    }

    /// (Re)initialize the state: `Z = Hash(seed)`, counter = 0.
    pub fn seed<H: HashDigest + ?Sized>(
        &mut self,
        hash: &mut H,
        alg: HashAlgorithm,
        seed: &[u8],
    ) -> Result<(), Error> {
        check_seed_len(seed)?;
        hash.digest(alg, seed, &mut self.digest[..self.digest_len])?;
        self.counter = 0;
        tracing::trace!(?alg, seed_len = seed.len(), "mgf1 seeded");
        Ok(())
    }

    /// Produce `num_calls` blocks into `out`, continuing from the current
    /// digest and counter.
    ///
    /// Each block is `Hash(Z || counter_be32)`; the counter is incremented
    /// after every block and wraps at 2^32. A hash failure aborts at once:
    /// blocks already written stay in `out` and the counter reflects them.
    pub fn generate<H: HashDigest + ?Sized>(
        &mut self,
        hash: &mut H,
        alg: HashAlgorithm,
        num_calls: usize,
        out: &mut [u8],
    ) -> Result<(), Error> {
        let len = self.digest_len;
        check_output_len(len, num_calls, out)?;

        let mut input = [0u8; MAX_DIGEST_BYTES + COUNTER_BYTES];
        input[..len].copy_from_slice(self.digest());

        for block in out.chunks_exact_mut(len).take(num_calls) {
            input[len..len + COUNTER_BYTES].copy_from_slice(&self.counter.to_be_bytes());
            hash.digest(alg, &input[..len + COUNTER_BYTES], block)?;
            self.counter = self.counter.wrapping_add(1);
        }
        input.zeroize();

        tracing::trace!(?alg, num_calls, counter = self.counter, "mgf1 generated");
        Ok(())
    }
}

impl core::fmt::Debug for Mgf1State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mgf1State")
            .field("digest_len", &self.digest_len)
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

fn check_seed_len(seed: &[u8]) -> Result<(), Error> {
    if seed.len() > MAX_SEED_BYTES {
        return Err(Error::SeedTooLong {
            len: seed.len(),
            max: MAX_SEED_BYTES,
        });
    }
    Ok(())
}

fn check_output_len(digest_len: usize, num_calls: usize, out: &[u8]) -> Result<(), Error> {
    let needed = num_calls.saturating_mul(digest_len);
    if out.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            actual: out.len(),
        });
    }
    Ok(())
}

/// MGF1 with the optional-seed calling convention.
///
/// With `Some(seed)` the state is reseeded before generating; with `None`
/// generation continues from whatever `state` already holds. All argument
/// checks happen before the first hash call, so an invalid call leaves
/// `state` untouched.
pub fn mgf1<H: HashDigest + ?Sized>(
    state: &mut Mgf1State,
    hash: &mut H,
    alg: HashAlgorithm,
    num_calls: usize,
    seed: Option<&[u8]>,
    out: &mut [u8],
) -> Result<(), Error> {
    check_output_len(state.digest_len(), num_calls, out)?;
    if let Some(seed) = seed {
        state.seed(hash, alg, seed)?;
    }
    state.generate(hash, alg, num_calls, out)
}

/// Byte-granular MGF1 reader.
///
/// Squeezes any number of octets across calls, hashing one block at a time
/// and keeping the unread tail of the current block for the next call.
pub struct Mgf1Stream<H: HashDigest> {
    hash: H,
    alg: HashAlgorithm,
    state: Mgf1State,
    block: [u8; MAX_DIGEST_BYTES],
    pos: usize,
}

impl<H: HashDigest> Mgf1Stream<H> {
    /// Seed a new stream for `alg`.
    pub fn new(mut hash: H, alg: HashAlgorithm, seed: &[u8]) -> Result<Self, Error> {
        let state = Mgf1State::seeded(&mut hash, alg, seed)?;
        let pos = state.digest_len();
        Ok(Self {
            hash,
            alg,
            state,
            block: [0u8; MAX_DIGEST_BYTES],
            pos,
        })
    }

    /// Fill `out` with the next `out.len()` octets of the mask.
    ///
    /// On a hash failure `out` may be partially written.
    pub fn squeeze(&mut self, out: &mut [u8]) -> Result<(), Error> {
        let len = self.state.digest_len();
        let mut written = 0;
        while written < out.len() {
            if self.pos == len {
                self.state
                    .generate(&mut self.hash, self.alg, 1, &mut self.block[..len])?;
                self.pos = 0;
            }
            let n = (len - self.pos).min(out.len() - written);
            out[written..written + n].copy_from_slice(&self.block[self.pos..self.pos + n]);
            self.pos += n;
            written += n;
        }
        Ok(())
    }

    /// Generator state after the blocks hashed so far.
    #[must_use]
    pub fn state(&self) -> &Mgf1State {
        &self.state
    }
}

impl<H: HashDigest> Drop for Mgf1Stream<H> {
    fn drop(&mut self) {
        self.block.zeroize();
    }
}
