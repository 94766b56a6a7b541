//! MGF-TP-1: trinary mask generation on top of MGF1.
//!
//! MGF1 output is read one octet at a time. Octets >= 243 are skipped, every
//! other octet yields 5 trits via [`octet_to_trits`]. When the octets
//! produced so far run out, exactly one more MGF1 block is hashed into the
//! start of the working buffer (the counter keeps counting), so memory use is
//! bounded by the working buffer no matter how many trits are drawn.
//!
//! If the number of trits requested is not a multiple of 5, the last
//! accepted octet contributes only a prefix of its trits; the rest are
//! dropped and never handed out later.
//!
//! Spec: IEEE Std 1363.1-2008, MGF-TP-1.
//! Ref: https://github.com/NTRUOpenSourceProject/ntru-crypto/blob/master/reference-code/C/Encrypt/src/ntru_crypto_ntru_mgf1.c

use crate::{
    Error,
    hash::{HashAlgorithm, HashDigest},
    mgf1::{Mgf1State, mgf1},
    trits::{TRITS_PER_OCTET, octet_to_trits},
};

/// Minimum working buffer length for [`mgftp1`] / [`TritExpander::new`].
///
/// The buffer holds the `min_calls` blocks hashed up front, and at least one
/// block so that refills have somewhere to go.
#[inline]
#[must_use]
pub const fn working_buffer_len(digest_len: usize, min_calls: usize) -> usize {
    let blocks = if min_calls == 0 { 1 } else { min_calls };
    blocks.saturating_mul(digest_len)
}

/// Incremental MGF-TP-1 trit source.
///
/// Created seeded with `min_calls` blocks already hashed into the working
/// buffer. [`fill`](Self::fill) may be called repeatedly to draw further
/// trits from the same stream. After a hash failure the expander is
/// poisoned and keeps returning that error.
pub struct TritExpander<'buf, H: HashDigest> {
    hash: H,
    alg: HashAlgorithm,
    state: Mgf1State,
    buf: &'buf mut [u8],
    pos: usize,
    available: usize,
    failed: Option<Error>,
}

impl<'buf, H: HashDigest> TritExpander<'buf, H> {
    /// Seed MGF1 with `seed` and hash `min_calls` blocks into `buf`.
    ///
    /// `buf` must hold at least [`working_buffer_len`]`(digest_len, min_calls)`
    /// bytes; this is checked before anything is hashed.
    pub fn new(
        mut hash: H,
        alg: HashAlgorithm,
        digest_len: usize,
        min_calls: usize,
        seed: &[u8],
        buf: &'buf mut [u8],
    ) -> Result<Self, Error> {
        let mut state = Mgf1State::new(digest_len)?;

        let needed = working_buffer_len(digest_len, min_calls);
        if buf.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: buf.len(),
            });
        }

        let available = min_calls * digest_len;
        mgf1(
            &mut state,
            &mut hash,
            alg,
            min_calls,
            Some(seed),
            &mut buf[..available],
        )?;

        Ok(Self {
            hash,
            alg,
            state,
            buf,
            pos: 0,
            available,
            failed: None,
        })
    }

    /// Write the next `mask.len()` trits into `mask`, one trit per byte.
    pub fn fill(&mut self, mask: &mut [u8]) -> Result<(), Error> {
        if let Some(err) = self.failed {
            return Err(err);
        }

        for chunk in mask.chunks_mut(TRITS_PER_OCTET) {
            let trits = loop {
                let octet = match self.next_octet() {
                    Ok(octet) => octet,
                    Err(err) => {
                        self.failed = Some(err);
                        return Err(err);
                    }
                };
                if let Some(trits) = octet_to_trits(octet) {
                    break trits;
                }
            };
            chunk.copy_from_slice(&trits[..chunk.len()]);
        }
        Ok(())
    }

    /// MGF1 blocks hashed so far, including the initial `min_calls`.
    #[inline]
    #[must_use]
    pub fn blocks_generated(&self) -> u32 {
        self.state.counter()
    }

    fn next_octet(&mut self) -> Result<u8, Error> {
        if self.available == 0 {
            self.refill()?;
        }
        let octet = self.buf[self.pos];
        self.pos += 1;
        self.available -= 1;
        Ok(octet)
    }

    fn refill(&mut self) -> Result<(), Error> {
        let len = self.state.digest_len();
        self.state
            .generate(&mut self.hash, self.alg, 1, &mut self.buf[..len])?;
        self.pos = 0;
        self.available = len;
        tracing::trace!(counter = self.state.counter(), "mgftp1 refill");
        Ok(())
    }
}

/// MGF-TP-1: derive `mask.len()` trits from `seed`.
///
/// `min_calls` blocks are hashed up front into `working_buffer`; more are
/// hashed one at a time only if rejection sampling runs short. Each entry of
/// `mask` receives one trit in {0, 1, 2}. On error, `mask` is left partially
/// written and must not be used.
pub fn mgftp1<H: HashDigest>(
    hash: H,
    alg: HashAlgorithm,
    digest_len: usize,
    min_calls: usize,
    seed: &[u8],
    working_buffer: &mut [u8],
    mask: &mut [u8],
) -> Result<(), Error> {
    TritExpander::new(hash, alg, digest_len, min_calls, seed, working_buffer)?.fill(mask)
}
