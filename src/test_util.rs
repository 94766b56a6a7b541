use rand_chacha::rand_core::{RngCore, SeedableRng};
use std::vec::Vec;

use crate::hash::{HashAlgorithm, HashDigest, HashError};

/// Deterministic tiny RNG for repeatable tests
pub struct TestRng {
    rng: rand_chacha::ChaCha8Rng,
}
impl TestRng {
    pub fn new() -> Self {
        let rng = rand_chacha::ChaCha8Rng::seed_from_u64(0xdead_beef);
        Self { rng }
    }
    pub fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }
    pub fn gen_usize(&mut self, upper: usize) -> usize {
        (self.next_u32() as usize) % upper
    }
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        self.rng.fill_bytes(out);
    }
}

impl Default for TestRng {
    fn default() -> Self {
        Self::new()
    }
}

/// Passes calls through to `inner` and keeps a copy of every input.
pub struct RecordingHash<H> {
    inner: H,
    pub inputs: Vec<Vec<u8>>,
}

impl<H: HashDigest> RecordingHash<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            inputs: Vec::new(),
        }
    }
}

impl<H: HashDigest> HashDigest for RecordingHash<H> {
    fn digest(
        &mut self,
        alg: HashAlgorithm,
        input: &[u8],
        out: &mut [u8],
    ) -> Result<(), HashError> {
        self.inputs.push(input.to_vec());
        self.inner.digest(alg, input, out)
    }
}

/// Fails with [`HashError::Failure`] on the `fail_on`-th call (0-based).
pub struct FailingHash<H> {
    inner: H,
    fail_on: usize,
    pub calls: usize,
}

impl<H: HashDigest> FailingHash<H> {
    pub fn new(inner: H, fail_on: usize) -> Self {
        Self {
            inner,
            fail_on,
            calls: 0,
        }
    }
}

impl<H: HashDigest> HashDigest for FailingHash<H> {
    fn digest(
        &mut self,
        alg: HashAlgorithm,
        input: &[u8],
        out: &mut [u8],
    ) -> Result<(), HashError> {
        let call = self.calls;
        self.calls += 1;
        if call == self.fail_on {
            return Err(HashError::Failure);
        }
        self.inner.digest(alg, input, out)
    }
}

/// Returns scripted blocks: call `i` yields `blocks[i]`, repeating the last
/// block once the script runs out. Call 0 is the seeding hash.
pub struct ScriptedHash {
    blocks: Vec<Vec<u8>>,
    pub inputs: Vec<Vec<u8>>,
}

impl ScriptedHash {
    pub fn new(blocks: &[&[u8]]) -> Self {
        assert!(!blocks.is_empty(), "script needs at least one block");
        Self {
            blocks: blocks.iter().map(|b| b.to_vec()).collect(),
            inputs: Vec::new(),
        }
    }

    /// Same block for every call.
    pub fn repeating(block: &[u8]) -> Self {
        Self::new(&[block])
    }
}

impl HashDigest for ScriptedHash {
    fn digest(
        &mut self,
        _alg: HashAlgorithm,
        input: &[u8],
        out: &mut [u8],
    ) -> Result<(), HashError> {
        let idx = self.inputs.len().min(self.blocks.len() - 1);
        let block = &self.blocks[idx];
        if block.len() != out.len() {
            return Err(HashError::BadLength {
                expected: block.len(),
                actual: out.len(),
            });
        }
        out.copy_from_slice(block);
        self.inputs.push(input.to_vec());
        Ok(())
    }
}
