//! Cryptographically sourced randomness.
//!
//! Role assignment is the fairness guarantee of the whole game, so every
//! random decision in the core flows through [`SecureRandom`] backed by
//! the operating system's CSPRNG. A seedable or otherwise predictable
//! generator would let an informed player bias impostor selection.

use rand::rngs::OsRng;
use rand::{RngCore, TryRngCore};

/// Source of raw random bytes. Injectable so tests can script outcomes.
pub trait EntropySource {
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// OS-provided cryptographically secure entropy.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        // OS entropy failure is not recoverable at this level; the
        // UnwrapErr adapter follows rand's own policy for it.
        OsRng.unwrap_err().fill_bytes(dest);
    }
}

/// Deterministic entropy replaying a fixed sequence of draws.
///
/// Each `u64` in the sequence feeds exactly one bounded draw, so tests
/// can script shuffle swaps and percentage rolls value-by-value. The
/// sequence wraps around when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedEntropy {
    values: Vec<u64>,
    cursor: usize,
}

impl ScriptedEntropy {
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl EntropySource for ScriptedEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let value = if self.values.is_empty() {
            0
        } else {
            let v = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            v
        };
        let bytes = value.to_le_bytes();
        for (i, b) in dest.iter_mut().enumerate() {
            *b = if i < bytes.len() { bytes[i] } else { 0 };
        }
    }
}

/// Uniform integer generation and Fisher-Yates shuffling on top of an
/// [`EntropySource`].
pub struct SecureRandom<E: EntropySource = OsEntropy> {
    entropy: E,
}

impl SecureRandom<OsEntropy> {
    pub fn new() -> Self {
        Self { entropy: OsEntropy }
    }
}

impl Default for SecureRandom<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> SecureRandom<E> {
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.entropy.fill_bytes(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    /// Uniform integer in `[0, max_exclusive)`.
    ///
    /// `max_exclusive <= 1` returns 0 (degenerate safe default, not an
    /// error). Uses rejection sampling to avoid modulo bias.
    pub fn below(&mut self, max_exclusive: usize) -> usize {
        if max_exclusive <= 1 {
            return 0;
        }
        let range = max_exclusive as u64;
        let zone = u64::MAX - (u64::MAX % range);
        loop {
            let value = self.next_u64();
            if value < zone {
                return (value % range) as usize;
            }
        }
    }

    /// True with probability `percent / 100`.
    pub fn percent(&mut self, percent: u32) -> bool {
        (self.below(100) as u32) < percent
    }

    /// Uniformly random permutation of `items` (Fisher-Yates over a
    /// copy; the input is left untouched).
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = self.below(i + 1);
            out.swap(i, j);
        }
        out
    }

    /// Uniformly random element, `None` on empty input.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.below(items.len())])
        }
    }
}
