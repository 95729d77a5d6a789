//! Keyed permutation of body chunks.
//!
//! Spreads the embedded body across the whole cover instead of filling it
//! front to back.

use fastrand::Rng;

/// Seed for the chunk permutation, derived from the key.
///
/// The derivation only depends on the key bytes, so the same key yields the
/// same seed in every process and on every platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedState(u64);

impl SeedState {
    pub fn from_key(key: &str) -> Self {
        Self(hash_seed(key.as_bytes()))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Pseudo-random permutation of `0..length`.
///
/// The permutation is deterministic given the same seed, allowing the decoder
/// to reconstruct the same ordering used during embedding.
#[derive(Debug, Clone)]
pub struct Permutation {
    /// indices[i] = original index visited at position i.
    indices: Vec<usize>,
}

impl Permutation {
    /// Create a permutation from a seed.
    ///
    /// # Arguments
    /// * `seed` - Seed for deterministic shuffling
    /// * `length` - Number of elements to permute
    pub fn from_seed(seed: SeedState, length: usize) -> Self {
        let mut rng = Rng::with_seed(seed.value());

        let mut indices: Vec<usize> = (0..length).collect();

        // Fisher-Yates shuffle, drawing u64 so 32 bit targets agree with 64 bit ones
        for i in (1..length).rev() {
            let j = rng.u64(0..=i as u64) as usize;
            indices.swap(i, j);
        }

        Permutation { indices }
    }

    /// Original index visited at `position`.
    #[inline]
    pub fn original(&self, position: usize) -> usize {
        self.indices[position]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Reorder `data` into visiting order.
    pub fn apply<T: Copy>(&self, data: &[T]) -> Vec<T> {
        assert_eq!(data.len(), self.len());
        self.indices.iter().map(|&i| data[i]).collect()
    }
}

/// Hash seed bytes to u64 with 64 bit FNV-1a.
fn hash_seed(seed: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    seed.iter().fold(FNV_OFFSET, |hash, &byte| {
        (hash ^ (byte as u64)).wrapping_mul(FNV_PRIME)
    })
}
