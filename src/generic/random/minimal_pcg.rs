//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, implementing the [RngCore] and [SeedableRng] traits.
//!
//! PCG(32) is simple, fast, and deterministic given a seed, and so is used to generate reproducible formulas.
//!
//! The library builds `rand` without default features, and so without the standard generators of `rand`.
//! Further, `rand` documents the algorithm behind `StdRng` as subject to change between releases, while the formulas drawn from a seed here are fixed by the algorithm below.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// The multiplier of the underlying linear congruential generator.
const MULTIPLIER: u64 = 6364136223846793005;

/// Any odd increment selects a stream.
const INCREMENT: u64 = 1442695040888963407;

/// A PCG32 generator, on a fixed stream.
pub struct MinimalPCG32 {
    state: u64,
}

impl MinimalPCG32 {
    /// Advances the state, returning the state before the advance.
    fn advance(&mut self) -> u64 {
        let previous = self.state;
        self.state = previous.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        previous
    }

    /// The xorshift-high, random-rotation output permutation.
    fn permute(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rotation = (state >> 59) as u32;
        xorshifted.rotate_right(rotation)
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let state = self.advance();
        Self::permute(state)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed).wrapping_add(INCREMENT),
        }
    }
}
