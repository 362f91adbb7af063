//! xoroshiro128-style generator with a long jump
//!
//! MCTS rollouts draw their moves from this generator. Every rollout starts
//! with [`Xoroshiro::jump`], so consecutive rollouts read from well separated
//! stretches of the sequence even though they share one generator.
//!
//! The type plugs into the `rand` ecosystem through [`RngCore`] and
//! [`SeedableRng`].

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, SeedableRng};

/// Jump polynomial: advances the state by 2^64 steps.
const JUMP: [u64; 2] = [0xdf90_0294_d8f5_54a5, 0x1708_65df_4b32_01fc];

/// Substituted for an all-zero seed, which would lock the generator at zero.
const NONZERO_SEED: [u64; 2] = [0x9e37_79b9_7f4a_7c15, 0xbf58_476d_1ce4_e5b9];

/// 128 bits of state as two words, never both zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro {
    s: [u64; 2],
}

impl Xoroshiro {
    /// Build from two state words. An all-zero state is replaced.
    pub fn from_state(s0: u64, s1: u64) -> Self {
        if s0 == 0 && s1 == 0 {
            Self { s: NONZERO_SEED }
        } else {
            Self { s: [s0, s1] }
        }
    }

    /// Seed from the wall clock. Not reproducible across runs.
    pub fn from_clock() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let nanos = u64::from(now.subsec_nanos());
        let s0 = nanos ^ now.as_secs();
        let s1 = (s0 << 32) | (nanos & 0xffff_ffff);
        Self::from_state(s0, s1)
    }

    #[inline]
    pub fn state(&self) -> [u64; 2] {
        self.s
    }

    /// Advance one step and return the output.
    #[inline]
    fn step(&mut self) -> u64 {
        let s0 = self.s[0];
        let mut s1 = self.s[1];
        let result = s0.wrapping_add(s1).rotate_left(24).wrapping_add(s0);

        s1 ^= s0;
        self.s[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.s[1] = s1.rotate_left(37);

        result
    }

    /// Advance the state by 2^64 steps.
    pub fn jump(&mut self) {
        let mut s0 = 0u64;
        let mut s1 = 0u64;
        for word in JUMP {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    s0 ^= self.s[0];
                    s1 ^= self.s[1];
                }
                self.step();
            }
        }
        self.s = [s0, s1];
    }

    /// Uniform-ish index below `n` by plain modulo.
    #[inline]
    pub fn below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        (self.step() % n as u64) as usize
    }
}

impl RngCore for Xoroshiro {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Xoroshiro {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut s0 = [0u8; 8];
        let mut s1 = [0u8; 8];
        s0.copy_from_slice(&seed[..8]);
        s1.copy_from_slice(&seed[8..]);
        Self::from_state(u64::from_le_bytes(s0), u64::from_le_bytes(s1))
    }
}
