//! MT19937 Mersenne Twister generator.
//!
//! # References
//!
//! - Matsumoto & Nishimura (1998), "Mersenne Twister: a 623-dimensionally
//!   equidistributed uniform pseudo-random number generator"

use rand::{RngCore, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// Fallback seed applied on the first draw from an unseeded stream.
const DEFAULT_SEED: u32 = 5489;

/// An explicitly owned MT19937 stream.
///
/// The contract is bit-exact reproducibility: for a fixed seed and a fixed
/// sequence of draw calls, every output is identical across runs and across
/// conforming implementations. An unseeded stream silently seeds itself with
/// `5489` on the first draw; that is a deliberate reproducibility fallback,
/// not an error.
///
/// # Examples
///
/// ```
/// use stochbench::rng::Mt19937;
///
/// let mut a = Mt19937::seeded(42);
/// let mut b = Mt19937::seeded(42);
/// assert_eq!(a.next_u32(), b.next_u32());
/// ```
#[derive(Debug, Clone)]
pub struct Mt19937 {
    state: [u32; N],
    /// Cursor into `state`; `N + 1` marks a never-seeded stream.
    index: usize,
}

impl Mt19937 {
    /// Creates an unseeded stream. The first draw self-seeds with `5489`.
    pub fn new() -> Self {
        Self {
            state: [0; N],
            index: N + 1,
        }
    }

    /// Creates a stream seeded with `seed`.
    pub fn seeded(seed: u32) -> Self {
        let mut rng = Self::new();
        rng.reseed(seed);
        rng
    }

    /// Resets the state deterministically from `seed` via the linear
    /// congruential expansion of the reference initializer.
    pub fn reseed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..N {
            let prev = self.state[i - 1];
            self.state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = N;
    }

    /// Draws the next 32-bit word, regenerating the 624-word block when the
    /// cursor is exhausted.
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            if self.index == N + 1 {
                self.reseed(DEFAULT_SEED);
            }
            self.twist();
        }

        let mut y = self.state[self.index];
        self.index += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    /// Draws a real in `[0, 1)` as `next_u32() / 2^32`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) * (1.0 / 4_294_967_296.0)
    }

    /// Draws a real uniformly in `[lower, upper)`.
    pub fn uniform(&mut self, lower: f64, upper: f64) -> f64 {
        lower + (upper - lower) * self.next_f64()
    }

    /// Fills `out` with independent uniform draws in `[lower, upper)`,
    /// component 0 first.
    pub fn fill_uniform(&mut self, out: &mut [f64], lower: f64, upper: f64) {
        for value in out.iter_mut() {
            *value = self.uniform(lower, upper);
        }
    }

    fn twist(&mut self) {
        for kk in 0..N - M {
            let y = (self.state[kk] & UPPER_MASK) | (self.state[kk + 1] & LOWER_MASK);
            self.state[kk] = self.state[kk + M] ^ (y >> 1) ^ mag(y);
        }
        for kk in N - M..N - 1 {
            let y = (self.state[kk] & UPPER_MASK) | (self.state[kk + 1] & LOWER_MASK);
            self.state[kk] = self.state[kk + M - N] ^ (y >> 1) ^ mag(y);
        }
        let y = (self.state[N - 1] & UPPER_MASK) | (self.state[0] & LOWER_MASK);
        self.state[N - 1] = self.state[M - 1] ^ (y >> 1) ^ mag(y);

        self.index = 0;
    }
}

#[inline]
fn mag(y: u32) -> u32 {
    if y & 1 == 1 {
        MATRIX_A
    } else {
        0
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        Mt19937::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(Mt19937::next_u32(self));
        let hi = u64::from(Mt19937::next_u32(self));
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = Mt19937::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seeded(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // Reference outputs of the MT19937 algorithm for init_genrand(1).
    const SEED_1_OUTPUTS: [u32; 5] = [
        1_791_095_845,
        4_282_876_139,
        3_093_770_124,
        4_005_303_368,
        491_263,
    ];

    // Reference outputs for the default seed 5489.
    const SEED_5489_OUTPUTS: [u32; 5] = [
        3_499_211_612,
        581_869_302,
        3_890_346_734,
        3_586_334_585,
        545_404_204,
    ];

    #[test]
    fn test_known_outputs_seed_1() {
        let mut rng = Mt19937::seeded(1);
        for &expected in &SEED_1_OUTPUTS {
            assert_eq!(rng.next_u32(), expected);
        }
    }

    #[test]
    fn test_unseeded_stream_uses_default_seed() {
        let mut implicit = Mt19937::new();
        for &expected in &SEED_5489_OUTPUTS {
            assert_eq!(implicit.next_u32(), expected);
        }

        // The fallback stream continues exactly like an explicitly seeded one.
        let mut explicit = Mt19937::seeded(5489);
        for _ in 0..SEED_5489_OUTPUTS.len() {
            explicit.next_u32();
        }
        assert_eq!(implicit.next_u32(), explicit.next_u32());
    }

    #[test]
    fn test_streams_agree_across_block_boundary() {
        let mut a = Mt19937::seeded(12345);
        let mut b = Mt19937::seeded(12345);
        // Crosses the 624-word regeneration twice.
        for _ in 0..1500 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut rng = Mt19937::seeded(7);
        let first: Vec<u32> = (0..10).map(|_| rng.next_u32()).collect();
        rng.reseed(7);
        let second: Vec<u32> = (0..10).map(|_| rng.next_u32()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_next_f64_unit_interval() {
        let mut rng = Mt19937::seeded(99);
        for _ in 0..1000 {
            let u = rng.next_f64();
            assert!((0.0..1.0).contains(&u), "expected [0,1), got {u}");
        }
    }

    #[test]
    fn test_next_f64_matches_scaled_u32() {
        let mut ints = Mt19937::seeded(2024);
        let mut reals = Mt19937::seeded(2024);
        for _ in 0..100 {
            let expected = f64::from(ints.next_u32()) / 4_294_967_296.0;
            assert_eq!(reals.next_f64(), expected);
        }
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = Mt19937::seeded(3);
        for _ in 0..1000 {
            let v = rng.uniform(-5.0, 5.0);
            assert!((-5.0..5.0).contains(&v), "expected [-5,5), got {v}");
        }
    }

    #[test]
    fn test_fill_uniform_draw_order() {
        let mut filled = Mt19937::seeded(11);
        let mut manual = Mt19937::seeded(11);

        let mut buf = [0.0; 8];
        filled.fill_uniform(&mut buf, -2.0, 3.0);
        for &v in &buf {
            assert_eq!(v, manual.uniform(-2.0, 3.0));
        }
    }

    #[test]
    fn test_rand_trait_interop() {
        // The stream plugs into rand-generic code; range draws consume it.
        let mut rng = Mt19937::from_seed(42u32.to_le_bytes());
        let before = rng.clone().next_u32();
        let v: f64 = rng.random_range(0.0..1.0);
        assert!((0.0..1.0).contains(&v));
        assert_ne!(rng.clone().next_u32(), before);
    }

    #[test]
    fn test_seed_zero_is_valid() {
        let mut a = Mt19937::seeded(0);
        let mut b = Mt19937::seeded(0);
        assert_eq!(a.next_u32(), b.next_u32());
    }
}
