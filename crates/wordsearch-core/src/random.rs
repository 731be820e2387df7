//! Deterministic random sources for puzzle generation
//!
//! Every draw made while building a puzzle goes through a [`RandomSource`]
//! passed in by the caller, so a fixed seed reproduces the same grid.

/// Seed used when the caller does not pick one
pub const DEFAULT_SEED: u64 = 10;

/// A source of uniformly distributed draws
pub trait RandomSource {
    /// Next index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Next lowercase letter in `a..=z`
    fn next_letter(&mut self) -> char {
        (b'a' + self.next_index(26) as u8) as char
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }

    fn next_letter(&mut self) -> char {
        (**self).next_letter()
    }
}

/// Small seeded PRNG with no platform dependencies
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    /// Seed from the operating system, falling back to a process counter
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like step
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for SeededRng {
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.next_u64() as usize) % bound
    }
}

/// A seed drawn from the operating system
pub fn entropy_seed() -> u64 {
    let mut seed_bytes = [0u8; 8];
    getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
        static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
        let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        seed_bytes = counter.to_le_bytes();
    });
    u64::from_le_bytes(seed_bytes)
}

/// Replays a fixed list of draws, for tests that need to steer each step
///
/// Each draw takes the next scripted value modulo the requested bound and
/// the script wraps around once exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<usize>,
    cursor: usize,
    draws: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "scripted sequence must not be empty");
        Self {
            values,
            cursor: 0,
            draws: 0,
        }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        self.draws += 1;
        value % bound
    }
}
