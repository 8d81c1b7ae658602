use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies the initial state of cells, one cell at a time in row-major order.
pub trait CellSource {
    fn next_cell(&mut self) -> bool;
}

impl<F: FnMut() -> bool> CellSource for F {
    fn next_cell(&mut self) -> bool {
        self()
    }
}

/// Random cells with a fixed probability of being alive.
pub struct RandomSource {
    rng: ChaCha8Rng,
    fill_rate: f64,
}

impl RandomSource {
    pub const DEFAULT_FILL_RATE: f64 = 0.5;

    /// `seed` - random seed (if `None`, then random seed is generated)
    ///
    /// `fill_rate` is clamped to `[0, 1]`.
    pub fn new(seed: Option<u64>, fill_rate: f64) -> Self {
        let rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let fill_rate = if fill_rate.is_nan() {
            Self::DEFAULT_FILL_RATE
        } else {
            fill_rate.clamp(0., 1.)
        };
        Self { rng, fill_rate }
    }

    /// A fair coin seeded from entropy.
    pub fn fair() -> Self {
        Self::new(None, Self::DEFAULT_FILL_RATE)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed), Self::DEFAULT_FILL_RATE)
    }

    pub fn fill_rate(&self) -> f64 {
        self.fill_rate
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::fair()
    }
}

impl CellSource for RandomSource {
    fn next_cell(&mut self) -> bool {
        self.rng.gen_bool(self.fill_rate)
    }
}
