use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::games::snake::{Cell, GridSize, Rgb};

/// Seeded source for everything random in a session: food placement and
/// per-game colors. The same seed replays the same sequence.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Uniform over `[0, width) x [0, height)`.
    pub fn random_cell(&mut self, grid: GridSize) -> Cell {
        let x = self.rng.random_range(0..grid.width.max(1));
        let y = self.rng.random_range(0..grid.height.max(1));
        Cell::new(x, y)
    }

    pub fn random_rgb(&mut self) -> Rgb {
        Rgb::new(self.rng.random(), self.rng.random(), self.rng.random())
    }
}
