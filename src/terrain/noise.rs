// src/terrain/noise.rs

use noise::{NoiseFn, Perlin};
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Scale applied to sample coordinates before hitting the Perlin lattice.
/// Grid coordinates are integers; unscaled they would land exactly on
/// lattice points, where Perlin noise is zero everywhere.
const BASE_FREQUENCY: f32 = 0.01;

/// A seeded, deterministic 2-D noise sampler.
///
/// Any implementation returning values in `[-1, 1]` can back a heightmap
/// generator; the generator never depends on a concrete noise algorithm.
pub trait NoiseSource {
    fn reseed(&mut self, seed: i32);

    /// Sample at `(x, y)`. Must be a pure function of the coordinates and
    /// the last seed passed to [`NoiseSource::reseed`].
    fn sample(&self, x: f32, y: f32) -> f32;
}

/// Default [`NoiseSource`] backed by `noise::Perlin`.
pub struct PerlinSource {
    perlin: Perlin,
}

impl PerlinSource {
    pub fn new(seed: i32) -> Self {
        Self {
            perlin: Perlin::new(seed as u32),
        }
    }
}

impl NoiseSource for PerlinSource {
    fn reseed(&mut self, seed: i32) {
        self.perlin = Perlin::new(seed as u32);
    }

    fn sample(&self, x: f32, y: f32) -> f32 {
        let sample_x = (x * BASE_FREQUENCY) as f64;
        let sample_y = (y * BASE_FREQUENCY) as f64;
        self.perlin.get([sample_x, sample_y]) as f32
    }
}

/// Source of seeds for "randomize" requests. Production code uses
/// [`SystemSeedSource`]; tests can substitute a fixed sequence.
pub trait SeedSource {
    fn next_seed(&mut self) -> i32;
}

/// Draws from the thread-local RNG mixed with wall-clock seconds.
/// Not reproducible; only for callers that want any fresh terrain.
#[derive(Default)]
pub struct SystemSeedSource;

impl SeedSource for SystemSeedSource {
    fn next_seed(&mut self) -> i32 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        rand::thread_rng().gen::<i32>() ^ now as i32
    }
}
