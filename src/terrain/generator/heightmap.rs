// src/terrain/generator/heightmap.rs

use log::debug;

use crate::terrain::config::GeneratorConfig;
use crate::terrain::generator::mesh::{self, ExportError};
use crate::terrain::grid::HeightGrid;
use crate::terrain::noise::{NoiseSource, PerlinSource, SeedSource, SystemSeedSource};

/// `power` and `details` must stay strictly positive; inputs at or below
/// zero are substituted with this epsilon instead of rejected.
const MIN_PARAM: f32 = 1e-4;

const DEFAULT_SEED: i32 = 0;
const DEFAULT_DEEPNESS: f32 = 100.0;
const DEFAULT_POWER: f32 = 1.0;
const DEFAULT_DETAILS: f32 = 1.0;

/// Owns the shaping parameters and the elevation grid.
///
/// Every mutator recomputes the whole grid before returning, so the grid a
/// reader borrows always reflects the current parameters. Per-cell formula:
/// the noise sample at `(x / details, y / details)` is normalized from
/// `[-1, 1]` to `[0, 1]`, raised to `power`, then scaled by `deepness`.
pub struct HeightmapGenerator<N: NoiseSource = PerlinSource> {
    noise: N,
    grid: HeightGrid,
    seed: i32,
    deepness: f32,
    power: f32,
    details: f32,
}

impl HeightmapGenerator<PerlinSource> {
    /// Dimensions at or below zero are clamped to 1.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_noise(width, height, PerlinSource::new(DEFAULT_SEED))
    }

    pub fn from_config(cfg: &GeneratorConfig) -> Self {
        let mut generator = Self::new(cfg.width, cfg.height);
        generator.seed = cfg.seed;
        generator.deepness = cfg.deepness;
        generator.power = clamp_param(cfg.power);
        generator.details = clamp_param(cfg.details);
        generator.regenerate();
        generator
    }
}

impl<N: NoiseSource> HeightmapGenerator<N> {
    /// Build a generator on any noise implementation.
    pub fn with_noise(width: i32, height: i32, noise: N) -> Self {
        let mut generator = Self {
            noise,
            grid: HeightGrid::new(clamp_dim(width), clamp_dim(height)),
            seed: DEFAULT_SEED,
            deepness: DEFAULT_DEEPNESS,
            power: DEFAULT_POWER,
            details: DEFAULT_DETAILS,
        };
        generator.regenerate();
        generator
    }

    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
        self.regenerate();
    }

    /// Reseed from a non-deterministic system source.
    pub fn randomize_seed(&mut self) {
        self.randomize_seed_from(&mut SystemSeedSource);
    }

    /// Reseed from a caller-supplied source; lets tests inject fixed seeds.
    pub fn randomize_seed_from(&mut self, source: &mut dyn SeedSource) {
        self.set_seed(source.next_seed());
    }

    pub fn set_deepness(&mut self, deepness: f32) {
        self.deepness = deepness;
        self.regenerate();
    }

    pub fn set_power(&mut self, power: f32) {
        self.power = clamp_param(power);
        self.regenerate();
    }

    pub fn set_details(&mut self, details: f32) {
        self.details = clamp_param(details);
        self.regenerate();
    }

    /// Reallocate the grid at the new dimensions, then regenerate with the
    /// current seed and shaping parameters.
    pub fn set_shape(&mut self, width: i32, height: i32) {
        self.grid = HeightGrid::new(clamp_dim(width), clamp_dim(height));
        self.regenerate();
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn deepness(&self) -> f32 {
        self.deepness
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn details(&self) -> f32 {
        self.details
    }

    pub fn shape(&self) -> (usize, usize) {
        self.grid.shape()
    }

    /// Read-only view of the current elevation grid.
    pub fn grid(&self) -> &HeightGrid {
        &self.grid
    }

    /// Write the current grid as `<name>.obj` in the working directory.
    pub fn export_mesh(&self, name: &str) -> Result<(), ExportError> {
        mesh::export_obj(&self.grid, name)
    }

    // Every mutator funnels here: the whole grid is recomputed from the
    // noise primitive, never patched in place.
    fn regenerate(&mut self) {
        self.noise.reseed(self.seed);
        let (width, height) = self.grid.shape();
        for y in 0..height {
            for x in 0..width {
                let n = self
                    .noise
                    .sample(x as f32 / self.details, y as f32 / self.details);
                let normalized = ((n + 1.0) / 2.0).clamp(0.0, 1.0);
                self.grid.set(x, y, normalized.powf(self.power) * self.deepness);
            }
        }
        debug!("regenerated {}x{} grid with seed {}", width, height, self.seed);
    }
}

fn clamp_dim(dim: i32) -> usize {
    dim.max(1) as usize
}

fn clamp_param(value: f32) -> f32 {
    if value <= 0.0 {
        MIN_PARAM
    } else {
        value
    }
}
