// src/lib.rs

//! Seeded-noise heightmap generation with Wavefront OBJ export.
//!
//! A [`HeightmapGenerator`] owns its configuration and a row-major elevation
//! grid; every configuration change regenerates the whole grid from the
//! noise primitive. The finished grid can be serialized as an indexed quad
//! mesh in OBJ plain text.
//!
//! ```no_run
//! use noisemap::HeightmapGenerator;
//!
//! let mut terrain = HeightmapGenerator::new(64, 64);
//! terrain.set_seed(42);
//! terrain.set_deepness(25.0);
//! terrain.set_details(4.0);
//! terrain.export_mesh("island")?;
//! # Ok::<(), noisemap::ExportError>(())
//! ```

pub mod terrain;

pub use terrain::config::{load_config_from_path, ConfigError, GeneratorConfig};
pub use terrain::generator::{
    build_mesh, export_obj, write_obj, ExportError, HeightmapGenerator, ObjMesh,
};
pub use terrain::grid::HeightGrid;
pub use terrain::noise::{NoiseSource, PerlinSource, SeedSource, SystemSeedSource};
