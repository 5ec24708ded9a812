mod heightmap;
mod mesh;

pub use heightmap::HeightmapGenerator;
pub use mesh::{build_mesh, export_obj, write_obj, ExportError, ObjMesh};

#[cfg(test)]
mod tests;
