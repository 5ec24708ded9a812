// src/terrain/generator/mesh.rs

use log::info;
use nalgebra::Vector3;
use std::fs::File;
use std::io::{BufWriter, Write};
use thiserror::Error;

use crate::terrain::grid::HeightGrid;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write mesh: {0}")]
    Io(#[from] std::io::Error),
}

/// An indexed quad mesh derived from an elevation grid.
pub struct ObjMesh {
    /// One `(x, elevation, y)` vertex per grid cell, row-major. Elevation
    /// sits on the mesh Y axis, the grid row index on the mesh Z axis.
    pub vertices: Vec<Vector3<f32>>,
    /// 1-based vertex indices, one quad per interior 2x2 cell block.
    pub faces: Vec<[u32; 4]>,
}

/// Build the vertex and face records for `grid`.
///
/// The 1-based index of cell `(x, y)` is `y * width + x + 1`. Each quad
/// spans the 2x2 block whose top-left corner is index `i`:
/// `i, i+1, i+width+1, i+width`. Indices on the last column of a row are
/// skipped so no quad wraps into the next row, and the walk stops once
/// `i + width` would pass the last vertex, so a `w x h` grid always yields
/// `(w-1) * (h-1)` quads.
pub fn build_mesh(grid: &HeightGrid) -> ObjMesh {
    let (width, height) = grid.shape();

    let mut vertices = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            vertices.push(Vector3::new(x as f32, grid.get(x, y), y as f32));
        }
    }

    let total = width * height;
    let mut faces = Vec::new();
    for i in 1..=total {
        if i + width > total {
            break;
        }
        if i % width == 0 {
            continue;
        }
        faces.push([
            i as u32,
            (i + 1) as u32,
            (i + width + 1) as u32,
            (i + width) as u32,
        ]);
    }

    ObjMesh { vertices, faces }
}

/// Serialize `mesh` as Wavefront OBJ text: a header comment, the object
/// name, then blank-line-separated vertex and face sections.
pub fn write_obj<W: Write>(mesh: &ObjMesh, name: &str, out: &mut W) -> Result<(), ExportError> {
    writeln!(out, "# This is an OBJ file created with noisemap.")?;
    writeln!(out)?;
    writeln!(out, "o {}", name)?;
    writeln!(out)?;
    writeln!(out, "# Vertices:")?;
    writeln!(out)?;
    for v in &mesh.vertices {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    writeln!(out)?;
    writeln!(out, "# Faces:")?;
    writeln!(out)?;
    for face in &mesh.faces {
        writeln!(out, "f {} {} {} {}", face[0], face[1], face[2], face[3])?;
    }
    Ok(())
}

/// Write `grid` as `<name>.obj` in the working directory, replacing any
/// existing file. One call performs one complete write.
pub fn export_obj(grid: &HeightGrid, name: &str) -> Result<(), ExportError> {
    info!("converting grid to {}.obj", name);
    let mesh = build_mesh(grid);
    let file = File::create(format!("{}.obj", name))?;
    let mut out = BufWriter::new(file);
    write_obj(&mesh, name, &mut out)?;
    out.flush()?;
    Ok(())
}
