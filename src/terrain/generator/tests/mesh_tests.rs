use crate::terrain::generator::{build_mesh, write_obj, HeightmapGenerator};
use crate::terrain::grid::HeightGrid;
use log::debug;
use test_case::test_case;

fn obj_text(grid: &HeightGrid, name: &str) -> String {
    let mesh = build_mesh(grid);
    let mut buf = Vec::new();
    write_obj(&mesh, name, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("OBJ output should be valid UTF-8")
}

fn count_lines(text: &str, prefix: &str) -> usize {
    text.lines().filter(|line| line.starts_with(prefix)).count()
}

#[test_case(4, 4, 16, 9)]
#[test_case(3, 2, 6, 2)]
#[test_case(2, 3, 6, 2)]
#[test_case(5, 3, 15, 8)]
#[test_case(1, 5, 5, 0)]
#[test_case(5, 1, 5, 0)]
#[test_case(1, 1, 1, 0)]
fn test_mesh_counts(width: usize, height: usize, vertices: usize, faces: usize) {
    let grid = HeightGrid::new(width, height);
    let mesh = build_mesh(&grid);
    assert_eq!(mesh.vertices.len(), vertices);
    assert_eq!(mesh.faces.len(), faces);
}

#[test]
fn test_face_indices_form_quads() {
    let grid = HeightGrid::new(7, 4);
    let mesh = build_mesh(&grid);
    let width = 7_u32;
    let total = 28_u32;

    assert_eq!(mesh.faces.len(), 6 * 3);
    for face in &mesh.faces {
        let i = face[0];
        assert_eq!(face[1], i + 1);
        assert_eq!(face[2], i + width + 1);
        assert_eq!(face[3], i + width);
        assert_ne!(i % width, 0, "no face may start on the last column");
        for &idx in face {
            assert!(idx >= 1 && idx <= total);
        }
    }
}

#[test]
fn test_vertex_records_row_major() {
    let grid = HeightGrid::from_vec(vec![0.5, 1.5, 2.5, 3.5], 2, 2);
    let text = obj_text(&grid, "patch");

    let vertex_lines: Vec<&str> = text.lines().filter(|l| l.starts_with("v ")).collect();
    assert_eq!(
        vertex_lines,
        vec!["v 0 0.5 0", "v 1 1.5 0", "v 0 2.5 1", "v 1 3.5 1"]
    );
}

#[test]
fn test_obj_header_and_sections() {
    let grid = HeightGrid::new(2, 2);
    let text = obj_text(&grid, "hills");

    assert!(text.starts_with("# "));
    assert!(text.contains("\no hills\n"));
    assert!(text.contains("# Vertices:"));
    assert!(text.contains("# Faces:"));
}

#[test]
fn test_two_by_two_export() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut generator = HeightmapGenerator::new(2, 2);
    generator.set_seed(42);
    generator.set_deepness(10.0);
    generator.set_power(1.0);
    generator.set_details(1.0);

    for &height in generator.grid().as_slice() {
        assert!((0.0..=10.0).contains(&height));
    }

    let text = obj_text(generator.grid(), "sample");
    debug!("2x2 OBJ output:\n{}", text);

    assert_eq!(count_lines(&text, "v "), 4);
    assert_eq!(count_lines(&text, "f "), 1);
    let face_line = text
        .lines()
        .find(|l| l.starts_with("f "))
        .expect("one face line");
    assert_eq!(face_line, "f 1 2 4 3");
}

#[test]
fn test_export_writes_and_overwrites_file() {
    let name = std::env::temp_dir()
        .join(format!("noisemap_export_{}", std::process::id()))
        .to_string_lossy()
        .into_owned();
    let path = format!("{}.obj", name);

    let mut generator = HeightmapGenerator::new(3, 3);
    generator.export_mesh(&name).expect("export should succeed");
    let first = std::fs::read_to_string(&path).expect("exported file should exist");
    assert_eq!(count_lines(&first, "v "), 9);
    assert_eq!(count_lines(&first, "f "), 4);

    // A second export replaces the file wholesale.
    generator.set_seed(99);
    generator.export_mesh(&name).expect("re-export should succeed");
    let second = std::fs::read_to_string(&path).expect("exported file should exist");
    assert_eq!(count_lines(&second, "v "), 9);
    assert_ne!(first, second);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_mesh_elevation_matches_grid() {
    let mut generator = HeightmapGenerator::new(4, 3);
    generator.set_seed(7);
    let mesh = build_mesh(generator.grid());

    for y in 0..3 {
        for x in 0..4 {
            let vertex = mesh.vertices[y * 4 + x];
            assert_eq!(vertex.x, x as f32);
            assert_eq!(vertex.y, generator.grid().get(x, y));
            assert_eq!(vertex.z, y as f32);
        }
    }
}
