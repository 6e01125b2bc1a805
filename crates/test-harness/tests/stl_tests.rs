//! Tests for the STL fixture encoders.

use test_harness::helpers::{cube, single_triangle};
use test_harness::stl::{binary_with_declared_count, encode_ascii_stl, encode_binary_stl};

#[test]
fn binary_stl_header_is_80_bytes() {
    let stl = encode_binary_stl(&single_triangle(), "test").unwrap();
    assert!(stl.len() >= 80, "Binary STL must be at least 80 bytes");
    let header = String::from_utf8_lossy(&stl[..80]);
    assert!(header.contains("test"), "Header should contain solid name");
}

#[test]
fn binary_stl_file_size_formula() {
    let mesh = cube(10.0);
    let stl = encode_binary_stl(&mesh, "box").unwrap();
    let expected_size = 80 + 4 + mesh.triangle_count() * 50;
    assert_eq!(stl.len(), expected_size);
}

#[test]
fn binary_stl_triangle_count_matches() {
    let mesh = cube(10.0);
    let stl = encode_binary_stl(&mesh, "box").unwrap();
    let tri_count = u32::from_le_bytes([stl[80], stl[81], stl[82], stl[83]]);
    assert_eq!(tri_count as usize, mesh.triangle_count());
}

#[test]
fn binary_stl_writes_first_vertex_after_normal() {
    let stl = encode_binary_stl(&single_triangle(), "tri").unwrap();
    // v1 = (10, 0, 0) sits at 84 + 12 (normal) + 12 (v0).
    let x = f32::from_le_bytes([stl[108], stl[109], stl[110], stl[111]]);
    assert_eq!(x, 10.0);
}

#[test]
fn ascii_stl_has_correct_keywords() {
    let stl = encode_ascii_stl(&single_triangle(), "test_solid").unwrap();
    assert!(stl.starts_with("solid test_solid\n"));
    assert!(stl.ends_with("endsolid test_solid\n"));
    assert!(stl.contains("facet normal"));
    assert!(stl.contains("outer loop"));
    assert_eq!(stl.matches("vertex").count(), 3);
}

#[test]
fn empty_mesh_returns_error() {
    let mesh = mesh_types::Mesh::new();
    assert!(encode_binary_stl(&mesh, "empty").is_err());
    assert!(encode_ascii_stl(&mesh, "empty").is_err());
}

#[test]
fn declared_count_buffer_has_requested_length() {
    let buf = binary_with_declared_count(7, 2);
    assert_eq!(buf.len(), 84 + 100);
    assert_eq!(u32::from_le_bytes([buf[80], buf[81], buf[82], buf[83]]), 7);
}
