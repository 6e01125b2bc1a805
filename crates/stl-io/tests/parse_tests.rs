//! End-to-end parser tests against encoded fixtures.

use proptest::prelude::*;

use stl_io::{detect_format, parse, parse_file, StlError, StlFormat};
use test_harness::helpers::{axis_box, cube, single_triangle};
use test_harness::stl::{binary_with_declared_count, encode_ascii_stl, encode_binary_stl};

#[test]
fn binary_single_triangle() {
    let bytes = encode_binary_stl(&single_triangle(), "tri").unwrap();
    assert_eq!(bytes.len(), 134);
    assert_eq!(detect_format(&bytes), StlFormat::Binary { triangles: 1 });

    let mesh = parse(&bytes).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(
        mesh.vertices(),
        &[0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 10.0, 0.0]
    );
}

#[test]
fn ascii_and_binary_agree() {
    let source = axis_box([-1.5, 2.0, 0.0], [4.0, 8.25, 3.5]);
    let from_binary = parse(&encode_binary_stl(&source, "b").unwrap()).unwrap();
    let from_ascii = parse(encode_ascii_stl(&source, "a").unwrap().as_bytes()).unwrap();
    assert_eq!(from_binary.vertices(), from_ascii.vertices());
    assert_eq!(from_binary.indices(), from_ascii.indices());
    assert_ne!(from_binary.id(), from_ascii.id());
}

#[test]
fn length_mismatch_goes_to_text_path() {
    // Declares 3 triangles but only carries 2 records: not binary, and the
    // zeroed bytes contain no vertex keyword.
    let bytes = binary_with_declared_count(3, 2);
    assert_eq!(detect_format(&bytes), StlFormat::Ascii);
    assert_eq!(parse(&bytes), Err(StlError::NoGeometry));
}

#[test]
fn ascii_with_binary_length_is_read_as_binary() {
    // 84 + 50 bytes: whatever the content, the size rule wins.
    let mut text = String::from("solid t\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\n");
    text.push_str(&" ".repeat(134 - text.len()));
    let mut bytes = text.into_bytes();
    bytes[80..84].copy_from_slice(&1u32.to_le_bytes());
    assert_eq!(detect_format(&bytes), StlFormat::Binary { triangles: 1 });
}

#[test]
fn zero_triangle_binary_is_rejected() {
    let bytes = binary_with_declared_count(0, 0);
    assert_eq!(parse(&bytes), Err(StlError::EmptyMesh));
}

#[test]
fn noise_without_keywords_is_no_geometry() {
    let mut state: u32 = 0x2545_f491;
    let bytes: Vec<u8> = (0..1000)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            match (state >> 24) as u8 {
                b'v' => b'w',
                b => b,
            }
        })
        .collect();
    let err = parse(&bytes).unwrap_err();
    assert_eq!(err, StlError::NoGeometry);
    assert_eq!(err.user_message(), "No geometry found in file.");
}

#[test]
fn parse_file_keeps_name_and_size() {
    let bytes = encode_binary_stl(&cube(10.0), "cube").unwrap();
    let (mesh, meta) = parse_file("Cube.STL", &bytes).unwrap();
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(meta.name, "Cube.STL");
    assert_eq!(meta.size_bytes, 84 + 12 * 50);
}

proptest! {
    #[test]
    fn binary_cardinality(triangles in 1u32..64) {
        let bytes = binary_with_declared_count(triangles, triangles as usize);
        let mesh = parse(&bytes).unwrap();
        prop_assert_eq!(mesh.triangle_count(), triangles as usize);
        prop_assert_eq!(mesh.vertex_count(), 3 * triangles as usize);
        prop_assert_eq!(mesh.indices().len(), mesh.vertices().len() / 3);
    }

    #[test]
    fn detection_follows_length(declared in 0u32..40, records in 0usize..40) {
        let bytes = binary_with_declared_count(declared, records);
        let expected = if declared as usize == records {
            StlFormat::Binary { triangles: declared }
        } else {
            StlFormat::Ascii
        };
        prop_assert_eq!(detect_format(&bytes), expected);
    }

    #[test]
    fn arbitrary_bytes_never_yield_non_finite_mesh(bytes in proptest::collection::vec(any::<u8>(), 0..600)) {
        if let Ok(mesh) = parse(&bytes) {
            prop_assert!(!mesh.is_empty());
            prop_assert_eq!(mesh.vertex_count() % 3, 0);
            prop_assert!(mesh.vertices().iter().all(|v| v.is_finite()));
        }
    }
}
