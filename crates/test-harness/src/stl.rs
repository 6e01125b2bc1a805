//! Binary and ASCII STL encoders for building parser inputs.

use mesh_types::Mesh;
use nalgebra::{Point3, Vector3};

use crate::helpers::HarnessError;

/// Encode a mesh as a binary STL file.
///
/// Binary STL format:
/// - 80-byte header (arbitrary text)
/// - u32 triangle count (little-endian)
/// - For each triangle: 3×f32 normal + 3×(3×f32 vertex) + u16 attribute = 50 bytes
pub fn encode_binary_stl(mesh: &Mesh, name: &str) -> Result<Vec<u8>, HarnessError> {
    let tri_count = mesh.triangle_count();
    if tri_count == 0 {
        return Err(HarnessError::StlError {
            reason: "mesh has no triangles".to_string(),
        });
    }

    let file_size = 80 + 4 + tri_count * 50;
    let mut buf = Vec::with_capacity(file_size);

    // 80-byte header
    let header = format!("binary STL: {}", name);
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);

    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for tri in mesh.triangles() {
        let normal = facet_normal(&tri);
        for c in normal.iter() {
            buf.extend_from_slice(&(*c as f32).to_le_bytes());
        }
        for corner in &tri {
            buf.extend_from_slice(&(corner.x as f32).to_le_bytes());
            buf.extend_from_slice(&(corner.y as f32).to_le_bytes());
            buf.extend_from_slice(&(corner.z as f32).to_le_bytes());
        }
        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}

/// Encode a mesh as an ASCII STL string.
pub fn encode_ascii_stl(mesh: &Mesh, name: &str) -> Result<String, HarnessError> {
    let tri_count = mesh.triangle_count();
    if tri_count == 0 {
        return Err(HarnessError::StlError {
            reason: "mesh has no triangles".to_string(),
        });
    }

    let mut out = String::with_capacity(tri_count * 300);
    out.push_str(&format!("solid {}\n", name));

    for tri in mesh.triangles() {
        let n = facet_normal(&tri);
        out.push_str(&format!("  facet normal {} {} {}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for corner in &tri {
            out.push_str(&format!(
                "      vertex {} {} {}\n",
                corner.x, corner.y, corner.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {}\n", name));
    Ok(out)
}

/// Binary STL with an arbitrary declared triangle count and `records` zeroed triangles.
///
/// Lets tests produce buffers whose length does or does not match the header.
pub fn binary_with_declared_count(declared: u32, records: usize) -> Vec<u8> {
    let mut buf = vec![0u8; 80];
    buf.extend_from_slice(&declared.to_le_bytes());
    buf.resize(84 + records * 50, 0u8);
    buf
}

fn facet_normal(tri: &[Point3<f64>; 3]) -> Vector3<f64> {
    let n = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));
    let len = n.norm();
    if len > 1e-12 {
        n / len
    } else {
        Vector3::z()
    }
}
