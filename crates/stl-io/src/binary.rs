use mesh_types::Mesh;
use tracing::debug;

use crate::detect::{expected_binary_len, PREAMBLE_LEN, TRIANGLE_RECORD_LEN};
use crate::error::StlError;

/// Byte offset of the first vertex inside a triangle record (after the normal).
const VERTEX_OFFSET: usize = 12;

/// Read `triangles` binary records following the 84-byte preamble.
///
/// Record layout:
/// - 12 bytes: facet normal (3 × f32 LE), ignored
/// - 36 bytes: 3 vertices (3 × 3 × f32 LE)
/// - 2 bytes: attribute byte count, ignored
pub fn parse_binary(bytes: &[u8], triangles: u32) -> Result<Mesh, StlError> {
    if triangles == 0 {
        return Err(StlError::EmptyMesh);
    }

    let needed = usize::try_from(expected_binary_len(triangles)).unwrap_or(usize::MAX);
    let body = bytes
        .get(PREAMBLE_LEN..needed)
        .ok_or(StlError::Truncated {
            needed,
            len: bytes.len(),
        })?;

    let mut mesh = Mesh::with_capacity(triangles as usize);
    for record in body.chunks_exact(TRIANGLE_RECORD_LEN) {
        for corner in 0..3 {
            let offset = VERTEX_OFFSET + corner * 12;
            let position = [
                read_f32(record, offset),
                read_f32(record, offset + 4),
                read_f32(record, offset + 8),
            ];
            if position.iter().any(|c| !c.is_finite()) {
                return Err(StlError::NonFinite {
                    index: mesh.vertex_count(),
                });
            }
            mesh.push_vertex(position);
        }
    }

    debug!(triangles, "binary STL records read");
    Ok(mesh)
}

fn read_f32(record: &[u8], offset: usize) -> f64 {
    f32::from_le_bytes([
        record[offset],
        record[offset + 1],
        record[offset + 2],
        record[offset + 3],
    ]) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(corners: [[f32; 3]; 3]) -> Vec<u8> {
        let mut out = vec![0u8; 12];
        for c in corners {
            for v in c {
                out.extend_from_slice(&v.to_le_bytes());
            }
        }
        out.extend_from_slice(&0u16.to_le_bytes());
        out
    }

    fn file(records: &[Vec<u8>]) -> Vec<u8> {
        let mut buf = vec![0u8; 80];
        buf.extend_from_slice(&(records.len() as u32).to_le_bytes());
        for r in records {
            buf.extend_from_slice(r);
        }
        buf
    }

    #[test]
    fn reads_vertices_skipping_normal_and_attribute() {
        let buf = file(&[record([[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 10.0, 0.0]])]);
        let mesh = parse_binary(&buf, 1).unwrap();
        assert_eq!(mesh.vertices(), &[0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 10.0, 0.0]);
        assert_eq!(mesh.indices(), &[0, 1, 2]);
    }

    #[test]
    fn zero_triangles_is_empty_mesh() {
        let buf = file(&[]);
        assert_eq!(parse_binary(&buf, 0), Err(StlError::EmptyMesh));
    }

    #[test]
    fn short_body_is_truncated() {
        let mut buf = file(&[record([[0.0; 3]; 3])]);
        buf.truncate(buf.len() - 1);
        assert_eq!(
            parse_binary(&buf, 1),
            Err(StlError::Truncated {
                needed: 134,
                len: 133
            })
        );
    }

    #[test]
    fn nan_coordinate_is_rejected() {
        let buf = file(&[
            record([[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]),
            record([[0.0; 3], [f32::NAN, 0.0, 0.0], [0.0, 1.0, 0.0]]),
        ]);
        assert_eq!(parse_binary(&buf, 2), Err(StlError::NonFinite { index: 4 }));
    }
}
