use serde::{Deserialize, Serialize};

/// Opaque header preceding the triangle count in a binary STL.
pub const HEADER_LEN: usize = 80;
/// Header plus the little-endian `u32` triangle count.
pub const PREAMBLE_LEN: usize = HEADER_LEN + 4;
/// Normal (12) + three vertices (36) + attribute byte count (2).
pub const TRIANGLE_RECORD_LEN: usize = 50;

/// Encoding of an STL buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StlFormat {
    Binary { triangles: u32 },
    Ascii,
}

/// The triangle count stored after the 80-byte header, if the buffer is long enough.
pub fn declared_triangle_count(bytes: &[u8]) -> Option<u32> {
    let raw = bytes.get(HEADER_LEN..PREAMBLE_LEN)?;
    Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

/// Byte length a binary STL with `triangles` faces must have.
pub fn expected_binary_len(triangles: u32) -> u64 {
    PREAMBLE_LEN as u64 + triangles as u64 * TRIANGLE_RECORD_LEN as u64
}

/// Binary iff the buffer length equals `84 + 50 * T` exactly; everything else is text.
///
/// Content is never inspected: an ASCII file that happens to start with `solid`
/// but has the binary length is still binary.
pub fn detect_format(bytes: &[u8]) -> StlFormat {
    match declared_triangle_count(bytes) {
        Some(triangles) if bytes.len() as u64 == expected_binary_len(triangles) => {
            StlFormat::Binary { triangles }
        }
        _ => StlFormat::Ascii,
    }
}
