use mesh_types::Mesh;
use tracing::{debug, warn};

use crate::error::StlError;

const VERTEX_KEYWORD: &str = "vertex";

/// Collect every `vertex x y z` line; all other lines are ignored.
///
/// `solid`, `facet`, `outer loop` and their terminators are not validated.
/// A vertex line with the wrong number of tokens or a token that is not a
/// finite number is skipped. A trailing incomplete triangle is dropped.
pub fn parse_ascii(text: &str) -> Result<Mesh, StlError> {
    let mut mesh = Mesh::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        let trimmed = line.trim();
        if !trimmed.starts_with(VERTEX_KEYWORD) {
            continue;
        }
        match parse_vertex_line(trimmed) {
            Some(position) => {
                mesh.push_vertex(position);
            }
            None => skipped += 1,
        }
    }

    let dangling = mesh.truncate_to_whole_triangles();
    if skipped > 0 || dangling > 0 {
        warn!(skipped, dangling, "ignored malformed ASCII STL vertices");
    }
    if mesh.is_empty() {
        return Err(StlError::NoGeometry);
    }

    debug!(triangles = mesh.triangle_count(), "ASCII STL vertices read");
    Ok(mesh)
}

fn parse_vertex_line(line: &str) -> Option<[f64; 3]> {
    let mut tokens = line.split_whitespace().skip(1);
    let mut position = [0.0; 3];
    for slot in &mut position {
        let value: f64 = tokens.next()?.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        *slot = value;
    }
    if tokens.next().is_some() {
        return None;
    }
    Some(position)
}
