//! Helper functions: error type and synthetic mesh builders.

use mesh_types::Mesh;
use nalgebra::Point3;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("STL error: {reason}")]
    StlError { reason: String },
}

// ── Mesh Builders ───────────────────────────────────────────────────────────

/// One triangle in the XY plane: (0,0,0), (10,0,0), (0,10,0).
pub fn single_triangle() -> Mesh {
    Mesh::from_triangles(&[[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 10.0, 0.0]]])
}

/// Axis-aligned box from `min` to `max`, 12 triangles wound outward.
pub fn axis_box(min: [f64; 3], max: [f64; 3]) -> Mesh {
    let [x0, y0, z0] = min;
    let [x1, y1, z1] = max;
    Mesh::from_triangles(&[
        // bottom (z = z0)
        [[x0, y0, z0], [x0, y1, z0], [x1, y1, z0]],
        [[x0, y0, z0], [x1, y1, z0], [x1, y0, z0]],
        // top (z = z1)
        [[x0, y0, z1], [x1, y0, z1], [x1, y1, z1]],
        [[x0, y0, z1], [x1, y1, z1], [x0, y1, z1]],
        // front (y = y0)
        [[x0, y0, z0], [x1, y0, z0], [x1, y0, z1]],
        [[x0, y0, z0], [x1, y0, z1], [x0, y0, z1]],
        // back (y = y1)
        [[x0, y1, z0], [x0, y1, z1], [x1, y1, z1]],
        [[x0, y1, z0], [x1, y1, z1], [x1, y1, z0]],
        // left (x = x0)
        [[x0, y0, z0], [x0, y0, z1], [x0, y1, z1]],
        [[x0, y0, z0], [x0, y1, z1], [x0, y1, z0]],
        // right (x = x1)
        [[x1, y0, z0], [x1, y1, z0], [x1, y1, z1]],
        [[x1, y0, z0], [x1, y1, z1], [x1, y0, z1]],
    ])
}

/// Cube with one corner at the origin.
pub fn cube(side: f64) -> Mesh {
    axis_box([0.0; 3], [side; 3])
}

/// Same triangles with every face's winding reversed.
pub fn flip_winding(mesh: &Mesh) -> Mesh {
    let tris: Vec<[[f64; 3]; 3]> = mesh
        .triangles()
        .map(|[a, b, c]| [xyz(c), xyz(b), xyz(a)])
        .collect();
    Mesh::from_triangles(&tris)
}

/// Reverse the winding of only the first `count` triangles.
pub fn flip_first(mesh: &Mesh, count: usize) -> Mesh {
    let tris: Vec<[[f64; 3]; 3]> = mesh
        .triangles()
        .enumerate()
        .map(|(i, [a, b, c])| {
            if i < count {
                [xyz(c), xyz(b), xyz(a)]
            } else {
                [xyz(a), xyz(b), xyz(c)]
            }
        })
        .collect();
    Mesh::from_triangles(&tris)
}

/// Drop the last `count` triangles, opening a hole.
pub fn without_last(mesh: &Mesh, count: usize) -> Mesh {
    let keep = mesh.triangle_count().saturating_sub(count);
    let tris: Vec<[[f64; 3]; 3]> = mesh
        .triangles()
        .take(keep)
        .map(|[a, b, c]| [xyz(a), xyz(b), xyz(c)])
        .collect();
    Mesh::from_triangles(&tris)
}

fn xyz(p: Point3<f64>) -> [f64; 3] {
    [p.x, p.y, p.z]
}
