//! Vertex welding and edge-usage checks.

use std::collections::HashMap;

use mesh_types::{ManifoldReport, Mesh};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A mesh with shared vertices, produced by [`weld`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedMesh {
    pub positions: Vec<Point3<f64>>,
    pub triangles: Vec<[u32; 3]>,
}

impl IndexedMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// Bit pattern of a position. `-0.0` and `0.0` map to the same key.
fn position_key(p: &Point3<f64>) -> [u64; 3] {
    [
        (p.x + 0.0).to_bits(),
        (p.y + 0.0).to_bits(),
        (p.z + 0.0).to_bits(),
    ]
}

/// Merge vertex occurrences with exactly equal coordinates.
///
/// No tolerance is applied: STL writers emit the same float for a shared
/// corner, and anything else is treated as a distinct vertex.
pub fn weld(mesh: &Mesh) -> IndexedMesh {
    let mut lookup: HashMap<[u64; 3], u32> = HashMap::with_capacity(mesh.vertex_count());
    let mut positions = Vec::new();
    let mut remap = Vec::with_capacity(mesh.vertex_count());

    for i in 0..mesh.vertex_count() {
        let p = mesh.vertex(i);
        let id = *lookup.entry(position_key(&p)).or_insert_with(|| {
            positions.push(p);
            (positions.len() - 1) as u32
        });
        remap.push(id);
    }

    let triangles = mesh
        .triangle_indices()
        .map(|[a, b, c]| [remap[a as usize], remap[b as usize], remap[c as usize]])
        .collect();

    debug!(
        occurrences = mesh.vertex_count(),
        unique = positions.len(),
        "welded vertices"
    );
    IndexedMesh {
        positions,
        triangles,
    }
}

#[derive(Default)]
struct EdgeUse {
    count: usize,
    /// Uses that run from the lower to the higher vertex id.
    forward: usize,
}

/// Count boundary, non-manifold and inconsistently wound edges.
///
/// Edges collapsed by welding (both ends on the same vertex) are ignored.
pub fn manifold_report(mesh: &Mesh) -> ManifoldReport {
    let indexed = weld(mesh);
    let mut edges: HashMap<(u32, u32), EdgeUse> = HashMap::new();

    for &[a, b, c] in &indexed.triangles {
        for (from, to) in [(a, b), (b, c), (c, a)] {
            if from == to {
                continue;
            }
            let key = (from.min(to), from.max(to));
            let entry = edges.entry(key).or_default();
            entry.count += 1;
            if from < to {
                entry.forward += 1;
            }
        }
    }

    let mut report = ManifoldReport {
        total_edges: edges.len(),
        ..ManifoldReport::default()
    };
    for usage in edges.values() {
        match usage.count {
            1 => report.boundary_edges += 1,
            2 if usage.forward != 1 => report.inconsistent_edges += 1,
            2 => {}
            _ => report.non_manifold_edges += 1,
        }
    }
    report
}
