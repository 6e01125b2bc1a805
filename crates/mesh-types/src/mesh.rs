use std::fmt;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one loaded mesh.
///
/// A fresh id is minted every time a file is parsed, so a renderer holding
/// an old id can tell that the mesh it was drawing has been replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshId(pub Uuid);

impl MeshId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MeshId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A triangle soup as read from an STL file.
///
/// Every vertex occurrence is stored separately (no sharing), so
/// `indices` is always `0, 1, 2, ...` and `indices.len() == vertices.len() / 3`.
/// Vertices are never deduplicated here; welding is a separate, optional stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    id: MeshId,
    /// Vertex positions [x, y, z, x, y, z, ...]
    vertices: Vec<f64>,
    /// Triangle indices [i0, i1, i2, ...]
    indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Allocate room for `triangles` faces.
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            id: MeshId::new(),
            vertices: Vec::with_capacity(triangles * 9),
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Build a mesh from explicit triangle corners.
    pub fn from_triangles(triangles: &[[[f64; 3]; 3]]) -> Self {
        let mut mesh = Self::with_capacity(triangles.len());
        for tri in triangles {
            for corner in tri {
                mesh.push_vertex(*corner);
            }
        }
        mesh
    }

    /// Append one vertex occurrence and its sequential index.
    pub fn push_vertex(&mut self, position: [f64; 3]) -> u32 {
        let index = self.vertex_count() as u32;
        self.vertices.extend_from_slice(&position);
        self.indices.push(index);
        index
    }

    /// Drop a trailing, incomplete triangle. Returns how many vertices were removed.
    pub fn truncate_to_whole_triangles(&mut self) -> usize {
        let dangling = self.indices.len() % 3;
        if dangling > 0 {
            let keep = self.indices.len() - dangling;
            self.indices.truncate(keep);
            self.vertices.truncate(keep * 3);
        }
        dangling
    }

    pub fn id(&self) -> MeshId {
        self.id
    }

    pub fn vertices(&self) -> &[f64] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Position of vertex `i`.
    pub fn vertex(&self, i: usize) -> Point3<f64> {
        let base = i * 3;
        Point3::new(
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        )
    }

    /// Iterate triangles as index triples.
    pub fn triangle_indices(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Iterate triangles as corner positions, in file order.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<f64>; 3]> + '_ {
        self.triangle_indices().map(move |[a, b, c]| {
            [
                self.vertex(a as usize),
                self.vertex(b as usize),
                self.vertex(c as usize),
            ]
        })
    }

    /// A copy with every coordinate multiplied by `factor` and a new id.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            id: MeshId::new(),
            vertices: self.vertices.iter().map(|v| v * factor).collect(),
            indices: self.indices.clone(),
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
