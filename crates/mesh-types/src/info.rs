use serde::{Deserialize, Serialize};

use crate::mesh::MeshId;

/// Extents of the axis-aligned bounding box, in source units (mm).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width along X.
    pub x: f64,
    /// Depth along Y.
    pub y: f64,
    /// Height along Z.
    pub z: f64,
}

impl Dimensions {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Largest of the three extents.
    pub fn max_extent(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }
}

/// Provenance of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Size in megabytes, as shown to users.
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }
}

/// Edge-usage summary of a mesh after welding coincident vertices.
///
/// Volume and area are only physically meaningful for closed, consistently
/// wound meshes. This report tells the UI when they are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ManifoldReport {
    /// Distinct undirected edges.
    pub total_edges: usize,
    /// Edges used by exactly one triangle (holes).
    pub boundary_edges: usize,
    /// Edges used by more than two triangles.
    pub non_manifold_edges: usize,
    /// Two-triangle edges traversed in the same direction by both.
    pub inconsistent_edges: usize,
}

impl ManifoldReport {
    pub fn is_closed(&self) -> bool {
        self.boundary_edges == 0 && self.non_manifold_edges == 0
    }

    pub fn is_consistently_oriented(&self) -> bool {
        self.inconsistent_edges == 0
    }

    /// Closed and consistently wound: volume is exact.
    pub fn is_watertight(&self) -> bool {
        self.total_edges > 0 && self.is_closed() && self.is_consistently_oriented()
    }
}

/// Read-only summary derived once per mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub mesh_id: MeshId,
    pub vertex_count: usize,
    pub face_count: usize,
    /// Rounded to 2 decimals.
    pub bounding_box: Dimensions,
    /// cm³, never negative, rounded to 2 decimals.
    pub volume: f64,
    /// cm², never negative, rounded to 2 decimals.
    pub surface_area: f64,
    pub file_name: String,
    pub file_size_bytes: u64,
    pub manifold: ManifoldReport,
}

impl ModelInfo {
    pub fn file_meta(&self) -> FileMeta {
        FileMeta::new(self.file_name.clone(), self.file_size_bytes)
    }
}
