//! Geometry analyzer: bounding box, volume and surface area of a parsed mesh.

pub mod bounds;
pub mod error;
pub mod manifold;
pub mod metrics;

use mesh_types::{Dimensions, FileMeta, Mesh, ModelInfo};
use tracing::{info, instrument, warn};

pub use bounds::{bounding_box, Aabb};
pub use error::AnalysisError;
pub use manifold::{manifold_report, weld, IndexedMesh};
pub use metrics::{round2, signed_volume, surface_area, surface_area_cm2, volume_cm3};

/// Derive the read-only model summary shown next to the viewer.
#[instrument(skip(mesh, meta), fields(file = %meta.name, triangles = mesh.triangle_count()))]
pub fn analyze(mesh: &Mesh, meta: &FileMeta) -> Result<ModelInfo, AnalysisError> {
    if mesh.is_empty() {
        return Err(AnalysisError::EmptyMesh);
    }
    let bb = bounding_box(mesh).ok_or(AnalysisError::EmptyMesh)?;

    let size = bb.dimensions();
    let dims = Dimensions::new(round2(size.x), round2(size.y), round2(size.z));
    if ![dims.x, dims.y, dims.z].iter().all(|v| v.is_finite()) {
        return Err(AnalysisError::NonFinite {
            quantity: "bounding box",
        });
    }
    let volume = volume_cm3(mesh);
    if !volume.is_finite() {
        return Err(AnalysisError::NonFinite { quantity: "volume" });
    }
    let surface_area = surface_area_cm2(mesh);
    if !surface_area.is_finite() {
        return Err(AnalysisError::NonFinite {
            quantity: "surface area",
        });
    }

    let manifold = manifold_report(mesh);
    if !manifold.is_watertight() {
        warn!(
            boundary = manifold.boundary_edges,
            non_manifold = manifold.non_manifold_edges,
            inconsistent = manifold.inconsistent_edges,
            "mesh is not watertight, volume is approximate"
        );
    }

    let info = ModelInfo {
        mesh_id: mesh.id(),
        vertex_count: mesh.vertex_count(),
        face_count: mesh.triangle_count(),
        bounding_box: dims,
        volume,
        surface_area,
        file_name: meta.name.clone(),
        file_size_bytes: meta.size_bytes,
        manifold,
    };
    info!(volume, surface_area, "model analyzed");
    Ok(info)
}
