//! Volume and surface area of a triangle soup.
//!
//! Both are plain sums over faces. The volume is the divergence-theorem sum of
//! signed tetrahedra against the origin, which is only exact for closed,
//! consistently wound meshes. Open meshes still get a finite, non-negative
//! number; see [`crate::manifold_report`] for telling the two apart.

use mesh_types::Mesh;
use nalgebra::Point3;

/// mm³ per cm³.
pub const MM3_PER_CM3: f64 = 1000.0;
/// mm² per cm².
pub const MM2_PER_CM2: f64 = 100.0;

/// Round half away from zero to two decimals.
///
/// Values too large to scale by 100 have no fractional part and are returned as is.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}

/// Signed volume of the tetrahedron spanned by the origin and one face.
pub fn tetra_volume(tri: &[Point3<f64>; 3]) -> f64 {
    let [a, b, c] = tri;
    a.coords.dot(&b.coords.cross(&c.coords)) / 6.0
}

/// Area of one face.
pub fn triangle_area(tri: &[Point3<f64>; 3]) -> f64 {
    let [a, b, c] = tri;
    (b - a).cross(&(c - a)).norm() / 2.0
}

/// Sum of signed tetra volumes, in source units cubed. Positive for
/// outward-wound closed meshes.
pub fn signed_volume(mesh: &Mesh) -> f64 {
    mesh.triangles().map(|tri| tetra_volume(&tri)).sum()
}

/// Absolute volume in cm³, rounded to 2 decimals.
pub fn volume_cm3(mesh: &Mesh) -> f64 {
    round2(signed_volume(mesh).abs() / MM3_PER_CM3)
}

/// Total face area, in source units squared.
pub fn surface_area(mesh: &Mesh) -> f64 {
    mesh.triangles().map(|tri| triangle_area(&tri)).sum()
}

/// Total face area in cm², rounded to 2 decimals after conversion.
pub fn surface_area_cm2(mesh: &Mesh) -> f64 {
    round2(surface_area(mesh) / MM2_PER_CM2)
}
