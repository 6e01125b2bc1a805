use mesh_types::{Dimensions, Mesh};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Aabb {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Box around a single point.
    pub fn from_point(p: Point3<f64>) -> Self {
        Self { min: p, max: p }
    }

    pub fn expand_to_include(&mut self, p: &Point3<f64>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Width, depth and height, unrounded.
    pub fn dimensions(&self) -> Dimensions {
        let s = self.size();
        Dimensions::new(s.x, s.y, s.z)
    }

    /// Largest extent, used to fit the model to the viewport.
    pub fn max_extent(&self) -> f64 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }
}

/// Single pass over every vertex. `None` when the mesh has no vertices.
pub fn bounding_box(mesh: &Mesh) -> Option<Aabb> {
    let mut points = (0..mesh.vertex_count()).map(|i| mesh.vertex(i));
    let first = points.next()?;
    let mut bb = Aabb::from_point(first);
    for p in points {
        bb.expand_to_include(&p);
    }
    Some(bb)
}
