//! Orthographic projection of a mesh onto the canvas, plus painter's ordering.

use mesh_analysis::Aabb;
use mesh_types::Mesh;
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::{ViewConfig, Viewport};
use crate::view::ViewState;

/// One vertex after rotation and projection. `depth` grows away from the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedVertex {
    pub screen_x: f64,
    pub screen_y: f64,
    pub depth: f64,
}

impl ProjectedVertex {
    pub fn screen(&self) -> [f64; 2] {
        [self.screen_x, self.screen_y]
    }
}

/// A face ready to be painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedTriangle {
    /// Index of the face in the source mesh.
    pub face: usize,
    pub corners: [[f64; 2]; 3],
    /// Mean depth of the three corners.
    pub depth: f64,
}

/// Pixels per model unit for the current zoom.
///
/// A model with no extent (a single point, or all faces degenerate) is
/// treated as one unit wide.
pub fn fit_scale(bounds: &Aabb, zoom: f64, viewport: &Viewport, config: &ViewConfig) -> f64 {
    let extent = bounds.max_extent();
    let model_size = if extent > 0.0 { extent } else { 1.0 };
    viewport.min_side() * config.fit_fraction * zoom / model_size
}

/// X rotation first, then Y.
pub fn view_rotation(view: &ViewState) -> Rotation3<f64> {
    let about_x = Rotation3::from_axis_angle(&Vector3::x_axis(), view.rotation.x);
    let about_y = Rotation3::from_axis_angle(&Vector3::y_axis(), view.rotation.y);
    about_y * about_x
}

/// Centre the mesh on its bounding box, rotate, and scale into the viewport.
///
/// Screen Y points down, so model Y is flipped.
pub fn project(
    mesh: &Mesh,
    bounds: &Aabb,
    view: &ViewState,
    viewport: &Viewport,
    config: &ViewConfig,
) -> Vec<ProjectedVertex> {
    let center = bounds.center();
    let scale = fit_scale(bounds, view.zoom, viewport, config);
    let rotation = view_rotation(view);
    let (cx, cy) = viewport.center();

    (0..mesh.vertex_count())
        .map(|i| {
            let p = rotation * (mesh.vertex(i) - center);
            ProjectedVertex {
                screen_x: cx + p.x * scale,
                screen_y: cy - p.y * scale,
                depth: p.z,
            }
        })
        .collect()
}

/// Faces sorted far to near by mean corner depth.
///
/// The sort is stable, so faces at equal depth keep file order.
pub fn depth_order(mesh: &Mesh, projected: &[ProjectedVertex]) -> Vec<ProjectedTriangle> {
    let mut faces: Vec<ProjectedTriangle> = mesh
        .triangle_indices()
        .enumerate()
        .filter_map(|(face, [a, b, c])| {
            let v0 = projected.get(a as usize)?;
            let v1 = projected.get(b as usize)?;
            let v2 = projected.get(c as usize)?;
            Some(ProjectedTriangle {
                face,
                corners: [v0.screen(), v1.screen(), v2.screen()],
                depth: (v0.depth + v1.depth + v2.depth) / 3.0,
            })
        })
        .collect();
    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_analysis::bounding_box;
    use nalgebra::Point3;

    use crate::view::Rotation;

    fn tri() -> Mesh {
        Mesh::from_triangles(&[[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 10.0, 0.0]]])
    }

    #[test]
    fn front_view_centres_and_scales() {
        let mesh = tri();
        let bb = bounding_box(&mesh).unwrap();
        let projected = project(
            &mesh,
            &bb,
            &ViewState::default(),
            &Viewport::default(),
            &ViewConfig::default(),
        );
        // 500 * 0.4 / 10 = 20 px per mm; centre (5, 5, 0) maps to (350, 250).
        assert_relative_eq!(projected[0].screen_x, 250.0);
        assert_relative_eq!(projected[0].screen_y, 350.0);
        assert_relative_eq!(projected[1].screen_x, 450.0);
        assert_relative_eq!(projected[2].screen_y, 150.0);
        assert!(projected.iter().all(|v| v.depth == 0.0));
    }

    #[test]
    fn zero_extent_model_does_not_divide_by_zero() {
        let mesh = Mesh::from_triangles(&[[[1.0, 1.0, 1.0]; 3]]);
        let bb = bounding_box(&mesh).unwrap();
        let scale = fit_scale(&bb, 1.0, &Viewport::default(), &ViewConfig::default());
        assert_eq!(scale, 200.0);
        let projected = project(
            &mesh,
            &bb,
            &ViewState::default(),
            &Viewport::default(),
            &ViewConfig::default(),
        );
        assert!(projected.iter().all(|v| v.screen_x == 350.0 && v.screen_y == 250.0));
    }

    #[test]
    fn rotation_matches_axis_formulas() {
        let view = ViewState {
            rotation: Rotation { x: 0.7, y: -1.3 },
            ..ViewState::default()
        };
        let (x, y, z) = (1.5, -2.0, 3.25);
        let (sx, cx) = view.rotation.x.sin_cos();
        let (sy, cy) = view.rotation.y.sin_cos();
        let y1 = y * cx - z * sx;
        let z1 = y * sx + z * cx;
        let x2 = x * cy + z1 * sy;
        let z2 = -x * sy + z1 * cy;

        let p = view_rotation(&view) * Point3::new(x, y, z);
        assert_relative_eq!(p.x, x2, epsilon = 1e-12);
        assert_relative_eq!(p.y, y1, epsilon = 1e-12);
        assert_relative_eq!(p.z, z2, epsilon = 1e-12);
    }

    #[test]
    fn far_face_painted_first() {
        let near = [[0.0, 0.0, -5.0], [1.0, 0.0, -5.0], [0.0, 1.0, -5.0]];
        let far = [[0.0, 0.0, 5.0], [1.0, 0.0, 5.0], [0.0, 1.0, 5.0]];
        for order in [[near, far], [far, near]] {
            let mesh = Mesh::from_triangles(&order);
            let bb = bounding_box(&mesh).unwrap();
            let projected = project(
                &mesh,
                &bb,
                &ViewState::default(),
                &Viewport::default(),
                &ViewConfig::default(),
            );
            let sorted = depth_order(&mesh, &projected);
            assert_eq!(sorted[0].depth, 5.0);
            assert_eq!(sorted[1].depth, -5.0);
        }
    }

    #[test]
    fn equal_depths_keep_file_order() {
        let mesh = Mesh::from_triangles(&[
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            [[2.0, 0.0, 0.0], [3.0, 0.0, 0.0], [2.0, 1.0, 0.0]],
            [[4.0, 0.0, 0.0], [5.0, 0.0, 0.0], [4.0, 1.0, 0.0]],
        ]);
        let bb = bounding_box(&mesh).unwrap();
        let projected = project(
            &mesh,
            &bb,
            &ViewState::default(),
            &Viewport::default(),
            &ViewConfig::default(),
        );
        let faces: Vec<usize> = depth_order(&mesh, &projected).iter().map(|t| t.face).collect();
        assert_eq!(faces, vec![0, 1, 2]);
    }
}
