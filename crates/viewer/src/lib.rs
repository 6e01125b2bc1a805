//! Interactive wireframe viewer core: view state, projection, painter's
//! ordering and a backend-neutral frame description.

pub mod config;
pub mod error;
pub mod projection;
pub mod raster;
pub mod session;
pub mod svg;
pub mod view;

use mesh_analysis::Aabb;
use mesh_types::Mesh;

pub use config::{FrameStyle, ViewConfig, Viewport};
pub use error::ViewerError;
pub use projection::{depth_order, project, ProjectedTriangle, ProjectedVertex};
pub use raster::{rasterize, DrawCommand, Frame};
pub use session::{LoadedModel, SessionState, ViewerSession};
pub use svg::frame_to_svg;
pub use view::{PointerPos, Rotation, ViewState};

/// Project, depth-sort and rasterize a mesh in one pass.
pub fn render_mesh(
    mesh: &Mesh,
    bounds: &Aabb,
    view: &ViewState,
    viewport: &Viewport,
    config: &ViewConfig,
    style: &FrameStyle,
) -> Frame {
    let projected = project(mesh, bounds, view, viewport, config);
    let triangles = depth_order(mesh, &projected);
    rasterize(mesh.id(), &triangles, viewport, style)
}
