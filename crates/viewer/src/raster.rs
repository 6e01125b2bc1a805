//! Turns depth-ordered faces into a backend-neutral list of draw commands.

use mesh_types::MeshId;
use serde::{Deserialize, Serialize};

use crate::config::{FrameStyle, Viewport};
use crate::projection::ProjectedTriangle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Fill the whole canvas.
    Clear { color: String },
    FillTriangle { points: [[f64; 2]; 3], color: String },
    StrokeTriangle {
        points: [[f64; 2]; 3],
        color: String,
        width: f64,
    },
    Line {
        from: [f64; 2],
        to: [f64; 2],
        color: String,
        width: f64,
    },
}

/// Everything needed to paint one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Mesh this frame was rendered from.
    pub mesh_id: MeshId,
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn triangle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillTriangle { .. }))
            .count()
    }
}

/// Background, then each face filled and outlined in the given order, then
/// the reference grid on top.
pub fn rasterize(
    mesh_id: MeshId,
    triangles: &[ProjectedTriangle],
    viewport: &Viewport,
    style: &FrameStyle,
) -> Frame {
    let mut commands = Vec::with_capacity(1 + triangles.len() * 2);
    commands.push(DrawCommand::Clear {
        color: style.background.clone(),
    });

    for tri in triangles {
        commands.push(DrawCommand::FillTriangle {
            points: tri.corners,
            color: style.fill.clone(),
        });
        commands.push(DrawCommand::StrokeTriangle {
            points: tri.corners,
            color: style.stroke.clone(),
            width: style.stroke_width,
        });
    }

    grid_lines(viewport, style, &mut commands);

    Frame {
        mesh_id,
        viewport: *viewport,
        commands,
    }
}

/// Upper bound on grid lines per axis.
pub const MAX_GRID_LINES: usize = 1024;

fn grid_lines(viewport: &Viewport, style: &FrameStyle, out: &mut Vec<DrawCommand>) {
    let spacing = style.grid_spacing;
    if spacing.is_nan() || spacing <= 0.0 {
        return;
    }
    let line = |from: [f64; 2], to: [f64; 2]| DrawCommand::Line {
        from,
        to,
        color: style.grid.clone(),
        width: 1.0,
    };

    let mut x = 0.0;
    let mut drawn = 0;
    while x < viewport.width && drawn < MAX_GRID_LINES {
        out.push(line([x, 0.0], [x, viewport.height]));
        x += spacing;
        drawn += 1;
    }
    let mut y = 0.0;
    let mut drawn = 0;
    while y < viewport.height && drawn < MAX_GRID_LINES {
        out.push(line([0.0, y], [viewport.width, y]));
        y += spacing;
        drawn += 1;
    }
}
