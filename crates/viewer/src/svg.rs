//! Executes a [`Frame`] against an SVG document.

use crate::raster::{DrawCommand, Frame};

fn points_attr(points: &[[f64; 2]; 3]) -> String {
    let [[x0, y0], [x1, y1], [x2, y2]] = *points;
    format!("{x0:.1},{y0:.1} {x1:.1},{y1:.1} {x2:.1},{y2:.1}")
}

pub fn frame_to_svg(frame: &Frame) -> String {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    );

    for command in &frame.commands {
        let element = match command {
            DrawCommand::Clear { color } => format!(
                "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"{color}\"/>\n"
            ),
            DrawCommand::FillTriangle { points, color } => format!(
                "  <polygon points=\"{}\" fill=\"{color}\" stroke=\"none\"/>\n",
                points_attr(points)
            ),
            DrawCommand::StrokeTriangle {
                points,
                color,
                width: line_width,
            } => format!(
                "  <polygon points=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{line_width}\"/>\n",
                points_attr(points)
            ),
            DrawCommand::Line {
                from,
                to,
                color,
                width: line_width,
            } => format!(
                "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{color}\" stroke-width=\"{line_width}\"/>\n",
                from[0], from[1], to[0], to[1]
            ),
        };
        svg.push_str(&element);
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FrameStyle, Viewport};
    use crate::projection::ProjectedTriangle;
    use crate::raster::rasterize;
    use mesh_types::MeshId;

    #[test]
    fn svg_contains_each_command() {
        let tri = ProjectedTriangle {
            face: 0,
            corners: [[1.0, 2.0], [3.0, 4.0], [5.0, 6.5]],
            depth: 0.0,
        };
        let frame = rasterize(
            MeshId::new(),
            &[tri],
            &Viewport::new(100.0, 60.0),
            &FrameStyle::default(),
        );
        let svg = frame_to_svg(&frame);

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"60\""));
        assert!(svg.contains("fill=\"#1f2937\""));
        assert!(svg.contains("points=\"1.0,2.0 3.0,4.0 5.0,6.5\" fill=\"rgba(96, 165, 250, 0.3)\""));
        assert!(svg.contains("stroke=\"#60a5fa\" stroke-width=\"1\""));
        assert_eq!(svg.matches("<line").count(), 2 + 2);
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
