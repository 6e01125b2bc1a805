//! Tunables for view interaction and frame appearance.

use serde::{Deserialize, Serialize};

/// Largest canvas side a session accepts, in pixels.
pub const MAX_VIEWPORT_SIDE: f64 = 16_384.0;

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 500.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixel centre of the canvas.
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Both sides finite, positive and at most [`MAX_VIEWPORT_SIDE`].
    pub fn is_valid(&self) -> bool {
        [self.width, self.height]
            .iter()
            .all(|side| side.is_finite() && *side > 0.0 && *side <= MAX_VIEWPORT_SIDE)
    }
}

/// Rotation, drag and zoom parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Radians added to the X rotation each frame while idle.
    pub auto_rotate_x: f64,
    /// Radians added to the Y rotation each frame while idle.
    pub auto_rotate_y: f64,
    /// Radians per pixel of pointer movement.
    pub drag_sensitivity: f64,
    /// Multiplier applied per zoom step.
    pub zoom_step: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Share of the shorter canvas side the model spans at zoom 1.
    pub fit_fraction: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            auto_rotate_x: 0.002,
            auto_rotate_y: 0.005,
            drag_sensitivity: 0.01,
            zoom_step: 1.2,
            min_zoom: 0.2,
            max_zoom: 5.0,
            fit_fraction: 0.4,
        }
    }
}

impl ViewConfig {
    /// No idle rotation; the model only moves when dragged.
    pub fn still() -> Self {
        Self {
            auto_rotate_x: 0.0,
            auto_rotate_y: 0.0,
            ..Self::default()
        }
    }

    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

/// Colours and grid used when drawing a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStyle {
    pub background: String,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub grid: String,
    /// Pixels between grid lines. Zero or less disables the grid.
    pub grid_spacing: f64,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            background: "#1f2937".to_string(),
            fill: "rgba(96, 165, 250, 0.3)".to_string(),
            stroke: "#60a5fa".to_string(),
            stroke_width: 1.0,
            grid: "rgba(255, 255, 255, 0.1)".to_string(),
            grid_spacing: 50.0,
        }
    }
}

impl FrameStyle {
    /// Default colours without the reference grid.
    pub fn without_grid() -> Self {
        Self {
            grid_spacing: 0.0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_viewport_matches_canvas() {
        let vp = Viewport::default();
        assert_eq!(vp.center(), (350.0, 250.0));
        assert_eq!(vp.min_side(), 500.0);
    }

    #[test]
    fn zoom_clamped_to_bounds() {
        let cfg = ViewConfig::default();
        assert_eq!(cfg.clamp_zoom(10.0), 5.0);
        assert_eq!(cfg.clamp_zoom(0.01), 0.2);
        assert_eq!(cfg.clamp_zoom(1.0), 1.0);
    }

    #[test]
    fn still_config_keeps_zoom_settings() {
        let cfg = ViewConfig::still();
        assert_eq!(cfg.auto_rotate_x, 0.0);
        assert_eq!(cfg.zoom_step, 1.2);
    }
}
