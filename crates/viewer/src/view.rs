//! Rotation, zoom and drag state of the viewer.
//!
//! Every transition takes the state by value and returns the next one, so a
//! frame always renders from one consistent snapshot.

use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;

/// Pointer position in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rotation about the X and Y axes, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub rotation: Rotation,
    pub zoom: f64,
    /// Last pointer position while a drag is in progress.
    pub dragging: Option<PointerPos>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rotation: Rotation::default(),
            zoom: 1.0,
            dragging: None,
        }
    }
}

impl ViewState {
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// One animation frame of idle rotation. Suspended while dragging.
    pub fn advance(self, config: &ViewConfig) -> Self {
        if self.is_dragging() {
            return self;
        }
        Self {
            rotation: Rotation {
                x: self.rotation.x + config.auto_rotate_x,
                y: self.rotation.y + config.auto_rotate_y,
            },
            ..self
        }
    }

    pub fn begin_drag(self, pos: PointerPos) -> Self {
        Self {
            dragging: Some(pos),
            ..self
        }
    }

    /// Vertical motion tilts about X, horizontal motion spins about Y.
    pub fn apply_drag(self, pos: PointerPos, config: &ViewConfig) -> Self {
        let Some(last) = self.dragging else {
            return self;
        };
        let dx = pos.x - last.x;
        let dy = pos.y - last.y;
        Self {
            rotation: Rotation {
                x: self.rotation.x + dy * config.drag_sensitivity,
                y: self.rotation.y + dx * config.drag_sensitivity,
            },
            dragging: Some(pos),
            ..self
        }
    }

    pub fn end_drag(self) -> Self {
        Self {
            dragging: None,
            ..self
        }
    }

    pub fn zoom_in(self, config: &ViewConfig) -> Self {
        Self {
            zoom: config.clamp_zoom(self.zoom * config.zoom_step),
            ..self
        }
    }

    pub fn zoom_out(self, config: &ViewConfig) -> Self {
        Self {
            zoom: config.clamp_zoom(self.zoom / config.zoom_step),
            ..self
        }
    }

    /// Back to the front view. Zoom is kept.
    pub fn reset_rotation(self) -> Self {
        Self {
            rotation: Rotation::default(),
            ..self
        }
    }
}
