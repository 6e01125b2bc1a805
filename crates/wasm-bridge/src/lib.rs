//! JSON message bridge between the viewer page and the Rust core.
//!
//! The page posts `UiToViewer` messages and renders whatever `ViewerToUi`
//! comes back. On `wasm32` the same dispatch is exposed through
//! `wasm_bindgen` entry points.

pub mod dispatch;
pub mod messages;
pub mod viewer_state;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{dispatch, open_bytes};
pub use messages::{UiToViewer, ViewerToUi};
pub use viewer_state::{BridgeError, BridgeState};
