//! WASM entry points for the viewer page.
//!
//! This module is only compiled for the `wasm32` target.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::dispatch;
use crate::messages::{UiToViewer, ViewerToUi};
use crate::viewer_state::BridgeState;

// Single-threaded in the browser.
thread_local! {
    static BRIDGE_STATE: RefCell<Option<BridgeState>> = const { RefCell::new(None) };
}

fn not_initialized() -> ViewerToUi {
    ViewerToUi::Error {
        message: "Viewer not initialized. Call init() first.".to_string(),
    }
}

fn to_json(response: &ViewerToUi) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(r#"{{"type":"Error","message":"Serialization failed: {}"}}"#, e)
    })
}

fn with_state(f: impl FnOnce(&mut BridgeState) -> ViewerToUi) -> ViewerToUi {
    BRIDGE_STATE.with(|cell| match cell.borrow_mut().as_mut() {
        Some(state) => f(state),
        None => not_initialized(),
    })
}

/// Set up the panic hook and a fresh, closed viewer.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    BRIDGE_STATE.with(|cell| {
        *cell.borrow_mut() = Some(BridgeState::new());
    });
}

/// Process a JSON `UiToViewer` message and return a JSON `ViewerToUi` response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    let response = match serde_json::from_str::<UiToViewer>(json_input) {
        Ok(msg) => with_state(|state| dispatch::dispatch(state, msg)),
        Err(e) => ViewerToUi::Error {
            message: format!("Failed to parse message: {}", e),
        },
    };
    to_json(&response)
}

/// Open a file straight from an `ArrayBuffer` without base64 encoding.
#[wasm_bindgen]
pub fn open_file(file_name: &str, bytes: &[u8]) -> String {
    to_json(&with_state(|state| dispatch::open_bytes(state, file_name, bytes)))
}

/// Copy of the loaded mesh's vertex positions `[x0, y0, z0, ...]`.
#[wasm_bindgen]
pub fn get_mesh_vertices() -> js_sys::Float64Array {
    BRIDGE_STATE.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|state| state.session.model())
            .map(|model| js_sys::Float64Array::from(model.mesh().vertices()))
            .unwrap_or_else(|| js_sys::Float64Array::new_with_length(0))
    })
}

/// Copy of the loaded mesh's triangle indices.
#[wasm_bindgen]
pub fn get_mesh_indices() -> js_sys::Uint32Array {
    BRIDGE_STATE.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|state| state.session.model())
            .map(|model| js_sys::Uint32Array::from(model.mesh().indices()))
            .unwrap_or_else(|| js_sys::Uint32Array::new_with_length(0))
    })
}
