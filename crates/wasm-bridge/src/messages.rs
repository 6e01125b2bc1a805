use serde::{Deserialize, Serialize};

use mesh_types::ModelInfo;
use quote::{Material, Quote, QuoteRequest};
use viewer::{Frame, SessionState, ViewState};

/// Messages from the page to the viewer core.
/// Serialized as JSON for postMessage transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToViewer {
    // -- Lifecycle --
    /// The user picked a file and the page started reading it.
    BeginLoad,
    /// File contents, base64-encoded.
    OpenFile {
        file_name: String,
        data_base64: String,
    },
    /// The viewer window was dismissed.
    Close,
    GetState,
    GetModelInfo,

    // -- Rendering --
    /// One animation frame: idle rotation, then draw.
    Tick,
    /// Draw the current view without animating.
    Render,
    /// Draw the current view as an SVG document.
    RenderSvg,
    Resize {
        width: f64,
        height: f64,
    },

    // -- Interaction --
    PointerDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    ZoomIn,
    ZoomOut,
    ResetRotation,

    // -- Pricing and export --
    /// Material-only price for the loaded model.
    QuickQuote {
        material: Material,
    },
    /// Full job estimate. With `use_model_volume` the request's volume is
    /// replaced by the loaded model's.
    EstimateQuote {
        request: QuoteRequest,
        #[serde(default)]
        use_model_volume: bool,
    },
    ExportReport,
}

/// Messages from the viewer core back to the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewerToUi {
    StateChanged {
        state: SessionState,
    },
    ModelLoaded {
        info: ModelInfo,
    },
    ModelInfo {
        info: Option<ModelInfo>,
    },
    Frame {
        frame: Frame,
    },
    Svg {
        svg: String,
    },
    ViewChanged {
        view: ViewState,
    },
    QuickQuote {
        material: Material,
        price: f64,
        currency: String,
    },
    Quote {
        quote: Quote,
    },
    Report {
        file_name: String,
        text: String,
    },
    Error {
        message: String,
    },
}
