use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use quote::{estimate, quick_quote, ModelReport, QuoteRequest};
use viewer::{frame_to_svg, PointerPos, ViewState, ViewerError, Viewport};

use crate::messages::{UiToViewer, ViewerToUi};
use crate::viewer_state::{BridgeError, BridgeState};

/// Dispatch a page message to the viewer and return a response.
///
/// Failures never escape: they become a `ViewerToUi::Error` carrying the
/// message the page should show.
pub fn dispatch(state: &mut BridgeState, msg: UiToViewer) -> ViewerToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => ViewerToUi::Error {
            message: e.user_message(),
        },
    }
}

/// Open raw file bytes. Used directly by the wasm entry point, which skips
/// the base64 round trip.
pub fn open_bytes(state: &mut BridgeState, file_name: &str, bytes: &[u8]) -> ViewerToUi {
    match state.session.open(file_name, bytes) {
        Ok(info) => ViewerToUi::ModelLoaded { info },
        Err(e) => ViewerToUi::Error {
            message: e.user_message().to_string(),
        },
    }
}

fn handle_message(state: &mut BridgeState, msg: UiToViewer) -> Result<ViewerToUi, BridgeError> {
    match msg {
        // -- Lifecycle --
        UiToViewer::BeginLoad => {
            state.session.begin_loading();
            Ok(state_changed(state))
        }

        UiToViewer::OpenFile {
            file_name,
            data_base64,
        } => {
            let bytes = match STANDARD.decode(data_base64.as_bytes()) {
                Ok(bytes) => bytes,
                Err(e) => {
                    let err = BridgeError::Payload {
                        reason: e.to_string(),
                    };
                    state.session.fail_loading(err.user_message());
                    return Err(err);
                }
            };
            debug!(file = %file_name, len = bytes.len(), "file received");
            let info = state.session.open(&file_name, &bytes)?;
            Ok(ViewerToUi::ModelLoaded { info })
        }

        UiToViewer::Close => {
            state.session.close();
            Ok(state_changed(state))
        }

        UiToViewer::GetState => Ok(state_changed(state)),

        UiToViewer::GetModelInfo => Ok(ViewerToUi::ModelInfo {
            info: state.session.model_info().cloned(),
        }),

        // -- Rendering --
        UiToViewer::Tick => Ok(ViewerToUi::Frame {
            frame: state.session.tick()?,
        }),

        UiToViewer::Render => Ok(ViewerToUi::Frame {
            frame: state.session.render()?,
        }),

        UiToViewer::RenderSvg => Ok(ViewerToUi::Svg {
            svg: frame_to_svg(&state.session.render()?),
        }),

        UiToViewer::Resize { width, height } => {
            state.session.set_viewport(Viewport::new(width, height))?;
            Ok(ViewerToUi::Frame {
                frame: state.session.render()?,
            })
        }

        // -- Interaction --
        UiToViewer::PointerDown { x, y } => {
            view_changed(state.session.begin_drag(PointerPos::new(x, y)))
        }
        UiToViewer::PointerMove { x, y } => {
            view_changed(state.session.drag_to(PointerPos::new(x, y)))
        }
        UiToViewer::PointerUp => view_changed(state.session.end_drag()),
        UiToViewer::ZoomIn => view_changed(state.session.zoom_in()),
        UiToViewer::ZoomOut => view_changed(state.session.zoom_out()),
        UiToViewer::ResetRotation => view_changed(state.session.reset_rotation()),

        // -- Pricing and export --
        UiToViewer::QuickQuote { material } => {
            let info = state.session.model_info().ok_or(ViewerError::NotReady)?;
            Ok(ViewerToUi::QuickQuote {
                material,
                price: quick_quote(info, material, &state.quick_rates),
                currency: state.quick_rates.currency.clone(),
            })
        }

        UiToViewer::EstimateQuote {
            request,
            use_model_volume,
        } => {
            let request = if use_model_volume {
                let info = state.session.model_info().ok_or(ViewerError::NotReady)?;
                QuoteRequest {
                    volume_cm3: info.volume,
                    ..request
                }
            } else {
                request
            };
            Ok(ViewerToUi::Quote {
                quote: estimate(&request, &state.quote_config)?,
            })
        }

        UiToViewer::ExportReport => {
            let info = state.session.model_info().ok_or(ViewerError::NotReady)?;
            let report = ModelReport::now(info.clone());
            Ok(ViewerToUi::Report {
                file_name: report.file_name(),
                text: report.to_text(),
            })
        }
    }
}

fn state_changed(state: &BridgeState) -> ViewerToUi {
    ViewerToUi::StateChanged {
        state: state.session.state(),
    }
}

fn view_changed(result: Result<ViewState, ViewerError>) -> Result<ViewerToUi, BridgeError> {
    Ok(ViewerToUi::ViewChanged { view: result? })
}
