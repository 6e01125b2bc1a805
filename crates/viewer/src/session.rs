//! Viewer lifecycle: `Closed -> Loading -> Ready | Error`.

use mesh_analysis::{analyze, bounding_box, Aabb, AnalysisError};
use mesh_types::{Mesh, ModelInfo};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::{FrameStyle, ViewConfig, Viewport};
use crate::error::ViewerError;
use crate::raster::Frame;
use crate::render_mesh;
use crate::view::{PointerPos, ViewState};

/// Externally visible phase of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    Closed,
    Loading,
    Ready,
    Error { message: String },
}

/// A parsed mesh with everything derived from it. Replaced as a unit.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    mesh: Mesh,
    bounds: Aabb,
    info: ModelInfo,
}

impl LoadedModel {
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    pub fn info(&self) -> &ModelInfo {
        &self.info
    }
}

#[derive(Debug)]
enum Phase {
    Closed,
    Loading,
    Ready(Box<LoadedModel>),
    Failed(String),
}

/// One viewer window.
#[derive(Debug)]
pub struct ViewerSession {
    config: ViewConfig,
    style: FrameStyle,
    viewport: Viewport,
    view: ViewState,
    phase: Phase,
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(ViewConfig::default(), FrameStyle::default(), Viewport::default())
    }
}

/// Parse and analyse in one step; nothing is kept on failure.
fn load(name: &str, bytes: &[u8]) -> Result<LoadedModel, ViewerError> {
    if !stl_io::has_stl_extension(name) {
        return Err(ViewerError::NotStl {
            name: name.to_string(),
        });
    }
    let (mesh, meta) = stl_io::parse_file(name, bytes)?;
    let info = analyze(&mesh, &meta)?;
    let bounds = bounding_box(&mesh).ok_or(AnalysisError::EmptyMesh)?;
    Ok(LoadedModel { mesh, bounds, info })
}

impl ViewerSession {
    pub fn new(config: ViewConfig, style: FrameStyle, viewport: Viewport) -> Self {
        Self {
            config,
            style,
            viewport,
            view: ViewState::default(),
            phase: Phase::Closed,
        }
    }

    pub fn state(&self) -> SessionState {
        match &self.phase {
            Phase::Closed => SessionState::Closed,
            Phase::Loading => SessionState::Loading,
            Phase::Ready(_) => SessionState::Ready,
            Phase::Failed(message) => SessionState::Error {
                message: message.clone(),
            },
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Resize the canvas. Rejected sizes leave the current viewport in place.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), ViewerError> {
        if !viewport.is_valid() {
            return Err(ViewerError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        Ok(())
    }

    pub fn model(&self) -> Option<&LoadedModel> {
        match &self.phase {
            Phase::Ready(model) => Some(model.as_ref()),
            _ => None,
        }
    }

    pub fn model_info(&self) -> Option<&ModelInfo> {
        self.model().map(LoadedModel::info)
    }

    /// Mark the session busy while the caller reads the file. The previous
    /// model is dropped.
    pub fn begin_loading(&mut self) {
        self.phase = Phase::Loading;
        self.view = ViewState::default();
    }

    /// Load a file, replacing any current model and resetting the view.
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn open(&mut self, name: &str, bytes: &[u8]) -> Result<ModelInfo, ViewerError> {
        self.begin_loading();
        match load(name, bytes) {
            Ok(model) => {
                let info = model.info.clone();
                info!(mesh_id = %info.mesh_id, faces = info.face_count, "model ready");
                self.phase = Phase::Ready(Box::new(model));
                Ok(info)
            }
            Err(err) => {
                warn!(error = %err, "model failed to load");
                self.phase = Phase::Failed(err.user_message().to_string());
                Err(err)
            }
        }
    }

    /// Record a load that failed before the bytes reached the parser.
    pub fn fail_loading(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "model failed to load");
        self.begin_loading();
        self.phase = Phase::Failed(message);
    }

    /// Drop the model and return to `Closed`.
    pub fn close(&mut self) {
        debug!("viewer closed");
        self.phase = Phase::Closed;
        self.view = ViewState::default();
    }

    fn ready(&self) -> Result<&LoadedModel, ViewerError> {
        self.model().ok_or(ViewerError::NotReady)
    }

    /// Draw the current view without advancing the animation.
    pub fn render(&self) -> Result<Frame, ViewerError> {
        let model = self.ready()?;
        Ok(render_mesh(
            &model.mesh,
            &model.bounds,
            &self.view,
            &self.viewport,
            &self.config,
            &self.style,
        ))
    }

    /// One animation frame: idle rotation, then draw.
    pub fn tick(&mut self) -> Result<Frame, ViewerError> {
        self.ready()?;
        self.view = self.view.advance(&self.config);
        self.render()
    }

    fn update(
        &mut self,
        transition: impl FnOnce(ViewState, &ViewConfig) -> ViewState,
    ) -> Result<ViewState, ViewerError> {
        self.ready()?;
        self.view = transition(self.view, &self.config);
        Ok(self.view)
    }

    pub fn begin_drag(&mut self, pos: PointerPos) -> Result<ViewState, ViewerError> {
        self.update(|view, _| view.begin_drag(pos))
    }

    pub fn drag_to(&mut self, pos: PointerPos) -> Result<ViewState, ViewerError> {
        self.update(|view, config| view.apply_drag(pos, config))
    }

    pub fn end_drag(&mut self) -> Result<ViewState, ViewerError> {
        self.update(|view, _| view.end_drag())
    }

    pub fn zoom_in(&mut self) -> Result<ViewState, ViewerError> {
        self.update(|view, config| view.zoom_in(config))
    }

    pub fn zoom_out(&mut self) -> Result<ViewState, ViewerError> {
        self.update(|view, config| view.zoom_out(config))
    }

    pub fn reset_rotation(&mut self) -> Result<ViewState, ViewerError> {
        self.update(|view, _| view.reset_rotation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_harness::helpers::{cube, single_triangle};
    use test_harness::stl::encode_binary_stl;

    fn cube_bytes() -> Vec<u8> {
        encode_binary_stl(&cube(10.0), "cube").unwrap()
    }

    #[test]
    fn starts_closed() {
        let session = ViewerSession::default();
        assert_eq!(session.state(), SessionState::Closed);
        assert!(session.model_info().is_none());
    }

    #[test]
    fn open_reaches_ready() {
        let mut session = ViewerSession::default();
        let info = session.open("cube.stl", &cube_bytes()).unwrap();
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(info.volume, 1.0);
        assert_eq!(session.model_info(), Some(&info));
    }

    #[test]
    fn bad_file_enters_error_state() {
        let mut session = ViewerSession::default();
        let err = session.open("junk.stl", b"not an stl").unwrap_err();
        assert_eq!(err, ViewerError::Stl(stl_io::StlError::NoGeometry));
        assert_eq!(
            session.state(),
            SessionState::Error {
                message: "No geometry found in file.".to_string()
            }
        );
        assert_eq!(session.tick().unwrap_err(), ViewerError::NotReady);
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let mut session = ViewerSession::default();
        let err = session.open("cube.obj", &cube_bytes()).unwrap_err();
        assert_eq!(err.user_message(), "Please upload a valid STL file");
    }

    #[test]
    fn interaction_requires_model() {
        let mut session = ViewerSession::default();
        assert_eq!(session.zoom_in(), Err(ViewerError::NotReady));
        assert_eq!(session.render(), Err(ViewerError::NotReady));
        assert_eq!(session.view(), &ViewState::default());
    }

    #[test]
    fn reopen_replaces_model_and_view() {
        let mut session = ViewerSession::default();
        let first = session.open("cube.stl", &cube_bytes()).unwrap();
        session.zoom_in().unwrap();
        session.tick().unwrap();

        let tri = encode_binary_stl(&single_triangle(), "tri").unwrap();
        let second = session.open("tri.stl", &tri).unwrap();
        assert_ne!(first.mesh_id, second.mesh_id);
        assert_eq!(session.view(), &ViewState::default());

        let frame = session.render().unwrap();
        assert_eq!(frame.mesh_id, second.mesh_id);
        assert_eq!(frame.triangle_count(), 1);
    }

    #[test]
    fn failed_reopen_drops_previous_model() {
        let mut session = ViewerSession::default();
        session.open("cube.stl", &cube_bytes()).unwrap();
        assert!(session.open("empty.stl", b"").is_err());
        assert!(session.model().is_none());
    }

    #[test]
    fn tick_pauses_during_drag() {
        let mut session = ViewerSession::default();
        session.open("cube.stl", &cube_bytes()).unwrap();
        session.begin_drag(PointerPos::new(0.0, 0.0)).unwrap();
        let before = *session.view();
        session.tick().unwrap();
        assert_eq!(session.view().rotation, before.rotation);
        session.end_drag().unwrap();
        session.tick().unwrap();
        assert_ne!(session.view().rotation, before.rotation);
    }

    #[test]
    fn fail_loading_replaces_ready_model() {
        let mut session = ViewerSession::default();
        session.open("cube.stl", &cube_bytes()).unwrap();
        session.zoom_in().unwrap();
        session.fail_loading("corrupt upload");
        assert_eq!(
            session.state(),
            SessionState::Error {
                message: "corrupt upload".to_string()
            }
        );
        assert!(session.model().is_none());
        assert_eq!(session.view(), &ViewState::default());
    }

    #[test]
    fn invalid_viewport_is_rejected() {
        let mut session = ViewerSession::default();
        for (width, height) in [
            (-100.0, 500.0),
            (0.0, 500.0),
            (700.0, f64::NAN),
            (f64::INFINITY, 500.0),
            (5e7, 1.0),
        ] {
            assert!(matches!(
                session.set_viewport(Viewport::new(width, height)),
                Err(ViewerError::InvalidViewport { .. })
            ));
        }
        assert_eq!(session.viewport(), &Viewport::default());

        session.set_viewport(Viewport::new(320.0, 240.0)).unwrap();
        assert_eq!(session.viewport(), &Viewport::new(320.0, 240.0));
    }

    #[test]
    fn close_discards_everything() {
        let mut session = ViewerSession::default();
        session.open("cube.stl", &cube_bytes()).unwrap();
        session.close();
        assert_eq!(session.state(), SessionState::Closed);
        assert!(session.model().is_none());
    }
}
