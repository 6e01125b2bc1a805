use mesh_analysis::AnalysisError;
use stl_io::StlError;

/// Errors surfaced by a viewer session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewerError {
    #[error("{name} does not have an .stl extension")]
    NotStl { name: String },

    #[error(transparent)]
    Stl(#[from] StlError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("no model is loaded")]
    NotReady,

    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
}

impl ViewerError {
    /// Text shown in the viewer's error panel.
    pub fn user_message(&self) -> &'static str {
        match self {
            ViewerError::NotStl { .. } => "Please upload a valid STL file",
            ViewerError::Stl(err) => err.user_message(),
            ViewerError::Analysis(err) => err.user_message(),
            ViewerError::NotReady => "No model is loaded.",
            ViewerError::InvalidViewport { .. } => "The viewer size is invalid.",
        }
    }
}
