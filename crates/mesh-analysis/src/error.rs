/// Errors while deriving model metrics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("mesh has no triangles")]
    EmptyMesh,

    #[error("{quantity} is not finite")]
    NonFinite { quantity: &'static str },
}

impl AnalysisError {
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::EmptyMesh => "No geometry found in file.",
            AnalysisError::NonFinite { .. } => {
                "Failed to load STL file. Please check the file format."
            }
        }
    }
}
