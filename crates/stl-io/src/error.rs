/// Errors while reading an STL buffer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StlError {
    #[error("truncated STL: needed {needed} bytes, buffer has {len}")]
    Truncated { needed: usize, len: usize },

    #[error("no geometry found in file")]
    NoGeometry,

    #[error("STL declares zero triangles")]
    EmptyMesh,

    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

impl StlError {
    /// Text shown to the user when a load fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            StlError::Truncated { .. } | StlError::NonFinite { .. } => {
                "Failed to load STL file. Please check the file format."
            }
            StlError::NoGeometry => "No geometry found in file.",
            StlError::EmptyMesh => "The STL file contains no triangles.",
        }
    }
}
