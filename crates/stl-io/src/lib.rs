//! STL ingestion: format detection plus binary and ASCII triangle-soup readers.
//!
//! The reader never re-validates the file extension and never writes STL back;
//! it turns bytes into a [`mesh_types::Mesh`] or an [`StlError`].

pub mod ascii;
pub mod binary;
pub mod detect;
pub mod error;

use mesh_types::{FileMeta, Mesh};
use tracing::{info, instrument};

pub use ascii::parse_ascii;
pub use binary::parse_binary;
pub use detect::{declared_triangle_count, detect_format, StlFormat};
pub use error::StlError;

/// Detect the encoding of `bytes` and parse it into a mesh.
#[instrument(skip(bytes), fields(len = bytes.len()))]
pub fn parse(bytes: &[u8]) -> Result<Mesh, StlError> {
    let format = detect_format(bytes);
    let mesh = match format {
        StlFormat::Binary { triangles } => parse_binary(bytes, triangles)?,
        StlFormat::Ascii => {
            let text = String::from_utf8_lossy(bytes);
            parse_ascii(&text)?
        }
    };
    info!(
        ?format,
        triangles = mesh.triangle_count(),
        vertices = mesh.vertex_count(),
        mesh_id = %mesh.id(),
        "STL parsed"
    );
    Ok(mesh)
}

/// Parse an uploaded file, keeping its name and size for the model summary.
pub fn parse_file(name: &str, bytes: &[u8]) -> Result<(Mesh, FileMeta), StlError> {
    let mesh = parse(bytes)?;
    Ok((mesh, FileMeta::new(name, bytes.len() as u64)))
}

/// The upload filter: `.stl`, case-insensitive.
pub fn has_stl_extension(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".stl")
}
