//! Shared data model for the STL viewer pipeline.
//!
//! Everything here is plain data: the parser produces a [`Mesh`], the
//! analyzer derives a [`ModelInfo`] from it, and both cross the WASM bridge
//! as serde-serializable values.

pub mod info;
pub mod mesh;

pub use info::*;
pub use mesh::*;
