//! Test fixtures for the STL viewer crates.
//!
//! # Key Components
//!
//! - [`helpers`]: synthetic mesh builders (triangle, boxes, winding edits)
//! - [`stl`]: binary/ASCII STL encoders for producing parser inputs
//! - [`assertions`]: float assertions with diagnostic context

pub mod assertions;
pub mod helpers;
pub mod stl;

pub use helpers::HarnessError;
