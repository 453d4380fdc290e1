//! Grid inference and container synthesis
//!
//! This module places a flat list of positioned sibling elements into a
//! [`ChildrenMatrix`], classifies the resulting grid, and produces a `Node`
//! tree of row/column containers that reproduces the original arrangement.

pub mod classify;
pub mod error;
pub mod matrix;
pub mod synth;
pub mod types;

pub use classify::{flatten, is_single_column, is_single_row, row_occupancy, tuple_occupancy};
pub use error::LayoutError;
pub use matrix::ChildrenMatrix;
pub use synth::{
    generate_layout, identifier_leaf, synthesize, Arrangement, Direction, LeafRenderer, Node,
};
pub use types::*;
