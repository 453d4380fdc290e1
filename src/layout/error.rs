//! Error types for grid inference

use thiserror::Error;

/// Errors that can occur while building or populating a grid
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// Grid constructed with fewer than one row/column
    #[error("invalid grid dimension {size}: a grid needs at least one slot")]
    InvalidDimension { size: usize },

    /// No free frontier slot was left for an element
    #[error("no free slot for element '{element}' ({placed} of {capacity} slots placed)")]
    GridOverflow {
        element: String,
        placed: usize,
        capacity: usize,
    },
}

impl LayoutError {
    /// Create an invalid dimension error
    pub fn invalid_dimension(size: usize) -> Self {
        Self::InvalidDimension { size }
    }

    /// Create a grid overflow error
    pub fn overflow(element: impl Into<String>, placed: usize, capacity: usize) -> Self {
        Self::GridOverflow {
            element: element.into(),
            placed,
            capacity,
        }
    }
}
