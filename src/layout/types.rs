//! Core types for grid inference

use serde::{Deserialize, Serialize};

/// A bounding box representing the spatial extent of an element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A positioned sibling element as handed over by the extraction step
///
/// Two elements are equal when their identifiers match; geometry is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub bounds: BoundingBox,
}

impl Element {
    pub fn new(id: impl Into<String>, bounds: BoundingBox) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }

    /// Shorthand for an element whose size does not matter
    pub fn at(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(id, BoundingBox::new(x, y, 0.0, 0.0))
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Element {}

/// A `(row, column)` cell address in a [`ChildrenMatrix`](super::ChildrenMatrix)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub row: usize,
    pub column: usize,
}

impl Slot {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The grid origin, always the first slot filled
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// The slot directly below
    pub fn below(&self) -> Self {
        Self::new(self.row + 1, self.column)
    }

    /// The slot directly to the right
    pub fn right(&self) -> Self {
        Self::new(self.row, self.column + 1)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
