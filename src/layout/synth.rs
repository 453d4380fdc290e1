//! Container hierarchy synthesis
//!
//! Turns a populated [`ChildrenMatrix`] into a tree of row/column containers
//! whose leaves are produced by a caller-supplied [`LeafRenderer`]. Three
//! shapes are possible:
//!
//! - every element in one column: a single vertical container
//! - every element in one row: a single horizontal container
//! - anything else: a vertical container of per-row containers

use serde::Serialize;
use tracing::debug;

use super::classify::{flatten, is_single_column, is_single_row, tuple_occupancy};
use super::error::LayoutError;
use super::matrix::ChildrenMatrix;
use super::types::Element;

/// Main axis of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Vertical,
    Horizontal,
}

/// Synthesized structure: containers of containers, rendered fragments at the leaves
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node<F> {
    Container {
        direction: Direction,
        children: Vec<Node<F>>,
    },
    Leaf(F),
}

impl<F> Node<F> {
    pub fn vertical(children: Vec<Node<F>>) -> Self {
        Node::Container {
            direction: Direction::Vertical,
            children,
        }
    }

    pub fn horizontal(children: Vec<Node<F>>) -> Self {
        Node::Container {
            direction: Direction::Horizontal,
            children,
        }
    }

    /// Leaf fragments in document order
    pub fn leaves(&self) -> Vec<&F> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'n>(&'n self, out: &mut Vec<&'n F>) {
        match self {
            Node::Leaf(fragment) => out.push(fragment),
            Node::Container { children, .. } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Nesting depth; a lone leaf has depth 0
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Container { children, .. } => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Produces the fragment embedded for each placed element
pub trait LeafRenderer {
    type Output;

    fn render_leaf(&mut self, element: &Element) -> Self::Output;
}

impl<R, T> LeafRenderer for R
where
    R: FnMut(&Element) -> T,
{
    type Output = T;

    fn render_leaf(&mut self, element: &Element) -> T {
        self(element)
    }
}

/// Leaf renderer that embeds the element identifier
pub fn identifier_leaf(element: &Element) -> String {
    element.id.clone()
}

/// Structural shape of a populated grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    SingleColumn,
    SingleRow,
    Dispersed,
}

impl Arrangement {
    /// Classify a grid; a single element counts as a column
    pub fn of(matrix: &ChildrenMatrix<'_>) -> Self {
        if is_single_column(matrix) {
            Arrangement::SingleColumn
        } else if is_single_row(matrix) {
            Arrangement::SingleRow
        } else {
            Arrangement::Dispersed
        }
    }
}

/// Infer a grid for `elements` and build the container tree reproducing it
pub fn generate_layout<R: LeafRenderer>(
    elements: &[Element],
    mut renderer: R,
) -> Result<Node<R::Output>, LayoutError> {
    let matrix = ChildrenMatrix::from_elements(elements)?;
    let arrangement = Arrangement::of(&matrix);
    debug!(
        ?arrangement,
        elements = elements.len(),
        "classified children matrix"
    );
    Ok(synthesize(&matrix, arrangement, &mut renderer))
}

/// Build the container tree for an already populated grid
pub fn synthesize<R: LeafRenderer>(
    matrix: &ChildrenMatrix<'_>,
    arrangement: Arrangement,
    renderer: &mut R,
) -> Node<R::Output> {
    match arrangement {
        Arrangement::SingleColumn => Node::vertical(render_flat(matrix, renderer)),
        Arrangement::SingleRow => Node::horizontal(render_flat(matrix, renderer)),
        Arrangement::Dispersed => {
            let rows = matrix
                .rows()
                .filter(|tuple| tuple_occupancy(tuple) > 0)
                .map(|tuple| {
                    let children: Vec<_> = tuple
                        .iter()
                        .flatten()
                        .map(|element| Node::Leaf(renderer.render_leaf(element)))
                        .collect();
                    if children.len() > 1 {
                        Node::horizontal(children)
                    } else {
                        Node::vertical(children)
                    }
                })
                .collect();
            Node::vertical(rows)
        }
    }
}

fn render_flat<R: LeafRenderer>(
    matrix: &ChildrenMatrix<'_>,
    renderer: &mut R,
) -> Vec<Node<R::Output>> {
    flatten(matrix)
        .map(|element| Node::Leaf(renderer.render_leaf(element)))
        .collect()
}
