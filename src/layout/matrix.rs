//! Grid inference over sibling elements
//!
//! A [`ChildrenMatrix`] is an `n × n` grid (one row and one column per
//! element in the worst case) that elements are placed into one at a time.
//! Each element picks the frontier slot whose row and column neighbors agree
//! best with its own position:
//!
//! ```text
//! cost = Σ |e.y - r.y| for r in row neighbors
//!      + Σ |e.x - c.x| for c in column neighbors
//! ```
//!
//! Placement is greedy and never revisits an earlier decision, so the result
//! depends on the order elements are supplied in.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::error::LayoutError;
use super::types::{Element, Slot};

/// Square grid of optional element references
#[derive(Debug, Clone)]
pub struct ChildrenMatrix<'a> {
    n: usize,
    /// Row-major slot storage, `n * n` entries
    slots: Vec<Option<&'a Element>>,
}

impl<'a> ChildrenMatrix<'a> {
    /// Allocate an empty `n × n` grid
    pub fn new(n: usize) -> Result<Self, LayoutError> {
        if n < 1 {
            return Err(LayoutError::invalid_dimension(n));
        }
        debug!(dimension = n, "allocating children matrix");
        Ok(Self {
            n,
            slots: vec![None; n * n],
        })
    }

    /// Build a grid sized for `elements` and place every one of them
    pub fn from_elements(elements: &'a [Element]) -> Result<Self, LayoutError> {
        let mut matrix = Self::new(elements.len())?;
        matrix.populate(elements)?;
        Ok(matrix)
    }

    /// Number of rows (and columns)
    pub fn dimension(&self) -> usize {
        self.n
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.n + column
    }

    /// Write `element` into a slot, replacing any previous occupant
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not below [`dimension`](Self::dimension).
    pub fn set_child(&mut self, row: usize, column: usize, element: &'a Element) {
        assert!(
            row < self.n && column < self.n,
            "slot ({}, {}) outside {}x{} grid",
            row,
            column,
            self.n,
            self.n
        );
        let index = self.index(row, column);
        self.slots[index] = Some(element);
    }

    /// Occupant of a slot, `None` when empty or out of range
    pub fn child(&self, row: usize, column: usize) -> Option<&'a Element> {
        if row >= self.n || column >= self.n {
            return None;
        }
        self.slots[self.index(row, column)]
    }

    /// Whether a slot holds an element; out-of-range slots are empty
    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.child(slot.row, slot.column).is_some()
    }

    /// The row tuple at `row_index`; empty when out of range
    pub fn row(&self, row_index: usize) -> &[Option<&'a Element>] {
        if row_index >= self.n {
            return &[];
        }
        let start = self.index(row_index, 0);
        &self.slots[start..start + self.n]
    }

    /// All row tuples, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<&'a Element>]> + '_ {
        self.slots.chunks(self.n)
    }

    /// Occupied slots in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Slot, &'a Element)> + '_ {
        let n = self.n;
        self.slots
            .iter()
            .enumerate()
            .filter_map(move |(index, slot)| slot.map(|e| (Slot::new(index / n, index % n), e)))
    }

    /// Number of slots holding an element
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of occupied slots in a row, 0 for rows outside the grid
    pub fn row_occupancy(&self, row_index: usize) -> usize {
        super::classify::tuple_occupancy(self.row(row_index))
    }

    /// Elements sharing the slot's row, in column order
    pub fn row_neighbors(&self, slot: Slot) -> Vec<&'a Element> {
        self.row(slot.row).iter().flatten().copied().collect()
    }

    /// Elements sharing the slot's column, in row order
    pub fn column_neighbors(&self, slot: Slot) -> Vec<&'a Element> {
        (0..self.n)
            .filter_map(|row| self.child(row, slot.column))
            .collect()
    }

    /// Positional disagreement between `candidate` and the slot's neighbors
    ///
    /// Row neighbors are compared on `y`, column neighbors on `x`. An empty
    /// row or column contributes nothing.
    pub fn placement_cost(&self, slot: Slot, candidate: &Element) -> f64 {
        let row_cost: f64 = self
            .row_neighbors(slot)
            .iter()
            .map(|neighbor| (candidate.bounds.y - neighbor.bounds.y).abs())
            .sum();
        let column_cost: f64 = self
            .column_neighbors(slot)
            .iter()
            .map(|neighbor| (candidate.bounds.x - neighbor.bounds.x).abs())
            .sum();
        row_cost + column_cost
    }

    /// Every slot the next element may be placed in
    ///
    /// On an empty grid this is just the origin. Otherwise, walking occupied
    /// slots row-major, the empty slot below and then the empty slot to the
    /// right of each one, first occurrence kept.
    pub fn candidate_slots(&self) -> Vec<Slot> {
        let mut candidates = Vec::new();
        let mut seen = HashSet::new();
        let mut any_occupied = false;

        for (slot, _) in self.occupied() {
            any_occupied = true;
            let neighbors = [
                (slot.row + 1 < self.n).then(|| slot.below()),
                (slot.column + 1 < self.n).then(|| slot.right()),
            ];
            for next in neighbors.into_iter().flatten() {
                if !self.is_occupied(next) && seen.insert(next) {
                    candidates.push(next);
                }
            }
        }

        if !any_occupied {
            return vec![Slot::origin()];
        }
        candidates
    }

    /// The cheapest candidate slot for `element`
    ///
    /// Ties go to the candidate enumerated first. Returns `None` only when
    /// no frontier slot is left.
    pub fn choose_best_slot(&self, element: &Element) -> Option<Slot> {
        let candidates = self.candidate_slots();
        let mut best: Option<(Slot, f64)> = None;

        for slot in &candidates {
            let cost = self.placement_cost(*slot, element);
            match best {
                Some((_, best_cost)) if !(cost < best_cost) => {}
                _ => best = Some((*slot, cost)),
            }
        }

        if let Some((slot, cost)) = best {
            trace!(
                element = %element.id,
                slot = %slot,
                cost,
                candidates = candidates.len(),
                "chose slot"
            );
        }
        best.map(|(slot, _)| slot)
    }

    /// Place `elements` in order, each into its own best slot
    ///
    /// The first element goes through [`choose_best_slot`](Self::choose_best_slot)
    /// like the rest, so it lands on the origin only when the grid is empty.
    /// On a grid already holding elements it joins their frontier instead of
    /// overwriting `(0, 0)`.
    pub fn populate(&mut self, elements: &'a [Element]) -> Result<(), LayoutError> {
        for element in elements {
            let slot = self.choose_best_slot(element).ok_or_else(|| {
                LayoutError::overflow(&element.id, self.occupied_count(), self.n * self.n)
            })?;
            self.set_child(slot.row, slot.column, element);
        }
        Ok(())
    }
}
