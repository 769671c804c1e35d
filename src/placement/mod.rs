//! Slot-search placers.
//!
//! A placer tries to fit one subject for one (section, teacher) pair,
//! writing matching cells into the section grid and the teacher grid.
//!
//! | Placer | Shape | Consecutive check | On failure |
//! |--------|-------|-------------------|------------|
//! | [`TheoryPlacer`] | N single periods anywhere in the week | yes | keeps what it placed |
//! | [`LabPlacer`] | one contiguous block on one day | no | places nothing |
//!
//! Search order is randomized (see [`crate::random`]); there is no
//! backtracking once a cell is written.

mod lab;
mod theory;

pub use lab::LabPlacer;
pub use theory::TheoryPlacer;

use rand::Rng;

use crate::models::{Grid, SectionCell, Subject, TeacherCell};

/// The two grids a placement writes to, and the names recorded in them.
#[derive(Debug)]
pub struct PlacementTarget<'a> {
    /// Section being scheduled.
    pub section_name: &'a str,
    /// The section's grid.
    pub section_grid: &'a mut Grid<SectionCell>,
    /// Teacher being tried.
    pub teacher_name: &'a str,
    /// The teacher's grid (shared across sections of one call).
    pub teacher_grid: &'a mut Grid<TeacherCell>,
}

impl PlacementTarget<'_> {
    /// Whether `(day, slot)` is free in both the section and the teacher grid.
    #[inline]
    pub fn is_free(&self, day: usize, slot: usize) -> bool {
        !self.section_grid.is_occupied(day, slot) && !self.teacher_grid.is_occupied(day, slot)
    }
}

/// What a placer achieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementOutcome {
    /// Cells needed for success.
    pub required: usize,
    /// `(day, slot)` positions written, in placement order.
    pub positions: Vec<(usize, usize)>,
}

impl PlacementOutcome {
    pub(crate) fn new(required: usize) -> Self {
        Self {
            required,
            positions: Vec::with_capacity(required),
        }
    }

    /// Number of cells written.
    #[inline]
    pub fn placed(&self) -> usize {
        self.positions.len()
    }

    /// Whether the required count was reached.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.placed() >= self.required
    }

    /// Clears every position this outcome wrote from both grids.
    pub fn rollback(&self, target: &mut PlacementTarget<'_>) {
        for &(day, slot) in &self.positions {
            target.section_grid.clear(day, slot);
            target.teacher_grid.clear(day, slot);
        }
    }
}

/// Strategy for placing one subject into a section/teacher pair.
pub trait Placer {
    /// Placer name, for logging.
    fn name(&self) -> &'static str;

    /// Attempts the placement, mutating `target`'s grids.
    fn place<R: Rng + ?Sized>(
        &self,
        subject: &Subject,
        target: &mut PlacementTarget<'_>,
        rng: &mut R,
    ) -> PlacementOutcome;
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_is_free_checks_both_grids() {
        let (mut sg, mut tg) = grids();
        sg.place(0, 0, filler());
        tg.place(0, 1, busy());
        let target = PlacementTarget {
            section_name: "A",
            section_grid: &mut sg,
            teacher_name: "Alice",
            teacher_grid: &mut tg,
        };
        assert!(!target.is_free(0, 0));
        assert!(!target.is_free(0, 1));
        assert!(target.is_free(0, 2));
    }

    #[test]
    fn test_rollback_clears_positions() {
        let (mut sg, mut tg) = grids();
        sg.place(1, 1, filler());
        tg.place(1, 1, busy());
        let outcome = PlacementOutcome {
            required: 2,
            positions: vec![(1, 1)],
        };
        assert!(!outcome.is_success());

        let mut target = PlacementTarget {
            section_name: "A",
            section_grid: &mut sg,
            teacher_name: "Alice",
            teacher_grid: &mut tg,
        };
        outcome.rollback(&mut target);
        assert_eq!(sg.occupied_count(), 0);
        assert_eq!(tg.occupied_count(), 0);
    }
}
