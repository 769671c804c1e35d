//! Theory placement: N independent single periods.
//!
//! # Algorithm
//!
//! 1. Required count = `config.periods_for(subject.priority)`.
//! 2. Enumerate all (day, slot) pairs and shuffle them.
//! 3. Scan in that order, skipping positions occupied in the section grid,
//!    occupied in the teacher grid, or that would push the section's run
//!    on that day past `max_consecutive`.
//! 4. Place into both grids until the count is reached.
//!
//! Cells already written stay written when the count is not reached.
//!
//! # Complexity
//! O(days × slots²) per attempt (run scan per candidate).

use rand::Rng;
use tracing::trace;

use super::{PlacementOutcome, PlacementTarget, Placer};
use crate::config::TimetableConfig;
use crate::models::{SectionCell, SessionKind, Subject, SubjectKind, TeacherCell};
use crate::random::shuffle;

/// Places single-period theory sessions.
#[derive(Debug, Clone, Copy)]
pub struct TheoryPlacer<'c> {
    config: &'c TimetableConfig,
}

impl<'c> TheoryPlacer<'c> {
    /// Creates a placer bound to a configuration.
    pub fn new(config: &'c TimetableConfig) -> Self {
        Self { config }
    }
}

impl Placer for TheoryPlacer<'_> {
    fn name(&self) -> &'static str {
        "theory"
    }

    fn place<R: Rng + ?Sized>(
        &self,
        subject: &Subject,
        target: &mut PlacementTarget<'_>,
        rng: &mut R,
    ) -> PlacementOutcome {
        let required = self.config.periods_for(subject.priority);
        let mut outcome = PlacementOutcome::new(required);

        let mut candidates: Vec<(usize, usize)> = (0..self.config.day_count())
            .flat_map(|d| (0..self.config.slot_count()).map(move |s| (d, s)))
            .collect();
        shuffle(&mut candidates, rng);

        for (day, slot) in candidates {
            if outcome.is_success() {
                break;
            }
            if !target.is_free(day, slot) {
                continue;
            }
            if target
                .section_grid
                .would_violate_consecutive(day, slot, self.config.max_consecutive)
            {
                continue;
            }

            target.section_grid.place(
                day,
                slot,
                SectionCell {
                    subject: subject.name.clone(),
                    teacher: target.teacher_name.to_string(),
                    code: subject.code.clone(),
                    kind: SessionKind::Theory,
                },
            );
            target.teacher_grid.place(
                day,
                slot,
                TeacherCell {
                    section: target.section_name.to_string(),
                    code: subject.code.clone(),
                    subject: subject.name.clone(),
                    kind: SubjectKind::Theory,
                },
            );
            trace!(subject = %subject.name, day, slot, "theory period placed");
            outcome.positions.push((day, slot));
        }

        outcome
    }
}
