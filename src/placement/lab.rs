//! Lab placement: one contiguous block on a single day.
//!
//! # Algorithm
//!
//! 1. Shuffle the day order.
//! 2. Per day, shuffle the valid start offsets `0..=slots - span`.
//! 3. Take the first start whose `span` slots are free in both grids and
//!    write all of them. No consecutive-run check applies to labs.
//!
//! All-or-nothing: a failed search leaves both grids untouched.

use rand::Rng;
use tracing::trace;

use super::{PlacementOutcome, PlacementTarget, Placer};
use crate::config::TimetableConfig;
use crate::models::{SectionCell, SessionKind, Subject, SubjectKind, TeacherCell};
use crate::random::shuffle;

/// Places contiguous lab blocks.
#[derive(Debug, Clone, Copy)]
pub struct LabPlacer<'c> {
    config: &'c TimetableConfig,
}

impl<'c> LabPlacer<'c> {
    /// Creates a placer bound to a configuration.
    pub fn new(config: &'c TimetableConfig) -> Self {
        Self { config }
    }

    fn block_is_free(&self, target: &PlacementTarget<'_>, day: usize, start: usize) -> bool {
        (start..start + self.config.lab_span).all(|slot| target.is_free(day, slot))
    }
}

impl Placer for LabPlacer<'_> {
    fn name(&self) -> &'static str {
        "lab"
    }

    fn place<R: Rng + ?Sized>(
        &self,
        subject: &Subject,
        target: &mut PlacementTarget<'_>,
        rng: &mut R,
    ) -> PlacementOutcome {
        let span = self.config.lab_span;
        let mut outcome = PlacementOutcome::new(span);
        let slot_count = self.config.slot_count();
        if span == 0 || span > slot_count {
            return outcome;
        }

        let mut days: Vec<usize> = (0..self.config.day_count()).collect();
        shuffle(&mut days, rng);

        for day in days {
            let mut starts: Vec<usize> = (0..=slot_count - span).collect();
            shuffle(&mut starts, rng);

            let Some(start) = starts
                .into_iter()
                .find(|&start| self.block_is_free(&*target, day, start))
            else {
                continue;
            };

            for k in 0..span {
                let slot = start + k;
                target.section_grid.place(
                    day,
                    slot,
                    SectionCell {
                        subject: subject.name.clone(),
                        teacher: target.teacher_name.to_string(),
                        code: subject.code.clone(),
                        kind: SessionKind::Lab {
                            part: k + 1,
                            total: span,
                        },
                    },
                );
                target.teacher_grid.place(
                    day,
                    slot,
                    TeacherCell {
                        section: target.section_name.to_string(),
                        code: subject.code.clone(),
                        subject: subject.name.clone(),
                        kind: SubjectKind::Lab,
                    },
                );
                outcome.positions.push((day, slot));
            }
            trace!(subject = %subject.name, day, start, "lab block placed");
            return outcome;
        }

        outcome
    }
}
