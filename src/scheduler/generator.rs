//! Timetable generator.
//!
//! # Algorithm
//!
//! 1. Create one empty grid per (distinct) teacher; these are shared by
//!    every section of the call so a teacher is never double-booked.
//! 2. Order subjects by ascending priority number (stable: ties keep input order).
//! 3. For each section in input order, with a fresh section grid:
//!    - collect the subject's eligible teachers; none → diagnostic, skip;
//!    - shuffle them and try each with the lab or theory placer until one
//!      reaches the required count;
//!    - all failed → diagnostic, continue with the next subject.
//! 4. Return section grids in input order plus teacher grids by name.
//!
//! Greedy and randomized: no backtracking across subjects, no guarantee of
//! full placement. Repeated calls on the same input may differ.
//!
//! # Complexity
//! O(sections × subjects × teachers × days × slots²)

use rand::Rng;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, debug_span, info, info_span, warn};

use super::index::{RosterIndex, SubjectId};
use crate::config::{ConfigError, PartialPlacementPolicy, TimetableConfig};
use crate::models::{
    Diagnostic, DiagnosticKind, Grid, SectionCell, SectionTimetable, Subject, SubjectKind,
    TeacherCell, Timetable, TimetableInput,
};
use crate::placement::{LabPlacer, PlacementOutcome, PlacementTarget, Placer, TheoryPlacer};
use crate::random::shuffled;

/// Errors from constructing a generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The configuration failed validation.
    #[error("invalid timetable configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Randomized greedy timetable generator.
///
/// Each call to [`generate`](Self::generate) works on private, freshly
/// created grids; nothing is carried between calls.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Subject, Teacher, TimetableInput};
/// use u_timetable::scheduler::TimetableGenerator;
///
/// let input = TimetableInput::new()
///     .with_section("A")
///     .with_subject(Subject::new("Math", "M1").with_priority(1))
///     .with_teacher(Teacher::new("Alice").with_subject("Math"));
///
/// let timetable = TimetableGenerator::default().generate(&input);
/// assert_eq!(timetable.sections[0].timetable.occupied_count(), 4);
/// assert!(timetable.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    config: TimetableConfig,
}

impl TimetableGenerator {
    /// Creates a generator after validating the configuration.
    pub fn new(config: TimetableConfig) -> Result<Self, GenerateError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// Generates a timetable using the thread-local RNG.
    pub fn generate(&self, input: &TimetableInput) -> Timetable {
        self.generate_with_rng(input, &mut rand::rng())
    }

    /// Generates a timetable drawing search order from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, input: &TimetableInput, rng: &mut R) -> Timetable {
        let _span = info_span!(
            "generate_timetable",
            sections = input.section_names.len(),
            subjects = input.subjects.len(),
            teachers = input.teachers.len()
        )
        .entered();

        let index = RosterIndex::build(input);
        let mut teacher_grids: Vec<Grid<TeacherCell>> = (0..index.teacher_count())
            .map(|_| Grid::from_config(&self.config))
            .collect();
        let order = priority_order(&input.subjects);

        let mut sections = Vec::with_capacity(input.section_names.len());
        let mut diagnostics = Vec::new();

        for section_name in &input.section_names {
            let _section_span = debug_span!("section", section = %section_name).entered();
            let mut section_grid = Grid::from_config(&self.config);

            for &subject_id in &order {
                let subject = &input.subjects[subject_id.0];
                if let Some(diagnostic) = self.schedule_subject(
                    &index,
                    subject_id,
                    subject,
                    section_name,
                    &mut section_grid,
                    &mut teacher_grids,
                    rng,
                ) {
                    warn!("{diagnostic}");
                    diagnostics.push(diagnostic);
                }
            }

            sections.push(SectionTimetable {
                section_name: section_name.clone(),
                timetable: section_grid,
            });
        }

        let teacher_schedules: BTreeMap<String, Grid<TeacherCell>> = index
            .teacher_names()
            .iter()
            .map(|name| name.to_string())
            .zip(teacher_grids)
            .collect();

        let timetable = Timetable {
            sections,
            teacher_schedules,
            diagnostics,
        };
        info!(
            placed_cells = timetable.placed_cells(),
            diagnostics = timetable.diagnostics.len(),
            "timetable generated"
        );
        timetable
    }

    /// Places one subject in one section. Returns a diagnostic on failure.
    #[allow(clippy::too_many_arguments)]
    fn schedule_subject<R: Rng + ?Sized>(
        &self,
        index: &RosterIndex<'_>,
        subject_id: SubjectId,
        subject: &Subject,
        section_name: &str,
        section_grid: &mut Grid<SectionCell>,
        teacher_grids: &mut [Grid<TeacherCell>],
        rng: &mut R,
    ) -> Option<Diagnostic> {
        let eligible = index.eligible_teachers(subject_id);
        if eligible.is_empty() {
            return Some(Diagnostic {
                section: section_name.to_string(),
                subject: subject.name.clone(),
                code: subject.code.clone(),
                kind: DiagnosticKind::NoEligibleTeacher,
            });
        }

        let kind = subject.kind();
        let candidates = shuffled(eligible, rng);
        let mut required = 0;

        for teacher_id in &candidates {
            let teacher_name = index.teacher_name(*teacher_id);
            let mut target = PlacementTarget {
                section_name,
                section_grid: &mut *section_grid,
                teacher_name,
                teacher_grid: &mut teacher_grids[teacher_id.0],
            };

            let outcome = match kind {
                SubjectKind::Theory => attempt(&TheoryPlacer::new(&self.config), subject, &mut target, rng),
                SubjectKind::Lab => attempt(&LabPlacer::new(&self.config), subject, &mut target, rng),
            };
            required = outcome.required;

            if outcome.is_success() {
                debug!(subject = %subject.name, teacher = teacher_name, "subject placed");
                return None;
            }
            if self.config.partial_policy == PartialPlacementPolicy::Rollback {
                outcome.rollback(&mut target);
            }
        }

        let placed = section_grid
            .iter_occupied()
            .filter(|(_, _, cell)| cell.subject == subject.name && cell.code == subject.code)
            .count();
        Some(Diagnostic {
            section: section_name.to_string(),
            subject: subject.name.clone(),
            code: subject.code.clone(),
            kind: DiagnosticKind::Unplaced {
                required,
                placed,
                teachers_tried: candidates.len(),
            },
        })
    }
}

fn attempt<P: Placer, R: Rng + ?Sized>(
    placer: &P,
    subject: &Subject,
    target: &mut PlacementTarget<'_>,
    rng: &mut R,
) -> PlacementOutcome {
    let outcome = placer.place(subject, target, rng);
    debug!(
        placer = placer.name(),
        subject = %subject.name,
        teacher = target.teacher_name,
        placed = outcome.placed(),
        required = outcome.required,
        "placement attempt"
    );
    outcome
}

/// Subject ids sorted by ascending priority number; ties keep input order.
fn priority_order(subjects: &[Subject]) -> Vec<SubjectId> {
    let mut order: Vec<SubjectId> = (0..subjects.len()).map(SubjectId).collect();
    order.sort_by_key(|id| subjects[id.0].priority);
    order
}
