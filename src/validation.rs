//! Input validation and timetable verification.
//!
//! [`validate_input`] checks a roster before generation. Detects:
//! - Empty section, subject or teacher names
//! - Duplicate section or subject names
//! - Eligibility entries naming a subject that does not exist
//!
//! Duplicate subject codes are allowed. The generator does not require
//! validation; it degrades unplaceable subjects to diagnostics.
//!
//! [`verify_timetable`] checks a generated timetable against the grid
//! invariants: section and teacher views agree cell for cell, labs are
//! intact contiguous blocks, and runs longer than the consecutive limit
//! only occur where a lab is involved.

use std::collections::HashSet;
use thiserror::Error;

use crate::config::TimetableConfig;
use crate::models::{Grid, SectionCell, SessionKind, Timetable, TimetableInput};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A section, subject or teacher has an empty name.
    EmptyName,
    /// Two sections or two subjects share a name.
    DuplicateName,
    /// A teacher lists a subject that is not in the roster.
    UnknownSubject,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a generation input.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(input: &TimetableInput) -> ValidationResult {
    let mut errors = Vec::new();

    let mut sections = HashSet::new();
    for name in &input.section_names {
        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Section with empty name",
            ));
        } else if !sections.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate section name: {name}"),
            ));
        }
    }

    let mut subjects = HashSet::new();
    for subject in &input.subjects {
        if subject.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Subject with code '{}' has an empty name", subject.code),
            ));
        } else if !subjects.insert(subject.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate subject name: {}", subject.name),
            ));
        }
    }

    for teacher in &input.teachers {
        if teacher.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Teacher with empty name",
            ));
        }
        for subject in &teacher.subjects {
            if !subjects.contains(subject.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubject,
                    format!(
                        "Teacher '{}' references unknown subject '{}'",
                        teacher.name, subject
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A broken invariant in a generated timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableViolation {
    /// Type of violation.
    pub kind: TimetableViolationKind,
    /// Section or teacher the violation was found in.
    pub entity: String,
    /// Day index.
    pub day: usize,
    /// Slot index (first slot of the run for run violations).
    pub slot: usize,
    /// Human-readable description.
    pub message: String,
}

/// Classification of timetable violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimetableViolationKind {
    /// A section cell has no matching cell in its teacher's grid.
    TeacherMismatch,
    /// A teacher cell has no matching cell in the named section's grid.
    OrphanTeacherCell,
    /// A lab part is missing its neighbouring parts or has the wrong span.
    BrokenLab,
    /// A theory-only run exceeds the consecutive limit.
    ConsecutiveRun,
}

impl TimetableViolation {
    fn new(
        kind: TimetableViolationKind,
        entity: &str,
        day: usize,
        slot: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            entity: entity.to_string(),
            day,
            slot,
            message: message.into(),
        }
    }
}

/// Checks a timetable against the grid invariants.
///
/// Returns every violation found; an empty vector means the timetable is
/// consistent.
pub fn verify_timetable(timetable: &Timetable, config: &TimetableConfig) -> Vec<TimetableViolation> {
    let mut violations = Vec::new();

    for section in &timetable.sections {
        let name = section.section_name.as_str();
        let grid = &section.timetable;

        for (day, slot, cell) in grid.iter_occupied() {
            let mirrored = timetable
                .teacher_schedule(&cell.teacher)
                .and_then(|g| g.get(day, slot))
                .is_some_and(|tc| {
                    tc.section == name
                        && tc.code == cell.code
                        && tc.subject == cell.subject
                        && tc.kind == cell.kind.subject_kind()
                });
            if !mirrored {
                violations.push(TimetableViolation::new(
                    TimetableViolationKind::TeacherMismatch,
                    name,
                    day,
                    slot,
                    format!("'{}' by '{}' not mirrored in teacher schedule", cell.subject, cell.teacher),
                ));
            }

            if let SessionKind::Lab { part, total } = cell.kind {
                if let Some(message) = check_lab_part(grid, day, slot, cell, part, total, config.lab_span) {
                    violations.push(TimetableViolation::new(
                        TimetableViolationKind::BrokenLab,
                        name,
                        day,
                        slot,
                        message,
                    ));
                }
            }
        }

        for day in 0..grid.day_count() {
            for run in grid.runs(day) {
                if run.len() <= config.max_consecutive {
                    continue;
                }
                let has_lab = run
                    .clone()
                    .filter_map(|s| grid.get(day, s))
                    .any(|c| matches!(c.kind, SessionKind::Lab { .. }));
                if !has_lab {
                    violations.push(TimetableViolation::new(
                        TimetableViolationKind::ConsecutiveRun,
                        name,
                        day,
                        run.start,
                        format!("{} consecutive theory periods", run.len()),
                    ));
                }
            }
        }
    }

    for (teacher, grid) in &timetable.teacher_schedules {
        for (day, slot, tc) in grid.iter_occupied() {
            let matched = timetable
                .section(&tc.section)
                .and_then(|s| s.timetable.get(day, slot))
                .is_some_and(|sc| &sc.teacher == teacher && sc.code == tc.code);
            if !matched {
                violations.push(TimetableViolation::new(
                    TimetableViolationKind::OrphanTeacherCell,
                    teacher,
                    day,
                    slot,
                    format!("'{}' for section '{}' missing from section grid", tc.subject, tc.section),
                ));
            }
        }
    }

    violations
}

fn check_lab_part(
    grid: &Grid<SectionCell>,
    day: usize,
    slot: usize,
    cell: &SectionCell,
    part: usize,
    total: usize,
    lab_span: usize,
) -> Option<String> {
    if total != lab_span || part == 0 || part > total {
        return Some(format!("lab part {part}/{total} does not fit span {lab_span}"));
    }
    let same_block = |s: usize, expected_part: usize| {
        grid.get(day, s).is_some_and(|c| {
            c.code == cell.code
                && c.teacher == cell.teacher
                && c.kind
                    == SessionKind::Lab {
                        part: expected_part,
                        total,
                    }
        })
    };
    if part > 1 && (slot == 0 || !same_block(slot - 1, part - 1)) {
        return Some(format!("lab part {part}/{total} missing preceding part"));
    }
    if part < total && !same_block(slot + 1, part + 1) {
        return Some(format!("lab part {part}/{total} missing following part"));
    }
    None
}
