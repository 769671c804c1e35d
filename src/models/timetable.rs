//! Generation result.
//!
//! A [`Timetable`] holds one grid per section (in input order) and one
//! grid per teacher. Subjects that could not be placed are reported as
//! [`Diagnostic`]s instead of failing the call.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::{Grid, SectionCell, TeacherCell};

/// One section's generated timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTimetable {
    /// Section name.
    pub section_name: String,
    /// Section grid.
    pub timetable: Grid<SectionCell>,
}

/// Result of one generation call.
///
/// Serializes as `{ "sections": [...], "teacherSchedules": {...} }`;
/// diagnostics are not part of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    /// Section timetables in input order.
    pub sections: Vec<SectionTimetable>,
    /// Teacher name → teacher grid.
    pub teacher_schedules: BTreeMap<String, Grid<TeacherCell>>,
    /// Subjects left (partly) unplaced.
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

/// A subject that did not reach its required placement in a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Affected section.
    pub section: String,
    /// Subject name.
    pub subject: String,
    /// Subject code.
    pub code: String,
    /// What went wrong.
    pub kind: DiagnosticKind,
}

/// Why a subject was not placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// No teacher lists the subject.
    NoEligibleTeacher,
    /// Every eligible teacher was tried without success.
    Unplaced {
        /// Periods (or lab slots) required.
        required: usize,
        /// Periods left in the section grid for this subject.
        placed: usize,
        /// Number of teachers tried.
        teachers_tried: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::NoEligibleTeacher => write!(
                f,
                "section '{}': no eligible teacher for subject '{}' ({})",
                self.section, self.subject, self.code
            ),
            DiagnosticKind::Unplaced {
                required,
                placed,
                teachers_tried,
            } => write!(
                f,
                "section '{}': could not place subject '{}' ({}): {placed}/{required} after {teachers_tried} teacher(s)",
                self.section, self.subject, self.code
            ),
        }
    }
}

impl Timetable {
    /// Finds a section's timetable by name.
    pub fn section(&self, name: &str) -> Option<&SectionTimetable> {
        self.sections.iter().find(|s| s.section_name == name)
    }

    /// Finds a teacher's schedule by name.
    pub fn teacher_schedule(&self, name: &str) -> Option<&Grid<TeacherCell>> {
        self.teacher_schedules.get(name)
    }

    /// Whether every subject was fully placed in every section.
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Total occupied cells across all section grids.
    pub fn placed_cells(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.timetable.occupied_count())
            .sum()
    }
}
