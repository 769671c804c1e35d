//! Generation input (the roster for one course).

use serde::{Deserialize, Serialize};

use super::{Subject, Teacher};

/// Everything one generation call needs: sections, subjects, teachers.
///
/// Field names follow the wire format (`sectionNames`, `subjects`, `teachers`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableInput {
    /// Section names, processed in this order.
    pub section_names: Vec<String>,
    /// Subjects every section must take.
    pub subjects: Vec<Subject>,
    /// Teachers with their subject eligibility.
    pub teachers: Vec<Teacher>,
}

impl TimetableInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section.
    pub fn with_section(mut self, name: impl Into<String>) -> Self {
        self.section_names.push(name.into());
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }
}
