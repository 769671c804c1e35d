//! Integer identifiers for the roster.
//!
//! Teacher names and subject eligibility are resolved once per call into
//! dense ids so the generator can keep teacher grids in a `Vec` and look
//! up eligible teachers without string comparisons in the hot loop.

use std::collections::HashMap;

use crate::models::TimetableInput;

/// Dense teacher identifier (index into the teacher grid list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeacherId(pub usize);

/// Subject identifier (index into `TimetableInput::subjects`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(pub usize);

/// Resolved teacher ids and per-subject eligibility.
///
/// Teachers sharing a name collapse into one id whose eligibility is the
/// union of their subject lists.
#[derive(Debug, Clone)]
pub struct RosterIndex<'a> {
    teacher_names: Vec<&'a str>,
    eligible: Vec<Vec<TeacherId>>,
}

impl<'a> RosterIndex<'a> {
    /// Builds the index for one input.
    pub fn build(input: &'a TimetableInput) -> Self {
        let mut teacher_names: Vec<&'a str> = Vec::new();
        let mut ids: HashMap<&'a str, TeacherId> = HashMap::new();
        let mut teaches: Vec<Vec<&'a str>> = Vec::new();

        for teacher in &input.teachers {
            let id = *ids.entry(teacher.name.as_str()).or_insert_with(|| {
                teacher_names.push(teacher.name.as_str());
                teaches.push(Vec::new());
                TeacherId(teacher_names.len() - 1)
            });
            teaches[id.0].extend(teacher.subjects.iter().map(String::as_str));
        }

        let eligible = input
            .subjects
            .iter()
            .map(|subject| {
                teaches
                    .iter()
                    .enumerate()
                    .filter(|(_, subjects)| subjects.contains(&subject.name.as_str()))
                    .map(|(idx, _)| TeacherId(idx))
                    .collect()
            })
            .collect();

        Self {
            teacher_names,
            eligible,
        }
    }

    /// Number of distinct teachers.
    #[inline]
    pub fn teacher_count(&self) -> usize {
        self.teacher_names.len()
    }

    /// Name of a teacher.
    pub fn teacher_name(&self, id: TeacherId) -> &'a str {
        self.teacher_names[id.0]
    }

    /// Id of a teacher by name.
    pub fn teacher_id(&self, name: &str) -> Option<TeacherId> {
        self.teacher_names
            .iter()
            .position(|n| *n == name)
            .map(TeacherId)
    }

    /// Teachers eligible for a subject, in roster order.
    pub fn eligible_teachers(&self, subject: SubjectId) -> &[TeacherId] {
        &self.eligible[subject.0]
    }

    /// Teacher names in id order.
    pub fn teacher_names(&self) -> &[&'a str] {
        &self.teacher_names
    }
}
