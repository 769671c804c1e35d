//! Teacher model.

use serde::{Deserialize, Serialize};

/// A teacher and the subjects they may teach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Teacher name (output key for teacher schedules).
    pub name: String,
    /// Names of subjects this teacher is eligible for.
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl Teacher {
    /// Creates a teacher with no eligible subjects.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subjects: Vec::new(),
        }
    }

    /// Adds an eligible subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Adds several eligible subjects.
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects.extend(subjects.into_iter().map(Into::into));
        self
    }

    /// Whether this teacher may teach the named subject (exact match).
    pub fn can_teach(&self, subject_name: &str) -> bool {
        self.subjects.iter().any(|s| s == subject_name)
    }

    /// Groups flat `(teacher, subject)` eligibility rows into teachers.
    ///
    /// Teachers appear in first-seen order; a teacher's subjects keep row order.
    ///
    /// ```
    /// use u_timetable::models::Teacher;
    ///
    /// let teachers = Teacher::group_rows([("Alice", "Math"), ("Bob", "Art"), ("Alice", "Physics")]);
    /// assert_eq!(teachers.len(), 2);
    /// assert_eq!(teachers[0].subjects, vec!["Math", "Physics"]);
    /// ```
    pub fn group_rows<I, T, S>(rows: I) -> Vec<Teacher>
    where
        I: IntoIterator<Item = (T, S)>,
        T: Into<String>,
        S: Into<String>,
    {
        let mut teachers: Vec<Teacher> = Vec::new();
        for (teacher, subject) in rows {
            let teacher = teacher.into();
            match teachers.iter_mut().find(|t| t.name == teacher) {
                Some(existing) => existing.subjects.push(subject.into()),
                None => teachers.push(Teacher::new(teacher).with_subject(subject)),
            }
        }
        teachers
    }
}
