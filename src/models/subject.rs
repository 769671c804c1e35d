//! Subject model.
//!
//! A subject is something a section must be taught each week. Its
//! priority decides both processing order (lower number first) and the
//! number of weekly periods required. Its free-form type string decides
//! whether it is placed as single theory periods or as one contiguous
//! lab block.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A subject to be scheduled for every section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name; teacher eligibility refers to this.
    pub name: String,
    /// Display code. Not required to be unique.
    pub code: String,
    /// Scheduling priority (lower = scheduled first, more periods).
    pub priority: i32,
    /// Free-form type label, e.g. "Theory", "Lab", "Physics lab".
    /// Missing or `null` reads as empty, which is a theory subject.
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub subject_type: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// How a subject occupies the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectKind {
    /// Single-period sessions, placed independently.
    Theory,
    /// One block of contiguous slots on a single day.
    Lab,
}

impl Subject {
    /// Creates a theory subject with priority 1.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            priority: 1,
            subject_type: "Theory".to_string(),
        }
    }

    /// Creates a lab subject with priority 1.
    pub fn lab(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(name, code).with_type("Lab")
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the type label.
    pub fn with_type(mut self, subject_type: impl Into<String>) -> Self {
        self.subject_type = subject_type.into();
        self
    }

    /// Classifies the subject: any type containing "lab" (any case) is a lab.
    pub fn kind(&self) -> SubjectKind {
        if self.subject_type.to_lowercase().contains("lab") {
            SubjectKind::Lab
        } else {
            SubjectKind::Theory
        }
    }

    /// Whether this subject is placed as a lab block.
    #[inline]
    pub fn is_lab(&self) -> bool {
        self.kind() == SubjectKind::Lab
    }
}

impl SubjectKind {
    /// Label used in the teacher-side view.
    pub fn label(self) -> &'static str {
        match self {
            SubjectKind::Theory => "Theory",
            SubjectKind::Lab => "Lab",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_builder() {
        let s = Subject::new("Math", "M1").with_priority(2);
        assert_eq!(s.name, "Math");
        assert_eq!(s.code, "M1");
        assert_eq!(s.priority, 2);
        assert_eq!(s.kind(), SubjectKind::Theory);
    }

    #[test]
    fn test_lab_detection_is_case_insensitive_substring() {
        assert!(Subject::lab("Chem Lab", "CL").is_lab());
        assert!(Subject::new("X", "X").with_type("LAB").is_lab());
        assert!(Subject::new("X", "X").with_type("Physics laboratory").is_lab());
        assert!(!Subject::new("X", "X").with_type("Theory").is_lab());
        assert!(!Subject::new("X", "X").with_type("").is_lab());
    }

    #[test]
    fn test_deserialize_type_field() {
        let json = r#"{"name":"Physics Lab","code":"PL1","priority":2,"type":"Lab"}"#;
        let s: Subject = serde_json::from_str(json).unwrap();
        assert_eq!(s.subject_type, "Lab");
        assert_eq!(s.kind(), SubjectKind::Lab);
    }

    #[test]
    fn test_deserialize_null_or_missing_type_as_theory() {
        let json = r#"{"name":"History","code":"H1","priority":3,"type":null}"#;
        let s: Subject = serde_json::from_str(json).unwrap();
        assert_eq!(s.subject_type, "");
        assert_eq!(s.kind(), SubjectKind::Theory);

        let s: Subject = serde_json::from_str(r#"{"name":"Art","code":"A1","priority":4}"#).unwrap();
        assert_eq!(s.subject_type, "");
        assert!(!s.is_lab());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(SubjectKind::Theory.to_string(), "Theory");
        assert_eq!(SubjectKind::Lab.to_string(), "Lab");
    }
}
