//! Grid cell payloads.
//!
//! The same placement is recorded twice: once in the section grid
//! ([`SectionCell`], naming the teacher) and once in the teacher grid
//! ([`TeacherCell`], naming the section). Lab parts are numbered only in
//! the section view.

use serde::{Serialize, Serializer};
use std::fmt;

use super::SubjectKind;

/// Session tag in the section view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKind {
    /// A single theory period.
    Theory,
    /// Part `part` (1-based) of a `total`-slot lab block.
    Lab { part: usize, total: usize },
}

impl SessionKind {
    /// Teacher-view kind (part number dropped).
    pub fn subject_kind(self) -> SubjectKind {
        match self {
            SessionKind::Theory => SubjectKind::Theory,
            SessionKind::Lab { .. } => SubjectKind::Lab,
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKind::Theory => f.write_str("Theory"),
            SessionKind::Lab { part, total } => write!(f, "Lab ({part}/{total})"),
        }
    }
}

impl Serialize for SessionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn serialize_subject_kind<S: Serializer>(kind: &SubjectKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.label())
}

/// A placement as seen from a section's timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCell {
    /// Subject name.
    pub subject: String,
    /// Teaching teacher.
    pub teacher: String,
    /// Subject code.
    pub code: String,
    /// "Theory" or "Lab (k/n)".
    #[serde(rename = "type")]
    pub kind: SessionKind,
}

/// A placement as seen from a teacher's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherCell {
    /// Section being taught.
    pub section: String,
    /// Subject code.
    pub code: String,
    /// Subject name.
    pub subject: String,
    /// Always "Theory" or "Lab".
    #[serde(rename = "type", serialize_with = "serialize_subject_kind")]
    pub kind: SubjectKind,
}
