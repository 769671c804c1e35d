//! Timetabling domain models.
//!
//! Provides the roster types consumed by the generator and the grid and
//! timetable types it produces.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | Training center |
//! |-------------|--------|-----------------|
//! | Section | Class / homeroom | Cohort |
//! | Subject | Course | Module |
//! | Teacher | Faculty member | Instructor |
//! | Grid | Weekly bell schedule | Weekly room plan |

mod cell;
mod grid;
mod input;
mod subject;
mod teacher;
mod timetable;

pub use cell::{SectionCell, SessionKind, TeacherCell};
pub use grid::Grid;
pub use input::TimetableInput;
pub use subject::{Subject, SubjectKind};
pub use teacher::Teacher;
pub use timetable::{Diagnostic, DiagnosticKind, SectionTimetable, Timetable};
