//! Timetable generation and KPI evaluation.
//!
//! # Algorithm
//!
//! `TimetableGenerator` runs a randomized, priority-ordered greedy
//! placement with no backtracking across subjects. It is not optimal and
//! does not guarantee full placement; subjects it cannot place are
//! reported as diagnostics.
//!
//! # KPI
//!
//! `TimetableKpi` measures how much of the required weekly load was placed
//! and how it is spread over teachers.

mod generator;
mod index;
mod kpi;

pub use generator::{GenerateError, TimetableGenerator};
pub use index::{RosterIndex, SubjectId, TeacherId};
pub use kpi::{SectionKpi, TimetableKpi};
