//! Weekly class timetable generation for the U-Engine ecosystem.
//!
//! Assigns subjects and teachers to fixed weekly (day, slot) positions for
//! one or more class sections. Teachers are never double-booked within a
//! call, sections never hold two classes in one slot, and theory periods
//! respect a maximum-consecutive-classes rule.
//!
//! # Modules
//!
//! - **`config`**: `TimetableConfig`: day/slot labels, run limit, lab span,
//!   priority → periods table, partial placement policy
//! - **`models`**: Roster and result types: `Subject`, `Teacher`,
//!   `TimetableInput`, `Grid`, `Timetable`, `Diagnostic`
//! - **`placement`**: `TheoryPlacer` and `LabPlacer` slot search
//! - **`scheduler`**: `TimetableGenerator` orchestration and `TimetableKpi`
//! - **`random`**: Fisher–Yates search-order shuffling
//! - **`validation`**: Roster checks and timetable invariant verification
//!
//! # Algorithm
//!
//! Randomized greedy: subjects in priority order, eligible teachers and
//! candidate slots in random order, first fit wins, no backtracking. It is
//! a best-effort heuristic; unplaceable subjects become diagnostics.
//!
//! # Logging
//!
//! Emits `tracing` spans and events (`warn` for unplaced subjects). No
//! subscriber is installed by this crate.

pub mod config;
pub mod models;
pub mod placement;
pub mod random;
pub mod scheduler;
pub mod validation;

pub use config::{ConfigError, PartialPlacementPolicy, TimetableConfig};
pub use models::{Subject, Teacher, Timetable, TimetableInput};
pub use scheduler::{GenerateError, TimetableGenerator};
