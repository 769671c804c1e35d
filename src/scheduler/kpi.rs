//! Timetable fulfilment metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Required periods | Σ over sections × subjects of the required cell count |
//! | Placed periods | Σ of cells actually holding the subject, capped at required |
//! | Fulfilment rate | placed / required |
//! | Fully placed | (section, subject) pairs that reached their count |
//! | Teacher load | occupied cells per teacher |
//!
//! A lab requires `lab_span` cells; a theory subject requires
//! `periods_for(priority)` cells.

use std::collections::BTreeMap;

use crate::config::TimetableConfig;
use crate::models::{SubjectKind, Timetable, TimetableInput};

/// Per-section fulfilment.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionKpi {
    /// Section name.
    pub section: String,
    /// Cells required across all subjects.
    pub required_periods: usize,
    /// Cells placed (capped per subject at its requirement).
    pub placed_periods: usize,
    /// Subjects that reached their requirement.
    pub fully_placed_subjects: usize,
    /// Longest run of occupied slots on any day.
    pub longest_run: usize,
}

/// Timetable performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableKpi {
    /// Cells required across all sections.
    pub required_periods: usize,
    /// Cells placed across all sections (capped per subject).
    pub placed_periods: usize,
    /// `placed_periods / required_periods` (1.0 when nothing is required).
    pub fulfilment_rate: f64,
    /// (section, subject) pairs fully placed.
    pub fully_placed_subjects: usize,
    /// Number of (section, subject) pairs.
    pub total_subjects: usize,
    /// Per-section breakdown, in section order.
    pub sections: Vec<SectionKpi>,
    /// Occupied cells per teacher.
    pub teacher_load: BTreeMap<String, usize>,
}

impl TimetableKpi {
    /// Computes KPIs for a generated timetable and the input it came from.
    pub fn calculate(timetable: &Timetable, input: &TimetableInput, config: &TimetableConfig) -> Self {
        let mut sections = Vec::with_capacity(timetable.sections.len());

        for section in &timetable.sections {
            let grid = &section.timetable;
            let mut required_total = 0;
            let mut placed_total = 0;
            let mut fully_placed = 0;

            for subject in &input.subjects {
                let required = match subject.kind() {
                    SubjectKind::Lab => config.lab_span,
                    SubjectKind::Theory => config.periods_for(subject.priority),
                };
                let placed = grid
                    .iter_occupied()
                    .filter(|(_, _, c)| c.subject == subject.name && c.code == subject.code)
                    .count();

                required_total += required;
                placed_total += placed.min(required);
                if placed >= required {
                    fully_placed += 1;
                }
            }

            let longest_run = (0..grid.day_count())
                .map(|d| grid.longest_run(d))
                .max()
                .unwrap_or(0);

            sections.push(SectionKpi {
                section: section.section_name.clone(),
                required_periods: required_total,
                placed_periods: placed_total,
                fully_placed_subjects: fully_placed,
                longest_run,
            });
        }

        let required_periods: usize = sections.iter().map(|s| s.required_periods).sum();
        let placed_periods: usize = sections.iter().map(|s| s.placed_periods).sum();
        let fulfilment_rate = if required_periods == 0 {
            1.0
        } else {
            placed_periods as f64 / required_periods as f64
        };

        let teacher_load = timetable
            .teacher_schedules
            .iter()
            .map(|(name, grid)| (name.clone(), grid.occupied_count()))
            .collect();

        Self {
            required_periods,
            placed_periods,
            fulfilment_rate,
            fully_placed_subjects: sections.iter().map(|s| s.fully_placed_subjects).sum(),
            total_subjects: timetable.sections.len() * input.subjects.len(),
            sections,
            teacher_load,
        }
    }

    /// Whether every subject reached its requirement in every section.
    pub fn is_fully_placed(&self) -> bool {
        self.fully_placed_subjects == self.total_subjects
    }
}
