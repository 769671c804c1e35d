//! Property-based checks over random rosters.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;
use u_timetable::models::{DiagnosticKind, Subject, Teacher, TimetableInput};
use u_timetable::validation::verify_timetable;
use u_timetable::{PartialPlacementPolicy, TimetableConfig, TimetableGenerator};

const MAX_SUBJECTS: usize = 6;

fn roster() -> impl Strategy<Value = TimetableInput> {
    (
        1usize..4,
        prop::collection::vec((0i32..6, any::<bool>()), 0..MAX_SUBJECTS),
        prop::collection::vec(prop::collection::vec(any::<bool>(), MAX_SUBJECTS), 0..4),
    )
        .prop_map(|(section_count, subjects, eligibility)| {
            let mut input = TimetableInput::new();
            for s in 0..section_count {
                input = input.with_section(format!("S{s}"));
            }
            for (i, (priority, lab)) in subjects.iter().enumerate() {
                let subject = Subject::new(format!("Subject {i}"), format!("C{i}")).with_priority(*priority);
                input = input.with_subject(if *lab { subject.with_type("Lab") } else { subject });
            }
            for (t, flags) in eligibility.iter().enumerate() {
                let teaches = flags
                    .iter()
                    .enumerate()
                    .filter(|(i, f)| **f && *i < subjects.len())
                    .map(|(i, _)| format!("Subject {i}"));
                input = input.with_teacher(Teacher::new(format!("T{t}")).with_subjects(teaches));
            }
            input
        })
}

fn required(config: &TimetableConfig, subject: &Subject) -> usize {
    if subject.is_lab() {
        config.lab_span
    } else {
        config.periods_for(subject.priority)
    }
}

proptest! {
    #[test]
    fn prop_generated_timetables_are_consistent(input in roster(), seed in any::<u64>()) {
        let generator = TimetableGenerator::default();
        let t = generator.generate_with_rng(&input, &mut SmallRng::seed_from_u64(seed));

        prop_assert_eq!(t.sections.len(), input.section_names.len());
        let violations = verify_timetable(&t, generator.config());
        prop_assert!(violations.is_empty(), "{:?}", violations);

        // Every section cell is mirrored exactly once on the teacher side.
        let teacher_cells: usize = t.teacher_schedules.values().map(|g| g.occupied_count()).sum();
        prop_assert_eq!(teacher_cells, t.placed_cells());

        // Placed subjects reach their requirement.
        for section in &t.sections {
            let failed: HashSet<&str> = t
                .diagnostics
                .iter()
                .filter(|d| d.section == section.section_name)
                .map(|d| d.code.as_str())
                .collect();
            for subject in &input.subjects {
                let count = section
                    .timetable
                    .iter_occupied()
                    .filter(|(_, _, c)| c.code == subject.code)
                    .count();
                if !failed.contains(subject.code.as_str()) {
                    prop_assert!(count >= required(generator.config(), subject));
                }
            }
        }
    }

    #[test]
    fn prop_rollback_places_exact_counts(input in roster(), seed in any::<u64>()) {
        let config = TimetableConfig::default().with_partial_policy(PartialPlacementPolicy::Rollback);
        let generator = TimetableGenerator::new(config).unwrap();
        let t = generator.generate_with_rng(&input, &mut SmallRng::seed_from_u64(seed));

        prop_assert!(verify_timetable(&t, generator.config()).is_empty());
        for section in &t.sections {
            for subject in &input.subjects {
                let count = section
                    .timetable
                    .iter_occupied()
                    .filter(|(_, _, c)| c.code == subject.code)
                    .count();
                let diagnosed = t
                    .diagnostics
                    .iter()
                    .any(|d| d.section == section.section_name && d.code == subject.code);
                if diagnosed {
                    prop_assert_eq!(count, 0);
                } else {
                    prop_assert_eq!(count, required(generator.config(), subject));
                }
            }
        }
    }

    #[test]
    fn prop_subjects_without_teachers_are_diagnosed(input in roster(), seed in any::<u64>()) {
        let t = TimetableGenerator::default().generate_with_rng(&input, &mut SmallRng::seed_from_u64(seed));
        for subject in &input.subjects {
            if input.teachers.iter().all(|teacher| !teacher.can_teach(&subject.name)) {
                let expected = input.section_names.len();
                let found = t
                    .diagnostics
                    .iter()
                    .filter(|d| d.code == subject.code && d.kind == DiagnosticKind::NoEligibleTeacher)
                    .count();
                prop_assert_eq!(found, expected);
            }
        }
    }
}
