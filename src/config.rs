//! Generation configuration.
//!
//! The calendar axes (day and slot labels), the consecutive-run limit,
//! the lab span and the priority → weekly periods table are all carried
//! by an explicit [`TimetableConfig`] value handed to the generator.
//!
//! # Defaults
//!
//! | Setting | Default |
//! |---------|---------|
//! | Days | Monday .. Friday |
//! | Slots | 10 periods, `8:00-8:55` .. `4:55-5:50` |
//! | Max consecutive | 3 |
//! | Lab span | 2 |
//! | Periods by priority | 1→4, 2→3, 3→2, 4→1, otherwise 1 |
//! | Partial placement | [`PartialPlacementPolicy::Retain`] |

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

const DEFAULT_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

const DEFAULT_SLOTS: [&str; 10] = [
    "8:00-8:55",
    "8:55-9:50",
    "10:10-11:05",
    "11:05-12:00",
    "12:00-12:55",
    "12:55-1:50",
    "2:10-3:05",
    "3:05-4:00",
    "4:00-4:55",
    "4:55-5:50",
];

/// What happens to theory periods already placed when a teacher
/// cannot reach the subject's required count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialPlacementPolicy {
    /// Keep the placed periods; the next teacher builds on them.
    #[default]
    Retain,
    /// Clear the failed attempt from both grids before the next teacher.
    Rollback,
}

/// Errors reported by [`TimetableConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No day labels configured.
    #[error("at least one day must be configured")]
    NoDays,

    /// No slot labels configured.
    #[error("at least one slot must be configured")]
    NoSlots,

    /// Two days share a label.
    #[error("duplicate day label: '{0}'")]
    DuplicateDay(String),

    /// Consecutive-run limit of zero would reject every placement.
    #[error("max consecutive classes must be at least 1")]
    ZeroMaxConsecutive,

    /// Lab span does not fit in a day.
    #[error("lab span {span} must be between 1 and {slots} slots")]
    InvalidLabSpan { span: usize, slots: usize },
}

/// Configuration for one timetable generation run.
///
/// # Example
///
/// ```
/// use u_timetable::config::TimetableConfig;
///
/// let config = TimetableConfig::default().with_period_requirement(5, 6);
/// assert_eq!(config.periods_for(1), 4);
/// assert_eq!(config.periods_for(5), 6);
/// assert_eq!(config.periods_for(42), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Ordered day labels (grid rows).
    pub days: Vec<String>,
    /// Ordered slot labels (grid columns); adjacency defines "consecutive".
    pub slots: Vec<String>,
    /// Longest allowed run of occupied slots for a section on one day.
    pub max_consecutive: usize,
    /// Number of contiguous slots a lab session occupies.
    pub lab_span: usize,
    /// Required weekly periods keyed by subject priority.
    pub period_requirements: BTreeMap<i32, usize>,
    /// Periods for priorities missing from `period_requirements`.
    pub default_periods: usize,
    /// Handling of partial theory placements on failure.
    pub partial_policy: PartialPlacementPolicy,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS.iter().map(|d| d.to_string()).collect(),
            slots: DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect(),
            max_consecutive: 3,
            lab_span: 2,
            period_requirements: BTreeMap::from([(1, 4), (2, 3), (3, 2), (4, 1)]),
            default_periods: 1,
            partial_policy: PartialPlacementPolicy::Retain,
        }
    }
}

impl TimetableConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the day labels.
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the slot labels.
    pub fn with_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots = slots.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the consecutive-run limit.
    pub fn with_max_consecutive(mut self, max: usize) -> Self {
        self.max_consecutive = max;
        self
    }

    /// Sets the lab span.
    pub fn with_lab_span(mut self, span: usize) -> Self {
        self.lab_span = span;
        self
    }

    /// Sets the required periods for one priority.
    pub fn with_period_requirement(mut self, priority: i32, periods: usize) -> Self {
        self.period_requirements.insert(priority, periods);
        self
    }

    /// Sets the fallback period count.
    pub fn with_default_periods(mut self, periods: usize) -> Self {
        self.default_periods = periods;
        self
    }

    /// Sets the partial placement policy.
    pub fn with_partial_policy(mut self, policy: PartialPlacementPolicy) -> Self {
        self.partial_policy = policy;
        self
    }

    /// Number of days per week.
    #[inline]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of slots per day.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Required weekly periods for a priority.
    pub fn periods_for(&self, priority: i32) -> usize {
        self.period_requirements
            .get(&priority)
            .copied()
            .unwrap_or(self.default_periods)
    }

    /// Checks the configuration for values the placers cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days.is_empty() {
            return Err(ConfigError::NoDays);
        }
        if self.slots.is_empty() {
            return Err(ConfigError::NoSlots);
        }
        let mut seen = HashSet::new();
        for day in &self.days {
            if !seen.insert(day.as_str()) {
                return Err(ConfigError::DuplicateDay(day.clone()));
            }
        }
        if self.max_consecutive == 0 {
            return Err(ConfigError::ZeroMaxConsecutive);
        }
        if self.lab_span == 0 || self.lab_span > self.slots.len() {
            return Err(ConfigError::InvalidLabSpan {
                span: self.lab_span,
                slots: self.slots.len(),
            });
        }
        Ok(())
    }
}
