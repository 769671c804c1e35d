//! Weekly time grid.
//!
//! A [`Grid`] is a days × slots matrix holding at most one cell payload
//! per position. One grid exists per section and one per teacher for the
//! duration of a generation call.
//!
//! # Consecutive runs
//! A run is a maximal stretch of occupied slots on one day. Adjacency
//! follows slot order; days never join runs.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::ops::Range;

use crate::config::TimetableConfig;

/// A days × slots matrix of optional cells.
///
/// Positions are addressed by `(day, slot)` indices into the configured
/// day and slot label lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<C> {
    days: Vec<String>,
    slot_count: usize,
    cells: Vec<Option<C>>,
}

impl<C> Grid<C> {
    /// Creates an empty grid with the given day labels and slots per day.
    pub fn new(days: Vec<String>, slot_count: usize) -> Self {
        let mut cells = Vec::with_capacity(days.len() * slot_count);
        cells.resize_with(days.len() * slot_count, || None);
        Self {
            days,
            slot_count,
            cells,
        }
    }

    /// Creates an empty grid shaped by the configuration.
    pub fn from_config(config: &TimetableConfig) -> Self {
        Self::new(config.days.clone(), config.slot_count())
    }

    /// Number of days (rows).
    #[inline]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of slots per day (columns).
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Label of a day.
    pub fn day_label(&self, day: usize) -> &str {
        &self.days[day]
    }

    #[inline]
    fn index(&self, day: usize, slot: usize) -> usize {
        assert!(
            day < self.days.len() && slot < self.slot_count,
            "grid position ({day}, {slot}) out of range"
        );
        day * self.slot_count + slot
    }

    /// Whether the position already holds a cell.
    #[inline]
    pub fn is_occupied(&self, day: usize, slot: usize) -> bool {
        self.cells[self.index(day, slot)].is_some()
    }

    /// Cell at a position, if any. Out-of-range positions yield `None`.
    pub fn get(&self, day: usize, slot: usize) -> Option<&C> {
        if day >= self.days.len() || slot >= self.slot_count {
            return None;
        }
        self.cells[day * self.slot_count + slot].as_ref()
    }

    /// All slots of one day, in slot order.
    pub fn day_cells(&self, day: usize) -> &[Option<C>] {
        let start = day * self.slot_count;
        &self.cells[start..start + self.slot_count]
    }

    /// Length of the run that would contain `slot` if it were filled.
    ///
    /// Counts the slot itself plus the occupied neighbours reached by
    /// walking left and right until the first empty slot. Read-only.
    pub fn run_length_if_filled(&self, day: usize, slot: usize) -> usize {
        let row = self.day_cells(day);
        let before = row[..slot].iter().rev().take_while(|c| c.is_some()).count();
        let after = row[slot + 1..].iter().take_while(|c| c.is_some()).count();
        1 + before + after
    }

    /// Whether filling `slot` would create a run longer than `max_consecutive`.
    #[inline]
    pub fn would_violate_consecutive(&self, day: usize, slot: usize, max_consecutive: usize) -> bool {
        self.run_length_if_filled(day, slot) > max_consecutive
    }

    /// Writes a cell.
    ///
    /// Callers check availability first; overwriting an occupied position
    /// is a logic error.
    pub fn place(&mut self, day: usize, slot: usize, cell: C) {
        let idx = self.index(day, slot);
        debug_assert!(self.cells[idx].is_none(), "grid cell ({day}, {slot}) already occupied");
        self.cells[idx] = Some(cell);
    }

    /// Empties a position, returning what it held.
    pub fn clear(&mut self, day: usize, slot: usize) -> Option<C> {
        let idx = self.index(day, slot);
        self.cells[idx].take()
    }

    /// Number of occupied positions.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterates occupied positions as `(day, slot, cell)`.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, usize, &C)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.as_ref()
                .map(|c| (idx / self.slot_count, idx % self.slot_count, c))
        })
    }

    /// Maximal occupied runs on one day, as slot ranges.
    pub fn runs(&self, day: usize) -> Vec<Range<usize>> {
        let mut runs = Vec::new();
        let mut start: Option<usize> = None;
        for (slot, cell) in self.day_cells(day).iter().enumerate() {
            match (cell.is_some(), start) {
                (true, None) => start = Some(slot),
                (false, Some(s)) => {
                    runs.push(s..slot);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(s..self.slot_count);
        }
        runs
    }

    /// Longest occupied run on one day.
    pub fn longest_run(&self, day: usize) -> usize {
        self.runs(day).iter().map(|r| r.len()).max().unwrap_or(0)
    }
}

/// Serializes as `{ "<day>": [null | cell, ...], ... }` in day order.
impl<C: Serialize> Serialize for Grid<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, label) in self.days.iter().enumerate() {
            map.serialize_entry(label, self.day_cells(day))?;
        }
        map.end()
    }
}
