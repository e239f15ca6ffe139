//! Date-keyed history logs
//!
//! Water intake and calendar notes are both "one entry per day" logs. A
//! [`DailyLog`] keeps them ordered by date; writing a date that already has
//! an entry replaces it (last write wins).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeBounds;

/// Ordered map from date to entry with last-write-wins per date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyLog<T> {
    entries: BTreeMap<NaiveDate, T>,
}

impl<T> Default for DailyLog<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> DailyLog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `entry` for `date`, returning the entry it replaced
    pub fn insert(&mut self, date: NaiveDate, entry: T) -> Option<T> {
        self.entries.insert(date, entry)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&T> {
        self.entries.get(&date)
    }

    pub fn remove(&mut self, date: NaiveDate) -> Option<T> {
        self.entries.remove(&date)
    }

    /// Entries within a date range, ascending
    pub fn range<R>(&self, range: R) -> impl Iterator<Item = (NaiveDate, &T)>
    where
        R: RangeBounds<NaiveDate>,
    {
        self.entries.range(range).map(|(d, e)| (*d, e))
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<(NaiveDate, &T)> {
        self.entries.iter().next_back().map(|(d, e)| (*d, e))
    }

    /// All entries, ascending by date
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &T)> {
        self.entries.iter().map(|(d, e)| (*d, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Water Intake
// ============================================================================

/// Water consumed on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WaterIntakeDay {
    pub consumed_ml: i64,
    /// Number of drinks logged that day
    pub entry_count: u32,
}

/// Progress toward a daily water target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterProgress {
    pub consumed_ml: i64,
    pub target_ml: i32,
    pub percent: f64,
    pub goal_met: bool,
}

impl WaterProgress {
    /// progress = consumed / target × 100; a non-positive target is never met
    pub fn new(consumed_ml: i64, target_ml: i32) -> Self {
        if target_ml <= 0 {
            return Self {
                consumed_ml,
                target_ml,
                percent: 0.0,
                goal_met: false,
            };
        }
        Self {
            consumed_ml,
            target_ml,
            percent: consumed_ml as f64 / target_ml as f64 * 100.0,
            goal_met: consumed_ml >= target_ml as i64,
        }
    }
}

/// Per-day water intake history
pub type WaterIntakeLog = DailyLog<WaterIntakeDay>;

impl DailyLog<WaterIntakeDay> {
    /// Add a drink to the day's total; non-positive amounts are ignored
    pub fn add_intake(&mut self, date: NaiveDate, amount_ml: i32) -> WaterIntakeDay {
        if amount_ml <= 0 {
            return self.get(date).copied().unwrap_or_default();
        }
        let day = self.entries.entry(date).or_default();
        day.consumed_ml += amount_ml as i64;
        day.entry_count += 1;
        *day
    }

    /// Overwrite the day's total
    pub fn set_total(&mut self, date: NaiveDate, consumed_ml: i64) -> Option<WaterIntakeDay> {
        self.insert(
            date,
            WaterIntakeDay {
                consumed_ml: consumed_ml.max(0),
                entry_count: 1,
            },
        )
    }

    pub fn consumed_on(&self, date: NaiveDate) -> i64 {
        self.get(date).map(|d| d.consumed_ml).unwrap_or(0)
    }

    pub fn progress(&self, date: NaiveDate, target_ml: i32) -> WaterProgress {
        WaterProgress::new(self.consumed_on(date), target_ml)
    }
}

// ============================================================================
// Calendar Notes
// ============================================================================

/// Free-text note attached to a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarNote {
    pub text: String,
}

/// Per-day calendar notes
pub type CalendarNotes = DailyLog<CalendarNote>;

impl DailyLog<CalendarNote> {
    /// Replace the note for a date
    pub fn upsert(&mut self, date: NaiveDate, text: impl Into<String>) -> Option<CalendarNote> {
        self.insert(date, CalendarNote { text: text.into() })
    }
}
