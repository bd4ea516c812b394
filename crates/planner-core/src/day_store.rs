//! Date-keyed store of day records.
//!
//! Reads synthesize a default record for dates that were never written and
//! never insert it. Updates take `&self` and return a new store with exactly
//! one record replaced, so a published snapshot is never modified in place.
//!
//! # Usage
//! ```rust
//! use chrono::NaiveDate;
//! use planner_core::{AttendanceStatus, DayStore, MealName, MealStatus};
//!
//! let day = NaiveDate::from_ymd_opt(2025, 9, 10).unwrap();
//! let store = DayStore::new()
//!     .update_attendance(&day, "T1", AttendanceStatus::Present)
//!     .update_meal_status(&day, MealName::Breakfast, MealStatus::Yes);
//!
//! let record = store.get_record(&day);
//! assert_eq!(record.attendance_for("T1"), AttendanceStatus::Present);
//! assert_eq!(record.meals.lunch.status, MealStatus::Na);
//! ```

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::model::{
    canonical_key, AttendanceStatus, DateKey, DayPatch, DayRecord, MealName, MealStatus,
};

/// Canonical date key to that day's record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayStore {
    records: BTreeMap<DateKey, DayRecord>,
}

impl DayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of dates that have ever been edited.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `date` has a stored record (as opposed to synthesized defaults).
    pub fn contains<D: Datelike>(&self, date: &D) -> bool {
        self.records.contains_key(&canonical_key(date))
    }

    /// Stored records in date order.
    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &DayRecord)> {
        self.records.iter()
    }

    /// Record for `date`, or a fresh default one. Never modifies the store.
    pub fn get_record<D: Datelike>(&self, date: &D) -> DayRecord {
        self.record_at(&canonical_key(date))
    }

    /// Record stored under `key`, or a fresh default one.
    pub fn record_at(&self, key: &DateKey) -> DayRecord {
        self.records.get(key).cloned().unwrap_or_default()
    }

    /// New store whose record for `date` is the current one merged with `patch`.
    pub fn update_record<D: Datelike>(&self, date: &D, patch: DayPatch) -> Self {
        self.update_record_at(canonical_key(date), patch)
    }

    /// [`update_record`](Self::update_record) addressed by key.
    pub fn update_record_at(&self, key: DateKey, patch: DayPatch) -> Self {
        let merged = self.record_at(&key).merge(patch);
        let mut records = self.records.clone();
        records.insert(key, merged);
        Self { records }
    }

    /// Set one subject's attendance, keeping every other subject's mark.
    pub fn update_attendance<D: Datelike>(
        &self,
        date: &D,
        subject_id: &str,
        status: AttendanceStatus,
    ) -> Self {
        let current = self.get_record(date);
        let attendance = current.attendance_with(subject_id, status);
        self.update_record(date, DayPatch::attendance(attendance))
    }

    /// Set one meal's status, keeping its notes and the other meals.
    pub fn update_meal_status<D: Datelike>(
        &self,
        date: &D,
        meal: MealName,
        status: MealStatus,
    ) -> Self {
        let current = self.get_record(date);
        let entry = current.meals.get(meal).with_status(status);
        self.update_record(date, DayPatch::meals(current.meals.with_entry(meal, entry)))
    }

    /// Set one meal's notes, keeping its status and the other meals.
    pub fn update_meal_notes<D: Datelike>(
        &self,
        date: &D,
        meal: MealName,
        notes: impl Into<String>,
    ) -> Self {
        let current = self.get_record(date);
        let entry = current.meals.get(meal).with_notes(notes);
        self.update_record(date, DayPatch::meals(current.meals.with_entry(meal, entry)))
    }

    /// Replace the free-text notes for the day.
    pub fn update_day_notes<D: Datelike>(&self, date: &D, notes: impl Into<String>) -> Self {
        self.update_record(date, DayPatch::day_notes(notes))
    }
}
