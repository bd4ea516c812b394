//! The per-day record: attendance, meals and notes.
//!
//! Merges are explicit and one level deep at a time. [`DayRecord::merge`]
//! replaces whole top-level fields, [`Meals::with_entry`] replaces one meal
//! slot, and [`MealEntry::with_status`] / [`MealEntry::with_notes`] replace
//! one field of a slot. Composing them gives path-precise updates that never
//! touch sibling data.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Attendance mark for one subject on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    /// Class not scheduled that day.
    #[default]
    Not,
}

/// Whether a meal was had.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealStatus {
    Yes,
    No,
    #[default]
    Na,
}

/// The three fixed meal slots of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealName {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealName {
    pub const ALL: [MealName; 3] = [MealName::Breakfast, MealName::Lunch, MealName::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            MealName::Breakfast => "breakfast",
            MealName::Lunch => "lunch",
            MealName::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One meal slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    pub status: MealStatus,
    pub notes: String,
}

impl MealEntry {
    /// Same entry with a new status, notes untouched.
    pub fn with_status(&self, status: MealStatus) -> Self {
        Self {
            status,
            notes: self.notes.clone(),
        }
    }

    /// Same entry with new notes, status untouched.
    pub fn with_notes(&self, notes: impl Into<String>) -> Self {
        Self {
            status: self.status,
            notes: notes.into(),
        }
    }
}

/// Breakfast, lunch and dinner for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meals {
    pub breakfast: MealEntry,
    pub lunch: MealEntry,
    pub dinner: MealEntry,
}

impl Meals {
    pub fn get(&self, meal: MealName) -> &MealEntry {
        match meal {
            MealName::Breakfast => &self.breakfast,
            MealName::Lunch => &self.lunch,
            MealName::Dinner => &self.dinner,
        }
    }

    /// Copy with one slot replaced; the other two are kept as they are.
    pub fn with_entry(&self, meal: MealName, entry: MealEntry) -> Self {
        let mut next = self.clone();
        match meal {
            MealName::Breakfast => next.breakfast = entry,
            MealName::Lunch => next.lunch = entry,
            MealName::Dinner => next.dinner = entry,
        }
        next
    }
}

/// Subject id to attendance mark.
pub type Attendance = BTreeMap<String, AttendanceStatus>;

/// Everything recorded for one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub attendance: Attendance,
    pub meals: Meals,
    pub day_notes: String,
}

impl DayRecord {
    /// Shallow merge: each field present in `patch` replaces the whole field.
    pub fn merge(&self, patch: DayPatch) -> Self {
        Self {
            attendance: patch.attendance.unwrap_or_else(|| self.attendance.clone()),
            meals: patch.meals.unwrap_or_else(|| self.meals.clone()),
            day_notes: patch.day_notes.unwrap_or_else(|| self.day_notes.clone()),
        }
    }

    /// Mark for `subject_id`, `Not` when the subject has no entry.
    pub fn attendance_for(&self, subject_id: &str) -> AttendanceStatus {
        self.attendance
            .get(subject_id)
            .copied()
            .unwrap_or_default()
    }

    /// Attendance map with one subject's mark set.
    pub fn attendance_with(&self, subject_id: &str, status: AttendanceStatus) -> Attendance {
        let mut attendance = self.attendance.clone();
        attendance.insert(subject_id.to_string(), status);
        attendance
    }
}

/// Top-level fields to replace in a [`DayRecord`]. `None` keeps the existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayPatch {
    pub attendance: Option<Attendance>,
    pub meals: Option<Meals>,
    pub day_notes: Option<String>,
}

impl DayPatch {
    pub fn attendance(attendance: Attendance) -> Self {
        Self {
            attendance: Some(attendance),
            ..Self::default()
        }
    }

    pub fn meals(meals: Meals) -> Self {
        Self {
            meals: Some(meals),
            ..Self::default()
        }
    }

    pub fn day_notes(notes: impl Into<String>) -> Self {
        Self {
            day_notes: Some(notes.into()),
            ..Self::default()
        }
    }
}
