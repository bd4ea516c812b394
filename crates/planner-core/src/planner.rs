//! The planner's process state: subjects and day records, each mirrored to
//! storage.
//!
//! A [`Planner`] is owned by whatever drives the UI and handed by reference
//! to the code that reads or edits it. Every edit builds a new snapshot from
//! the current one and re-assigns it as a whole, which also writes it through
//! to the storage backend.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::day_store::DayStore;
use crate::error::Result;
use crate::model::{
    default_subjects, is_locked, update_subject, AttendanceStatus, DayPatch, DayRecord, MealName,
    MealStatus, Subject, SubjectEdit,
};
use crate::storage::{FileBackend, Persisted, PlannerConfig, StorageBackend};

/// Storage key of the subject list.
pub const SUBJECTS_KEY: &str = "subjects";
/// Storage key of the day store.
pub const DAY_DATA_KEY: &str = "dayData";

/// Subjects plus day records, loaded from and written to one backend.
#[derive(Debug)]
pub struct Planner {
    config: PlannerConfig,
    subjects: Persisted<Vec<Subject>>,
    days: Persisted<DayStore>,
}

impl Planner {
    /// Load both persisted values, falling back to defaults for either.
    pub fn open(config: PlannerConfig, backend: Arc<dyn StorageBackend>) -> Self {
        let subjects = Persisted::load(backend.clone(), SUBJECTS_KEY, default_subjects());
        let days = Persisted::load(backend, DAY_DATA_KEY, DayStore::new());
        tracing::info!(
            subjects = subjects.get().len(),
            days = days.get().len(),
            semester_start = %config.semester_start,
            "planner opened"
        );
        Self {
            config,
            subjects,
            days,
        }
    }

    /// Open with the on-disk config and a file backend in its storage dir.
    ///
    /// # Errors
    /// Returns an error if no storage directory can be resolved.
    pub fn open_default() -> Result<Self> {
        let config = PlannerConfig::load_or_default();
        let dir = config.resolve_storage_dir()?;
        Ok(Self::open(config, Arc::new(FileBackend::new(dir))))
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Lock threshold: days before this one are read-only in the UI.
    pub fn semester_start(&self) -> NaiveDate {
        self.config.semester_start
    }

    pub fn subjects(&self) -> &[Subject] {
        self.subjects.get()
    }

    pub fn days(&self) -> &DayStore {
        self.days.get()
    }

    /// Record for `date`, defaults if it was never edited.
    pub fn record<D: Datelike>(&self, date: &D) -> DayRecord {
        self.days.get().get_record(date)
    }

    pub fn attendance_for<D: Datelike>(&self, date: &D, subject_id: &str) -> AttendanceStatus {
        self.record(date).attendance_for(subject_id)
    }

    /// Whether `date` falls before the semester start.
    ///
    /// Edits are not refused here; the UI decides what a locked date allows.
    pub fn is_locked<D: Datelike>(&self, date: &D) -> bool {
        is_locked(date, &self.config.semester_start)
    }

    pub fn update_record<D: Datelike>(&mut self, date: &D, patch: DayPatch) {
        self.days.update(|days| days.update_record(date, patch));
    }

    pub fn set_attendance<D: Datelike>(
        &mut self,
        date: &D,
        subject_id: &str,
        status: AttendanceStatus,
    ) {
        self.days
            .update(|days| days.update_attendance(date, subject_id, status));
    }

    pub fn set_meal_status<D: Datelike>(&mut self, date: &D, meal: MealName, status: MealStatus) {
        self.days
            .update(|days| days.update_meal_status(date, meal, status));
    }

    pub fn set_meal_notes<D: Datelike>(
        &mut self,
        date: &D,
        meal: MealName,
        notes: impl Into<String>,
    ) {
        let notes = notes.into();
        self.days
            .update(|days| days.update_meal_notes(date, meal, notes));
    }

    pub fn set_day_notes<D: Datelike>(&mut self, date: &D, notes: impl Into<String>) {
        let notes = notes.into();
        self.days.update(|days| days.update_day_notes(date, notes));
    }

    /// Apply a single-field edit to the subject with `id`.
    pub fn update_subject(&mut self, id: &str, edit: SubjectEdit) {
        self.subjects
            .update(|subjects| update_subject(subjects, id, edit));
    }

    /// Forget everything: both keys are removed and defaults restored.
    pub fn reset(&mut self) {
        tracing::info!("resetting all planner data");
        self.subjects.clear();
        self.days.clear();
    }
}
