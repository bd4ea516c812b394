//! # College Planner Core Library
//!
//! This library provides the state model behind the College Planner: a
//! calendar of per-day records covering class attendance, meals and notes,
//! plus the list of tracked subjects. Rendering, calendar layout and dialogs
//! live in the UI, which reads this model and calls its update operations.
//!
//! ## Architecture
//!
//! - **Day Record Model**: date keys, default records for unseen days, and
//!   immutable partial updates that never clobber sibling data
//! - **Storage**: values mirrored to a keyed backend (JSON files by default),
//!   fail-soft on both read and write, plus TOML-based configuration
//! - **Planner**: the root state value owning subjects and day records
//!
//! ## Key Components
//!
//! - [`Planner`]: Subjects and day records with write-through persistence
//! - [`DayStore`]: Date-keyed records and their update operations
//! - [`Persisted`]: In-memory value with best-effort durability
//! - [`PlannerConfig`]: Semester start and storage location

pub mod day_store;
pub mod error;
pub mod model;
pub mod planner;
pub mod storage;

pub use day_store::DayStore;
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use model::{
    canonical_key, default_subjects, is_locked, is_same_day, Attendance, AttendanceStatus,
    DateKey, DayPatch, DayRecord, MealEntry, MealName, MealStatus, Meals, Subject, SubjectEdit,
    SubjectKind,
};
pub use planner::{Planner, DAY_DATA_KEY, SUBJECTS_KEY};
pub use storage::{FileBackend, MemoryBackend, Persisted, PlannerConfig, StorageBackend};
