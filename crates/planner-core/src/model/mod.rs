//! Planner data model: date keys, day records and subjects.

pub mod date_key;
pub mod day;
pub mod subject;

pub use date_key::{canonical_key, is_locked, is_same_day, DateKey, DEFAULT_SEMESTER_START};
pub use day::{
    Attendance, AttendanceStatus, DayPatch, DayRecord, MealEntry, MealName, MealStatus, Meals,
};
pub use subject::{
    default_subjects, find_subject, update_subject, Subject, SubjectEdit, SubjectKind,
};
