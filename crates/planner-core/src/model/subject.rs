//! Subjects whose attendance is tracked.
//!
//! The list is ordered and keyed by `id`. It is seeded with five theory and
//! five practical subjects and only ever edited field by field; subjects are
//! never added or removed here.

use serde::{Deserialize, Serialize};

const THEORY_COLOR: &str = "#70a0ff";
const PRACTICAL_COLOR: &str = "#50d890";
const SEEDS_PER_KIND: usize = 5;

/// Kind of class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectKind {
    Theory,
    Practical,
}

/// A tracked subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SubjectKind,
    /// Display color, e.g. `#70a0ff`. Not validated.
    pub color: String,
}

/// A single-field edit to a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectEdit {
    Name(String),
    Kind(SubjectKind),
    Color(String),
}

impl Subject {
    /// Copy of this subject with `edit` applied.
    pub fn with_edit(&self, edit: SubjectEdit) -> Self {
        let mut next = self.clone();
        match edit {
            SubjectEdit::Name(name) => next.name = name,
            SubjectEdit::Kind(kind) => next.kind = kind,
            SubjectEdit::Color(color) => next.color = color,
        }
        next
    }
}

/// The subjects a fresh planner starts with: T1..T5 then P1..P5.
pub fn default_subjects() -> Vec<Subject> {
    let theory = (1..=SEEDS_PER_KIND).map(|i| Subject {
        id: format!("T{i}"),
        name: format!("Theory {i}"),
        kind: SubjectKind::Theory,
        color: THEORY_COLOR.to_string(),
    });
    let practical = (1..=SEEDS_PER_KIND).map(|i| Subject {
        id: format!("P{i}"),
        name: format!("Practical {i}"),
        kind: SubjectKind::Practical,
        color: PRACTICAL_COLOR.to_string(),
    });
    theory.chain(practical).collect()
}

/// New list with `edit` applied to the subject with `id`.
///
/// Order is preserved. An unknown `id` yields an unchanged copy.
pub fn update_subject(subjects: &[Subject], id: &str, edit: SubjectEdit) -> Vec<Subject> {
    subjects
        .iter()
        .map(|s| {
            if s.id == id {
                s.with_edit(edit.clone())
            } else {
                s.clone()
            }
        })
        .collect()
}

pub fn find_subject<'a>(subjects: &'a [Subject], id: &str) -> Option<&'a Subject> {
    subjects.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_ten_ordered_subjects() {
        let subjects = default_subjects();
        let ids: Vec<&str> = subjects.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["T1", "T2", "T3", "T4", "T5", "P1", "P2", "P3", "P4", "P5"]
        );

        let t3 = find_subject(&subjects, "T3").unwrap();
        assert_eq!(t3.name, "Theory 3");
        assert_eq!(t3.kind, SubjectKind::Theory);
        assert_eq!(t3.color, "#70a0ff");

        let p5 = find_subject(&subjects, "P5").unwrap();
        assert_eq!(p5.name, "Practical 5");
        assert_eq!(p5.kind, SubjectKind::Practical);
        assert_eq!(p5.color, "#50d890");
    }

    #[test]
    fn subject_serializes_kind_as_type() {
        let json = serde_json::to_value(&default_subjects()[0]).unwrap();
        let expected = serde_json::json!({
            "id": "T1",
            "name": "Theory 1",
            "type": "Theory",
            "color": "#70a0ff",
        });
        assert_eq!(json, expected);
    }

    #[test]
    fn update_subject_changes_one_field_of_one_subject() {
        let subjects = default_subjects();

        let renamed = update_subject(&subjects, "P2", SubjectEdit::Name("Chem Lab".to_string()));
        let p2 = find_subject(&renamed, "P2").unwrap();
        assert_eq!(p2.name, "Chem Lab");
        assert_eq!(p2.kind, SubjectKind::Practical);
        assert_eq!(p2.color, "#50d890");

        for (before, after) in subjects.iter().zip(&renamed) {
            assert_eq!(before.id, after.id);
            if before.id != "P2" {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn update_subject_kind_and_color() {
        let subjects = default_subjects();
        let next = update_subject(&subjects, "T1", SubjectEdit::Kind(SubjectKind::Practical));
        let next = update_subject(&next, "T1", SubjectEdit::Color("#ff0000".to_string()));

        let t1 = find_subject(&next, "T1").unwrap();
        assert_eq!(t1.kind, SubjectKind::Practical);
        assert_eq!(t1.color, "#ff0000");
        assert_eq!(t1.name, "Theory 1");
    }

    #[test]
    fn update_unknown_subject_is_a_copy() {
        let subjects = default_subjects();
        let next = update_subject(&subjects, "X9", SubjectEdit::Name("nope".to_string()));
        assert_eq!(next, subjects);
    }
}
