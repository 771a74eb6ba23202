//! Selectable options for one filter dimension, and the catalog wire types they come from.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::filter_field::{COURSES, OptionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    pub id: OptionId,
    pub label: String,
    pub parent_id: Option<OptionId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OptionSet {
    pub options: Vec<OptionRecord>,
}

impl OptionSet {
    pub fn new(options: Vec<OptionRecord>) -> Self {
        // first occurrence of an id wins
        let mut seen = BTreeSet::new();
        let options = options.into_iter().filter(|option| seen.insert(option.id)).collect();
        Self { options }
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn contains(&self, id: OptionId) -> bool {
        self.options.iter().any(|option| option.id == id)
    }

    pub fn ids(&self) -> BTreeSet<OptionId> {
        self.options.iter().map(|option| option.id).collect()
    }

    pub fn label(&self, id: OptionId) -> Option<&str> {
        self.options.iter().find(|option| option.id == id).map(|option| option.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionRecord> {
        self.options.iter()
    }

    /// Keep only options whose parent is one of `parent_ids`.
    pub fn restricted_to_parents(self, parent_ids: &BTreeSet<OptionId>) -> Self {
        let options = self
            .options
            .into_iter()
            .filter(|option| option.parent_id.is_some_and(|parent| parent_ids.contains(&parent)))
            .collect();
        Self { options }
    }

    /// The static course list, 1 through 6.
    pub fn courses() -> Self {
        Self::new(
            COURSES
                .map(|course| OptionRecord { id: course, label: format!("{course} курс"), parent_id: None })
                .collect(),
        )
    }
}

impl FromIterator<OptionRecord> for OptionSet {
    fn from_iter<I: IntoIterator<Item = OptionRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Organizational unit as returned by `GET /faculties/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: OptionId,
    pub name: String,
}

/// Study program as returned by `GET /programs/?faculties=..`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: OptionId,
    pub name: String,
    pub faculty: Faculty,
}

impl From<Faculty> for OptionRecord {
    fn from(faculty: Faculty) -> Self {
        OptionRecord { id: faculty.id, label: faculty.name, parent_id: None }
    }
}

impl From<Program> for OptionRecord {
    fn from(program: Program) -> Self {
        OptionRecord { id: program.id, label: program.name, parent_id: Some(program.faculty.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(id: OptionId, parent: OptionId) -> OptionRecord {
        OptionRecord { id, label: format!("p{id}"), parent_id: Some(parent) }
    }

    #[test]
    fn duplicate_ids_keep_the_first_record() {
        let set = OptionSet::new(vec![
            OptionRecord { id: 1, label: "CS".to_string(), parent_id: None },
            OptionRecord { id: 1, label: "Other".to_string(), parent_id: None },
        ]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.label(1), Some("CS"));
    }

    #[test]
    fn restriction_drops_foreign_and_orphan_options() {
        let set = OptionSet::new(vec![
            program(10, 1),
            program(20, 2),
            OptionRecord { id: 30, label: "orphan".to_string(), parent_id: None },
        ]);
        let restricted = set.restricted_to_parents(&BTreeSet::from([1]));
        assert_eq!(restricted.ids(), BTreeSet::from([10]));
    }

    #[test]
    fn program_wire_record_carries_its_faculty_as_parent() {
        let json = r#"{"id": 7, "name": "Финансы", "faculty": {"id": 2, "name": "Факультет экономики"}}"#;
        let program: Program = serde_json::from_str(json).unwrap();
        let record = OptionRecord::from(program);
        assert_eq!(record.parent_id, Some(2));
        assert_eq!(record.label, "Финансы");
    }

    #[test]
    fn courses_are_one_through_six() {
        assert_eq!(OptionSet::courses().ids(), (1..=6).collect());
    }
}
