//! Filter state store: the only place filter values change.
//!
//! Every mutation that changes a parent field clears its dependent field and
//! restarts the dependent option load in the same call, so a selected id is
//! always one of the options currently on screen.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{
    errors::CatalogLoadError,
    filter_field::{MultiField, OptionId, ScalarField},
    filter_state::FilterState,
    option_catalog::{DependentLoad, DependentTicket, OptionCatalog, TopLevelTicket},
    option_set::OptionSet,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterStore {
    state: FilterState,
    catalog: OptionCatalog,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    pub fn begin_top_level(&mut self) -> TopLevelTicket {
        self.catalog.begin_top_level()
    }

    /// Apply the top-level options. Selected parents that disappeared are
    /// dropped; if that changes the parent value, the dependent load restarts.
    pub fn apply_top_level(
        &mut self,
        ticket: &TopLevelTicket,
        result: Result<OptionSet, CatalogLoadError>,
    ) -> Option<DependentTicket> {
        if !self.catalog.apply_top_level(ticket, result) {
            return None;
        }
        let available = self.catalog.top_level().ids();
        let kept = self
            .state
            .multi(MultiField::Faculties)
            .intersection(&available)
            .copied()
            .collect::<BTreeSet<_>>();
        self.replace_multi(MultiField::Faculties, kept)
    }

    pub fn set_scalar(&mut self, field: ScalarField, value: impl Into<String>) {
        *self.state.scalar_mut(field) = value.into();
    }

    /// Add or remove one option. Ignored when `id` is not currently selectable.
    pub fn toggle_multi(&mut self, field: MultiField, id: OptionId, present: bool) -> Option<DependentTicket> {
        if !self.catalog.options(field).contains(id) {
            debug!(?field, id, "ignoring toggle of an option that is not available");
            return None;
        }
        let mut value = self.state.multi(field).clone();
        if present {
            value.insert(id);
        } else {
            value.remove(&id);
        }
        self.replace_multi(field, value)
    }

    /// Replace the whole selection of `field`; unavailable ids are dropped.
    pub fn set_multi(&mut self, field: MultiField, ids: impl IntoIterator<Item = OptionId>) -> Option<DependentTicket> {
        let options = self.catalog.options(field);
        let value = ids.into_iter().filter(|id| options.contains(*id)).collect::<BTreeSet<_>>();
        self.replace_multi(field, value)
    }

    /// Apply dependent options and drop selected ids they no longer contain.
    pub fn apply_dependent(&mut self, ticket: &DependentTicket, result: Result<OptionSet, CatalogLoadError>) -> bool {
        if !self.catalog.apply_dependent(ticket, result) {
            return false;
        }
        let available = self.catalog.dependent().ids();
        self.state.multi_mut(MultiField::Programs).retain(|id| available.contains(id));
        true
    }

    /// Load the dependent options again for the current parent selection.
    pub fn retry_dependent(&mut self) -> Option<DependentTicket> {
        let parents = self.state.multi(MultiField::Faculties).clone();
        self.state.multi_mut(MultiField::Programs).clear();
        match self.catalog.request_dependent(parents) {
            DependentLoad::Fetch(ticket) => Some(ticket),
            DependentLoad::Resolved | DependentLoad::AlreadyPending => None,
        }
    }

    /// Clear every field and the dependent options. Top-level options stay loaded.
    pub fn reset(&mut self) {
        self.state = FilterState::default();
        self.catalog.clear_dependent();
    }

    fn replace_multi(&mut self, field: MultiField, value: BTreeSet<OptionId>) -> Option<DependentTicket> {
        if self.state.multi(field) == &value {
            return None;
        }
        *self.state.multi_mut(field) = value;

        let dependent = field.dependent()?;
        self.state.multi_mut(dependent).clear();
        match self.catalog.request_dependent(self.state.multi(field).clone()) {
            DependentLoad::Fetch(ticket) => Some(ticket),
            DependentLoad::Resolved | DependentLoad::AlreadyPending => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option_set::OptionRecord;

    fn faculties() -> OptionSet {
        [(1, "CS"), (2, "Math")]
            .into_iter()
            .map(|(id, name)| OptionRecord { id, label: name.to_string(), parent_id: None })
            .collect()
    }

    fn programs(records: &[(OptionId, OptionId)]) -> OptionSet {
        records
            .iter()
            .map(|(id, parent)| OptionRecord { id: *id, label: format!("program {id}"), parent_id: Some(*parent) })
            .collect()
    }

    fn loaded_store() -> FilterStore {
        let mut store = FilterStore::new();
        let ticket = store.begin_top_level();
        store.apply_top_level(&ticket, Ok(faculties()));
        store
    }

    #[test]
    fn toggling_an_unavailable_option_does_nothing() {
        let mut store = loaded_store();
        assert_eq!(store.toggle_multi(MultiField::Faculties, 99, true), None);
        assert_eq!(store.toggle_multi(MultiField::Programs, 10, true), None);
        assert!(store.state().is_empty());
    }

    #[test]
    fn parent_change_clears_dependent_value_and_options_at_once() {
        let mut store = loaded_store();
        let ticket = store.toggle_multi(MultiField::Faculties, 1, true).unwrap();
        store.apply_dependent(&ticket, Ok(programs(&[(10, 1), (11, 1)])));
        store.toggle_multi(MultiField::Programs, 10, true);

        let next = store.toggle_multi(MultiField::Faculties, 2, true).unwrap();
        assert!(store.state().multi(MultiField::Programs).is_empty());
        assert!(store.catalog().dependent().is_empty());
        assert_eq!(next.parent_ids(), &BTreeSet::from([1, 2]));
    }

    #[test]
    fn deselecting_last_parent_resolves_without_fetch() {
        let mut store = loaded_store();
        store.toggle_multi(MultiField::Faculties, 1, true);
        assert_eq!(store.toggle_multi(MultiField::Faculties, 1, false), None);
        assert!(!store.catalog().is_loading_dependent());
        assert!(store.catalog().dependent().is_empty());
    }

    #[test]
    fn set_multi_with_same_selection_is_a_no_op() {
        let mut store = loaded_store();
        let first = store.set_multi(MultiField::Faculties, [1]);
        assert!(first.is_some());
        assert_eq!(store.set_multi(MultiField::Faculties, [1, 99]), None);
        assert!(store.catalog().is_loading_dependent());
    }

    #[test]
    fn scalar_changes_never_touch_dependent_fields() {
        let mut store = loaded_store();
        let ticket = store.toggle_multi(MultiField::Faculties, 1, true).unwrap();
        store.apply_dependent(&ticket, Ok(programs(&[(10, 1)])));
        store.toggle_multi(MultiField::Programs, 10, true);

        store.set_scalar(ScalarField::Citizenship, "Россия");
        assert_eq!(store.state().multi(MultiField::Programs), &BTreeSet::from([10]));
    }

    #[test]
    fn top_level_refresh_drops_vanished_parents_and_cascades() {
        let mut store = loaded_store();
        let ticket = store.toggle_multi(MultiField::Faculties, 2, true).unwrap();
        store.apply_dependent(&ticket, Ok(programs(&[(20, 2)])));
        store.toggle_multi(MultiField::Programs, 20, true);

        let refresh = store.begin_top_level();
        let only_cs = [OptionRecord { id: 1, label: "CS".to_string(), parent_id: None }].into_iter().collect();
        assert_eq!(store.apply_top_level(&refresh, Ok(only_cs)), None);
        assert!(store.state().multi(MultiField::Faculties).is_empty());
        assert!(store.state().multi(MultiField::Programs).is_empty());
        assert!(store.catalog().dependent().is_empty());
    }

    #[test]
    fn reset_clears_every_field_and_orphans_pending_load() {
        let mut store = loaded_store();
        store.set_scalar(ScalarField::LastName, "Иванов");
        store.toggle_multi(MultiField::Courses, 3, true);
        let ticket = store.toggle_multi(MultiField::Faculties, 1, true).unwrap();

        store.reset();
        assert!(store.state().is_empty());
        assert!(!store.apply_dependent(&ticket, Ok(programs(&[(10, 1)]))));
        assert!(store.catalog().dependent().is_empty());
        assert_eq!(store.catalog().top_level().len(), 2);
    }

    #[test]
    fn failed_dependent_load_can_be_retried() {
        let mut store = loaded_store();
        let ticket = store.toggle_multi(MultiField::Faculties, 1, true).unwrap();
        store.apply_dependent(&ticket, Err(CatalogLoadError::dependent("timeout")));
        assert!(store.catalog().last_error().is_some());

        let retry = store.retry_dependent().unwrap();
        assert_eq!(retry.parent_ids(), &BTreeSet::from([1]));
        assert!(store.apply_dependent(&retry, Ok(programs(&[(10, 1)]))));
        assert_eq!(store.catalog().last_error(), None);
    }
}
