//! Option catalog loader: top-level faculties, dependent programs, static courses.
//!
//! Fetching happens outside this type. A load is started with `begin_*` /
//! `request_dependent`, which hands out a ticket, and finished with
//! `apply_*`, which ignores any ticket that is no longer the latest one.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    errors::CatalogLoadError,
    filter_field::{MultiField, OptionId},
    option_set::OptionSet,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopLevelTicket {
    generation: u64,
}

impl TopLevelTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Tag captured when a dependent load is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentTicket {
    generation: u64,
    parent_ids: BTreeSet<OptionId>,
}

impl DependentTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn parent_ids(&self) -> &BTreeSet<OptionId> {
        &self.parent_ids
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependentLoad {
    /// No parent selected: the dependent set is empty and nothing is fetched.
    Resolved,
    /// A load for the same parents is already in flight.
    AlreadyPending,
    /// Fetch options for the ticket's parents, then hand the result to `apply_dependent`.
    Fetch(DependentTicket),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionCatalog {
    top_level: OptionSet,
    dependent: OptionSet,
    courses: OptionSet,
    top_level_generation: u64,
    pending_top_level: Option<TopLevelTicket>,
    dependent_generation: u64,
    pending_dependent: Option<DependentTicket>,
    last_error: Option<CatalogLoadError>,
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionCatalog {
    pub fn new() -> Self {
        Self {
            top_level: OptionSet::default(),
            dependent: OptionSet::default(),
            courses: OptionSet::courses(),
            top_level_generation: 0,
            pending_top_level: None,
            dependent_generation: 0,
            pending_dependent: None,
            last_error: None,
        }
    }

    /// Options currently selectable for `field`.
    pub fn options(&self, field: MultiField) -> &OptionSet {
        match field {
            MultiField::Faculties => &self.top_level,
            MultiField::Programs => &self.dependent,
            MultiField::Courses => &self.courses,
        }
    }

    pub fn top_level(&self) -> &OptionSet {
        &self.top_level
    }

    pub fn dependent(&self) -> &OptionSet {
        &self.dependent
    }

    pub fn last_error(&self) -> Option<&CatalogLoadError> {
        self.last_error.as_ref()
    }

    pub fn is_loading_top_level(&self) -> bool {
        self.pending_top_level.is_some()
    }

    pub fn is_loading_dependent(&self) -> bool {
        self.pending_dependent.is_some()
    }

    pub fn pending_dependent(&self) -> Option<&DependentTicket> {
        self.pending_dependent.as_ref()
    }

    /// Start (or restart, after a failure) loading the top-level options.
    pub fn begin_top_level(&mut self) -> TopLevelTicket {
        self.top_level_generation += 1;
        let ticket = TopLevelTicket { generation: self.top_level_generation };
        info!(generation = ticket.generation, "loading top-level options");
        self.pending_top_level = Some(ticket.clone());
        ticket
    }

    /// Returns false when the ticket was superseded and the result was dropped.
    pub fn apply_top_level(&mut self, ticket: &TopLevelTicket, result: Result<OptionSet, CatalogLoadError>) -> bool {
        if self.pending_top_level.as_ref() != Some(ticket) {
            debug!(generation = ticket.generation, "discarding stale top-level options");
            return false;
        }
        self.pending_top_level = None;
        match result {
            Ok(options) => {
                info!(count = options.len(), "top-level options loaded");
                self.top_level = options;
                self.last_error = None;
            }
            Err(err) => {
                warn!("top-level options failed: {}", err.message);
                self.last_error = Some(err);
            }
        }
        true
    }

    /// Ask for the dependent options of `parent_ids`.
    ///
    /// Clears the visible dependent set right away unless the same parents
    /// are already being loaded.
    pub fn request_dependent(&mut self, parent_ids: BTreeSet<OptionId>) -> DependentLoad {
        if parent_ids.is_empty() {
            self.dependent = OptionSet::default();
            self.pending_dependent = None;
            return DependentLoad::Resolved;
        }
        if self.pending_dependent.as_ref().is_some_and(|pending| pending.parent_ids == parent_ids) {
            return DependentLoad::AlreadyPending;
        }

        self.dependent_generation += 1;
        let ticket = DependentTicket { generation: self.dependent_generation, parent_ids };
        info!(generation = ticket.generation, parents = ?ticket.parent_ids, "loading dependent options");
        self.dependent = OptionSet::default();
        self.pending_dependent = Some(ticket.clone());
        DependentLoad::Fetch(ticket)
    }

    /// Returns false when the ticket no longer matches the latest request.
    pub fn apply_dependent(&mut self, ticket: &DependentTicket, result: Result<OptionSet, CatalogLoadError>) -> bool {
        if self.pending_dependent.as_ref() != Some(ticket) {
            debug!(generation = ticket.generation, parents = ?ticket.parent_ids, "discarding stale dependent options");
            return false;
        }
        self.pending_dependent = None;
        match result {
            Ok(options) => {
                self.dependent = options.restricted_to_parents(&ticket.parent_ids);
                info!(count = self.dependent.len(), "dependent options loaded");
                self.last_error = None;
            }
            Err(err) => {
                warn!("dependent options failed: {}", err.message);
                self.dependent = OptionSet::default();
                self.last_error = Some(err);
            }
        }
        true
    }

    /// Empty the dependent set and orphan any load in flight.
    pub fn clear_dependent(&mut self) {
        self.dependent = OptionSet::default();
        self.pending_dependent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option_set::OptionRecord;

    fn programs(records: &[(OptionId, OptionId)]) -> OptionSet {
        records
            .iter()
            .map(|(id, parent)| OptionRecord { id: *id, label: format!("program {id}"), parent_id: Some(*parent) })
            .collect()
    }

    fn fetch(load: DependentLoad) -> DependentTicket {
        match load {
            DependentLoad::Fetch(ticket) => ticket,
            other => panic!("expected a fetch, got {other:?}"),
        }
    }

    #[test]
    fn empty_parents_resolve_without_fetch() {
        let mut catalog = OptionCatalog::new();
        assert_eq!(catalog.request_dependent(BTreeSet::new()), DependentLoad::Resolved);
        assert!(!catalog.is_loading_dependent());
        assert!(catalog.dependent().is_empty());
    }

    #[test]
    fn repeated_request_for_same_parents_is_not_reissued() {
        let mut catalog = OptionCatalog::new();
        let ticket = fetch(catalog.request_dependent(BTreeSet::from([1])));
        assert_eq!(catalog.request_dependent(BTreeSet::from([1])), DependentLoad::AlreadyPending);
        assert!(catalog.apply_dependent(&ticket, Ok(programs(&[(10, 1)]))));
        assert!(!catalog.apply_dependent(&ticket, Ok(programs(&[(10, 1)]))));
        assert_eq!(catalog.dependent().ids(), BTreeSet::from([10]));
    }

    #[test]
    fn response_for_older_parents_is_dropped_in_any_arrival_order() {
        let mut catalog = OptionCatalog::new();
        let first = fetch(catalog.request_dependent(BTreeSet::from([1])));
        let second = fetch(catalog.request_dependent(BTreeSet::from([2])));

        assert!(catalog.apply_dependent(&second, Ok(programs(&[(20, 2)]))));
        assert!(!catalog.apply_dependent(&first, Ok(programs(&[(10, 1)]))));
        assert_eq!(catalog.dependent().ids(), BTreeSet::from([20]));
    }

    #[test]
    fn dependent_options_outside_requested_parents_are_ignored() {
        let mut catalog = OptionCatalog::new();
        let ticket = fetch(catalog.request_dependent(BTreeSet::from([1])));
        catalog.apply_dependent(&ticket, Ok(programs(&[(10, 1), (20, 2)])));
        assert_eq!(catalog.dependent().ids(), BTreeSet::from([10]));
    }

    #[test]
    fn failed_top_level_load_leaves_form_usable_and_can_be_retried() {
        let mut catalog = OptionCatalog::new();
        let ticket = catalog.begin_top_level();
        catalog.apply_top_level(&ticket, Err(CatalogLoadError::top_level("connection refused")));
        assert!(catalog.top_level().is_empty());
        assert!(catalog.last_error().is_some());
        assert_eq!(catalog.options(MultiField::Courses).len(), 6);

        let retry = catalog.begin_top_level();
        let faculties = [OptionRecord { id: 1, label: "CS".to_string(), parent_id: None }].into_iter().collect();
        assert!(catalog.apply_top_level(&retry, Ok(faculties)));
        assert_eq!(catalog.last_error(), None);
        assert_eq!(catalog.top_level().ids(), BTreeSet::from([1]));
    }

    #[test]
    fn cleared_dependent_load_is_stale() {
        let mut catalog = OptionCatalog::new();
        let ticket = fetch(catalog.request_dependent(BTreeSet::from([1])));
        catalog.clear_dependent();
        assert!(!catalog.apply_dependent(&ticket, Ok(programs(&[(10, 1)]))));
        assert!(catalog.dependent().is_empty());
    }
}
