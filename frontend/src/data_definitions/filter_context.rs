//! Page-wide filter state and the background loads that feed it.
//!
//! Loads run as spawned tasks. Each one carries the ticket it was started
//! with; the store and the controller drop results whose ticket is stale.

use dioxus::prelude::*;

use common::{
    errors::{CatalogLoadError, SearchError},
    filter_field::{MultiField, OptionId, ScalarField},
    filter_store::FilterStore,
    option_catalog::{DependentTicket, TopLevelTicket},
    result_fetch::{ResultFetchController, SearchTicket},
    stats_fetch::{EnrollmentStatsController, StatsTicket},
};

use crate::api::enrollment_api::{enrollment_stats, list_faculties, list_programs, search_students, server_error_message};

#[derive(Clone, Copy, PartialEq)]
pub struct FilterContext {
    pub store: Signal<FilterStore>,
    pub results: Signal<ResultFetchController>,
    pub stats: Signal<EnrollmentStatsController>,
}

impl FilterContext {
    pub fn load_top_level(mut self) {
        let ticket = self.store.write().begin_top_level();
        spawn(load_top_level(self.store, ticket));
    }

    pub fn set_scalar(mut self, field: ScalarField, value: String) {
        self.store.write().set_scalar(field, value);
    }

    pub fn toggle_multi(mut self, field: MultiField, id: OptionId, present: bool) {
        let ticket = self.store.write().toggle_multi(field, id, present);
        if let Some(ticket) = ticket {
            spawn(load_dependent(self.store, ticket));
        }
    }

    pub fn retry_dependent(mut self) {
        let ticket = self.store.write().retry_dependent();
        if let Some(ticket) = ticket {
            spawn(load_dependent(self.store, ticket));
        }
    }

    pub fn reset(mut self) {
        self.store.write().reset();
    }

    /// Run the student search, and the day statistics when an enrollment date is set.
    pub fn submit(mut self) {
        let ticket = self.results.write().submit_filters(self.store.read().state());
        let Some(ticket) = ticket else {
            return;
        };
        spawn(run_search(self.results, ticket));

        let stats_ticket = self.stats.write().submit_date(self.store.read().state());
        if let Some(stats_ticket) = stats_ticket {
            spawn(load_stats(self.stats, stats_ticket));
        }
    }
}

async fn load_top_level(mut store: Signal<FilterStore>, ticket: TopLevelTicket) {
    let result = list_faculties()
        .await
        .map_err(|e| CatalogLoadError::top_level(server_error_message(&e)));
    let next = store.write().apply_top_level(&ticket, result);
    if let Some(next) = next {
        spawn(load_dependent(store, next));
    }
}

async fn load_dependent(mut store: Signal<FilterStore>, ticket: DependentTicket) {
    let result = list_programs(ticket.parent_ids().clone())
        .await
        .map_err(|e| CatalogLoadError::dependent(server_error_message(&e)));
    if !store.write().apply_dependent(&ticket, result) {
        dioxus::logger::tracing::debug!("program list for {:?} arrived after the faculty selection changed", ticket.parent_ids());
    }
}

async fn run_search(mut results: Signal<ResultFetchController>, ticket: SearchTicket) {
    let result = search_students(ticket.request().clone())
        .await
        .map_err(|e| SearchError::request(server_error_message(&e)));
    results.write().complete(&ticket, result);
}

async fn load_stats(mut stats: Signal<EnrollmentStatsController>, ticket: StatsTicket) {
    let result = enrollment_stats(ticket.wire_date())
        .await
        .map_err(|e| SearchError::request(server_error_message(&e)));
    stats.write().complete(&ticket, result);
}
