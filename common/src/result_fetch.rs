//! Result fetch controller for the student search.
//!
//! Every submission gets a new generation. Only the response carrying the
//! latest generation may touch the visible results or the error message.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    errors::SearchError,
    filter_state::FilterState,
    query_normalizer::{EnrollmentRequest, normalize},
    student::StudentRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Pending,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTicket {
    generation: u64,
    request: EnrollmentRequest,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &EnrollmentRequest {
        &self.request
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultFetchController {
    generation: u64,
    phase: FetchPhase,
    results: Vec<StudentRecord>,
    results_request: Option<EnrollmentRequest>,
    last_error: Option<SearchError>,
}

impl ResultFetchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == FetchPhase::Pending
    }

    /// Students from the latest completed submission. Kept while a newer one is pending.
    pub fn results(&self) -> &[StudentRecord] {
        &self.results
    }

    /// Request that produced [`Self::results`].
    pub fn results_request(&self) -> Option<&EnrollmentRequest> {
        self.results_request.as_ref()
    }

    pub fn last_error(&self) -> Option<&SearchError> {
        self.last_error.as_ref()
    }

    /// Start a new submission, superseding any pending one.
    pub fn submit(&mut self, request: EnrollmentRequest) -> SearchTicket {
        self.generation += 1;
        self.phase = FetchPhase::Pending;
        info!(generation = self.generation, query = %request.query_string(), "submitting student search");
        SearchTicket { generation: self.generation, request }
    }

    /// Validate and normalize `state`, then submit it.
    ///
    /// An invalid state is reported through [`Self::last_error`] and issues nothing.
    pub fn submit_filters(&mut self, state: &FilterState) -> Option<SearchTicket> {
        if let Err(err) = state.validate() {
            warn!("search blocked: {}", err);
            self.last_error = Some(SearchError::from(err));
            return None;
        }
        Some(self.submit(normalize(state)))
    }

    /// Returns false when the ticket was superseded and the response was dropped.
    pub fn complete(&mut self, ticket: &SearchTicket, result: Result<Vec<StudentRecord>, SearchError>) -> bool {
        if ticket.generation != self.generation || self.phase != FetchPhase::Pending {
            debug!(generation = ticket.generation, latest = self.generation, "discarding superseded search response");
            return false;
        }
        match result {
            Ok(results) => {
                info!(generation = ticket.generation, count = results.len(), "student search finished");
                self.results = results;
                self.results_request = Some(ticket.request.clone());
                self.last_error = None;
                self.phase = FetchPhase::Success;
            }
            Err(err) => {
                warn!(generation = ticket.generation, "student search failed: {}", err);
                self.last_error = Some(err);
                self.phase = FetchPhase::Failed;
            }
        }
        true
    }
}
