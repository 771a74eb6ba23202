//! Fetch controller for the per-day enrollment statistics.
//!
//! Runs next to the student search with its own generation counter, so a
//! slow statistics response never overwrites the numbers for a newer date.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::{
    errors::SearchError,
    filter_field::ScalarField,
    filter_state::{DATE_FORMAT, FilterState},
    result_fetch::FetchPhase,
    student::EnrollmentStats,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsTicket {
    generation: u64,
    date: NaiveDate,
}

impl StatsTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Date as sent in the `date` query parameter.
    pub fn wire_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnrollmentStatsController {
    generation: u64,
    phase: FetchPhase,
    stats: Option<EnrollmentStats>,
    last_error: Option<SearchError>,
}

impl EnrollmentStatsController {
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

    pub fn stats(&self) -> Option<&EnrollmentStats> {
        self.stats.as_ref()
    }

    pub fn last_error(&self) -> Option<&SearchError> {
        self.last_error.as_ref()
    }

    /// Request statistics for the enrollment date currently in `state`.
    ///
    /// An empty date hides the panel and drops any pending response. A
    /// malformed one is reported through [`Self::last_error`].
    pub fn submit_date(&mut self, state: &FilterState) -> Option<StatsTicket> {
        let date = match state.date(ScalarField::EnrollmentDate) {
            Ok(Some(date)) => date,
            Ok(None) => {
                self.generation += 1;
                self.phase = FetchPhase::Idle;
                self.stats = None;
                self.last_error = None;
                return None;
            }
            Err(err) => {
                warn!("enrollment stats blocked: {}", err);
                self.last_error = Some(SearchError::from(err));
                return None;
            }
        };
        self.generation += 1;
        self.phase = FetchPhase::Pending;
        info!(generation = self.generation, %date, "requesting enrollment stats");
        Some(StatsTicket { generation: self.generation, date })
    }

    /// Returns false when the ticket was superseded and the response was dropped.
    pub fn complete(&mut self, ticket: &StatsTicket, result: Result<EnrollmentStats, SearchError>) -> bool {
        if ticket.generation != self.generation || self.phase != FetchPhase::Pending {
            debug!(generation = ticket.generation, latest = self.generation, "discarding superseded stats response");
            return false;
        }
        match result {
            Ok(stats) => {
                info!(generation = ticket.generation, count = stats.count, "enrollment stats loaded");
                self.stats = Some(stats);
                self.last_error = None;
                self.phase = FetchPhase::Success;
            }
            Err(err) => {
                warn!(generation = ticket.generation, "enrollment stats failed: {}", err);
                self.last_error = Some(err);
                self.phase = FetchPhase::Failed;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::ValidationError, filter_store::FilterStore};

    fn store_with_date(date: &str) -> FilterStore {
        let mut store = FilterStore::new();
        store.set_scalar(ScalarField::EnrollmentDate, date);
        store
    }

    fn stats(date: &str, count: u64) -> EnrollmentStats {
        EnrollmentStats { date: date.to_string(), count, students: Vec::new() }
    }

    #[test]
    fn no_request_without_a_date() {
        let mut controller = EnrollmentStatsController::new();
        assert_eq!(controller.submit_date(FilterStore::new().state()), None);
        assert_eq!(controller.phase(), FetchPhase::Idle);
        assert_eq!(controller.stats(), None);
    }

    #[test]
    fn ticket_carries_the_normalized_date() {
        let mut controller = EnrollmentStatsController::new();
        let ticket = controller.submit_date(store_with_date(" 2024-09-01 ").state()).unwrap();
        assert_eq!(ticket.wire_date(), "2024-09-01");
        assert!(controller.is_pending());
    }

    #[test]
    fn malformed_date_is_reported_and_not_sent() {
        let mut controller = EnrollmentStatsController::new();
        assert_eq!(controller.submit_date(store_with_date("01.09.2024").state()), None);
        assert_eq!(controller.generation(), 0);
        assert!(matches!(
            controller.last_error(),
            Some(SearchError::Validation(ValidationError::MalformedDate { field: ScalarField::EnrollmentDate, .. }))
        ));
    }

    #[test]
    fn newer_date_wins_over_a_late_response() {
        let mut controller = EnrollmentStatsController::new();
        let first = controller.submit_date(store_with_date("2024-09-01").state()).unwrap();
        let second = controller.submit_date(store_with_date("2023-09-01").state()).unwrap();

        assert!(controller.complete(&second, Ok(stats("2023-09-01", 3))));
        assert!(!controller.complete(&first, Ok(stats("2024-09-01", 40))));
        assert_eq!(controller.stats().map(|s| s.count), Some(3));
    }

    #[test]
    fn clearing_the_date_hides_stats_and_drops_pending_response() {
        let mut controller = EnrollmentStatsController::new();
        let first = controller.submit_date(store_with_date("2024-09-01").state()).unwrap();
        controller.complete(&first, Ok(stats("2024-09-01", 5)));

        let pending = controller.submit_date(store_with_date("2024-09-02").state()).unwrap();
        assert_eq!(controller.submit_date(FilterStore::new().state()), None);
        assert!(!controller.complete(&pending, Ok(stats("2024-09-02", 7))));
        assert_eq!(controller.stats(), None);
    }

    #[test]
    fn failure_keeps_previous_stats() {
        let mut controller = EnrollmentStatsController::new();
        let first = controller.submit_date(store_with_date("2024-09-01").state()).unwrap();
        controller.complete(&first, Ok(stats("2024-09-01", 5)));

        let second = controller.submit_date(store_with_date("2024-09-02").state()).unwrap();
        assert!(controller.complete(&second, Err(SearchError::request("Invalid date format. Use YYYY-MM-DD"))));
        assert_eq!(controller.phase(), FetchPhase::Failed);
        assert_eq!(controller.stats().map(|s| s.count), Some(5));
    }
}
