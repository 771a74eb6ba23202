//! Student search and enrollment statistics endpoints.

mod search_students;
pub use search_students::search_students;

mod enrollment_stats;
pub use enrollment_stats::enrollment_stats;
