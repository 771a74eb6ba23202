//! University API endpoints and module exports.

pub mod catalog;
pub mod students;
