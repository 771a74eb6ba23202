//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod errors;
pub mod filter_field;
pub mod option_set;
pub mod filter_state;
pub mod option_catalog;
pub mod filter_store;
pub mod query_normalizer;
pub mod result_fetch;
pub mod stats_fetch;
pub mod student;
