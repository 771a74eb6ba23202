//! Client for the university enrollment REST API.

pub mod api;
pub mod api_utils;
