pub mod enrollment_api;
