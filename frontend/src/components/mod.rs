pub mod enrollment_stats_panel;
pub mod error_boundary;
pub mod filter_components;
pub mod loading_indicator;
pub mod student_table;
