pub mod filter_context;
