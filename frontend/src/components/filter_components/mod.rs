pub mod filter_form;
pub mod option_checklist;
