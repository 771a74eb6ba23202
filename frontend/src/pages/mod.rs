pub mod students_page;
