//! Option catalog endpoints: faculties and the programs under them.

mod list_faculties;
pub use list_faculties::list_faculties;

mod list_programs;
pub use list_programs::list_programs;
