use dioxus::prelude::*;

use crate::pages::students_page::StudentsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    StudentsPage {},
}
