use dioxus::prelude::*;

use common::{filter_store::FilterStore, result_fetch::ResultFetchController, stats_fetch::EnrollmentStatsController};
use crate::{
    components::{
        enrollment_stats_panel::EnrollmentStatsPanel, filter_components::filter_form::FilterForm,
        student_table::StudentTable,
    },
    data_definitions::filter_context::FilterContext,
};

/// Students search page: filter form on top, result table below.
#[component]
pub fn StudentsPage() -> Element {
    let store = use_signal(FilterStore::new);
    let results = use_signal(ResultFetchController::new);
    let stats = use_signal(EnrollmentStatsController::new);
    let filters = use_context_provider(move || FilterContext { store, results, stats });

    // reads no signal, so it runs once after the first render; retries go through the checklist
    use_effect(move || filters.load_top_level());

    rsx! {
        document::Title { "Студенты" }
        div {
            id: "x-students-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            h1 {
                style: "margin: 16px; font-size: 28px; font-weight: 500;",
                "Поиск студентов"
            }
            FilterForm {}
            EnrollmentStatsPanel {}
            StudentTable {}
        }
    }
}
