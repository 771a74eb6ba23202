use dioxus::prelude::*;

use crate::{
    components::{error_boundary::InlineErrorMessage, loading_indicator::LoadingIndicator},
    data_definitions::filter_context::FilterContext,
};

/// Results of the latest completed search. Old rows stay visible while a new search runs.
#[component]
pub fn StudentTable() -> Element {
    let filters = use_context::<FilterContext>();
    let results = filters.results.read();
    let is_pending = results.is_pending();
    let error_txt = results.last_error().map(|err| err.user_message());
    let students = results.results().to_vec();
    let has_searched = results.results_request().is_some();
    drop(results);

    rsx! {
        div {
            id: "x-student-table-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 16px;
                flex-grow: 1;
                overflow-y: auto;
            ",
            if let Some(error_txt) = error_txt {
                InlineErrorMessage { error_txt }
            }
            if is_pending {
                LoadingIndicator {}
            }
            if has_searched {
                div {
                    style: "font-size: 16px;",
                    "Количество студентов: {students.len()}"
                }
            }
            if !students.is_empty() {
                table {
                    thead {
                        tr {
                            th { "ФИО" }
                            th { "Факультет" }
                            th { "Направление" }
                            th { "Курс" }
                            th { "Гражданство" }
                            th { "Дата зачисления" }
                            th { "Статус" }
                        }
                    }
                    tbody {
                        for student in students {
                            tr {
                                key: "{student.id}",
                                td { "{student.full_name()}" }
                                td { "{student.faculty_name()}" }
                                td { "{student.program_name()}" }
                                td { "{student.course}" }
                                td { "{student.citizenship}" }
                                td { "{student.enrollment_date}" }
                                td { "{student.status().display_name()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
