use dioxus::prelude::*;

use crate::{
    components::{error_boundary::InlineErrorMessage, loading_indicator::LoadingIndicator},
    data_definitions::filter_context::FilterContext,
};

/// Students enrolled on the chosen enrollment date. Hidden until a date is searched.
#[component]
pub fn EnrollmentStatsPanel() -> Element {
    let filters = use_context::<FilterContext>();
    let stats = filters.stats.read();
    let is_pending = stats.is_pending();
    let error_txt = stats.last_error().map(|err| err.user_message());
    let loaded = stats.stats().cloned();
    drop(stats);

    if loaded.is_none() && error_txt.is_none() && !is_pending {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-enrollment-stats-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                margin: 16px 16px 0px 16px;
                padding: 12px 16px;
                border: 1px solid rgba(0,0,0,0.2);
                border-radius: 10px;
                background-color: rgb(248, 250, 252);
            ",
            h2 {
                style: "font-size: 18px; font-weight: 500; margin: 0px;",
                "Статистика зачислений"
            }
            if let Some(error_txt) = error_txt {
                InlineErrorMessage { error_txt }
            }
            if is_pending {
                LoadingIndicator {}
            }
            if let Some(loaded) = loaded {
                div {
                    style: "font-size: 16px;",
                    "Зачислено {loaded.date}: {loaded.count}"
                }
                ul {
                    style: "margin: 0px; padding-left: 20px; max-height: 200px; overflow-y: auto;",
                    for student in loaded.students.iter() {
                        li {
                            key: "{student.id}",
                            "{student.full_name()}"
                            if !student.faculty_name().is_empty() {
                                span {
                                    style: "color: rgba(0,0,0,0.6);",
                                    " · {student.faculty_name()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
