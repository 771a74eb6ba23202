//! Filter form for the students page.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_content_icons::MdClear}};

use common::filter_field::{CITIZENSHIPS, FieldKind, MultiField, ScalarField, StudentStatus};
use crate::{
    components::filter_components::option_checklist::OptionChecklist,
    data_definitions::filter_context::FilterContext,
};


#[component]
pub fn FilterForm() -> Element {
    let filters = use_context::<FilterContext>();
    let is_pending = filters.results.read().is_pending();
    let search_button_color = if is_pending { "#6B7280" } else { "blue" };

    rsx! {
        div {
            id: "x-filter-form",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 16px;
                background-color: white;
                border-bottom: 1px solid rgb(164, 164, 164);
            ",
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 16px; align-items: flex-end;",
                ScalarInput { field: ScalarField::EnrollmentDate }
                ScalarInput { field: ScalarField::EnrolledFrom }
                ScalarInput { field: ScalarField::EnrolledTo }
                ScalarInput { field: ScalarField::LastName }
                ScalarInput { field: ScalarField::Citizenship }
                StatusSelect {}
            }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 16px;",
                OptionChecklist { field: MultiField::Faculties }
                OptionChecklist { field: MultiField::Programs }
                OptionChecklist { field: MultiField::Courses }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 16px;",
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        cursor: pointer;
                        border: 1px solid {search_button_color};
                        border-radius: 9999px;
                        background-color: white;
                        padding: 6px 14px;
                        font-size: 16px;
                    ",
                    onclick: move |_| filters.submit(),
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color};" }
                    "Найти"
                }
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        cursor: pointer;
                        border: 1px solid rgba(0,0,0,0.5);
                        border-radius: 9999px;
                        background-color: white;
                        padding: 6px 14px;
                        font-size: 16px;
                    ",
                    onclick: move |_| filters.reset(),
                    Icon { icon: MdClear, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.9);" }
                    "Сбросить"
                }
            }
        }
    }
}

#[component]
fn ScalarInput(field: ScalarField) -> Element {
    let filters = use_context::<FilterContext>();
    let value = filters.store.read().state().scalar(field).to_string();
    let input_type = match field.kind() {
        FieldKind::Date => "date",
        _ => "text",
    };
    let datalist_id = format!("x-suggestions-{}", field.wire_name());
    let suggestions = match field {
        ScalarField::Citizenship => CITIZENSHIPS.to_vec(),
        _ => Vec::new(),
    };

    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; font-size: 14px;",
            "{field.display_name()}"
            input {
                r#type: input_type,
                list: "{datalist_id}",
                style: "
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    border-radius: 6px;
                    padding: 6px 8px;
                    font-size: 16px;
                ",
                value: "{value}",
                oninput: move |event: Event<FormData>| filters.set_scalar(field, event.value()),
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        filters.submit();
                    }
                },
            }
            if !suggestions.is_empty() {
                datalist {
                    id: "{datalist_id}",
                    for suggestion in suggestions {
                        option { key: "{suggestion}", value: "{suggestion}" }
                    }
                }
            }
        }
    }
}

#[component]
fn StatusSelect() -> Element {
    let filters = use_context::<FilterContext>();
    let value = filters.store.read().state().scalar(ScalarField::Status).to_string();

    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; font-size: 14px;",
            "{ScalarField::Status.display_name()}"
            select {
                style: "
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    border-radius: 6px;
                    padding: 6px 8px;
                    font-size: 16px;
                ",
                value: "{value}",
                onchange: move |event: Event<FormData>| filters.set_scalar(ScalarField::Status, event.value()),
                option { value: "", "Любой" }
                for status in StudentStatus::ALL {
                    option {
                        key: "{status.token()}",
                        value: "{status.token()}",
                        selected: value == status.token(),
                        "{status.display_name()}"
                    }
                }
            }
        }
    }
}
