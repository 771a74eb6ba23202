use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use common::{errors::CatalogLevel, filter_field::{MultiField, OptionId}};
use crate::{
    components::{error_boundary::InlineErrorMessage, loading_indicator::LoadingIndicator},
    data_definitions::filter_context::FilterContext,
};

/// Checkbox list for one multi-select field, built from the options the catalog currently offers.
#[component]
pub fn OptionChecklist(field: MultiField) -> Element {
    let filters = use_context::<FilterContext>();
    let store = filters.store.read();
    let catalog = store.catalog();
    let options = catalog.options(field).options.clone();

    let is_loading = match field {
        MultiField::Faculties => catalog.is_loading_top_level(),
        MultiField::Programs => catalog.is_loading_dependent(),
        MultiField::Courses => false,
    };
    let waiting_for_parent = field.parent().is_some_and(|parent| store.state().multi(parent).is_empty());
    let catalog_error = catalog
        .last_error()
        .filter(|err| match field {
            MultiField::Faculties => err.level == CatalogLevel::TopLevel,
            MultiField::Programs => err.level == CatalogLevel::Dependent,
            MultiField::Courses => false,
        })
        .map(|err| err.to_string());
    drop(store);

    rsx! {
        fieldset {
            style: "
                border: 1px solid rgba(0,0,0,0.3);
                border-radius: 10px;
                padding: 6px 10px;
                min-width: 220px;
                max-height: 260px;
                overflow-y: auto;
            ",
            legend { "{field.display_name()}" }

            if let Some(error_txt) = catalog_error {
                InlineErrorMessage {
                    error_txt,
                    button {
                        style: "cursor: pointer;",
                        onclick: move |_| {
                            match field {
                                MultiField::Faculties => filters.load_top_level(),
                                _ => filters.retry_dependent(),
                            }
                        },
                        "Повторить"
                    }
                }
            }

            if is_loading {
                LoadingIndicator {}
            } else if waiting_for_parent {
                div {
                    style: "color: rgba(28, 33, 45, 0.7); padding: 6px;",
                    "Сначала выберите факультет"
                }
            } else {
                ul {
                    style: "list-style: none; margin: 0px; padding: 0px;",
                    for option in options {
                        li {
                            key: "{field:?}-{option.id}",
                            OptionCheckbox { field, id: option.id, label: option.label.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OptionCheckbox(field: MultiField, id: OptionId, label: String) -> Element {
    let filters = use_context::<FilterContext>();
    let is_checked = use_memo(move || filters.store.read().state().multi(field).contains(&id));
    rsx! {
        div {
            class: "x-option-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                align-items: center;
            ",
            onclick: move |_e| {
                filters.toggle_multi(field, id, !is_checked());
            },
            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{label}"
            }
        }
    }
}
