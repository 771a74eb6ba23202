use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color: rgba(28, 33, 45, 0.7); font-size: 15px; padding: 6px;",
            "Загрузка..."
        }
    }
}
