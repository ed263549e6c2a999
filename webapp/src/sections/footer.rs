use dioxus::prelude::*;

#[component]
pub fn Footer(owner: String) -> Element {
    let year = common::current_year();

    rsx! {
        footer { class: "site-footer",
            p {
                "© "
                span { id: "current-year", "{year}" }
                " {owner}. All rights reserved."
            }
        }
    }
}
