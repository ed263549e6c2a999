use dioxus::prelude::*;

use common::page::SectionView;

#[component]
pub fn About(state: SectionView<String>) -> Element {
    let text = match state {
        SectionView::Pending => String::new(),
        SectionView::Ready(text) => text,
        SectionView::Failed(message) => message.to_owned(),
    };

    rsx! {
        section { id: "about", class: "section",
            div { class: "container",
                h2 { class: "section-title", "About Me" }
                p { id: "about-me-text", "{text}" }
            }
        }
    }
}
