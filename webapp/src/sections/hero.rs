use dioxus::prelude::*;

use api::personal::PersonalInfo;
use common::page::{HeroFallback, SectionView};

#[component]
pub fn Hero(state: SectionView<PersonalInfo, HeroFallback>) -> Element {
    // image src, image alt, name, title, cv link
    let (src, alt, name, title, cv) = match state {
        SectionView::Pending => Default::default(),
        SectionView::Ready(info) => (
            info.profile_image,
            info.name.clone(),
            info.name,
            info.title,
            info.cv_download,
        ),
        SectionView::Failed(fallback) => (
            String::new(),
            fallback.image_alt.to_owned(),
            fallback.name,
            fallback.title.to_owned(),
            String::new(),
        ),
    };

    rsx! {
        section { id: "hero", class: "hero",
            img {
                id: "profile-img",
                class: "profile-img",
                src: "{src}",
                alt: "{alt}",
            }
            h1 { id: "user-name", "{name}" }
            p { id: "user-title", class: "hero-title", "{title}" }
            div { class: "hero-actions",
                a {
                    id: "cv-download-btn",
                    class: "btn btn-primary",
                    href: "{cv}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    i { class: "fas fa-download" }
                    "Download CV"
                }
                a { class: "btn btn-secondary", href: "#contact", "Contact Me" }
            }
        }
    }
}
