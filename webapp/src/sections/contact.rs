use dioxus::prelude::*;

use api::personal::PersonalInfo;
use common::{
    contact::{mailto, social_icon},
    page::SectionView,
};

use super::SectionError;

#[component]
pub fn Contact(state: SectionView<PersonalInfo>) -> Element {
    rsx! {
        section { id: "contact", class: "section",
            div { class: "container",
                h2 { class: "section-title", "Get In Touch" }
                div { class: "contact-content",
                    match state {
                        SectionView::Pending => rsx! {},
                        SectionView::Ready(info) => rsx! {
                            ContactDetails { info }
                        },
                        SectionView::Failed(message) => rsx! {
                            SectionError { message }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn ContactDetails(info: PersonalInfo) -> Element {
    let contact = &info.contact;
    let email_link = mailto(&contact.email);

    rsx! {
        p {
            i { class: "fas fa-phone" }
            " "
            span { id: "contact-phone", "{contact.phone}" }
        }
        p {
            i { class: "fas fa-envelope" }
            " "
            a { id: "contact-email", href: "{email_link}", "{contact.email}" }
        }
        div {
            id: "contact-social-links-container",
            class: "contact-social-links",
            for (index, link) in info.social_links.iter().enumerate() {
                a {
                    key: "{index}",
                    href: "{link.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    title: "{link.platform}",
                    i { class: social_icon(&link.platform) }
                }
            }
        }
        a {
            id: "send-email-btn",
            class: "btn btn-primary",
            href: "{email_link}",
            "Send Email"
        }
    }
}
