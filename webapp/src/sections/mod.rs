use dioxus::prelude::*;

mod about;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;

// shown in place of a section's content when its data could not be loaded
#[component]
fn SectionError(#[props(into)] message: String) -> Element {
    rsx! {
        p { class: "section-error", "{message}" }
    }
}
