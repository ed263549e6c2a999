#![allow(non_snake_case)]
use dioxus::prelude::*;
use gloo_console::error as console_error;
use tracing::{Level, error, info};

use api::fetch_portfolio;
use common::{
    config::SiteConfig,
    overlay::{Overlays, SCROLL_LOCK_CLASS},
    page::PageSections,
    theme::{LIGHT_THEME_CLASS, ThemeController},
};

mod browser;
use browser::{dom, storage::LocalThemeStore};

mod components;
use components::{
    modal::{MediaLightbox, ProjectDetailModal},
    navigation::NavBar,
};

mod sections;
use sections::{About, Contact, Education, Experience, Footer, Hero, Projects, Skills};

mod style;

const SITE_CONFIG: &str = include_str!("../site.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// App
//
// the page is one linear pipeline: restore the theme, fetch the data document
// once, then render every section from the result.  the fetched data is only
// ever passed down as props; overlay state lives in a single signal shared by
// the project cards and both modals
#[component]
pub fn App() -> Element {
    let config = use_hook(|| SiteConfig::from_toml_or_default(SITE_CONFIG));

    let theme = use_signal(|| {
        ThemeController::restore(LocalThemeStore::new(config.theme_key.clone()))
    });
    let overlays = use_signal(Overlays::default);

    // the classes live on <html> and <body>, outside of what dioxus renders
    use_effect(move || {
        dom::set_root_class(LIGHT_THEME_CLASS, theme.read().theme().is_light());
    });
    use_effect(move || {
        dom::set_body_class(SCROLL_LOCK_CLASS, overlays.read().is_scroll_locked());
    });

    let data_url = config.data_url.clone();
    let portfolio = use_resource(move || {
        let url = data_url.clone();
        async move {
            info!("fetching portfolio data from {url}");

            let result = fetch_portfolio(&url).await;
            if let Err(err) = &result {
                console_error!(format!("Error fetching portfolio data: {err}"));
                error!("failed to load portfolio data: {err}");
            }
            result
        }
    });

    let owner = config.owner.clone();
    let sections = use_memo(move || PageSections::from_fetch((*portfolio.read()).as_ref(), &owner));
    let sections = sections.read();

    rsx! {
        style { "{style::SITE_STYLES}" }

        NavBar { theme, owner: config.owner.clone() }

        main {
            Hero { state: sections.hero.clone() }
            About { state: sections.about.clone() }
            Skills { state: sections.skills.clone() }
            Experience {
                state: sections.experience.clone(),
                stagger_ms: config.timeline_stagger_ms,
            }
            Projects {
                state: sections.projects.clone(),
                stagger_ms: config.project_stagger_ms,
                overlays,
            }
            Education {
                state: sections.education.clone(),
                stagger_ms: config.timeline_stagger_ms,
            }
            Contact { state: sections.contact.clone() }
        }

        Footer { owner: config.owner.clone() }

        ProjectDetailModal { overlays }
        MediaLightbox { overlays }
    }
}
