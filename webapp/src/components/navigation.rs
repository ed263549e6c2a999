use dioxus::prelude::*;
use tracing::info;

use common::{
    nav::{NAV_ITEMS, NavMenu},
    theme::ThemeController,
};

use crate::browser::storage::LocalThemeStore;

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    theme: Signal<ThemeController<LocalThemeStore>>,
    owner: String,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut theme = props.theme;
    let owner = props.owner;

    let mut menu = use_signal(NavMenu::default);
    let icon = theme.read().theme().icon();

    rsx! {
        header { class: "navbar",
            nav { class: "nav-container",
                a { class: "logo", href: "#hero", "{owner}" }

                ul { class: menu.read().class(),
                    for (label, href) in NAV_ITEMS {
                        li { key: "{href}",
                            a { href: "{href}", onclick: move |_| menu.write().close(), "{label}" }
                        }
                    }
                }

                div { class: "nav-actions",
                    button {
                        class: "theme-toggle",
                        title: "Toggle theme",
                        onclick: move |_| {
                            let next = theme.write().toggle();
                            info!("switched to {} theme", next.as_str());
                        },
                        i { class: "fas {icon}" }
                    }
                    button {
                        class: "menu-toggle",
                        title: "Menu",
                        onclick: move |_| menu.write().toggle(),
                        i { class: "fas fa-bars" }
                    }
                }
            }
        }
    }
}
