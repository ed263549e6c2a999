use tracing::warn;
use web_sys::{DomTokenList, window};

// the theme and scroll lock classes live outside the dioxus root, on <html>
// and <body>, so they are set directly

pub fn set_root_class(class: &str, present: bool) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    match root {
        Some(root) => set_class(&root.class_list(), class, present),
        None => warn!("no document root to set {class} on"),
    }
}

pub fn set_body_class(class: &str, present: bool) {
    let body = window().and_then(|w| w.document()).and_then(|d| d.body());

    match body {
        Some(body) => set_class(&body.class_list(), class, present),
        None => warn!("no document body to set {class} on"),
    }
}

fn set_class(list: &DomTokenList, class: &str, present: bool) {
    let result = if present {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };

    if let Err(err) = result {
        warn!("failed to update class {class}: {err:?}");
    }
}
