use dioxus::prelude::*;

use common::overlay::{Layer, MediaElement, Overlays};

// MediaLightbox
//
// sits above the project detail modal.  it is rendered as a sibling of that
// modal, so clicks here never reach the project backdrop underneath
#[component]
pub fn MediaLightbox(overlays: Signal<Overlays>) -> Element {
    let mut overlays = overlays;

    let item = match overlays.read().lightbox() {
        Some(item) => item.clone(),
        None => return rsx! {},
    };

    rsx! {
        div {
            id: "mediaModal",
            class: "modal media-modal",
            onclick: move |_| overlays.write().close(Layer::Lightbox),
            div { class: "media-modal-content",
                span {
                    class: "close-button media-modal-close",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        overlays.write().close(Layer::Lightbox);
                    },
                    "×"
                }
                match item.element() {
                    MediaElement::Image => rsx! {
                        img {
                            id: "modalMediaImage",
                            src: "{item.src}",
                            alt: "{item.kind}",
                            onclick: move |evt| evt.stop_propagation(),
                        }
                    },
                    MediaElement::Video => rsx! {
                        video {
                            id: "modalMediaVideo",
                            src: "{item.src}",
                            controls: true,
                            autoplay: true,
                            onclick: move |evt| evt.stop_propagation(),
                        }
                    },
                }
            }
        }
    }
}
