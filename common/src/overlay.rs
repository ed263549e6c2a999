use api::project::{MediaKind, Project};
use tracing::debug;

// class on <body> that stops the page behind an overlay from scrolling
pub const SCROLL_LOCK_CLASS: &str = "modal-open";

// ScrollLock
//
// both overlays need the page locked while they are visible and they can be
// stacked, so the lock counts its holders and is released only at zero
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holders: usize,
}

impl ScrollLock {
    pub fn acquire(&mut self) {
        self.holders += 1;
    }

    pub fn release(&mut self) {
        self.holders = self.holders.saturating_sub(1);
    }

    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    ProjectDetail,
    Lightbox,
}

// how a piece of media is displayed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaElement {
    Image,
    Video,
}

impl From<&MediaKind> for MediaElement {
    fn from(kind: &MediaKind) -> Self {
        if kind.is_still() {
            MediaElement::Image
        } else {
            MediaElement::Video
        }
    }
}

// the one item enlarged in the lightbox
#[derive(Clone, Debug, PartialEq)]
pub struct LightboxItem {
    pub src: String,
    pub kind: MediaKind,
}

impl LightboxItem {
    pub fn element(&self) -> MediaElement {
        MediaElement::from(&self.kind)
    }
}

// Overlays
//
// state for the project detail modal and the lightbox stacked above it.  each
// layer holds the scroll lock once while it is open: opening an open layer
// swaps its contents, closing a closed one does nothing
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overlays {
    project: Option<Project>,
    lightbox: Option<LightboxItem>,
    lock: ScrollLock,
}

impl Overlays {
    pub fn open_project(&mut self, project: Project) {
        debug!("opening project detail for {}", project.name);

        if self.project.replace(project).is_none() {
            self.lock.acquire();
        }
    }

    pub fn close_project(&mut self) {
        if self.project.take().is_some() {
            debug!("closed project detail");
            self.lock.release();
        }
    }

    pub fn open_lightbox(&mut self, src: String, kind: MediaKind) {
        debug!("opening lightbox for {kind} {src}");

        if self.lightbox.replace(LightboxItem { src, kind }).is_none() {
            self.lock.acquire();
        }
    }

    pub fn close_lightbox(&mut self) {
        if self.lightbox.take().is_some() {
            debug!("closed lightbox");
            self.lock.release();
        }
    }

    pub fn close(&mut self, layer: Layer) {
        match layer {
            Layer::ProjectDetail => self.close_project(),
            Layer::Lightbox => self.close_lightbox(),
        }
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn lightbox(&self) -> Option<&LightboxItem> {
        self.lightbox.as_ref()
    }

    pub fn is_open(&self, layer: Layer) -> bool {
        match layer {
            Layer::ProjectDetail => self.project.is_some(),
            Layer::Lightbox => self.lightbox.is_some(),
        }
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_project;

    #[test]
    fn lightbox_over_project_keeps_lock_until_both_close() {
        let mut overlays = Overlays::default();

        overlays.open_project(sample_project("Tracker", 2));
        overlays.open_lightbox("media/Tracker/0".to_owned(), MediaKind::Screenshot);
        assert!(overlays.is_scroll_locked());

        overlays.close_lightbox();
        assert!(overlays.is_open(Layer::ProjectDetail));
        assert!(!overlays.is_open(Layer::Lightbox));
        assert!(overlays.is_scroll_locked());

        overlays.close_project();
        assert!(!overlays.is_scroll_locked());
    }

    #[test]
    fn lightbox_alone_releases_lock() {
        let mut overlays = Overlays::default();

        overlays.open_lightbox("clip.mp4".to_owned(), MediaKind::DemoVideo);
        assert!(overlays.is_scroll_locked());

        overlays.close(Layer::Lightbox);
        assert!(!overlays.is_scroll_locked());
    }

    #[test]
    fn closing_project_under_open_lightbox_keeps_lock() {
        let mut overlays = Overlays::default();

        overlays.open_project(sample_project("Tracker", 1));
        overlays.open_lightbox("a.png".to_owned(), MediaKind::Gif);
        overlays.close_project();
        assert!(overlays.is_scroll_locked());

        overlays.close_lightbox();
        assert!(!overlays.is_scroll_locked());
    }

    #[test]
    fn reopening_replaces_contents_without_double_locking() {
        let mut overlays = Overlays::default();

        overlays.open_project(sample_project("Tracker", 3));
        overlays.open_project(sample_project("Notes", 0));
        assert_eq!(overlays.project().unwrap().name, "Notes");
        assert!(overlays.project().unwrap().features.is_empty());

        overlays.open_lightbox("a.png".to_owned(), MediaKind::Screenshot);
        overlays.open_lightbox("b.mp4".to_owned(), MediaKind::DemoVideo);
        assert_eq!(overlays.lightbox().unwrap().element(), MediaElement::Video);

        overlays.close_lightbox();
        overlays.close_project();
        assert!(!overlays.is_scroll_locked());
    }

    #[test]
    fn closing_closed_layers_is_a_no_op() {
        let mut overlays = Overlays::default();

        overlays.close_project();
        overlays.close_lightbox();
        assert!(!overlays.is_scroll_locked());

        overlays.open_project(sample_project("Tracker", 0));
        overlays.close_lightbox();
        assert!(overlays.is_scroll_locked());
    }

    #[test]
    fn lock_never_underflows() {
        let mut lock = ScrollLock::default();

        lock.release();
        lock.acquire();
        assert!(lock.is_locked());
        lock.release();
        assert!(!lock.is_locked());
    }

    #[test]
    fn media_element_follows_kind() {
        assert_eq!(MediaElement::from(&MediaKind::Screenshot), MediaElement::Image);
        assert_eq!(MediaElement::from(&MediaKind::Gif), MediaElement::Image);
        assert_eq!(MediaElement::from(&MediaKind::DemoVideo), MediaElement::Video);
        assert_eq!(
            MediaElement::from(&MediaKind::Other("clip".to_owned())),
            MediaElement::Video
        );
    }
}
