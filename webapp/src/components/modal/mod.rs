mod lightbox;
mod project;

pub use lightbox::MediaLightbox;
pub use project::ProjectDetailModal;
