use api::project::{MediaKind, Project, ProjectLink};

use crate::overlay::MediaElement;

// a thumbnail in the project detail media grid.  the same url may appear more
// than once, so tiles are told apart by position
#[derive(Clone, Debug, PartialEq)]
pub struct MediaTile {
    pub position: usize,
    pub url: String,
    pub kind: MediaKind,
    pub element: MediaElement,
    pub alt: String,
}

// ProjectDetail
//
// everything the project detail modal shows, derived fresh from one project.
// each optional list is None when the project has no entries for it, which is
// what hides that part of the modal
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectDetail {
    pub name: String,
    pub cover: String,
    pub description: String,
    pub features: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub links: Option<Vec<ProjectLink>>,
    pub media: Option<Vec<MediaTile>>,
}

impl From<&Project> for ProjectDetail {
    fn from(project: &Project) -> Self {
        let media = project
            .media
            .iter()
            .enumerate()
            .map(|(position, item)| MediaTile {
                position,
                url: item.url.clone(),
                kind: item.kind.clone(),
                element: MediaElement::from(&item.kind),
                alt: format!("{} {}", project.name, item.kind),
            })
            .collect();

        ProjectDetail {
            name: project.name.clone(),
            cover: project.cover_image.clone(),
            description: project.description.clone(),
            features: shown(project.features.clone()),
            technologies: shown(project.technologies_used.clone()),
            links: shown(project.links.clone()),
            media: shown(media),
        }
    }
}

fn shown<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::project::MediaItem;

    use crate::{fixtures::sample_project, overlay::Overlays};

    #[test]
    fn empty_lists_are_hidden() {
        let detail = ProjectDetail::from(&sample_project("Notes", 0));

        assert_eq!(detail.name, "Notes");
        assert!(detail.features.is_none());
        assert!(detail.technologies.is_none());
        assert!(detail.links.is_none());
        assert!(detail.media.is_none());
    }

    #[test]
    fn non_empty_lists_are_shown_with_every_entry() {
        let detail = ProjectDetail::from(&sample_project("Tracker", 3));

        assert_eq!(detail.features.as_ref().map(Vec::len), Some(3));
        assert_eq!(detail.technologies.as_ref().map(Vec::len), Some(3));
        assert_eq!(detail.links.as_ref().map(Vec::len), Some(3));
        assert_eq!(
            detail.features.unwrap(),
            ["Tracker feature 0", "Tracker feature 1", "Tracker feature 2"]
        );
    }

    #[test]
    fn media_tiles_pick_element_by_kind() {
        let detail = ProjectDetail::from(&sample_project("Tracker", 2));
        let media = detail.media.unwrap();

        assert_eq!(media[0].element, MediaElement::Image);
        assert_eq!(media[0].alt, "Tracker screenshot");
        assert_eq!(media[1].element, MediaElement::Video);
        assert_eq!(media[1].url, "media/Tracker/1");
    }

    #[test]
    fn second_project_leaves_nothing_of_the_first() {
        let mut overlays = Overlays::default();

        overlays.open_project(sample_project("Tracker", 3));
        let first = ProjectDetail::from(overlays.project().unwrap());
        assert!(first.features.is_some());

        overlays.open_project(sample_project("Notes", 1));
        let second = ProjectDetail::from(overlays.project().unwrap());

        assert_eq!(second, ProjectDetail::from(&sample_project("Notes", 1)));
        assert_eq!(second.features.unwrap(), ["Notes feature 0"]);
        assert_eq!(second.cover, "images/Notes.png");
        assert_eq!(second.description, "Notes in detail");
    }

    #[test]
    fn repeated_media_urls_are_kept_as_separate_tiles() {
        let mut project = sample_project("Tracker", 0);
        project.media = vec![
            MediaItem { kind: MediaKind::Screenshot, url: "media/a.png".into() },
            MediaItem { kind: MediaKind::Gif, url: "media/a.png".into() },
            MediaItem { kind: MediaKind::Screenshot, url: "media/a.png".into() },
        ];

        let media = ProjectDetail::from(&project).media.unwrap();

        assert_eq!(media.len(), 3);
        assert!(media.iter().all(|tile| tile.url == "media/a.png"));
        let positions: Vec<_> = media.iter().map(|tile| tile.position).collect();
        assert_eq!(positions, [0, 1, 2]);
        assert_eq!(media[1].kind, MediaKind::Gif);
    }
}
