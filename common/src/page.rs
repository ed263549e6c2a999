use api::{
    Portfolio, Section,
    education::EducationEntry,
    experience::ExperienceEntry,
    personal::PersonalInfo,
    project::Project,
    skill::Skill,
};
use tracing::warn;

pub const ABOUT_FAILED: &str = "Failed to load About Me section.";
pub const SKILLS_FAILED: &str = "Failed to load technical skills.";
pub const EXPERIENCE_FAILED: &str = "Failed to load experience data.";
pub const PROJECTS_FAILED: &str = "Failed to load project data.";
pub const EDUCATION_FAILED: &str = "Failed to load education data.";
pub const CONTACT_FAILED: &str = "Failed to load contact info.";

pub const PROFILE_IMAGE_FAILED: &str = "Profile picture failed to load.";
pub const HERO_TITLE_FAILED: &str = "Please try again later.";

// what the hero shows instead of the person
#[derive(Clone, Debug, PartialEq)]
pub struct HeroFallback {
    pub name: String,
    pub title: &'static str,
    pub image_alt: &'static str,
}

impl HeroFallback {
    pub fn new(owner: &str) -> Self {
        HeroFallback {
            name: format!("{owner} (Data Error)"),
            title: HERO_TITLE_FAILED,
            image_alt: PROFILE_IMAGE_FAILED,
        }
    }
}

// SectionView
//
// the state of one page section.  Pending is the bare markup shown while the
// data document is still in flight
#[derive(Clone, Debug, PartialEq)]
pub enum SectionView<T, F = &'static str> {
    Pending,
    Ready(T),
    Failed(F),
}

impl<T, F> SectionView<T, F> {
    pub fn is_failed(&self) -> bool {
        matches!(self, SectionView::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            SectionView::Ready(value) => Some(value),
            _ => None,
        }
    }
}

// PageSections
//
// one view per page section, built once from the fetch result.  a failed fetch
// fails every section; a successful one fails only the sections whose
// top-level field was unusable
#[derive(Clone, Debug, PartialEq)]
pub struct PageSections {
    pub hero: SectionView<PersonalInfo, HeroFallback>,
    pub about: SectionView<String>,
    pub skills: SectionView<Vec<Skill>>,
    pub experience: SectionView<Vec<ExperienceEntry>>,
    pub projects: SectionView<Vec<Project>>,
    pub education: SectionView<Vec<EducationEntry>>,
    pub contact: SectionView<PersonalInfo>,
}

impl PageSections {
    pub fn pending() -> Self {
        PageSections {
            hero: SectionView::Pending,
            about: SectionView::Pending,
            skills: SectionView::Pending,
            experience: SectionView::Pending,
            projects: SectionView::Pending,
            education: SectionView::Pending,
            contact: SectionView::Pending,
        }
    }

    pub fn failed(owner: &str) -> Self {
        PageSections {
            hero: SectionView::Failed(HeroFallback::new(owner)),
            about: SectionView::Failed(ABOUT_FAILED),
            skills: SectionView::Failed(SKILLS_FAILED),
            experience: SectionView::Failed(EXPERIENCE_FAILED),
            projects: SectionView::Failed(PROJECTS_FAILED),
            education: SectionView::Failed(EDUCATION_FAILED),
            contact: SectionView::Failed(CONTACT_FAILED),
        }
    }

    pub fn from_portfolio(portfolio: &Portfolio, owner: &str) -> Self {
        for fault in portfolio.faults() {
            warn!("data document section fault: {fault}");
        }

        let info = &portfolio.personal_info;

        PageSections {
            hero: view(info, HeroFallback::new(owner), Clone::clone),
            about: view(info, ABOUT_FAILED, |info| info.about_me.clone()),
            skills: view(&portfolio.skills, SKILLS_FAILED, |skills| {
                skills.technical_skills.clone()
            }),
            experience: view(&portfolio.experience, EXPERIENCE_FAILED, Clone::clone),
            projects: view(&portfolio.projects, PROJECTS_FAILED, Clone::clone),
            education: view(&portfolio.education, EDUCATION_FAILED, Clone::clone),
            contact: view(info, CONTACT_FAILED, Clone::clone),
        }
    }

    // None while the fetch is still running
    pub fn from_fetch(fetched: Option<&anyhow::Result<Portfolio>>, owner: &str) -> Self {
        match fetched {
            None => PageSections::pending(),
            Some(Ok(portfolio)) => PageSections::from_portfolio(portfolio, owner),
            Some(Err(_)) => PageSections::failed(owner),
        }
    }

    pub fn failed_count(&self) -> usize {
        [
            self.hero.is_failed(),
            self.about.is_failed(),
            self.skills.is_failed(),
            self.experience.is_failed(),
            self.projects.is_failed(),
            self.education.is_failed(),
            self.contact.is_failed(),
        ]
        .into_iter()
        .filter(|failed| *failed)
        .count()
    }
}

fn view<S, T, F>(
    section: &Section<S>,
    fallback: F,
    project: impl FnOnce(&S) -> T,
) -> SectionView<T, F> {
    match section {
        Ok(value) => SectionView::Ready(project(value)),
        Err(_) => SectionView::Failed(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{document, portfolio};

    #[test]
    fn pending_until_fetch_resolves() {
        let sections = PageSections::from_fetch(None, "Ada Example");

        assert_eq!(sections, PageSections::pending());
        assert_eq!(sections.failed_count(), 0);
        assert!(sections.hero.ready().is_none());
    }

    #[test]
    fn loaded_sections_keep_one_item_per_entry_in_order() {
        let fetched = Ok(portfolio());
        let sections = PageSections::from_fetch(Some(&fetched), "Ada Example");

        assert_eq!(sections.failed_count(), 0);

        let skills: Vec<_> = sections
            .skills
            .ready()
            .unwrap()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(skills, ["Rust", "SQL", "Go"]);

        let experience: Vec<_> = sections
            .experience
            .ready()
            .unwrap()
            .iter()
            .map(|e| e.company.as_str())
            .collect();
        assert_eq!(experience, ["Initech", "Globex"]);

        let projects: Vec<_> = sections
            .projects
            .ready()
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(projects, ["Tracker", "Notes"]);

        assert_eq!(sections.education.ready().unwrap().len(), 1);
        assert_eq!(sections.about.ready().unwrap(), "I build things.");
        assert_eq!(sections.contact.ready().unwrap().social_links.len(), 2);
        assert_eq!(sections.hero.ready().unwrap().name, "Ada Example");
    }

    #[test]
    fn http_error_fails_all_seven_sections() {
        let fetched: anyhow::Result<Portfolio> = Err(anyhow::Error::msg("HTTP error! status: 404"));
        let sections = PageSections::from_fetch(Some(&fetched), "Ada Example");

        assert_eq!(sections.failed_count(), 7);
        assert_eq!(sections, PageSections::failed("Ada Example"));

        match &sections.hero {
            SectionView::Failed(fallback) => {
                assert_eq!(fallback.name, "Ada Example (Data Error)");
                assert_eq!(fallback.title, "Please try again later.");
                assert_eq!(fallback.image_alt, "Profile picture failed to load.");
            }
            other => panic!("hero should have failed, got {other:?}"),
        }
        assert_eq!(sections.about, SectionView::Failed(ABOUT_FAILED));
        assert_eq!(sections.skills, SectionView::Failed(SKILLS_FAILED));
        assert_eq!(sections.experience, SectionView::Failed(EXPERIENCE_FAILED));
        assert_eq!(sections.projects, SectionView::Failed(PROJECTS_FAILED));
        assert_eq!(sections.education, SectionView::Failed(EDUCATION_FAILED));
        assert_eq!(sections.contact, SectionView::Failed(CONTACT_FAILED));
    }

    #[test]
    fn fallback_messages_are_distinct() {
        let mut messages = vec![
            ABOUT_FAILED,
            SKILLS_FAILED,
            EXPERIENCE_FAILED,
            PROJECTS_FAILED,
            EDUCATION_FAILED,
            CONTACT_FAILED,
            HERO_TITLE_FAILED,
        ];
        messages.sort_unstable();
        messages.dedup();

        assert_eq!(messages.len(), 7);
    }

    #[test]
    fn missing_personal_info_fails_only_its_sections() {
        let mut value = document();
        value.as_object_mut().unwrap().remove("personal_info");
        let portfolio = Portfolio::from_json(&value.to_string()).unwrap();

        let sections = PageSections::from_portfolio(&portfolio, "Ada Example");

        assert!(sections.hero.is_failed());
        assert!(sections.about.is_failed());
        assert!(sections.contact.is_failed());
        assert_eq!(sections.failed_count(), 3);
        assert_eq!(sections.projects.ready().unwrap().len(), 2);
    }

    #[test]
    fn malformed_projects_fail_only_projects() {
        let mut value = document();
        value["projects"] = serde_json::json!("soon");
        let portfolio = Portfolio::from_json(&value.to_string()).unwrap();

        let sections = PageSections::from_portfolio(&portfolio, "Ada Example");

        assert_eq!(sections.projects, SectionView::Failed(PROJECTS_FAILED));
        assert_eq!(sections.failed_count(), 1);
    }

    #[test]
    fn shipped_sample_data_renders_every_section() {
        let body = include_str!("../../webapp/public/data.json");
        let portfolio = Portfolio::from_json(body).unwrap();
        assert!(portfolio.faults().is_empty());

        let sections = PageSections::from_portfolio(&portfolio, "Ada Example");

        assert_eq!(sections.failed_count(), 0);
        assert_eq!(sections.skills.ready().unwrap().len(), 4);
        assert_eq!(sections.projects.ready().unwrap().len(), 2);
    }
}
