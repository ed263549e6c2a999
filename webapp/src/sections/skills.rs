use dioxus::prelude::*;
use tracing::debug;

use api::skill::Skill;
use common::{layout::RevealOnce, page::SectionView};

use super::SectionError;

#[component]
pub fn Skills(state: SectionView<Vec<Skill>>) -> Element {
    rsx! {
        section { id: "skills", class: "section",
            div { class: "container",
                h2 { class: "section-title", "Technical Skills" }
                div { id: "technical-skills-progress-container",
                    match state {
                        SectionView::Pending => rsx! {},
                        SectionView::Ready(skills) => rsx! {
                            for (index, skill) in skills.into_iter().enumerate() {
                                SkillRow { key: "{index}", skill }
                            }
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

// SkillRow
//
// the bar starts empty and fills to the skill level the first time the row
// scrolls into view.  after that the visibility events are ignored
#[derive(Clone, PartialEq, Props)]
struct SkillRowProps {
    skill: Skill,
}

#[component]
fn SkillRow(props: SkillRowProps) -> Element {
    let skill = props.skill;
    let level = skill.percent();

    let mut reveal = use_signal(RevealOnce::default);
    let filled = reveal.read().is_revealed();

    let name = skill.name.clone();
    let on_visible = move |evt: VisibleEvent| {
        let intersecting = evt.data().is_intersecting().unwrap_or(false);

        if intersecting && !reveal.peek().is_revealed() {
            reveal.with_mut(|r| r.observe(true));
            debug!("revealed skill bar for {name}");
        }
    };

    rsx! {
        div { class: "skill-progress-item", onvisible: on_visible,
            div { class: "skill-name-level",
                span { "{skill.name}" }
                span { "{level}%" }
            }
            div { class: "progress-bar-container",
                div {
                    class: if filled { "progress-bar-fill filled" } else { "progress-bar-fill" },
                    "data-level": "{level}",
                    width: if filled { format!("{level}%") } else { String::from("0%") },
                }
            }
        }
    }
}
