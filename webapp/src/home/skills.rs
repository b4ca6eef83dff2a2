use dioxus::prelude::*;

use crate::components::{section_header::SectionHeader, skill_bar::SkillBar};
use portfolio::{catalog::SkillEntry, navigation::SectionAnchor};

#[derive(Clone, PartialEq, Props)]
struct SkillGroupProps {
    title: String,
    skills: Vec<SkillEntry>,
}

#[component]
fn SkillGroup(props: SkillGroupProps) -> Element {
    rsx! {
        div { class: "card skill-group",
            h3 { class: "skill-group-title", "{props.title}" }
            for skill in props.skills.iter() {
                SkillBar { key: "{skill.name}", skill: skill.clone() }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SkillsProps {
    frontend: Vec<SkillEntry>,
    backend: Vec<SkillEntry>,
    tags: Vec<String>,
}

#[component]
pub fn Skills(props: SkillsProps) -> Element {
    rsx! {
        section { id: SectionAnchor::Skills.id(), class: "skills",
            div { class: "container",
                SectionHeader {
                    title: String::from("Skills"),
                    subtitle: String::from("Technologies I work with day to day."),
                }

                div { class: "skills-grid",
                    SkillGroup { title: String::from("Frontend"), skills: props.frontend.clone() }
                    SkillGroup { title: String::from("Backend"), skills: props.backend.clone() }
                }

                div { class: "tag-cloud",
                    for tag in props.tags.iter() {
                        span { class: "chip", "{tag}" }
                    }
                }
            }
        }
    }
}
