use dioxus::prelude::*;

use portfolio::catalog::SkillEntry;

#[derive(Clone, PartialEq, Props)]
pub struct SkillBarProps {
    skill: SkillEntry,
}

#[component]
pub fn SkillBar(props: SkillBarProps) -> Element {
    let name = props.skill.name.clone();
    let level = props.skill.proficiency();

    rsx! {
        div { class: "skill",
            div { class: "skill-header",
                span { "{name}" }
                span { class: "skill-level", "{level}%" }
            }
            div {
                class: "progress",
                role: "progressbar",
                "aria-valuenow": "{level}",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                div { class: "progress-fill", style: "width: {level}%;" }
            }
        }
    }
}
