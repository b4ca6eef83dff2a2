use dioxus::prelude::*;

use crate::components::{project_card::ProjectCard, section_header::SectionHeader};
use portfolio::{catalog::Project, navigation::SectionAnchor};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectsProps {
    projects: Vec<Project>,
}

#[component]
pub fn Projects(props: ProjectsProps) -> Element {
    rsx! {
        section { id: SectionAnchor::Projects.id(), class: "projects",
            div { class: "container",
                SectionHeader {
                    title: String::from("Featured Projects"),
                    subtitle: String::from("A selection of things I have designed, built and shipped."),
                }

                div { class: "projects-grid",
                    for project in props.projects.iter() {
                        ProjectCard { key: "{project.title}", project: project.clone() }
                    }
                }
            }
        }
    }
}
