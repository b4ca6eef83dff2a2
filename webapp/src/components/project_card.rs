use dioxus::prelude::*;

use portfolio::catalog::Project;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    project: Project,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        article { class: "card project-card",
            div { class: "project-accent" }
            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }

                div { class: "project-tags",
                    for tag in project.tags.iter() {
                        span { class: "chip", "{tag}" }
                    }
                }

                div { class: "project-links",
                    a {
                        class: "btn btn-sm btn-secondary",
                        href: "{project.repo_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Code"
                    }
                    a {
                        class: "btn btn-sm btn-primary",
                        href: "{project.demo_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Live Demo"
                    }
                }
            }
        }
    }
}
