use dioxus::prelude::*;

use crate::components::section_header::SectionHeader;
use portfolio::{
    catalog::{Highlight, Profile},
    navigation::SectionAnchor,
};

#[derive(Clone, PartialEq, Props)]
pub struct AboutProps {
    profile: Profile,
    highlights: Vec<Highlight>,
}

#[component]
pub fn About(props: AboutProps) -> Element {
    let profile = props.profile;

    rsx! {
        section { id: SectionAnchor::About.id(), class: "about",
            div { class: "container",
                SectionHeader { title: String::from("About Me") }

                div { class: "about-grid",
                    img {
                        class: "about-photo",
                        src: "{profile.photo}",
                        alt: "{profile.name}",
                        loading: "lazy",
                    }

                    div { class: "about-text",
                        for paragraph in profile.about.iter() {
                            p { "{paragraph}" }
                        }

                        div { class: "highlights",
                            for highlight in props.highlights.iter() {
                                div { class: "card highlight",
                                    div { class: "highlight-value", "{highlight.value}" }
                                    div { class: "highlight-label", "{highlight.label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
