use dioxus::prelude::*;

use crate::common::scroll::scroll_to_section;
use portfolio::{catalog::Profile, navigation::SectionAnchor};

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    profile: Profile,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let profile = props.profile;

    rsx! {
        section { id: SectionAnchor::Home.id(), class: "hero",
            div { class: "container",
                div { class: "hero-content",
                    p { class: "hero-greeting", "Hi, my name is" }
                    h1 { class: "hero-title",
                        span { class: "accent", "{profile.name}" }
                    }
                    p { class: "hero-headline", "{profile.headline}" }
                    p { class: "hero-tagline", "{profile.tagline}" }

                    div { class: "hero-actions",
                        button {
                            class: "btn btn-primary btn-lg",
                            onclick: move |_| scroll_to_section(SectionAnchor::Projects.id()),
                            "View My Work"
                        }
                        button {
                            class: "btn btn-secondary btn-lg",
                            onclick: move |_| scroll_to_section(SectionAnchor::Contact.id()),
                            "Get In Touch"
                        }
                        a {
                            class: "btn btn-secondary btn-lg",
                            href: "{profile.resume}",
                            download: "",
                            "Download Resume"
                        }
                    }
                }
            }
        }
    }
}
