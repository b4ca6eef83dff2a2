use dioxus::prelude::*;

use crate::{common::current_year, components::social_links::SocialLinks};
use portfolio::catalog::SocialLink;

#[derive(Clone, PartialEq, Props)]
pub struct FooterProps {
    name: String,
    social: Vec<SocialLink>,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    let year = current_year();

    rsx! {
        footer { class: "page-footer",
            div { class: "container",
                SocialLinks { links: props.social.clone() }
                p { "© {year} {props.name}. All rights reserved." }
            }
        }
    }
}
