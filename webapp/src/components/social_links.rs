use dioxus::prelude::*;

use portfolio::catalog::SocialLink;

#[derive(Clone, PartialEq, Props)]
pub struct SocialLinksProps {
    links: Vec<SocialLink>,
}

#[component]
pub fn SocialLinks(props: SocialLinksProps) -> Element {
    rsx! {
        div { class: "social-links",
            for link in props.links.iter() {
                a {
                    key: "{link.url}",
                    class: "btn btn-sm btn-secondary",
                    href: "{link.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{link.label}"
                }
            }
        }
    }
}
