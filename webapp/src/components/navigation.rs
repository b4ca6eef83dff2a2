use dioxus::prelude::*;

use crate::{common::scroll::scroll_to_section, components::theme_toggle::ThemeToggle};
use portfolio::navigation::SectionAnchor;

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    anchor: SectionAnchor,
    menu_open: Signal<bool>,
}

// in-page links scroll instead of jumping, and close the mobile menu
#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let anchor = props.anchor;
    let mut menu_open = props.menu_open;

    rsx! {
        a {
            class: "nav-link",
            href: "#{anchor.id()}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                menu_open.set(false);
                scroll_to_section(anchor.id());
            },
            "{anchor.label()}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    brand: String,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "app-header",
            div { class: "container nav-container",
                a {
                    class: "logo",
                    href: "#{SectionAnchor::Home.id()}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        menu_open.set(false);
                        scroll_to_section(SectionAnchor::Home.id());
                    },
                    "{props.brand}"
                }

                nav { class: if menu_open() { "nav-links open" } else { "nav-links" },
                    for anchor in SectionAnchor::nav_links() {
                        NavLink { key: "{anchor.id()}", anchor, menu_open }
                    }
                }

                div { class: "nav-actions",
                    ThemeToggle {}
                    button {
                        class: "icon-button menu-button",
                        "aria-label": "Toggle navigation menu",
                        onclick: move |_| {
                            let open = menu_open();
                            menu_open.set(!open);
                        },
                        if menu_open() {
                            "✕"
                        } else {
                            "☰"
                        }
                    }
                }
            }
        }
    }
}
