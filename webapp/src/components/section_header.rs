use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    title: String,
    #[props(default)]
    subtitle: String,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { class: "section-title", "{props.title}" }
            div { class: "section-underline" }
            if !props.subtitle.is_empty() {
                p { class: "section-subtitle", "{props.subtitle}" }
            }
        }
    }
}
