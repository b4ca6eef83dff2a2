use dioxus::prelude::*;

use portfolio::theme::{ThemeMode, ThemeState};

// flips the page theme owned by the App; the choice sticks for the rest of the
// page view even if the system preference changes afterwards
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();

    let (icon, label) = match theme().current_mode() {
        ThemeMode::Dark => ("☀", "Switch to light mode"),
        ThemeMode::Light => ("☾", "Switch to dark mode"),
    };

    rsx! {
        button {
            class: "icon-button",
            title: label,
            "aria-label": label,
            onclick: move |_| theme.write().toggle(),
            "{icon}"
        }
    }
}
