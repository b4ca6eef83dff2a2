#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, error};

mod common;
use common::{
    preference::{prefers_dark, use_color_scheme_listener},
    style,
};

mod components;

mod home;
use home::Home;

use portfolio::{catalog::ContentCatalog, theme::ThemeState};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// App
//
// owns the theme state for the page view and hands it to the rest of the tree
// through the context, and loads the catalog once on first render
#[component]
pub fn App() -> Element {
    let theme = use_context_provider(|| Signal::new(ThemeState::from_system(prefers_dark())));
    use_color_scheme_listener(theme);

    let catalog = use_hook(|| {
        ContentCatalog::shipped().map_err(|err| {
            error!("{err:#}");
            err.to_string()
        })
    });

    let state = theme();
    let palette = state.palette().css_variables();

    rsx! {
        style { "{style::PAGE_STYLES}" }
        style { "{palette}" }
        div { class: "page", "data-theme": "{state.current_mode().css_value()}",
            match catalog {
                Ok(catalog) => rsx! {
                    Home { catalog }
                },
                Err(err) => rsx! {
                    div { class: "catalog-error",
                        h1 { "This page could not be loaded" }
                        p { "{err}" }
                    }
                },
            }
        }
    }
}
