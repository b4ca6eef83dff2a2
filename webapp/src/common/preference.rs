use dioxus::prelude::*;
use tracing::debug;

use portfolio::theme::ThemeState;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// forwards every change of the color scheme media query back to rust
const WATCH_COLOR_SCHEME: &str = r#"
const query = window.matchMedia("(prefers-color-scheme: dark)");
query.addEventListener("change", (event) => dioxus.send(event.matches));
"#;

// None when the browser cannot answer the media query at all
pub fn prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let query = window.match_media(DARK_QUERY).ok()??;

    Some(query.matches())
}

// use_color_scheme_listener
//
// keeps the theme signal in step with the operating system preference for as
// long as the page is open.  whether a change is applied is up to ThemeState,
// which ignores it once the user has picked a mode by hand
pub fn use_color_scheme_listener(mut theme: Signal<ThemeState>) {
    use_future(move || async move {
        let mut eval = document::eval(WATCH_COLOR_SCHEME);

        loop {
            match eval.recv::<bool>().await {
                Ok(prefers_dark) => {
                    theme.with_mut(|state| state.system_changed(prefers_dark));
                }
                Err(err) => {
                    debug!("color scheme listener stopped: {err:?}");
                    break;
                }
            }
        }
    });
}
