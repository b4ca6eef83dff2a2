use tracing::debug;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use portfolio::navigation::{ScrollSurface, SectionNavigator};

// the live document, as seen by the section navigator
pub struct DomSurface {
    window: Window,
    document: Document,
}

impl DomSurface {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        Some(DomSurface { window, document })
    }
}

impl ScrollSurface for DomSurface {
    fn element_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|element| element.get_bounding_client_rect().top())
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);

        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_section(anchor_id: &str) {
    match DomSurface::new() {
        Some(mut surface) => SectionNavigator::default().scroll_to(&mut surface, anchor_id),
        None => debug!("no document available, ignoring scroll to {anchor_id}"),
    }
}
