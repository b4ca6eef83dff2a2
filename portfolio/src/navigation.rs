use tracing::debug;

// height of the fixed nav bar, which every scroll target is shifted by so the
// section heading is not hidden underneath it
pub const NAV_BAR_HEIGHT: f64 = 64.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionAnchor {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionAnchor {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Home,
            Self::About,
            Self::Projects,
            Self::Skills,
            Self::Contact,
        ]
    }

    // the sections that get a link in the nav bar; home is reached via the brand
    pub fn nav_links() -> Vec<Self> {
        vec![Self::About, Self::Projects, Self::Skills, Self::Contact]
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|anchor| anchor.id() == id)
    }
}

/// The bits of live document geometry the navigator needs.
///
/// In the browser this is backed by `web-sys`; anything else (tests included)
/// can provide its own.
pub trait ScrollSurface {
    /// Top edge of the element with this id, relative to the viewport, or
    /// `None` if no such element is in the document.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Current vertical scroll position of the document.
    fn scroll_offset(&self) -> f64;

    /// Request an animated scroll to an absolute vertical position.
    fn smooth_scroll_to(&mut self, top: f64);
}

// converts a viewport-relative element top into the absolute scroll position
// that leaves the element just below the nav bar
pub fn scroll_target(viewport_top: f64, scroll_offset: f64, bar_height: f64) -> f64 {
    (viewport_top + scroll_offset - bar_height).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionNavigator {
    bar_height: f64,
}

impl SectionNavigator {
    pub fn new(bar_height: f64) -> Self {
        SectionNavigator { bar_height }
    }

    // a missing anchor is not an error, the click just does nothing
    pub fn scroll_to<S: ScrollSurface>(&self, surface: &mut S, anchor_id: &str) {
        let Some(viewport_top) = surface.element_top(anchor_id) else {
            debug!("no element with id {anchor_id}, ignoring scroll request");
            return;
        };

        let target = scroll_target(viewport_top, surface.scroll_offset(), self.bar_height);

        debug!(anchor_id, target, "scrolling to section");
        surface.smooth_scroll_to(target);
    }

    pub fn scroll_to_anchor<S: ScrollSurface>(&self, surface: &mut S, anchor: SectionAnchor) {
        self.scroll_to(surface, anchor.id())
    }
}

impl Default for SectionNavigator {
    fn default() -> Self {
        SectionNavigator::new(NAV_BAR_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    // elements are stored by their position in the document, and smooth
    // scrolls settle immediately
    struct FakeSurface {
        elements: HashMap<String, f64>,
        scroll: f64,
        requests: Vec<f64>,
    }

    impl FakeSurface {
        fn new(elements: &[(&str, f64)]) -> Self {
            FakeSurface {
                elements: elements
                    .iter()
                    .map(|(id, top)| (id.to_string(), *top))
                    .collect(),
                scroll: 0.0,
                requests: Vec::new(),
            }
        }
    }

    impl ScrollSurface for FakeSurface {
        fn element_top(&self, id: &str) -> Option<f64> {
            self.elements.get(id).map(|top| top - self.scroll)
        }

        fn scroll_offset(&self) -> f64 {
            self.scroll
        }

        fn smooth_scroll_to(&mut self, top: f64) {
            self.requests.push(top);
            self.scroll = top;
        }
    }

    fn page() -> FakeSurface {
        FakeSurface::new(&[
            ("home", 0.0),
            ("about", 800.0),
            ("projects", 1600.0),
            ("skills", 2700.0),
            ("contact", 3500.0),
        ])
    }

    #[test]
    fn test_scroll_settles_below_nav_bar() {
        let mut surface = page();
        let navigator = SectionNavigator::default();

        navigator.scroll_to(&mut surface, "about");
        assert_eq!(surface.scroll_offset(), 800.0 - 64.0);
    }

    #[test]
    fn test_scroll_from_mid_page() {
        let mut surface = page();
        surface.scroll = 2000.0;
        let navigator = SectionNavigator::default();

        navigator.scroll_to_anchor(&mut surface, SectionAnchor::Projects);
        assert_eq!(surface.scroll_offset(), 1600.0 - 64.0);

        navigator.scroll_to_anchor(&mut surface, SectionAnchor::Contact);
        assert_eq!(surface.scroll_offset(), 3500.0 - 64.0);
        assert_eq!(surface.requests.len(), 2);
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let mut surface = page();
        surface.scroll = 1234.0;
        let navigator = SectionNavigator::default();

        navigator.scroll_to(&mut surface, "blog");
        assert_eq!(surface.scroll_offset(), 1234.0);
        assert!(surface.requests.is_empty());
    }

    #[test]
    fn test_target_near_top_clamps_to_zero() {
        let mut surface = page();
        surface.scroll = 500.0;
        let navigator = SectionNavigator::default();

        navigator.scroll_to_anchor(&mut surface, SectionAnchor::Home);
        assert_eq!(surface.requests, vec![0.0]);
    }

    #[test]
    fn test_repeated_requests_are_each_issued() {
        let mut surface = page();
        let navigator = SectionNavigator::default();

        navigator.scroll_to(&mut surface, "skills");
        navigator.scroll_to(&mut surface, "skills");
        assert_eq!(surface.requests, vec![2636.0, 2636.0]);
    }

    #[test]
    fn test_anchor_ids_round_trip() {
        for anchor in SectionAnchor::all() {
            assert_eq!(SectionAnchor::from_id(anchor.id()), Some(anchor));
        }
        assert_eq!(SectionAnchor::from_id("blog"), None);
        assert!(!SectionAnchor::nav_links().contains(&SectionAnchor::Home));
    }
}
