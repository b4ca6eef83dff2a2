use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

// ThemeMode
//
// the two palettes the page can be drawn with.  when the environment cannot
// tell us what the user prefers, we fall back to dark
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn from_preference(prefers_dark: Option<bool>) -> Self {
        match prefers_dark {
            Some(false) => Self::Light,
            Some(true) | None => Self::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    // value for the data-theme attribute on the page root
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette::dark(),
            Self::Light => Palette::light(),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        };
        write!(f, "{}", name)
    }
}

// where the current mode came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeSource {
    System,
    User,
}

/// The page's theme flag together with where it came from.
///
/// The state starts out following the environment's color-scheme preference.
/// Once the user flips the toggle, the mode is pinned and later changes to the
/// environment preference are ignored for the rest of the page view.  Nothing
/// here is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
    source: ThemeSource,
}

impl ThemeState {
    pub fn from_system(prefers_dark: Option<bool>) -> Self {
        if prefers_dark.is_none() {
            debug!("color scheme preference unavailable, defaulting to dark");
        }

        ThemeState {
            mode: ThemeMode::from_preference(prefers_dark),
            source: ThemeSource::System,
        }
    }

    pub fn current_mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn source(&self) -> ThemeSource {
        self.source
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        self.source = ThemeSource::User;

        debug!(mode = %self.mode, "theme toggled by user");
    }

    // returns true if the mode actually changed
    pub fn system_changed(&mut self, prefers_dark: bool) -> bool {
        if self.source == ThemeSource::User {
            debug!("ignoring color scheme change, theme pinned by user");
            return false;
        }

        let mode = ThemeMode::from_preference(Some(prefers_dark));
        let changed = mode != self.mode;
        self.mode = mode;

        debug!(mode = %self.mode, changed, "followed color scheme change");
        changed
    }

    pub fn palette(&self) -> Palette {
        self.mode.palette()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        ThemeState::from_system(None)
    }
}

/// Every color the page derives from the active mode.
///
/// The palette is emitted as CSS custom properties (see [`Palette::css_variables`])
/// so that cards, buttons and gradients across all sections pick up the same
/// values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_raised: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub chip: &'static str,
    pub shadow_sm: &'static str,
    pub shadow_md: &'static str,
    pub shadow_lg: &'static str,
}

// shared by both palettes
pub const HOVER_LIFT: &str = "translateY(-4px)";

impl Palette {
    pub const fn dark() -> Self {
        Palette {
            primary: "#60A5FA",
            primary_dark: "#3B82F6",
            secondary: "#A78BFA",
            background: "#0F172A",
            surface: "#1E293B",
            surface_raised: "#273449",
            text_primary: "#F1F5F9",
            text_secondary: "#94A3B8",
            border: "#334155",
            chip: "rgba(96, 165, 250, 0.15)",
            shadow_sm: "0 1px 3px 0 rgba(0, 0, 0, 0.4)",
            shadow_md: "0 6px 12px -2px rgba(0, 0, 0, 0.5)",
            shadow_lg: "0 14px 28px -6px rgba(0, 0, 0, 0.6)",
        }
    }

    pub const fn light() -> Self {
        Palette {
            primary: "#2563EB",
            primary_dark: "#1D4ED8",
            secondary: "#7C3AED",
            background: "#F8FAFC",
            surface: "#FFFFFF",
            surface_raised: "#F1F5F9",
            text_primary: "#0F172A",
            text_secondary: "#475569",
            border: "#E2E8F0",
            chip: "rgba(37, 99, 235, 0.1)",
            shadow_sm: "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
            shadow_md: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
            shadow_lg: "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
        }
    }

    pub fn accent_gradient(&self) -> String {
        format!(
            "linear-gradient(135deg, {}, {})",
            self.primary, self.secondary
        )
    }

    pub fn css_variables(&self) -> String {
        format!(
            r#":root {{
  --primary: {primary};
  --primary-dark: {primary_dark};
  --secondary: {secondary};
  --background: {background};
  --surface: {surface};
  --surface-raised: {surface_raised};
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --border: {border};
  --chip: {chip};
  --shadow-sm: {shadow_sm};
  --shadow-md: {shadow_md};
  --shadow-lg: {shadow_lg};
  --gradient-accent: {gradient};
  --hover-lift: {lift};
}}"#,
            primary = self.primary,
            primary_dark = self.primary_dark,
            secondary = self.secondary,
            background = self.background,
            surface = self.surface,
            surface_raised = self.surface_raised,
            text_primary = self.text_primary,
            text_secondary = self.text_secondary,
            border = self.border,
            chip = self.chip,
            shadow_sm = self.shadow_sm,
            shadow_md = self.shadow_md,
            shadow_lg = self.shadow_lg,
            gradient = self.accent_gradient(),
            lift = HOVER_LIFT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_are_distinct() {
        let dark = Palette::dark();
        let light = Palette::light();

        assert_ne!(dark.background, light.background);
        assert_ne!(dark.surface, light.surface);
        assert_ne!(dark.primary, light.primary);
        assert_ne!(dark.secondary, light.secondary);
        assert_ne!(dark.text_primary, light.text_primary);
    }

    #[test]
    fn test_toggle_twice_restores_palette() {
        for prefers_dark in [Some(true), Some(false), None] {
            let mut state = ThemeState::from_system(prefers_dark);
            let before = state.palette().css_variables();

            state.toggle();
            assert_ne!(state.palette().css_variables(), before);

            state.toggle();
            assert_eq!(state.palette().css_variables(), before);
        }
    }

    #[test]
    fn test_missing_preference_defaults_to_dark() {
        let state = ThemeState::from_system(None);
        assert_eq!(state.current_mode(), ThemeMode::Dark);
        assert_eq!(state.source(), ThemeSource::System);
        assert_eq!(ThemeState::default(), state);
    }

    #[test]
    fn test_dark_start_then_toggle_to_light() {
        let mut state = ThemeState::from_system(Some(true));
        assert_eq!(state.current_mode(), ThemeMode::Dark);

        state.toggle();
        assert_eq!(state.current_mode(), ThemeMode::Light);
        assert_eq!(state.source(), ThemeSource::User);
        assert_eq!(state.palette(), Palette::light());
        assert_eq!(state.palette().background, "#F8FAFC");
    }

    #[test]
    fn test_system_change_followed_before_toggle() {
        let mut state = ThemeState::from_system(Some(false));
        assert_eq!(state.current_mode(), ThemeMode::Light);

        assert!(state.system_changed(true));
        assert_eq!(state.current_mode(), ThemeMode::Dark);

        // same value again is not a change
        assert!(!state.system_changed(true));
        assert_eq!(state.source(), ThemeSource::System);
    }

    #[test]
    fn test_system_change_ignored_after_toggle() {
        let mut state = ThemeState::from_system(Some(true));
        state.toggle();

        assert!(!state.system_changed(true));
        assert_eq!(state.current_mode(), ThemeMode::Light);

        assert!(!state.system_changed(false));
        assert_eq!(state.current_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_css_variables_carry_palette() {
        let css = Palette::light().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--background: #F8FAFC;"));
        assert!(css.contains("--gradient-accent: linear-gradient(135deg, #2563EB, #7C3AED);"));
        assert!(css.contains("--hover-lift: translateY(-4px);"));
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(ThemeMode::Dark.css_value(), "dark");
        assert_eq!(ThemeMode::Light.to_string(), "Light");
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}
