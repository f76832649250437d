//! Dark and light palettes for the widget.
//!
//! Components read colors from a [`Palette`] and push them into inline
//! styles, so switching themes is a single state flip in the app root.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Dark => Palette::dark(),
            ThemeMode::Light => Palette::light(),
        }
    }

    /// Icon shown on the toggle: the mode you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "☾",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub app_bar: &'static str,
    pub paper: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub highlight: &'static str,
    pub border: &'static str,
    pub icon: &'static str,
    pub safe: &'static str,
    pub wait: &'static str,
    pub glow: &'static str,
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            background: "linear-gradient(135deg, #0a0f2c 0%, #1a1f3c 100%)",
            app_bar: "rgba(10, 15, 44, 0.98)",
            paper: "rgba(20, 24, 50, 0.98)",
            text: "#e3e6f3",
            accent: "#232a4d",
            highlight: "#4f5bd5",
            border: "#232a4d",
            icon: "#e3e6f3",
            safe: "#43a047",
            wait: "#f44336",
            glow: "0 0 32px #4f5bd5cc",
        }
    }

    pub const fn light() -> Self {
        Self {
            background: "linear-gradient(135deg, #e3e6f3 0%, #f5f7fa 100%)",
            app_bar: "rgba(255,255,255,0.98)",
            paper: "rgba(255,255,255,0.98)",
            text: "#222",
            accent: "#e3e6f3",
            highlight: "#1976d2",
            border: "#e3e6f3",
            icon: "#222",
            safe: "#43a047",
            wait: "#f44336",
            glow: "0 0 32px #1976d2cc",
        }
    }

    /// Color of the verdict line.
    pub fn verdict_color(&self, ready: bool) -> &'static str {
        if ready {
            self.safe
        } else {
            self.wait
        }
    }

    /// CSS custom properties consumed by the stylesheet.
    pub fn css_vars(&self) -> String {
        format!(
            "--bg: {}; --app-bar: {}; --paper: {}; --text: {}; --accent: {}; \
             --highlight: {}; --border: {}; --icon: {}; --glow: {};",
            self.background,
            self.app_bar,
            self.paper,
            self.text,
            self.accent,
            self.highlight,
            self.border,
            self.icon,
            self.glow
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_palettes_differ_but_share_status_colors() {
        let (dark, light) = (Palette::dark(), Palette::light());
        assert_ne!(dark.highlight, light.highlight);
        assert_eq!(dark.verdict_color(true), light.verdict_color(true));
        assert_eq!(dark.verdict_color(false), "#f44336");
    }

    #[test]
    fn test_css_vars_include_highlight() {
        let vars = ThemeMode::Light.palette().css_vars();
        assert!(vars.contains("--highlight: #1976d2;"));
        assert!(vars.ends_with(';'));
    }
}
