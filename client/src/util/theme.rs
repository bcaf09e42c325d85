//! Light/dark theme model and its durable-store literals.
//!
//! The session keeps a single `dark_mode` flag. Everything visual is derived
//! from it on every render: class modifiers, the toggle label and icon, and
//! the `data-theme` attribute on the `<html>` element.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Durable-store key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Color scheme for the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    /// Parse a stored preference. Only the exact literal `"dark"` selects
    /// the dark theme; anything else, including an absent key, is light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Literal written to the durable store and to `data-theme`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label on the toggle button: names the theme a click switches to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark",
            Self::Dark => "Light",
        }
    }
}

/// BEM class list for `base` under `theme`, e.g. `"card card--dark"`.
#[must_use]
pub fn themed(base: &str, theme: Theme) -> String {
    format!("{base} {base}--{}", theme.as_str())
}

/// Mirror `theme` onto `<html data-theme>` so page-level CSS (body
/// background, scrollbars) follows the session flag.
pub fn apply_document_theme(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        match root.map(|el| el.set_attribute("data-theme", theme.as_str())) {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("data-theme not applied: {e:?}"),
            None => log::warn!("data-theme not applied: no document element"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = theme;
}
