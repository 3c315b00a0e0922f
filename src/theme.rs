//! Dark/light theme with a persisted preference.
//!
//! The preference is the only thing this crate persists: one string
//! (`"dark"` or `"light"`) under a single storage key. The theme is applied as
//! a `data-theme` attribute on `<html>` and mirrored in the toggle's icon.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::dom::Dom;

pub const TOGGLE_SELECTOR: &str = "#theme-toggle";

const ICON_SUN: &str = "fas fa-sun";
const ICON_MOON: &str = "fas fa-moon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Stored preference if valid, otherwise the system preference.
    #[must_use]
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        stored.and_then(Self::parse).unwrap_or(if system_prefers_dark { Self::Dark } else { Self::Light })
    }

    /// Icon class shown on the toggle: the sun offers a way out of dark mode.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => ICON_SUN,
            Self::Light => ICON_MOON,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value storage for the preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

pub struct ThemeManager<D: Dom, S: PreferenceStore> {
    dom: D,
    store: S,
    key: String,
    theme: Theme,
}

impl<D: Dom, S: PreferenceStore> ThemeManager<D, S> {
    /// Resolve the initial theme and apply it.
    pub fn attach(dom: D, store: S, key: &str, system_prefers_dark: bool) -> Self {
        let theme = Theme::resolve(store.get(key).as_deref(), system_prefers_dark);
        let manager = Self { dom, store, key: key.to_owned(), theme };
        manager.apply();
        manager
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Write the current theme to `<html>` and the toggle icon.
    pub fn apply(&self) {
        if let Some(root) = self.dom.document_element() {
            self.dom.set_attribute(&root, "data-theme", self.theme.as_str());
        }
        let icon = self.dom.query(TOGGLE_SELECTOR).and_then(|toggle| self.dom.query_within(&toggle, "i"));
        if let Some(icon) = icon {
            self.dom.set_attribute(&icon, "class", self.theme.icon_class());
        }
    }

    /// Flip, persist and apply.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(&self.key, self.theme.as_str());
        self.apply();
        log::debug!("theme: switched to {}", self.theme);
        self.theme
    }
}
