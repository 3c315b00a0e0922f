//! Keyboard navigation helpers and social link labels.

#[cfg(test)]
#[path = "a11y_test.rs"]
mod a11y_test;

use crate::consts::{CLASS_ACTIVE, CLASS_KEYBOARD_NAV};
use crate::dom::Dom;

pub const FOCUSABLE_SELECTOR: &str = r#"a, button, input, textarea, select, [tabindex]:not([tabindex="-1"])"#;
pub const OPEN_MODAL_SELECTOR: &str = ".modal.active";
pub const SOCIAL_LINK_SELECTOR: &str = ".social-link";

const FOCUS_OUTLINE: &str = "2px solid var(--primary-500)";
const FOCUS_OUTLINE_OFFSET: &str = "2px";

/// Platform name for a social icon class such as `fab fa-github`.
#[must_use]
pub fn platform_from_icon(class_name: &str) -> &'static str {
    const PLATFORMS: [(&str, &str); 5] = [
        ("github", "GitHub"),
        ("linkedin", "LinkedIn"),
        ("twitter", "Twitter"),
        ("envelope", "Email"),
        ("instagram", "Instagram"),
    ];
    PLATFORMS
        .iter()
        .find(|(needle, _)| class_name.contains(needle))
        .map_or("Social Media", |(_, name)| *name)
}

pub struct AccessibilityManager<D: Dom> {
    dom: D,
}

impl<D: Dom> AccessibilityManager<D> {
    pub fn attach(dom: D) -> Self {
        Self { dom }
    }

    /// Label icon-only social links that have no `aria-label` yet.
    ///
    /// Returns how many links were labelled.
    pub fn label_social_links(&self) -> usize {
        let mut labelled = 0;
        for link in self.dom.query_all(SOCIAL_LINK_SELECTOR) {
            if self.dom.attribute(&link, "aria-label").is_some() {
                continue;
            }
            let Some(icon) = self.dom.query_within(&link, "i") else {
                continue;
            };
            let class_name = self.dom.attribute(&icon, "class").unwrap_or_default();
            let label = format!("Visit my {} profile", platform_from_icon(&class_name));
            self.dom.set_attribute(&link, "aria-label", &label);
            labelled += 1;
        }
        labelled
    }

    /// `Escape` closes an open modal; `Tab` switches on keyboard mode.
    pub fn on_key_down(&self, key: &str) {
        match key {
            "Escape" => {
                if let Some(modal) = self.dom.query(OPEN_MODAL_SELECTOR) {
                    self.dom.remove_class(&modal, CLASS_ACTIVE);
                }
            }
            "Tab" => {
                if let Some(body) = self.dom.body() {
                    self.dom.add_class(&body, CLASS_KEYBOARD_NAV);
                }
            }
            _ => {}
        }
    }

    pub fn on_mouse_down(&self) {
        if let Some(body) = self.dom.body() {
            self.dom.remove_class(&body, CLASS_KEYBOARD_NAV);
        }
    }

    #[must_use]
    pub fn keyboard_mode(&self) -> bool {
        self.dom.body().is_some_and(|body| self.dom.has_class(&body, CLASS_KEYBOARD_NAV))
    }

    /// Draw a visible outline on `node` when navigating by keyboard.
    pub fn on_focus(&self, node: &D::Node) {
        if self.keyboard_mode() {
            self.dom.set_style(node, "outline", FOCUS_OUTLINE);
            self.dom.set_style(node, "outline-offset", FOCUS_OUTLINE_OFFSET);
        }
    }

    pub fn on_blur(&self, node: &D::Node) {
        self.dom.set_style(node, "outline", "");
        self.dom.set_style(node, "outline-offset", "");
    }
}
