//! Button groups that filter or switch a set of items.
//!
//! The page uses three of these: the project filter, the certification
//! filter and the internship tabs. They differ only in selectors and in how a
//! button key is matched against an item, captured by [`FilterKind`].

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::consts::{CLASS_ACTIVE, CLASS_HIDDEN};
use crate::dom::Dom;

/// Filter key that shows every item.
pub const SHOW_ALL: &str = "all";

const REVEAL_ANIMATION: &str = "fadeInUp 0.5s ease forwards";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Hide items whose `data-category` differs from the key (unless `all`).
    Category,
    /// Activate the single item whose id equals the key.
    Tabs,
}

/// Selectors and matching rule for one group.
#[derive(Debug, Clone, Copy)]
pub struct FilterSpec {
    pub name: &'static str,
    pub button_selector: &'static str,
    pub item_selector: &'static str,
    pub key_attribute: &'static str,
    pub kind: FilterKind,
}

pub const PROJECTS: FilterSpec = FilterSpec {
    name: "projects",
    button_selector: ".filter-btn",
    item_selector: ".project-card",
    key_attribute: "data-filter",
    kind: FilterKind::Category,
};

pub const CERTIFICATIONS: FilterSpec = FilterSpec {
    name: "certifications",
    button_selector: ".cert-filter-btn",
    item_selector: ".cert-card",
    key_attribute: "data-filter",
    kind: FilterKind::Category,
};

pub const INTERNSHIPS: FilterSpec = FilterSpec {
    name: "internships",
    button_selector: ".company-tab",
    item_selector: ".internship-content",
    key_attribute: "data-company",
    kind: FilterKind::Tabs,
};

pub struct FilterGroup<D: Dom> {
    dom: D,
    spec: FilterSpec,
    buttons: Vec<D::Node>,
    items: Vec<D::Node>,
}

impl<D: Dom> FilterGroup<D> {
    pub fn attach(dom: D, spec: FilterSpec) -> Self {
        let buttons = dom.query_all(spec.button_selector);
        let items = dom.query_all(spec.item_selector);
        Self { dom, spec, buttons, items }
    }

    #[must_use]
    pub fn buttons(&self) -> &[D::Node] {
        &self.buttons
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Apply the key of the button at `index` and make it the only active one.
    pub fn select(&self, index: usize) {
        let Some(button) = self.buttons.get(index) else {
            return;
        };
        let key = self.dom.attribute(button, self.spec.key_attribute).unwrap_or_default();
        match self.spec.kind {
            FilterKind::Category => self.filter_by_category(&key),
            FilterKind::Tabs => self.show_tab(&key),
        }
        for (idx, node) in self.buttons.iter().enumerate() {
            if idx == index {
                self.dom.add_class(node, CLASS_ACTIVE);
            } else {
                self.dom.remove_class(node, CLASS_ACTIVE);
            }
        }
        log::debug!("{}: selected `{key}`", self.spec.name);
    }

    fn filter_by_category(&self, key: &str) {
        for item in &self.items {
            let category = self.dom.attribute(item, "data-category");
            if key == SHOW_ALL || category.as_deref() == Some(key) {
                self.dom.remove_class(item, CLASS_HIDDEN);
                self.dom.set_style(item, "animation", REVEAL_ANIMATION);
            } else {
                self.dom.add_class(item, CLASS_HIDDEN);
            }
        }
    }

    fn show_tab(&self, key: &str) {
        for item in &self.items {
            if self.dom.attribute(item, "id").as_deref() == Some(key) {
                self.dom.add_class(item, CLASS_ACTIVE);
            } else {
                self.dom.remove_class(item, CLASS_ACTIVE);
            }
        }
    }
}
