//! Navigation coordinator: header styling, active section, mobile menu and
//! smooth anchor scrolling.
//!
//! Four visual states are driven from two input streams (scroll and click).
//! The coordinator owns all of them, so no other component writes to the
//! header, the nav links, the toggle or the menu.
//!
//! Element lookups happen once, in [`NavigationCoordinator::attach`]. Any role
//! may be missing; only the behavior that depends on it is disabled:
//!
//! | Missing | Disabled |
//! |---------|----------|
//! | header | scrolled styling, outside-click close (scrolls use height 0) |
//! | toggle or menu | mobile menu |
//! | links | active highlighting |
//!
//! Layout metrics (section offsets, header height) are read on every event
//! because they change with viewport size.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::NavConfig;
use crate::consts::{CLASS_ACTIVE, CLASS_SCROLLED};
use crate::dom::{Dom, ScrollBehavior};

pub const HEADER_SELECTOR: &str = "#header";
pub const LINK_SELECTOR: &str = ".nav-link";
pub const TOGGLE_SELECTOR: &str = "#mobile-menu-toggle";
pub const MENU_SELECTOR: &str = "#nav-menu";
pub const SECTION_SELECTOR: &str = "section[id]";

/// Mobile menu open/closed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// What the host should do with the native click after a nav link handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDisposition {
    /// The coordinator handled navigation; suppress the default jump.
    Handled,
    /// Not an in-page link; let the browser navigate.
    PassThrough,
}

/// One navigation entry.
#[derive(Debug, Clone)]
pub struct NavLink<N> {
    pub node: N,
    /// Fragment target without the leading `#`; `None` for external links.
    pub anchor: Option<String>,
}

/// A content region the links can point at.
#[derive(Debug, Clone)]
pub struct Section<N> {
    pub node: N,
    pub id: String,
}

/// Strip the leading `#` from an in-page href.
#[must_use]
pub fn anchor_from_href(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub struct NavigationCoordinator<D: Dom> {
    dom: D,
    config: NavConfig,
    header: Option<D::Node>,
    toggle: Option<D::Node>,
    menu: Option<D::Node>,
    links: Vec<NavLink<D::Node>>,
    sections: Vec<Section<D::Node>>,
    menu_state: MenuState,
    /// Last header state written, `None` before the first scroll.
    scrolled: Option<bool>,
    /// Last active link written; meaningful once `links_synced` is set.
    active_link: Option<usize>,
    links_synced: bool,
}

impl<D: Dom> NavigationCoordinator<D> {
    /// Look up the header, links, toggle, menu and sections.
    pub fn attach(dom: D, config: NavConfig) -> Self {
        let header = dom.query(HEADER_SELECTOR);
        let toggle = dom.query(TOGGLE_SELECTOR);
        let menu = dom.query(MENU_SELECTOR);
        let links = dom
            .query_all(LINK_SELECTOR)
            .into_iter()
            .map(|node| {
                let anchor = dom
                    .attribute(&node, "href")
                    .and_then(|href| anchor_from_href(&href).map(str::to_owned));
                NavLink { node, anchor }
            })
            .collect::<Vec<_>>();
        let sections = dom
            .query_all(SECTION_SELECTOR)
            .into_iter()
            .filter_map(|node| {
                let id = dom.attribute(&node, "id").filter(|id| !id.is_empty())?;
                Some(Section { node, id })
            })
            .collect::<Vec<_>>();

        log::debug!(
            "nav: attached header={} toggle={} menu={} links={} sections={}",
            header.is_some(),
            toggle.is_some(),
            menu.is_some(),
            links.len(),
            sections.len()
        );

        Self {
            dom,
            config,
            header,
            toggle,
            menu,
            links,
            sections,
            menu_state: MenuState::Closed,
            scrolled: None,
            active_link: None,
            links_synced: false,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn menu_state(&self) -> MenuState {
        self.menu_state
    }

    #[must_use]
    pub fn links(&self) -> &[NavLink<D::Node>] {
        &self.links
    }

    #[must_use]
    pub fn sections(&self) -> &[Section<D::Node>] {
        &self.sections
    }

    #[must_use]
    pub fn header(&self) -> Option<&D::Node> {
        self.header.as_ref()
    }

    #[must_use]
    pub fn toggle(&self) -> Option<&D::Node> {
        self.toggle.as_ref()
    }

    /// Whether both the toggle and the menu exist.
    #[must_use]
    pub fn has_mobile_menu(&self) -> bool {
        self.toggle.is_some() && self.menu.is_some()
    }

    /// Anchor of the link currently marked active.
    #[must_use]
    pub fn active_anchor(&self) -> Option<&str> {
        let idx = self.active_link?;
        self.links.get(idx)?.anchor.as_deref()
    }

    /// Index of the section containing `offset + active_offset_px`.
    ///
    /// Every section is tested and the last match wins, so with overlapping
    /// layout the later section takes precedence.
    #[must_use]
    pub fn section_at(&self, offset: f64) -> Option<usize> {
        let probe = offset + self.config.active_offset_px;
        let mut found = None;
        for (idx, section) in self.sections.iter().enumerate() {
            let top = self.dom.offset_top(&section.node);
            let height = self.dom.offset_height(&section.node);
            if probe >= top && probe < top + height {
                found = Some(idx);
            }
        }
        found
    }

    // --- Event handlers ---

    /// Update header styling and the active link for the current offset.
    pub fn on_scroll(&mut self) {
        let offset = self.dom.scroll_y();
        self.sync_header(offset > self.config.scrolled_threshold_px);

        let section = self.section_at(offset);
        let link = section.and_then(|idx| {
            let id = &self.sections[idx].id;
            self.links.iter().position(|l| l.anchor.as_deref() == Some(id.as_str()))
        });
        self.sync_active_link(link);
    }

    /// Flip the mobile menu.
    pub fn on_mobile_toggle_click(&mut self) {
        self.set_menu(self.menu_state.toggled());
    }

    /// Close the menu and smooth-scroll to the section behind `anchor`.
    ///
    /// An anchor with no matching section is ignored; the click is still
    /// reported as handled so the browser does not jump.
    pub fn on_nav_link_click(&mut self, anchor: &str) -> LinkDisposition {
        self.close_menu();

        let Some(section) = self.sections.iter().find(|s| s.id == anchor) else {
            log::debug!("nav: no section for anchor `{anchor}`");
            return LinkDisposition::Handled;
        };
        let header_height = self.header.as_ref().map_or(0.0, |h| self.dom.offset_height(h));
        let target = self.dom.offset_top(&section.node) - header_height;
        self.dom.scroll_to(target, ScrollBehavior::Smooth);
        LinkDisposition::Handled
    }

    /// Handle a click on the link at `index` in [`Self::links`].
    pub fn on_link_index_click(&mut self, index: usize) -> LinkDisposition {
        if let Some(anchor) = self.links.get(index).and_then(|l| l.anchor.clone()) {
            self.on_nav_link_click(&anchor)
        } else {
            self.close_menu();
            LinkDisposition::PassThrough
        }
    }

    /// Close the menu when a click lands outside the header.
    pub fn on_outside_click(&mut self, target: &D::Node) {
        let Some(header) = &self.header else {
            return;
        };
        if !self.dom.contains(header, target) {
            self.close_menu();
        }
    }

    pub fn close_menu(&mut self) {
        self.set_menu(MenuState::Closed);
    }

    // --- Writes ---

    fn set_menu(&mut self, state: MenuState) {
        let (Some(toggle), Some(menu)) = (&self.toggle, &self.menu) else {
            return;
        };
        self.menu_state = state;
        for node in [toggle, menu] {
            match state {
                MenuState::Open => self.dom.add_class(node, CLASS_ACTIVE),
                MenuState::Closed => self.dom.remove_class(node, CLASS_ACTIVE),
            }
        }
    }

    fn sync_header(&mut self, scrolled: bool) {
        let Some(header) = &self.header else {
            return;
        };
        if self.scrolled == Some(scrolled) {
            return;
        }
        if scrolled {
            self.dom.add_class(header, CLASS_SCROLLED);
        } else {
            self.dom.remove_class(header, CLASS_SCROLLED);
        }
        self.scrolled = Some(scrolled);
    }

    fn sync_active_link(&mut self, active: Option<usize>) {
        if self.links_synced && self.active_link == active {
            return;
        }
        for (idx, link) in self.links.iter().enumerate() {
            if Some(idx) == active {
                self.dom.add_class(&link.node, CLASS_ACTIVE);
            } else {
                self.dom.remove_class(&link.node, CLASS_ACTIVE);
            }
        }
        self.active_link = active;
        self.links_synced = true;
    }
}
