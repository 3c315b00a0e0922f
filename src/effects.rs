//! Small standalone effects: the loading overlay, the cursor follower and
//! the resume download notification.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::config::ResumeConfig;
use crate::consts::{CLASS_HIDDEN, CURSOR_OFFSET_PX};
use crate::dom::Dom;

pub const SPINNER_SELECTOR: &str = "#loading-spinner";
pub const CURSOR_SELECTOR: &str = "#cursor-follower";
pub const RESUME_SELECTOR: &str = "#resume-btn";

// =============================================================
// Loading screen
// =============================================================

pub struct LoadingScreen<D: Dom> {
    dom: D,
    spinner: Option<D::Node>,
    delay_ms: u32,
}

impl<D: Dom> LoadingScreen<D> {
    pub fn attach(dom: D, delay_ms: u32) -> Self {
        let spinner = dom.query(SPINNER_SELECTOR);
        Self { dom, spinner, delay_ms }
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.spinner.is_some()
    }

    /// How long after initialization to call [`Self::hide`].
    ///
    /// The delay runs from attach time, not from the window `load` event;
    /// `None` when there is no overlay to hide.
    #[must_use]
    pub fn hide_after_ms(&self) -> Option<u32> {
        self.spinner.as_ref().map(|_| self.delay_ms)
    }

    /// Hide the overlay and give scrolling back to the page.
    pub fn hide(&self) {
        let Some(spinner) = &self.spinner else {
            return;
        };
        self.dom.add_class(spinner, CLASS_HIDDEN);
        if let Some(body) = self.dom.body() {
            self.dom.set_style(&body, "overflow", "auto");
        }
    }
}

// =============================================================
// Cursor follower
// =============================================================

pub struct CursorFollower<D: Dom> {
    dom: D,
    cursor: D::Node,
}

impl<D: Dom> CursorFollower<D> {
    /// `None` when the element is missing or the device has no hover pointer.
    pub fn attach(dom: D, hover_capable: bool) -> Option<Self> {
        if !hover_capable {
            return None;
        }
        let cursor = dom.query(CURSOR_SELECTOR)?;
        Some(Self { dom, cursor })
    }

    pub fn on_mouse_move(&self, client_x: f64, client_y: f64) {
        self.dom.set_style(&self.cursor, "left", &format!("{}px", client_x - CURSOR_OFFSET_PX));
        self.dom.set_style(&self.cursor, "top", &format!("{}px", client_y - CURSOR_OFFSET_PX));
    }

    pub fn on_mouse_enter(&self) {
        self.dom.set_style(&self.cursor, "opacity", "0.6");
    }

    pub fn on_mouse_leave(&self) {
        self.dom.set_style(&self.cursor, "opacity", "0");
    }
}

// =============================================================
// Resume download
// =============================================================

const NOTIFICATION_TEXT: &str = "Resume download started!";

const NOTIFICATION_STYLE: [(&str, &str); 12] = [
    ("position", "fixed"),
    ("top", "100px"),
    ("right", "20px"),
    ("background", "var(--primary-600)"),
    ("color", "white"),
    ("padding", "12px 20px"),
    ("border-radius", "8px"),
    ("box-shadow", "var(--shadow-lg)"),
    ("z-index", "1000"),
    ("display", "flex"),
    ("align-items", "center"),
    ("gap", "8px"),
];

pub struct ResumeDownload<D: Dom> {
    dom: D,
    config: ResumeConfig,
}

impl<D: Dom> ResumeDownload<D> {
    pub fn attach(dom: D, config: ResumeConfig) -> Self {
        Self { dom, config }
    }

    #[must_use]
    pub fn button(&self) -> Option<D::Node> {
        self.dom.query(RESUME_SELECTOR)
    }

    /// Start the download and show a notification.
    ///
    /// Returns the notification so the caller can dismiss it later.
    pub fn start(&self) -> Option<D::Node> {
        if let Some(link) = self.dom.create_element("a") {
            self.dom.set_attribute(&link, "href", &self.config.href);
            self.dom.set_attribute(&link, "download", &self.config.file_name);
            self.dom.click(&link);
        }
        self.notify(NOTIFICATION_TEXT)
    }

    pub fn dismiss(&self, notification: &D::Node) {
        self.dom.remove(notification);
    }

    fn notify(&self, message: &str) -> Option<D::Node> {
        let body = self.dom.body()?;
        let note = self.dom.create_element("div")?;
        self.dom.set_attribute(&note, "class", "notification");
        self.dom.set_html(&note, &format!(r#"<i class="fas fa-download"></i> {message}"#));
        for (property, value) in NOTIFICATION_STYLE {
            self.dom.set_style(&note, property, value);
        }
        self.dom.append_child(&body, &note);
        Some(note)
    }
}
