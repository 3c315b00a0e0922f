//! Cosmetic scroll effects: reading progress bar, back-to-top button,
//! parallax shapes and the hero scroll indicator.
//!
//! None of these share state with navigation. Each part is optional and
//! silently absent when its element is missing.

#[cfg(test)]
#[path = "scroll_fx_test.rs"]
mod scroll_fx_test;

use crate::config::ScrollConfig;
use crate::consts::{PARALLAX_RATE, PARALLAX_ROTATION_PER_PX, PARALLAX_SPEED_STEP};
use crate::dom::{Dom, ScrollBehavior};

pub const PROGRESS_SELECTOR: &str = "#scroll-progress";
pub const BACK_TO_TOP_SELECTOR: &str = "#back-to-top";
pub const SHAPE_SELECTOR: &str = ".floating-shapes .shape";
pub const INDICATOR_SELECTOR: &str = ".scroll-indicator";
pub const INDICATOR_TARGET_SELECTOR: &str = "#about";

/// Percentage of the scrollable distance covered at `scroll_y`.
///
/// A page that cannot scroll reports 0.
#[must_use]
pub fn progress_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// CSS transform for the parallax shape at `index`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn parallax_transform(scroll_y: f64, index: usize) -> String {
    let rate = scroll_y * PARALLAX_RATE;
    let speed = (index + 1) as f64 * PARALLAX_SPEED_STEP;
    format!("translateY({}px) rotate({}deg)", rate * speed, scroll_y * PARALLAX_ROTATION_PER_PX)
}

pub struct ScrollEffects<D: Dom> {
    dom: D,
    config: ScrollConfig,
    progress: Option<D::Node>,
    back_to_top: Option<D::Node>,
    shapes: Vec<D::Node>,
    indicator: Option<D::Node>,
    back_to_top_visible: Option<bool>,
}

impl<D: Dom> ScrollEffects<D> {
    pub fn attach(dom: D, config: ScrollConfig) -> Self {
        let progress = dom.query(PROGRESS_SELECTOR);
        let back_to_top = dom.query(BACK_TO_TOP_SELECTOR);
        let shapes = dom.query_all(SHAPE_SELECTOR);
        let indicator = dom.query(INDICATOR_SELECTOR);
        Self { dom, config, progress, back_to_top, shapes, indicator, back_to_top_visible: None }
    }

    #[must_use]
    pub fn back_to_top(&self) -> Option<&D::Node> {
        self.back_to_top.as_ref()
    }

    #[must_use]
    pub fn indicator(&self) -> Option<&D::Node> {
        self.indicator.as_ref()
    }

    /// Whether any part needs scroll events.
    #[must_use]
    pub fn wants_scroll(&self) -> bool {
        self.progress.is_some() || self.back_to_top.is_some() || !self.shapes.is_empty()
    }

    pub fn on_scroll(&mut self) {
        let scroll_y = self.dom.scroll_y();

        if let Some(bar) = &self.progress {
            let percent = progress_percent(scroll_y, self.dom.document_height(), self.dom.viewport_height());
            self.dom.set_style(bar, "width", &format!("{percent}%"));
        }

        if let Some(button) = &self.back_to_top {
            let visible = scroll_y > self.config.back_to_top_threshold_px;
            if self.back_to_top_visible != Some(visible) {
                let (opacity, visibility) = if visible { ("1", "visible") } else { ("0", "hidden") };
                self.dom.set_style(button, "opacity", opacity);
                self.dom.set_style(button, "visibility", visibility);
                self.back_to_top_visible = Some(visible);
            }
        }

        for (index, shape) in self.shapes.iter().enumerate() {
            self.dom.set_style(shape, "transform", &parallax_transform(scroll_y, index));
        }
    }

    pub fn on_back_to_top_click(&self) {
        self.dom.scroll_to(0.0, ScrollBehavior::Smooth);
    }

    /// Scroll the about section into view, if the page has one.
    pub fn on_indicator_click(&self) {
        if let Some(target) = self.dom.query(INDICATOR_TARGET_SELECTOR) {
            self.dom.scroll_to(self.dom.offset_top(&target), ScrollBehavior::Smooth);
        }
    }
}
