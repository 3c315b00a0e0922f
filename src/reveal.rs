//! Reveal-on-visible animations: skill bars fill to their `data-width`
//! and statistics count up to their `data-count`.
//!
//! Visibility detection belongs to the host (an intersection observer in the
//! browser); this module decides what to write once an element is visible.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::CounterConfig;
use crate::dom::Dom;

pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub const COUNTER_SELECTOR: &str = ".stat-number[data-count]";

/// Fill a skill bar to its `data-width` percentage.
pub fn reveal_skill_bar<D: Dom>(dom: &D, bar: &D::Node) {
    if let Some(width) = dom.attribute(bar, "data-width") {
        dom.set_style(bar, "width", &format!("{}%", width.trim()));
    }
}

/// Leading decimal digits of `raw` after trimming and an optional `+`,
/// e.g. `"250+"` → 250.
fn leading_number(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
    let Ok(value) = trimmed[..end].parse::<u64>() else {
        return None;
    };
    Some(value)
}

/// Count-up from zero to a target in fixed frames.
///
/// The step is `target / (duration / frame)`; the final frame always lands
/// exactly on the target.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    step: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: u64, config: &CounterConfig) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let target = target as f64;
        let frames = f64::from(config.duration_ms) / f64::from(config.frame_ms.max(1));
        let step = if frames > 0.0 { target / frames } else { target };
        Self { target, step, current: 0.0, done: false }
    }

    /// Parse the counter target from an element.
    ///
    /// Only the leading digits count, so `"10+"` targets 10.
    #[must_use]
    pub fn from_element<D: Dom>(dom: &D, node: &D::Node, config: &CounterConfig) -> Option<Self> {
        let raw = dom.attribute(node, "data-count")?;
        let target = leading_number(&raw)?;
        Some(Self::new(target, config))
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.current += self.step;
        if self.current >= self.target || self.step <= 0.0 {
            self.current = self.target;
            self.done = true;
        }
        Some(self.current.floor() as u64)
    }
}
