//! Shared constants: default thresholds, timings and state class names.

// ── Navigation ──────────────────────────────────────────────────

/// Scroll offset past which the header gets its `scrolled` styling.
pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Look-ahead added to the scroll offset when probing for the active section.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;

// ── Scroll effects ──────────────────────────────────────────────

/// Scroll offset past which the back-to-top button is shown.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 500.0;

/// Vertical parallax rate applied to the scroll offset.
pub const PARALLAX_RATE: f64 = -0.5;

/// Per-shape speed increment; shape `i` moves at `(i + 1) * step`.
pub const PARALLAX_SPEED_STEP: f64 = 0.1;

/// Degrees of shape rotation per scrolled pixel.
pub const PARALLAX_ROTATION_PER_PX: f64 = 0.1;

/// Cursor follower is centered on the pointer by this offset.
pub const CURSOR_OFFSET_PX: f64 = 10.0;

// ── Timings (milliseconds) ──────────────────────────────────────

pub const LOADING_DELAY_MS: u32 = 2500;
pub const TYPE_SPEED_MS: u32 = 150;
pub const DELETE_SPEED_MS: u32 = 50;
pub const TYPE_PAUSE_MS: u32 = 1000;
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_FRAME_MS: u32 = 16;
pub const SUBMIT_DELAY_MS: u32 = 2000;
pub const STATUS_VISIBLE_MS: u32 = 5000;
pub const NOTIFICATION_VISIBLE_MS: u32 = 3000;

/// Probability that a simulated contact submission fails.
pub const SUBMIT_FAILURE_RATE: f64 = 0.1;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.5;

// ── Storage ─────────────────────────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "theme";

// ── Class names ─────────────────────────────────────────────────

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_KEYBOARD_NAV: &str = "keyboard-navigation";
