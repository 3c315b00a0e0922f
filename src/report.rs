//! Structured error reports and the broken-image fallback.
//!
//! Reports are only logged; there is no tracking service behind them.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use serde::Serialize;

use crate::dom::Dom;

pub const IMAGE_SELECTOR: &str = "img";

/// Inline SVG shown in place of an image that failed to load.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAwIiBoZWlnaHQ9IjMwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjZGRkIi8+PHRleHQgeD0iNTAlIiB5PSI1MCUiIGZvbnQtZmFtaWx5PSJBcmlhbCwgc2Fucy1zZXJpZiIgZm9udC1zaXplPSIxOCIgZmlsbD0iIzk5OSIgdGV4dC1hbmNob3I9Im1pZGRsZSIgZHk9Ii4zZW0iPkltYWdlIG5vdCBhdmFpbGFibGU8L3RleHQ+PC9zdmc+";

pub const PLACEHOLDER_ALT: &str = "Image not available";

/// Where an uncaught failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSource {
    /// A script error reached the window.
    Uncaught,
    /// A promise rejected with no handler.
    UnhandledRejection,
    /// A component failed to initialize.
    Init,
}

/// Page context captured alongside each report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub timestamp: String,
    pub user_agent: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub source: ErrorSource,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub timestamp: String,
    pub user_agent: String,
    pub url: String,
}

impl ErrorReport {
    #[must_use]
    pub fn new(source: ErrorSource, message: impl Into<String>, stack: Option<String>, page: PageContext) -> Self {
        let message = message.into();
        Self {
            source,
            message: if message.is_empty() { "unknown error".to_owned() } else { message },
            stack: stack.filter(|s| !s.is_empty()),
            timestamp: page.timestamp,
            user_agent: page.user_agent,
            url: page.url,
        }
    }

    /// Log the report as a single JSON line at error level.
    pub fn log(&self) {
        match serde_json::to_string(self) {
            Ok(json) => log::error!("error report: {json}"),
            Err(err) => log::error!("error report: {} ({err})", self.message),
        }
    }
}

/// Navigation timing marks, in milliseconds from the time origin.
///
/// A mark the browser has not reached yet is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavigationMarks {
    pub fetch_start: f64,
    pub dom_content_loaded_start: f64,
    pub dom_content_loaded_end: f64,
    pub load_start: f64,
    pub load_end: f64,
}

/// Page load durations derived from [`NavigationMarks`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadMetrics {
    pub dom_content_loaded: f64,
    /// `None` while the load event has not finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_complete: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<f64>,
}

impl LoadMetrics {
    #[must_use]
    pub fn from_marks(marks: &NavigationMarks) -> Self {
        let loaded = marks.load_end > 0.0;
        Self {
            dom_content_loaded: marks.dom_content_loaded_end - marks.dom_content_loaded_start,
            load_complete: loaded.then(|| marks.load_end - marks.load_start),
            total_time: loaded.then(|| marks.load_end - marks.fetch_start),
        }
    }

    /// Log the metrics as one JSON line at info level.
    pub fn log(&self) {
        match serde_json::to_string(self) {
            Ok(json) => log::info!("performance metrics: {json}"),
            Err(err) => log::warn!("performance metrics: {err}"),
        }
    }
}

/// Swap a broken image for the placeholder.
///
/// Returns `false` when the image already shows the placeholder, so a broken
/// placeholder cannot trigger an endless error loop.
pub fn replace_broken_image<D: Dom>(dom: &D, image: &D::Node) -> bool {
    if dom.attribute(image, "src").as_deref() == Some(PLACEHOLDER_IMAGE) {
        return false;
    }
    dom.set_attribute(image, "src", PLACEHOLDER_IMAGE);
    dom.set_attribute(image, "alt", PLACEHOLDER_ALT);
    true
}
