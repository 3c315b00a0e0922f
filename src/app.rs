//! Component bootstrap.
//!
//! Components are independent, so a failure in one must not keep the rest
//! from starting. [`Bootstrap`] runs each initializer in registration order,
//! logs failures with the component name, and reports what happened.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::error::InitError;

type Initializer<'a> = Box<dyn FnOnce() -> Result<(), InitError> + 'a>;

/// Outcome of a bootstrap run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InitSummary {
    pub started: Vec<&'static str>,
    pub failed: Vec<&'static str>,
}

impl InitSummary {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Default)]
pub struct Bootstrap<'a> {
    steps: Vec<(&'static str, Initializer<'a>)>,
}

impl<'a> Bootstrap<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component initializer.
    #[must_use]
    pub fn with(mut self, name: &'static str, init: impl FnOnce() -> Result<(), InitError> + 'a) -> Self {
        self.steps.push((name, Box::new(init)));
        self
    }

    /// Run every initializer, continuing past failures.
    #[must_use]
    pub fn run(self) -> InitSummary {
        let mut summary = InitSummary::default();
        for (name, init) in self.steps {
            match init() {
                Ok(()) => {
                    log::debug!("init: {name} ready");
                    summary.started.push(name);
                }
                Err(err) => {
                    log::error!("init: {name} failed: {err}");
                    summary.failed.push(name);
                }
            }
        }
        if summary.is_clean() {
            log::info!("portfolio initialized ({} components)", summary.started.len());
        } else {
            log::warn!(
                "portfolio initialized with errors ({} ok, {} failed: {})",
                summary.started.len(),
                summary.failed.len(),
                summary.failed.join(", ")
            );
        }
        summary
    }
}
