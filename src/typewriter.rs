//! Rotating typed headline.
//!
//! [`Typewriter`] is a pure state machine: each [`Typewriter::tick`] yields the
//! text to display and how long to wait before the next tick. The browser
//! driver just loops over ticks with a timer.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::config::TypewriterConfig;

pub const ELEMENT_SELECTOR: &str = "#typewriter";

/// One frame of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    config: TypewriterConfig,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    /// `None` when there is nothing to type.
    #[must_use]
    pub fn new(config: TypewriterConfig) -> Option<Self> {
        let phrases = config
            .phrases
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        if phrases.is_empty() {
            return None;
        }
        Some(Self { phrases, config, phrase: 0, chars: 0, deleting: false })
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// Advance by one character and report what to show next.
    pub fn tick(&mut self) -> Frame {
        let current = &self.phrases[self.phrase];
        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(current.len());
        }
        let text = current[..self.chars].iter().collect::<String>();

        let mut delay_ms = if self.deleting { self.config.delete_ms } else { self.config.type_ms };
        if !self.deleting && self.chars == current.len() {
            delay_ms = self.config.pause_ms;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
        }

        Frame { text, delay_ms }
    }
}
