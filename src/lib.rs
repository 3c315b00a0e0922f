//! Client-side interactivity for a single-page personal portfolio.
//!
//! This crate is compiled to WebAssembly and attached to static markup. Every
//! component is written against the [`dom::Dom`] capability trait so its
//! behavior can be exercised without a browser; the `hydrate` feature adds the
//! browser implementation and the event wiring that drives the components.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Header scrolled state, active section, mobile menu, smooth scroll |
//! | [`theme`] | Dark/light theme with a persisted preference |
//! | [`scroll_fx`] | Progress bar, back-to-top, parallax, scroll indicator |
//! | [`effects`] | Loading screen, cursor follower, resume download |
//! | [`typewriter`] | Rotating typed headline |
//! | [`reveal`] | Skill bars and count-up statistics |
//! | [`filter`] | Category filters and tab groups |
//! | [`contact`] | Simulated contact form submission |
//! | [`a11y`] | Keyboard navigation helpers and aria labels |
//! | [`report`] | Structured error reports and broken-image fallback |
//! | [`app`] | Component bootstrap that isolates initialization failures |
//! | [`dom`] | Host capability trait |
//! | [`config`] | Site tunables loaded from an optional JSON block |
//! | [`consts`] | Default thresholds, timings and class names |

pub mod a11y;
pub mod app;
pub mod config;
pub mod consts;
pub mod contact;
pub mod dom;
pub mod effects;
pub mod error;
pub mod filter;
pub mod nav;
pub mod reveal;
pub mod report;
pub mod scroll_fx;
pub mod theme;
pub mod typewriter;

#[cfg(feature = "hydrate")]
pub mod web;
