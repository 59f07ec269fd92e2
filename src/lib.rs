//! Behavioral core of the Mayalok Ventures site.
//!
//! The site itself is static markup. This crate owns the parts of it that
//! carry a contract: the form submission pipeline, the particle network
//! drawn behind the hero section, and the read-only site configuration that
//! pages render from. With the `hydrate` feature it compiles to WebAssembly
//! and exposes mount/submit entry points to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`form`] | Validation, sanitization, remote submission and the per-form state machine |
//! | [`particles`] | Particle simulation, drawing surface and frame-loop lifecycle |
//! | [`config`] | Form endpoint configuration parsed from the environment |
//! | [`site`] | Immutable site metadata, navigation and venture listings |
//! | [`motion`] | Named entrance/hover transition variants |

pub mod config;
pub mod form;
pub mod motion;
pub mod particles;
pub mod site;

#[cfg(feature = "hydrate")]
pub mod web;
