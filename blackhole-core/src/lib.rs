//! Core simulation library for the text black-hole effect.
//!
//! Main components:
//! - [`particle`] — per-glyph simulation state and the laid-out field.
//! - [`attractor`] — latest pointer sample driving the pull.
//! - [`forces`] — the per-particle force update (pull, spiral, settle).
//! - [`frame`] — the per-frame clamp / update / draw pipeline.
//! - [`layout`] — text layout into starting positions.
//! - [`bounds`] — the bounding square particles are kept inside.
//! - [`config`] — tuning constants for the effect.

pub mod attractor;
pub mod bounds;
pub mod config;
pub mod forces;
pub mod frame;
pub mod layout;
pub mod particle;
