//! Text layout into a particle field.
//!
//! The input text is split on line breaks and laid out with a fixed
//! per-character advance and per-line height inside a square centered in
//! the viewport. Each kept character slot becomes one particle resting on
//! its slot.

use crate::{
    bounds::Bounds,
    config::Config,
    particle::{Particle, ParticleField},
};
use glam::Vec2;
use rand::Rng;

/// Builds the particle field for `text` at the given viewport size.
///
/// Layout rules:
/// - lines are split on `'\n'`; every character of a line gets a slot at a
///   fixed `cfg.char_width` advance, including spaces (a blank glyph draws
///   nothing but still holds its slot, which keeps line centering intact);
/// - each line is centered horizontally inside the square, baselines start
///   `cfg.baseline_offset` below the square's top edge and advance by
///   `cfg.line_height` per line;
/// - a slot is kept only while it is short of the square's right and
///   bottom edges. A line wider than the square pokes out to the left and
///   is pulled back in by the first frame's clamp.
///
/// Degenerate input never fails: empty text or a non-positive square size
/// yields an empty field.
///
/// ### Parameters
/// - `text` - The text to render, possibly spanning multiple lines.
/// - `viewport` - Current viewport size in points.
/// - `cfg` - Global effect configuration.
/// - `rng` - Source for the per-particle randomized parameters.
pub fn layout_text(
    text: &str,
    viewport: Vec2,
    cfg: &Config,
    rng: &mut impl Rng,
) -> ParticleField {
    let bounds = Bounds::centered_in(viewport, cfg.square_size);

    if cfg.square_size <= 0.0 {
        return ParticleField::empty(bounds);
    }

    let far = bounds.max();
    let mut particles = Vec::new();

    for (line_index, line) in text.split('\n').enumerate() {
        let chars: Vec<char> = line.chars().collect();
        let line_width = chars.len() as f32 * cfg.char_width;
        let line_x = bounds.min.x + (cfg.square_size - line_width) / 2.0;
        let y = bounds.min.y + line_index as f32 * cfg.line_height + cfg.baseline_offset;

        for (i, &glyph) in chars.iter().enumerate() {
            let x = line_x + i as f32 * cfg.char_width;
            if x < far.x && y < far.y {
                particles.push(Particle::at_rest(Vec2::new(x, y), glyph, rng));
            }
        }
    }

    ParticleField::new(particles, bounds)
}
