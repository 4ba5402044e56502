//! Per-frame advancement of a particle field.

use crate::{attractor::Attractor, config::Config, forces, particle::ParticleField};
use glam::Vec2;

/// One glyph to draw this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub glyph: char,
    pub pos: Vec2,
}

/// Advances every particle by one frame and refills `out` with one draw
/// command per particle, in field order.
///
/// Per particle:
/// 1. clamp the position into the field's bounding square. The clamp runs
///    *before* the force update, so a strong update can leave a particle
///    slightly outside the square until the next frame (soft boundary);
/// 2. run the force model against the latest attractor sample;
/// 3. emit the glyph at the updated position.
///
/// Update order is the field order, but each particle's update is
/// independent, so order has no effect on the result.
///
/// ### Parameters
/// - `field` - The particle field to advance; positions and spiral angles
///   are updated in place.
/// - `attractor` - Latest-pointer cell, read once for the whole frame.
/// - `cfg` - Global effect configuration.
/// - `out` - Reused output buffer; cleared and refilled on every call.
pub fn advance_frame(
    field: &mut ParticleField,
    attractor: &Attractor,
    cfg: &Config,
    out: &mut Vec<DrawCommand>,
) {
    out.clear();
    out.reserve(field.particles.len());

    let bounds = field.bounds;
    let attractor_pos = attractor.position();

    for p in &mut field.particles {
        p.pos = bounds.clamp(p.pos);
        forces::update_particle(p, attractor_pos, cfg);
        out.push(DrawCommand {
            glyph: p.glyph,
            pos: p.pos,
        });
    }
}
