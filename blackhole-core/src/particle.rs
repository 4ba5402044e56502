use crate::bounds::Bounds;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Simulation state for one rendered character.
#[derive(Debug)]
pub struct Particle {
    /// Current position, updated every frame.
    pub pos: Vec2,
    /// Layout slot the particle settles back toward. Never reassigned.
    pub rest: Vec2,
    pub glyph: char,
    /// Per-particle pull scale, drawn once at construction from `[1, 31)`.
    pub density: f32,
    /// Phase accumulator for the orbital motion around the attractor.
    pub spiral_angle: f32,
}

impl Particle {
    pub fn at_rest(pos: Vec2, glyph: char, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            rest: pos,
            glyph,
            density: rng.random_range(1.0..31.0),
            spiral_angle: rng.random_range(0.0..TAU),
        }
    }
}

/// An ordered particle collection together with the square it was laid
/// out in.
///
/// Cardinality, rest positions, and glyphs are fixed once layout completes;
/// a viewport change replaces the whole field rather than editing it.
#[derive(Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub bounds: Bounds,
}

impl ParticleField {
    pub fn new(particles: Vec<Particle>, bounds: Bounds) -> Self {
        Self { particles, bounds }
    }

    pub fn empty(bounds: Bounds) -> Self {
        Self {
            particles: Vec::new(),
            bounds,
        }
    }
}
