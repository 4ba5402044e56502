//! Per-particle force update for the black-hole field.
//!
//! Each frame a particle is in exactly one of three regimes, decided by its
//! distance to the attractor:
//! 1. out of range (or no attractor at all) — it settles back toward its
//!    rest slot;
//! 2. in range — it is pulled inward along the radial direction and pushed
//!    along its spiral tangent;
//! 3. near the center — the radial direction would degenerate, so it spins
//!    with a fixed magnitude instead.
//!
//! The model never clamps; keeping particles inside the bounding square is
//! the caller's job (see [`crate::frame`]).

use crate::{config::Config, particle::Particle};
use glam::Vec2;

/// Advances one particle by one frame against the current attractor.
///
/// With an attractor present at `distance < cfg.max_distance` (strict — a
/// particle sitting exactly on the influence boundary is unaffected):
///
/// 1. `force = (1 − distance / max_distance) × gravitational_pull`, scaling
///    linearly from zero at the boundary up to the full pull at the center.
/// 2. The spiral phase advances by `spiral_gain × force` in both in-range
///    regimes below.
/// 3. `distance > min_distance`: the particle moves along the unit direction
///    to the attractor by `force × density`, then along
///    `(cos angle, sin angle)` by `force`. The tangential term layered on
///    the radial pull is what turns the infall into a spiral.
/// 4. Otherwise the radial direction is unreliable (including
///    `distance == 0`), and the particle instead moves along
///    `(cos angle, sin angle)` by the fixed `near_center_spin` magnitude,
///    independent of force and density.
///
/// In-range updates end the frame there. Only out-of-range particles (or
/// all particles, when no pointer sample exists yet) settle: each axis
/// independently moves `1 / return_divisor` of the way back to rest, an
/// exponential decay that approaches the rest slot without ever snapping
/// onto it.
///
/// ### Parameters
/// - `p` - The particle to advance; its position and spiral angle are
///   updated in place.
/// - `attractor` - Latest pointer sample, or `None` if the pointer has not
///   reported yet.
/// - `cfg` - Global effect configuration.
pub fn update_particle(p: &mut Particle, attractor: Option<Vec2>, cfg: &Config) {
    if let Some(center) = attractor {
        let delta = center - p.pos;
        let distance = delta.length();

        if distance < cfg.max_distance {
            let force = (1.0 - distance / cfg.max_distance) * cfg.gravitational_pull;

            // The spiral phase advances in both in-range regimes.
            p.spiral_angle += cfg.spiral_gain * force;
            let spin = Vec2::from_angle(p.spiral_angle);

            if distance > cfg.min_distance {
                // Radial pull toward the attractor, scaled per particle.
                p.pos += delta / distance * force * p.density;
                // Tangential component on top of the pull.
                p.pos += spin * force;
            } else {
                // Too close for a stable radial direction; spin in place.
                p.pos += spin * cfg.near_center_spin;
            }
            return;
        }
    }

    settle_toward_rest(p, cfg);
}

/// Moves a particle a fixed fraction of the way back to its rest slot, each
/// axis independently.
fn settle_toward_rest(p: &mut Particle, cfg: &Config) {
    if p.pos.x != p.rest.x {
        p.pos.x -= (p.pos.x - p.rest.x) / cfg.return_divisor;
    }
    if p.pos.y != p.rest.y {
        p.pos.y -= (p.pos.y - p.rest.y) / cfg.return_divisor;
    }
}
