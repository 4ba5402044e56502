/// Tuning constants for the black-hole effect.
///
/// All values are fixed at construction; nothing in the effect reads them
/// from the environment.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Side length of the bounding square, centered in the viewport.
    pub square_size: f32,
    /// Influence radius: particles farther than this ignore the attractor.
    pub max_distance: f32,
    /// Near-center threshold: below this the radial pull gives way to a
    /// fixed-magnitude spin.
    pub min_distance: f32,
    /// Peak radial force, reached at the attractor center.
    pub gravitational_pull: f32,
    /// Spiral-angle advance per unit force per frame.
    pub spiral_gain: f32,
    /// Displacement magnitude of the near-center spin.
    pub near_center_spin: f32,
    /// Per-axis settle divisor: each frame outside the influence radius a
    /// particle moves `1 / return_divisor` of the way back to rest.
    pub return_divisor: f32,
    /// Fixed per-character advance used by the layout.
    pub char_width: f32,
    /// Fixed per-line advance used by the layout.
    pub line_height: f32,
    /// First text baseline offset below the square's top edge.
    pub baseline_offset: f32,
    /// Glyph render size.
    pub font_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            square_size: 800.0,
            max_distance: 200.0,
            min_distance: 5.0,
            gravitational_pull: 2.0,
            spiral_gain: 0.05,
            near_center_spin: 2.0,
            return_divisor: 20.0,
            char_width: 11.0,
            line_height: 32.0,
            baseline_offset: 40.0,
            font_size: 18.0,
        }
    }
}
