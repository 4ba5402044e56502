use glam::Vec2;

/// Axis-aligned square region that particles are kept inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub size: f32,
}

impl Bounds {
    pub fn new(min: Vec2, size: f32) -> Self {
        Self { min, size }
    }

    /// A square of the given side length centered in the viewport.
    pub fn centered_in(viewport: Vec2, size: f32) -> Self {
        Self {
            min: (viewport - Vec2::splat(size)) * 0.5,
            size,
        }
    }

    /// The corner opposite `min`.
    pub fn max(&self) -> Vec2 {
        self.min + Vec2::splat(self.size)
    }

    /// Restricts `p` to `[min, min + size]` on each axis independently.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_in_centers_the_square() {
        let b = Bounds::centered_in(Vec2::new(1000.0, 600.0), 800.0);
        assert_eq!(b.min, Vec2::new(100.0, -100.0));
        assert_eq!(b.max(), Vec2::new(900.0, 700.0));
    }

    #[test]
    fn clamp_leaves_interior_points_untouched() {
        let b = Bounds::new(Vec2::new(10.0, 10.0), 100.0);
        let p = Vec2::new(50.0, 60.0);
        assert_eq!(b.clamp(p), p);
    }

    #[test]
    fn clamp_restricts_each_axis_independently() {
        let b = Bounds::new(Vec2::new(10.0, 10.0), 100.0);

        assert_eq!(b.clamp(Vec2::new(-5.0, 50.0)), Vec2::new(10.0, 50.0));
        assert_eq!(b.clamp(Vec2::new(50.0, 500.0)), Vec2::new(50.0, 110.0));
        assert_eq!(b.clamp(Vec2::new(-5.0, 500.0)), Vec2::new(10.0, 110.0));
    }

    #[test]
    fn clamp_keeps_boundary_points() {
        let b = Bounds::new(Vec2::new(0.0, 0.0), 100.0);
        assert_eq!(b.clamp(Vec2::new(0.0, 100.0)), Vec2::new(0.0, 100.0));
    }

    #[test]
    fn clamp_is_idempotent() {
        let b = Bounds::new(Vec2::new(10.0, 10.0), 100.0);
        let points = [
            Vec2::new(-50.0, -50.0),
            Vec2::new(55.0, 55.0),
            Vec2::new(300.0, 0.0),
        ];
        for p in points {
            let once = b.clamp(p);
            assert_eq!(b.clamp(once), once);
        }
    }
}
