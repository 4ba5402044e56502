use glam::Vec2;

/// Single-slot record of the most recent pointer sample.
///
/// The slot starts absent — "the pointer has not reported yet" is a valid
/// state, not an error. Every new sample overwrites the previous one, so a
/// frame only ever observes the newest sample recorded before it; samples
/// arriving between two frames are dropped, never queued.
#[derive(Clone, Copy, Debug, Default)]
pub struct Attractor {
    pos: Option<Vec2>,
}

impl Attractor {
    pub fn new() -> Self {
        Self { pos: None }
    }

    pub fn record(&mut self, pos: Vec2) {
        self.pos = Some(pos);
    }

    pub fn position(&self) -> Option<Vec2> {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent() {
        assert_eq!(Attractor::new().position(), None);
    }

    #[test]
    fn record_overwrites_with_the_latest_sample() {
        let mut a = Attractor::new();

        a.record(Vec2::new(1.0, 2.0));
        a.record(Vec2::new(3.0, 4.0));
        a.record(Vec2::new(-5.0, 0.5));

        assert_eq!(a.position(), Some(Vec2::new(-5.0, 0.5)));
    }
}
