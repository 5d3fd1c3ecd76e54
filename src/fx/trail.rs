//! Cursor-trail history: a bounded queue of recent pointer positions, each
//! fading a little every animation frame until it is evicted.

/// Multiplier applied to every point's opacity once per frame.
const DECAY: f64 = 0.95;
/// Points at or below this opacity are dropped.
const EVICTION_THRESHOLD: f64 = 0.01;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

/// Paint instruction for one frame: a circle at (x, y).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TrailDot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
}

pub struct Trail {
    points: Vec<TrailPoint>,
    capacity: usize,
    base_radius: f64,
}

impl Trail {
    pub fn new(capacity: usize, base_radius: f64) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
            base_radius,
        }
    }

    /// Pushes a fresh point to the front and truncates to capacity.
    pub fn record(&mut self, x: f64, y: f64) {
        self.points.insert(0, TrailPoint { x, y, opacity: 1.0 });
        self.points.truncate(self.capacity);
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    /// Advances one frame: returns the dots to paint (newest first, earlier
    /// points larger and more opaque), then decays every point and evicts
    /// the ones that have faded out.
    pub fn step(&mut self) -> Vec<TrailDot> {
        let capacity = self.capacity as f64;
        let dots = self
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let falloff = 1.0 - index as f64 / capacity;
                TrailDot {
                    x: point.x,
                    y: point.y,
                    radius: self.base_radius * falloff,
                    opacity: falloff * point.opacity,
                }
            })
            .collect();

        for point in &mut self.points {
            point.opacity *= DECAY;
        }
        self.points.retain(|point| point.opacity > EVICTION_THRESHOLD);

        dots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_is_truncated_to_capacity_newest_first() {
        let mut trail = Trail::new(20, 6.0);
        for i in 0..25 {
            trail.record(i as f64, i as f64);
        }
        assert_eq!(trail.points().len(), 20);
        assert_eq!(trail.points()[0].x, 24.0);
        assert_eq!(trail.points()[19].x, 5.0);
    }

    #[test]
    fn opacity_decays_strictly_every_frame_until_eviction() {
        let mut trail = Trail::new(5, 4.0);
        trail.record(10.0, 10.0);

        let mut previous = 1.0;
        let mut frames = 0;
        while !trail.points().is_empty() {
            let current = trail.points()[0].opacity;
            assert!(current <= previous);
            previous = current;
            trail.step();
            if let Some(point) = trail.points().first() {
                assert!(point.opacity < current);
            }
            frames += 1;
            assert!(frames < 200, "point should have been evicted by now");
        }
        // 0.95^n <= 0.01 first holds at n = 90.
        assert_eq!(frames, 90);
    }

    #[test]
    fn earlier_points_paint_larger_and_more_opaque() {
        let mut trail = Trail::new(4, 8.0);
        for i in 0..4 {
            trail.record(i as f64, 0.0);
        }
        let dots = trail.step();
        assert_eq!(dots.len(), 4);
        for pair in dots.windows(2) {
            assert!(pair[0].radius > pair[1].radius);
            assert!(pair[0].opacity > pair[1].opacity);
        }
        assert_eq!(dots[0].radius, 8.0);
        assert_eq!(dots[0].opacity, 1.0);
    }

    #[test]
    fn step_paints_before_decaying() {
        let mut trail = Trail::new(2, 2.0);
        trail.record(0.0, 0.0);
        let first = trail.step();
        assert_eq!(first[0].opacity, 1.0);
        let second = trail.step();
        assert!(second[0].opacity < 1.0);
    }

    #[test]
    fn empty_trail_steps_to_nothing() {
        let mut trail = Trail::new(10, 5.0);
        assert!(trail.step().is_empty());
    }
}
