//! Scroll-progress math for the circular indicator.

pub const RING_RADIUS: f64 = 18.0;

/// Fraction of the document scrolled, as a percentage clamped to [0, 100].
/// A document that fits the viewport reports 0 rather than dividing by zero.
pub fn percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn circumference(radius: f64) -> f64 {
    std::f64::consts::TAU * radius
}

/// Stroke dash offset for an SVG ring showing `percent` of progress.
pub fn dash_offset(percent: f64, radius: f64) -> f64 {
    let circumference = circumference(radius);
    circumference - percent / 100.0 * circumference
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_tracks_the_scrollable_span() {
        assert_eq!(percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(percent(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(percent(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn percent_is_clamped_and_finite() {
        assert_eq!(percent(5000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(percent(-10.0, 3000.0, 1000.0), 0.0);
        // Document shorter than the viewport: no scrollable span at all.
        assert_eq!(percent(0.0, 500.0, 1000.0), 0.0);
        assert!(percent(123.0, 1000.0, 1000.0).is_finite());
    }

    #[test]
    fn dash_offset_runs_from_full_circumference_to_zero() {
        let full = circumference(RING_RADIUS);
        assert_eq!(dash_offset(0.0, RING_RADIUS), full);
        assert!((dash_offset(50.0, RING_RADIUS) - full / 2.0).abs() < 1e-9);
        assert!(dash_offset(100.0, RING_RADIUS).abs() < 1e-9);
    }
}
