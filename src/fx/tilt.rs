//! 3D tilt: rotation angles derived from the pointer's position inside the
//! wrapped element's bounding box.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TiltConfig {
    pub max_tilt_deg: f64,
    pub perspective_px: f64,
    pub hover_scale: f64,
    pub transition_ms: u32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt_deg: 10.0,
            perspective_px: 1000.0,
            hover_scale: 1.02,
            transition_ms: 400,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
}

/// Rotation for a pointer at (`local_x`, `local_y`) inside a `width` x
/// `height` box. The pointer at center yields zero; the right edge at
/// vertical center yields `rotate_y = +max_tilt`.
pub fn rotation(config: &TiltConfig, local_x: f64, local_y: f64, width: f64, height: f64) -> Rotation {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    if half_w <= 0.0 || half_h <= 0.0 {
        return Rotation::default();
    }

    Rotation {
        x_deg: -((local_y - half_h) / half_h) * config.max_tilt_deg,
        y_deg: ((local_x - half_w) / half_w) * config.max_tilt_deg,
    }
}

/// Inline style for the tilted state.
pub fn tilt_style(config: &TiltConfig, rotation: Rotation) -> String {
    format!(
        "transform: perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg) scale({});\
         transition: transform {}ms cubic-bezier(0.03, 0.98, 0.52, 0.99);",
        config.perspective_px, rotation.x_deg, rotation.y_deg, config.hover_scale, config.transition_ms,
    )
}

/// Inline style for the rest state (pointer left the element).
pub fn rest_style(config: &TiltConfig) -> String {
    format!(
        "transform: perspective({:.0}px) rotateX(0deg) rotateY(0deg) scale(1);\
         transition: transform {}ms cubic-bezier(0.03, 0.98, 0.52, 0.99);",
        config.perspective_px, config.transition_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TiltConfig {
        TiltConfig::default()
    }

    #[test]
    fn pointer_at_center_yields_zero_rotation() {
        let r = rotation(&config(), 150.0, 100.0, 300.0, 200.0);
        assert_eq!(r, Rotation::default());
    }

    #[test]
    fn right_edge_at_vertical_center_yields_positive_max_tilt_y() {
        let r = rotation(&config(), 300.0, 100.0, 300.0, 200.0);
        assert_eq!(r.y_deg, 10.0);
        assert_eq!(r.x_deg, 0.0);
    }

    #[test]
    fn top_edge_tilts_x_positive() {
        let r = rotation(&config(), 150.0, 0.0, 300.0, 200.0);
        assert_eq!(r.x_deg, 10.0);
        assert_eq!(r.y_deg, 0.0);
    }

    #[test]
    fn degenerate_box_yields_rest_rotation() {
        let r = rotation(&config(), 5.0, 5.0, 0.0, 0.0);
        assert_eq!(r, Rotation::default());
    }

    #[test]
    fn styles_carry_perspective_and_scale() {
        let tilted = tilt_style(&config(), Rotation { x_deg: 1.0, y_deg: -2.0 });
        assert!(tilted.contains("perspective(1000px)"));
        assert!(tilted.contains("rotateY(-2.000deg)"));
        assert!(tilted.contains("scale(1.02)"));

        let rest = rest_style(&config());
        assert!(rest.contains("rotateX(0deg) rotateY(0deg) scale(1)"));
    }
}
