//! Magnetic-button displacement: the element leans toward the pointer only
//! while the pointer is within the activation radius of its center.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MagneticConfig {
    pub activation_distance: f64,
    pub strength: f64,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            activation_distance: 50.0,
            strength: 0.3,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Displacement {
    pub x: f64,
    pub y: f64,
}

impl Displacement {
    pub fn translate(&self) -> String {
        format!("transform: translate({:.2}px, {:.2}px);", self.x, self.y)
    }
}

pub fn displacement(config: &MagneticConfig, pointer: (f64, f64), center: (f64, f64)) -> Displacement {
    let dx = pointer.0 - center.0;
    let dy = pointer.1 - center.1;
    if dx.hypot(dy) < config.activation_distance {
        Displacement {
            x: dx * config.strength,
            y: dy * config.strength,
        }
    } else {
        Displacement::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_the_radius_the_element_leans_toward_the_pointer() {
        let config = MagneticConfig::default();
        let d = displacement(&config, (110.0, 120.0), (100.0, 100.0));
        assert!((d.x - 3.0).abs() < 1e-9);
        assert!((d.y - 6.0).abs() < 1e-9);
    }

    #[test]
    fn outside_the_radius_displacement_is_zero() {
        let config = MagneticConfig::default();
        let d = displacement(&config, (200.0, 100.0), (100.0, 100.0));
        assert_eq!(d, Displacement::default());
    }

    #[test]
    fn exactly_on_the_radius_counts_as_outside() {
        let config = MagneticConfig {
            activation_distance: 50.0,
            strength: 1.0,
        };
        let d = displacement(&config, (150.0, 100.0), (100.0, 100.0));
        assert_eq!(d, Displacement::default());
    }

    #[test]
    fn translate_style_renders_the_offsets() {
        let style = Displacement { x: 3.0, y: -6.0 }.translate();
        assert_eq!(style, "transform: translate(3.00px, -6.00px);");
    }
}
