//! Star descriptor generation for the drifting-starfield backdrops.
//!
//! Every section of the page owns its own field of stars. A field is
//! randomized exactly once, when its component mounts, from an injectable
//! `fastrand::Rng` so tests can pin the stream.

use fastrand::Rng;

/// Scales the configured star count.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Density {
    Low,
    Medium,
    High,
}

impl Density {
    fn multiplier(self) -> f64 {
        match self {
            Self::Low => 0.5,
            Self::Medium => 1.0,
            Self::High => 2.0,
        }
    }
}

/// Selects the drift-animation duration range, in seconds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Speed {
    Slow,
    Medium,
    Fast,
}

impl Speed {
    fn duration_range(self) -> (f64, f64) {
        match self {
            Self::Slow => (80.0, 120.0),
            Self::Medium => (40.0, 80.0),
            Self::Fast => (20.0, 40.0),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorScheme {
    White,
    Blue,
    Purple,
    Mixed,
}

/// One of four CSS keyframe tracks a star can follow.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DriftPath {
    Up,
    Right,
    Left,
    Diagonal,
}

impl DriftPath {
    const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Left, Self::Diagonal];

    pub fn keyframes(self) -> &'static str {
        match self {
            Self::Up => "drift-up",
            Self::Right => "drift-right",
            Self::Left => "drift-left",
            Self::Diagonal => "drift-diagonal",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StarfieldConfig {
    pub count: usize,
    pub density: Density,
    pub speed: Speed,
    pub color_scheme: ColorScheme,
    pub with_nebula: bool,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 50,
            density: Density::Medium,
            speed: Speed::Medium,
            color_scheme: ColorScheme::White,
            with_nebula: false,
        }
    }
}

impl StarfieldConfig {
    /// Effective number of stars after the density multiplier, floored.
    pub fn effective_count(&self) -> usize {
        (self.count as f64 * self.density.multiplier()).floor() as usize
    }
}

/// A fully randomized star, ready to be rendered as an inline style.
#[derive(Clone, PartialEq, Debug)]
pub struct Star {
    pub top_pct: f64,
    pub left_pct: f64,
    pub size_px: f64,
    pub opacity: f64,
    pub color: &'static str,
    pub glow: String,
    pub drift: DriftPath,
    pub drift_duration_s: f64,
    pub drift_delay_s: f64,
    pub twinkle_duration_s: f64,
    pub large: bool,
}

impl Star {
    pub fn style(&self) -> String {
        format!(
            "top: {:.3}%; left: {:.3}%; width: {:.2}px; height: {:.2}px; \
             opacity: {:.3}; background-color: {}; box-shadow: {}; \
             animation: {} {:.1}s linear infinite {:.1}s, twinkle {:.2}s ease-in-out infinite;",
            self.top_pct,
            self.left_pct,
            self.size_px,
            self.size_px,
            self.opacity,
            self.color,
            self.glow,
            self.drift.keyframes(),
            self.drift_duration_s,
            self.drift_delay_s,
            self.twinkle_duration_s,
        )
    }
}

const LARGE_STAR_CHANCE: f64 = 0.2;
/// Drift delay is drawn from (-80, 0] so every star starts mid-path.
const MAX_START_DELAY_S: f64 = 80.0;

fn star_color(scheme: ColorScheme, large: bool, rng: &mut Rng) -> &'static str {
    match scheme {
        ColorScheme::Blue => {
            if large {
                "#e0f2ff"
            } else {
                "#a0d8ff"
            }
        }
        ColorScheme::Purple => {
            if large {
                "#f0e6ff"
            } else {
                "#d8b4ff"
            }
        }
        ColorScheme::Mixed => {
            const PALETTE: [&str; 4] = ["#ffffff", "#e0f2ff", "#f0e6ff", "#ffe6f0"];
            PALETTE[rng.usize(..PALETTE.len())]
        }
        ColorScheme::White => {
            if large {
                "#f0f9ff"
            } else {
                "#ffffff"
            }
        }
    }
}

fn star_glow(scheme: ColorScheme, large: bool, rng: &mut Rng) -> String {
    let radius = if large { 8 } else { 4 };
    let intensity = if large { 0.8 } else { 0.5 };
    let tint = match scheme {
        ColorScheme::Blue => format!("rgba(59, 130, 246, {intensity})"),
        ColorScheme::Purple => format!("rgba(139, 92, 246, {intensity})"),
        ColorScheme::Mixed => {
            const CHANNELS: [&str; 4] = [
                "255, 255, 255",
                "59, 130, 246",
                "139, 92, 246",
                "236, 72, 153",
            ];
            format!("rgba({}, {intensity})", CHANNELS[rng.usize(..CHANNELS.len())])
        }
        ColorScheme::White => format!("rgba(255, 255, 255, {intensity})"),
    };
    format!("0 0 {radius}px {tint}")
}

fn uniform(rng: &mut Rng, min: f64, max: f64) -> f64 {
    min + rng.f64() * (max - min)
}

/// Generates the full star list for one field. Positions land in [0, 100]%
/// on both axes and opacities in [0.1, 1.0); all values are finite.
pub fn generate(config: &StarfieldConfig, rng: &mut Rng) -> Vec<Star> {
    (0..config.effective_count())
        .map(|_| {
            let (min_s, max_s) = config.speed.duration_range();
            let drift_duration_s = uniform(rng, min_s, max_s);
            let drift_delay_s = -rng.f64() * MAX_START_DELAY_S;
            let large = rng.f64() < LARGE_STAR_CHANCE;
            let size_px = if large {
                uniform(rng, 2.0, 5.0)
            } else {
                uniform(rng, 1.0, 3.0)
            };

            Star {
                top_pct: rng.f64() * 100.0,
                left_pct: rng.f64() * 100.0,
                size_px,
                opacity: uniform(rng, 0.1, 1.0),
                color: star_color(config.color_scheme, large, rng),
                glow: star_glow(config.color_scheme, large, rng),
                drift: DriftPath::ALL[rng.usize(..DriftPath::ALL.len())],
                drift_duration_s,
                drift_delay_s,
                twinkle_duration_s: uniform(rng, 1.0, 5.0),
                large,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Rng {
        Rng::with_seed(0x5747_1e1d)
    }

    #[test]
    fn density_scales_the_configured_count() {
        let mut config = StarfieldConfig {
            count: 50,
            ..StarfieldConfig::default()
        };

        config.density = Density::High;
        assert_eq!(generate(&config, &mut seeded()).len(), 100);

        config.density = Density::Medium;
        assert_eq!(generate(&config, &mut seeded()).len(), 50);

        config.density = Density::Low;
        assert_eq!(generate(&config, &mut seeded()).len(), 25);
    }

    #[test]
    fn generated_values_stay_in_their_documented_ranges() {
        let config = StarfieldConfig {
            count: 200,
            density: Density::High,
            speed: Speed::Fast,
            color_scheme: ColorScheme::Mixed,
            with_nebula: true,
        };
        let stars = generate(&config, &mut seeded());
        assert_eq!(stars.len(), 400);

        for star in &stars {
            assert!((0.0..=100.0).contains(&star.top_pct));
            assert!((0.0..=100.0).contains(&star.left_pct));
            assert!((0.1..1.0).contains(&star.opacity));
            assert!((20.0..40.0).contains(&star.drift_duration_s));
            assert!((-80.0..=0.0).contains(&star.drift_delay_s));
            assert!(star.size_px.is_finite() && star.size_px >= 1.0);
            assert!(star.twinkle_duration_s.is_finite());
        }
    }

    #[test]
    fn speed_tier_selects_the_duration_range() {
        let mut config = StarfieldConfig {
            count: 100,
            ..StarfieldConfig::default()
        };

        config.speed = Speed::Slow;
        for star in generate(&config, &mut seeded()) {
            assert!((80.0..120.0).contains(&star.drift_duration_s));
        }

        config.speed = Speed::Medium;
        for star in generate(&config, &mut seeded()) {
            assert!((40.0..80.0).contains(&star.drift_duration_s));
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_field() {
        let config = StarfieldConfig::default();
        let first = generate(&config, &mut seeded());
        let second = generate(&config, &mut seeded());
        assert_eq!(first, second);
    }

    #[test]
    fn large_stars_are_bigger_than_small_ones_at_the_boundary() {
        let config = StarfieldConfig {
            count: 500,
            ..StarfieldConfig::default()
        };
        let stars = generate(&config, &mut seeded());
        assert!(stars.iter().any(|s| s.large));
        for star in &stars {
            if star.large {
                assert!((2.0..5.0).contains(&star.size_px));
            } else {
                assert!((1.0..3.0).contains(&star.size_px));
            }
        }
    }

    #[test]
    fn blue_scheme_uses_blue_palette() {
        let config = StarfieldConfig {
            count: 50,
            color_scheme: ColorScheme::Blue,
            ..StarfieldConfig::default()
        };
        for star in generate(&config, &mut seeded()) {
            assert!(star.color == "#e0f2ff" || star.color == "#a0d8ff");
            assert!(star.glow.contains("rgba(59, 130, 246"));
        }
    }

    #[test]
    fn style_string_carries_the_drift_keyframes() {
        let config = StarfieldConfig::default();
        let stars = generate(&config, &mut seeded());
        let star = stars.first().expect("non-empty field");
        let style = star.style();
        assert!(style.contains(star.drift.keyframes()));
        assert!(style.contains("twinkle"));
    }
}
