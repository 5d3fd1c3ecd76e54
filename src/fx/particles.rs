//! Declarative configuration for the third-party particle engine. The engine
//! itself is an opaque JS global; this module only builds the options
//! objects for the two layers the page loads: the drifting star canvas and
//! the shooting-star canvas.

use serde::Serialize;

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct ParticlesOptions {
    pub particles: ParticleSettings,
    pub interactivity: Interactivity,
    pub retina_detect: bool,
    #[serde(rename = "fullScreen")]
    pub full_screen: FullScreen,
    pub background: Background,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct ParticleSettings {
    pub number: Number,
    pub color: Color,
    pub shape: Shape,
    pub opacity: Range,
    pub size: Range,
    pub line_linked: Toggle,
    #[serde(rename = "move")]
    pub movement: Movement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twinkle: Option<Twinkle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail: Option<Trail>,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Number {
    pub value: u32,
    pub density: DensityArea,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct DensityArea {
    pub enable: bool,
    pub value_area: f64,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Color {
    pub value: Vec<&'static str>,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Range {
    pub value: f64,
    pub random: bool,
    pub anim: RangeAnimation,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct RangeAnimation {
    pub enable: bool,
    pub speed: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_min: Option<f64>,
    pub sync: bool,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Toggle {
    pub enable: bool,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Movement {
    pub enable: bool,
    pub speed: f64,
    pub direction: &'static str,
    pub random: bool,
    pub straight: bool,
    pub out_mode: &'static str,
    pub bounce: bool,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Twinkle {
    pub particles: TwinkleLayer,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct TwinkleLayer {
    pub enable: bool,
    pub frequency: f64,
    pub opacity: f64,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Trail {
    pub enable: bool,
    pub length: u32,
    #[serde(rename = "fillColor")]
    pub fill_color: &'static str,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Interactivity {
    pub detect_on: &'static str,
    pub events: Events,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modes: Option<Modes>,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Events {
    pub onhover: EventMode,
    pub onclick: EventMode,
    pub resize: bool,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct EventMode {
    pub enable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Modes {
    pub connect: Connect,
    pub push: Push,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Connect {
    pub distance: f64,
    pub links: Links,
    pub radius: f64,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Links {
    pub opacity: f64,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Push {
    pub quantity: u32,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct FullScreen {
    pub enable: bool,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Background {
    pub color: &'static str,
}

/// Dense, slow, upward-drifting star layer with constellation-style
/// connect-on-hover and push-on-click.
pub fn star_layer() -> ParticlesOptions {
    ParticlesOptions {
        particles: ParticleSettings {
            number: Number {
                value: 400,
                density: DensityArea {
                    enable: true,
                    value_area: 1200.0,
                },
            },
            color: Color {
                value: vec!["#ffffff", "#f8f8ff", "#e0e0ff", "#d0d0ff", "#a0a0ff", "#ffffff"],
            },
            shape: Shape { kind: "circle" },
            opacity: Range {
                value: 1.0,
                random: true,
                anim: RangeAnimation {
                    enable: true,
                    speed: 0.3,
                    opacity_min: Some(0.4),
                    size_min: None,
                    sync: false,
                },
            },
            size: Range {
                value: 3.0,
                random: true,
                anim: RangeAnimation {
                    enable: true,
                    speed: 0.5,
                    opacity_min: None,
                    size_min: Some(0.5),
                    sync: false,
                },
            },
            line_linked: Toggle { enable: false },
            movement: Movement {
                enable: true,
                speed: 0.5,
                direction: "top",
                random: true,
                straight: false,
                out_mode: "out",
                bounce: false,
            },
            twinkle: Some(Twinkle {
                particles: TwinkleLayer {
                    enable: true,
                    frequency: 0.1,
                    opacity: 1.0,
                },
            }),
            trail: None,
        },
        interactivity: Interactivity {
            detect_on: "canvas",
            events: Events {
                onhover: EventMode {
                    enable: true,
                    mode: Some("connect"),
                },
                onclick: EventMode {
                    enable: true,
                    mode: Some("push"),
                },
                resize: true,
            },
            modes: Some(Modes {
                connect: Connect {
                    distance: 150.0,
                    links: Links { opacity: 0.3 },
                    radius: 120.0,
                },
                push: Push { quantity: 5 },
            }),
        },
        retina_detect: true,
        full_screen: FullScreen { enable: false },
        background: Background { color: "#000000" },
    }
}

/// Sparse, fast, straight bottom-right streaks with long trails.
pub fn shooting_star_layer() -> ParticlesOptions {
    ParticlesOptions {
        particles: ParticleSettings {
            number: Number {
                value: 20,
                density: DensityArea {
                    enable: true,
                    value_area: 1800.0,
                },
            },
            color: Color {
                value: vec!["#ffffff", "#f8faff", "#e0f0ff", "#d0e0ff"],
            },
            shape: Shape { kind: "circle" },
            opacity: Range {
                value: 1.0,
                random: true,
                anim: RangeAnimation {
                    enable: true,
                    speed: 1.0,
                    opacity_min: Some(0.4),
                    size_min: None,
                    sync: false,
                },
            },
            size: Range {
                value: 3.0,
                random: true,
                anim: RangeAnimation {
                    enable: true,
                    speed: 4.0,
                    opacity_min: None,
                    size_min: Some(1.0),
                    sync: false,
                },
            },
            line_linked: Toggle { enable: false },
            movement: Movement {
                enable: true,
                speed: 25.0,
                direction: "bottom-right",
                random: false,
                straight: true,
                out_mode: "out",
                bounce: false,
            },
            twinkle: None,
            trail: Some(Trail {
                enable: true,
                length: 30,
                fill_color: "#ffffff",
            }),
        },
        interactivity: Interactivity {
            detect_on: "canvas",
            events: Events {
                onhover: EventMode {
                    enable: false,
                    mode: None,
                },
                onclick: EventMode {
                    enable: false,
                    mode: None,
                },
                resize: true,
            },
            modes: None,
        },
        retina_detect: true,
        full_screen: FullScreen { enable: false },
        background: Background {
            color: "transparent",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_layer_serializes_with_engine_key_names() {
        let value = serde_json::to_value(star_layer()).expect("serializable config");

        assert_eq!(value["particles"]["number"]["value"], 400);
        assert_eq!(value["particles"]["number"]["density"]["value_area"], 1200.0);
        assert_eq!(value["particles"]["move"]["direction"], "top");
        assert_eq!(value["particles"]["move"]["out_mode"], "out");
        assert_eq!(value["particles"]["shape"]["type"], "circle");
        assert_eq!(value["particles"]["twinkle"]["particles"]["frequency"], 0.1);
        assert_eq!(value["interactivity"]["events"]["onhover"]["mode"], "connect");
        assert_eq!(value["interactivity"]["modes"]["connect"]["radius"], 120.0);
        assert_eq!(value["interactivity"]["modes"]["push"]["quantity"], 5);
        assert_eq!(value["fullScreen"]["enable"], false);
        assert_eq!(value["retina_detect"], true);
    }

    #[test]
    fn shooting_star_layer_streaks_diagonally_with_a_trail() {
        let value = serde_json::to_value(shooting_star_layer()).expect("serializable config");

        assert_eq!(value["particles"]["number"]["value"], 20);
        assert_eq!(value["particles"]["move"]["direction"], "bottom-right");
        assert_eq!(value["particles"]["move"]["straight"], true);
        assert_eq!(value["particles"]["move"]["speed"], 25.0);
        assert_eq!(value["particles"]["trail"]["length"], 30);
        assert_eq!(value["particles"]["trail"]["fillColor"], "#ffffff");
        assert_eq!(value["background"]["color"], "transparent");
    }

    #[test]
    fn unused_knobs_are_omitted_from_the_payload() {
        let value = serde_json::to_value(shooting_star_layer()).expect("serializable config");
        assert!(value["particles"]["twinkle"].is_null());
        assert!(value["interactivity"]["modes"].is_null());
        assert!(value["interactivity"]["events"]["onhover"]["mode"].is_null());
    }
}
