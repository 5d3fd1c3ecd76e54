//! Scroll-triggered visibility: the state machine behind the wrapper that
//! fades sections in as they enter the viewport. The wasm component feeds
//! it intersection notifications and acts on the returned transition.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Animation {
    #[default]
    FadeInUp,
    FadeInLeft,
    FadeInRight,
    ScaleIn,
    RotateIn,
}

impl Animation {
    pub fn class(self) -> &'static str {
        match self {
            Self::FadeInUp => "fade-in-up",
            Self::FadeInLeft => "fade-in-left",
            Self::FadeInRight => "fade-in-right",
            Self::ScaleIn => "scale-in",
            Self::RotateIn => "rotate-in",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RevealConfig {
    pub animation: Animation,
    /// Fraction of the element that must be visible, in [0, 1].
    pub threshold: f64,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            animation: Animation::FadeInUp,
            threshold: 0.2,
            delay_ms: 0,
            duration_ms: 600,
            once: true,
        }
    }
}

/// What the component must do in response to an intersection change.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    /// Flip to visible after the configured delay. For a once-only wrapper
    /// the observer can be detached now.
    ScheduleShow,
    /// Drop the visible state immediately.
    Hide,
    None,
}

#[derive(Clone, Copy, Debug)]
pub struct Reveal {
    once: bool,
    visible: bool,
    triggered: bool,
}

impl Reveal {
    pub fn new(once: bool) -> Self {
        Self {
            once,
            visible: false,
            triggered: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn on_intersection(&mut self, intersecting: bool) -> Transition {
        if intersecting {
            if self.visible || (self.once && self.triggered) {
                return Transition::None;
            }
            self.triggered = true;
            Transition::ScheduleShow
        } else if !self.once && self.visible {
            self.visible = false;
            Transition::Hide
        } else {
            Transition::None
        }
    }

    /// Called once the entrance delay has elapsed.
    pub fn mark_visible(&mut self) {
        self.visible = true;
    }
}

/// Class list for the wrapper element; styling does the actual animating.
pub fn class_list(config: &RevealConfig, visible: bool) -> String {
    let mut classes = format!("animate-on-scroll {}", config.animation.class());
    if visible {
        classes.push_str(" visible");
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_schedules_a_show() {
        let mut reveal = Reveal::new(true);
        assert_eq!(reveal.on_intersection(true), Transition::ScheduleShow);
        assert!(!reveal.is_visible());
        reveal.mark_visible();
        assert!(reveal.is_visible());
    }

    #[test]
    fn once_only_never_reschedules_after_the_first_trigger() {
        let mut reveal = Reveal::new(true);
        assert_eq!(reveal.on_intersection(true), Transition::ScheduleShow);
        reveal.mark_visible();

        assert_eq!(reveal.on_intersection(false), Transition::None);
        assert_eq!(reveal.on_intersection(true), Transition::None);
        assert!(reveal.is_visible());
    }

    #[test]
    fn once_only_ignores_re_entry_even_before_the_delay_fires() {
        let mut reveal = Reveal::new(true);
        assert_eq!(reveal.on_intersection(true), Transition::ScheduleShow);
        // Leaves and re-enters while the delayed flip is still pending.
        assert_eq!(reveal.on_intersection(false), Transition::None);
        assert_eq!(reveal.on_intersection(true), Transition::None);
    }

    #[test]
    fn repeating_wrapper_hides_on_exit_and_retriggers() {
        let mut reveal = Reveal::new(false);
        assert_eq!(reveal.on_intersection(true), Transition::ScheduleShow);
        reveal.mark_visible();

        assert_eq!(reveal.on_intersection(false), Transition::Hide);
        assert!(!reveal.is_visible());
        assert_eq!(reveal.on_intersection(true), Transition::ScheduleShow);
    }

    #[test]
    fn exit_before_becoming_visible_is_a_no_op() {
        let mut reveal = Reveal::new(false);
        assert_eq!(reveal.on_intersection(false), Transition::None);
    }

    #[test]
    fn class_list_toggles_the_visible_marker() {
        let config = RevealConfig {
            animation: Animation::ScaleIn,
            ..RevealConfig::default()
        };
        assert_eq!(class_list(&config, false), "animate-on-scroll scale-in");
        assert_eq!(class_list(&config, true), "animate-on-scroll scale-in visible");
    }
}
