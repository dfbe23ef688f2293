//! Declarative motion: a pose to start from, a pose to end at, and how to get there.
//!
//! Styles are rendered as inline CSS and the browser drives the interpolation.

use std::fmt::Write;

pub const REVEAL_DURATION: f64 = 0.8;
pub const HERO_DURATION: f64 = 1.0;
pub const BAR_DURATION: f64 = 1.5;
pub const STAGGER_STEP: f64 = 0.2;
pub const BAR_DELAY_OFFSET: f64 = 0.5;
pub const REVEAL_DISTANCE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

fn secs(v: f64) -> String {
    format!("{}s", (v * 1000.0).round() / 1000.0)
}

fn num(v: f64) -> String {
    format!("{}", (v * 1000.0).round() / 1000.0)
}

/// Delay for the `index`-th sibling so siblings reveal in sequence.
pub fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Adds the stagger for the `index`-th sibling to the current delay.
    pub fn staggered(self, index: usize) -> Self {
        let delay = self.delay + stagger_delay(index, STAGGER_STEP);
        self.delay(delay)
    }

    fn css(&self, property: &str) -> String {
        format!(
            "{property} {} {} {}",
            secs(self.duration),
            self.easing.css(),
            secs(self.delay)
        )
    }
}

/// The animatable visual properties of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Width as a percentage of the parent, if the width is animated.
    pub width: Option<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self::visible()
    }
}

impl Pose {
    pub fn visible() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            width: None,
        }
    }

    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::visible()
        }
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn width(mut self, percent: f64) -> Self {
        self.width = Some(percent);
        self
    }

    fn has_transform(&self) -> bool {
        self.x != 0.0 || self.y != 0.0 || self.scale != 1.0
    }

    pub fn css(&self) -> String {
        let mut out = format!("opacity: {};", num(self.opacity));
        if self.has_transform() {
            let _ = write!(
                out,
                " transform: translate({}px, {}px) scale({});",
                num(self.x),
                num(self.y),
                num(self.scale)
            );
        } else {
            out.push_str(" transform: none;");
        }
        if let Some(w) = self.width {
            let _ = write!(out, " width: {}%;", num(w));
        }
        out
    }
}

/// A fire-once transition from `initial` to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub target: Pose,
    pub transition: Transition,
}

impl Motion {
    pub fn new(initial: Pose, target: Pose, transition: Transition) -> Self {
        Self {
            initial,
            target,
            transition,
        }
    }

    /// Fades in while rising `distance` pixels.
    pub fn fade_up(distance: f64) -> Self {
        Self::new(
            Pose::hidden().y(distance),
            Pose::visible(),
            Transition::new(REVEAL_DURATION),
        )
    }

    /// Fades in while sliding horizontally from `from_x`.
    pub fn slide_in(from_x: f64) -> Self {
        Self::new(
            Pose::hidden().x(from_x),
            Pose::visible(),
            Transition::new(REVEAL_DURATION),
        )
    }

    /// Grows a progress bar from empty to `percent`.
    pub fn bar(percent: u8) -> Self {
        Self::new(
            Pose::visible().width(0.0),
            Pose::visible().width(percent as f64),
            Transition::new(BAR_DURATION).delay(BAR_DELAY_OFFSET),
        )
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.transition = self.transition.delay(delay);
        self
    }

    pub fn staggered(mut self, index: usize) -> Self {
        self.transition = self.transition.staggered(index);
        self
    }

    fn animated_properties(&self) -> Vec<&'static str> {
        let (a, b) = (&self.initial, &self.target);
        let mut props = Vec::new();
        if a.opacity != b.opacity {
            props.push("opacity");
        }
        if a.x != b.x || a.y != b.y || a.scale != b.scale {
            props.push("transform");
        }
        if a.width != b.width {
            props.push("width");
        }
        props
    }

    /// Inline style for the element. Untriggered elements sit statically at the initial
    /// pose with no transition attached.
    pub fn style(&self, triggered: bool) -> String {
        if !triggered {
            return self.initial.css();
        }
        let transitions = self
            .animated_properties()
            .into_iter()
            .map(|p| self.transition.css(p))
            .collect::<Vec<_>>();
        if transitions.is_empty() {
            return self.target.css();
        }
        format!("{} transition: {};", self.target.css(), transitions.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopProperty {
    TranslateY,
    Scale,
}

impl LoopProperty {
    fn css(&self, v: f64) -> String {
        match self {
            LoopProperty::TranslateY => format!("translateY({}px)", num(v)),
            LoopProperty::Scale => format!("scale({})", num(v)),
        }
    }
}

/// A decorative animation that repeats forever from mount, independent of reveal state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLoop {
    pub name: &'static str,
    pub property: LoopProperty,
    pub keyframes: &'static [f64],
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

pub const PARTICLE_DRIFT: AmbientLoop = AmbientLoop {
    name: "particle-drift",
    property: LoopProperty::TranslateY,
    keyframes: &[0.0, -20.0, 0.0],
    duration: 6.0,
    delay: 0.0,
    easing: Easing::EaseInOut,
};

pub const ACCENT_PULSE: AmbientLoop = AmbientLoop {
    name: "accent-pulse",
    property: LoopProperty::Scale,
    keyframes: &[1.0, 1.2, 1.0],
    duration: 4.0,
    delay: 0.0,
    easing: Easing::EaseInOut,
};

pub const ACCENT_FLOAT: AmbientLoop = AmbientLoop {
    name: "accent-float",
    property: LoopProperty::TranslateY,
    keyframes: &[0.0, -20.0, 0.0],
    duration: 6.0,
    delay: 0.0,
    easing: Easing::EaseInOut,
};

pub const SCROLL_CUE: AmbientLoop = AmbientLoop {
    name: "scroll-cue",
    property: LoopProperty::TranslateY,
    keyframes: &[0.0, 10.0, 0.0],
    duration: 2.0,
    delay: 0.0,
    easing: Easing::EaseInOut,
};

pub const AMBIENT_LOOPS: [AmbientLoop; 4] = [PARTICLE_DRIFT, ACCENT_PULSE, ACCENT_FLOAT, SCROLL_CUE];

impl AmbientLoop {
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn keyframes_css(&self) -> String {
        let segments = self.keyframes.len().saturating_sub(1).max(1);
        let mut out = format!("@keyframes {} {{", self.name);
        for (i, v) in self.keyframes.iter().enumerate() {
            let pct = (i as f64 / segments as f64) * 100.0;
            let _ = write!(
                out,
                " {}% {{ transform: {}; }}",
                num(pct),
                self.property.css(*v)
            );
        }
        out.push_str(" }");
        out
    }

    pub fn style(&self) -> String {
        format!(
            "animation: {} {} {} {} infinite;",
            self.name,
            secs(self.duration),
            self.easing.css(),
            secs(self.delay)
        )
    }
}

/// Keyframe rules for every ambient loop used on the page.
pub fn ambient_stylesheet() -> String {
    AMBIENT_LOOPS
        .iter()
        .map(|l| l.keyframes_css())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_strictly_increasing() {
        let delays = (0..6)
            .map(|i| stagger_delay(i, STAGGER_STEP))
            .collect::<Vec<_>>();
        assert_eq!(delays[0], 0.0);
        for (i, d) in delays.iter().enumerate() {
            assert_eq!(*d, i as f64 * STAGGER_STEP);
        }
        assert!(delays.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_staggered_transition_adds_to_base_delay() {
        let m = Motion::bar(60).staggered(2);
        assert!((m.transition.delay - 0.9).abs() < 1e-9);
        assert!(m.style(true).ends_with("transition: width 1.5s ease-out 0.9s;"));
    }

    #[test]
    fn test_untriggered_motion_is_static_initial() {
        let m = Motion::fade_up(REVEAL_DISTANCE);
        let style = m.style(false);
        assert_eq!(
            style,
            "opacity: 0; transform: translate(0px, 50px) scale(1);"
        );
        assert!(!style.contains("transition"));
        assert_eq!(style, m.initial.css());
    }

    #[test]
    fn test_triggered_motion_targets_final_pose() {
        let m = Motion::slide_in(-REVEAL_DISTANCE).delay(0.2);
        assert_eq!(
            m.style(true),
            "opacity: 1; transform: none; transition: opacity 0.8s ease-out 0.2s, transform 0.8s ease-out 0.2s;"
        );
    }

    #[test]
    fn test_motion_without_changes_has_no_transition() {
        let m = Motion::new(Pose::visible(), Pose::visible(), Transition::new(1.0));
        assert_eq!(m.style(true), "opacity: 1; transform: none;");
    }

    #[test]
    fn test_skill_bar_width_matches_level() {
        for level in [0u8, 37, 95, 100] {
            let m = Motion::bar(level);
            assert!(m.style(false).ends_with("width: 0%;"));
            assert!(m.style(true).contains(&format!("width: {level}%;")));
        }
        assert_eq!(
            Motion::bar(80).staggered(1).style(true),
            "opacity: 1; transform: none; width: 80%; transition: width 1.5s ease-out 0.7s;"
        );
    }

    #[test]
    fn test_ambient_style_is_infinite() {
        assert_eq!(
            PARTICLE_DRIFT.with_delay(4.0).style(),
            "animation: particle-drift 6s ease-in-out 4s infinite;"
        );
        assert!(AMBIENT_LOOPS.iter().all(|l| l.style().ends_with("infinite;")));
    }

    #[test]
    fn test_keyframes_css() {
        assert_eq!(
            ACCENT_PULSE.keyframes_css(),
            "@keyframes accent-pulse { 0% { transform: scale(1); } 50% { transform: scale(1.2); } 100% { transform: scale(1); } }"
        );
        let sheet = ambient_stylesheet();
        for l in AMBIENT_LOOPS {
            assert!(sheet.contains(&format!("@keyframes {} {{", l.name)));
        }
    }
}
