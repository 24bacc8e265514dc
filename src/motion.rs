//! Enter animations expressed as CSS.
//!
//! A [`Motion`] pairs a starting [`Pose`] with a target pose. The view renders
//! the starting pose until the trigger fires, then swaps in the target along
//! with a `transition` so the browser tweens between them. Every trigger fires
//! once per mount.

pub const FADE_UP_MS: u32 = 600;
pub const BAR_FILL_MS: u32 = 800;
pub const STAGGER_MS: u32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    pub opacity: Option<f32>,
    pub y_px: Option<f32>,
    pub width_pct: Option<f32>,
}

impl Pose {
    fn css(&self) -> String {
        let mut parts = Vec::new();
        if let Some(o) = self.opacity {
            parts.push(format!("opacity: {o}"));
        }
        if let Some(y) = self.y_px {
            parts.push(format!("transform: translateY({y}px)"));
        }
        if let Some(w) = self.width_pct {
            parts.push(format!("width: {w}%"));
        }
        parts.join("; ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fires as soon as the element is mounted.
    Mount,
    /// Fires the first time the element scrolls into view.
    InView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub target: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub trigger: Trigger,
}

impl Motion {
    /// Fade in while rising 16px, as used by the hero heading.
    pub fn fade_up(trigger: Trigger) -> Self {
        Self::rise(16.0, trigger)
    }

    pub fn rise(offset_px: f32, trigger: Trigger) -> Self {
        Self {
            initial: Pose {
                opacity: Some(0.0),
                y_px: Some(offset_px),
                width_pct: None,
            },
            target: Pose {
                opacity: Some(1.0),
                y_px: Some(0.0),
                width_pct: None,
            },
            duration_ms: FADE_UP_MS,
            delay_ms: 0,
            trigger,
        }
    }

    /// Fade in only, no movement.
    pub fn fade_in() -> Self {
        Self {
            initial: Pose {
                opacity: Some(0.0),
                ..Pose::default()
            },
            target: Pose {
                opacity: Some(1.0),
                ..Pose::default()
            },
            duration_ms: FADE_UP_MS,
            delay_ms: 0,
            trigger: Trigger::Mount,
        }
    }

    /// Grow a bar from empty to `pct` of its track once it's in view.
    pub fn grow_width(pct: i32) -> Self {
        Self {
            initial: Pose {
                width_pct: Some(0.0),
                ..Pose::default()
            },
            target: Pose {
                width_pct: Some(pct as f32),
                ..Pose::default()
            },
            duration_ms: BAR_FILL_MS,
            delay_ms: 0,
            trigger: Trigger::InView,
        }
    }

    /// Delay the animation by the item's position in a list.
    pub fn staggered(self, index: usize) -> Self {
        Self {
            delay_ms: index as u32 * STAGGER_MS,
            ..self
        }
    }

    /// Inline style for the element. Before the trigger fires this is the bare
    /// starting pose; afterwards it is the target pose plus the transition.
    pub fn style(&self, revealed: bool) -> String {
        if revealed {
            format!(
                "{}; transition: all {}ms ease-out {}ms",
                self.target.css(),
                self.duration_ms,
                self.delay_ms
            )
        } else {
            self.initial.css()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_up_style() {
        let m = Motion::fade_up(Trigger::Mount);
        assert_eq!(m.style(false), "opacity: 0; transform: translateY(16px)");
        assert_eq!(
            m.style(true),
            "opacity: 1; transform: translateY(0px); transition: all 600ms ease-out 0ms"
        );
    }

    #[test]
    fn test_bar_fill_matches_level() {
        for level in [0, 45, 88, 100] {
            let m = Motion::grow_width(level);
            assert_eq!(m.trigger, Trigger::InView);
            assert_eq!(m.style(false), "width: 0%");
            assert!(m.style(true).starts_with(&format!("width: {level}%;")));
        }
    }

    #[test]
    fn test_stagger() {
        let m = Motion::rise(20.0, Trigger::InView).staggered(3);
        assert_eq!(m.delay_ms, 300);
        assert!(m.style(true).ends_with("ease-out 300ms"));
        assert_eq!(Motion::fade_in().style(false), "opacity: 0");
    }
}
