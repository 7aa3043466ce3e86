//! Navigation animations.

use crate::transition::{Edge, Transition};
use cgmath::Point2;
use std::time::Duration;

/// The z-index for content shown behind its counterpart.
pub const Z_INDEX_BEHIND: f64 = -1.;

/// The z-index for content shown in front of its counterpart.
pub const Z_INDEX_IN_FRONT: f64 = 1.;

/// The default duration used by the named curves.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(350);

/// A timing curve for an animated mutation. Driven by the host's animation engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationCurve {
    /// Whatever the host considers its default animation.
    Default,
    Linear(Duration),
    EaseIn(Duration),
    EaseOut(Duration),
    EaseInOut(Duration),
    /// A cubic bezier timing curve with two control points in unit space.
    TimingCurve {
        c1: Point2<f64>,
        c2: Point2<f64>,
        duration: Duration,
    },
    Spring {
        response: Duration,
        damping_fraction: f64,
    },
}

impl Default for AnimationCurve {
    fn default() -> Self {
        AnimationCurve::Default
    }
}

impl AnimationCurve {
    pub fn ease_out() -> AnimationCurve {
        AnimationCurve::EaseOut(DEFAULT_DURATION)
    }

    pub fn ease_in_out() -> AnimationCurve {
        AnimationCurve::EaseInOut(DEFAULT_DURATION)
    }

    /// The nominal duration, if the curve has one.
    pub fn duration(&self) -> Option<Duration> {
        match *self {
            AnimationCurve::Default => None,
            AnimationCurve::Linear(d)
            | AnimationCurve::EaseIn(d)
            | AnimationCurve::EaseOut(d)
            | AnimationCurve::EaseInOut(d) => Some(d),
            AnimationCurve::TimingCurve { duration, .. } => Some(duration),
            AnimationCurve::Spring { response, .. } => Some(response),
        }
    }
}

/// Transition information for switching between the default and the alternative content of a
/// slot.
///
/// The same animation is used in both directions: hiding with it plays the transitions in reverse,
/// because the default and alternative content swap roles.
#[derive(Debug, Clone)]
pub struct NavigationAnimation {
    /// The timing curve of the animated mutation.
    pub curve: AnimationCurve,
    /// The transition applied to the default content.
    pub default_transition: Transition,
    /// The transition applied to the alternative content.
    pub alternative_transition: Transition,
    /// The default content's z-index during the transition.
    pub default_z_index: f64,
    /// The alternative content's z-index during the transition.
    pub alternative_z_index: f64,
}

impl Default for NavigationAnimation {
    fn default() -> Self {
        NavigationAnimation {
            curve: AnimationCurve::Default,
            default_transition: Transition::Static,
            alternative_transition: Transition::Static,
            default_z_index: Z_INDEX_BEHIND,
            alternative_z_index: Z_INDEX_IN_FRONT,
        }
    }
}

impl NavigationAnimation {
    pub fn new(curve: AnimationCurve) -> Self {
        NavigationAnimation {
            curve,
            ..NavigationAnimation::default()
        }
    }

    pub fn with_default_transition(mut self, transition: Transition) -> Self {
        self.default_transition = transition;
        self
    }

    pub fn with_alternative_transition(mut self, transition: Transition) -> Self {
        self.alternative_transition = transition;
        self
    }

    pub fn with_z_indices(mut self, default_z_index: f64, alternative_z_index: f64) -> Self {
        self.default_z_index = default_z_index;
        self.alternative_z_index = alternative_z_index;
        self
    }

    /// A typical push.
    pub fn push() -> Self {
        NavigationAnimation::new(AnimationCurve::ease_out())
            .with_default_transition(Transition::Move(Edge::Leading))
            .with_alternative_transition(Transition::Move(Edge::Trailing))
    }

    /// A typical pop. Identical to [`push`](Self::push); the roles of the content invert.
    pub fn pop() -> Self {
        NavigationAnimation::push()
    }

    /// A typical modal presentation.
    pub fn present() -> Self {
        NavigationAnimation::new(AnimationCurve::ease_out())
            .with_default_transition(Transition::Static)
            .with_alternative_transition(Transition::Move(Edge::Bottom))
    }

    /// A typical modal dismissal.
    pub fn dismiss() -> Self {
        NavigationAnimation::present()
    }

    /// Blends the alternative content over the default content.
    pub fn fade() -> Self {
        NavigationAnimation::new(AnimationCurve::ease_in_out())
            .with_default_transition(Transition::Static)
            .with_alternative_transition(Transition::Opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orders_alternative_in_front() {
        let animation = NavigationAnimation::default();
        assert_eq!(animation.curve, AnimationCurve::Default);
        assert!(matches!(animation.default_transition, Transition::Static));
        assert!(matches!(animation.alternative_transition, Transition::Static));
        assert_eq!(animation.default_z_index, Z_INDEX_BEHIND);
        assert_eq!(animation.alternative_z_index, Z_INDEX_IN_FRONT);
        assert!(animation.default_z_index < animation.alternative_z_index);
    }

    #[test]
    fn builders_override_fields() {
        let animation = NavigationAnimation::new(AnimationCurve::Linear(Duration::from_secs(1)))
            .with_alternative_transition(Transition::Opacity)
            .with_z_indices(2., -2.);
        assert_eq!(animation.curve.duration(), Some(Duration::from_secs(1)));
        assert!(matches!(animation.alternative_transition, Transition::Opacity));
        assert_eq!(animation.default_z_index, 2.);
        assert_eq!(animation.alternative_z_index, -2.);
    }

    #[test]
    fn presets() {
        let push = NavigationAnimation::push();
        assert_eq!(push.curve, AnimationCurve::ease_out());
        assert!(matches!(push.default_transition, Transition::Move(Edge::Leading)));
        assert!(matches!(push.alternative_transition, Transition::Move(Edge::Trailing)));

        let present = NavigationAnimation::present();
        assert!(matches!(present.default_transition, Transition::Static));
        assert!(matches!(present.alternative_transition, Transition::Move(Edge::Bottom)));

        let fade = NavigationAnimation::fade();
        assert_eq!(fade.curve, AnimationCurve::ease_in_out());
        assert!(matches!(fade.alternative_transition, Transition::Opacity));
    }

    #[test]
    fn default_curve_has_no_duration() {
        assert_eq!(AnimationCurve::Default.duration(), None);
        assert_eq!(AnimationCurve::ease_out().duration(), Some(DEFAULT_DURATION));
    }
}
