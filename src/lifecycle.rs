//! Detecting when animated transitions have settled.

/// Tracks an animated value towards its target and reports, once, when it gets there.
///
/// The model only stores target progress values; the host's animation engine interpolates
/// towards them frame by frame. Feed the target in with [`retarget`](Self::retarget) whenever the
/// model changes it, and every interpolated frame value with [`sample`](Self::sample).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationCompletion {
    target: f32,
    pending: bool,
}

impl Default for AnimationCompletion {
    fn default() -> Self {
        AnimationCompletion::new(0.)
    }
}

impl AnimationCompletion {
    pub fn new(initial: f32) -> AnimationCompletion {
        AnimationCompletion {
            target: initial,
            pending: false,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// True while an animation towards the target hasn't completed yet.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Sets a new target. Only animated changes can complete.
    pub fn retarget(&mut self, target: f32, animated: bool) {
        self.target = target;
        self.pending = animated;
    }

    /// Returns the target if `value` reached it and it hasn't been reported yet.
    pub fn sample(&mut self, value: f32) -> Option<f32> {
        if self.pending && (value - self.target).abs() <= f32::EPSILON {
            self.pending = false;
            Some(self.target)
        } else {
            None
        }
    }
}
