//! Navigation slots.
//!
//! A slot is the place in a view hierarchy where the model switches between default and
//! alternative content. `NavigationSlot` resolves what a renderer should mount for a slot and
//! fires did-appear actions once animated transitions complete.

use crate::content::{ContentProducer, LifecycleAction};
use crate::lifecycle::AnimationCompletion;
use crate::model::NavigationStackModel;
use crate::node::{PROGRESS_TO_ALTERNATIVE, PROGRESS_TO_DEFAULT};
use crate::observe::{Change, Property};
use crate::transition::Transition;
use core::fmt;

/// Which of two otherwise identical render branches to mount.
///
/// Switching branches makes the renderer treat the slot's content as new, which it needs to pick
/// up transitions correctly. The branch follows the precede flag, so it flips before the animated
/// showing flag does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Precede,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneRole {
    Default,
    Alternative,
}

/// A content plane to render.
#[derive(Debug, Clone)]
pub struct Plane<V> {
    pub role: PlaneRole,
    pub content: ContentProducer<V>,
    pub transition: Transition,
    pub z_index: f64,
}

/// What to render for a slot right now.
#[derive(Debug, Clone)]
pub struct SlotFrame<V> {
    pub branch: Branch,
    /// The default plane while not showing, the alternative plane while showing.
    pub planes: Vec<Plane<V>>,
}

impl<V> SlotFrame<V> {
    pub fn plane(&self, role: PlaneRole) -> Option<&Plane<V>> {
        self.planes.iter().find(|plane| plane.role == role)
    }
}

/// A named slot with its default content.
pub struct NavigationSlot<Id, V> {
    identifier: Id,
    default_view: ContentProducer<V>,
    default_did_appear: Option<LifecycleAction>,
    alternative_did_appear: Option<LifecycleAction>,
    completion: AnimationCompletion,
}

impl<Id, V> NavigationSlot<Id, V> {
    pub fn new<F>(identifier: Id, default_view: F) -> Self
    where
        F: 'static + Fn() -> V + Send + Sync,
    {
        NavigationSlot {
            identifier,
            default_view: ContentProducer::new(default_view),
            default_did_appear: None,
            alternative_did_appear: None,
            completion: AnimationCompletion::new(PROGRESS_TO_DEFAULT),
        }
    }

    pub fn identifier(&self) -> &Id {
        &self.identifier
    }

    /// Sets the action performed once the default content has fully transitioned back in.
    pub fn on_default_did_appear(&mut self, action: LifecycleAction) {
        self.default_did_appear = Some(action);
    }

    /// Sets the action performed once the alternative content has fully transitioned in.
    pub fn on_alternative_did_appear(&mut self, action: LifecycleAction) {
        self.alternative_did_appear = Some(action);
    }

    /// Feeds a frame of the host's interpolated transition progress for this slot.
    ///
    /// Performs the matching did-appear action when an animated transition settles.
    pub fn animation_frame(&mut self, progress: f32) {
        let target = match self.completion.sample(progress) {
            Some(target) => target,
            None => return,
        };
        let action = if target == PROGRESS_TO_ALTERNATIVE {
            &self.alternative_did_appear
        } else {
            &self.default_did_appear
        };
        if let Some(action) = action {
            action.perform();
        }
    }

    /// True while an animated transition of this slot is in flight.
    pub fn is_animating(&self) -> bool {
        self.completion.is_pending()
    }
}

impl<Id, V> NavigationSlot<Id, V>
where
    Id: Clone + PartialEq + fmt::Debug,
{
    /// Resolves the planes to render from the model.
    pub fn frame(&self, model: &NavigationStackModel<Id, V>) -> SlotFrame<V> {
        let state = model.slot_state(&self.identifier);
        let branch = if state.is_showing_precede {
            Branch::Precede
        } else {
            Branch::Settled
        };

        let mut planes = Vec::with_capacity(1);
        if !state.is_showing {
            planes.push(Plane {
                role: PlaneRole::Default,
                content: self.default_view.clone(),
                transition: state.default_transition,
                z_index: state.default_z_index,
            });
        } else if let Some(content) = state.alternative_view {
            planes.push(Plane {
                role: PlaneRole::Alternative,
                content,
                transition: state.alternative_transition,
                z_index: state.alternative_z_index,
            });
        }

        SlotFrame { branch, planes }
    }

    /// Picks up progress changes of this slot from a model subscription.
    pub fn observe(&mut self, change: &Change<Id>) {
        if change.identifier() != Some(&self.identifier) {
            return;
        }
        if let Property::TransitionProgress(progress) = change.property {
            self.completion
                .retarget(progress, change.transaction.is_animated());
        }
    }
}

impl<Id: fmt::Debug, V> fmt::Debug for NavigationSlot<Id, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NavigationSlot")
            .field("identifier", &self.identifier)
            .field("default_did_appear", &self.default_did_appear)
            .field("alternative_did_appear", &self.alternative_did_appear)
            .field("completion", &self.completion)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::NavigationAnimation;
    use crate::model::NavigationModel;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn s(name: &str) -> String {
        name.to_string()
    }

    fn counter() -> (Arc<AtomicUsize>, LifecycleAction) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let action = LifecycleAction::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (count, action)
    }

    #[test]
    fn idle_slot_renders_default_plane() {
        let model = NavigationModel::<&'static str>::new();
        let slot = NavigationSlot::new(s("Foo"), || "default");
        let frame = slot.frame(&model);
        assert_eq!(frame.branch, Branch::Settled);
        assert_eq!(frame.planes.len(), 1);
        let plane = frame.plane(PlaneRole::Default).expect("default plane");
        assert_eq!(plane.content.produce(), "default");
        assert!(plane.transition.is_identity());
    }

    #[test]
    fn showing_slot_renders_alternative_plane() {
        let model = NavigationModel::<&'static str>::new();
        let slot = NavigationSlot::new(s("Foo"), || "default");
        model.push_content(s("Foo"), || "alternative").unwrap();

        let frame = slot.frame(&model);
        assert_eq!(frame.branch, Branch::Precede);
        assert!(frame.plane(PlaneRole::Default).is_none());
        let plane = frame.plane(PlaneRole::Alternative).expect("alternative plane");
        assert_eq!(plane.content.produce(), "alternative");
        assert_eq!(plane.z_index, crate::animation::Z_INDEX_IN_FRONT);
    }

    #[test]
    fn other_slots_are_unaffected() {
        let model = NavigationModel::<&'static str>::new();
        let slot = NavigationSlot::new(s("Bar"), || "bar");
        model.push_content(s("Foo"), || "foo").unwrap();
        let frame = slot.frame(&model);
        assert_eq!(frame.branch, Branch::Settled);
        assert!(frame.plane(PlaneRole::Default).is_some());
    }

    #[test]
    fn did_appear_fires_after_animated_show() {
        let model = NavigationModel::<()>::new();
        let sub = model.subscribe();
        let mut slot = NavigationSlot::new(s("Foo"), || ());
        let (alternative, action) = counter();
        slot.on_alternative_did_appear(action);
        let (default, action) = counter();
        slot.on_default_did_appear(action);

        model
            .show_view(s("Foo"), Some(NavigationAnimation::fade()), || ())
            .unwrap();
        for change in sub.drain() {
            slot.observe(&change);
        }
        assert!(slot.is_animating());

        for progress in [0.25, 0.5, 1., 1.] {
            slot.animation_frame(progress);
        }
        assert_eq!(alternative.load(Ordering::SeqCst), 1);
        assert_eq!(default.load(Ordering::SeqCst), 0);

        model.hide_top_view_with_reverse_animation().unwrap();
        for change in sub.drain() {
            slot.observe(&change);
        }
        for progress in [0.5, 0.] {
            slot.animation_frame(progress);
        }
        assert_eq!(default.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn did_appear_skipped_for_immediate_show() {
        let model = NavigationModel::<()>::new();
        let sub = model.subscribe();
        let mut slot = NavigationSlot::new(s("Foo"), || ());
        let (alternative, action) = counter();
        slot.on_alternative_did_appear(action);

        model.show_view(s("Foo"), None, || ()).unwrap();
        for change in sub.drain() {
            slot.observe(&change);
        }
        slot.animation_frame(1.);
        assert_eq!(alternative.load(Ordering::SeqCst), 0);
    }
}
