//! Named navigations with preset animations.

use crate::animation::NavigationAnimation;
use crate::error::NavigationError;
use crate::model::NavigationStackModel;
use core::fmt;

impl<Id, V> NavigationStackModel<Id, V>
where
    Id: Clone + PartialEq + fmt::Debug,
{
    /// Shows content in a slot with a push animation.
    pub fn push_content<F>(&self, identifier: Id, alternative_view: F) -> Result<(), NavigationError>
    where
        F: 'static + Fn() -> V + Send + Sync,
    {
        self.show_view(identifier, Some(NavigationAnimation::push()), alternative_view)
    }

    /// Hides a slot with a pop animation.
    pub fn pop_content(&self, identifier: &Id) -> Result<(), NavigationError> {
        self.hide_view(identifier, Some(NavigationAnimation::pop()))
    }

    /// Shows content in a slot with a modal presentation.
    pub fn present_content<F>(&self, identifier: Id, alternative_view: F) -> Result<(), NavigationError>
    where
        F: 'static + Fn() -> V + Send + Sync,
    {
        self.show_view(identifier, Some(NavigationAnimation::present()), alternative_view)
    }

    /// Hides a slot with a modal dismissal.
    pub fn dismiss_content(&self, identifier: &Id) -> Result<(), NavigationError> {
        self.hide_view(identifier, Some(NavigationAnimation::dismiss()))
    }

    /// Fades content into a slot.
    pub fn fade_in_content<F>(&self, identifier: Id, alternative_view: F) -> Result<(), NavigationError>
    where
        F: 'static + Fn() -> V + Send + Sync,
    {
        self.show_view(identifier, Some(NavigationAnimation::fade()), alternative_view)
    }

    /// Fades a slot back to its default content.
    pub fn fade_out_content(&self, identifier: &Id) -> Result<(), NavigationError> {
        self.hide_view(identifier, Some(NavigationAnimation::fade()))
    }
}

#[cfg(test)]
mod tests {
    use crate::animation::AnimationCurve;
    use crate::model::NavigationModel;
    use crate::transition::{Edge, Transition};

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn push_and_pop() {
        let model = NavigationModel::<()>::new();
        model.push_content(s("Foo"), || ()).unwrap();
        assert!(model.is_alternative_view_showing(&s("Foo")));
        assert!(matches!(
            model.alternative_view_transition(&s("Foo")),
            Transition::Move(Edge::Trailing)
        ));

        model.pop_content(&s("Foo")).unwrap();
        assert!(!model.is_alternative_view_showing(&s("Foo")));
        assert!(matches!(
            model.default_view_transition(&s("Foo")),
            Transition::Move(Edge::Leading)
        ));
    }

    #[test]
    fn present_and_dismiss() {
        let model = NavigationModel::<()>::new();
        model.present_content(s("Foo"), || ()).unwrap();
        assert!(matches!(
            model.alternative_view_transition(&s("Foo")),
            Transition::Move(Edge::Bottom)
        ));
        model.dismiss_content(&s("Foo")).unwrap();
        assert!(!model.has_alternative_view_showing());
    }

    #[test]
    fn fade_in_and_out_are_animated() {
        let model = NavigationModel::<()>::new();
        let sub = model.subscribe();
        model.fade_in_content(s("Foo"), || ()).unwrap();
        model.fade_out_content(&s("Foo")).unwrap();
        assert!(!model.is_alternative_view_showing(&s("Foo")));
        let animated: Vec<_> = sub
            .drain()
            .into_iter()
            .filter_map(|c| c.transaction.animation)
            .collect();
        assert!(!animated.is_empty());
        assert!(animated.iter().all(|curve| *curve == AnimationCurve::ease_in_out()));
    }

    #[test]
    fn convenience_errors_follow_policy() {
        let model = NavigationModel::<()>::new();
        assert!(model.pop_content(&s("Foo")).is_err());
        model.push_content(s("Foo"), || ()).unwrap();
        assert!(model.present_content(s("Foo"), || ()).is_err());
    }
}
