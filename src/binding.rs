//! Bindings to a node's showing flag.

use crate::model::ModelState;
use crate::node::NodeId;
use core::fmt;
use parking_lot::Mutex;
use std::sync::Weak;

/// A read/write handle to whether a node is showing its alternative content.
///
/// This is a one-way toggle: it can be set to false, which hides the node immediately, but setting
/// it to true does nothing. The binding doesn't keep the node (or the model) alive; once the node
/// is dropped from the stack it reads false and ignores writes.
pub struct ShowingBinding<Id, V> {
    target: Option<(Weak<Mutex<ModelState<Id, V>>>, NodeId)>,
}

impl<Id, V> Clone for ShowingBinding<Id, V> {
    fn clone(&self) -> Self {
        ShowingBinding {
            target: self.target.clone(),
        }
    }
}

impl<Id, V> ShowingBinding<Id, V> {
    pub(crate) fn new(state: Weak<Mutex<ModelState<Id, V>>>, node: NodeId) -> Self {
        ShowingBinding {
            target: Some((state, node)),
        }
    }

    /// A binding that is always false.
    pub fn constant() -> Self {
        ShowingBinding { target: None }
    }

    /// The node this binding was created for.
    pub fn node(&self) -> Option<NodeId> {
        self.target.as_ref().map(|(_, node)| *node)
    }

    /// True while the bound node is still part of its model's stack.
    pub fn is_bound(&self) -> bool {
        match &self.target {
            Some((state, node)) => state
                .upgrade()
                .map_or(false, |state| state.lock().chain.by_id(*node).is_some()),
            None => false,
        }
    }

    pub fn get(&self) -> bool {
        match &self.target {
            Some((state, node)) => state.upgrade().map_or(false, |state| {
                state
                    .lock()
                    .chain
                    .by_id(*node)
                    .map_or(false, |node| node.is_showing())
            }),
            None => false,
        }
    }
}

impl<Id: Clone, V> ShowingBinding<Id, V> {
    /// Setting false hides the node without animation; setting true is ignored.
    pub fn set(&self, showing: bool) {
        if showing {
            return;
        }
        if let Some((state, node)) = &self.target {
            if let Some(state) = state.upgrade() {
                state.lock().dismiss(*node);
            }
        }
    }

    pub fn toggle(&self) {
        self.set(!self.get());
    }
}

impl<Id, V> fmt::Debug for ShowingBinding<Id, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.node() {
            Some(node) => write!(f, "ShowingBinding({:?})", node),
            None => write!(f, "ShowingBinding(constant)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{NavigationError, Target};
    use crate::model::NavigationModel;
    use crate::observe::Property;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn top_binding_without_stack_is_error_or_constant() {
        let strict = NavigationModel::<()>::new();
        assert_eq!(
            strict.top_view_showing_binding().err(),
            Some(NavigationError::no_top_view())
        );

        let lenient = NavigationModel::<()>::lenient();
        let binding = lenient.top_view_showing_binding().unwrap();
        assert!(!binding.get());
        binding.toggle();
        assert!(!binding.get(), "constant bindings stay false");
        assert!(!binding.is_bound());
    }

    #[test]
    fn view_binding_without_node_is_error_or_constant() {
        let strict = NavigationModel::<()>::new();
        strict.show_view(s("Foo"), None, || ()).unwrap();
        assert_eq!(
            strict.view_showing_binding(&s("Bar")).err(),
            Some(NavigationError::NoActiveTarget(Target::Identifier(
                "\"Bar\"".to_string()
            )))
        );

        let lenient = NavigationModel::<()>::lenient();
        lenient.show_view(s("Foo"), None, || ()).unwrap();
        let binding = lenient.view_showing_binding(&s("Bar")).unwrap();
        assert!(!binding.get());
        assert!(!binding.is_bound());
        assert_eq!(binding.node(), None);
        binding.set(false);
        assert!(lenient.is_alternative_view_showing(&s("Foo")));
    }

    #[test]
    fn toggling_top_binding_hides_node() {
        let model = NavigationModel::<()>::new();
        model.show_view(s("Foo"), None, || ()).unwrap();
        let binding = model.top_view_showing_binding().unwrap();
        assert!(binding.get());

        binding.toggle();
        assert!(!binding.get());
        assert!(!model.is_alternative_view_showing(&s("Foo")));
        assert!(!model.is_alternative_view_showing_precede(&s("Foo")));
        assert_eq!(model.transition_progress(&s("Foo")), 0.);
    }

    #[test]
    fn setting_true_is_ignored() {
        let model = NavigationModel::<()>::new();
        model.show_view(s("Foo"), None, || ()).unwrap();
        let binding = model.view_showing_binding(&s("Foo")).unwrap();
        model.hide_view(&s("Foo"), None).unwrap();
        binding.set(true);
        assert!(!binding.get());
        assert!(!model.is_alternative_view_showing(&s("Foo")));
    }

    #[test]
    fn binding_reflects_model_changes() {
        let model = NavigationModel::<()>::new();
        model.show_view(s("Foo"), None, || ()).unwrap();
        let binding = model.view_showing_binding(&s("Foo")).unwrap();
        model.hide_top_view(None).unwrap();
        assert!(!binding.get());
    }

    #[test]
    fn binding_deactivates_only_its_node() {
        let model = NavigationModel::<()>::new();
        model.show_view(s("Foo"), None, || ()).unwrap();
        model.show_view(s("Bar"), None, || ()).unwrap();
        let foo = model.view_showing_binding(&s("Foo")).unwrap();
        foo.set(false);
        assert!(!model.is_alternative_view_showing(&s("Foo")));
        assert!(model.is_alternative_view_showing(&s("Bar")));
    }

    #[test]
    fn binding_write_notifies_precede_first() {
        let model = NavigationModel::<()>::new();
        model.show_view(s("Foo"), None, || ()).unwrap();
        let binding = model.top_view_showing_binding().unwrap();
        let sub = model.subscribe();
        binding.set(false);
        let changes = sub.drain();
        assert_eq!(changes[0].property, Property::ShowingPrecede(false));
        assert_eq!(changes[1].property, Property::Showing(false));
        assert!(changes.iter().all(|c| !c.transaction.is_animated()));
    }

    #[test]
    fn binding_does_not_retain_node() {
        let model = NavigationModel::<()>::new();
        model.show_view(s("Foo"), None, || ()).unwrap();
        let binding = model.view_showing_binding(&s("Foo")).unwrap();
        model.hide_top_view(None).unwrap();
        model.cleanup_node_list();
        assert!(model.identifiers().is_empty());
        assert!(!binding.is_bound());

        // a new node for the same slot is not picked up
        model.show_view(s("Foo"), None, || ()).unwrap();
        assert!(!binding.get());
        binding.set(false);
        assert!(model.is_alternative_view_showing(&s("Foo")));
    }

    #[test]
    fn binding_does_not_retain_model() {
        let model = NavigationModel::<()>::new();
        model.show_view(s("Foo"), None, || ()).unwrap();
        let binding = model.top_view_showing_binding().unwrap();
        drop(model);
        assert!(!binding.get());
        binding.set(false);
        assert!(!binding.is_bound());
    }
}
