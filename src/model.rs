//! The navigation model.

use crate::animation::NavigationAnimation;
use crate::binding::ShowingBinding;
use crate::config::NavigationConfig;
use crate::content::ContentProducer;
use crate::error::{ErrorPolicy, NavigationError};
use crate::node::{NodeChain, NodeId, StackNode, PROGRESS_TO_ALTERNATIVE, PROGRESS_TO_DEFAULT};
use crate::observe::{Change, ChangeHub, Property, Scope, Subscription, Transaction};
use crate::transition::Transition;
use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;

/// A navigation model using strings as slot identifiers.
pub type NavigationModel<V> = NavigationStackModel<String, V>;

/// Shared state behind a model and its bindings.
pub(crate) struct ModelState<Id, V> {
    pub(crate) chain: NodeChain<Id, V>,
    pub(crate) hub: ChangeHub<Id>,
}

impl<Id: Clone, V> ModelState<Id, V> {
    fn new() -> ModelState<Id, V> {
        ModelState {
            chain: NodeChain::new(),
            hub: ChangeHub::new(),
        }
    }

    /// Notifies subscribers about a change of a node, or of the model if `node` is None.
    fn emit(&mut self, node: Option<NodeId>, property: Property, transaction: Transaction) {
        let node = node.and_then(|id| {
            self.chain
                .by_id(id)
                .map(|node| (id, node.identifier().clone()))
        });
        let chain = &self.chain;
        self.hub.dispatch(
            Change {
                node,
                property,
                transaction,
            },
            |id| chain.position_of(id),
        );
    }

    /// Drops the chain if its root is inactive, otherwise drops everything after the leaf.
    ///
    /// Must not be called while issuing an animated change; truncation changes which content is
    /// considered present.
    pub(crate) fn cleanup(&mut self) {
        let root_is_showing = match self.chain.root() {
            Some(root) => root.is_showing(),
            None => return,
        };

        if !root_is_showing {
            if self.chain.clear() {
                self.emit(None, Property::Root, Transaction::immediate());
            }
        } else if let Some(pos) = self.chain.leaf_position() {
            let leaf = self.chain.iter().nth(pos).map(StackNode::id);
            if self.chain.truncate_after(pos) {
                self.emit(leaf, Property::NextNode, Transaction::immediate());
            }
        }
    }

    fn set_showing_precede(&mut self, id: NodeId, showing: bool) {
        let changed = match self.chain.by_id_mut(id) {
            Some(node) if node.is_showing_precede != showing => {
                node.is_showing_precede = showing;
                true
            }
            _ => false,
        };
        if changed {
            self.emit(
                Some(id),
                Property::ShowingPrecede(showing),
                Transaction::immediate(),
            );
        }
    }

    fn set_showing(&mut self, id: NodeId, showing: bool, transaction: Transaction) {
        let progress = if showing {
            PROGRESS_TO_ALTERNATIVE
        } else {
            PROGRESS_TO_DEFAULT
        };
        let (showing_changed, progress_changed) = match self.chain.by_id_mut(id) {
            Some(node) => {
                let showing_changed = node.is_showing != showing;
                let progress_changed = node.transition_progress != progress;
                node.is_showing = showing;
                node.transition_progress = progress;
                (showing_changed, progress_changed)
            }
            None => return,
        };
        if showing_changed {
            self.emit(Some(id), Property::Showing(showing), transaction);
        }
        if progress_changed {
            self.emit(Some(id), Property::TransitionProgress(progress), transaction);
        }
    }

    fn set_transition_animation(&mut self, id: NodeId, animation: Option<NavigationAnimation>) {
        if let Some(node) = self.chain.by_id_mut(id) {
            node.transition_animation = animation;
            self.emit(
                Some(id),
                Property::TransitionAnimation,
                Transaction::immediate(),
            );
        }
    }

    fn transaction_for(&self, id: NodeId) -> Transaction {
        self.chain
            .by_id(id)
            .and_then(StackNode::transition_animation)
            .map(|animation| Transaction::animated(animation.curve))
            .unwrap_or_default()
    }

    /// Shows a node's alternative content.
    ///
    /// The precede flag is set first, outside of the (possibly animated) transaction, so that
    /// renderers can pick their branch before the animated value changes.
    fn activate(&mut self, id: NodeId) {
        let transaction = self.transaction_for(id);
        self.set_showing_precede(id, true);
        self.set_showing(id, true, transaction);
    }

    /// Switches a node back to its slot's default content; the inverse of `activate`.
    fn deactivate(&mut self, id: NodeId) {
        let transaction = self.transaction_for(id);
        self.set_showing_precede(id, false);
        self.set_showing(id, false, transaction);
    }

    /// Deactivates a node without animating; used by bindings.
    pub(crate) fn dismiss(&mut self, id: NodeId) {
        self.set_showing_precede(id, false);
        self.set_showing(id, false, Transaction::immediate());
    }
}

/// Everything a renderer needs to know about one slot, read at once.
#[derive(Debug, Clone)]
pub struct SlotState<V> {
    pub is_showing_precede: bool,
    pub is_showing: bool,
    pub alternative_view: Option<ContentProducer<V>>,
    pub default_transition: Transition,
    pub alternative_transition: Transition,
    pub default_z_index: f64,
    pub alternative_z_index: f64,
    pub transition_progress: f32,
}

impl<V> Default for SlotState<V> {
    fn default() -> Self {
        SlotState {
            is_showing_precede: false,
            is_showing: false,
            alternative_view: None,
            default_transition: Transition::Identity,
            alternative_transition: Transition::Identity,
            default_z_index: 0.,
            alternative_z_index: 0.,
            transition_progress: PROGRESS_TO_DEFAULT,
        }
    }
}

/// The model behind all navigation slots of a UI hierarchy.
///
/// Create one per hierarchy and hand clones of it to every slot; all clones share the same stack.
/// Slots are addressed by identifier. Each navigation applied to a slot creates a node which is
/// appended to the top of the stack, so nested slots can be navigated independently.
///
/// All operations are synchronous and expected to be called from the UI thread. Changes are
/// reported through [`subscribe`](Self::subscribe).
pub struct NavigationStackModel<Id, V> {
    state: Arc<Mutex<ModelState<Id, V>>>,
    config: NavigationConfig,
}

impl<Id, V> Clone for NavigationStackModel<Id, V> {
    fn clone(&self) -> Self {
        NavigationStackModel {
            state: Arc::clone(&self.state),
            config: self.config,
        }
    }
}

impl<Id, V> Default for NavigationStackModel<Id, V>
where
    Id: Clone + PartialEq + fmt::Debug,
{
    fn default() -> Self {
        NavigationStackModel::new()
    }
}

impl<Id, V> NavigationStackModel<Id, V>
where
    Id: Clone + PartialEq + fmt::Debug,
{
    /// Creates a model that reports every navigation error.
    pub fn new() -> Self {
        NavigationStackModel::with_config(NavigationConfig::default())
    }

    /// Creates a model that silently ignores navigation errors.
    pub fn lenient() -> Self {
        NavigationStackModel::with_config(NavigationConfig::lenient())
    }

    pub fn with_config(config: NavigationConfig) -> Self {
        NavigationStackModel {
            state: Arc::new(Mutex::new(ModelState::new())),
            config,
        }
    }

    pub fn config(&self) -> NavigationConfig {
        self.config
    }

    fn policy(&self) -> ErrorPolicy {
        self.config.error_policy
    }

    /// Shows new content in a slot.
    ///
    /// The new node is appended to the top of the stack. It is an error to show content in a slot
    /// that is already showing alternative content.
    ///
    /// Stale nodes are dropped before the slot is checked, so this happens even if the call is
    /// rejected.
    pub fn show_view<F>(
        &self,
        identifier: Id,
        animation: Option<NavigationAnimation>,
        alternative_view: F,
    ) -> Result<(), NavigationError>
    where
        F: 'static + Fn() -> V + Send + Sync,
    {
        self.show_content(identifier, animation, ContentProducer::new(alternative_view))
    }

    /// Like [`show_view`](Self::show_view), with an existing content producer.
    pub fn show_content(
        &self,
        identifier: Id,
        animation: Option<NavigationAnimation>,
        alternative_view: ContentProducer<V>,
    ) -> Result<(), NavigationError> {
        let mut state = self.state.lock();
        state.cleanup();

        if state.chain.get_node(&identifier).is_some() {
            return self
                .policy()
                .handle(NavigationError::duplicate(&identifier), ());
        }

        tracing::debug!(
            "showing {:?} ({})",
            identifier,
            if animation.is_some() { "animated" } else { "immediate" }
        );

        let mut node = StackNode::new(identifier, alternative_view);
        node.transition_animation = animation;
        let id = node.id();
        let leaf = state.chain.get_leaf_node().map(StackNode::id);
        state.chain.push(node);
        match leaf {
            Some(leaf) => state.emit(Some(leaf), Property::NextNode, Transaction::immediate()),
            None => state.emit(None, Property::Root, Transaction::immediate()),
        }

        state.activate(id);
        Ok(())
    }

    /// Hides the top of the stack, replacing its animation.
    ///
    /// Passing no animation hides immediately.
    pub fn hide_top_view(&self, animation: Option<NavigationAnimation>) -> Result<(), NavigationError> {
        let mut state = self.state.lock();
        let leaf = match state.chain.get_leaf_node() {
            Some(leaf) => leaf.id(),
            None => return self.policy().handle(NavigationError::no_top_view(), ()),
        };
        tracing::debug!("hiding top view");
        state.set_transition_animation(leaf, animation);
        state.deactivate(leaf);
        Ok(())
    }

    /// Hides the top of the stack with the animation it was shown with, played in reverse.
    pub fn hide_top_view_with_reverse_animation(&self) -> Result<(), NavigationError> {
        let mut state = self.state.lock();
        let leaf = match state.chain.get_leaf_node() {
            Some(leaf) => leaf.id(),
            None => return self.policy().handle(NavigationError::no_top_view(), ()),
        };
        tracing::debug!("hiding top view with reverse animation");
        state.deactivate(leaf);
        Ok(())
    }

    /// Hides a slot anywhere in the stack, replacing its animation.
    ///
    /// Every node after it stops being reachable as the top of the stack.
    pub fn hide_view(
        &self,
        identifier: &Id,
        animation: Option<NavigationAnimation>,
    ) -> Result<(), NavigationError> {
        let mut state = self.state.lock();
        let id = match state.chain.get_node(identifier) {
            Some(node) => node.id(),
            None => return self.policy().handle(NavigationError::no_such_view(identifier), ()),
        };
        tracing::debug!("hiding {:?}", identifier);
        state.set_transition_animation(id, animation);
        state.deactivate(id);
        Ok(())
    }

    /// Hides a slot anywhere in the stack with the animation it was shown with.
    pub fn hide_view_with_reverse_animation(&self, identifier: &Id) -> Result<(), NavigationError> {
        let mut state = self.state.lock();
        let id = match state.chain.get_node(identifier) {
            Some(node) => node.id(),
            None => return self.policy().handle(NavigationError::no_such_view(identifier), ()),
        };
        tracing::debug!("hiding {:?} with reverse animation", identifier);
        state.deactivate(id);
        Ok(())
    }

    /// Drops inactive nodes. Runs automatically before every `show_view`.
    pub fn cleanup_node_list(&self) {
        self.state.lock().cleanup();
    }

    /// True if any slot is showing alternative content, i.e. it's possible to navigate back.
    pub fn has_alternative_view_showing(&self) -> bool {
        self.state.lock().chain.get_leaf_node().is_some()
    }

    /// True if the slot is showing its alternative content.
    pub fn is_alternative_view_showing(&self, identifier: &Id) -> bool {
        self.state
            .lock()
            .chain
            .get_node(identifier)
            .map_or(false, StackNode::is_showing)
    }

    /// The precede flag of a slot; use this to pick the render branch.
    pub fn is_alternative_view_showing_precede(&self, identifier: &Id) -> bool {
        self.state
            .lock()
            .chain
            .get_node(identifier)
            .map_or(false, StackNode::is_showing_precede)
    }

    pub fn alternative_view(&self, identifier: &Id) -> Option<ContentProducer<V>> {
        self.state
            .lock()
            .chain
            .get_node(identifier)
            .map(|node| node.alternative_view().clone())
    }

    pub fn default_view_transition(&self, identifier: &Id) -> Transition {
        self.slot_state(identifier).default_transition
    }

    pub fn alternative_view_transition(&self, identifier: &Id) -> Transition {
        self.slot_state(identifier).alternative_transition
    }

    pub fn default_view_z_index(&self, identifier: &Id) -> f64 {
        self.slot_state(identifier).default_z_index
    }

    pub fn alternative_view_z_index(&self, identifier: &Id) -> f64 {
        self.slot_state(identifier).alternative_z_index
    }

    /// The slot's transition progress; 0 if the slot has no node.
    pub fn transition_progress(&self, identifier: &Id) -> f32 {
        self.slot_state(identifier).transition_progress
    }

    /// Reads everything about a slot at once.
    pub fn slot_state(&self, identifier: &Id) -> SlotState<V> {
        let state = self.state.lock();
        let node = match state.chain.get_node(identifier) {
            Some(node) => node,
            None => return SlotState::default(),
        };
        let mut slot = SlotState {
            is_showing_precede: node.is_showing_precede(),
            is_showing: node.is_showing(),
            alternative_view: Some(node.alternative_view().clone()),
            transition_progress: node.transition_progress(),
            ..SlotState::default()
        };
        if let Some(animation) = node.transition_animation() {
            slot.default_transition = animation.default_transition.clone();
            slot.alternative_transition = animation.alternative_transition.clone();
            slot.default_z_index = animation.default_z_index;
            slot.alternative_z_index = animation.alternative_z_index;
        }
        slot
    }

    /// The identifier of the slot at the top of the stack.
    pub fn top_identifier(&self) -> Option<Id> {
        self.state
            .lock()
            .chain
            .get_leaf_node()
            .map(|node| node.identifier().clone())
    }

    /// All slots that have a node, from the root.
    pub fn identifiers(&self) -> Vec<Id> {
        self.state
            .lock()
            .chain
            .iter()
            .map(|node| node.identifier().clone())
            .collect()
    }

    /// A copy of the node chain as it is right now.
    ///
    /// Content producers are shared with the model, everything else is a snapshot.
    pub fn chain(&self) -> NodeChain<Id, V> {
        self.state.lock().chain.clone()
    }

    /// Subscribes to every change of this model.
    pub fn subscribe(&self) -> Subscription<Id> {
        self.state.lock().hub.subscribe(Scope::Model)
    }

    /// Subscribes to changes of a slot's node and of every node after it.
    ///
    /// Returns None if the slot has no node.
    pub fn subscribe_node(&self, identifier: &Id) -> Option<Subscription<Id>> {
        let mut state = self.state.lock();
        let id = state.chain.get_node(identifier)?.id();
        Some(state.hub.subscribe(Scope::Node(id)))
    }

    /// Creates a binding for the top of the stack, e.g. so the top content can dismiss itself.
    pub fn top_view_showing_binding(&self) -> Result<ShowingBinding<Id, V>, NavigationError> {
        let leaf = self.state.lock().chain.get_leaf_node().map(StackNode::id);
        match leaf {
            Some(id) => Ok(ShowingBinding::new(Arc::downgrade(&self.state), id)),
            None => self
                .policy()
                .handle(NavigationError::no_top_view(), ShowingBinding::constant()),
        }
    }

    /// Creates a binding for a slot's node.
    ///
    /// The binding stays tied to that node: once it is dropped from the stack, the binding reads
    /// false and ignores writes, even if the slot is shown again.
    pub fn view_showing_binding(&self, identifier: &Id) -> Result<ShowingBinding<Id, V>, NavigationError> {
        let node = self.state.lock().chain.get_node(identifier).map(StackNode::id);
        match node {
            Some(id) => Ok(ShowingBinding::new(Arc::downgrade(&self.state), id)),
            None => self.policy().handle(
                NavigationError::no_such_view(identifier),
                ShowingBinding::constant(),
            ),
        }
    }
}

/// Renders the stack as `['Foo'|'Bar']`.
impl<Id: fmt::Display, V> fmt::Display for NavigationStackModel<Id, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.state.lock().chain)
    }
}

impl<Id: fmt::Debug, V> fmt::Debug for NavigationStackModel<Id, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NavigationStackModel")
            .field("chain", &self.state.lock().chain)
            .field("config", &self.config)
            .finish()
    }
}
