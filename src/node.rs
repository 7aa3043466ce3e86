//! Stack nodes and the chain that holds them.

use crate::animation::NavigationAnimation;
use crate::content::ContentProducer;
use core::fmt;
use uuid::Uuid;

/// Progress value at which the default content is fully visible.
pub const PROGRESS_TO_DEFAULT: f32 = 0.;

/// Progress value at which the alternative content is fully visible.
pub const PROGRESS_TO_ALTERNATIVE: f32 = 1.;

/// A unique identifier for a stack node.
///
/// (this is just a UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    pub(crate) fn new() -> NodeId {
        NodeId(Uuid::new_v4())
    }
}

/// One active navigation step for one named slot.
///
/// A node only exists while its slot has a navigation applied (or is in the middle of un-applying
/// one). The successor of a node is the node after it in its [`NodeChain`].
pub struct StackNode<Id, V> {
    id: NodeId,
    identifier: Id,
    alternative_view: ContentProducer<V>,
    pub(crate) is_showing: bool,
    pub(crate) is_showing_precede: bool,
    pub(crate) transition_animation: Option<NavigationAnimation>,
    pub(crate) transition_progress: f32,
}

impl<Id, V> StackNode<Id, V> {
    /// Creates an inactive node. The content producer is stored, not called.
    pub fn new(identifier: Id, alternative_view: ContentProducer<V>) -> StackNode<Id, V> {
        StackNode {
            id: NodeId::new(),
            identifier,
            alternative_view,
            is_showing: false,
            is_showing_precede: false,
            transition_animation: None,
            transition_progress: PROGRESS_TO_DEFAULT,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The slot this node belongs to.
    pub fn identifier(&self) -> &Id {
        &self.identifier
    }

    /// Produces the content shown while this node is active.
    pub fn alternative_view(&self) -> &ContentProducer<V> {
        &self.alternative_view
    }

    /// True once the alternative content has been (or is being) activated.
    pub fn is_showing(&self) -> bool {
        self.is_showing
    }

    /// Mirrors `is_showing` one step ahead; flips before it in both directions.
    pub fn is_showing_precede(&self) -> bool {
        self.is_showing_precede
    }

    pub fn transition_animation(&self) -> Option<&NavigationAnimation> {
        self.transition_animation.as_ref()
    }

    /// 0 when the default content is fully visible, 1 for the alternative content.
    pub fn transition_progress(&self) -> f32 {
        self.transition_progress
    }
}

impl<Id: Clone, V> Clone for StackNode<Id, V> {
    fn clone(&self) -> Self {
        StackNode {
            id: self.id,
            identifier: self.identifier.clone(),
            alternative_view: self.alternative_view.clone(),
            is_showing: self.is_showing,
            is_showing_precede: self.is_showing_precede,
            transition_animation: self.transition_animation.clone(),
            transition_progress: self.transition_progress,
        }
    }
}

impl<Id: fmt::Debug, V> fmt::Debug for StackNode<Id, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("StackNode")
            .field("id", &self.id)
            .field("identifier", &self.identifier)
            .field("is_showing", &self.is_showing)
            .field("is_showing_precede", &self.is_showing_precede)
            .field("transition_animation", &self.transition_animation)
            .field("transition_progress", &self.transition_progress)
            .finish()
    }
}

/// A chain of stack nodes, stored in order: `nodes[i + 1]` is the successor of `nodes[i]`.
///
/// An empty chain means no navigation is applied anywhere. The first node is the root.
pub struct NodeChain<Id, V> {
    nodes: Vec<StackNode<Id, V>>,
}

impl<Id, V> Default for NodeChain<Id, V> {
    fn default() -> Self {
        NodeChain::new()
    }
}

impl<Id, V> NodeChain<Id, V> {
    pub fn new() -> NodeChain<Id, V> {
        NodeChain { nodes: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> Option<&StackNode<Id, V>> {
        self.nodes.first()
    }

    /// Iterates over all nodes from the root, including inactive ones.
    pub fn iter(&self) -> impl Iterator<Item = &StackNode<Id, V>> {
        self.nodes.iter()
    }

    /// Returns the successor of a node, if both exist.
    pub fn next_node(&self, id: NodeId) -> Option<&StackNode<Id, V>> {
        self.position_of(id).and_then(|pos| self.nodes.get(pos + 1))
    }

    /// Returns the position of a node in the chain.
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }

    pub fn by_id(&self, id: NodeId) -> Option<&StackNode<Id, V>> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub(crate) fn by_id_mut(&mut self, id: NodeId) -> Option<&mut StackNode<Id, V>> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    /// Returns the position of the leaf: the last node of the contiguous run of active nodes
    /// starting at the root.
    ///
    /// None if the chain is empty or the root is inactive.
    pub fn leaf_position(&self) -> Option<usize> {
        let run = self.nodes.iter().take_while(|node| node.is_showing).count();
        run.checked_sub(1)
    }

    /// Returns the top of the stack, i.e. the deepest contiguously active node.
    pub fn get_leaf_node(&self) -> Option<&StackNode<Id, V>> {
        self.leaf_position().map(|pos| &self.nodes[pos])
    }

    /// Appends a node after the current last node.
    pub(crate) fn push(&mut self, node: StackNode<Id, V>) {
        self.nodes.push(node);
    }

    /// Drops every node after `pos`. Returns true if anything was dropped.
    pub(crate) fn truncate_after(&mut self, pos: usize) -> bool {
        if self.nodes.len() > pos + 1 {
            self.nodes.truncate(pos + 1);
            true
        } else {
            false
        }
    }

    /// Drops the whole chain. Returns true if it wasn't already empty.
    pub(crate) fn clear(&mut self) -> bool {
        let had_nodes = !self.nodes.is_empty();
        self.nodes.clear();
        had_nodes
    }
}

impl<Id: PartialEq, V> NodeChain<Id, V> {
    /// Returns the shallowest node with the given identifier.
    pub fn get_node(&self, identifier: &Id) -> Option<&StackNode<Id, V>> {
        self.nodes.iter().find(|node| node.identifier == *identifier)
    }
}

/// Renders as `'Foo'|'Bar'`.
impl<Id: fmt::Display, V> fmt::Display for NodeChain<Id, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "'{}'", node.identifier)?;
        }
        Ok(())
    }
}

impl<Id: Clone, V> Clone for NodeChain<Id, V> {
    fn clone(&self) -> Self {
        NodeChain {
            nodes: self.nodes.clone(),
        }
    }
}

impl<Id: fmt::Debug, V> fmt::Debug for NodeChain<Id, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.nodes.iter()).finish()
    }
}
