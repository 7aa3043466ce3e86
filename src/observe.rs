//! Change notifications.
//!
//! Every mutation of a model's node chain is turned into a [`Change`] and queued to subscribers in
//! the order it happened. A subscriber either observes the whole model, or a single node together
//! with every node chained after it; the latter is how changes deep in the stack bubble up to the
//! nodes above them.

use crate::animation::AnimationCurve;
use crate::node::NodeId;
use crossbeam::channel::{self, Receiver, Sender, TryRecvError};

/// The mutation scope a change was issued in.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transaction {
    /// The curve to animate with, or None for an immediate change.
    pub animation: Option<AnimationCurve>,
}

impl Transaction {
    pub fn immediate() -> Transaction {
        Transaction { animation: None }
    }

    pub fn animated(curve: AnimationCurve) -> Transaction {
        Transaction {
            animation: Some(curve),
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }
}

/// The property that changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Property {
    /// The model's root node was set or dropped.
    Root,
    /// The node's successor was replaced or dropped.
    NextNode,
    ShowingPrecede(bool),
    Showing(bool),
    TransitionAnimation,
    TransitionProgress(f32),
}

/// A single change of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Change<Id> {
    /// The node that changed and its slot; None for changes of the model itself.
    pub node: Option<(NodeId, Id)>,
    pub property: Property,
    pub transaction: Transaction,
}

impl<Id> Change<Id> {
    /// The slot this change belongs to, if any.
    pub fn identifier(&self) -> Option<&Id> {
        self.node.as_ref().map(|(_, identifier)| identifier)
    }
}

/// What a subscription observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every change of the model.
    Model,
    /// Changes of a node and of all nodes after it.
    ///
    /// The subscription ends once the node leaves the chain.
    Node(NodeId),
}

/// A subscription to model changes. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription<Id> {
    scope: Scope,
    receiver: Receiver<Change<Id>>,
}

impl<Id> Subscription<Id> {
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Returns the next pending change, if any.
    pub fn try_recv(&self) -> Option<Change<Id>> {
        match self.receiver.try_recv() {
            Ok(change) => Some(change),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Receives all pending changes.
    pub fn drain(&self) -> Vec<Change<Id>> {
        self.receiver.try_iter().collect()
    }

    /// True if no change is pending.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// True once the model stopped delivering to this subscription, i.e. the model was dropped or
    /// the observed node left the chain. Pending changes can still be received.
    pub fn is_closed(&self) -> bool {
        self.receiver.is_empty() && matches!(self.receiver.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// The underlying channel, e.g. for use with `crossbeam::select!`.
    pub fn receiver(&self) -> &Receiver<Change<Id>> {
        &self.receiver
    }
}

struct Subscriber<Id> {
    scope: Scope,
    sender: Sender<Change<Id>>,
}

/// Fans changes out to subscribers.
pub(crate) struct ChangeHub<Id> {
    subscribers: Vec<Subscriber<Id>>,
}

impl<Id> Default for ChangeHub<Id> {
    fn default() -> Self {
        ChangeHub::new()
    }
}

impl<Id> ChangeHub<Id> {
    pub(crate) fn new() -> ChangeHub<Id> {
        ChangeHub {
            subscribers: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, scope: Scope) -> Subscription<Id> {
        let (sender, receiver) = channel::unbounded();
        self.subscribers.push(Subscriber { scope, sender });
        Subscription { scope, receiver }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.subscribers.len()
    }
}

impl<Id: Clone> ChangeHub<Id> {
    /// Queues a change to every interested subscriber.
    ///
    /// `position` resolves a node to its current position in the chain. Subscribers whose
    /// receiver was dropped, or whose node is gone, are removed.
    pub(crate) fn dispatch<P>(&mut self, change: Change<Id>, position: P)
    where
        P: Fn(NodeId) -> Option<usize>,
    {
        let changed_pos = change.node.as_ref().and_then(|(id, _)| position(*id));

        self.subscribers.retain(|subscriber| {
            let interested = match subscriber.scope {
                Scope::Model => true,
                Scope::Node(id) => match position(id) {
                    Some(pos) => changed_pos.map_or(false, |changed| changed >= pos),
                    None => {
                        tracing::trace!("dropping subscriber of removed node {:?}", id);
                        return false;
                    }
                },
            };

            if !interested {
                return true;
            }
            match subscriber.sender.send(change.clone()) {
                Ok(()) => true,
                Err(_) => {
                    tracing::trace!("dropping disconnected subscriber");
                    false
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(node: NodeId, property: Property) -> Change<&'static str> {
        Change {
            node: Some((node, "Foo")),
            property,
            transaction: Transaction::immediate(),
        }
    }

    #[test]
    fn model_scope_receives_everything_in_order() {
        let mut hub = ChangeHub::new();
        let sub = hub.subscribe(Scope::Model);
        let a = NodeId::new();

        hub.dispatch(change(a, Property::ShowingPrecede(true)), |_| Some(0));
        hub.dispatch(change(a, Property::Showing(true)), |_| Some(0));
        hub.dispatch(
            Change {
                node: None,
                property: Property::Root,
                transaction: Transaction::immediate(),
            },
            |_| None,
        );

        let props: Vec<_> = sub.drain().into_iter().map(|c| c.property).collect();
        assert_eq!(
            props,
            vec![Property::ShowingPrecede(true), Property::Showing(true), Property::Root]
        );
    }

    #[test]
    fn node_scope_receives_successor_changes_only() {
        let mut hub = ChangeHub::new();
        let (a, b) = (NodeId::new(), NodeId::new());
        let position = move |id: NodeId| {
            if id == a {
                Some(0)
            } else if id == b {
                Some(1)
            } else {
                None
            }
        };
        let sub_b = hub.subscribe(Scope::Node(b));

        hub.dispatch(change(a, Property::Showing(false)), position);
        assert!(sub_b.is_empty(), "changes above the node are not forwarded");

        hub.dispatch(change(b, Property::Showing(true)), position);
        assert_eq!(sub_b.drain().len(), 1);
    }

    #[test]
    fn prunes_removed_nodes_and_dropped_receivers() {
        let mut hub = ChangeHub::new();
        let a = NodeId::new();
        let sub = hub.subscribe(Scope::Node(a));
        let dropped = hub.subscribe(Scope::Model);
        drop(dropped);
        assert_eq!(hub.len(), 2);

        hub.dispatch(change(a, Property::TransitionAnimation), |_| None);
        assert_eq!(hub.len(), 0);
        assert!(sub.is_closed());
    }

    #[test]
    fn receives_one_change_at_a_time() {
        let mut hub = ChangeHub::new();
        let a = NodeId::new();
        let sub = hub.subscribe(Scope::Node(a));
        assert_eq!(sub.scope(), Scope::Node(a));
        assert_eq!(sub.try_recv(), None);

        hub.dispatch(change(a, Property::Showing(true)), |_| Some(0));
        hub.dispatch(change(a, Property::TransitionProgress(1.)), |_| Some(0));
        assert_eq!(sub.receiver().len(), 2);
        assert_eq!(
            sub.try_recv().map(|c| c.property),
            Some(Property::Showing(true))
        );
        assert_eq!(
            sub.try_recv().map(|c| c.property),
            Some(Property::TransitionProgress(1.))
        );
        assert_eq!(sub.try_recv(), None);
        assert!(!sub.is_closed());
    }

    #[test]
    fn transaction_flags() {
        assert!(!Transaction::immediate().is_animated());
        assert!(Transaction::animated(AnimationCurve::Default).is_animated());
    }
}
