//! Content producers and lifecycle actions.

use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;
use uuid::Uuid;

/// Lazily produces the content of a slot.
///
/// The navigation model only stores producers; renderers call [`produce`](Self::produce) as often
/// as they need to.
pub struct ContentProducer<V>(Arc<dyn Fn() -> V + Send + Sync>);

impl<V> Clone for ContentProducer<V> {
    fn clone(&self) -> Self {
        ContentProducer(Arc::clone(&self.0))
    }
}

impl<V> ContentProducer<V> {
    pub fn new<F: 'static + Fn() -> V + Send + Sync>(producer: F) -> Self {
        ContentProducer(Arc::new(producer))
    }

    /// Produces a fresh content value.
    pub fn produce(&self) -> V {
        (self.0)()
    }

    /// True if both handles share the same producer.
    pub fn ptr_eq(&self, other: &ContentProducer<V>) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<V> fmt::Debug for ContentProducer<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ContentProducer")
    }
}

/// An action performed on a lifecycle event of slot content, e.g. once it fully appeared.
///
/// Each action gets a unique id on creation so actions can be compared; clones compare equal.
pub struct LifecycleAction {
    id: Uuid,
    action: Arc<Mutex<dyn FnMut() + Send>>,
}

impl Clone for LifecycleAction {
    fn clone(&self) -> Self {
        LifecycleAction {
            id: self.id,
            action: Arc::clone(&self.action),
        }
    }
}

impl LifecycleAction {
    pub fn new<F: 'static + FnMut() + Send>(action: F) -> Self {
        LifecycleAction {
            id: Uuid::new_v4(),
            action: Arc::new(Mutex::new(action)),
        }
    }

    pub fn perform(&self) {
        let mut action = self.action.lock();
        (*action)()
    }
}

impl PartialEq for LifecycleAction {
    fn eq(&self, other: &LifecycleAction) -> bool {
        self.id == other.id
    }
}

impl Eq for LifecycleAction {}

impl fmt::Debug for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LifecycleAction({})", self.id)
    }
}
