//! Navigation stacks for declarative UI trees.
//!
//! # Conceptual overview
//! A UI hierarchy declares *slots*: places that show some default content, and that can be
//! navigated to show alternative content instead. Slots are addressed by identifier. A single
//! [`NavigationStackModel`] is shared by every slot of a hierarchy and records which slots are
//! currently navigated.
//!
//! ## Nodes
//! Every navigation creates a node that is appended to the top of the stack, so a chain of nodes
//! describes a path through nested slots. The *leaf* is the last node of the run of active nodes
//! from the root; it is what "back" navigates away from. Hiding a node in the middle of the chain
//! makes every node after it unreachable; such stale nodes are dropped the next time something
//! is shown.
//!
//! ## Showing and precede
//! Each node has two showing flags. The precede flag always changes first and without animation,
//! and tells renderers which branch to mount. The actual showing flag and the transition progress
//! change afterwards, inside the animation the node was shown (or hidden) with. Renderers that
//! diff their trees need the branch before the animated value changes, otherwise a frame of the
//! wrong content is visible.
//!
//! ## Observing
//! The model doesn't call back into renderers. Instead, changes are queued on
//! [`Subscription`]s in the order they happened, either for the whole model or for one node and
//! everything after it.
//!
//! ## Errors
//! Showing a slot that is already showing, or hiding something that isn't there, is a
//! [`NavigationError`]. Models created with [`ErrorPolicy::Lenient`] ignore such calls instead.

mod animation;
mod binding;
mod config;
mod content;
mod convenience;
mod error;
mod lifecycle;
mod model;
mod node;
mod observe;
mod slot;
pub mod transition;

pub use animation::{
    AnimationCurve, NavigationAnimation, DEFAULT_DURATION, Z_INDEX_BEHIND, Z_INDEX_IN_FRONT,
};
pub use binding::ShowingBinding;
pub use config::NavigationConfig;
pub use content::{ContentProducer, LifecycleAction};
pub use error::{ErrorPolicy, NavigationError, Target};
pub use lifecycle::AnimationCompletion;
pub use model::{NavigationModel, NavigationStackModel, SlotState};
pub use node::{NodeChain, NodeId, StackNode, PROGRESS_TO_ALTERNATIVE, PROGRESS_TO_DEFAULT};
pub use observe::{Change, Property, Scope, Subscription, Transaction};
pub use slot::{Branch, NavigationSlot, Plane, PlaneRole, SlotFrame};
pub use transition::Transition;
