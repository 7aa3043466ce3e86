//! Transition descriptors.
//!
//! These only describe how content should enter and leave; applying them is up to the renderer.

use cgmath::{Point2, Vector2};
use core::any::Any;
use core::fmt;
use std::sync::Arc;

/// An edge of a slot's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Leading,
    Bottom,
    Trailing,
}

impl Edge {
    /// Unit offset pointing from the slot's center towards this edge.
    ///
    /// Uses the slot coordinate system, where positive y points down.
    pub fn unit_offset(self) -> Vector2<f64> {
        match self {
            Edge::Top => Vector2::new(0., -1.),
            Edge::Leading => Vector2::new(-1., 0.),
            Edge::Bottom => Vector2::new(0., 1.),
            Edge::Trailing => Vector2::new(1., 0.),
        }
    }

    pub fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Leading => Edge::Trailing,
            Edge::Bottom => Edge::Top,
            Edge::Trailing => Edge::Leading,
        }
    }
}

/// Shapes used to clip content while it is being revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipShape {
    /// A circle growing from the center until it covers the bounds.
    Circle,
    /// A rectangle growing from the center.
    Rectangle,
    /// Stripes that widen until they cover the bounds.
    Stripes { count: u32, vertical: bool },
}

/// A user-provided transition the core doesn't know about.
#[derive(Clone)]
pub struct CustomTransition {
    pub name: &'static str,
    pub payload: Arc<dyn Any + Send + Sync>,
}

impl CustomTransition {
    pub fn new<T: Any + Send + Sync>(name: &'static str, payload: T) -> Self {
        CustomTransition {
            name,
            payload: Arc::new(payload),
        }
    }

    /// For downcasting.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl fmt::Debug for CustomTransition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CustomTransition({})", self.name)
    }
}

/// Describes how a content plane appears and disappears.
#[derive(Debug, Clone)]
pub enum Transition {
    /// No transition at all.
    Identity,
    /// Keeps the content visible and unchanged for the duration of the transition.
    ///
    /// Unlike `Identity`, renderers must still treat this as an active transition so the content
    /// is kept around while its counterpart animates.
    Static,
    /// Moves the content in from/out to an edge.
    Move(Edge),
    /// Offsets the content by a fixed amount in points.
    Offset(Vector2<f64>),
    /// Fades the content.
    Opacity,
    /// Scales the content from `scale` around a unit-space anchor.
    Scale { scale: f64, anchor: Point2<f64> },
    Blur { radius: f64 },
    Brightness(f64),
    Contrast(f64),
    Saturation(f64),
    HueRotation { degrees: f64 },
    /// Reveals the content through a growing clip shape.
    Clip(ClipShape),
    /// Applies all transitions at once.
    Combined(Vec<Transition>),
    /// Uses different transitions for insertion and removal.
    Asymmetric {
        insertion: Box<Transition>,
        removal: Box<Transition>,
    },
    Custom(CustomTransition),
}

impl Default for Transition {
    fn default() -> Self {
        Transition::Static
    }
}

impl Transition {
    /// Scales around the center.
    pub fn scale(scale: f64) -> Transition {
        Transition::Scale {
            scale,
            anchor: Point2::new(0.5, 0.5),
        }
    }

    pub fn asymmetric(insertion: Transition, removal: Transition) -> Transition {
        Transition::Asymmetric {
            insertion: Box::new(insertion),
            removal: Box::new(removal),
        }
    }

    /// Combines this transition with another.
    pub fn combined(self, other: Transition) -> Transition {
        match self {
            Transition::Combined(mut list) => {
                list.push(other);
                Transition::Combined(list)
            }
            this => Transition::Combined(vec![this, other]),
        }
    }

    pub fn is_identity(&self) -> bool {
        match self {
            Transition::Identity => true,
            Transition::Combined(list) => list.iter().all(Transition::is_identity),
            _ => false,
        }
    }
}
