//! Model configuration.

use crate::error::ErrorPolicy;

/// Configuration of a [`NavigationStackModel`](crate::NavigationStackModel).
///
/// Fixed for the lifetime of the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationConfig {
    /// How misuse of slot identifiers is reported.
    pub error_policy: ErrorPolicy,
}

impl NavigationConfig {
    /// Swallows all navigation errors.
    pub fn lenient() -> Self {
        NavigationConfig {
            error_policy: ErrorPolicy::Lenient,
        }
    }
}
