//! Navigation errors.

use core::fmt;
use thiserror::Error;

/// What a hide or binding request was aimed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The top of the stack.
    Top,
    /// A slot, by identifier.
    Identifier(String),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Target::Top => write!(f, "top navigation view"),
            Target::Identifier(id) => write!(f, "navigation view with identifier {}", id),
        }
    }
}

/// Misuse of slot identifiers.
///
/// These are programmer errors; none of them are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// `show_view` was called for a slot that already has an active node.
    #[error("replacing showing navigation view {0} not allowed")]
    DuplicateActivation(String),

    /// There is no node to hide or bind to.
    #[error("no {0} available on the stack")]
    NoActiveTarget(Target),
}

impl NavigationError {
    pub(crate) fn duplicate<Id: fmt::Debug>(identifier: &Id) -> Self {
        NavigationError::DuplicateActivation(format!("{:?}", identifier))
    }

    pub(crate) fn no_such_view<Id: fmt::Debug>(identifier: &Id) -> Self {
        NavigationError::NoActiveTarget(Target::Identifier(format!("{:?}", identifier)))
    }

    pub(crate) fn no_top_view() -> Self {
        NavigationError::NoActiveTarget(Target::Top)
    }
}

/// How a model reacts to [`NavigationError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Errors are returned to the caller.
    Strict,
    /// Errors are logged and swallowed; the navigation simply doesn't change.
    Lenient,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        ErrorPolicy::Strict
    }
}

impl ErrorPolicy {
    /// Applies the policy to an error, returning `fallback` when lenient.
    pub(crate) fn handle<T>(self, err: NavigationError, fallback: T) -> Result<T, NavigationError> {
        match self {
            ErrorPolicy::Strict => Err(err),
            ErrorPolicy::Lenient => {
                tracing::debug!("ignoring navigation error: {}", err);
                Ok(fallback)
            }
        }
    }
}
