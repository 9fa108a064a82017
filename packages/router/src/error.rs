//! Errors reported by navigation and process restore.
//!
//! None of these are fatal. Every failing operation leaves the back stack untouched, so callers
//! are free to ignore an error (a stray deep link) or surface it to the user.

use thiserror::Error;

/// Why an argument was rejected while building a back stack entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A required parameter has no value.
    #[error("required parameter is missing")]
    Missing,

    /// The value is empty after percent-decoding.
    #[error("value is empty")]
    Empty,

    /// The value is not valid UTF-8 after percent-decoding.
    #[error("value is not valid UTF-8 after percent-decoding")]
    NotUtf8,

    /// The route string spells the value differently from its canonical encoding, e.g. `a b`
    /// or `Chec%6Bing`.
    #[error("value is not in canonical percent-encoding")]
    NotCanonical,

    /// The route does not declare a parameter with this name.
    #[error("parameter is not declared by the route")]
    Unexpected,
}

/// An error reported by the [`Navigator`](crate::prelude::Navigator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No route template matches the route string.
    #[error("no route matches `{route}`")]
    UnknownRoute {
        /// The rejected route string.
        route: String,
    },

    /// A parameter is missing, empty, undeclared or not of its declared type.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// The parameter name.
        name: String,
        /// What was wrong with it.
        reason: ArgumentError,
    },

    /// The URI matches no registered deep link pattern.
    #[error("no deep link matches `{uri}`")]
    NoMatchingDeepLink {
        /// The rejected URI.
        uri: String,
    },

    /// Pop was requested while only the root entry is left.
    #[error("the root entry cannot be popped")]
    EmptyStack,
}

impl NavigationError {
    pub(crate) fn unknown_route(route: impl Into<String>) -> Self {
        Self::UnknownRoute {
            route: route.into(),
        }
    }

    pub(crate) fn invalid_argument(name: impl Into<String>, reason: ArgumentError) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason,
        }
    }
}

/// An error reported while restoring a saved back stack.
#[derive(Debug, Error)]
pub enum RestoreError {
    /// The blob is not a saved back stack.
    #[error("failed to decode saved back stack: {0}")]
    Decode(#[from] serde_json::Error),

    /// The saved back stack has no entries.
    #[error("saved back stack is empty")]
    Empty,

    /// The first saved entry is not the start destination.
    #[error("saved back stack is rooted at `{template}` instead of the start destination")]
    InvalidRoot {
        /// The template found at the root.
        template: String,
    },

    /// A saved entry does not describe a valid route.
    #[error("saved entry {index} is invalid: {source}")]
    InvalidEntry {
        /// Position of the entry in the saved stack.
        index: usize,
        /// Why the entry was rejected.
        #[source]
        source: NavigationError,
    },
}
