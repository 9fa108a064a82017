//! Navigation history.
//!
//! The [`BackStack`] stores [`Entry`]s and publishes its tail to observers. It is the single
//! source of truth for what is on screen: the current screen and the selected tab are always
//! derived from its tail, never stored next to it.

mod back_stack;
mod entry;
mod saved;
mod signal;

pub use back_stack::*;
pub use entry::*;
pub use saved::*;
pub use signal::Subscription;
