//! Projections of the back stack tail.

use crate::{
    history::Entry,
    routable::{Catalog, Screen},
};

/// The screen whose tab is selected while `tail` is visible.
///
/// A pure function of the tail's route string: the prefix before the first `/` is looked up in
/// the catalog, so a detail entry such as `Accounts/Checking` lights the `Accounts` tab.
///
/// ```rust
/// # use rally_router::prelude::*;
/// let tail = Entry::new(
///     Screen::SingleAccount,
///     ArgumentBinding::new().with("name", "Checking"),
/// )
/// .unwrap();
/// assert_eq!(current_screen(&tail), Screen::Accounts);
/// ```
pub fn current_screen(tail: &Entry) -> Screen {
    Catalog::from_route(Some(&tail.route_string()))
}
