use tracing::debug;

use crate::{
    error::NavigationError,
    routable::{Catalog, Screen},
    service::Navigator,
};

/// One tab as the tab row presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    /// The tab's screen.
    pub screen: Screen,
    /// Text shown on the tab.
    pub label: &'static str,
    /// Icon identifier shown on the tab.
    pub icon: &'static str,
    /// Whether this tab is highlighted.
    pub selected: bool,
}

/// The row of top-level tabs.
///
/// The tab row holds no navigation state of its own. Which tab is selected is derived from the
/// current screen on every call to [`TabRow::tabs`], and selecting a tab goes through the
/// [`Navigator`].
///
/// ```rust
/// # use rally_router::prelude::*;
/// let mut navigator = Navigator::new();
/// let row = TabRow::new();
///
/// row.select(&mut navigator, Screen::Bills).unwrap();
/// let selected: Vec<_> = row
///     .tabs(navigator.current_screen())
///     .into_iter()
///     .filter(|tab| tab.selected)
///     .map(|tab| tab.screen)
///     .collect();
/// assert_eq!(selected, [Screen::Bills]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TabRow {
    tabs: &'static [Screen],
}

impl Default for TabRow {
    fn default() -> Self {
        Self {
            tabs: Catalog::all_tabs(),
        }
    }
}

impl TabRow {
    /// A tab row over every tab in the catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tabs in display order, with the owner of `current` selected.
    pub fn tabs(&self, current: Screen) -> Vec<Tab> {
        let selected = current.owner();
        self.tabs
            .iter()
            .map(|&screen| Tab {
                screen,
                label: screen.label(),
                icon: screen.icon(),
                selected: screen == selected,
            })
            .collect()
    }

    /// Navigate to `screen`'s tab.
    ///
    /// Only tabs can be selected; anything else is an [`NavigationError::UnknownRoute`].
    pub fn select(&self, navigator: &mut Navigator, screen: Screen) -> Result<(), NavigationError> {
        if !self.tabs.contains(&screen) {
            debug!("{screen} is not in the tab row");
            return Err(NavigationError::unknown_route(screen.name()));
        }

        navigator.navigate(screen.template().as_str())
    }
}
