use tracing::{debug, warn};

use crate::{
    deep_link,
    error::{NavigationError, RestoreError},
    history::{BackStack, Entry, SavedBackStack, Subscription},
    routable::{Catalog, Screen},
    route_definition::ArgumentBinding,
    router_cfg::{DeepLinkPolicy, NavigatorConfig},
    state::current_screen,
};

/// The core of the router.
///
/// The [`Navigator`] owns the [`BackStack`] and is the only thing allowed to change it. Every
/// operation either commits exactly one mutation and notifies tail observers, or reports an
/// error and leaves the back stack as it was.
///
/// All operations are synchronous and meant to run on the thread that owns the navigator.
/// Input from elsewhere (a deep link delivered by the host OS) has to be marshalled onto that
/// thread first.
///
/// ```rust
/// # use rally_router::prelude::*;
/// let mut navigator = Navigator::new();
/// assert_eq!(navigator.current_screen(), Screen::Overview);
///
/// navigator.navigate("Accounts").unwrap();
/// navigator
///     .navigate_to_detail(Screen::Accounts, ArgumentBinding::new().with("name", "Checking"))
///     .unwrap();
/// assert_eq!(navigator.tail().route_string(), "Accounts/Checking");
/// assert_eq!(navigator.current_screen(), Screen::Accounts);
///
/// navigator.pop().unwrap();
/// assert_eq!(navigator.tail().route_string(), "Accounts");
/// ```
#[derive(Debug, Default)]
pub struct Navigator {
    stack: BackStack,
    config: NavigatorConfig,
}

impl Navigator {
    /// A navigator at the start destination with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A navigator at the start destination.
    pub fn with_config(config: NavigatorConfig) -> Self {
        Self {
            stack: BackStack::new(),
            config,
        }
    }

    /// A navigator whose back stack is restored from `saved`.
    pub fn restored(saved: SavedBackStack, config: NavigatorConfig) -> Result<Self, RestoreError> {
        let mut navigator = Self::with_config(config);
        navigator.restore(saved)?;
        Ok(navigator)
    }

    /// The configuration this navigator was built with.
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Read-only access to the back stack.
    pub fn back_stack(&self) -> &BackStack {
        &self.stack
    }

    /// The visible entry.
    pub fn tail(&self) -> &Entry {
        self.stack.tail()
    }

    /// The screen whose tab is selected. Derived from the tail, never stored.
    pub fn current_screen(&self) -> Screen {
        current_screen(self.stack.tail())
    }

    /// Observe the tail. See [`BackStack::observe_tail`].
    pub fn observe_tail(&mut self, observer: impl Fn(&Entry) + 'static) -> Subscription {
        self.stack.observe_tail(observer)
    }

    /// Navigate to a route string such as `Bills` or `Accounts/Home%20Savings`.
    ///
    /// The route is matched against the catalog templates in order, parameter segments are
    /// percent-decoded and validated, and a fresh entry is pushed. Parameter segments must be
    /// encoded the way [`Entry::route_string`] encodes them, so the new tail's route string is
    /// always `route`. Navigating to the current route pushes again; there is no deduplication.
    pub fn navigate(&mut self, route: &str) -> Result<(), NavigationError> {
        let entry = resolve_route(route).inspect_err(|err| debug!("navigate({route:?}): {err}"))?;
        debug!("navigate to {entry}");
        self.stack.push(entry);
        Ok(())
    }

    /// Navigate to the detail screen owned by `screen`, e.g. a single account from `Accounts`.
    ///
    /// Every argument is percent-encoded into the route string, so values may contain `/`, `%`
    /// or non-ASCII characters and still come back unchanged from [`Entry::argument`].
    pub fn navigate_to_detail(
        &mut self,
        screen: Screen,
        args: ArgumentBinding,
    ) -> Result<(), NavigationError> {
        let detail = Catalog::detail_of(screen).ok_or_else(|| {
            debug!("{screen} has no detail screen");
            NavigationError::unknown_route(screen.name())
        })?;

        let route = Entry::new(detail, args)?.route_string();
        self.navigate(&route)
    }

    /// Remove the visible entry, returning it.
    ///
    /// The root cannot be popped: at the root this reports [`NavigationError::EmptyStack`] and
    /// does nothing.
    pub fn pop(&mut self) -> Result<Entry, NavigationError> {
        self.stack.pop().ok_or_else(|| {
            debug!("pop at root ignored");
            NavigationError::EmptyStack
        })
    }

    /// Remove everything above the root.
    ///
    /// Reports [`NavigationError::EmptyStack`] when already at the root.
    pub fn pop_to_root(&mut self) -> Result<(), NavigationError> {
        if !self.stack.can_go_back() {
            return Err(NavigationError::EmptyStack);
        }

        self.stack.reset_to_root();
        Ok(())
    }

    /// Handle an external URI such as `rally://Accounts/Checking`.
    ///
    /// With [`DeepLinkPolicy::SynthesizeParent`] a deep link to a detail screen leaves the stack
    /// as `[Overview, detail]`, so going back returns to the start destination. Deep links to
    /// tabs, and every deep link under [`DeepLinkPolicy::Push`], are pushed.
    pub fn handle_deep_link(&mut self, uri: &str) -> Result<(), NavigationError> {
        let entry =
            deep_link::resolve(uri).inspect_err(|err| warn!("ignoring deep link: {err}"))?;

        match self.config.deep_link_policy {
            DeepLinkPolicy::SynthesizeParent if !entry.screen().is_tab() => {
                debug!("deep link {uri:?} replaces the back stack with [Overview, {entry}]");
                self.stack.replace_above_root(vec![entry]);
            }
            _ => {
                debug!("deep link {uri:?} pushes {entry}");
                self.stack.push(entry);
            }
        }

        Ok(())
    }

    /// Snapshot the back stack for process restore.
    pub fn save(&self) -> SavedBackStack {
        SavedBackStack::capture(&self.stack)
    }

    /// Replace the back stack with a saved one.
    ///
    /// Observers are notified exactly once, with the restored tail. On error the back stack is
    /// left unchanged.
    pub fn restore(&mut self, saved: SavedBackStack) -> Result<(), RestoreError> {
        let entries = saved.into_entries()?;
        debug!("restoring {} entries above root", entries.len());
        self.stack.replace_above_root(entries);
        Ok(())
    }
}

/// Match `route` against the catalog and build the entry it describes.
fn resolve_route(route: &str) -> Result<Entry, NavigationError> {
    let (screen, captures) = Catalog::screens()
        .iter()
        .find_map(|screen| {
            screen
                .template()
                .captures(route)
                .map(|captures| (*screen, captures))
        })
        .ok_or_else(|| NavigationError::unknown_route(route))?;

    Entry::new(screen, ArgumentBinding::decode_canonical(captures)?)
}
