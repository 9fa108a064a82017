#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

use rally_router::prelude::*;
use tracing::{debug, info, Level};

pub mod data;
pub mod logger;

pub use data::{Account, Bill, UserData};

/// What the nav host renders for a back stack entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScreenContent {
    /// The summary screen.
    Overview {
        /// Accounts to summarize.
        accounts: &'static [Account],
        /// Bills to summarize.
        bills: &'static [Bill],
    },
    /// Every account.
    Accounts(&'static [Account]),
    /// Every bill.
    Bills(&'static [Bill]),
    /// One account. `None` when no account has the requested name; the view shows an empty
    /// state.
    SingleAccount(Option<&'static Account>),
}

impl ScreenContent {
    /// Map an entry to its content.
    pub fn for_entry(entry: &Entry) -> Self {
        match entry.screen() {
            Screen::Overview => ScreenContent::Overview {
                accounts: UserData::accounts(),
                bills: UserData::bills(),
            },
            Screen::Accounts => ScreenContent::Accounts(UserData::accounts()),
            Screen::Bills => ScreenContent::Bills(UserData::bills()),
            Screen::SingleAccount => {
                let account = entry.argument("name").and_then(UserData::account);
                if account.is_none() {
                    debug!("no account for {entry}");
                }
                ScreenContent::SingleAccount(account)
            }
        }
    }
}

/// Configuration for a [`RallyApp`].
///
/// ```rust
/// # use rally::RallyConfig;
/// # use rally_router::prelude::*;
/// let cfg = RallyConfig::default()
///     .navigator(NavigatorConfig::default().deep_link_policy(DeepLinkPolicy::Push))
///     .log_level(tracing::Level::DEBUG);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RallyConfig {
    navigator: NavigatorConfig,
    log_level: Option<Level>,
}

impl RallyConfig {
    /// Configure the navigator.
    pub fn navigator(self, navigator: NavigatorConfig) -> Self {
        Self { navigator, ..self }
    }

    /// Install a logger with this level when the app is launched.
    ///
    /// No logger is installed by default.
    pub fn log_level(self, level: Level) -> Self {
        Self {
            log_level: Some(level),
            ..self
        }
    }
}

/// The app shell: a navigator, the tab row and the handlers for user intents.
#[derive(Debug, Default)]
pub struct RallyApp {
    navigator: Navigator,
    tab_row: TabRow,
}

impl RallyApp {
    /// Build an app without touching global state.
    pub fn new(config: RallyConfig) -> Self {
        Self {
            navigator: Navigator::with_config(config.navigator),
            tab_row: TabRow::new(),
        }
    }

    /// Build an app, installing the logger if the config asks for one.
    ///
    /// A logger that is already installed is kept.
    pub fn launch(config: RallyConfig) -> Self {
        if let Some(level) = config.log_level {
            if let Err(err) = logger::init(level) {
                debug!("keeping existing logger: {err}");
            }
        }

        info!("launching rally");
        Self::new(config)
    }

    /// The navigator driving the app.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Observe the visible entry. See [`Navigator::observe_tail`].
    pub fn observe_tail(&mut self, observer: impl Fn(&Entry) + 'static) -> Subscription {
        self.navigator.observe_tail(observer)
    }

    /// What the nav host shows right now.
    pub fn content(&self) -> ScreenContent {
        ScreenContent::for_entry(self.navigator.tail())
    }

    /// The tab row as it should be drawn right now.
    pub fn tabs(&self) -> Vec<Tab> {
        self.tab_row.tabs(self.navigator.current_screen())
    }

    /// The screen whose tab is selected.
    pub fn current_screen(&self) -> Screen {
        self.navigator.current_screen()
    }

    /// The user tapped a tab.
    pub fn select_tab(&mut self, screen: Screen) -> Result<(), NavigationError> {
        self.tab_row.select(&mut self.navigator, screen)
    }

    /// "See all" on the overview's accounts card.
    pub fn see_all_accounts(&mut self) -> Result<(), NavigationError> {
        self.navigator.navigate(Screen::Accounts.template().as_str())
    }

    /// "See all" on the overview's bills card.
    pub fn see_all_bills(&mut self) -> Result<(), NavigationError> {
        self.navigator.navigate(Screen::Bills.template().as_str())
    }

    /// The user tapped an account row.
    pub fn open_account(&mut self, name: &str) -> Result<(), NavigationError> {
        self.navigator
            .navigate_to_detail(Screen::Accounts, ArgumentBinding::new().with("name", name))
    }

    /// The system back button.
    ///
    /// Returns `false` at the start destination, where the host should close the app.
    pub fn back(&mut self) -> bool {
        self.navigator.pop().is_ok()
    }

    /// A URI delivered by the host OS.
    pub fn handle_intent(&mut self, uri: &str) -> Result<(), NavigationError> {
        self.navigator.handle_deep_link(uri)
    }

    /// Serialize the back stack for the host to keep across process death.
    pub fn save_instance_state(&self) -> serde_json::Result<String> {
        self.navigator.save().to_json()
    }

    /// Restore a back stack saved with [`RallyApp::save_instance_state`].
    ///
    /// On error the current back stack is kept.
    pub fn restore_instance_state(&mut self, blob: &str) -> Result<(), RestoreError> {
        let saved = SavedBackStack::from_json(blob)?;
        self.navigator.restore(saved)
    }
}
