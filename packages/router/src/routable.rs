//! The route catalog: the closed set of screens the app can show.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    deep_link::DeepLinkPattern,
    error::NavigationError,
    route_definition::{Parameter, RouteTemplate},
};

/// A member of the closed set of navigable destinations.
///
/// `Overview`, `Accounts` and `Bills` are tabs. `SingleAccount` is a detail screen owned by the
/// `Accounts` tab; it is only reachable through parameterized navigation or a deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Summary of accounts and bills. The start destination.
    Overview,
    /// All accounts.
    Accounts,
    /// All bills.
    Bills,
    /// One account, identified by name.
    SingleAccount,
}

const SCREENS: &[Screen] = &[
    Screen::Overview,
    Screen::Accounts,
    Screen::Bills,
    Screen::SingleAccount,
];

const TABS: &[Screen] = &[Screen::Overview, Screen::Accounts, Screen::Bills];

const SINGLE_ACCOUNT_PARAMETERS: &[Parameter] = &[Parameter::string("name")];

impl Screen {
    /// The stable name of the screen.
    pub const fn name(self) -> &'static str {
        match self {
            Screen::Overview => "Overview",
            Screen::Accounts => "Accounts",
            Screen::Bills => "Bills",
            Screen::SingleAccount => "SingleAccount",
        }
    }

    /// Text shown for the screen in the tab row and app bar.
    pub const fn label(self) -> &'static str {
        match self {
            Screen::Overview => "Overview",
            Screen::Accounts => "Accounts",
            Screen::Bills => "Bills",
            Screen::SingleAccount => "Account",
        }
    }

    /// Material icon identifier. Detail screens use their owning tab's icon.
    pub const fn icon(self) -> &'static str {
        match self.owner() {
            Screen::Overview => "PieChart",
            Screen::Accounts | Screen::SingleAccount => "AttachMoney",
            Screen::Bills => "MoneyOff",
        }
    }

    /// Whether the screen appears in the tab row.
    pub const fn is_tab(self) -> bool {
        !matches!(self, Screen::SingleAccount)
    }

    /// The tab that is lit while this screen is visible.
    pub const fn owner(self) -> Screen {
        match self {
            Screen::SingleAccount => Screen::Accounts,
            tab => tab,
        }
    }

    /// The route template of the screen.
    pub const fn template(self) -> RouteTemplate {
        match self {
            Screen::Overview => RouteTemplate::new("Overview"),
            Screen::Accounts => RouteTemplate::new("Accounts"),
            Screen::Bills => RouteTemplate::new("Bills"),
            Screen::SingleAccount => RouteTemplate::new("Accounts/{name}"),
        }
    }

    /// The deep link pattern bound to the screen's template, if any.
    pub const fn deep_link(self) -> Option<DeepLinkPattern> {
        match self {
            Screen::SingleAccount => Some(DeepLinkPattern::new("rally://Accounts/{name}")),
            _ => None,
        }
    }

    /// The argument schema of the screen's template.
    pub const fn parameters(self) -> &'static [Parameter] {
        match self {
            Screen::SingleAccount => SINGLE_ACCOUNT_PARAMETERS,
            _ => &[],
        }
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SCREENS
            .iter()
            .copied()
            .find(|screen| screen.name() == s)
            .ok_or_else(|| NavigationError::unknown_route(s))
    }
}

/// Lookups over the process-wide screen catalog.
///
/// The catalog is immutable static data and the order of [`Catalog::screens`] is the order in
/// which route strings and deep links are matched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    /// Every screen, in matching order.
    pub fn screens() -> &'static [Screen] {
        SCREENS
    }

    /// The tabbed screens, in presentation order.
    pub fn all_tabs() -> &'static [Screen] {
        TABS
    }

    /// The screen named by the prefix of `route` before the first `/`.
    ///
    /// Falls back to [`Screen::Overview`] when there is no route or the prefix is unknown. A
    /// detail route resolves to its owning tab's name, which is what lights that tab.
    ///
    /// ```rust
    /// # use rally_router::prelude::*;
    /// assert_eq!(Catalog::from_route(Some("Accounts/Checking")), Screen::Accounts);
    /// assert_eq!(Catalog::from_route(Some("Bills")), Screen::Bills);
    /// assert_eq!(Catalog::from_route(Some("Nope")), Screen::Overview);
    /// assert_eq!(Catalog::from_route(None), Screen::Overview);
    /// ```
    pub fn from_route(route: Option<&str>) -> Screen {
        route
            .map(|route| route.split_once('/').map_or(route, |(prefix, _)| prefix))
            .and_then(|prefix| prefix.parse().ok())
            .unwrap_or(Screen::Overview)
    }

    /// The route template of `screen`.
    pub fn template_of(screen: Screen) -> RouteTemplate {
        screen.template()
    }

    /// The deep link pattern of `screen`, if any.
    pub fn deeplink_of(screen: Screen) -> Option<DeepLinkPattern> {
        screen.deep_link()
    }

    /// The parameterized screen reached from `screen`.
    ///
    /// For a tab this is the detail screen it owns; a detail screen is its own detail.
    pub fn detail_of(screen: Screen) -> Option<Screen> {
        SCREENS
            .iter()
            .copied()
            .find(|candidate| {
                candidate.template().has_parameters() && candidate.owner() == screen.owner()
            })
    }

    /// The screen whose template is exactly `template`.
    pub fn by_template(template: &str) -> Option<Screen> {
        SCREENS
            .iter()
            .copied()
            .find(|screen| screen.template().as_str() == template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tabs_in_presentation_order() {
        assert_eq!(
            Catalog::all_tabs(),
            &[Screen::Overview, Screen::Accounts, Screen::Bills]
        );
        assert!(Catalog::all_tabs().iter().all(|s| s.is_tab()));
        assert!(!Screen::SingleAccount.is_tab());
    }

    #[test]
    fn templates() {
        let templates: Vec<_> = Catalog::screens()
            .iter()
            .map(|s| s.template().as_str())
            .collect();
        assert_eq!(
            templates,
            vec!["Overview", "Accounts", "Bills", "Accounts/{name}"]
        );
    }

    #[test]
    fn parameter_schema_matches_template_placeholders() {
        for screen in Catalog::screens() {
            let declared: Vec<_> = screen.parameters().iter().map(|p| p.name).collect();
            let placeholders: Vec<_> = screen.template().parameter_names().collect();
            assert_eq!(declared, placeholders, "{screen}");
        }
    }

    #[test]
    fn deep_links_share_parameter_names() {
        for screen in Catalog::screens() {
            if let Some(pattern) = screen.deep_link() {
                let pattern_names: Vec<_> = pattern.path().parameter_names().collect();
                let template_names: Vec<_> = screen.template().parameter_names().collect();
                assert_eq!(pattern_names, template_names, "{screen}");
            }
        }
    }

    #[test]
    fn from_route_uses_prefix() {
        assert_eq!(Catalog::from_route(Some("Overview")), Screen::Overview);
        assert_eq!(Catalog::from_route(Some("Accounts")), Screen::Accounts);
        assert_eq!(Catalog::from_route(Some("Accounts/foo")), Screen::Accounts);
        assert_eq!(Catalog::from_route(Some("Accounts/")), Screen::Accounts);
        assert_eq!(Catalog::from_route(Some("")), Screen::Overview);
    }

    #[test]
    fn detail_of() {
        assert_eq!(Catalog::detail_of(Screen::Accounts), Some(Screen::SingleAccount));
        assert_eq!(
            Catalog::detail_of(Screen::SingleAccount),
            Some(Screen::SingleAccount)
        );
        assert_eq!(Catalog::detail_of(Screen::Bills), None);
        assert_eq!(Catalog::detail_of(Screen::Overview), None);
    }

    #[test]
    fn by_template() {
        assert_eq!(
            Catalog::by_template("Accounts/{name}"),
            Some(Screen::SingleAccount)
        );
        assert_eq!(Catalog::by_template("Accounts/Checking"), None);
    }

    #[test]
    fn parse_by_name() {
        assert_eq!("Bills".parse::<Screen>(), Ok(Screen::Bills));
        assert_eq!(
            "bills".parse::<Screen>(),
            Err(NavigationError::UnknownRoute {
                route: "bills".to_string()
            })
        );
    }

    #[test]
    fn detail_uses_owner_icon() {
        assert_eq!(Screen::SingleAccount.icon(), Screen::Accounts.icon());
        assert_eq!(Screen::Bills.icon(), "MoneyOff");
    }
}
