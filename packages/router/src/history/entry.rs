use std::fmt::{self, Display};

use crate::{
    error::{ArgumentError, NavigationError},
    routable::Screen,
    route_definition::{ArgumentBinding, RouteTemplate},
};

/// One step in the navigation history: a screen and the arguments bound to its template.
///
/// An [`Entry`] can only be built through [`Entry::new`], which guarantees that every required
/// parameter is bound to a valid value and that no undeclared parameter is bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    screen: Screen,
    args: ArgumentBinding,
}

impl Entry {
    /// Build an entry, validating `args` against the screen's argument schema.
    ///
    /// ```rust
    /// # use rally_router::prelude::*;
    /// let entry = Entry::new(
    ///     Screen::SingleAccount,
    ///     ArgumentBinding::new().with("name", "Home Savings"),
    /// )
    /// .unwrap();
    /// assert_eq!(entry.route_string(), "Accounts/Home%20Savings");
    ///
    /// assert!(Entry::new(Screen::SingleAccount, ArgumentBinding::new()).is_err());
    /// ```
    pub fn new(screen: Screen, args: ArgumentBinding) -> Result<Self, NavigationError> {
        let schema = screen.parameters();

        for parameter in schema {
            match args.get(parameter.name) {
                Some(value) => parameter
                    .kind
                    .validate(value)
                    .map_err(|reason| NavigationError::invalid_argument(parameter.name, reason))?,
                None if parameter.required => {
                    return Err(NavigationError::invalid_argument(
                        parameter.name,
                        ArgumentError::Missing,
                    ))
                }
                None => {}
            }
        }

        if let Some(extra) = args
            .names()
            .find(|name| !schema.iter().any(|parameter| parameter.name == *name))
        {
            return Err(NavigationError::invalid_argument(
                extra,
                ArgumentError::Unexpected,
            ));
        }

        Ok(Self { screen, args })
    }

    /// The start destination with an empty binding.
    pub fn root() -> Self {
        Self {
            screen: Screen::Overview,
            args: ArgumentBinding::new(),
        }
    }

    /// The screen this entry shows.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The template of the entry's screen.
    pub fn template(&self) -> RouteTemplate {
        self.screen.template()
    }

    /// The bound arguments.
    pub fn args(&self) -> &ArgumentBinding {
        &self.args
    }

    /// A single bound argument.
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.args.get(name)
    }

    /// The template with every parameter percent-encoded and substituted.
    pub fn route_string(&self) -> String {
        // every placeholder is bound once `Entry::new` has accepted the binding
        self.template().render(&self.args).unwrap_or_default()
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route_string())
    }
}
