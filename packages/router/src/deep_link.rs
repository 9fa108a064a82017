//! Translation of external URIs into back stack entries.
//!
//! A deep link pattern such as `rally://Accounts/{name}` is matched structurally: the scheme and
//! authority must be equal, literal path segments must be equal, and every `{param}` captures
//! exactly one non-empty path segment. Query and fragment are ignored. Patterns are tried in
//! catalog order and the first structural match wins.

use std::fmt::{self, Display};

use tracing::{debug, trace};
use url::Url;

use crate::{
    error::NavigationError,
    history::Entry,
    routable::Catalog,
    route_definition::{ArgumentBinding, RouteTemplate},
};

/// A URI template bound to a route template, sharing its parameter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeepLinkPattern(&'static str);

impl DeepLinkPattern {
    /// Wrap a pattern of the form `scheme://authority/path`.
    pub const fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    /// The pattern as written.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// The URI scheme, e.g. `rally`.
    pub fn scheme(&self) -> &'static str {
        self.split().0
    }

    /// The URI authority, e.g. `Accounts`.
    pub fn authority(&self) -> &'static str {
        self.split().1
    }

    /// The path part of the pattern, matched like a route template.
    pub fn path(&self) -> RouteTemplate {
        RouteTemplate::new(self.split().2)
    }

    fn split(&self) -> (&'static str, &'static str, &'static str) {
        let (scheme, rest) = self.0.split_once("://").unwrap_or(("", self.0));
        let (authority, path) = rest.split_once('/').unwrap_or((rest, ""));
        (scheme, authority, path)
    }

    /// Match a URI, returning the raw (still percent-encoded) captures.
    ///
    /// `None` when the URI does not parse or does not structurally match the pattern.
    pub fn captures<'u>(&self, uri: &'u str) -> Option<Vec<(&'static str, &'u str)>> {
        self.matches(&RawLink::parse(uri).ok()?)
    }

    fn matches<'u>(&self, link: &RawLink<'u>) -> Option<Vec<(&'static str, &'u str)>> {
        let url = &link.url;
        if !url.scheme().eq_ignore_ascii_case(self.scheme())
            || url.host_str() != Some(self.authority())
            || !url.username().is_empty()
            || url.password().is_some()
            || url.port().is_some()
        {
            return None;
        }

        let captures = self.path().captures(link.path)?;

        captures
            .iter()
            .all(|(_, raw)| !raw.is_empty())
            .then_some(captures)
    }
}

/// A URI prepared for matching.
///
/// The parsed [`Url`] is only consulted for scheme and authority. Path segments are taken from
/// the input as written, because `Url` resolves `.` and `..` segments.
struct RawLink<'u> {
    url: Url,
    path: &'u str,
}

impl<'u> RawLink<'u> {
    fn parse(uri: &'u str) -> Result<Self, url::ParseError> {
        let uri = uri.trim_matches(|c: char| c <= ' ');
        let url = Url::parse(uri)?;
        Ok(Self {
            url,
            path: raw_path(uri),
        })
    }
}

/// The path of `uri` after the authority, without its leading `/`, query or fragment.
fn raw_path(uri: &str) -> &str {
    let after_scheme = uri.split_once("://").map_or("", |(_, rest)| rest);
    let before_query = after_scheme
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    before_query
        .split_once('/')
        .map_or("", |(_authority, path)| path)
}

impl Display for DeepLinkPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Resolve a URI against every deep link pattern in the catalog.
///
/// On success the returned entry's template is the matched pattern's route template and its
/// binding holds the percent-decoded captures.
///
/// ```rust
/// # use rally_router::{deep_link, prelude::*};
/// let entry = deep_link::resolve("rally://Accounts/Home%20Savings").unwrap();
/// assert_eq!(entry.screen(), Screen::SingleAccount);
/// assert_eq!(entry.argument("name"), Some("Home Savings"));
///
/// assert!(matches!(
///     deep_link::resolve("rally://Unknown/x"),
///     Err(NavigationError::NoMatchingDeepLink { .. })
/// ));
/// ```
pub fn resolve(uri: &str) -> Result<Entry, NavigationError> {
    let no_match = || NavigationError::NoMatchingDeepLink {
        uri: uri.to_string(),
    };

    let link = RawLink::parse(uri).map_err(|err| {
        debug!("deep link {uri:?} is not a valid URI: {err}");
        no_match()
    })?;

    let (screen, captures) = Catalog::screens()
        .iter()
        .find_map(|screen| {
            let pattern = screen.deep_link()?;
            trace!("matching {uri:?} against {pattern}");
            pattern.matches(&link).map(|captures| (*screen, captures))
        })
        .ok_or_else(no_match)?;

    let args = ArgumentBinding::decode(captures)?;
    Entry::new(screen, args)
}
