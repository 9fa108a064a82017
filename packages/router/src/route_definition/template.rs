use std::{
    borrow::Cow,
    fmt::{self, Display},
};

use super::{classify_segment, encode_segment, ArgumentBinding, TemplateSegment};

/// The canonical string form of a screen, possibly containing `{param}` placeholders.
///
/// Templates are static catalog data. Segments are classified on demand, so a template is just a
/// borrowed string and can be copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteTemplate(&'static str);

impl RouteTemplate {
    /// Wrap a template string.
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// The template as written, e.g. `Accounts/{name}`.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// The segments of the template, in order.
    pub fn segments(&self) -> impl Iterator<Item = TemplateSegment<'static>> {
        self.0.split('/').map(classify_segment)
    }

    /// The names of all `{param}` placeholders, in order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &'static str> {
        self.segments().filter_map(|segment| match segment {
            TemplateSegment::Parameter(name) => Some(name),
            TemplateSegment::Static(_) => None,
        })
    }

    /// Whether the template declares any parameter.
    pub fn has_parameters(&self) -> bool {
        self.parameter_names().next().is_some()
    }

    /// Structurally match a route string against the template.
    ///
    /// Literal segments must match exactly and every placeholder captures exactly one segment.
    /// Captures are returned still percent-encoded, paired with their parameter name. Empty
    /// captures are returned as well; rejecting them is up to argument validation.
    ///
    /// ```rust
    /// # use rally_router::route_definition::RouteTemplate;
    /// let template = RouteTemplate::new("Accounts/{name}");
    /// assert_eq!(
    ///     template.captures("Accounts/Home%20Savings"),
    ///     Some(vec![("name", "Home%20Savings")])
    /// );
    /// assert_eq!(template.captures("Accounts"), None);
    /// assert_eq!(template.captures("Accounts/a/b"), None);
    /// ```
    pub fn captures<'r>(&self, route: &'r str) -> Option<Vec<(&'static str, &'r str)>> {
        let mut route_segments = route.split('/');
        let mut captures = Vec::new();

        for segment in self.segments() {
            let value = route_segments.next()?;
            match segment {
                TemplateSegment::Static(literal) if literal != value => return None,
                TemplateSegment::Static(_) => {}
                TemplateSegment::Parameter(name) => captures.push((name, value)),
            }
        }

        // too specific
        if route_segments.next().is_some() {
            return None;
        }

        Some(captures)
    }

    /// Substitute `args` into the template, percent-encoding every value.
    ///
    /// `None` when a placeholder has no value in `args`. Values bound to names the template does
    /// not declare are ignored.
    ///
    /// ```rust
    /// # use rally_router::route_definition::{ArgumentBinding, RouteTemplate};
    /// let template = RouteTemplate::new("Accounts/{name}");
    /// let args = ArgumentBinding::new().with("name", "Home Savings");
    /// assert_eq!(template.render(&args).as_deref(), Some("Accounts/Home%20Savings"));
    /// assert_eq!(template.render(&ArgumentBinding::new()), None);
    /// ```
    pub fn render(&self, args: &ArgumentBinding) -> Option<String> {
        let segments = self
            .segments()
            .map(|segment| match segment {
                TemplateSegment::Static(literal) => Some(Cow::Borrowed(literal)),
                TemplateSegment::Parameter(name) => args.get(name).map(encode_segment),
            })
            .collect::<Option<Vec<_>>>()?;

        Some(segments.join("/"))
    }
}

impl Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
