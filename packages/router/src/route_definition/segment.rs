use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::ArgumentError;

/// Characters escaped when a value is substituted into a single path segment.
///
/// `/` and `%` are always escaped, so an encoded value never spans two segments and decoding it
/// once gives back the original value.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// A single segment of a route template.
///
/// A segment refers to the value between two `/` in the template. For example
/// `Accounts/{name}` contains two segments: `Static("Accounts")` and `Parameter("name")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSegment<'a> {
    /// A literal segment that must match exactly.
    Static(&'a str),
    /// A `{name}` placeholder capturing exactly one segment.
    Parameter(&'a str),
}

/// Classifies a template segment.
///
/// ```rust
/// # use rally_router::route_definition::{classify_segment, TemplateSegment};
/// assert_eq!(classify_segment("Accounts"), TemplateSegment::Static("Accounts"));
/// assert_eq!(classify_segment("{name}"), TemplateSegment::Parameter("name"));
/// ```
pub fn classify_segment(segment: &str) -> TemplateSegment<'_> {
    match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(name) => TemplateSegment::Parameter(name),
        None => TemplateSegment::Static(segment),
    }
}

/// Percent-encodes `value` so it can be substituted into one path segment.
///
/// ```rust
/// # use rally_router::route_definition::encode_segment;
/// assert_eq!(encode_segment("Home Savings"), "Home%20Savings");
/// assert_eq!(encode_segment("a/b"), "a%2Fb");
/// ```
pub fn encode_segment(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, PATH_SEGMENT).into()
}

/// Percent-decodes a captured path segment.
pub fn decode_segment(raw: &str) -> Result<Cow<'_, str>, ArgumentError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| ArgumentError::NotUtf8)
}
