use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ArgumentError, NavigationError};

use super::{decode_segment, encode_segment};

/// A mapping from parameter name to value that instantiates a route template.
///
/// Values are stored decoded. They are only percent-encoded when an entry renders its route
/// string.
///
/// ```rust
/// # use rally_router::route_definition::ArgumentBinding;
/// let args = ArgumentBinding::new().with("name", "Checking");
/// assert_eq!(args.get("name"), Some("Checking"));
/// assert_eq!(args.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentBinding(BTreeMap<String, String>);

impl ArgumentBinding {
    /// An empty binding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite a value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or overwrite a value, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Get a value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the bound parameter names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-decode raw captures from a route string or deep link.
    pub(crate) fn decode<'a>(
        captures: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, NavigationError> {
        captures
            .into_iter()
            .map(|(name, raw)| {
                decode_segment(raw)
                    .map(|value| (name.to_string(), value.into_owned()))
                    .map_err(|reason| NavigationError::invalid_argument(name, reason))
            })
            .collect()
    }

    /// Like [`ArgumentBinding::decode`], but every capture must already be in the form
    /// [`encode_segment`] produces, so rendering the binding gives back the same route string.
    pub(crate) fn decode_canonical<'a>(
        captures: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, NavigationError> {
        captures
            .into_iter()
            .map(|(name, raw)| {
                let value = decode_segment(raw)
                    .map_err(|reason| NavigationError::invalid_argument(name, reason))?;
                if encode_segment(&value) != raw {
                    return Err(NavigationError::invalid_argument(
                        name,
                        ArgumentError::NotCanonical,
                    ));
                }
                Ok((name.to_string(), value.into_owned()))
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ArgumentBinding {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_captures() {
        let args = ArgumentBinding::decode([("name", "Home%20Savings")]).unwrap();
        assert_eq!(args.get("name"), Some("Home Savings"));
    }

    #[test]
    fn decode_reports_the_failing_parameter() {
        assert_eq!(
            ArgumentBinding::decode([("name", "%C3%28")]),
            Err(NavigationError::InvalidArgument {
                name: "name".to_string(),
                reason: ArgumentError::NotUtf8,
            })
        );
    }

    #[test]
    fn decode_canonical_accepts_encoder_output() {
        let args =
            ArgumentBinding::decode_canonical([("name", "Home%20Savings%2F%25")]).unwrap();
        assert_eq!(args.get("name"), Some("Home Savings/%"));
    }

    #[test]
    fn decode_canonical_rejects_other_spellings() {
        for raw in ["Chec%6Bing", "a b", "a%", "a%2f", "쩡대리"] {
            assert_eq!(
                ArgumentBinding::decode_canonical([("name", raw)]),
                Err(NavigationError::InvalidArgument {
                    name: "name".to_string(),
                    reason: ArgumentError::NotCanonical,
                }),
                "{raw}"
            );
        }
    }

    #[test]
    fn serializes_as_a_plain_map() {
        let args = ArgumentBinding::new().with("name", "Vacation");
        assert_eq!(
            serde_json::to_string(&args).unwrap(),
            r#"{"name":"Vacation"}"#
        );
    }
}
