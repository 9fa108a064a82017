use crate::error::ArgumentError;

/// The semantic type of a route parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Any non-empty UTF-8 string.
    String,
}

impl ParameterKind {
    /// Check a decoded value against this type.
    pub fn validate(self, value: &str) -> Result<(), ArgumentError> {
        match self {
            ParameterKind::String if value.is_empty() => Err(ArgumentError::Empty),
            ParameterKind::String => Ok(()),
        }
    }
}

/// A parameter declared by a route template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    /// Name used in the `{name}` placeholder.
    pub name: &'static str,
    /// Declared type of the value.
    pub kind: ParameterKind,
    /// Whether a binding must provide the value.
    pub required: bool,
}

impl Parameter {
    /// A required, non-empty string parameter.
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: ParameterKind::String,
            required: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_accepts_any_non_empty_value() {
        assert_eq!(ParameterKind::String.validate("Checking"), Ok(()));
        assert_eq!(ParameterKind::String.validate(" "), Ok(()));
        assert_eq!(ParameterKind::String.validate("/"), Ok(()));
    }

    #[test]
    fn string_rejects_empty_value() {
        assert_eq!(
            ParameterKind::String.validate(""),
            Err(ArgumentError::Empty)
        );
    }
}
