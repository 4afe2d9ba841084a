use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Characters that would split a name into more than one path segment.
///
/// Both separators are rejected on every platform so a name accepted on
/// one machine is accepted everywhere.
const SEPARATORS: [char; 2] = ['/', '\\'];

/// A validated feature name.
///
/// Invariant: non-empty and free of path separators. Nothing else is
/// normalised: leading dots, unicode and mixed case are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FeatureName(String);

impl FeatureName {
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DomainError::InvalidName {
                name,
                reason: "name cannot be empty".into(),
            });
        }
        if let Some(sep) = name.chars().find(|c| SEPARATORS.contains(c)) {
            return Err(DomainError::InvalidName {
                reason: format!("name cannot contain path separator '{sep}'"),
                name,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FeatureName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            FeatureName::parse(""),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn separators_are_rejected() {
        assert!(FeatureName::parse("a/b").is_err());
        assert!(FeatureName::parse("a\\b").is_err());
    }

    #[test]
    fn unusual_but_single_segment_names_pass_verbatim() {
        for name in [".hidden", "ünïcode", "Payment", "user_v2", "..", " spaced "] {
            let parsed = FeatureName::parse(name).unwrap();
            assert_eq!(parsed.as_str(), name);
        }
    }
}
