//! Lookup failures at the string-label boundary.

use thiserror::Error;

/// A label that does not name a row of one of the reference tables.
///
/// Typed lookups through the key enums are exhaustive and never produce this
/// error; it only arises when parsing free-form labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Not one of the ten cattle categories in the AE table.
    #[error("unknown cattle category: '{0}'")]
    UnknownCattleCategory(String),
    /// Not one of the sheep classes in the DSE table.
    #[error("unknown sheep class: '{0}'")]
    UnknownSheepClass(String),
    /// Not one of the goat classes in the DSE table.
    #[error("unknown goat class: '{0}'")]
    UnknownGoatClass(String),
    /// Not High, Moderate or Low.
    #[error("unknown productivity level: '{0}', expected High, Moderate or Low")]
    UnknownProductivity(String),
}

impl LookupError {
    /// Returns the offending label.
    pub fn label(&self) -> &str {
        match self {
            LookupError::UnknownCattleCategory(s)
            | LookupError::UnknownSheepClass(s)
            | LookupError::UnknownGoatClass(s)
            | LookupError::UnknownProductivity(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::UnknownSheepClass("Alpaca".to_string());
        assert_eq!(err.to_string(), "unknown sheep class: 'Alpaca'");
        assert_eq!(err.label(), "Alpaca");
    }
}
