//! Unified error types for the domain layer
//!
//! Casting can fail for two reasons: the spell is built at a level outside
//! its bounds (`LevelError`), or the caster did not supply the components the
//! spell requires (`ComponentError`). Both fold into `DomainError`, which is
//! what `Spell::cast` and `resolve_spell` return.

use thiserror::Error;

use crate::value_objects::{ComponentKind, DiceParseError, SpellLevel};

/// A spell was built at a level its bounds do not allow.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    /// Cast below the spell's minimum level (e.g. Acid Arrow at level 1)
    #[error("Required level {required}, was cast with {tried}")]
    BelowMinimum {
        tried: SpellLevel,
        required: SpellLevel,
    },

    /// Cast above the spell's maximum level
    #[error("Maximum level {maximum}, was cast with {tried}")]
    AboveMaximum {
        tried: SpellLevel,
        maximum: SpellLevel,
    },
}

impl LevelError {
    /// The level the spell was attempted at.
    pub fn tried(&self) -> SpellLevel {
        match self {
            Self::BelowMinimum { tried, .. } | Self::AboveMaximum { tried, .. } => *tried,
        }
    }

    /// The bound that was violated.
    pub fn required(&self) -> SpellLevel {
        match self {
            Self::BelowMinimum { required, .. } => *required,
            Self::AboveMaximum { maximum, .. } => *maximum,
        }
    }
}

/// A spell was cast without the components it requires.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// No component of the required kind was supplied
    #[error("Missing {kind} component")]
    Missing { kind: ComponentKind },

    /// A material was supplied, but not the one the spell names
    #[error("Wrong material component: required '{required}', provided {provided:?}")]
    WrongMaterial {
        required: String,
        provided: Option<String>,
    },
}

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Spell level outside the spell's bounds
    #[error("Level error: {0}")]
    Level(#[from] LevelError),

    /// Required components were not supplied
    #[error("Component error: {0}")]
    Component(#[from] ComponentError),

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` and `TryFrom` implementations when the input
    /// doesn't match any known variant or range.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for DamageType {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "fire" => Ok(Self::Fire),
    ///             _ => Err(DomainError::parse(format!("Unknown damage type: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<DiceParseError> for DomainError {
    fn from(err: DiceParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_error_display() {
        let err = LevelError::BelowMinimum {
            tried: SpellLevel::Level1,
            required: SpellLevel::Level2,
        };
        assert_eq!(err.to_string(), "Required level level 2, was cast with level 1");
        assert_eq!(err.tried(), SpellLevel::Level1);
        assert_eq!(err.required(), SpellLevel::Level2);
    }

    #[test]
    fn test_above_maximum_accessors() {
        let err = LevelError::AboveMaximum {
            tried: SpellLevel::Level4,
            maximum: SpellLevel::Level3,
        };
        assert_eq!(err.tried(), SpellLevel::Level4);
        assert_eq!(err.required(), SpellLevel::Level3);
    }

    #[test]
    fn test_level_error_converts_into_domain_error() {
        let err: DomainError = LevelError::BelowMinimum {
            tried: SpellLevel::Cantrip,
            required: SpellLevel::Level1,
        }
        .into();
        assert!(matches!(err, DomainError::Level(_)));
        assert!(err.to_string().starts_with("Level error:"));
    }

    #[test]
    fn test_component_error_display() {
        let err = ComponentError::Missing {
            kind: ComponentKind::Verbal,
        };
        assert_eq!(err.to_string(), "Missing verbal component");

        let domain_err: DomainError = err.into();
        assert!(matches!(domain_err, DomainError::Component(_)));
    }

    #[test]
    fn test_from_dice_parse_error() {
        let dice_err = DiceParseError::Empty;
        let domain_err: DomainError = dice_err.into();
        assert!(matches!(domain_err, DomainError::Parse(_)));
        assert!(domain_err.to_string().contains("Empty dice formula"));
    }

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("class level must be at least 1");
        assert_eq!(
            err.to_string(),
            "Validation failed: class level must be at least 1"
        );
    }
}
