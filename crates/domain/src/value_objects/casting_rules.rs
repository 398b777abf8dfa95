//! Table rules that decide how strictly casting is checked.

use serde::{Deserialize, Serialize};

/// Casting rule configuration.
///
/// The defaults enforce both component and level-ceiling checks.
/// `CastingRules::permissive()` only keeps the level floor, which is always
/// checked.
///
/// Deserializes from partial documents; missing fields take their defaults:
///
/// ```
/// use artificer_domain::value_objects::CastingRules;
///
/// let rules: CastingRules = serde_json::from_str(r#"{"enforceComponents": false}"#).unwrap();
/// assert!(!rules.enforce_components);
/// assert!(rules.enforce_maximum_level);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CastingRules {
    /// Reject casts missing a required component
    pub enforce_components: bool,
    /// Reject leveled spells built above their maximum level
    pub enforce_maximum_level: bool,
}

impl Default for CastingRules {
    fn default() -> Self {
        Self {
            enforce_components: true,
            enforce_maximum_level: true,
        }
    }
}

impl CastingRules {
    /// Only the minimum level is checked.
    pub fn permissive() -> Self {
        Self {
            enforce_components: false,
            enforce_maximum_level: false,
        }
    }

    pub fn with_enforce_components(mut self, enforce: bool) -> Self {
        self.enforce_components = enforce;
        self
    }

    pub fn with_enforce_maximum_level(mut self, enforce: bool) -> Self {
        self.enforce_maximum_level = enforce;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enforces_everything() {
        let rules = CastingRules::default();
        assert!(rules.enforce_components);
        assert!(rules.enforce_maximum_level);
    }

    #[test]
    fn builder_toggles_single_rule() {
        let rules = CastingRules::default().with_enforce_components(false);
        assert!(!rules.enforce_components);
        assert!(rules.enforce_maximum_level);

        let rules = CastingRules::permissive().with_enforce_maximum_level(true);
        assert!(!rules.enforce_components);
        assert!(rules.enforce_maximum_level);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let rules: CastingRules = serde_json::from_str("{}").unwrap();
        assert_eq!(rules, CastingRules::default());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(CastingRules::permissive()).unwrap();
        assert_eq!(json["enforceComponents"], false);
        assert_eq!(json["enforceMaximumLevel"], false);
    }
}
