//! Spell levels and the level bounds each spell declares.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CastingRules;
use crate::error::{DomainError, LevelError};

/// The level a spell is cast at.
///
/// Ordered by the underlying slot number, so `Cantrip < Level1 < ... < Level5`.
/// Artificer spellcasting tops out at fifth level, hence no higher variants.
///
/// # Examples
///
/// ```
/// use artificer_domain::value_objects::SpellLevel;
///
/// assert!(SpellLevel::Cantrip < SpellLevel::Level1);
/// assert_eq!(SpellLevel::Level3.as_number(), 3);
/// assert_eq!(SpellLevel::try_from(2).ok(), Some(SpellLevel::Level2));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum SpellLevel {
    Cantrip = 0,
    Level1 = 1,
    Level2 = 2,
    Level3 = 3,
    Level4 = 4,
    Level5 = 5,
}

impl SpellLevel {
    /// Every level, lowest first.
    pub const ALL: [SpellLevel; 6] = [
        SpellLevel::Cantrip,
        SpellLevel::Level1,
        SpellLevel::Level2,
        SpellLevel::Level3,
        SpellLevel::Level4,
        SpellLevel::Level5,
    ];

    /// Convert to numeric level (cantrip = 0).
    #[inline]
    pub fn as_number(self) -> u8 {
        self as u8
    }

    /// Check if this is a cantrip.
    #[inline]
    pub fn is_cantrip(self) -> bool {
        matches!(self, SpellLevel::Cantrip)
    }
}

impl TryFrom<u8> for SpellLevel {
    type Error = DomainError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        SpellLevel::ALL
            .get(level as usize)
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Spell level out of range: {}", level)))
    }
}

impl FromStr for SpellLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if normalized == "cantrip" {
            return Ok(SpellLevel::Cantrip);
        }
        let digits = normalized.strip_prefix("level").unwrap_or(&normalized);
        let number: u8 = digits
            .parse()
            .map_err(|_| DomainError::parse(format!("Unknown spell level: {}", s)))?;
        SpellLevel::try_from(number)
    }
}

impl fmt::Display for SpellLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpellLevel::Cantrip => write!(f, "cantrip"),
            level => write!(f, "level {}", level.as_number()),
        }
    }
}

/// The lowest and highest level a spell may be cast at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelBounds {
    pub minimum: SpellLevel,
    pub maximum: SpellLevel,
}

impl LevelBounds {
    /// Cantrips scale with class level, never with slot level.
    pub const CANTRIP: LevelBounds = LevelBounds {
        minimum: SpellLevel::Cantrip,
        maximum: SpellLevel::Cantrip,
    };

    /// Default bounds for spells of first level and up.
    pub const LEVELED: LevelBounds = LevelBounds {
        minimum: SpellLevel::Level1,
        maximum: SpellLevel::Level5,
    };

    /// Leveled bounds starting at `minimum`.
    pub const fn starting_at(minimum: SpellLevel) -> Self {
        Self {
            minimum,
            maximum: SpellLevel::Level5,
        }
    }

    /// Whether `level` lies within both bounds.
    pub fn contains(&self, level: SpellLevel) -> bool {
        self.minimum <= level && level <= self.maximum
    }

    /// Check `level` against these bounds.
    ///
    /// The minimum is always enforced. The maximum only when
    /// `rules.enforce_maximum_level` is set.
    pub fn check(&self, level: SpellLevel, rules: &CastingRules) -> Result<(), LevelError> {
        if level < self.minimum {
            return Err(LevelError::BelowMinimum {
                tried: level,
                required: self.minimum,
            });
        }
        if rules.enforce_maximum_level && level > self.maximum {
            return Err(LevelError::AboveMaximum {
                tried: level,
                maximum: self.maximum,
            });
        }
        Ok(())
    }
}
