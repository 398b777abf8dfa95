//! Dice formulas
//!
//! Describes which dice a caster rolls for a spell, like "2d8" or "1d10+3".
//! Rolling is left to the caller; the total comes back into `Spell::cast`
//! as an opaque roll.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error when parsing a dice formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The formula string is empty
    #[error("Empty dice formula")]
    Empty,
    /// Invalid format - expected XdY or XdY+Z
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    /// Dice count must be at least 1
    #[error("Dice count must be at least 1")]
    InvalidDiceCount,
    /// Die size must be at least 2
    #[error("Die size must be at least 2")]
    InvalidDieSize,
    /// The modifier pushes the roll bounds out of range
    #[error("Modifier value overflow")]
    ModifierOverflow,
}

/// A parsed dice formula like "2d6+3"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceFormula {
    /// Number of dice to roll (X in XdY)
    pub dice_count: u8,
    /// Size of each die (Y in XdY)
    pub die_size: u8,
    /// Modifier to add/subtract after rolling (+Z or -Z)
    pub modifier: i32,
}

impl DiceFormula {
    /// Create a new dice formula
    pub fn new(dice_count: u8, die_size: u8, modifier: i32) -> Result<Self, DiceParseError> {
        if dice_count == 0 {
            return Err(DiceParseError::InvalidDiceCount);
        }
        if die_size < 2 {
            return Err(DiceParseError::InvalidDieSize);
        }
        let max_dice_total = i32::from(dice_count) * i32::from(die_size);
        if i32::from(dice_count).checked_add(modifier).is_none()
            || max_dice_total.checked_add(modifier).is_none()
        {
            return Err(DiceParseError::ModifierOverflow);
        }
        Ok(Self {
            dice_count,
            die_size,
            modifier,
        })
    }

    /// `count` dice of `die_size` sides, no modifier.
    ///
    /// Spell tables only ever build these from constants, so the count is
    /// clamped to 1 rather than failing.
    pub(crate) fn dice(count: u8, die_size: u8) -> Self {
        Self {
            dice_count: count.max(1),
            die_size,
            modifier: 0,
        }
    }

    /// Parse a dice formula string like "1d10", "2d8+3", "d4"
    ///
    /// Supported formats:
    /// - "XdY" - Roll X dice of size Y
    /// - "XdY+Z" - Roll X dice of size Y, add Z
    /// - "XdY-Z" - Roll X dice of size Y, subtract Z
    /// - "dY" - Roll 1 die of size Y (shorthand)
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let d_pos = input.find('d').ok_or_else(|| {
            DiceParseError::InvalidFormat(format!("Missing 'd' separator in '{}'", input))
        })?;

        let dice_count_str = &input[..d_pos];
        let dice_count: u8 = if dice_count_str.is_empty() {
            1 // "d8" means "1d8"
        } else {
            dice_count_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid dice count: '{}'", dice_count_str))
            })?
        };

        let after_d = &input[d_pos + 1..];
        let (die_size_str, modifier) = match after_d.find(['+', '-']) {
            Some(0) => {
                return Err(DiceParseError::InvalidFormat(format!(
                    "Invalid die size: '{}'",
                    after_d
                )))
            }
            Some(pos) => {
                let digits = &after_d[pos + 1..];
                // Digits only after the sign.
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DiceParseError::InvalidFormat(format!(
                        "Invalid modifier: '{}'",
                        &after_d[pos..]
                    )));
                }
                let magnitude: i32 = digits
                    .parse()
                    .map_err(|_| DiceParseError::ModifierOverflow)?;
                let sign = if after_d[pos..].starts_with('-') { -1 } else { 1 };
                (&after_d[..pos], sign * magnitude)
            }
            None => (after_d, 0),
        };

        let die_size: u8 = die_size_str.parse().map_err(|_| {
            DiceParseError::InvalidFormat(format!("Invalid die size: '{}'", die_size_str))
        })?;

        Self::new(dice_count, die_size, modifier)
    }

    /// The same dice with `extra` more of them.
    pub fn with_extra_dice(self, extra: u8) -> Self {
        Self {
            dice_count: self.dice_count.saturating_add(extra),
            ..self
        }
    }

    /// Get the minimum possible roll
    ///
    /// Saturates at the `i32` bounds.
    pub fn min_roll(&self) -> i32 {
        i32::from(self.dice_count).saturating_add(self.modifier)
    }

    /// Get the maximum possible roll
    pub fn max_roll(&self) -> i32 {
        (i32::from(self.dice_count) * i32::from(self.die_size)).saturating_add(self.modifier)
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier == 0 {
            write!(f, "{}d{}", self.dice_count, self.die_size)
        } else if self.modifier > 0 {
            write!(f, "{}d{}+{}", self.dice_count, self.die_size, self.modifier)
        } else {
            write!(f, "{}d{}{}", self.dice_count, self.die_size, self.modifier)
        }
    }
}
