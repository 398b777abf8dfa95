//! Player class traits.
//!
//! A class decides which spell levels a caster can reach and which features
//! they pick up along the way.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::SpellLevel;

/// A 5e player class with spellcasting.
pub trait SpellcastingClass: Send + Sync {
    /// Human-readable class name (e.g., "Artificer").
    fn name(&self) -> &str;

    /// The class's level progression table.
    fn class_table(&self) -> ClassTable;

    /// Features gained at exactly `level`.
    fn features(&self, level: u8) -> Vec<&'static str>;

    /// Highest spell slot level available at `class_level`.
    ///
    /// `None` for class levels outside the table or without slots.
    fn highest_spell_level(&self, class_level: u8) -> Option<SpellLevel> {
        self.class_table()
            .row(class_level)
            .and_then(|row| row.spell_slots.keys().next_back().copied())
    }
}

/// One row of a class table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTableRow {
    pub level: u8,
    pub proficiency_bonus: u8,
    pub cantrips_known: u8,
    /// Slots per spell level, lowest level first
    pub spell_slots: BTreeMap<SpellLevel, u8>,
}

/// Level-by-level progression of a class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTable {
    rows: Vec<ClassTableRow>,
}

impl ClassTable {
    pub fn new(rows: Vec<ClassTableRow>) -> Self {
        Self { rows }
    }

    /// The row for `level` (1-based).
    pub fn row(&self, level: u8) -> Option<&ClassTableRow> {
        self.rows.iter().find(|row| row.level == level)
    }

    pub fn rows(&self) -> &[ClassTableRow] {
        &self.rows
    }
}

/// Proficiency bonus by character level: ((level - 1) / 4) + 2.
pub fn proficiency_bonus(level: u8) -> u8 {
    (level.max(1) - 1) / 4 + 2
}
