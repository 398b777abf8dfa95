//! The Artificer class.
//!
//! Artificers are half casters that round up: they get first-level slots at
//! class level 1 and top out at fifth-level slots.

use std::collections::BTreeMap;

use super::traits::{proficiency_bonus, ClassTable, ClassTableRow, SpellcastingClass};
use crate::value_objects::SpellLevel;

/// Spell slots per class level (index 0 = class level 1), lowest spell level first.
const SPELL_SLOTS: [&[u8]; 20] = [
    &[2],
    &[2],
    &[3],
    &[3],
    &[4, 2],
    &[4, 2],
    &[4, 3],
    &[4, 3],
    &[4, 3, 2],
    &[4, 3, 2],
    &[4, 3, 3],
    &[4, 3, 3],
    &[4, 3, 3, 1],
    &[4, 3, 3, 1],
    &[4, 3, 3, 2],
    &[4, 3, 3, 2],
    &[4, 3, 3, 3, 1],
    &[4, 3, 3, 3, 1],
    &[4, 3, 3, 3, 2],
    &[4, 3, 3, 3, 2],
];

const FEATURES: &[(u8, &[&str])] = &[
    (1, &["Magical Tinkering", "Spellcasting"]),
    (2, &["Infuse Item"]),
    (3, &["Artificer Specialist", "The Right Tool for the Job"]),
    (4, &["Ability Score Improvement"]),
    (6, &["Tool Expertise"]),
    (7, &["Flash of Genius"]),
    (8, &["Ability Score Improvement"]),
    (10, &["Magic Item Adept"]),
    (11, &["Spell-Storing Item"]),
    (12, &["Ability Score Improvement"]),
    (14, &["Magic Item Savant"]),
    (16, &["Ability Score Improvement"]),
    (18, &["Magic Item Master"]),
    (19, &["Ability Score Improvement"]),
    (20, &["Soul of Artifice"]),
];

fn cantrips_known(level: u8) -> u8 {
    match level {
        1..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

fn spell_slots(level: u8) -> BTreeMap<SpellLevel, u8> {
    let Some(slots) = level
        .checked_sub(1)
        .and_then(|index| SPELL_SLOTS.get(index as usize))
    else {
        return BTreeMap::new();
    };

    slots
        .iter()
        .enumerate()
        .filter_map(|(i, &count)| {
            SpellLevel::try_from((i + 1) as u8)
                .ok()
                .map(|spell_level| (spell_level, count))
        })
        .collect()
}

/// The Artificer class.
#[derive(Debug, Clone, Copy, Default)]
pub struct Artificer;

impl Artificer {
    pub const MAX_LEVEL: u8 = 20;

    pub fn new() -> Self {
        Self
    }
}

impl SpellcastingClass for Artificer {
    fn name(&self) -> &str {
        "Artificer"
    }

    fn class_table(&self) -> ClassTable {
        ClassTable::new(
            (1..=Self::MAX_LEVEL)
                .map(|level| ClassTableRow {
                    level,
                    proficiency_bonus: proficiency_bonus(level),
                    cantrips_known: cantrips_known(level),
                    spell_slots: spell_slots(level),
                })
                .collect(),
        )
    }

    fn features(&self, level: u8) -> Vec<&'static str> {
        FEATURES
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, features)| features.to_vec())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_twenty_rows() {
        let table = Artificer.class_table();
        assert_eq!(table.rows().len(), 20);
        assert!(table.row(0).is_none());
        assert!(table.row(21).is_none());
    }

    #[test]
    fn first_level_slots() {
        let table = Artificer.class_table();
        let row = table.row(1).unwrap();
        assert_eq!(row.spell_slots.get(&SpellLevel::Level1), Some(&2));
        assert_eq!(row.spell_slots.len(), 1);
        assert_eq!(row.cantrips_known, 2);
        assert_eq!(row.proficiency_bonus, 2);
    }

    #[test]
    fn highest_spell_level_progression() {
        let artificer = Artificer::new();
        assert_eq!(artificer.highest_spell_level(0), None);
        assert_eq!(artificer.highest_spell_level(1), Some(SpellLevel::Level1));
        assert_eq!(artificer.highest_spell_level(5), Some(SpellLevel::Level2));
        assert_eq!(artificer.highest_spell_level(9), Some(SpellLevel::Level3));
        assert_eq!(artificer.highest_spell_level(13), Some(SpellLevel::Level4));
        assert_eq!(artificer.highest_spell_level(17), Some(SpellLevel::Level5));
        assert_eq!(artificer.highest_spell_level(20), Some(SpellLevel::Level5));
    }

    #[test]
    fn capstone_slots() {
        let table = Artificer.class_table();
        let row = table.row(20).unwrap();
        let slots: Vec<u8> = row.spell_slots.values().copied().collect();
        assert_eq!(slots, vec![4, 3, 3, 3, 2]);
        assert_eq!(row.cantrips_known, 4);
        assert_eq!(row.proficiency_bonus, 6);
    }

    #[test]
    fn features_by_level() {
        assert_eq!(
            Artificer.features(1),
            vec!["Magical Tinkering", "Spellcasting"]
        );
        assert_eq!(Artificer.features(20), vec!["Soul of Artifice"]);
        assert!(Artificer.features(5).is_empty());
    }
}
