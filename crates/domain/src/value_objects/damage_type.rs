//! Damage types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The thirteen damage types a spell can deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    Acid,
    Bludgeoning,
    Cold,
    Fire,
    Force,
    Lightning,
    Necrotic,
    Piercing,
    Poison,
    Psychic,
    Radiant,
    Slashing,
    Thunder,
}

impl DamageType {
    pub const ALL: [DamageType; 13] = [
        DamageType::Acid,
        DamageType::Bludgeoning,
        DamageType::Cold,
        DamageType::Fire,
        DamageType::Force,
        DamageType::Lightning,
        DamageType::Necrotic,
        DamageType::Piercing,
        DamageType::Poison,
        DamageType::Psychic,
        DamageType::Radiant,
        DamageType::Slashing,
        DamageType::Thunder,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DamageType::Acid => "Acid",
            DamageType::Bludgeoning => "Bludgeoning",
            DamageType::Cold => "Cold",
            DamageType::Fire => "Fire",
            DamageType::Force => "Force",
            DamageType::Lightning => "Lightning",
            DamageType::Necrotic => "Necrotic",
            DamageType::Piercing => "Piercing",
            DamageType::Poison => "Poison",
            DamageType::Psychic => "Psychic",
            DamageType::Radiant => "Radiant",
            DamageType::Slashing => "Slashing",
            DamageType::Thunder => "Thunder",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DamageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DamageType::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::parse(format!("Unknown damage type: {}", s)))
    }
}
