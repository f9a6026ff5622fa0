//! Character classes and their starting loadouts.
//!
//! A closed enumeration instead of string-keyed dispatch, so an unknown
//! class is a parse error at the boundary rather than a silent fallthrough
//! deep in equipment setup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The playable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Fighter,
    Wizard,
    Rogue,
    Cleric,
    Ranger,
    Barbarian,
}

/// Starting equipment and hit die for a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartingLoadout {
    pub weapon_name: &'static str,
    pub weapon_damage: &'static str,
    pub weapon_attack_bonus: i32,
    pub armor_name: &'static str,
    pub armor_class: i32,
    pub shield_name: Option<&'static str>,
    pub shield_armor_class_bonus: i32,
    pub hit_die: i32,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 6] = [
        Self::Fighter,
        Self::Wizard,
        Self::Rogue,
        Self::Cleric,
        Self::Ranger,
        Self::Barbarian,
    ];

    /// The equipment a fresh character of this class starts with.
    pub fn loadout(self) -> StartingLoadout {
        match self {
            Self::Fighter => StartingLoadout {
                weapon_name: "Longsword",
                weapon_damage: "1d8",
                weapon_attack_bonus: 3,
                armor_name: "Chainmail",
                armor_class: 16,
                shield_name: Some("Shield"),
                shield_armor_class_bonus: 2,
                hit_die: 10,
            },
            Self::Wizard => StartingLoadout {
                weapon_name: "Quarterstaff",
                weapon_damage: "1d6",
                weapon_attack_bonus: 2,
                armor_name: "Padded Robes",
                armor_class: 11,
                shield_name: None,
                shield_armor_class_bonus: 0,
                hit_die: 6,
            },
            Self::Rogue => StartingLoadout {
                weapon_name: "Shortsword",
                weapon_damage: "1d6",
                weapon_attack_bonus: 3,
                armor_name: "Leather Armor",
                armor_class: 12,
                shield_name: None,
                shield_armor_class_bonus: 0,
                hit_die: 8,
            },
            Self::Cleric => StartingLoadout {
                weapon_name: "Mace",
                weapon_damage: "1d6",
                weapon_attack_bonus: 2,
                armor_name: "Scale Mail",
                armor_class: 14,
                shield_name: Some("Shield"),
                shield_armor_class_bonus: 2,
                hit_die: 8,
            },
            Self::Ranger => StartingLoadout {
                weapon_name: "Longbow",
                weapon_damage: "1d8",
                weapon_attack_bonus: 3,
                armor_name: "Studded Leather",
                armor_class: 13,
                shield_name: None,
                shield_armor_class_bonus: 0,
                hit_die: 10,
            },
            Self::Barbarian => StartingLoadout {
                weapon_name: "Greataxe",
                weapon_damage: "1d12",
                weapon_attack_bonus: 3,
                armor_name: "Hide Armor",
                armor_class: 12,
                shield_name: None,
                shield_armor_class_bonus: 0,
                hit_die: 12,
            },
        }
    }

    pub fn hit_die(self) -> i32 {
        self.loadout().hit_die
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fighter => "Fighter",
            Self::Wizard => "Wizard",
            Self::Rogue => "Rogue",
            Self::Cleric => "Cleric",
            Self::Ranger => "Ranger",
            Self::Barbarian => "Barbarian",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fighter" => Ok(Self::Fighter),
            "wizard" => Ok(Self::Wizard),
            "rogue" => Ok(Self::Rogue),
            "cleric" => Ok(Self::Cleric),
            "ranger" => Ok(Self::Ranger),
            "barbarian" => Ok(Self::Barbarian),
            other => Err(DomainError::parse(format!(
                "Unknown character class: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fighter_loadout_matches_creation_defaults() {
        let loadout = CharacterClass::Fighter.loadout();
        assert_eq!(loadout.weapon_name, "Longsword");
        assert_eq!(loadout.weapon_damage, "1d8");
        assert_eq!(loadout.armor_class, 16);
        assert_eq!(loadout.shield_armor_class_bonus, 2);
    }

    #[test]
    fn every_class_has_parseable_weapon_damage() {
        for class in CharacterClass::ALL {
            let loadout = class.loadout();
            crate::value_objects::DiceFormula::parse(loadout.weapon_damage)
                .unwrap_or_else(|e| panic!("{} weapon damage invalid: {}", class, e));
        }
    }

    #[test]
    fn round_trips_through_strings() {
        for class in CharacterClass::ALL {
            let parsed: CharacterClass = class.to_string().parse().expect("round trip");
            assert_eq!(parsed, class);
        }
        assert!("  ROGUE ".parse::<CharacterClass>().is_ok());
        assert!(matches!(
            "paladin".parse::<CharacterClass>(),
            Err(DomainError::Parse(_))
        ));
    }
}
