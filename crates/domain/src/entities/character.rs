//! Character entity - a player's adventurer.

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::progression::ProgressionSnapshot;
use crate::value_objects::{AbilityScores, CharacterClass, DiceFormula};
use crate::{progression, MAX_LEVEL};

/// Carried equipment: one weapon, one armor, an optional shield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    pub weapon_name: String,
    /// Damage dice notation, e.g. "1d8" or "2d6+1"
    pub weapon_damage: String,
    pub weapon_attack_bonus: i32,
    pub armor_name: String,
    pub armor_class: i32,
    pub shield_name: Option<String>,
    pub shield_armor_class_bonus: i32,
}

impl Equipment {
    /// The starting equipment for a class.
    pub fn for_class(class: CharacterClass) -> Self {
        let loadout = class.loadout();
        Self {
            weapon_name: loadout.weapon_name.to_string(),
            weapon_damage: loadout.weapon_damage.to_string(),
            weapon_attack_bonus: loadout.weapon_attack_bonus,
            armor_name: loadout.armor_name.to_string(),
            armor_class: loadout.armor_class,
            shield_name: loadout.shield_name.map(str::to_string),
            shield_armor_class_bonus: loadout.shield_armor_class_bonus,
        }
    }

    /// Armor class including the shield bonus.
    pub fn total_armor_class(&self) -> i32 {
        self.armor_class + self.shield_armor_class_bonus
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        DiceFormula::parse(&self.weapon_damage)?;
        if !(10..=30).contains(&self.armor_class) {
            return Err(DomainError::validation(format!(
                "armor class must be between 10 and 30, got {}",
                self.armor_class
            )));
        }
        if !(0..=10).contains(&self.shield_armor_class_bonus) {
            return Err(DomainError::validation(format!(
                "shield bonus must be between 0 and 10, got {}",
                self.shield_armor_class_bonus
            )));
        }
        Ok(())
    }
}

/// A character owned by a user.
///
/// Progression fields (`level`, the three experience counters, health) are
/// only rewritten through [`Character::apply_progression`], keeping them
/// consistent with each other; everything else is plain state.
#[derive(Debug, Clone)]
pub struct Character {
    pub id: CharacterId,
    /// Owning user (identity is managed outside this service)
    pub user_id: String,
    pub name: String,
    pub class: CharacterClass,

    // Progression state
    pub level: i32,
    pub health: i32,
    pub max_health: i32,
    /// XP earned since entering the current level (derived)
    pub experience_in_level: i64,
    /// XP span of the current level; 0 at max level (derived)
    pub experience_to_next_level: i64,
    /// Cumulative XP ever earned; never decreases in play
    pub total_experience: i64,

    pub gold: i32,
    pub abilities: AbilityScores,
    pub equipment: Equipment,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency token, bumped by the store on every write
    pub version: i64,
}

impl Character {
    /// Create a fresh level-1 character with the standard creation defaults.
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        class: CharacterClass,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CharacterId::new(),
            user_id: user_id.into(),
            name: name.into(),
            class,
            level: 1,
            health: 100,
            max_health: 100,
            experience_in_level: 0,
            experience_to_next_level: 300,
            total_experience: 0,
            gold: 100,
            abilities: AbilityScores::default(),
            equipment: Equipment::for_class(class),
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    pub fn with_abilities(mut self, abilities: AbilityScores) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn with_max_health(mut self, max_health: i32) -> Self {
        self.max_health = max_health;
        self.health = max_health;
        self
    }

    pub fn constitution_modifier(&self) -> i32 {
        self.abilities.constitution_modifier()
    }

    pub fn total_armor_class(&self) -> i32 {
        self.equipment.total_armor_class()
    }

    /// The progression-relevant view of this character.
    pub fn progression(&self) -> Result<ProgressionSnapshot, DomainError> {
        Ok(ProgressionSnapshot::from_state(
            self.total_experience,
            self.health,
            self.max_health,
            self.constitution_modifier(),
        )?)
    }

    /// Write a transformed snapshot back into the entity.
    ///
    /// This is the only path that touches the derived experience fields.
    pub fn apply_progression(&mut self, snapshot: &ProgressionSnapshot, now: DateTime<Utc>) {
        self.level = snapshot.level();
        self.total_experience = snapshot.total_xp();
        self.experience_in_level = snapshot.xp_in_level();
        self.experience_to_next_level = snapshot.xp_to_next_level();
        self.health = snapshot.health();
        self.max_health = snapshot.max_health();
        self.updated_at = now;
    }

    /// Restore health, clamped to max. Not a progression operation.
    pub fn heal(&mut self, amount: i32, now: DateTime<Utc>) -> Result<(), DomainError> {
        if amount < 0 {
            return Err(DomainError::invalid_argument(format!(
                "heal amount cannot be negative, got {}",
                amount
            )));
        }
        self.health = (self.health + amount).min(self.max_health);
        self.updated_at = now;
        Ok(())
    }

    /// Reduce health, clamped at 0. Not a progression operation.
    pub fn take_damage(&mut self, amount: i32, now: DateTime<Utc>) -> Result<(), DomainError> {
        if amount < 0 {
            return Err(DomainError::invalid_argument(format!(
                "damage amount cannot be negative, got {}",
                amount
            )));
        }
        self.health = (self.health - amount).max(0);
        self.updated_at = now;
        Ok(())
    }

    pub fn is_downed(&self) -> bool {
        self.health == 0
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// Validate invariants before persisting.
    pub fn validate(&self) -> Result<(), DomainError> {
        let name = self.name.trim();
        if name.len() < 2 || name.len() > 100 {
            return Err(DomainError::validation(
                "Character name must be between 2 and 100 characters",
            ));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || matches!(c, ' ' | '-' | '\'' | '.'))
        {
            return Err(DomainError::validation(
                "Character name can only contain letters, spaces, hyphens, apostrophes, and periods",
            ));
        }
        if !(progression::MIN_LEVEL..=MAX_LEVEL).contains(&self.level) {
            return Err(DomainError::validation(format!(
                "level must be between 1 and {}, got {}",
                MAX_LEVEL, self.level
            )));
        }
        if self.max_health < 1 || self.max_health > 999 {
            return Err(DomainError::validation(format!(
                "maximum health must be between 1 and 999, got {}",
                self.max_health
            )));
        }
        if self.health < 0 || self.health > self.max_health {
            return Err(DomainError::validation(
                "Current health cannot exceed maximum health",
            ));
        }
        if self.total_experience < 0 || self.gold < 0 {
            return Err(DomainError::validation(
                "Experience and gold cannot be negative",
            ));
        }
        self.abilities.validate()?;
        self.equipment.validate()?;
        Ok(())
    }
}
