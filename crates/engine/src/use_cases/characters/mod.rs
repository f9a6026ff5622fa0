//! Character management use cases.

pub mod progression;
pub mod vitals;

use std::sync::Arc;

use dndrpg_domain::{AbilityScores, Character, CharacterClass, CharacterId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort};
use crate::use_cases::UseCaseError;

/// Input for character creation, after the wire layer has parsed the class.
#[derive(Debug, Clone)]
pub struct CreateCharacter {
    pub user_id: String,
    pub name: String,
    pub class: CharacterClass,
    pub max_health: Option<i32>,
    pub abilities: Option<AbilityScores>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    pub gold: Option<i32>,
    pub abilities: Option<AbilityScores>,
    pub weapon_name: Option<String>,
    pub weapon_damage: Option<String>,
    pub weapon_attack_bonus: Option<i32>,
    pub armor_name: Option<String>,
    pub armor_class: Option<i32>,
    pub shield_name: Option<String>,
    pub shield_armor_class_bonus: Option<i32>,
}

/// CRUD over characters.
pub struct CharacterUseCases {
    characters: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CharacterUseCases {
    pub fn new(characters: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { characters, clock }
    }

    pub async fn create(&self, request: CreateCharacter) -> Result<Character, UseCaseError> {
        let mut character = Character::new(
            request.user_id,
            request.name,
            request.class,
            self.clock.now(),
        );
        if let Some(abilities) = request.abilities {
            character = character.with_abilities(abilities);
        }
        if let Some(max_health) = request.max_health {
            character = character.with_max_health(max_health);
        }
        character.validate()?;

        self.characters.insert(&character).await?;
        tracing::info!(
            character_id = %character.id,
            name = %character.name,
            class = %character.class,
            "Created character"
        );
        Ok(character)
    }

    pub async fn get(&self, id: CharacterId) -> Result<Option<Character>, UseCaseError> {
        Ok(self.characters.get(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Character>, UseCaseError> {
        Ok(self.characters.list().await?)
    }

    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Character>, UseCaseError> {
        Ok(self.characters.list_by_user(user_id).await?)
    }

    /// Apply a partial update. `created_at`, `user_id`, and all progression
    /// fields are untouchable through this path.
    pub async fn update(
        &self,
        id: CharacterId,
        changes: UpdateCharacter,
    ) -> Result<Character, UseCaseError> {
        let mut character = self
            .characters
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Character", id.to_string()))?;

        if let Some(name) = changes.name {
            character.name = name;
        }
        if let Some(gold) = changes.gold {
            character.gold = gold;
        }
        if let Some(abilities) = changes.abilities {
            character.abilities = abilities;
        }
        if let Some(weapon_name) = changes.weapon_name {
            character.equipment.weapon_name = weapon_name;
        }
        if let Some(weapon_damage) = changes.weapon_damage {
            character.equipment.weapon_damage = weapon_damage;
        }
        if let Some(bonus) = changes.weapon_attack_bonus {
            character.equipment.weapon_attack_bonus = bonus;
        }
        if let Some(armor_name) = changes.armor_name {
            character.equipment.armor_name = armor_name;
        }
        if let Some(armor_class) = changes.armor_class {
            character.equipment.armor_class = armor_class;
        }
        if let Some(shield_name) = changes.shield_name {
            character.equipment.shield_name = Some(shield_name);
        }
        if let Some(bonus) = changes.shield_armor_class_bonus {
            character.equipment.shield_armor_class_bonus = bonus;
        }
        character.updated_at = self.clock.now();
        character.validate()?;

        character.version = self.characters.update(&character).await?;
        Ok(character)
    }

    pub async fn delete(&self, id: CharacterId) -> Result<(), UseCaseError> {
        self.characters.delete(id).await?;
        tracing::info!(character_id = %id, "Deleted character");
        Ok(())
    }
}
