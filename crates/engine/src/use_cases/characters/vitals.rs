//! Heal and damage - plain health clamps, outside the progression engine.

use std::sync::Arc;

use dndrpg_domain::{Character, CharacterId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort};
use crate::use_cases::UseCaseError;

pub struct VitalsUseCases {
    characters: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl VitalsUseCases {
    pub fn new(characters: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { characters, clock }
    }

    pub async fn heal(&self, id: CharacterId, amount: i32) -> Result<Character, UseCaseError> {
        let mut character = self
            .characters
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Character", id.to_string()))?;

        character.heal(amount, self.clock.now())?;
        character.version = self.characters.update(&character).await?;
        Ok(character)
    }

    pub async fn damage(&self, id: CharacterId, amount: i32) -> Result<Character, UseCaseError> {
        let mut character = self
            .characters
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Character", id.to_string()))?;

        character.take_damage(amount, self.clock.now())?;
        character.version = self.characters.update(&character).await?;

        if character.is_downed() {
            tracing::warn!(
                character_id = %character.id,
                name = %character.name,
                "Character has been reduced to 0 HP"
            );
        }
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockCharacterRepo;
    use chrono::TimeZone;
    use dndrpg_domain::{CharacterClass, DomainError};

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(
            chrono::Utc
                .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        ))
    }

    #[tokio::test]
    async fn heal_clamps_to_max_health() {
        let clock = fixed_clock();
        let mut existing = Character::new("user-1", "Borin", CharacterClass::Fighter, clock.0);
        existing.take_damage(30, clock.0).expect("damage");
        let id = existing.id;

        let mut characters = MockCharacterRepo::new();
        characters
            .expect_get()
            .returning(move |_| Ok(Some(existing.clone())));
        characters
            .expect_update()
            .withf(|c: &Character| c.health == 100)
            .returning(|_| Ok(1));

        let use_cases = VitalsUseCases::new(Arc::new(characters), clock);
        let character = use_cases.heal(id, 999).await.expect("heal");
        assert_eq!(character.health, 100);
    }

    #[tokio::test]
    async fn damage_floors_at_zero() {
        let clock = fixed_clock();
        let existing = Character::new("user-1", "Borin", CharacterClass::Fighter, clock.0);
        let id = existing.id;

        let mut characters = MockCharacterRepo::new();
        characters
            .expect_get()
            .returning(move |_| Ok(Some(existing.clone())));
        characters
            .expect_update()
            .withf(|c: &Character| c.health == 0)
            .returning(|_| Ok(1));

        let use_cases = VitalsUseCases::new(Arc::new(characters), clock);
        let character = use_cases.damage(id, 500).await.expect("damage");
        assert!(character.is_downed());
    }

    #[tokio::test]
    async fn negative_amounts_are_rejected_without_writing() {
        let clock = fixed_clock();
        let existing = Character::new("user-1", "Borin", CharacterClass::Fighter, clock.0);
        let id = existing.id;

        let mut characters = MockCharacterRepo::new();
        characters
            .expect_get()
            .returning(move |_| Ok(Some(existing.clone())));
        characters.expect_update().never();

        let use_cases = VitalsUseCases::new(Arc::new(characters), clock);
        let err = use_cases.heal(id, -5).await.expect_err("negative heal");
        assert!(matches!(
            err,
            UseCaseError::Domain(DomainError::InvalidArgument(_))
        ));
    }
}
