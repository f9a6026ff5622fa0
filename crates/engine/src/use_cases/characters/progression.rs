//! Progression use cases - XP gain and the set-level testing affordance.
//!
//! Load, transform through the domain calculator, write back through the
//! single entity path, persist with a version check. A conflict means a
//! concurrent writer got there first; the caller retries against fresh
//! state instead of overwriting it.

use std::sync::Arc;

use dndrpg_domain::{progression, Character, CharacterId, DomainError};

use crate::infrastructure::ports::{CharacterRepo, ClockPort};
use crate::use_cases::UseCaseError;

/// Award experience to a character, applying any level-ups.
pub struct GainExperience {
    characters: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl GainExperience {
    pub fn new(characters: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { characters, clock }
    }

    pub async fn execute(
        &self,
        id: CharacterId,
        xp_delta: i64,
    ) -> Result<Character, UseCaseError> {
        let mut character = self
            .characters
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Character", id.to_string()))?;

        let before = character.progression()?;
        let after = progression::apply_experience(&before, xp_delta).map_err(DomainError::from)?;
        character.apply_progression(&after, self.clock.now());

        character.version = self.characters.update(&character).await?;

        if after.level() > before.level() {
            tracing::info!(
                character_id = %character.id,
                name = %character.name,
                level = character.level,
                health = character.health,
                max_health = character.max_health,
                "Character leveled up"
            );
        }
        Ok(character)
    }
}

/// Jump a character to an exact level. Testing affordance, not gameplay.
pub struct SetLevel {
    characters: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl SetLevel {
    pub fn new(characters: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { characters, clock }
    }

    pub async fn execute(
        &self,
        id: CharacterId,
        target_level: i32,
    ) -> Result<Character, UseCaseError> {
        let mut character = self
            .characters
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Character", id.to_string()))?;

        let before = character.progression()?;
        let after = progression::set_level(&before, target_level).map_err(DomainError::from)?;
        character.apply_progression(&after, self.clock.now());

        character.version = self.characters.update(&character).await?;

        tracing::info!(
            character_id = %character.id,
            level = character.level,
            "Set character level"
        );
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockCharacterRepo, RepoError};
    use chrono::TimeZone;
    use dndrpg_domain::CharacterClass;
    use mockall::predicate::*;

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(
            chrono::Utc
                .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        ))
    }

    fn stored_character(clock: &FixedClock) -> Character {
        // Fighter defaults: CON 15 (+2 modifier), 100/100 HP
        Character::new("user-1", "Borin", CharacterClass::Fighter, clock.0)
    }

    #[tokio::test]
    async fn awards_experience_and_levels_up() {
        let clock = fixed_clock();
        let mut characters = MockCharacterRepo::new();
        let existing = stored_character(&clock);
        let id = existing.id;
        let snapshot = existing.clone();
        characters
            .expect_get()
            .with(eq(id))
            .returning(move |_| Ok(Some(snapshot.clone())));
        characters
            .expect_update()
            .withf(|c: &Character| {
                c.level == 2
                    && c.total_experience == 300
                    && c.experience_in_level == 0
                    && c.experience_to_next_level == 600
                    && c.max_health == 103
                    && c.health == 103
            })
            .returning(|_| Ok(1));

        let use_case = GainExperience::new(Arc::new(characters), clock);
        let character = use_case.execute(id, 300).await.expect("gain");
        assert_eq!(character.level, 2);
        assert_eq!(character.version, 1);
    }

    #[tokio::test]
    async fn rejects_negative_delta_without_writing() {
        let clock = fixed_clock();
        let mut characters = MockCharacterRepo::new();
        let existing = stored_character(&clock);
        let id = existing.id;
        characters
            .expect_get()
            .returning(move |_| Ok(Some(existing.clone())));
        characters.expect_update().never();

        let use_case = GainExperience::new(Arc::new(characters), clock);
        let err = use_case.execute(id, -1).await.expect_err("negative delta");
        assert!(matches!(
            err,
            UseCaseError::Domain(DomainError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn surfaces_version_conflicts() {
        let clock = fixed_clock();
        let mut characters = MockCharacterRepo::new();
        let existing = stored_character(&clock);
        let id = existing.id;
        characters
            .expect_get()
            .returning(move |_| Ok(Some(existing.clone())));
        characters
            .expect_update()
            .returning(|_| Err(RepoError::conflict("stale")));

        let use_case = GainExperience::new(Arc::new(characters), clock);
        let err = use_case.execute(id, 50).await.expect_err("conflict");
        assert!(matches!(err, UseCaseError::Repo(RepoError::Conflict(_))));
    }

    #[tokio::test]
    async fn missing_character_is_not_found() {
        let clock = fixed_clock();
        let mut characters = MockCharacterRepo::new();
        characters.expect_get().returning(|_| Ok(None));

        let use_case = GainExperience::new(Arc::new(characters), clock);
        let err = use_case
            .execute(CharacterId::new(), 10)
            .await
            .expect_err("missing");
        assert!(matches!(
            err,
            UseCaseError::Domain(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn set_level_snaps_xp_and_fully_heals() {
        let clock = fixed_clock();
        let mut characters = MockCharacterRepo::new();
        let mut existing = stored_character(&clock);
        existing.take_damage(40, clock.0).expect("damage");
        let id = existing.id;
        characters
            .expect_get()
            .returning(move |_| Ok(Some(existing.clone())));
        characters
            .expect_update()
            .withf(|c: &Character| {
                c.level == 5
                    && c.total_experience == 6500
                    && c.experience_in_level == 0
                    // Four levels at the flat +5 rate, fully healed
                    && c.max_health == 120
                    && c.health == 120
            })
            .returning(|_| Ok(1));

        let use_case = SetLevel::new(Arc::new(characters), clock);
        let character = use_case.execute(id, 5).await.expect("set level");
        assert_eq!(character.level, 5);
    }

    #[tokio::test]
    async fn set_level_rejects_out_of_range_target() {
        let clock = fixed_clock();
        let mut characters = MockCharacterRepo::new();
        let existing = stored_character(&clock);
        let id = existing.id;
        characters
            .expect_get()
            .returning(move |_| Ok(Some(existing.clone())));
        characters.expect_update().never();

        let use_case = SetLevel::new(Arc::new(characters), clock);
        let err = use_case.execute(id, 21).await.expect_err("bad level");
        assert!(matches!(
            err,
            UseCaseError::Domain(DomainError::OutOfRange(_))
        ));
    }
}
