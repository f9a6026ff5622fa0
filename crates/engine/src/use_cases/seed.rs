//! Startup seeding - stock monsters and a sample character.
//!
//! Idempotent: each table is only seeded when it is empty.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dndrpg_domain::{ChallengeRating, Character, CharacterClass, Monster};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, MonsterRepo};
use crate::use_cases::UseCaseError;

pub struct SeedService {
    characters: Arc<dyn CharacterRepo>,
    monsters: Arc<dyn MonsterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl SeedService {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        monsters: Arc<dyn MonsterRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            characters,
            monsters,
            clock,
        }
    }

    pub async fn run(&self) -> Result<(), UseCaseError> {
        tracing::info!("Starting database seeding");
        self.seed_monsters().await?;
        self.seed_characters().await?;
        tracing::info!("Database seeding completed");
        Ok(())
    }

    async fn seed_monsters(&self) -> Result<(), UseCaseError> {
        if self.monsters.count().await? > 0 {
            tracing::info!("Monsters already seeded, skipping");
            return Ok(());
        }

        let now = self.clock.now();
        for monster in stock_monsters(now) {
            monster.validate()?;
            self.monsters.insert(&monster).await?;
        }
        tracing::info!("Seeded stock monsters");
        Ok(())
    }

    async fn seed_characters(&self) -> Result<(), UseCaseError> {
        if self.characters.count().await? > 0 {
            tracing::info!("Characters already seeded, skipping");
            return Ok(());
        }

        let now = self.clock.now();
        let sample = Character::new("sample-user", "Aria Swiftblade", CharacterClass::Fighter, now);
        sample.validate()?;
        self.characters.insert(&sample).await?;
        tracing::info!(name = %sample.name, "Seeded sample character");
        Ok(())
    }
}

/// The stock roster available before any compendium imports.
fn stock_monsters(now: DateTime<Utc>) -> Vec<Monster> {
    vec![
        Monster::new("goblin", "Goblin", ChallengeRating::ONE_QUARTER, now)
            .with_combat_stats(15, 7, "1d6+2")
            .with_xp_award(50)
            .with_attack("Scimitar", 4),
        Monster::new("wolf", "Wolf", ChallengeRating::ONE_QUARTER, now)
            .with_combat_stats(13, 11, "2d4+2")
            .with_xp_award(50)
            .with_monster_type("beast")
            .with_attack("Bite", 4),
        Monster::new("skeleton", "Skeleton", ChallengeRating::ONE_QUARTER, now)
            .with_combat_stats(13, 13, "1d6+2")
            .with_xp_award(50)
            .with_monster_type("undead")
            .with_attack("Shortsword", 4),
        Monster::new("orc", "Orc", ChallengeRating::ONE_HALF, now)
            .with_combat_stats(13, 15, "1d12+3")
            .with_xp_award(100)
            .with_attack("Greataxe", 5),
        Monster::new("bugbear", "Bugbear", ChallengeRating::from_whole(1), now)
            .with_combat_stats(16, 27, "2d8+2")
            .with_xp_award(200)
            .with_attack("Morningstar", 4),
        Monster::new("ogre", "Ogre", ChallengeRating::from_whole(2), now)
            .with_combat_stats(11, 59, "2d8+4")
            .with_xp_award(450)
            .with_monster_type("giant")
            .with_attack("Greatclub", 6),
    ]
}
