//! Monster use cases - listing, encounter selection, and compendium import.

use std::sync::Arc;

use dndrpg_domain::{encounter_cr_band, ChallengeRating, Monster};

use crate::infrastructure::ports::{ClockPort, MonsterCatalogPort, MonsterRepo, RandomPort};
use crate::use_cases::UseCaseError;

pub struct MonsterUseCases {
    monsters: Arc<dyn MonsterRepo>,
    catalog: Arc<dyn MonsterCatalogPort>,
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
}

impl MonsterUseCases {
    pub fn new(
        monsters: Arc<dyn MonsterRepo>,
        catalog: Arc<dyn MonsterCatalogPort>,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            monsters,
            catalog,
            random,
            clock,
        }
    }

    pub async fn list(&self) -> Result<Vec<Monster>, UseCaseError> {
        Ok(self.monsters.list().await?)
    }

    /// Monsters inside the solo-encounter CR band for a character level.
    pub async fn list_for_level(&self, level: i32) -> Result<Vec<Monster>, UseCaseError> {
        let (min, max) = encounter_cr_band(level);
        Ok(self.monsters.list_in_cr_range(min, max).await?)
    }

    /// Uniform random pick from the (optionally CR-capped) roster.
    /// `None` when nothing qualifies.
    pub async fn random_encounter(
        &self,
        max_cr: Option<f64>,
    ) -> Result<Option<Monster>, UseCaseError> {
        let pool = match max_cr {
            Some(cap) => {
                self.monsters
                    .list_in_cr_range(
                        ChallengeRating::from_eighths(0),
                        ChallengeRating::from_f64(cap),
                    )
                    .await?
            }
            None => self.monsters.list().await?,
        };
        if pool.is_empty() {
            return Ok(None);
        }
        let index = self.random.gen_range(0, (pool.len() - 1) as i32) as usize;
        Ok(pool.into_iter().nth(index))
    }

    /// Pull a monster from the external compendium into local storage.
    /// Already-imported slugs return the stored row untouched.
    pub async fn import_from_catalog(&self, slug: &str) -> Result<Monster, UseCaseError> {
        if let Some(existing) = self.monsters.find_by_slug(slug).await? {
            return Ok(existing);
        }

        let fetched = self.catalog.fetch_monster(slug).await?;
        let monster = Monster::new(
            fetched.slug,
            fetched.name,
            ChallengeRating::from_f64(fetched.challenge_rating),
            self.clock.now(),
        )
        .with_combat_stats(fetched.armor_class, fetched.hit_points, "1d6")
        .with_xp_award(fetched.xp)
        .with_monster_type(fetched.monster_type);
        let monster = match fetched.image_url {
            Some(url) => monster.with_image_url(url),
            None => monster,
        };
        monster.validate()?;

        self.monsters.insert(&monster).await?;
        tracing::info!(
            monster_id = %monster.id,
            slug = %monster.api_slug,
            "Imported monster from compendium"
        );
        Ok(monster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, FixedRandom};
    use crate::infrastructure::ports::{
        CatalogMonster, MockMonsterCatalogPort, MockMonsterRepo,
    };
    use chrono::TimeZone;
    use mockall::predicate::*;

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(
            chrono::Utc
                .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        ))
    }

    fn goblin(clock: &FixedClock) -> Monster {
        Monster::new("goblin", "Goblin", ChallengeRating::ONE_QUARTER, clock.0)
            .with_combat_stats(15, 7, "1d6+2")
            .with_xp_award(50)
    }

    fn wolf(clock: &FixedClock) -> Monster {
        Monster::new("wolf", "Wolf", ChallengeRating::ONE_QUARTER, clock.0)
            .with_combat_stats(13, 11, "2d4+2")
            .with_xp_award(50)
            .with_monster_type("beast")
    }

    #[tokio::test]
    async fn random_encounter_uses_the_injected_source() {
        let clock = fixed_clock();
        let roster = vec![goblin(&clock), wolf(&clock)];
        let mut monsters = MockMonsterRepo::new();
        monsters
            .expect_list()
            .returning(move || Ok(roster.clone()));

        let use_cases = MonsterUseCases::new(
            Arc::new(monsters),
            Arc::new(MockMonsterCatalogPort::new()),
            Arc::new(FixedRandom(1)),
            clock,
        );
        let picked = use_cases
            .random_encounter(None)
            .await
            .expect("pick")
            .expect("non-empty roster");
        assert_eq!(picked.api_slug, "wolf");
    }

    #[tokio::test]
    async fn random_encounter_with_empty_roster_is_none() {
        let mut monsters = MockMonsterRepo::new();
        monsters
            .expect_list_in_cr_range()
            .returning(|_, _| Ok(Vec::new()));

        let use_cases = MonsterUseCases::new(
            Arc::new(monsters),
            Arc::new(MockMonsterCatalogPort::new()),
            Arc::new(FixedRandom(0)),
            fixed_clock(),
        );
        let picked = use_cases
            .random_encounter(Some(0.25))
            .await
            .expect("query ok");
        assert!(picked.is_none());
    }

    #[tokio::test]
    async fn list_for_level_queries_the_encounter_band() {
        let clock = fixed_clock();
        let roster = vec![goblin(&clock)];
        let mut monsters = MockMonsterRepo::new();
        monsters
            .expect_list_in_cr_range()
            .with(
                eq(ChallengeRating::ONE_EIGHTH),
                eq(ChallengeRating::ONE_HALF),
            )
            .returning(move |_, _| Ok(roster.clone()));

        let use_cases = MonsterUseCases::new(
            Arc::new(monsters),
            Arc::new(MockMonsterCatalogPort::new()),
            Arc::new(FixedRandom(0)),
            clock,
        );
        let suitable = use_cases.list_for_level(1).await.expect("list");
        assert_eq!(suitable.len(), 1);
    }

    #[tokio::test]
    async fn import_is_idempotent_per_slug() {
        let clock = fixed_clock();
        let existing = goblin(&clock);
        let mut monsters = MockMonsterRepo::new();
        monsters
            .expect_find_by_slug()
            .with(eq("goblin"))
            .returning(move |_| Ok(Some(existing.clone())));
        monsters.expect_insert().never();
        let mut catalog = MockMonsterCatalogPort::new();
        catalog.expect_fetch_monster().never();

        let use_cases = MonsterUseCases::new(
            Arc::new(monsters),
            Arc::new(catalog),
            Arc::new(FixedRandom(0)),
            clock,
        );
        let monster = use_cases.import_from_catalog("goblin").await.expect("import");
        assert_eq!(monster.name, "Goblin");
    }

    #[tokio::test]
    async fn import_fetches_and_stores_new_monsters() {
        let mut monsters = MockMonsterRepo::new();
        monsters.expect_find_by_slug().returning(|_| Ok(None));
        monsters
            .expect_insert()
            .withf(|m: &Monster| {
                m.api_slug == "orc"
                    && m.challenge_rating == ChallengeRating::ONE_HALF
                    && m.xp_award == 100
            })
            .returning(|_| Ok(()));
        let mut catalog = MockMonsterCatalogPort::new();
        catalog
            .expect_fetch_monster()
            .with(eq("orc"))
            .returning(|slug| {
                Ok(CatalogMonster {
                    slug: slug.to_string(),
                    name: "Orc".to_string(),
                    challenge_rating: 0.5,
                    armor_class: 13,
                    hit_points: 15,
                    xp: 100,
                    monster_type: "humanoid".to_string(),
                    image_url: None,
                })
            });

        let use_cases = MonsterUseCases::new(
            Arc::new(monsters),
            Arc::new(catalog),
            Arc::new(FixedRandom(0)),
            fixed_clock(),
        );
        let monster = use_cases.import_from_catalog("orc").await.expect("import");
        assert_eq!(monster.name, "Orc");
        assert_eq!(monster.hit_points, 15);
    }
}
