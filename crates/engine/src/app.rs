//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::clock::{SystemClock, SystemRandom};
use crate::infrastructure::ports::{
    CharacterRepo, ClockPort, MonsterCatalogPort, MonsterRepo, RandomPort,
};
use crate::use_cases::{
    CharacterUseCases, GainExperience, MonsterUseCases, SeedService, SetLevel, VitalsUseCases,
};

/// Main application state.
///
/// Holds the repositories and use cases. Passed to HTTP handlers via Axum
/// state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for the repository ports.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
    pub monster: Arc<dyn MonsterRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub characters: CharacterUseCases,
    pub gain_experience: GainExperience,
    pub set_level: SetLevel,
    pub vitals: VitalsUseCases,
    pub monsters: MonsterUseCases,
    pub seed: SeedService,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        monster_repo: Arc<dyn MonsterRepo>,
        catalog: Arc<dyn MonsterCatalogPort>,
    ) -> Self {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let random: Arc<dyn RandomPort> = Arc::new(SystemRandom::new());

        let use_cases = UseCases {
            characters: CharacterUseCases::new(character_repo.clone(), clock.clone()),
            gain_experience: GainExperience::new(character_repo.clone(), clock.clone()),
            set_level: SetLevel::new(character_repo.clone(), clock.clone()),
            vitals: VitalsUseCases::new(character_repo.clone(), clock.clone()),
            monsters: MonsterUseCases::new(
                monster_repo.clone(),
                catalog,
                random,
                clock.clone(),
            ),
            seed: SeedService::new(character_repo.clone(), monster_repo.clone(), clock),
        };

        Self {
            repositories: Repositories {
                character: character_repo,
                monster: monster_repo,
            },
            use_cases,
        }
    }
}
