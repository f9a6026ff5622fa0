pub mod entities;
pub mod error;
pub mod ids;
pub mod progression;
pub mod value_objects;

// Re-export entities (explicit list in entities/mod.rs)
pub use entities::{encounter_cr_band, Character, ChallengeRating, Equipment, Monster};

pub use error::DomainError;

// Re-export the progression engine surface
pub use progression::{
    apply_experience, level_for_total_xp, set_level, xp_for_level, xp_span_of_level,
    ProgressionError, ProgressionSnapshot, MAX_LEVEL, SET_LEVEL_HP_PER_LEVEL,
};

// Re-export ID types
pub use ids::{CharacterId, MonsterId};

// Re-export value objects
pub use value_objects::{
    AbilityScores, CharacterClass, DiceFormula, DiceParseError, StartingLoadout,
};
