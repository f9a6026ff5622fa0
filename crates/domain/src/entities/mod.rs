//! Entities - domain objects with identity and lifecycle.

mod character;
mod monster;

pub use character::{Character, Equipment};
pub use monster::{encounter_cr_band, ChallengeRating, Monster};
