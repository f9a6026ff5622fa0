//! Monster entity - opponents sourced from the external compendium.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::ids::MonsterId;

/// Challenge rating, stored in eighths so the fractional ratings
/// (1/8, 1/4, 1/2) stay exact integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChallengeRating(i32);

impl ChallengeRating {
    pub const ONE_EIGHTH: ChallengeRating = ChallengeRating(1);
    pub const ONE_QUARTER: ChallengeRating = ChallengeRating(2);
    pub const ONE_HALF: ChallengeRating = ChallengeRating(4);

    pub const fn from_eighths(eighths: i32) -> Self {
        Self(eighths)
    }

    pub const fn from_whole(rating: i32) -> Self {
        Self(rating * 8)
    }

    pub const fn eighths(self) -> i32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 8.0
    }

    /// Nearest representable rating for a wire/query value like `0.25`.
    pub fn from_f64(value: f64) -> Self {
        Self((value * 8.0).round() as i32)
    }
}

impl fmt::Display for ChallengeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ONE_EIGHTH => write!(f, "1/8"),
            Self::ONE_QUARTER => write!(f, "1/4"),
            Self::ONE_HALF => write!(f, "1/2"),
            other if other.0 % 8 == 0 => write!(f, "{}", other.0 / 8),
            other => write!(f, "{}", other.as_f64()),
        }
    }
}

/// Suitable solo-encounter CR band for a character level:
/// roughly level/8 up to level/2, floored at 1/8 and 1/4.
pub fn encounter_cr_band(level: i32) -> (ChallengeRating, ChallengeRating) {
    let min = ChallengeRating::from_eighths(level.max(1));
    let max = ChallengeRating::from_eighths((level * 4).max(2));
    (min, max)
}

/// A monster stat block.
#[derive(Debug, Clone)]
pub struct Monster {
    pub id: MonsterId,
    /// Identifier in the external compendium (e.g. "goblin")
    pub api_slug: String,
    pub name: String,
    pub challenge_rating: ChallengeRating,
    pub armor_class: i32,
    pub hit_points: i32,
    /// Damage dice notation, e.g. "1d6+2"
    pub damage_dice: String,
    /// XP awarded when defeated
    pub xp_award: i64,
    /// Type for filtering (beast, humanoid, ...)
    pub monster_type: String,
    pub attack_bonus: Option<i32>,
    pub attack_name: Option<String>,
    pub image_url: Option<String>,
    pub has_only_physical_attacks: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Monster {
    pub fn new(
        api_slug: impl Into<String>,
        name: impl Into<String>,
        challenge_rating: ChallengeRating,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MonsterId::new(),
            api_slug: api_slug.into(),
            name: name.into(),
            challenge_rating,
            armor_class: 10,
            hit_points: 1,
            damage_dice: "1d4".to_string(),
            xp_award: 0,
            monster_type: "humanoid".to_string(),
            attack_bonus: None,
            attack_name: None,
            image_url: None,
            has_only_physical_attacks: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_combat_stats(
        mut self,
        armor_class: i32,
        hit_points: i32,
        damage_dice: impl Into<String>,
    ) -> Self {
        self.armor_class = armor_class;
        self.hit_points = hit_points;
        self.damage_dice = damage_dice.into();
        self
    }

    pub fn with_xp_award(mut self, xp_award: i64) -> Self {
        self.xp_award = xp_award;
        self
    }

    pub fn with_monster_type(mut self, monster_type: impl Into<String>) -> Self {
        self.monster_type = monster_type.into();
        self
    }

    pub fn with_attack(mut self, name: impl Into<String>, bonus: i32) -> Self {
        self.attack_name = Some(name.into());
        self.attack_bonus = Some(bonus);
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Whether this monster sits inside the encounter band for a level.
    pub fn suits_level(&self, level: i32) -> bool {
        let (min, max) = encounter_cr_band(level);
        self.challenge_rating >= min && self.challenge_rating <= max
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("Monster name cannot be empty"));
        }
        if self.hit_points < 1 {
            return Err(DomainError::validation(format!(
                "hit points must be at least 1, got {}",
                self.hit_points
            )));
        }
        if self.xp_award < 0 {
            return Err(DomainError::validation("XP award cannot be negative"));
        }
        Ok(())
    }
}
