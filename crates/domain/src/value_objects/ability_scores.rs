//! The six D&D ability scores and their modifiers.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lowest legal ability score.
pub const MIN_SCORE: i32 = 1;

/// Highest legal ability score.
pub const MAX_SCORE: i32 = 20;

/// Modifier for a single ability score.
///
/// Truncating division, matching the original service's arithmetic: a score
/// of 9 yields 0, not the tabletop -1.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10) / 2
}

/// A character's six ability scores (1-20 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Default for AbilityScores {
    /// The stock array new characters start with.
    fn default() -> Self {
        Self {
            strength: 16,
            dexterity: 14,
            constitution: 15,
            intelligence: 12,
            wisdom: 13,
            charisma: 10,
        }
    }
}

impl AbilityScores {
    pub fn strength_modifier(&self) -> i32 {
        ability_modifier(self.strength)
    }

    pub fn dexterity_modifier(&self) -> i32 {
        ability_modifier(self.dexterity)
    }

    pub fn constitution_modifier(&self) -> i32 {
        ability_modifier(self.constitution)
    }

    pub fn intelligence_modifier(&self) -> i32 {
        ability_modifier(self.intelligence)
    }

    pub fn wisdom_modifier(&self) -> i32 {
        ability_modifier(self.wisdom)
    }

    pub fn charisma_modifier(&self) -> i32 {
        ability_modifier(self.charisma)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let scores = [
            ("strength", self.strength),
            ("dexterity", self.dexterity),
            ("constitution", self.constitution),
            ("intelligence", self.intelligence),
            ("wisdom", self.wisdom),
            ("charisma", self.charisma),
        ];
        for (name, score) in scores {
            if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                return Err(DomainError::validation(format!(
                    "{} must be between {} and {}, got {}",
                    name, MIN_SCORE, MAX_SCORE, score
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_follow_truncating_division() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(15), 2);
        assert_eq!(ability_modifier(16), 3);
        assert_eq!(ability_modifier(20), 5);
        assert_eq!(ability_modifier(8), -1);
        // Truncation toward zero for odd scores below 10
        assert_eq!(ability_modifier(9), 0);
    }

    #[test]
    fn default_array_matches_creation_defaults() {
        let scores = AbilityScores::default();
        assert_eq!(scores.strength, 16);
        assert_eq!(scores.constitution_modifier(), 2);
        assert_eq!(scores.charisma_modifier(), 0);
        scores.validate().expect("defaults are valid");
    }

    #[test]
    fn validate_rejects_out_of_range_scores() {
        let mut scores = AbilityScores::default();
        scores.wisdom = 0;
        assert!(scores.validate().is_err());
        scores.wisdom = 21;
        assert!(scores.validate().is_err());
    }

    #[test]
    fn serializes_in_camel_case() {
        let json = serde_json::to_string(&AbilityScores::default()).expect("serializes");
        assert!(json.contains("\"strength\":16"));
        let parsed: AbilityScores = serde_json::from_str(&json).expect("parses");
        assert_eq!(parsed, AbilityScores::default());
    }
}
