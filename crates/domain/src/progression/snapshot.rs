//! Immutable progression snapshot of a character.

use super::{level_table, ProgressionError};

/// The progression-relevant subset of a character's state at one instant.
///
/// `level`, `xp_in_level`, and `xp_to_next_level` are always derived from
/// `total_xp` and the level table; there is no way to set them
/// independently, which is what keeps the three values from drifting apart
/// across call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionSnapshot {
    level: i32,
    total_xp: i64,
    xp_in_level: i64,
    xp_to_next_level: i64,
    health: i32,
    max_health: i32,
    constitution_modifier: i32,
}

impl ProgressionSnapshot {
    /// Build a snapshot from persisted state, deriving the level and
    /// in-level XP fields from `total_xp`.
    pub fn from_state(
        total_xp: i64,
        health: i32,
        max_health: i32,
        constitution_modifier: i32,
    ) -> Result<Self, ProgressionError> {
        if health < 0 || health > max_health {
            return Err(ProgressionError::invalid_argument(format!(
                "health must be within 0..={}, got {}",
                max_health, health
            )));
        }
        let level = level_table::level_for_total_xp(total_xp)?;
        let xp_in_level = total_xp - level_table::xp_for_level(level)?;
        let xp_to_next_level = level_table::xp_span_of_level(level)?;
        Ok(Self {
            level,
            total_xp,
            xp_in_level,
            xp_to_next_level,
            health,
            max_health,
            constitution_modifier,
        })
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    /// Cumulative XP ever earned. Keeps growing past the level-20 threshold.
    pub fn total_xp(&self) -> i64 {
        self.total_xp
    }

    /// XP earned since entering the current level.
    pub fn xp_in_level(&self) -> i64 {
        self.xp_in_level
    }

    /// XP span of the current level; 0 at max level.
    pub fn xp_to_next_level(&self) -> i64 {
        self.xp_to_next_level
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn constitution_modifier(&self) -> i32 {
        self.constitution_modifier
    }

    /// Level 20 is a terminal display state, not a progress fraction.
    pub fn is_max_level(&self) -> bool {
        self.level == level_table::MAX_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_level_and_progress_from_total_xp() {
        let snapshot = ProgressionSnapshot::from_state(1000, 12, 12, 2).expect("valid state");
        assert_eq!(snapshot.level(), 3);
        assert_eq!(snapshot.xp_in_level(), 100);
        assert_eq!(snapshot.xp_to_next_level(), 1800);
        assert!(!snapshot.is_max_level());
    }

    #[test]
    fn max_level_has_zero_span() {
        let snapshot = ProgressionSnapshot::from_state(400000, 150, 150, 3).expect("valid state");
        assert_eq!(snapshot.level(), 20);
        assert_eq!(snapshot.xp_in_level(), 45000);
        assert_eq!(snapshot.xp_to_next_level(), 0);
        assert!(snapshot.is_max_level());
    }

    #[test]
    fn rejects_negative_total_xp() {
        assert!(matches!(
            ProgressionSnapshot::from_state(-1, 10, 10, 0),
            Err(ProgressionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_health_outside_bounds() {
        assert!(ProgressionSnapshot::from_state(0, -1, 10, 0).is_err());
        assert!(ProgressionSnapshot::from_state(0, 11, 10, 0).is_err());
        // health == max_health and health == 0 are both fine
        assert!(ProgressionSnapshot::from_state(0, 10, 10, 0).is_ok());
        assert!(ProgressionSnapshot::from_state(0, 0, 10, 0).is_ok());
    }
}
