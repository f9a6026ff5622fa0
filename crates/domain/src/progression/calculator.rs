//! Progression transforms: XP gain and explicit level assignment.

use super::{level_table, ProgressionError, ProgressionSnapshot};

/// Flat max-HP increase per level gained through [`set_level`].
///
/// Deliberately a different policy than the constitution-based growth in
/// [`apply_experience`]: set-level is a testing affordance and keeps the
/// flat rate the original jump-to-level path used.
pub const SET_LEVEL_HP_PER_LEVEL: i32 = 5;

/// Apply a non-negative XP delta to a snapshot.
///
/// Total XP keeps accumulating past the level-20 threshold, but the level
/// itself is pinned at 20. When one delta crosses several thresholds, the
/// HP side effect is applied once per level gained, not as a single lump:
/// each level grants `max(1, 1 + constitution_modifier)` hit points to both
/// current and maximum health (leveling up heals).
pub fn apply_experience(
    snapshot: &ProgressionSnapshot,
    xp_delta: i64,
) -> Result<ProgressionSnapshot, ProgressionError> {
    if xp_delta < 0 {
        return Err(ProgressionError::invalid_argument(format!(
            "XP delta cannot be negative, got {}",
            xp_delta
        )));
    }

    let new_total = snapshot.total_xp() + xp_delta;
    let new_level = level_table::level_for_total_xp(new_total)?;

    let mut health = snapshot.health();
    let mut max_health = snapshot.max_health();
    for _level in (snapshot.level() + 1)..=new_level {
        let hp_gain = (1 + snapshot.constitution_modifier()).max(1);
        max_health += hp_gain;
        health += hp_gain;
    }

    ProgressionSnapshot::from_state(
        new_total,
        health,
        max_health,
        snapshot.constitution_modifier(),
    )
}

/// Jump a character to an exact level (up or down).
///
/// Total XP snaps to the start of the target level, so in-level progress
/// resets to zero. Max HP grows by a flat [`SET_LEVEL_HP_PER_LEVEL`] per
/// level gained (never shrinks when moving down) and the character is fully
/// healed. This does not run the per-level side-effect loop that
/// [`apply_experience`] uses.
pub fn set_level(
    snapshot: &ProgressionSnapshot,
    target_level: i32,
) -> Result<ProgressionSnapshot, ProgressionError> {
    let new_total = level_table::xp_for_level(target_level)?;

    let levels_gained = (target_level - snapshot.level()).max(0);
    let max_health = snapshot.max_health() + levels_gained * SET_LEVEL_HP_PER_LEVEL;

    ProgressionSnapshot::from_state(
        new_total,
        max_health,
        max_health,
        snapshot.constitution_modifier(),
    )
}
