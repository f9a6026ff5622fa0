//! Canonical XP-to-level mapping for levels 1-20.

use super::ProgressionError;

/// Lowest attainable character level.
pub const MIN_LEVEL: i32 = 1;

/// Highest attainable character level.
pub const MAX_LEVEL: i32 = 20;

/// Cumulative XP required to *reach* each level in D&D 5e.
/// Index is level - 1 (so level 1 = index 0).
const XP_THRESHOLDS: [i64; 20] = [
    0,      // Level 1
    300,    // Level 2
    900,    // Level 3
    2700,   // Level 4
    6500,   // Level 5
    14000,  // Level 6
    23000,  // Level 7
    34000,  // Level 8
    48000,  // Level 9
    64000,  // Level 10
    85000,  // Level 11
    100000, // Level 12
    120000, // Level 13
    140000, // Level 14
    165000, // Level 15
    195000, // Level 16
    225000, // Level 17
    265000, // Level 18
    305000, // Level 19
    355000, // Level 20
];

/// Total XP required to reach a given level. Level 1 maps to 0.
pub fn xp_for_level(level: i32) -> Result<i64, ProgressionError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(ProgressionError::out_of_range(format!(
            "level must be between {} and {}, got {}",
            MIN_LEVEL, MAX_LEVEL, level
        )));
    }
    Ok(XP_THRESHOLDS[(level - 1) as usize])
}

/// Highest level whose threshold is at or below the given total XP,
/// clamped to [1, 20]. Negative XP is never valid.
pub fn level_for_total_xp(total_xp: i64) -> Result<i32, ProgressionError> {
    if total_xp < 0 {
        return Err(ProgressionError::invalid_argument(format!(
            "total XP cannot be negative, got {}",
            total_xp
        )));
    }
    for (i, &threshold) in XP_THRESHOLDS.iter().enumerate().rev() {
        if total_xp >= threshold {
            return Ok((i + 1) as i32);
        }
    }
    Ok(MIN_LEVEL)
}

/// XP span of a level: the distance from its threshold to the next one.
///
/// Level 20 has no successor; by convention its span is 0 so callers must
/// branch on max level instead of computing a progress fraction.
pub fn xp_span_of_level(level: i32) -> Result<i64, ProgressionError> {
    if level == MAX_LEVEL {
        return Ok(0);
    }
    Ok(xp_for_level(level + 1)? - xp_for_level(level)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xp_thresholds() {
        // Level 1 starts at 0 XP
        assert_eq!(xp_for_level(1), Ok(0));
        // Level 2 requires 300 XP
        assert_eq!(xp_for_level(2), Ok(300));
        // Level 5 requires 6500 XP
        assert_eq!(xp_for_level(5), Ok(6500));
        // Level 20 requires 355000 XP
        assert_eq!(xp_for_level(20), Ok(355000));
    }

    #[test]
    fn thresholds_strictly_increase() {
        for level in MIN_LEVEL..MAX_LEVEL {
            let here = xp_for_level(level).expect("valid level");
            let next = xp_for_level(level + 1).expect("valid level");
            assert!(here < next, "threshold for level {} not below next", level);
        }
    }

    #[test]
    fn xp_for_level_rejects_out_of_range() {
        assert!(matches!(
            xp_for_level(0),
            Err(ProgressionError::OutOfRange(_))
        ));
        assert!(matches!(
            xp_for_level(21),
            Err(ProgressionError::OutOfRange(_))
        ));
        assert!(matches!(
            xp_for_level(-3),
            Err(ProgressionError::OutOfRange(_))
        ));
    }

    #[test]
    fn level_from_total_xp() {
        assert_eq!(level_for_total_xp(0), Ok(1));
        assert_eq!(level_for_total_xp(299), Ok(1));
        assert_eq!(level_for_total_xp(300), Ok(2));
        assert_eq!(level_for_total_xp(6499), Ok(4));
        assert_eq!(level_for_total_xp(6500), Ok(5));
        // One below and at the level-20 threshold
        assert_eq!(level_for_total_xp(354999), Ok(19));
        assert_eq!(level_for_total_xp(355000), Ok(20));
        // Clamped at 20 for anything beyond
        assert_eq!(level_for_total_xp(999999999), Ok(20));
    }

    #[test]
    fn level_for_total_xp_rejects_negative() {
        assert!(matches!(
            level_for_total_xp(-1),
            Err(ProgressionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn derivation_is_stable() {
        // xp_for_level(level_for_total_xp(x)) <= x, and x is below the next
        // threshold unless already at max level.
        for &total in &[0i64, 1, 299, 300, 899, 2700, 47999, 354999, 355000, 400000] {
            let level = level_for_total_xp(total).expect("non-negative");
            assert!(xp_for_level(level).expect("valid") <= total);
            if level < MAX_LEVEL {
                assert!(total < xp_for_level(level + 1).expect("valid"));
            }
        }
    }

    #[test]
    fn span_of_level() {
        assert_eq!(xp_span_of_level(1), Ok(300));
        assert_eq!(xp_span_of_level(2), Ok(600));
        assert_eq!(xp_span_of_level(19), Ok(50000));
        // Terminal sentinel at max level
        assert_eq!(xp_span_of_level(20), Ok(0));
        assert!(matches!(
            xp_span_of_level(21),
            Err(ProgressionError::OutOfRange(_))
        ));
    }
}
