//! Dice notation value object
//!
//! Parses damage formulas like "1d8", "2d6+1", "1d12-2". Rolling is the
//! caller's concern; the domain only validates and stores the notation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error when parsing a dice formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The formula string is empty
    #[error("Empty dice formula")]
    Empty,
    /// Invalid format - expected XdY or XdY+Z
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    /// Dice count must be at least 1
    #[error("Dice count must be at least 1")]
    InvalidDiceCount,
    /// Die size must be at least 2
    #[error("Die size must be at least 2")]
    InvalidDieSize,
}

/// A parsed dice formula like "2d6+3"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceFormula {
    /// Number of dice to roll (X in XdY)
    pub dice_count: u8,
    /// Size of each die (Y in XdY)
    pub die_size: u8,
    /// Modifier to add/subtract after rolling (+Z or -Z)
    pub modifier: i32,
}

impl DiceFormula {
    /// Create a new dice formula
    pub fn new(dice_count: u8, die_size: u8, modifier: i32) -> Result<Self, DiceParseError> {
        if dice_count == 0 {
            return Err(DiceParseError::InvalidDiceCount);
        }
        if die_size < 2 {
            return Err(DiceParseError::InvalidDieSize);
        }
        Ok(Self {
            dice_count,
            die_size,
            modifier,
        })
    }

    /// Parse a dice formula string like "1d8+3", "2d6-1", "d20"
    ///
    /// Supported formats:
    /// - "XdY" - Roll X dice of size Y
    /// - "XdY+Z" - Roll X dice of size Y, add Z
    /// - "XdY-Z" - Roll X dice of size Y, subtract Z
    /// - "dY" - Roll 1 die of size Y (shorthand)
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let d_pos = input.find('d').ok_or_else(|| {
            DiceParseError::InvalidFormat(format!("Missing 'd' separator in '{}'", input))
        })?;

        let dice_count_str = &input[..d_pos];
        let dice_count: u8 = if dice_count_str.is_empty() {
            1 // "d20" means "1d20"
        } else {
            dice_count_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid dice count: '{}'", dice_count_str))
            })?
        };
        if dice_count == 0 {
            return Err(DiceParseError::InvalidDiceCount);
        }

        let after_d = &input[d_pos + 1..];
        let (die_size_str, modifier) = if let Some(plus_pos) = after_d.find('+') {
            let die_str = &after_d[..plus_pos];
            let mod_str = &after_d[plus_pos + 1..];
            let modifier: i32 = mod_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid modifier: '+{}'", mod_str))
            })?;
            (die_str, modifier)
        } else if let Some(minus_pos) = after_d.rfind('-') {
            // rfind so a minus inside the modifier digits is not split on
            if minus_pos == 0 {
                return Err(DiceParseError::InvalidFormat(format!(
                    "Invalid die size: '{}'",
                    after_d
                )));
            }
            let die_str = &after_d[..minus_pos];
            let mod_str = &after_d[minus_pos + 1..];
            let modifier: i32 = mod_str.parse::<i32>().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid modifier: '-{}'", mod_str))
            })?;
            (die_str, -modifier)
        } else {
            (after_d, 0)
        };

        let die_size: u8 = die_size_str.parse().map_err(|_| {
            DiceParseError::InvalidFormat(format!("Invalid die size: '{}'", die_size_str))
        })?;

        if die_size < 2 {
            return Err(DiceParseError::InvalidDieSize);
        }

        Ok(Self {
            dice_count,
            die_size,
            modifier,
        })
    }

    /// Minimum possible roll total
    pub fn min_total(&self) -> i32 {
        self.dice_count as i32 + self.modifier
    }

    /// Maximum possible roll total
    pub fn max_total(&self) -> i32 {
        self.dice_count as i32 * self.die_size as i32 + self.modifier
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.dice_count, self.die_size)?;
        if self.modifier > 0 {
            write!(f, "+{}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, "{}", self.modifier)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_formula() {
        let formula = DiceFormula::parse("1d8").expect("valid formula");
        assert_eq!(formula.dice_count, 1);
        assert_eq!(formula.die_size, 8);
        assert_eq!(formula.modifier, 0);
    }

    #[test]
    fn parses_modifiers_and_shorthand() {
        assert_eq!(
            DiceFormula::parse("2d6+1").expect("valid"),
            DiceFormula::new(2, 6, 1).expect("valid")
        );
        assert_eq!(
            DiceFormula::parse("1d12-2").expect("valid"),
            DiceFormula::new(1, 12, -2).expect("valid")
        );
        assert_eq!(
            DiceFormula::parse("d20").expect("valid"),
            DiceFormula::new(1, 20, 0).expect("valid")
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(DiceFormula::parse(""), Err(DiceParseError::Empty));
        assert!(matches!(
            DiceFormula::parse("8"),
            Err(DiceParseError::InvalidFormat(_))
        ));
        assert_eq!(DiceFormula::parse("0d6"), Err(DiceParseError::InvalidDiceCount));
        assert_eq!(DiceFormula::parse("1d1"), Err(DiceParseError::InvalidDieSize));
        assert!(matches!(
            DiceFormula::parse("1d8+x"),
            Err(DiceParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn totals_and_display_round_trip() {
        let formula = DiceFormula::parse("2d6+3").expect("valid");
        assert_eq!(formula.min_total(), 5);
        assert_eq!(formula.max_total(), 15);
        assert_eq!(formula.to_string(), "2d6+3");
        assert_eq!(DiceFormula::parse(&formula.to_string()), Ok(formula));
    }
}
