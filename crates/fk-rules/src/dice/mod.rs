//! Dice notation, rolling, and random sources.
//!
//! The only textual protocol the engine speaks is `<count>d<sides>[+|-<modifier>]`,
//! e.g. `2d6+3`, `1d20`, `4d4-1`. The `d` is case-insensitive and no whitespace
//! is accepted anywhere in the expression.

pub mod roll;
pub mod source;

pub use roll::RollResult;
#[cfg(any(test, feature = "testing"))]
pub use source::ScriptedDice;
pub use source::{DieSource, SeededDice};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiceParseError;

/// Largest dice count accepted in one expression.
pub const MAX_DICE: u32 = 1000;
/// Largest number of sides accepted on one die.
pub const MAX_SIDES: u32 = 10_000;
/// Largest modifier magnitude accepted in one expression.
pub const MAX_MODIFIER: i32 = 100_000;

/// A parsed dice expression such as `2d6+3`.
///
/// Always holds `count >= 1` and `sides >= 2`; there is no way to build one
/// other than through [`DiceExpression::parse`] or [`DiceExpression::new`],
/// both of which check those bounds. On the wire it is the notation string,
/// and deserializing goes through the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiceExpression {
    count: u32,
    sides: u32,
    modifier: i32,
}

impl DiceExpression {
    /// Build an expression from its parts, applying the same bounds as the parser.
    pub fn new(count: u32, sides: u32, modifier: i32) -> Result<Self, DiceParseError> {
        let notation = || format_notation(count, sides, modifier);
        if count == 0 {
            return Err(DiceParseError::NonPositiveCount(notation()));
        }
        if count > MAX_DICE {
            return Err(DiceParseError::TooManyDice {
                count,
                max: MAX_DICE,
            });
        }
        if sides < 2 {
            return Err(DiceParseError::TooFewSides {
                sides,
                notation: notation(),
            });
        }
        if sides > MAX_SIDES {
            return Err(DiceParseError::TooManySides {
                sides,
                max: MAX_SIDES,
            });
        }
        if modifier.unsigned_abs() > MAX_MODIFIER.unsigned_abs() {
            return Err(DiceParseError::ModifierOutOfRange {
                modifier: i64::from(modifier),
                max: MAX_MODIFIER,
            });
        }
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// Parse dice notation like `"2d6+3"`, `"1D20"`, or `"4d4-1"`.
    pub fn parse(notation: &str) -> Result<Self, DiceParseError> {
        if notation.is_empty() {
            return Err(DiceParseError::Empty);
        }
        let syntax = || DiceParseError::Syntax(notation.to_string());

        let (count_part, rest) = notation.split_once(['d', 'D']).ok_or_else(syntax)?;
        let (sides_part, modifier_part) = match rest.find(['+', '-']) {
            Some(pos) => {
                let (sides, modifier) = rest.split_at(pos);
                (sides, Some(modifier))
            }
            None => (rest, None),
        };

        let count = parse_digits::<u32>(count_part).ok_or_else(syntax)?;
        let sides = parse_digits::<u32>(sides_part).ok_or_else(syntax)?;

        let modifier = match modifier_part {
            None => 0,
            Some(signed) => {
                let (negative, digits) = match signed.split_at(1) {
                    ("+", digits) => (false, digits),
                    (_, digits) => (true, digits),
                };
                let magnitude = parse_digits::<i64>(digits).ok_or_else(syntax)?;
                let value = if negative { -magnitude } else { magnitude };
                if value.abs() > i64::from(MAX_MODIFIER) {
                    return Err(DiceParseError::ModifierOutOfRange {
                        modifier: value,
                        max: MAX_MODIFIER,
                    });
                }
                // Bounded by MAX_MODIFIER above.
                value as i32
            }
        };

        if count == 0 {
            return Err(DiceParseError::NonPositiveCount(notation.to_string()));
        }
        if sides < 2 {
            return Err(DiceParseError::TooFewSides {
                sides,
                notation: notation.to_string(),
            });
        }
        Self::new(count, sides, modifier)
    }

    /// Number of dice rolled.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Faces on each die.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Flat modifier added to the dice sum.
    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Smallest total this expression can produce.
    pub fn min_total(&self) -> i32 {
        self.count as i32 + self.modifier
    }

    /// Largest total this expression can produce.
    pub fn max_total(&self) -> i32 {
        (self.count * self.sides) as i32 + self.modifier
    }

    /// Roll every die against `source` and add the modifier.
    pub fn roll(&self, source: &mut dyn DieSource) -> RollResult {
        let rolls: Vec<u32> = (0..self.count)
            .map(|_| source.roll_die(self.sides))
            .collect();
        let sum: u32 = rolls.iter().sum();
        let total = sum as i32 + self.modifier;
        tracing::trace!(expression = %self, ?rolls, total, "rolled dice expression");
        RollResult { rolls, total }
    }
}

impl FromStr for DiceExpression {
    type Err = DiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DiceExpression {
    type Error = DiceParseError;

    fn try_from(notation: String) -> Result<Self, Self::Error> {
        Self::parse(&notation)
    }
}

impl From<DiceExpression> for String {
    fn from(expression: DiceExpression) -> Self {
        expression.to_string()
    }
}

impl std::fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            format_notation(self.count, self.sides, self.modifier)
        )
    }
}

/// Parse a non-empty run of ASCII digits; signs and whitespace are rejected.
fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn format_notation(count: u32, sides: u32, modifier: i32) -> String {
    match modifier {
        0 => format!("{count}d{sides}"),
        m if m > 0 => format!("{count}d{sides}+{m}"),
        m => format!("{count}d{sides}{m}"),
    }
}
