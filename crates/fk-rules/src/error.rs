//! Error types for the rules engine.

/// Reasons a dice notation string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceParseError {
    /// The expression was empty.
    #[error("empty dice expression")]
    Empty,

    /// The text does not match `<count>d<sides>[+|-<modifier>]`.
    #[error("invalid dice notation: '{0}'")]
    Syntax(String),

    /// The dice count was zero.
    #[error("dice count must be at least 1 (in '{0}')")]
    NonPositiveCount(String),

    /// A die needs at least two faces.
    #[error("a die needs at least 2 sides, got {sides} (in '{notation}')")]
    TooFewSides {
        /// The rejected number of sides.
        sides: u32,
        /// The original notation.
        notation: String,
    },

    /// More dice than a single expression may roll.
    #[error("at most {max} dice per expression, got {count}")]
    TooManyDice {
        /// The requested dice count.
        count: u32,
        /// The largest accepted count.
        max: u32,
    },

    /// More faces than a single die may have.
    #[error("at most {max} sides per die, got {sides}")]
    TooManySides {
        /// The requested number of sides.
        sides: u32,
        /// The largest accepted number of sides.
        max: u32,
    },

    /// The flat modifier is outside the accepted range.
    #[error("modifier {modifier} is out of range (limit ±{max})")]
    ModifierOutOfRange {
        /// The parsed modifier.
        modifier: i64,
        /// The largest accepted magnitude.
        max: i32,
    },
}

/// Errors surfaced by a rules engine to its immediate caller.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A dice expression could not be parsed.
    #[error(transparent)]
    Parse(#[from] DiceParseError),

    /// The factory was asked for a rules system it does not know.
    #[error("unsupported rules system: '{0}'")]
    UnsupportedSystem(String),

    /// An engine method was called before `init_session`.
    #[error("no session: call init_session before {0}")]
    UninitializedSession(&'static str),
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
