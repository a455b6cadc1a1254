//! Dice roll results.

use serde::{Deserialize, Serialize};

/// The outcome of evaluating a [`DiceExpression`](super::DiceExpression).
///
/// Produced fresh by every roll and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die faces, in the order they were drawn.
    pub rolls: Vec<u32>,
    /// Sum of the faces plus the expression's modifier.
    pub total: i32,
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total)
    }
}
