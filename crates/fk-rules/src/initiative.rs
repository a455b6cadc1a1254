//! Turn order ranking.

use serde::{Deserialize, Serialize};

/// One actor's place in the turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOrderEntry {
    /// The actor, exactly as supplied by the host.
    pub actor_id: String,
    /// Initiative score (higher acts earlier).
    pub initiative: i32,
    /// 1-based position in the order.
    pub rank: u32,
}

/// Rank actors by descending initiative.
///
/// The sort is stable, so actors with equal initiative keep their input
/// order. Every input pair yields exactly one entry, duplicates included.
pub fn rank_by_initiative(scores: Vec<(String, i32)>) -> Vec<TurnOrderEntry> {
    let mut scores = scores;
    scores.sort_by(|a, b| b.1.cmp(&a.1));
    scores
        .into_iter()
        .zip(1u32..)
        .map(|((actor_id, initiative), rank)| TurnOrderEntry {
            actor_id,
            initiative,
            rank,
        })
        .collect()
}
