//! Host-supplied skill and stat modifiers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-actor modifiers the host knows about.
///
/// Actor IDs are opaque and matched exactly. Skill and stat names are
/// matched after [`normalize_name`]. Anything missing resolves to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierTable {
    actors: HashMap<String, HashMap<String, i32>>,
}

impl ModifierTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a modifier for one of an actor's skills or stats.
    pub fn set(&mut self, actor_id: &str, name: &str, value: i32) {
        self.actors
            .entry(actor_id.to_string())
            .or_default()
            .insert(normalize_name(name), value);
    }

    /// Look up a single entry.
    pub fn get(&self, actor_id: &str, name: &str) -> Option<i32> {
        self.actors
            .get(actor_id)?
            .get(&normalize_name(name))
            .copied()
    }

    /// Modifier for a check: the skill entry, else the governing stat's, else 0.
    pub fn resolve(&self, actor_id: &str, skill: &str, governing_stat: Option<&str>) -> i32 {
        self.get(actor_id, skill)
            .or_else(|| governing_stat.and_then(|stat| self.get(actor_id, stat)))
            .unwrap_or(0)
    }

    /// Returns true if no modifiers are recorded.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

/// Canonical form of a skill or stat name: trimmed, lower-case, with spaces
/// and hyphens folded to underscores.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
