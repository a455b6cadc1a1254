//! Engine configuration.

use crate::rules::SystemKind;
use crate::rules::modifiers::ModifierTable;

/// Everything needed to build a ready-to-use engine.
///
/// The system is chosen explicitly here rather than read from process-wide
/// state, so engines for different sessions can be built side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Which rules family to use.
    pub system: SystemKind,
    /// Seed for the first session.
    pub seed: u64,
    /// Modifiers known up front.
    pub modifiers: ModifierTable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            system: SystemKind::Dnd5e,
            seed: 42,
            modifiers: ModifierTable::new(),
        }
    }
}

impl EngineConfig {
    /// Set the rules system.
    pub fn with_system(mut self, system: SystemKind) -> Self {
        self.system = system;
        self
    }

    /// Set the session seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Record a modifier for one of an actor's skills or stats.
    pub fn with_modifier(mut self, actor_id: &str, name: &str, value: i32) -> Self {
        self.modifiers.set(actor_id, name, value);
        self
    }
}
