//! Concrete rules systems and the factory that selects between them.

pub mod dnd5e;
pub mod pbta;

pub use dnd5e::DnD5eEngine;
pub use pbta::{MoveOutcome, PbtaEngine};

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::rules::modifiers::ModifierTable;
use crate::rules::{RulesEngine, SystemKind};

/// Build a fresh engine for the system named by `kind` (`"dnd5e"` or `"pbta"`).
///
/// Unknown keys fail with [`EngineError::UnsupportedSystem`](crate::EngineError::UnsupportedSystem)
/// and no engine is built. The returned engine has no session yet.
pub fn make_engine(kind: &str) -> EngineResult<Box<dyn RulesEngine>> {
    let kind: SystemKind = kind.parse()?;
    Ok(engine_for(kind, ModifierTable::new()))
}

/// Build a fresh engine for an already-parsed system kind.
pub fn engine_for(kind: SystemKind, modifiers: ModifierTable) -> Box<dyn RulesEngine> {
    match kind {
        SystemKind::Dnd5e => Box::new(DnD5eEngine::with_modifiers(modifiers)),
        SystemKind::Pbta => Box::new(PbtaEngine::with_modifiers(modifiers)),
    }
}

/// Build an engine from configuration and start its session with the configured seed.
pub fn make_engine_from_config(config: &EngineConfig) -> Box<dyn RulesEngine> {
    tracing::debug!(
        system = %config.system,
        seed = config.seed,
        host_modifiers = !config.modifiers.is_empty(),
        "building engine from config"
    );
    let mut engine = engine_for(config.system, config.modifiers.clone());
    engine.init_session(config.seed);
    engine
}
