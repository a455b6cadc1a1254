//! Tabletop rules engine for Fablekeep.
//!
//! Resolves the objective mechanics of play (dice expressions, ability
//! checks, damage totals, and turn order) independently of the narrator.
//! Two systems ship behind one [`RulesEngine`] trait: a d20 system
//! ([`DnD5eEngine`]) and a Powered by the Apocalypse system
//! ([`PbtaEngine`]). Every roll comes from a seeded session, so replaying
//! the same seed and call sequence reproduces every result.

pub mod config;
pub mod dice;
pub mod error;
pub mod initiative;
pub mod rules;
pub mod session;
pub mod systems;

pub use config::EngineConfig;
#[cfg(any(test, feature = "testing"))]
pub use dice::ScriptedDice;
pub use dice::{DiceExpression, DieSource, RollResult, SeededDice};
pub use error::{DiceParseError, EngineError, EngineResult};
pub use initiative::TurnOrderEntry;
pub use rules::modifiers::ModifierTable;
pub use rules::{AbilityCheckRequest, AbilityCheckResult, RulesEngine, SystemKind};
pub use session::{Session, SessionAudit};
pub use systems::{
    DnD5eEngine, MoveOutcome, PbtaEngine, engine_for, make_engine, make_engine_from_config,
};
