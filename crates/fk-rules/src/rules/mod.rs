//! The rules engine contract: requests, results, and the [`RulesEngine`] trait.
//!
//! Hosts pick a [`SystemKind`] once per process, build an engine through the
//! factory in [`crate::systems`], call [`RulesEngine::init_session`] once per
//! game session, and then issue checks, damage rolls, and turn order
//! requests as combat actions happen. Every call is synchronous and bounded.

pub mod modifiers;
pub mod preset;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use crate::initiative::TurnOrderEntry;
use crate::error::{EngineError, EngineResult};
#[cfg(any(test, feature = "testing"))]
use crate::session::Session;
use crate::session::SessionAudit;
use modifiers::ModifierTable;

/// A supported tabletop rules family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SystemKind {
    /// D&D 5th edition style d20 resolution.
    #[default]
    #[serde(rename = "dnd5e")]
    Dnd5e,
    /// Powered by the Apocalypse style 2d6 resolution.
    #[serde(rename = "pbta")]
    Pbta,
}

impl SystemKind {
    /// Every supported system, in display order.
    pub const ALL: [SystemKind; 2] = [SystemKind::Dnd5e, SystemKind::Pbta];

    /// The configuration key selecting this system.
    pub fn key(self) -> &'static str {
        match self {
            Self::Dnd5e => "dnd5e",
            Self::Pbta => "pbta",
        }
    }

    /// Human-readable system name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Dnd5e => preset::dnd5e().name,
            Self::Pbta => preset::pbta().name,
        }
    }
}

impl FromStr for SystemKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| EngineError::UnsupportedSystem(s.to_string()))
    }
}

impl std::fmt::Display for SystemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A request to test one actor's skill.
///
/// `actor_id` and `skill` are opaque to the engine; unknown values resolve
/// to a zero modifier rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityCheckRequest {
    /// The acting character.
    pub actor_id: String,
    /// Skill, move, or stat being tested.
    pub skill: String,
    /// Target number. Each system supplies its own default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<i32>,
}

impl AbilityCheckRequest {
    /// Build a request with an explicit difficulty.
    pub fn new(actor_id: impl Into<String>, skill: impl Into<String>, difficulty: i32) -> Self {
        Self {
            actor_id: actor_id.into(),
            skill: skill.into(),
            difficulty: Some(difficulty),
        }
    }

    /// Build a request that leaves the difficulty to the system default.
    pub fn with_default_difficulty(actor_id: impl Into<String>, skill: impl Into<String>) -> Self {
        Self {
            actor_id: actor_id.into(),
            skill: skill.into(),
            difficulty: None,
        }
    }
}

/// The result of an ability check.
///
/// Plain data: it can be serialised into an API response or message log,
/// but it cannot be recomputed from its fields. Only replaying the same seed
/// and call sequence reproduces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityCheckResult {
    /// Whether the check passed.
    pub success: bool,
    /// The unmodified dice result.
    pub roll: i32,
    /// Dice result plus modifiers.
    pub total: i32,
    /// `total - difficulty`.
    pub margin: i32,
}

/// Capability interface shared by every rules system.
///
/// `init_session` must run before any other operation; calling one first
/// fails with [`EngineError::UninitializedSession`]. An engine owns its
/// RNG state outright and must not be shared between concurrent game
/// sessions. Hosts only ever see a [`SessionAudit`] of it.
pub trait RulesEngine: Send + std::fmt::Debug {
    /// Which rules family this engine implements.
    fn system(&self) -> SystemKind;

    /// Start (or restart) a session seeded with `seed`.
    fn init_session(&mut self, seed: u64);

    /// Replace the current session with a prepared one, e.g. scripted dice.
    #[cfg(any(test, feature = "testing"))]
    fn attach_session(&mut self, session: Session);

    /// Seed and draw count of the current session, if one has been started.
    fn session_audit(&self) -> Option<SessionAudit>;

    /// Returns true once a session has been started.
    fn has_session(&self) -> bool {
        self.session_audit().is_some()
    }

    /// Host-supplied modifiers consulted by ability checks.
    fn modifiers(&self) -> &ModifierTable;

    /// Mutable access to the modifier table.
    fn modifiers_mut(&mut self) -> &mut ModifierTable;

    /// Roll a skill test for one actor.
    fn ability_check(&mut self, request: &AbilityCheckRequest) -> EngineResult<AbilityCheckResult>;

    /// Roll a dice expression and return its total.
    fn damage_roll(&mut self, expression: &str) -> EngineResult<i32>;

    /// Order the given actors for an encounter.
    ///
    /// The output is always a permutation of `actor_ids`.
    fn turn_order(&mut self, actor_ids: &[String]) -> EngineResult<Vec<TurnOrderEntry>>;
}
