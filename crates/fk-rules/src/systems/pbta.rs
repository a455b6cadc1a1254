//! PbtA adapter (Powered by the Apocalypse style).
//!
//! Moves roll `2d6 + stat` and read the total against fixed lines: 10+ is a
//! strong hit, 7-9 a weak hit, 6- a miss. Both hits report
//! `success = true` on the binary [`AbilityCheckResult`], and
//! [`MoveOutcome::of`] recovers the tier from the total.
//!
//! The lines do not move with the request. A caller-supplied difficulty is
//! ignored, and `margin` is always measured against 7.
//!
//! PbtA has no initiative. Turn order keeps the input order unchanged and
//! draws no dice; every entry carries initiative 0.

use serde::{Deserialize, Serialize};

use crate::dice::{DiceExpression, DieSource};
use crate::error::EngineResult;
use crate::initiative::{self, TurnOrderEntry};
use crate::rules::modifiers::ModifierTable;
use crate::rules::preset::{self, SystemPreset};
use crate::rules::{AbilityCheckRequest, AbilityCheckResult, RulesEngine, SystemKind};
use crate::session::{self, Session, SessionAudit};

/// Lowest total that counts as a hit; also the difficulty margins use.
pub const HIT_LINE: i32 = 7;

/// Lowest total that counts as a strong hit.
pub const STRONG_HIT_LINE: i32 = 10;

/// The narrative tier of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveOutcome {
    /// Full success (10+).
    Strong,
    /// Success at a cost (7-9).
    Weak,
    /// The GM makes a move (6-).
    Miss,
}

impl MoveOutcome {
    /// Classify a move total.
    pub fn from_total(total: i32) -> Self {
        if total >= STRONG_HIT_LINE {
            Self::Strong
        } else if total >= HIT_LINE {
            Self::Weak
        } else {
            Self::Miss
        }
    }

    /// Classify a check result produced by [`PbtaEngine`].
    pub fn of(result: &AbilityCheckResult) -> Self {
        Self::from_total(result.total)
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strong => write!(f, "Strong Hit"),
            Self::Weak => write!(f, "Weak Hit"),
            Self::Miss => write!(f, "Miss"),
        }
    }
}

/// 2d6-based rules engine.
#[derive(Debug)]
pub struct PbtaEngine {
    session: Option<Session>,
    modifiers: ModifierTable,
    preset: SystemPreset,
}

impl PbtaEngine {
    fn start(&mut self, session: Session) {
        tracing::info!(system = "pbta", seed = session.audit().seed, "session started");
        self.session = Some(session);
    }

    /// Create an engine with no session and no modifiers.
    pub fn new() -> Self {
        Self::with_modifiers(ModifierTable::new())
    }

    /// Create an engine that consults `modifiers` for moves.
    pub fn with_modifiers(modifiers: ModifierTable) -> Self {
        Self {
            session: None,
            modifiers,
            preset: preset::pbta(),
        }
    }
}

impl Default for PbtaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for PbtaEngine {
    fn system(&self) -> SystemKind {
        SystemKind::Pbta
    }

    fn init_session(&mut self, seed: u64) {
        self.start(Session::seeded(seed));
    }

    #[cfg(any(test, feature = "testing"))]
    fn attach_session(&mut self, session: Session) {
        self.start(session);
    }

    fn session_audit(&self) -> Option<SessionAudit> {
        self.session.as_ref().map(Session::audit)
    }

    fn modifiers(&self) -> &ModifierTable {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut ModifierTable {
        &mut self.modifiers
    }

    fn ability_check(&mut self, request: &AbilityCheckRequest) -> EngineResult<AbilityCheckResult> {
        let stat = self.modifiers.resolve(
            &request.actor_id,
            &request.skill,
            self.preset.governing_stat(&request.skill),
        );
        let session = session::require(&mut self.session, "ability_check")?;

        let dice = (session.roll_die(6) + session.roll_die(6)) as i32;
        let total = dice.saturating_add(stat);
        let outcome = MoveOutcome::from_total(total);

        tracing::debug!(
            actor = %request.actor_id,
            move_name = %request.skill,
            dice,
            stat,
            total,
            ignored_difficulty = ?request.difficulty,
            %outcome,
            "move rolled"
        );

        Ok(AbilityCheckResult {
            success: outcome != MoveOutcome::Miss,
            roll: dice,
            total,
            margin: total.saturating_sub(HIT_LINE),
        })
    }

    fn damage_roll(&mut self, expression: &str) -> EngineResult<i32> {
        let session = session::require(&mut self.session, "damage_roll")?;
        let expression = DiceExpression::parse(expression)?;
        let result = session.roll(&expression);
        tracing::debug!(
            %expression,
            %result,
            min = expression.min_total(),
            max = expression.max_total(),
            "harm roll"
        );
        Ok(result.total)
    }

    fn turn_order(&mut self, actor_ids: &[String]) -> EngineResult<Vec<TurnOrderEntry>> {
        session::require(&mut self.session, "turn_order")?;
        let scores = actor_ids.iter().map(|actor| (actor.clone(), 0)).collect();
        let order = initiative::rank_by_initiative(scores);
        tracing::debug!(actors = order.len(), "turn order kept in input order");
        Ok(order)
    }
}
