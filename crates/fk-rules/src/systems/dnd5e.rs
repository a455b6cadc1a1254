//! D20 adapter (D&D 5th edition style).
//!
//! - Ability check: `1d20 + modifier` against the difficulty. A natural 20
//!   always succeeds and a natural 1 always fails, judged on the raw die.
//! - Damage: the dice expression total, no resistances or vulnerabilities.
//! - Turn order: one `1d20` initiative roll per actor in input order plus
//!   the actor's dexterity modifier (0 unless the host supplied one),
//!   sorted descending with ties kept in input order.
//!
//! Totals, margins, and initiative saturate at the `i32` bounds, so an
//! extreme host-supplied difficulty or modifier cannot overflow.

use crate::dice::{DiceExpression, DieSource};
use crate::error::EngineResult;
use crate::initiative::{self, TurnOrderEntry};
use crate::rules::modifiers::ModifierTable;
use crate::rules::preset::{self, SystemPreset};
use crate::rules::{AbilityCheckRequest, AbilityCheckResult, RulesEngine, SystemKind};
use crate::session::{self, Session, SessionAudit};

/// Difficulty used when a request does not carry one.
pub const DEFAULT_DIFFICULTY: i32 = 10;

/// Stat added to initiative rolls.
const INITIATIVE_STAT: &str = "dexterity";

/// d20-based rules engine.
#[derive(Debug)]
pub struct DnD5eEngine {
    session: Option<Session>,
    modifiers: ModifierTable,
    preset: SystemPreset,
}

impl DnD5eEngine {
    fn start(&mut self, session: Session) {
        tracing::info!(system = "dnd5e", seed = session.audit().seed, "session started");
        self.session = Some(session);
    }

    /// Create an engine with no session and no modifiers.
    pub fn new() -> Self {
        Self::with_modifiers(ModifierTable::new())
    }

    /// Create an engine that consults `modifiers` for checks.
    pub fn with_modifiers(modifiers: ModifierTable) -> Self {
        Self {
            session: None,
            modifiers,
            preset: preset::dnd5e(),
        }
    }
}

impl Default for DnD5eEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for DnD5eEngine {
    fn system(&self) -> SystemKind {
        SystemKind::Dnd5e
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
        let modifier = self.modifiers.resolve(
            &request.actor_id,
            &request.skill,
            self.preset.governing_stat(&request.skill),
        );
        let session = session::require(&mut self.session, "ability_check")?;

        let natural = session.roll_die(20) as i32;
        let difficulty = request.difficulty.unwrap_or(DEFAULT_DIFFICULTY);
        let total = natural.saturating_add(modifier);
        let margin = total.saturating_sub(difficulty);
        let success = match natural {
            20 => true,
            1 => false,
            _ => total >= difficulty,
        };

        tracing::debug!(
            actor = %request.actor_id,
            skill = %request.skill,
            natural,
            modifier,
            total,
            difficulty,
            success,
            critical = matches!(natural, 1 | 20),
            "ability check"
        );

        Ok(AbilityCheckResult {
            success,
            roll: natural,
            total,
            margin,
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
            "damage roll"
        );
        Ok(result.total)
    }

    fn turn_order(&mut self, actor_ids: &[String]) -> EngineResult<Vec<TurnOrderEntry>> {
        let session = session::require(&mut self.session, "turn_order")?;
        let scores = actor_ids
            .iter()
            .map(|actor| {
                let roll = session.roll_die(20) as i32;
                let bonus = self.modifiers.get(actor, INITIATIVE_STAT).unwrap_or(0);
                (actor.clone(), roll.saturating_add(bonus))
            })
            .collect();
        let order = initiative::rank_by_initiative(scores);
        tracing::debug!(actors = order.len(), "turn order rolled");
        Ok(order)
    }
}
