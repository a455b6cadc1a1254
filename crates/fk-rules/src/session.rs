//! Per-encounter RNG state.
//!
//! A [`Session`] is created by `init_session`, lives for one combat or game
//! session, and is replaced wholesale when `init_session` is called again.
//! It is owned by exactly one engine and is not safe to share between
//! concurrent game sessions; hosts create one engine per session instead.
//! Outside the crate only a [`SessionAudit`] snapshot is visible.

use serde::Serialize;

#[cfg(any(test, feature = "testing"))]
use crate::dice::ScriptedDice;
use crate::dice::{DiceExpression, DieSource, RollResult, SeededDice};
use crate::error::{EngineError, EngineResult};

/// Read-only view of a session for dispute replay: the seed and how far
/// into its stream the engine has drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionAudit {
    /// The seed the session was started with.
    pub seed: u64,
    /// How many individual dice have been drawn so far.
    pub draws: u64,
}

/// Seeded RNG state owned by a single engine.
pub struct Session {
    seed: u64,
    draws: u64,
    dice: Box<dyn DieSource + Send>,
}

impl Session {
    /// Start a session whose rolls are fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_source(seed, SeededDice::new(seed))
    }

    /// Start a session that replays `faces` instead of drawing random ones.
    ///
    /// The seed is only recorded; it does not influence the faces.
    #[cfg(any(test, feature = "testing"))]
    pub fn scripted(seed: u64, faces: Vec<u32>) -> Self {
        Self::from_source(seed, ScriptedDice::new(faces))
    }

    fn from_source(seed: u64, source: impl DieSource + Send + 'static) -> Self {
        Self {
            seed,
            draws: 0,
            dice: Box::new(source),
        }
    }

    /// Snapshot the seed and draw count.
    pub fn audit(&self) -> SessionAudit {
        SessionAudit {
            seed: self.seed,
            draws: self.draws,
        }
    }

    /// Evaluate a dice expression against this session's stream.
    pub fn roll(&mut self, expression: &DiceExpression) -> RollResult {
        expression.roll(self)
    }
}

impl DieSource for Session {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.draws += 1;
        let face = self.dice.roll_die(sides);
        tracing::trace!(seed = self.seed, draw = self.draws, sides, face, "die drawn");
        face
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("seed", &self.seed)
            .field("draws", &self.draws)
            .finish_non_exhaustive()
    }
}

/// Borrow an engine's session, failing if `init_session` has not run yet.
pub(crate) fn require<'a>(
    session: &'a mut Option<Session>,
    operation: &'static str,
) -> EngineResult<&'a mut Session> {
    session
        .as_mut()
        .ok_or(EngineError::UninitializedSession(operation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_draws() {
        let mut session = Session::seeded(42);
        assert_eq!(session.audit().draws, 0);
        let expr = DiceExpression::parse("3d6").unwrap();
        session.roll(&expr);
        assert_eq!(session.audit().draws, 3);
        session.roll_die(20);
        assert_eq!(session.audit(), SessionAudit { seed: 42, draws: 4 });
    }

    #[test]
    fn same_seed_same_stream() {
        let expr = DiceExpression::parse("4d20+1").unwrap();
        let mut a = Session::seeded(7);
        let mut b = Session::seeded(7);
        for _ in 0..10 {
            assert_eq!(a.roll(&expr), b.roll(&expr));
        }
    }

    #[test]
    fn scripted_session_replays() {
        let mut session = Session::scripted(0, vec![3, 5]);
        let expr = DiceExpression::parse("2d6+3").unwrap();
        assert_eq!(session.roll(&expr).total, 11);
        assert_eq!(session.audit().seed, 0);
    }

    #[test]
    fn require_without_session() {
        let mut none: Option<Session> = None;
        assert!(matches!(
            require(&mut none, "damage_roll"),
            Err(EngineError::UninitializedSession("damage_roll"))
        ));
        let mut some = Some(Session::seeded(1));
        assert!(require(&mut some, "damage_roll").is_ok());
    }

    #[test]
    fn debug_hides_source() {
        let session = Session::seeded(42);
        let debug = format!("{session:?}");
        assert!(debug.contains("seed: 42"));
        assert!(debug.contains("draws: 0"));
    }
}
