//! Sources of die faces.
//!
//! [`SeededDice`] is the production source: a ChaCha8 stream keyed by the
//! session seed, so the same seed and call sequence always replay the same
//! faces. It is not meant to be unpredictable. `ScriptedDice` replays a
//! fixed list of faces; it is only built for tests and the `testing` feature.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Anything that can produce a uniformly distributed die face.
pub trait DieSource {
    /// Return a face in `1..=sides`. Callers guarantee `sides >= 2`.
    fn roll_die(&mut self, sides: u32) -> u32;
}

/// Deterministic die source seeded from a single integer.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    /// Create a source whose stream is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DieSource for SeededDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides)
    }
}

/// Die source that replays a fixed list of faces, cycling when exhausted.
///
/// Faces are clamped into `1..=sides` for the die being rolled, so a script
/// written for d20s stays valid when a d6 is drawn.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    next: usize,
}

#[cfg(any(test, feature = "testing"))]
impl ScriptedDice {
    /// Create a source replaying `faces` in order. An empty script yields 1s.
    pub fn new(faces: Vec<u32>) -> Self {
        Self { faces, next: 0 }
    }
}

#[cfg(any(test, feature = "testing"))]
impl DieSource for ScriptedDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face.clamp(1, sides)
    }
}
