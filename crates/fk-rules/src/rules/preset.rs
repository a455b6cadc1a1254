//! Skill and stat tables for the supported rules systems.
//!
//! The engine never validates a character sheet. These tables only tell it
//! which stat governs a skill, so a host-supplied stat modifier can stand in
//! when no skill-specific modifier was given.

use crate::rules::modifiers::normalize_name;

/// The stat vocabulary of one rules system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemPreset {
    /// Display name of the system.
    pub name: &'static str,
    /// Core stats (abilities in D20 terms).
    pub stats: &'static [&'static str],
    /// Skills or moves paired with the stat that governs them.
    pub skills: &'static [(&'static str, &'static str)],
}

impl SystemPreset {
    /// The stat governing `skill`, if known.
    ///
    /// A bare stat name governs itself, so `"strength"` resolves to
    /// `"strength"`. Matching ignores case and treats spaces and hyphens
    /// as underscores.
    pub fn governing_stat(&self, skill: &str) -> Option<&'static str> {
        let key = normalize_name(skill);
        if let Some(stat) = self.stats.iter().find(|s| **s == key) {
            return Some(*stat);
        }
        self.skills
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, stat)| *stat)
    }
}

/// D&D 5th edition: six abilities and the eighteen standard skills.
pub fn dnd5e() -> SystemPreset {
    SystemPreset {
        name: "D&D 5th Edition",
        stats: &[
            "strength",
            "dexterity",
            "constitution",
            "intelligence",
            "wisdom",
            "charisma",
        ],
        skills: &[
            ("athletics", "strength"),
            ("acrobatics", "dexterity"),
            ("sleight_of_hand", "dexterity"),
            ("stealth", "dexterity"),
            ("arcana", "intelligence"),
            ("history", "intelligence"),
            ("investigation", "intelligence"),
            ("nature", "intelligence"),
            ("religion", "intelligence"),
            ("animal_handling", "wisdom"),
            ("insight", "wisdom"),
            ("medicine", "wisdom"),
            ("perception", "wisdom"),
            ("survival", "wisdom"),
            ("deception", "charisma"),
            ("intimidation", "charisma"),
            ("performance", "charisma"),
            ("persuasion", "charisma"),
        ],
    }
}

/// Powered by the Apocalypse: the five Apocalypse World stats and basic moves.
pub fn pbta() -> SystemPreset {
    SystemPreset {
        name: "Powered by the Apocalypse",
        stats: &["cool", "hard", "hot", "sharp", "weird"],
        skills: &[
            ("act_under_fire", "cool"),
            ("go_aggro", "hard"),
            ("seize_by_force", "hard"),
            ("seduce_or_manipulate", "hot"),
            ("read_a_sitch", "sharp"),
            ("read_a_person", "sharp"),
            ("open_your_brain", "weird"),
            ("help_or_interfere", "weird"),
        ],
    }
}
