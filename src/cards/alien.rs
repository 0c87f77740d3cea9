//! Alien identities.
//!
//! Aliens are flavor in this engine: a player picks one at setup and it is
//! recorded, but no alien power changes the rules.

use serde::{Deserialize, Serialize};

/// Names of every alien, indexed by `AlienId`.
pub const ALIEN_NAMES: [&str; 50] = [
    "Amoeba", "Anti-Matter", "Barbarian", "Calculator", "Chosen",
    "Citadel", "Clone", "Cudgel", "Dictator", "Fido",
    "Filch", "Fodder", "Gambler", "Grudge", "Hacker",
    "Hate", "Healer", "Human", "Kamikaze", "Loser",
    "Machine", "Macron", "Masochist", "Mind", "Mirror",
    "Miser", "Mite", "Mutant", "Observer", "Oracle",
    "Pacifist", "Parasite", "Philanthropist", "Reincarnator", "Remora",
    "Reserve", "Shadow", "Sorcerer", "Spiff", "Tick-Tock",
    "Trader", "Tripler", "Vacuum", "Virus", "Void",
    "Vulch", "Warpish", "Warrior", "Will", "Zombie",
];

/// Identifier of an alien in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AlienId(pub u8);

impl AlienId {
    /// Create a new alien ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Catalog name of this alien.
    ///
    /// Ids outside the catalog render as `"Unknown"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        ALIEN_NAMES.get(self.0 as usize).copied().unwrap_or("Unknown")
    }

    /// Every alien in the catalog.
    pub fn all() -> impl Iterator<Item = AlienId> {
        (0..ALIEN_NAMES.len() as u8).map(AlienId)
    }
}

/// An alien chosen (or offered) to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alien {
    /// Catalog id.
    pub id: AlienId,
}

impl Alien {
    /// Look up an alien by id.
    #[must_use]
    pub const fn new(id: AlienId) -> Self {
        Self { id }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

impl std::fmt::Display for Alien {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
