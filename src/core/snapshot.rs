//! Public view of the game state.
//!
//! What every player may see: the board, hand sizes, face-up cards and the
//! encounter history. Hands and face-down cards stay hidden. Snapshots are
//! cheap to take; the history is a persistent `im::Vector`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::Phase;
use super::ids::PlanetId;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{Alien, Card};
use crate::outcome::{EncounterOutcome, EncounterRecord, EncounterResult};
use crate::ships::Ship;

/// What the table can see of a player's committed encounter card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayedView {
    /// No card committed.
    Nothing,
    /// A card is committed face down.
    FaceDown,
    /// The committed card, revealed.
    FaceUp(Card),
}

/// One planet's stacks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetSnapshot {
    pub id: PlanetId,
    pub owner: Option<PlayerId>,
    pub ships: Vec<Ship>,
    pub allied_defenders: Vec<Ship>,
}

/// Serializable public state for presentation layers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateSnapshot {
    // === Progression ===
    pub phase: Phase,
    pub turn_number: u32,
    pub encounter_number: u8,

    // === Encounter ===
    pub active_player: PlayerId,
    pub defense_player: Option<PlayerId>,
    pub target_planet: Option<PlanetId>,
    pub offensive_allies: Vec<PlayerId>,
    pub defensive_allies: Vec<PlayerId>,
    pub played: PlayerMap<PlayedView>,
    pub outcomes: PlayerMap<EncounterOutcome>,
    pub encounter_result: Option<EncounterResult>,

    // === Board ===
    pub planets: Vec<PlanetSnapshot>,
    pub warp: Vec<Ship>,
    pub gate: Vec<Ship>,

    // === Players and cards ===
    pub aliens: PlayerMap<Option<Alien>>,
    pub hand_sizes: PlayerMap<usize>,
    pub encounter_deck_remaining: usize,
    pub destiny_deck_remaining: usize,
    pub discard_pile: Vec<Card>,

    /// Resolved encounters, oldest first.
    pub history: Vector<EncounterRecord>,
}

impl StateSnapshot {
    /// Ships of `player` on any planet's main stack.
    #[must_use]
    pub fn colony_ship_count(&self, player: PlayerId) -> usize {
        self.planets
            .iter()
            .flat_map(|p| p.ships.iter())
            .filter(|s| s.owner == player)
            .count()
    }
}
