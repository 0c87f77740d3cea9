//! The player decision port.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::{Alien, Card};
use crate::core::{PlanetId, PlayerId};
use crate::ships::Ship;

/// Side a potential ally may join.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllianceSide {
    Neither,
    Offense,
    Defense,
}

/// How a defensive ally splits a reward budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSplit {
    /// Cards drawn from the encounter deck.
    pub cards: usize,
    /// Ships recovered from the warp to a colony.
    pub ships: usize,
}

impl RewardSplit {
    /// Create a split.
    #[must_use]
    pub const fn new(cards: usize, ships: usize) -> Self {
        Self { cards, ships }
    }

    /// Total rewards claimed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.cards + self.ships
    }
}

/// Every judgment the engine needs from a player.
///
/// Implemented by whatever stands behind a seat: a UI, an AI, a network
/// proxy or a test script. The engine validates every answer against the
/// choices it offered and treats an answer outside them as a protocol
/// violation.
///
/// Implementations must be `Send + Sync`: Planning asks offense and defense
/// at the same time from different threads. A call may block for as long
/// as the player needs; the engine has no timeout of its own.
pub trait PlayerDecisionPort: Send + Sync {
    /// Pick one alien from those offered at setup.
    fn select_alien(&self, choices: &[Alien]) -> Alien;

    /// Whether to have an encounter in the player's own home system.
    fn accept_encounter_in_home_system(&self) -> bool;

    /// Pick the planet the hyperspace gate points at.
    fn choose_target_planet(&self, candidates: &[PlanetId]) -> PlanetId;

    /// Pick one ship, or decline with `None`.
    fn choose_ship(&self, candidates: &[Ship]) -> Option<Ship>;

    /// Pick which foreign colonist to attack on a home planet.
    fn choose_player_to_attack(&self, candidates: &[PlayerId]) -> PlayerId;

    /// Pick a side among those offered.
    fn choose_alliance_side(&self, offered: &[AllianceSide]) -> AllianceSide;

    /// Offense invites allies from `candidates`.
    fn invite_offensive_allies(&self, candidates: &[PlayerId]) -> Vec<PlayerId>;

    /// Defense invites allies from `candidates`.
    fn invite_defensive_allies(&self, candidates: &[PlayerId]) -> Vec<PlayerId>;

    /// Commit one playable encounter card from `hand`.
    fn choose_encounter_card(&self, hand: &[Card]) -> Card;

    /// Pick a colony to receive a ship.
    fn choose_colony(&self, candidates: &[PlanetId]) -> PlanetId;

    /// Split a reward budget between cards and ships. Re-asked until the
    /// split is valid.
    fn choose_rewards(&self, budget: usize) -> RewardSplit;

    /// Pick the colony a ship recovered from the warp lands on.
    fn select_planet_to_place_ship(&self, ship: Ship, candidates: &[PlanetId]) -> PlanetId;

    /// Whether to take a second encounter this turn.
    fn accept_another_encounter(&self) -> bool {
        false
    }

    /// Whether to accept a deal with `counterpart` after both sides
    /// negotiated.
    fn accept_deal(&self, _counterpart: PlayerId) -> bool {
        false
    }
}

/// Shared handle to a seat's decision port.
pub type SharedPort = Arc<dyn PlayerDecisionPort>;
