//! Ship containers.
//!
//! Every ship sits in exactly one container at a time: the warp, the
//! hyperspace gate, a planet's main stack, or a planet's allied-defender
//! stack. Containers only add, list and remove; moving a ship is always a
//! remove from one container followed by an add to another, driven by
//! `GameState::move_ship`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlanetId, PlayerId, ShipId};

/// A ship. Immutable once created; only its container changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ship {
    /// Unique id.
    pub id: ShipId,
    /// Owning player.
    pub owner: PlayerId,
}

impl Ship {
    /// Create a ship.
    #[must_use]
    pub const fn new(id: ShipId, owner: PlayerId) -> Self {
        Self { id, owner }
    }
}

impl std::fmt::Display for Ship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.id, self.owner)
    }
}

/// Address of a container inside the game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipLocation {
    /// The warp.
    Warp,
    /// The hyperspace gate.
    HyperspaceGate,
    /// A planet's main stack.
    Planet(PlanetId),
    /// A planet's allied-defender stack.
    AlliedDefenders(PlanetId),
}

/// Unordered stack of ships.
///
/// Most stacks hold a handful of ships, so the storage is inline up to
/// eight entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipStack {
    ships: SmallVec<[Ship; 8]>,
}

impl ShipStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Uniform contract over every ship container.
///
/// Implementors expose their backing `ShipStack`; the operations are shared.
pub trait ShipContainer {
    /// Backing stack.
    fn stack(&self) -> &ShipStack;

    /// Mutable backing stack.
    fn stack_mut(&mut self) -> &mut ShipStack;

    /// Add a ship.
    fn add_ship(&mut self, ship: Ship) {
        self.stack_mut().ships.push(ship);
    }

    /// All ships in this container.
    fn ships(&self) -> &[Ship] {
        &self.stack().ships
    }

    /// Ships owned by `player`.
    fn ships_of(&self, player: PlayerId) -> Vec<Ship> {
        self.ships()
            .iter()
            .filter(|s| s.owner == player)
            .copied()
            .collect()
    }

    /// Number of ships owned by `player`.
    fn count_of(&self, player: PlayerId) -> usize {
        self.ships().iter().filter(|s| s.owner == player).count()
    }

    /// Whether the container holds `ship`.
    fn contains(&self, ship: Ship) -> bool {
        self.ships().contains(&ship)
    }

    /// Remove `ship`. Returns `false` if it was not here.
    fn remove_ship(&mut self, ship: Ship) -> bool {
        let ships = &mut self.stack_mut().ships;
        match ships.iter().position(|&s| s == ship) {
            Some(pos) => {
                ships.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl ShipContainer for ShipStack {
    fn stack(&self) -> &ShipStack {
        self
    }

    fn stack_mut(&mut self) -> &mut ShipStack {
        self
    }
}

/// Holding area for destroyed ships.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warp {
    ships: ShipStack,
}

impl ShipContainer for Warp {
    fn stack(&self) -> &ShipStack {
        &self.ships
    }

    fn stack_mut(&mut self) -> &mut ShipStack {
        &mut self.ships
    }
}

/// Staging area for the attacking force, aimed at a target planet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyperspaceGate {
    ships: ShipStack,
    /// Planet the gate is pointed at, set during Launch.
    pub target_planet: Option<PlanetId>,
}

impl ShipContainer for HyperspaceGate {
    fn stack(&self) -> &ShipStack {
        &self.ships
    }

    fn stack_mut(&mut self) -> &mut ShipStack {
        &mut self.ships
    }
}
