//! Planets.
//!
//! A planet owns two independent stacks. The main stack holds colonies:
//! ships whose owners control the planet for colony purposes. The
//! allied-defender stack holds ships lent by defensive allies for one
//! encounter. The two are never merged.

use serde::{Deserialize, Serialize};

use super::container::{ShipContainer, ShipStack};
use crate::core::{PlanetId, PlayerId};

/// A planet with its colony stack and allied-defender stack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    id: PlanetId,
    /// Home-system owner. `None` for planets outside any home system.
    pub owner: Option<PlayerId>,
    ships: ShipStack,
    allied_defenders: ShipStack,
}

impl Planet {
    /// Create an empty planet in `owner`'s home system.
    #[must_use]
    pub fn new(id: PlanetId, owner: Option<PlayerId>) -> Self {
        Self {
            id,
            owner,
            ships: ShipStack::new(),
            allied_defenders: ShipStack::new(),
        }
    }

    /// Planet id.
    #[must_use]
    pub fn id(&self) -> PlanetId {
        self.id
    }

    /// Whether the planet belongs to `player`'s home system.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Whether `player` has a colony here.
    #[must_use]
    pub fn has_colony(&self, player: PlayerId) -> bool {
        self.count_of(player) > 0
    }

    /// Owners of colonies here other than `player`, in first-seen order.
    #[must_use]
    pub fn foreign_owners(&self, player: PlayerId) -> Vec<PlayerId> {
        let mut owners = Vec::new();
        for ship in self.ships() {
            if ship.owner != player && !owners.contains(&ship.owner) {
                owners.push(ship.owner);
            }
        }
        owners
    }

    /// Ships lent by defensive allies.
    #[must_use]
    pub fn allied_defenders(&self) -> &ShipStack {
        &self.allied_defenders
    }

    /// Mutable allied-defender stack.
    pub fn allied_defenders_mut(&mut self) -> &mut ShipStack {
        &mut self.allied_defenders
    }
}

impl ShipContainer for Planet {
    fn stack(&self) -> &ShipStack {
        &self.ships
    }

    fn stack_mut(&mut self) -> &mut ShipStack {
        &mut self.ships
    }
}
