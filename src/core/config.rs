//! Rules configuration and the phase enumeration.
//!
//! `RulesConfig` holds every number the rules depend on. The defaults are
//! the tabletop values; tests and variants shrink or grow them with the
//! `with_*` builders.

use serde::{Deserialize, Serialize};

/// The seven phases of an encounter, in play order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Active player recovers one ship from the warp.
    #[default]
    Regroup,
    /// Destiny card picks the defending player.
    Destiny,
    /// Gate is aimed and the attacking ships are staged.
    Launch,
    /// Invitations are sent and allies commit ships.
    Alliance,
    /// Offense and defense commit encounter cards face down.
    Planning,
    /// Cards are revealed and outcomes assigned.
    Reveal,
    /// Outcomes are applied to ships and hands.
    Resolution,
}

impl Phase {
    /// All phases in play order.
    pub const ALL: [Phase; 7] = [
        Phase::Regroup,
        Phase::Destiny,
        Phase::Launch,
        Phase::Alliance,
        Phase::Planning,
        Phase::Reveal,
        Phase::Resolution,
    ];

    /// The phase that follows this one within an encounter.
    ///
    /// Resolution has no successor; the resolution handler decides whether
    /// the next encounter starts over at Regroup.
    #[must_use]
    pub fn next(self) -> Option<Phase> {
        let idx = Self::ALL.iter().position(|&p| p == self)?;
        Self::ALL.get(idx + 1).copied()
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Regroup => "regroup",
            Phase::Destiny => "destiny",
            Phase::Launch => "launch",
            Phase::Alliance => "alliance",
            Phase::Planning => "planning",
            Phase::Reveal => "reveal",
            Phase::Resolution => "resolution",
        };
        f.write_str(name)
    }
}

/// Inclusive bounds on how many ships a player commits in one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipBounds {
    /// Fewest ships the player may commit while ships remain available.
    pub min: usize,
    /// Most ships the player may commit.
    pub max: usize,
}

impl ShipBounds {
    /// Create bounds. Panics if `min > max`.
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        assert!(min <= max, "min ships must not exceed max ships");
        Self { min, max }
    }
}

/// Numbers the rules depend on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Home planets created for each player.
    pub planets_per_player: usize,

    /// Ships placed on each home planet at setup.
    pub ships_per_planet: usize,

    /// Cards in a full hand.
    pub hand_size: usize,

    /// Destiny cards naming each player.
    pub destiny_cards_per_player: usize,

    /// Flare cards offered to each player when choosing an alien.
    pub flares_per_player: usize,

    /// Ships the offense stages in the hyperspace gate.
    pub launch_ships: ShipBounds,

    /// Ships an ally contributes to either side.
    pub ally_ships: ShipBounds,

    /// How many times a decision port is re-prompted after an invalid or
    /// missing answer before the engine gives up.
    pub max_decision_retries: usize,

    /// Rebuild the encounter deck from the discard pile when it runs out
    /// instead of failing the draw.
    pub reshuffle_discards: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            planets_per_player: 5,
            ships_per_planet: 4,
            hand_size: 8,
            destiny_cards_per_player: 3,
            flares_per_player: 2,
            launch_ships: ShipBounds::new(1, 4),
            ally_ships: ShipBounds::new(1, 4),
            max_decision_retries: 32,
            reshuffle_discards: false,
        }
    }
}

impl RulesConfig {
    /// Tabletop defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of home planets per player.
    #[must_use]
    pub fn with_planets_per_player(mut self, count: usize) -> Self {
        self.planets_per_player = count;
        self
    }

    /// Set the number of ships per home planet.
    #[must_use]
    pub fn with_ships_per_planet(mut self, count: usize) -> Self {
        self.ships_per_planet = count;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the launch bounds.
    #[must_use]
    pub fn with_launch_ships(mut self, bounds: ShipBounds) -> Self {
        self.launch_ships = bounds;
        self
    }

    /// Set the ally contribution bounds.
    #[must_use]
    pub fn with_ally_ships(mut self, bounds: ShipBounds) -> Self {
        self.ally_ships = bounds;
        self
    }

    /// Set the retry cap for decision ports.
    #[must_use]
    pub fn with_max_decision_retries(mut self, retries: usize) -> Self {
        self.max_decision_retries = retries;
        self
    }

    /// Enable or disable rebuilding the encounter deck from discards.
    #[must_use]
    pub fn with_reshuffle_discards(mut self, enabled: bool) -> Self {
        self.reshuffle_discards = enabled;
        self
    }
}
