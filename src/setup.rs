//! Game setup.
//!
//! ## Steps
//!
//! 1. Register the players, one decision port per seat.
//! 2. Create each player's home planets, each with a colony of ships.
//! 3. Deal flare cards and let every player pick an alien from theirs.
//! 4. Build and shuffle the encounter deck: the fixed cards plus the
//!    dealt flares.
//! 5. Deal a starting hand to every player.
//! 6. Build and shuffle the destiny deck.
//! 7. Pick a random starting player.
//!
//! Alien choices are asked for in parallel; everything else runs in seat
//! order.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::cards::{catalog, Alien, Card, Deck, DeckKind};
use crate::core::{
    pick_one, EngineResult, GameRng, GameState, PlayerId, RandomSource, RulesConfig,
};
use crate::decision::{ensure_offered, SharedPort};
use crate::ships::ShipLocation;

/// Builds a ready-to-play `GameState`.
///
/// ```no_run
/// use cosmic_rules::{GameSetup, RulesConfig, SharedPort};
///
/// fn start(ports: Vec<SharedPort>) -> cosmic_rules::EngineResult<()> {
///     let state = GameSetup::new(RulesConfig::default()).with_seed(ports, 42)?;
///     assert_eq!(state.hand(state.active_player()).len(), 8);
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameSetup {
    config: RulesConfig,
}

impl GameSetup {
    /// Setup using `config`.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Set up a game with a seeded `GameRng`.
    pub fn with_seed(&self, ports: Vec<SharedPort>, seed: u64) -> EngineResult<GameState> {
        self.setup(ports, GameRng::new(seed))
    }

    /// Set up a game drawing randomness from `rng`.
    pub fn setup(
        &self,
        ports: Vec<SharedPort>,
        rng: impl RandomSource + Send + 'static,
    ) -> EngineResult<GameState> {
        let mut state = GameState::new(self.config.clone(), rng);
        state.set_players(ports)?;
        let players: Vec<PlayerId> = state.players().collect();

        self.create_home_systems(&mut state, &players)?;
        let flares = self.choose_aliens(&mut state, &players)?;

        let mut deck = Deck::new(DeckKind::Encounter, catalog::encounter_cards(&flares));
        deck.shuffle(state.rng());
        state.set_encounter_deck(deck);

        for &player in &players {
            for _ in 0..self.config.hand_size {
                state.draw_card_to_hand(player)?;
            }
        }

        let mut destiny = Deck::new(
            DeckKind::Destiny,
            catalog::destiny_cards(&players, self.config.destiny_cards_per_player),
        );
        destiny.shuffle(state.rng());
        state.set_destiny_deck(destiny);

        if let Some(&first) = pick_one(state.rng(), &players) {
            state.set_active_player(first);
        }
        info!(
            players = players.len(),
            first = %state.active_player(),
            encounter_cards = state.encounter_deck().remaining(),
            "game set up"
        );
        Ok(state)
    }

    fn create_home_systems(&self, state: &mut GameState, players: &[PlayerId]) -> EngineResult<()> {
        for &player in players {
            for _ in 0..self.config.planets_per_player {
                let planet = state.create_planet(Some(player));
                for _ in 0..self.config.ships_per_planet {
                    state.create_ship(player, ShipLocation::Planet(planet))?;
                }
            }
        }
        Ok(())
    }

    /// Deal flares, collect alien choices, and return the dealt flares.
    fn choose_aliens(&self, state: &mut GameState, players: &[PlayerId]) -> EngineResult<Vec<Card>> {
        if self.config.flares_per_player == 0 {
            return Ok(Vec::new());
        }
        let mut flare_deck = Deck::new(DeckKind::Flare, catalog::flare_cards());
        flare_deck.shuffle(state.rng());

        let mut dealt = Vec::with_capacity(players.len() * self.config.flares_per_player);
        let mut offers = Vec::with_capacity(players.len());
        for &player in players {
            let mut offered = Vec::with_capacity(self.config.flares_per_player);
            for _ in 0..self.config.flares_per_player {
                let card = flare_deck.draw()?;
                if let Card::Flare(alien) = card {
                    offered.push(Alien::new(alien));
                }
                dealt.push(card);
            }
            offers.push((player, state.port(player).clone(), offered));
        }

        let choices: Vec<_> = offers
            .into_par_iter()
            .map(|(player, port, offered)| {
                let alien = port.select_alien(&offered);
                (player, alien, offered)
            })
            .collect();

        for (player, alien, offered) in choices {
            ensure_offered(player, &alien, &offered, "alien")?;
            debug!(player = %player, alien = %alien, "alien chosen");
            state.set_alien(player, alien);
        }
        Ok(dealt)
    }
}
