//! Shared helpers for integration tests.
//!
//! - `init_logging`: tracing subscriber controlled by `TEST_LOG`/`RUST_LOG`
//! - `ScriptedPlayer`: decision port with canned answers and a call log
//! - `table`/`home_planet`: minimal game states without full setup

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use cosmic_rules::{
    Alien, AllianceSide, Card, GameState, PlanetId, PlayerDecisionPort, PlayerId, RewardSplit,
    RulesConfig, SharedPort, Ship, ShipLocation,
};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once per process.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// One canned answer to `choose_ship`.
#[derive(Clone, Copy, Debug)]
pub enum ShipAnswer {
    First,
    Decline,
    Pick(Ship),
}

/// Decision port answering from a script.
///
/// Unscripted questions get a cooperative default: the first candidate,
/// the first ship, all rewards as cards, and "no" to every yes/no prompt.
#[derive(Default)]
pub struct ScriptedPlayer {
    ships: Mutex<VecDeque<ShipAnswer>>,
    rewards: Mutex<VecDeque<RewardSplit>>,
    calls: Mutex<Vec<&'static str>>,
    target: Option<PlanetId>,
    attack: Option<PlayerId>,
    colony: Option<PlanetId>,
    card: Option<Card>,
    side: Option<AllianceSide>,
    offense_invites: Vec<PlayerId>,
    defense_invites: Vec<PlayerId>,
    home_system: bool,
    another_encounter: bool,
    deal: bool,
}

impl ScriptedPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ship_answers(self, answers: impl IntoIterator<Item = ShipAnswer>) -> Self {
        self.ships.lock().unwrap().extend(answers);
        self
    }

    pub fn with_rewards(self, splits: impl IntoIterator<Item = RewardSplit>) -> Self {
        self.rewards.lock().unwrap().extend(splits);
        self
    }

    pub fn with_target(mut self, planet: PlanetId) -> Self {
        self.target = Some(planet);
        self
    }

    pub fn with_attack(mut self, player: PlayerId) -> Self {
        self.attack = Some(player);
        self
    }

    pub fn with_colony(mut self, planet: PlanetId) -> Self {
        self.colony = Some(planet);
        self
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_side(mut self, side: AllianceSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn inviting_to_offense(mut self, players: Vec<PlayerId>) -> Self {
        self.offense_invites = players;
        self
    }

    pub fn inviting_to_defense(mut self, players: Vec<PlayerId>) -> Self {
        self.defense_invites = players;
        self
    }

    pub fn accepting_home_system(mut self) -> Self {
        self.home_system = true;
        self
    }

    pub fn accepting_another_encounter(mut self) -> Self {
        self.another_encounter = true;
        self
    }

    pub fn accepting_deals(mut self) -> Self {
        self.deal = true;
        self
    }

    /// How many times `method` was called.
    pub fn times_asked(&self, method: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|&&m| m == method).count()
    }

    fn log(&self, method: &'static str) {
        self.calls.lock().unwrap().push(method);
    }
}

impl PlayerDecisionPort for ScriptedPlayer {
    fn select_alien(&self, choices: &[Alien]) -> Alien {
        self.log("select_alien");
        choices[choices.len() - 1]
    }

    fn accept_encounter_in_home_system(&self) -> bool {
        self.log("accept_encounter_in_home_system");
        self.home_system
    }

    fn choose_target_planet(&self, candidates: &[PlanetId]) -> PlanetId {
        self.log("choose_target_planet");
        self.target.unwrap_or(candidates[0])
    }

    fn choose_ship(&self, candidates: &[Ship]) -> Option<Ship> {
        self.log("choose_ship");
        match self.ships.lock().unwrap().pop_front() {
            None | Some(ShipAnswer::First) => candidates.first().copied(),
            Some(ShipAnswer::Decline) => None,
            Some(ShipAnswer::Pick(ship)) => Some(ship),
        }
    }

    fn choose_player_to_attack(&self, candidates: &[PlayerId]) -> PlayerId {
        self.log("choose_player_to_attack");
        self.attack.unwrap_or(candidates[0])
    }

    fn choose_alliance_side(&self, offered: &[AllianceSide]) -> AllianceSide {
        self.log("choose_alliance_side");
        match self.side {
            Some(side) => side,
            None => offered[offered.len() - 1],
        }
    }

    fn invite_offensive_allies(&self, candidates: &[PlayerId]) -> Vec<PlayerId> {
        self.log("invite_offensive_allies");
        self.offense_invites
            .iter()
            .copied()
            .filter(|p| candidates.contains(p))
            .collect()
    }

    fn invite_defensive_allies(&self, candidates: &[PlayerId]) -> Vec<PlayerId> {
        self.log("invite_defensive_allies");
        self.defense_invites
            .iter()
            .copied()
            .filter(|p| candidates.contains(p))
            .collect()
    }

    fn choose_encounter_card(&self, hand: &[Card]) -> Card {
        self.log("choose_encounter_card");
        match self.card {
            Some(card) => card,
            None => hand[0],
        }
    }

    fn choose_colony(&self, candidates: &[PlanetId]) -> PlanetId {
        self.log("choose_colony");
        self.colony
            .filter(|p| candidates.contains(p))
            .unwrap_or(candidates[0])
    }

    fn choose_rewards(&self, budget: usize) -> RewardSplit {
        self.log("choose_rewards");
        self.rewards
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(RewardSplit::new(budget, 0))
    }

    fn select_planet_to_place_ship(&self, _ship: Ship, candidates: &[PlanetId]) -> PlanetId {
        self.log("select_planet_to_place_ship");
        self.colony
            .filter(|p| candidates.contains(p))
            .unwrap_or(candidates[0])
    }

    fn accept_another_encounter(&self) -> bool {
        self.log("accept_another_encounter");
        self.another_encounter
    }

    fn accept_deal(&self, _counterpart: PlayerId) -> bool {
        self.log("accept_deal");
        self.deal
    }
}

/// A state with `players` registered and nothing else set up.
pub fn table(players: &[Arc<ScriptedPlayer>], config: RulesConfig) -> GameState {
    init_logging();
    let mut state = GameState::with_seed(config, 7);
    let ports: Vec<SharedPort> = players.iter().map(|p| p.clone() as SharedPort).collect();
    state.set_players(ports).unwrap();
    state
}

/// Create a home planet for `owner` holding `ships` of their ships.
pub fn home_planet(state: &mut GameState, owner: PlayerId, ships: usize) -> PlanetId {
    let planet = state.create_planet(Some(owner));
    for _ in 0..ships {
        state.create_ship(owner, ShipLocation::Planet(planet)).unwrap();
    }
    planet
}

/// Create `count` ships for `owner` at `location`.
pub fn ships_at(state: &mut GameState, owner: PlayerId, location: ShipLocation, count: usize) -> Vec<Ship> {
    (0..count)
        .map(|_| state.create_ship(owner, location).unwrap())
        .collect()
}

pub fn seat(n: u8) -> PlayerId {
    PlayerId::new(n)
}
