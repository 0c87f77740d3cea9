//! The game state aggregate.
//!
//! ## GameState
//!
//! Owns everything a game mutates:
//! - Registered players and their decision ports
//! - Planets, the warp and the hyperspace gate
//! - Hands, the encounter and destiny decks, discard piles
//! - Per-encounter context (defense, allies, played cards, outcomes)
//! - Phase, turn and encounter counters, resolved-encounter history
//!
//! ## Ship movement
//!
//! A ship is in exactly one container at a time. The only way to move one
//! is `move_ship`/`move_ship_from`, which removes it from its container
//! before adding it to the destination and fails with a protocol violation
//! when the ship is not where it was claimed to be.
//!
//! ## Concurrency
//!
//! `GameState` does no locking. Phase handlers mutate it from one thread;
//! only decision ports (shared `Arc`s) are handed to worker threads.

use im::Vector;
use tracing::{debug, info};

use super::config::{Phase, RulesConfig};
use super::error::{EngineError, EngineResult};
use super::ids::{PlanetId, ShipId};
use super::player::{PlayerId, PlayerMap};
use super::rng::{GameRng, RandomSource};
use super::snapshot::{PlanetSnapshot, PlayedView, StateSnapshot};
use crate::cards::{Alien, Card, Deck, DeckKind, DestinyCard};
use crate::decision::SharedPort;
use crate::outcome::{EncounterOutcome, EncounterRecord, EncounterResult, PlayedEncounterCard};
use crate::ships::{HyperspaceGate, Planet, Ship, ShipContainer, ShipLocation, Warp};

/// Complete state of one game.
pub struct GameState {
    config: RulesConfig,
    rng: Box<dyn RandomSource + Send>,

    // === Players ===
    ports: PlayerMap<SharedPort>,
    aliens: PlayerMap<Option<Alien>>,
    hands: PlayerMap<Vec<Card>>,

    // === Board ===
    planets: Vec<Planet>,
    warp: Warp,
    gate: HyperspaceGate,
    next_ship_id: u32,

    // === Cards ===
    encounter_deck: Deck<Card>,
    destiny_deck: Deck<DestinyCard>,
    discard_pile: Vec<Card>,
    destiny_discards: Vec<DestinyCard>,

    // === Encounter context ===
    active_player: PlayerId,
    defense_player: Option<PlayerId>,
    offensive_allies: Vec<PlayerId>,
    defensive_allies: Vec<PlayerId>,
    played: PlayerMap<Option<PlayedEncounterCard>>,
    outcomes: PlayerMap<EncounterOutcome>,
    encounter_result: Option<EncounterResult>,

    // === Progression ===
    phase: Phase,
    turn_number: u32,
    encounter_number: u8,
    history: Vector<EncounterRecord>,
}

impl GameState {
    /// Create an empty state drawing randomness from `rng`.
    ///
    /// Players must be registered with `set_players` before anything
    /// per-player is touched.
    pub fn new(config: RulesConfig, rng: impl RandomSource + Send + 'static) -> Self {
        Self {
            config,
            rng: Box::new(rng),
            ports: PlayerMap::default(),
            aliens: PlayerMap::default(),
            hands: PlayerMap::default(),
            planets: Vec::new(),
            warp: Warp::default(),
            gate: HyperspaceGate::default(),
            next_ship_id: 0,
            encounter_deck: Deck::empty(DeckKind::Encounter),
            destiny_deck: Deck::empty(DeckKind::Destiny),
            discard_pile: Vec::new(),
            destiny_discards: Vec::new(),
            active_player: PlayerId::new(0),
            defense_player: None,
            offensive_allies: Vec::new(),
            defensive_allies: Vec::new(),
            played: PlayerMap::default(),
            outcomes: PlayerMap::default(),
            encounter_result: None,
            phase: Phase::default(),
            turn_number: 1,
            encounter_number: 0,
            history: Vector::new(),
        }
    }

    /// Create an empty state with a seeded `GameRng`.
    #[must_use]
    pub fn with_seed(config: RulesConfig, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }

    /// Rules in force.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// The state's random source.
    pub fn rng(&mut self) -> &mut dyn RandomSource {
        &mut *self.rng
    }

    // === Players ===

    /// Register the players, one decision port per seat in seating order.
    ///
    /// Fixes the seat mapping for the life of the state; a second call
    /// fails with `PlayersAlreadyRegistered`.
    pub fn set_players(&mut self, ports: Vec<SharedPort>) -> EngineResult<()> {
        if self.players_registered() {
            return Err(EngineError::PlayersAlreadyRegistered);
        }
        assert!(!ports.is_empty(), "Must have at least 1 player");
        assert!(ports.len() <= 255, "At most 255 players supported");

        let count = ports.len();
        self.ports = PlayerMap::from_vec(ports);
        self.aliens = PlayerMap::with_default(count);
        self.hands = PlayerMap::with_default(count);
        self.played = PlayerMap::with_default(count);
        self.outcomes = PlayerMap::with_default(count);
        info!(players = count, "players registered");
        Ok(())
    }

    /// Whether `set_players` has been called.
    #[must_use]
    pub fn players_registered(&self) -> bool {
        self.ports.player_count() > 0
    }

    /// Number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.ports.player_count()
    }

    /// All seats in seating order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        self.ports.player_ids()
    }

    /// Decision port for `player`.
    #[must_use]
    pub fn port(&self, player: PlayerId) -> &SharedPort {
        &self.ports[player]
    }

    /// Record the alien `player` plays.
    pub fn set_alien(&mut self, player: PlayerId, alien: Alien) {
        self.aliens[player] = Some(alien);
    }

    /// The alien `player` plays, once chosen.
    #[must_use]
    pub fn alien(&self, player: PlayerId) -> Option<Alien> {
        self.aliens[player]
    }

    // === Planets ===

    /// Create an empty planet in `owner`'s home system.
    pub fn create_planet(&mut self, owner: Option<PlayerId>) -> PlanetId {
        let id = PlanetId::new(self.planets.len() as u16);
        self.planets.push(Planet::new(id, owner));
        id
    }

    /// All planets.
    #[must_use]
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Look up a planet.
    pub fn planet(&self, id: PlanetId) -> EngineResult<&Planet> {
        self.planets
            .get(id.raw() as usize)
            .ok_or(EngineError::UnknownPlanet(id))
    }

    /// Look up a planet mutably.
    pub fn planet_mut(&mut self, id: PlanetId) -> EngineResult<&mut Planet> {
        self.planets
            .get_mut(id.raw() as usize)
            .ok_or(EngineError::UnknownPlanet(id))
    }

    /// Planets in `player`'s home system.
    #[must_use]
    pub fn planets_of(&self, player: PlayerId) -> Vec<PlanetId> {
        self.planets
            .iter()
            .filter(|p| p.is_owned_by(player))
            .map(Planet::id)
            .collect()
    }

    /// Planets where `player` has at least one ship on the main stack.
    #[must_use]
    pub fn colonies_of(&self, player: PlayerId) -> Vec<PlanetId> {
        self.planets
            .iter()
            .filter(|p| p.has_colony(player))
            .map(Planet::id)
            .collect()
    }

    /// `player`'s ships sitting in colonies, across every planet.
    #[must_use]
    pub fn ships_on_colonies(&self, player: PlayerId) -> Vec<Ship> {
        self.planets.iter().flat_map(|p| p.ships_of(player)).collect()
    }

    /// Planets in `player`'s home system hosting ships of other players.
    #[must_use]
    pub fn home_planets_with_foreign_colonies(&self, player: PlayerId) -> Vec<PlanetId> {
        self.planets
            .iter()
            .filter(|p| p.is_owned_by(player) && !p.foreign_owners(player).is_empty())
            .map(Planet::id)
            .collect()
    }

    // === Ships ===

    /// The warp.
    #[must_use]
    pub fn warp(&self) -> &Warp {
        &self.warp
    }

    /// The hyperspace gate.
    #[must_use]
    pub fn gate(&self) -> &HyperspaceGate {
        &self.gate
    }

    /// Create a ship for `owner` directly in `location`.
    pub fn create_ship(&mut self, owner: PlayerId, location: ShipLocation) -> EngineResult<Ship> {
        let ship = Ship::new(ShipId::new(self.next_ship_id), owner);
        self.container_mut(location)?.add_ship(ship);
        self.next_ship_id += 1;
        Ok(ship)
    }

    /// Container at `location`.
    pub fn container(&self, location: ShipLocation) -> EngineResult<&dyn ShipContainer> {
        let container: &dyn ShipContainer = match location {
            ShipLocation::Warp => &self.warp,
            ShipLocation::HyperspaceGate => &self.gate,
            ShipLocation::Planet(id) => self.planet(id)?,
            ShipLocation::AlliedDefenders(id) => self.planet(id)?.allied_defenders(),
        };
        Ok(container)
    }

    /// Mutable container at `location`.
    pub fn container_mut(
        &mut self,
        location: ShipLocation,
    ) -> EngineResult<&mut dyn ShipContainer> {
        let container: &mut dyn ShipContainer = match location {
            ShipLocation::Warp => &mut self.warp,
            ShipLocation::HyperspaceGate => &mut self.gate,
            ShipLocation::Planet(id) => self.planet_mut(id)?,
            ShipLocation::AlliedDefenders(id) => self.planet_mut(id)?.allied_defenders_mut(),
        };
        Ok(container)
    }

    /// Find the container holding `ship`.
    #[must_use]
    pub fn locate_ship(&self, ship: Ship) -> Option<ShipLocation> {
        if self.warp.contains(ship) {
            return Some(ShipLocation::Warp);
        }
        if self.gate.contains(ship) {
            return Some(ShipLocation::HyperspaceGate);
        }
        self.planets.iter().find_map(|planet| {
            if planet.contains(ship) {
                Some(ShipLocation::Planet(planet.id()))
            } else if planet.allied_defenders().contains(ship) {
                Some(ShipLocation::AlliedDefenders(planet.id()))
            } else {
                None
            }
        })
    }

    /// Move `ship` from wherever it is to `to`.
    pub fn move_ship(&mut self, ship: Ship, to: ShipLocation) -> EngineResult<()> {
        let from = self
            .locate_ship(ship)
            .ok_or_else(|| EngineError::protocol(ship.owner, format!("{ship} is in no container")))?;
        self.move_ship_from(ship, from, to)
    }

    /// Move `ship` from `from` to `to`.
    ///
    /// Fails without changing anything if `ship` is not in `from` or `to`
    /// does not exist.
    pub fn move_ship_from(
        &mut self,
        ship: Ship,
        from: ShipLocation,
        to: ShipLocation,
    ) -> EngineResult<()> {
        self.container(to)?;
        if !self.container_mut(from)?.remove_ship(ship) {
            return Err(EngineError::protocol(
                ship.owner,
                format!("{ship} is not in {from:?}"),
            ));
        }
        self.container_mut(to)?.add_ship(ship);
        debug!(ship = %ship, from = ?from, to = ?to, "ship moved");
        Ok(())
    }

    /// Planet the gate points at.
    pub fn target_planet(&self) -> EngineResult<PlanetId> {
        self.gate
            .target_planet
            .ok_or(EngineError::OutOfPhase("target planet"))
    }

    /// Point the gate at `planet`.
    pub fn set_target_planet(&mut self, planet: PlanetId) -> EngineResult<()> {
        self.planet(planet)?;
        self.gate.target_planet = Some(planet);
        Ok(())
    }

    /// Ships of `player` engaged in the current encounter.
    ///
    /// Gate ships always count. The defense player's colony on the target
    /// planet counts for the defense player only. Allied-defender ships
    /// count for their owner.
    pub fn ships_in_encounter(&self, player: PlayerId) -> EngineResult<Vec<(Ship, ShipLocation)>> {
        let target = self.target_planet()?;
        let planet = self.planet(target)?;
        let mut ships: Vec<_> = self
            .gate
            .ships_of(player)
            .into_iter()
            .map(|s| (s, ShipLocation::HyperspaceGate))
            .collect();
        if self.defense_player == Some(player) {
            ships.extend(
                planet
                    .ships_of(player)
                    .into_iter()
                    .map(|s| (s, ShipLocation::Planet(target))),
            );
        }
        ships.extend(
            planet
                .allied_defenders()
                .ships_of(player)
                .into_iter()
                .map(|s| (s, ShipLocation::AlliedDefenders(target))),
        );
        Ok(ships)
    }

    // === Hands ===

    /// `player`'s hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    /// Add a card to `player`'s hand.
    pub fn add_card_to_hand(&mut self, player: PlayerId, card: Card) {
        self.hands[player].push(card);
    }

    /// Remove one copy of `card` from `player`'s hand.
    pub fn remove_card_from_hand(&mut self, player: PlayerId, card: Card) -> EngineResult<()> {
        let hand = &mut self.hands[player];
        let pos = hand
            .iter()
            .position(|&c| c == card)
            .ok_or_else(|| EngineError::protocol(player, format!("{card} is not in hand")))?;
        hand.swap_remove(pos);
        Ok(())
    }

    /// Cards in `player`'s hand that can be committed during Planning.
    #[must_use]
    pub fn playable_cards(&self, player: PlayerId) -> Vec<Card> {
        self.hands[player]
            .iter()
            .copied()
            .filter(|c| c.is_encounter_card())
            .collect()
    }

    /// Whether `player` holds at least one encounter card.
    #[must_use]
    pub fn has_playable_card(&self, player: PlayerId) -> bool {
        self.hands[player].iter().any(|c| c.is_encounter_card())
    }

    /// Move `player`'s whole hand to the discard pile.
    pub fn discard_hand(&mut self, player: PlayerId) {
        let hand = std::mem::take(&mut self.hands[player]);
        debug!(player = %player, cards = hand.len(), "hand discarded");
        self.discard_pile.extend(hand);
    }

    /// Discard `player`'s hand and deal a fresh one.
    pub fn draw_new_hand(&mut self, player: PlayerId) -> EngineResult<()> {
        self.discard_hand(player);
        for _ in 0..self.config.hand_size {
            self.draw_card_to_hand(player)?;
        }
        Ok(())
    }

    /// Move up to `count` random cards from `giver`'s hand to `taker`'s.
    ///
    /// Returns how many cards changed hands.
    pub fn take_compensation(&mut self, taker: PlayerId, giver: PlayerId, count: usize) -> usize {
        let mut taken = 0;
        while taken < count {
            let Some(idx) = self.rng.pick_index(self.hands[giver].len()) else {
                break;
            };
            let card = self.hands[giver].swap_remove(idx);
            self.hands[taker].push(card);
            taken += 1;
        }
        debug!(taker = %taker, giver = %giver, cards = taken, "compensation taken");
        taken
    }

    // === Decks ===

    /// The encounter deck.
    #[must_use]
    pub fn encounter_deck(&self) -> &Deck<Card> {
        &self.encounter_deck
    }

    /// Mutable encounter deck.
    pub fn encounter_deck_mut(&mut self) -> &mut Deck<Card> {
        &mut self.encounter_deck
    }

    /// Replace the encounter deck.
    pub fn set_encounter_deck(&mut self, deck: Deck<Card>) {
        self.encounter_deck = deck;
    }

    /// Shuffle the undrawn part of the encounter deck.
    pub fn shuffle_encounter_deck(&mut self) {
        self.encounter_deck.shuffle(&mut *self.rng);
    }

    /// The destiny deck.
    #[must_use]
    pub fn destiny_deck(&self) -> &Deck<DestinyCard> {
        &self.destiny_deck
    }

    /// Mutable destiny deck.
    pub fn destiny_deck_mut(&mut self) -> &mut Deck<DestinyCard> {
        &mut self.destiny_deck
    }

    /// Replace the destiny deck.
    pub fn set_destiny_deck(&mut self, deck: Deck<DestinyCard>) {
        self.destiny_deck = deck;
    }

    /// Shuffle the undrawn part of the destiny deck.
    pub fn shuffle_destiny_deck(&mut self) {
        self.destiny_deck.shuffle(&mut *self.rng);
    }

    /// Draw from the encounter deck.
    ///
    /// With `reshuffle_discards` set, an exhausted deck is first rebuilt
    /// from the discard pile.
    pub fn draw_card(&mut self) -> EngineResult<Card> {
        if self.encounter_deck.is_exhausted()
            && self.config.reshuffle_discards
            && !self.discard_pile.is_empty()
        {
            let discards = std::mem::take(&mut self.discard_pile);
            info!(cards = discards.len(), "rebuilding encounter deck from discards");
            self.encounter_deck.replenish(discards);
            self.encounter_deck.shuffle(&mut *self.rng);
        }
        self.encounter_deck.draw()
    }

    /// Draw from the encounter deck into `player`'s hand.
    pub fn draw_card_to_hand(&mut self, player: PlayerId) -> EngineResult<Card> {
        let card = self.draw_card()?;
        self.hands[player].push(card);
        debug!(player = %player, "card drawn");
        Ok(card)
    }

    /// Draw from the destiny deck.
    ///
    /// With `reshuffle_discards` set, an exhausted deck is first rebuilt
    /// from the destiny discards.
    pub fn draw_destiny_card(&mut self) -> EngineResult<DestinyCard> {
        if self.destiny_deck.is_exhausted()
            && self.config.reshuffle_discards
            && !self.destiny_discards.is_empty()
        {
            let discards = std::mem::take(&mut self.destiny_discards);
            info!(cards = discards.len(), "rebuilding destiny deck from discards");
            self.destiny_deck.replenish(discards);
            self.destiny_deck.shuffle(&mut *self.rng);
        }
        self.destiny_deck.draw()
    }

    /// Put a used destiny card aside.
    pub fn discard_destiny_card(&mut self, card: DestinyCard) {
        self.destiny_discards.push(card);
    }

    /// Used destiny cards waiting for a rebuild.
    #[must_use]
    pub fn destiny_discards(&self) -> &[DestinyCard] {
        &self.destiny_discards
    }

    /// The encounter discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Take one copy of `card` back out of the discard pile.
    ///
    /// Returns `false` if it is not there.
    pub fn remove_from_discards(&mut self, card: Card) -> bool {
        match self.discard_pile.iter().rposition(|&c| c == card) {
            Some(pos) => {
                self.discard_pile.remove(pos);
                true
            }
            None => false,
        }
    }

    // === Encounter context ===

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Make `player` the active player.
    pub fn set_active_player(&mut self, player: PlayerId) {
        self.active_player = player;
    }

    /// The defending player.
    pub fn defense_player(&self) -> EngineResult<PlayerId> {
        self.defense_player
            .ok_or(EngineError::OutOfPhase("defense player"))
    }

    /// Set the defending player.
    pub fn set_defense_player(&mut self, player: PlayerId) {
        self.defense_player = Some(player);
    }

    /// Recorded offensive allies, in the order they joined.
    #[must_use]
    pub fn offensive_allies(&self) -> &[PlayerId] {
        &self.offensive_allies
    }

    /// Recorded defensive allies, in the order they joined.
    #[must_use]
    pub fn defensive_allies(&self) -> &[PlayerId] {
        &self.defensive_allies
    }

    /// Record `player` as an offensive ally.
    pub fn add_offensive_ally(&mut self, player: PlayerId) {
        self.offensive_allies.push(player);
    }

    /// Record `player` as a defensive ally.
    pub fn add_defensive_ally(&mut self, player: PlayerId) {
        self.defensive_allies.push(player);
    }

    /// Players who are neither offense nor defense, clockwise from the left
    /// of the offense.
    pub fn possible_allies(&self) -> EngineResult<Vec<PlayerId>> {
        let defense = self.defense_player()?;
        let offense = self.active_player;
        Ok(offense
            .seating_from_left(self.player_count())
            .filter(|&p| p != offense && p != defense)
            .collect())
    }

    /// Offense, then defense, then everyone else clockwise from the left of
    /// the offense. Nobody appears twice.
    pub fn players_in_resolution_order(&self) -> EngineResult<Vec<PlayerId>> {
        let defense = self.defense_player()?;
        let offense = self.active_player;
        let mut order = vec![offense];
        if defense != offense {
            order.push(defense);
        }
        order.extend(
            offense
                .seating_from_left(self.player_count())
                .filter(|&p| p != offense && p != defense),
        );
        Ok(order)
    }

    /// Commit `card` face down for `player`.
    pub fn set_encounter_card(&mut self, player: PlayerId, card: Card) {
        self.played[player] = Some(PlayedEncounterCard::face_down(card));
    }

    /// Card committed by `player`, if any.
    #[must_use]
    pub fn encounter_card(&self, player: PlayerId) -> Option<PlayedEncounterCard> {
        self.played[player]
    }

    /// Turn every committed card face up.
    pub fn reveal_encounter_cards(&mut self) {
        for played in self.played.values_mut().flatten() {
            played.visible = true;
        }
    }

    /// Move every committed card to the discard pile.
    pub fn discard_encounter_cards(&mut self) {
        let played: Vec<Card> = self
            .played
            .values_mut()
            .filter_map(Option::take)
            .map(|p| p.card)
            .collect();
        self.discard_pile.extend(played);
    }

    /// Outcome assigned to `player`.
    #[must_use]
    pub fn outcome(&self, player: PlayerId) -> EncounterOutcome {
        self.outcomes[player]
    }

    /// Assign an outcome to `player`.
    pub fn set_outcome(&mut self, player: PlayerId, outcome: EncounterOutcome) {
        self.outcomes[player] = outcome;
    }

    /// Result of the encounter, once revealed.
    #[must_use]
    pub fn encounter_result(&self) -> Option<EncounterResult> {
        self.encounter_result
    }

    /// Set the encounter result.
    pub fn set_encounter_result(&mut self, result: EncounterResult) {
        self.encounter_result = Some(result);
    }

    // === Progression ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Enter `phase`.
    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// 0 for the first encounter of a turn, 1 for the second.
    #[must_use]
    pub fn encounter_number(&self) -> u8 {
        self.encounter_number
    }

    /// Begin the active player's next encounter this turn.
    pub fn start_new_encounter(&mut self) {
        self.encounter_number += 1;
        self.reset_encounter();
        info!(
            player = %self.active_player,
            turn = self.turn_number,
            encounter = self.encounter_number,
            "new encounter"
        );
    }

    /// Begin a new turn for the current active player.
    pub fn start_new_turn(&mut self) {
        self.turn_number += 1;
        self.encounter_number = 0;
        self.reset_encounter();
        info!(player = %self.active_player, turn = self.turn_number, "new turn");
    }

    /// Pass the turn to the player on the left.
    pub fn advance_to_next_player(&mut self) {
        self.active_player = self.active_player.left(self.player_count());
    }

    fn reset_encounter(&mut self) {
        self.phase = Phase::Regroup;
        self.defense_player = None;
        self.offensive_allies.clear();
        self.defensive_allies.clear();
        self.gate.target_planet = None;
        self.encounter_result = None;
        for played in self.played.values_mut() {
            *played = None;
        }
        for outcome in self.outcomes.values_mut() {
            *outcome = EncounterOutcome::NO_EFFECT;
        }
    }

    /// Append the current encounter to the history.
    pub fn record_encounter(&mut self) -> EngineResult<EncounterRecord> {
        let record = EncounterRecord {
            turn: self.turn_number,
            encounter_number: self.encounter_number,
            offense: self.active_player,
            defense: self.defense_player()?,
            target_planet: self.target_planet()?,
            offensive_allies: self.offensive_allies.clone(),
            defensive_allies: self.defensive_allies.clone(),
            result: self
                .encounter_result
                .ok_or(EngineError::OutOfPhase("encounter result"))?,
        };
        self.history.push_back(record.clone());
        Ok(record)
    }

    /// Resolved encounters, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<EncounterRecord> {
        &self.history
    }

    /// Publicly visible view of the state.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            phase: self.phase,
            turn_number: self.turn_number,
            encounter_number: self.encounter_number,
            active_player: self.active_player,
            defense_player: self.defense_player,
            target_planet: self.gate.target_planet,
            offensive_allies: self.offensive_allies.clone(),
            defensive_allies: self.defensive_allies.clone(),
            planets: self
                .planets
                .iter()
                .map(|p| PlanetSnapshot {
                    id: p.id(),
                    owner: p.owner,
                    ships: p.ships().to_vec(),
                    allied_defenders: p.allied_defenders().ships().to_vec(),
                })
                .collect(),
            warp: self.warp.ships().to_vec(),
            gate: self.gate.ships().to_vec(),
            aliens: self.aliens.clone(),
            hand_sizes: PlayerMap::new(self.player_count(), |p| self.hands[p].len()),
            played: PlayerMap::new(self.player_count(), |p| match self.played[p] {
                None => PlayedView::Nothing,
                Some(played) if played.visible => PlayedView::FaceUp(played.card),
                Some(_) => PlayedView::FaceDown,
            }),
            outcomes: self.outcomes.clone(),
            encounter_result: self.encounter_result,
            encounter_deck_remaining: self.encounter_deck.remaining(),
            destiny_deck_remaining: self.destiny_deck.remaining(),
            discard_pile: self.discard_pile.clone(),
            history: self.history.clone(),
        }
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("phase", &self.phase)
            .field("turn_number", &self.turn_number)
            .field("encounter_number", &self.encounter_number)
            .field("active_player", &self.active_player)
            .field("defense_player", &self.defense_player)
            .field("players", &self.player_count())
            .finish_non_exhaustive()
    }
}
