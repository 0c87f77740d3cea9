//! Game setup tests.

mod common;

use std::sync::Arc;

use common::{init_logging, seat, ScriptedPlayer};
use cosmic_rules::cards::catalog::BASE_ENCOUNTER_DECK_SIZE;
use cosmic_rules::{
    Card, EngineError, GameSetup, PlayerId, RulesConfig, SharedPort, ShipContainer,
};

fn ports(count: usize) -> (Vec<Arc<ScriptedPlayer>>, Vec<SharedPort>) {
    let players: Vec<_> = (0..count).map(|_| Arc::new(ScriptedPlayer::new())).collect();
    let ports = players.iter().map(|p| p.clone() as SharedPort).collect();
    (players, ports)
}

/// Every player gets five planets of four ships, eight cards and an alien.
#[test]
fn test_setup_creates_home_systems_and_hands() {
    init_logging();
    for count in [2, 3, 4, 5] {
        let (players, ports) = ports(count);
        let state = GameSetup::new(RulesConfig::default()).with_seed(ports, 11).unwrap();

        assert_eq!(state.player_count(), count);
        assert_eq!(state.planets().len(), count * 5);
        for player in PlayerId::all(count) {
            let home = state.planets_of(player);
            assert_eq!(home.len(), 5);
            for planet in home {
                let planet = state.planet(planet).unwrap();
                assert_eq!(planet.ships().len(), 4);
                assert_eq!(planet.count_of(player), 4);
            }
            assert_eq!(state.hand(player).len(), 8);
            assert!(state.alien(player).is_some());
        }
        for player in &players {
            assert_eq!(player.times_asked("select_alien"), 1);
        }
    }
}

/// The destiny deck names each player three times.
#[test]
fn test_destiny_deck_has_three_cards_per_player() {
    init_logging();
    let (_, ports) = ports(4);
    let state = GameSetup::new(RulesConfig::default()).with_seed(ports, 3).unwrap();

    let deck = state.destiny_deck();
    assert_eq!(deck.remaining(), 12);
    for player in PlayerId::all(4) {
        assert_eq!(deck.undrawn().iter().filter(|c| c.player == player).count(), 3);
    }
}

/// The encounter deck holds the fixed cards plus two flares per player,
/// minus the dealt hands.
#[test]
fn test_encounter_deck_includes_dealt_flares() {
    init_logging();
    let (_, ports) = ports(3);
    let state = GameSetup::new(RulesConfig::default()).with_seed(ports, 5).unwrap();

    let total = BASE_ENCOUNTER_DECK_SIZE + 3 * 2;
    assert_eq!(state.encounter_deck().len(), total);
    assert_eq!(state.encounter_deck().remaining(), total - 3 * 8);

    let flares = state
        .encounter_deck()
        .undrawn()
        .iter()
        .chain(state.encounter_deck().drawn())
        .filter(|c| matches!(c, Card::Flare(_)))
        .count();
    assert_eq!(flares, 6);
}

/// The chosen alien is one of the flares dealt to that player, and the
/// flare for it went into the encounter deck.
#[test]
fn test_alien_choice_comes_from_dealt_flares() {
    init_logging();
    let (_, ports) = ports(2);
    let state = GameSetup::new(RulesConfig::default()).with_seed(ports, 8).unwrap();

    let deck = state.encounter_deck();
    for player in PlayerId::all(2) {
        let alien = state.alien(player).unwrap();
        let flare = Card::Flare(alien.id);
        assert!(deck.drawn().contains(&flare) || deck.undrawn().contains(&flare));
    }
}

/// The starting player is a registered seat and setup is seed-determined.
#[test]
fn test_starting_player_is_valid_and_deterministic() {
    init_logging();
    for seed in 0..20 {
        let (_, a) = ports(4);
        let (_, b) = ports(4);
        let first = GameSetup::new(RulesConfig::default()).with_seed(a, seed).unwrap();
        let second = GameSetup::new(RulesConfig::default()).with_seed(b, seed).unwrap();

        assert!(first.active_player().index() < 4);
        assert_eq!(first.active_player(), second.active_player());
        assert_eq!(first.hand(seat(0)), second.hand(seat(0)));
    }
}

/// Smaller variants follow the config.
#[test]
fn test_setup_follows_config() {
    init_logging();
    let (_, ports) = ports(2);
    let config = RulesConfig::default()
        .with_planets_per_player(2)
        .with_ships_per_planet(3)
        .with_hand_size(5);
    let state = GameSetup::new(config).with_seed(ports, 1).unwrap();

    assert_eq!(state.planets().len(), 4);
    assert_eq!(state.ships_on_colonies(seat(1)).len(), 6);
    assert_eq!(state.hand(seat(0)).len(), 5);
}

/// Players cannot be registered twice.
#[test]
fn test_players_registered_once() {
    init_logging();
    let (_, ports) = ports(2);
    let mut state = GameSetup::new(RulesConfig::default()).with_seed(ports.clone(), 1).unwrap();
    assert_eq!(state.set_players(ports), Err(EngineError::PlayersAlreadyRegistered));
}
