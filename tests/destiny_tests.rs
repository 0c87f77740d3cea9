//! Destiny phase tests.

mod common;

use std::sync::Arc;

use common::{home_planet, seat, table, ScriptedPlayer};
use cosmic_rules::{
    Deck, DeckKind, DestinyCard, DestinyPhase, EngineError, GameSetup, GameState, PhaseHandler,
    PlayerId, RulesConfig, SharedPort, ShipLocation,
};

fn destiny(state: &mut GameState, named: &[u8]) {
    let cards = named.iter().map(|&n| DestinyCard::naming(PlayerId::new(n))).collect();
    state.set_destiny_deck(Deck::new(DeckKind::Destiny, cards));
}

/// A card naming another player makes them the defense.
#[test]
fn test_opponent_becomes_defense() {
    let mut state = table(
        &[Arc::new(ScriptedPlayer::new()), Arc::new(ScriptedPlayer::new()), Arc::new(ScriptedPlayer::new())],
        RulesConfig::default(),
    );
    destiny(&mut state, &[2, 1]);

    DestinyPhase.execute(&mut state).unwrap();

    assert_eq!(state.defense_player(), Ok(seat(2)));
    assert_eq!(state.destiny_deck().remaining(), 1);
}

/// Drawing your own color without a foreign colony at home redraws without
/// asking.
#[test]
fn test_own_card_without_foreign_colony_redraws() {
    let offense = Arc::new(ScriptedPlayer::new().accepting_home_system());
    let mut state = table(&[offense.clone(), Arc::new(ScriptedPlayer::new())], RulesConfig::default());
    home_planet(&mut state, seat(0), 4);
    destiny(&mut state, &[0, 1]);

    DestinyPhase.execute(&mut state).unwrap();

    assert_eq!(state.defense_player(), Ok(seat(1)));
    assert_eq!(offense.times_asked("accept_encounter_in_home_system"), 0);
}

/// With a foreign colony at home, the offense may decline and redraw.
#[test]
fn test_own_card_declined_redraws() {
    let offense = Arc::new(ScriptedPlayer::new());
    let mut state = table(&[offense.clone(), Arc::new(ScriptedPlayer::new())], RulesConfig::default());
    let planet = home_planet(&mut state, seat(0), 4);
    state.create_ship(seat(1), ShipLocation::Planet(planet)).unwrap();
    destiny(&mut state, &[0, 1]);

    DestinyPhase.execute(&mut state).unwrap();

    assert_eq!(state.defense_player(), Ok(seat(1)));
    assert_eq!(offense.times_asked("accept_encounter_in_home_system"), 1);
}

/// With a foreign colony at home, the offense may fight at home.
#[test]
fn test_own_card_accepted_sets_offense_as_defense() {
    let offense = Arc::new(ScriptedPlayer::new().accepting_home_system());
    let mut state = table(&[offense, Arc::new(ScriptedPlayer::new())], RulesConfig::default());
    let planet = home_planet(&mut state, seat(0), 4);
    state.create_ship(seat(1), ShipLocation::Planet(planet)).unwrap();
    destiny(&mut state, &[0, 1]);

    DestinyPhase.execute(&mut state).unwrap();

    assert_eq!(state.defense_player(), Ok(seat(0)));
    assert_eq!(state.destiny_deck().remaining(), 1);
}

/// Running out of destiny cards is reported, not looped on.
#[test]
fn test_exhausted_destiny_deck() {
    let mut state = table(&[Arc::new(ScriptedPlayer::new()), Arc::new(ScriptedPlayer::new())], RulesConfig::default());
    destiny(&mut state, &[0, 0]);

    assert_eq!(
        DestinyPhase.execute(&mut state),
        Err(EngineError::ExhaustedResource(DeckKind::Destiny))
    );
}

/// With reshuffling enabled, used destiny cards come back.
#[test]
fn test_destiny_reshuffle_extension() {
    let config = RulesConfig::default().with_reshuffle_discards(true);
    let mut state = table(&[Arc::new(ScriptedPlayer::new()), Arc::new(ScriptedPlayer::new())], config);
    destiny(&mut state, &[1]);

    DestinyPhase.execute(&mut state).unwrap();
    state.start_new_encounter();
    DestinyPhase.execute(&mut state).unwrap();

    assert_eq!(state.defense_player(), Ok(seat(1)));
}

/// A rebuilt deck is searched for a defense before giving up.
#[test]
fn test_reshuffle_finds_defense_in_discards() {
    let config = RulesConfig::default().with_reshuffle_discards(true);
    let mut state = table(&[Arc::new(ScriptedPlayer::new()), Arc::new(ScriptedPlayer::new())], config);
    destiny(&mut state, &[0, 0]);
    state.discard_destiny_card(DestinyCard::naming(seat(1)));

    DestinyPhase.execute(&mut state).unwrap();

    assert_eq!(state.defense_player(), Ok(seat(1)));
}

/// A lone player can never find a defense, even with reshuffling on.
#[test]
fn test_solo_game_with_reshuffle_exhausts_destiny() {
    common::init_logging();
    let solo: Vec<SharedPort> = vec![Arc::new(ScriptedPlayer::new()) as SharedPort];
    let config = RulesConfig::default().with_reshuffle_discards(true);
    let mut state = GameSetup::new(config).with_seed(solo, 3).unwrap();

    assert_eq!(
        DestinyPhase.execute(&mut state),
        Err(EngineError::ExhaustedResource(DeckKind::Destiny))
    );
    assert!(state.defense_player().is_err());
}
