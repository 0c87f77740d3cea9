//! Bounded, retryable ship collection.
//!
//! `MoveShipsAction` asks one player for ships one at a time. Each round
//! re-reads the source, so ships already moved drop out of the offer.
//!
//! ## Bounds
//!
//! - Collection stops after `max` ships, or as soon as the source is empty,
//!   even below `min`.
//! - A decline below `min` repeats the same round without using up the
//!   budget. Repeated declines are capped by `max_decision_retries`.
//! - A decline at or above `min` ends collection.

use tracing::{debug, warn};

use crate::core::{EngineError, EngineResult, GameState, PlanetId, PlayerId, ShipBounds};
use crate::decision::ensure_offered;
use crate::ships::{Ship, ShipLocation};

/// Reads the ships currently eligible for collection.
pub type ShipSource<'a> = Box<dyn Fn(&GameState) -> Vec<Ship> + 'a>;

/// Moves one collected ship to its destination.
pub type ShipSink<'a> = Box<dyn Fn(&mut GameState, Ship) -> EngineResult<()> + 'a>;

/// Bounded ship collection for one player.
pub struct MoveShipsAction<'a> {
    acting_player: PlayerId,
    bounds: ShipBounds,
    source: ShipSource<'a>,
    sink: ShipSink<'a>,
}

impl<'a> MoveShipsAction<'a> {
    /// Collect between `bounds.min` and `bounds.max` ships from `source`
    /// into `sink`.
    pub fn new(
        acting_player: PlayerId,
        bounds: ShipBounds,
        source: impl Fn(&GameState) -> Vec<Ship> + 'a,
        sink: impl Fn(&mut GameState, Ship) -> EngineResult<()> + 'a,
    ) -> Self {
        Self {
            acting_player,
            bounds,
            source: Box::new(source),
            sink: Box::new(sink),
        }
    }

    /// Stage ships from `player`'s colonies in the hyperspace gate.
    pub fn colonies_to_gate(player: PlayerId, bounds: ShipBounds) -> Self {
        Self::new(
            player,
            bounds,
            move |state| state.ships_on_colonies(player),
            |state, ship| state.move_ship(ship, ShipLocation::HyperspaceGate),
        )
    }

    /// Lend ships from `player`'s colonies to `planet`'s allied defenders.
    pub fn colonies_to_allied_defenders(
        player: PlayerId,
        bounds: ShipBounds,
        planet: PlanetId,
    ) -> Self {
        Self::new(
            player,
            bounds,
            move |state| state.ships_on_colonies(player),
            move |state, ship| state.move_ship(ship, ShipLocation::AlliedDefenders(planet)),
        )
    }

    /// The player making the choices.
    #[must_use]
    pub fn acting_player(&self) -> PlayerId {
        self.acting_player
    }

    /// Run the collection. Returns how many ships were moved.
    pub fn execute(&self, state: &mut GameState) -> EngineResult<usize> {
        let player = self.acting_player;
        let port = state.port(player).clone();
        let max_retries = state.config().max_decision_retries;
        let mut moved = 0;
        let mut declines = 0;

        while moved < self.bounds.max {
            let candidates = (self.source)(state);
            if candidates.is_empty() {
                debug!(player = %player, moved, "no ships left to collect");
                break;
            }

            debug!(player = %player, candidates = candidates.len(), "choose ship");
            match port.choose_ship(&candidates) {
                Some(ship) => {
                    ensure_offered(player, &ship, &candidates, "ship")?;
                    (self.sink)(state, ship)?;
                    moved += 1;
                }
                None if moved < self.bounds.min => {
                    declines += 1;
                    if declines > max_retries {
                        return Err(EngineError::RetriesExhausted {
                            player,
                            attempts: declines,
                        });
                    }
                    warn!(player = %player, moved, min = self.bounds.min, "declined below minimum");
                }
                None => break,
            }
        }

        Ok(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Alien, Card};
    use crate::ships::ShipContainer;
    use crate::core::RulesConfig;
    use crate::decision::{AllianceSide, PlayerDecisionPort, RewardSplit, SharedPort};
    use proptest::prelude::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Answers `choose_ship` from a script; takes the first candidate once
    /// the script runs out.
    struct ShipPicker {
        script: Mutex<VecDeque<Option<usize>>>,
        asked: Mutex<usize>,
    }

    impl ShipPicker {
        fn cooperative() -> Self {
            Self::scripted(Vec::new())
        }

        fn scripted(answers: Vec<Option<usize>>) -> Self {
            Self {
                script: Mutex::new(answers.into()),
                asked: Mutex::new(0),
            }
        }
    }

    impl PlayerDecisionPort for ShipPicker {
        fn select_alien(&self, choices: &[Alien]) -> Alien {
            choices[0]
        }
        fn accept_encounter_in_home_system(&self) -> bool {
            false
        }
        fn choose_target_planet(&self, candidates: &[PlanetId]) -> PlanetId {
            candidates[0]
        }
        fn choose_ship(&self, candidates: &[Ship]) -> Option<Ship> {
            *self.asked.lock().unwrap() += 1;
            match self.script.lock().unwrap().pop_front() {
                Some(Some(i)) => Some(candidates[i]),
                Some(None) => None,
                None => Some(candidates[0]),
            }
        }
        fn choose_player_to_attack(&self, candidates: &[PlayerId]) -> PlayerId {
            candidates[0]
        }
        fn choose_alliance_side(&self, _offered: &[AllianceSide]) -> AllianceSide {
            AllianceSide::Neither
        }
        fn invite_offensive_allies(&self, _candidates: &[PlayerId]) -> Vec<PlayerId> {
            Vec::new()
        }
        fn invite_defensive_allies(&self, _candidates: &[PlayerId]) -> Vec<PlayerId> {
            Vec::new()
        }
        fn choose_encounter_card(&self, hand: &[Card]) -> Card {
            hand[0]
        }
        fn choose_colony(&self, candidates: &[PlanetId]) -> PlanetId {
            candidates[0]
        }
        fn choose_rewards(&self, budget: usize) -> RewardSplit {
            RewardSplit::new(budget, 0)
        }
        fn select_planet_to_place_ship(&self, _ship: Ship, candidates: &[PlanetId]) -> PlanetId {
            candidates[0]
        }
    }

    struct Rogue;

    impl PlayerDecisionPort for Rogue {
        fn select_alien(&self, choices: &[Alien]) -> Alien {
            choices[0]
        }
        fn accept_encounter_in_home_system(&self) -> bool {
            false
        }
        fn choose_target_planet(&self, candidates: &[PlanetId]) -> PlanetId {
            candidates[0]
        }
        fn choose_ship(&self, _candidates: &[Ship]) -> Option<Ship> {
            Some(Ship::new(crate::core::ShipId::new(999), PlayerId::new(0)))
        }
        fn choose_player_to_attack(&self, candidates: &[PlayerId]) -> PlayerId {
            candidates[0]
        }
        fn choose_alliance_side(&self, _offered: &[AllianceSide]) -> AllianceSide {
            AllianceSide::Neither
        }
        fn invite_offensive_allies(&self, _candidates: &[PlayerId]) -> Vec<PlayerId> {
            Vec::new()
        }
        fn invite_defensive_allies(&self, _candidates: &[PlayerId]) -> Vec<PlayerId> {
            Vec::new()
        }
        fn choose_encounter_card(&self, hand: &[Card]) -> Card {
            hand[0]
        }
        fn choose_colony(&self, candidates: &[PlanetId]) -> PlanetId {
            candidates[0]
        }
        fn choose_rewards(&self, budget: usize) -> RewardSplit {
            RewardSplit::new(budget, 0)
        }
        fn select_planet_to_place_ship(&self, _ship: Ship, candidates: &[PlanetId]) -> PlanetId {
            candidates[0]
        }
    }

    /// One player with `ships` ships on a single colony.
    fn setup(port: SharedPort, ships: usize, config: RulesConfig) -> GameState {
        let mut state = GameState::with_seed(config, 7);
        state.set_players(vec![port]).unwrap();
        let planet = state.create_planet(Some(PlayerId::new(0)));
        for _ in 0..ships {
            state
                .create_ship(PlayerId::new(0), ShipLocation::Planet(planet))
                .unwrap();
        }
        state
    }

    #[test]
    fn test_cooperative_collects_up_to_max() {
        let mut state = setup(Arc::new(ShipPicker::cooperative()), 6, RulesConfig::default());
        let action = MoveShipsAction::colonies_to_gate(PlayerId::new(0), ShipBounds::new(1, 4));
        assert_eq!(action.acting_player(), PlayerId::new(0));

        assert_eq!(action.execute(&mut state).unwrap(), 4);
        assert_eq!(state.gate().ships().len(), 4);
        assert_eq!(state.ships_on_colonies(PlayerId::new(0)).len(), 2);
    }

    #[test]
    fn test_stops_when_source_empties_below_min() {
        let picker = Arc::new(ShipPicker::cooperative());
        let mut state = setup(picker.clone(), 1, RulesConfig::default());
        let action = MoveShipsAction::colonies_to_gate(PlayerId::new(0), ShipBounds::new(3, 4));

        assert_eq!(action.execute(&mut state).unwrap(), 1);
        assert_eq!(*picker.asked.lock().unwrap(), 1);
    }

    #[test]
    fn test_decline_below_min_repeats_round() {
        let picker = Arc::new(ShipPicker::scripted(vec![None, None, Some(0), None]));
        let mut state = setup(picker.clone(), 4, RulesConfig::default());
        let action = MoveShipsAction::colonies_to_gate(PlayerId::new(0), ShipBounds::new(1, 4));

        assert_eq!(action.execute(&mut state).unwrap(), 1);
        assert_eq!(*picker.asked.lock().unwrap(), 4);
    }

    #[test]
    fn test_endless_declines_exhaust_retries() {
        let picker = Arc::new(ShipPicker::scripted(vec![None; 10]));
        let config = RulesConfig::default().with_max_decision_retries(3);
        let mut state = setup(picker, 2, config);
        let action = MoveShipsAction::colonies_to_gate(PlayerId::new(0), ShipBounds::new(1, 4));

        assert_eq!(
            action.execute(&mut state),
            Err(EngineError::RetriesExhausted {
                player: PlayerId::new(0),
                attempts: 4
            })
        );
        assert!(state.gate().ships().is_empty());
    }

    #[test]
    fn test_unoffered_ship_is_protocol_violation() {
        let mut state = setup(Arc::new(Rogue), 2, RulesConfig::default());
        let action = MoveShipsAction::colonies_to_gate(PlayerId::new(0), ShipBounds::new(1, 4));

        assert!(matches!(
            action.execute(&mut state),
            Err(EngineError::ProtocolViolation { .. })
        ));
        assert!(state.gate().ships().is_empty());
    }

    #[test]
    fn test_allied_defenders_sink_skips_main_stack() {
        let mut state = setup(Arc::new(ShipPicker::cooperative()), 3, RulesConfig::default());
        let target = state.create_planet(None);
        let action = MoveShipsAction::colonies_to_allied_defenders(
            PlayerId::new(0),
            ShipBounds::new(1, 2),
            target,
        );

        assert_eq!(action.execute(&mut state).unwrap(), 2);
        let planet = state.planet(target).unwrap();
        assert!(planet.ships().is_empty());
        assert_eq!(planet.allied_defenders().ships().len(), 2);
    }

    proptest! {
        #[test]
        fn prop_cooperative_collects_min_of_max_and_available(
            available in 0usize..10,
            min in 0usize..5,
            extra in 0usize..5,
        ) {
            let max = min + extra;
            let mut state = setup(Arc::new(ShipPicker::cooperative()), available, RulesConfig::default());
            let action = MoveShipsAction::colonies_to_gate(PlayerId::new(0), ShipBounds::new(min, max));

            let moved = action.execute(&mut state).unwrap();

            prop_assert_eq!(moved, max.min(available));
            prop_assert_eq!(state.gate().ships().len(), moved);
            prop_assert_eq!(state.ships_on_colonies(PlayerId::new(0)).len(), available - moved);
        }
    }
}
