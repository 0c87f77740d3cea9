//! Resolution: apply every outcome, then decide what comes next.

use tracing::{debug, info, warn};

use super::{
    choose_colony, choose_required_ship, finish_turn, return_stranded_ships, NextStep,
    PhaseHandler, PhaseOutcome,
};
use crate::core::{EngineError, EngineResult, GameState, Phase, PlayerId};
use crate::decision::RewardSplit;
use crate::outcome::{EncounterOutcome, EncounterResult};
use crate::ships::{ShipContainer, ShipLocation};

/// Applies outcomes in resolution order and ends the encounter.
///
/// Each player's engaged ships are gathered first, then the outcome flags
/// are applied in this order: ships to warp, compensation, defender
/// rewards, colony. Played cards are discarded, ships still in the gate or
/// lent to a planet go home, and the encounter is added to the history.
///
/// A successful first encounter lets the offense take a second one.
/// Anything else passes the turn to the left.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResolutionPhase;

impl PhaseHandler for ResolutionPhase {
    fn phase(&self) -> Phase {
        Phase::Resolution
    }

    fn execute(&self, state: &mut GameState) -> EngineResult<PhaseOutcome> {
        let offense = state.active_player();
        let defense = state.defense_player()?;
        let target = state.target_planet()?;

        for player in state.players_in_resolution_order()? {
            let outcome = state.outcome(player);
            if outcome.is_no_effect() {
                continue;
            }
            let engaged = state.ships_in_encounter(player)?;
            debug!(player = %player, outcome = %outcome, ships = engaged.len(), "resolving");

            if outcome.contains(EncounterOutcome::ALL_SHIPS_TO_WARP) {
                for &(ship, from) in &engaged {
                    state.move_ship_from(ship, from, ShipLocation::Warp)?;
                }
            }
            if outcome.contains(EncounterOutcome::COLLECT_COMPENSATION) {
                let opponent = if player == offense { defense } else { offense };
                state.take_compensation(player, opponent, engaged.len());
            }
            if outcome.contains(EncounterOutcome::DEFENDER_REWARDS) {
                collect_rewards(state, player, engaged.len())?;
            }
            if outcome.contains(EncounterOutcome::ESTABLISH_COLONY) {
                for &(ship, from) in &engaged {
                    state.move_ship_from(ship, from, ShipLocation::Planet(target))?;
                }
            }
        }

        state.discard_encounter_cards();
        return_stranded_ships(state)?;
        let record = state.record_encounter()?;
        info!(
            turn = record.turn,
            encounter = record.encounter_number,
            result = ?record.result,
            "encounter resolved"
        );

        let another = record.result == EncounterResult::Success
            && state.encounter_number() == 0
            && state.port(offense).accept_another_encounter();
        if another {
            state.start_new_encounter();
            Ok(PhaseOutcome::Finished(NextStep::NewEncounter))
        } else {
            Ok(finish_turn(state))
        }
    }
}

/// Whether `split` spends exactly `budget` on rewards `player` can take.
fn is_valid_split(state: &GameState, player: PlayerId, budget: usize, split: RewardSplit) -> bool {
    split.total() == budget
        && split.ships <= state.warp().count_of(player)
        && (split.ships == 0 || !state.colonies_of(player).is_empty())
}

fn collect_rewards(state: &mut GameState, player: PlayerId, budget: usize) -> EngineResult<()> {
    if budget == 0 {
        return Ok(());
    }

    let port = state.port(player).clone();
    let max_retries = state.config().max_decision_retries;
    let mut split = None;
    for attempt in 0..=max_retries {
        let offered = port.choose_rewards(budget);
        if is_valid_split(state, player, budget, offered) {
            split = Some(offered);
            break;
        }
        warn!(player = %player, attempt, cards = offered.cards, ships = offered.ships, budget, "invalid reward split");
    }
    let split = split.ok_or(EngineError::InvalidRewardSplit {
        player,
        attempts: max_retries + 1,
    })?;
    debug!(player = %player, cards = split.cards, ships = split.ships, "rewards chosen");

    for _ in 0..split.cards {
        state.draw_card_to_hand(player)?;
    }
    for _ in 0..split.ships {
        let in_warp = state.warp().ships_of(player);
        let ship = choose_required_ship(state, player, &in_warp)?;
        let Some(planet) = choose_colony(state, player)? else {
            break;
        };
        state.move_ship_from(ship, ShipLocation::Warp, ShipLocation::Planet(planet))?;
    }
    Ok(())
}
