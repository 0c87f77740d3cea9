//! Planning: both principals commit an encounter card face down.

use tracing::{debug, info};

use super::{finish_turn, return_stranded_ships, PhaseHandler, PhaseOutcome};
use crate::cards::DeckKind;
use crate::core::{EngineError, EngineResult, GameState, Phase};
use crate::decision::ensure_offered;

/// Has offense and defense commit one encounter card each.
///
/// - An offense with no encounter card ends the turn here. Staged ships go
///   home and play passes to the left.
/// - A defense with no encounter card discards the hand and draws a new
///   one, as often as needed.
/// - Both choices are asked for at the same time on the rayon pool. Neither
///   sees the other's answer; both are applied once both are in.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanningPhase;

impl PhaseHandler for PlanningPhase {
    fn phase(&self) -> Phase {
        Phase::Planning
    }

    fn execute(&self, state: &mut GameState) -> EngineResult<PhaseOutcome> {
        let offense = state.active_player();
        let defense = state.defense_player()?;

        if !state.has_playable_card(offense) {
            info!(player = %offense, "offense has no encounter card, turn ends");
            return_stranded_ships(state)?;
            return Ok(finish_turn(state));
        }

        let mut redraws = 0;
        while !state.has_playable_card(defense) {
            if redraws > state.config().max_decision_retries {
                return Err(EngineError::ExhaustedResource(DeckKind::Encounter));
            }
            debug!(player = %defense, "defense has no encounter card, drawing a new hand");
            state.draw_new_hand(defense)?;
            redraws += 1;
        }

        let offense_hand = state.playable_cards(offense);
        let defense_hand = state.playable_cards(defense);
        let offense_port = state.port(offense).clone();
        let defense_port = state.port(defense).clone();

        let (offense_card, defense_card) = rayon::join(
            || offense_port.choose_encounter_card(&offense_hand),
            || defense_port.choose_encounter_card(&defense_hand),
        );

        ensure_offered(offense, &offense_card, &offense_hand, "card")?;
        ensure_offered(defense, &defense_card, &defense_hand, "card")?;
        state.remove_card_from_hand(offense, offense_card)?;
        state.set_encounter_card(offense, offense_card);
        state.remove_card_from_hand(defense, defense_card)?;
        state.set_encounter_card(defense, defense_card);
        debug!(offense = %offense, defense = %defense, "encounter cards committed");

        Ok(PhaseOutcome::Continue)
    }
}
