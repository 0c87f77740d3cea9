//! Reveal: turn the cards over and decide the encounter.

use tracing::{debug, info};

use super::{PhaseHandler, PhaseOutcome};
use crate::cards::{Card, EncounterCardType};
use crate::core::{EngineError, EngineResult, GameState, Phase, PlayerId};
use crate::outcome::OutcomeTable;
use crate::ships::ShipContainer;

/// Reveals both committed cards and assigns every participant an outcome.
///
/// A morph takes the type and value of the opposing card; two morphs lose
/// on both sides. Attack against attack compares totals, with ties going
/// to the defense. Attack against negotiate wins for the attacker. Two
/// negotiates ask both principals whether they accept the deal.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealPhase;

impl PhaseHandler for RevealPhase {
    fn phase(&self) -> Phase {
        Phase::Reveal
    }

    fn execute(&self, state: &mut GameState) -> EngineResult<PhaseOutcome> {
        let offense = state.active_player();
        let defense = state.defense_player()?;
        state.reveal_encounter_cards();

        let offense_card = committed_card(state, offense)?;
        let defense_card = committed_card(state, defense)?;
        let offense_type = encounter_type(offense, offense_card)?;
        let defense_type = encounter_type(defense, defense_card)?;

        let (offense_card, offense_type) = if offense_type == EncounterCardType::Morph {
            (defense_card, defense_type)
        } else {
            (offense_card, offense_type)
        };
        let (defense_card, defense_type) = if defense_type == EncounterCardType::Morph {
            (offense_card, offense_type)
        } else {
            (defense_card, defense_type)
        };

        use EncounterCardType::{Attack, Morph, Negotiate};
        let row = match (offense_type, defense_type) {
            (Attack, Attack) => compare_attacks(state, offense_card, defense_card)?,
            (Negotiate, Negotiate) => negotiate(state, offense, defense),
            (Attack, Negotiate) => OutcomeTable::ATTACK_AGAINST_NEGOTIATE,
            (Negotiate, Attack) => OutcomeTable::NEGOTIATE_AGAINST_ATTACK,
            // Only both sides morphing leaves a morph after substitution.
            (Morph, _) | (_, Morph) => OutcomeTable::DUAL_MORPH,
        };

        apply(state, offense, defense, row);
        info!(result = ?row.result, offense = %offense, defense = %defense, "encounter revealed");
        Ok(PhaseOutcome::Continue)
    }
}

fn committed_card(state: &GameState, player: PlayerId) -> EngineResult<Card> {
    state
        .encounter_card(player)
        .map(|played| played.card)
        .ok_or(EngineError::OutOfPhase("encounter card"))
}

fn encounter_type(player: PlayerId, card: Card) -> EngineResult<EncounterCardType> {
    card.encounter_type()
        .ok_or_else(|| EngineError::protocol(player, format!("{card} is not an encounter card")))
}

fn compare_attacks(
    state: &GameState,
    offense_card: Card,
    defense_card: Card,
) -> EngineResult<OutcomeTable> {
    let defense = state.defense_player()?;
    let planet = state.planet(state.target_planet()?)?;

    let offense_total = state.gate().ships().len() + offense_card.attack_value().unwrap_or(0) as usize;
    let defense_total = planet.count_of(defense)
        + planet.allied_defenders().ships().len()
        + defense_card.attack_value().unwrap_or(0) as usize;
    debug!(offense_total, defense_total, "attack totals");

    Ok(if offense_total > defense_total {
        OutcomeTable::ATTACK_WINS
    } else {
        OutcomeTable::ATTACK_LOSES
    })
}

fn negotiate(state: &GameState, offense: PlayerId, defense: PlayerId) -> OutcomeTable {
    let offense_port = state.port(offense).clone();
    let defense_port = state.port(defense).clone();
    let (offense_accepts, defense_accepts) = rayon::join(
        || offense_port.accept_deal(defense),
        || defense_port.accept_deal(offense),
    );
    debug!(offense_accepts, defense_accepts, "deal answered");

    if offense_accepts && defense_accepts {
        OutcomeTable::DEAL_MADE
    } else {
        OutcomeTable::DEAL_FAILED
    }
}

fn apply(state: &mut GameState, offense: PlayerId, defense: PlayerId, row: OutcomeTable) {
    state.set_outcome(offense, row.offense);
    for ally in state.offensive_allies().to_vec() {
        state.set_outcome(ally, row.offensive_allies);
    }
    state.set_outcome(defense, row.defense);
    for ally in state.defensive_allies().to_vec() {
        state.set_outcome(ally, row.defensive_allies);
    }
    state.set_encounter_result(row.result);
}
