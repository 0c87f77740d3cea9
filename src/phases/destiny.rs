//! Destiny: pick the defense player.

use tracing::{debug, info};

use super::{PhaseHandler, PhaseOutcome};
use crate::cards::DeckKind;
use crate::core::{EngineError, EngineResult, GameState, Phase};

/// Draws destiny cards until one names a defense player.
///
/// A card naming someone else makes that player the defense. A card naming
/// the active player only counts when a foreign colony sits in the active
/// player's home system and the player opts in; otherwise it is discarded
/// and another card drawn. Running out of destiny cards is an error, and so
/// is a deck in which no card can name a defense: with reshuffling on, the
/// phase gives up once every card in play has been rejected.
#[derive(Clone, Copy, Debug, Default)]
pub struct DestinyPhase;

impl PhaseHandler for DestinyPhase {
    fn phase(&self) -> Phase {
        Phase::Destiny
    }

    fn execute(&self, state: &mut GameState) -> EngineResult<PhaseOutcome> {
        let offense = state.active_player();
        // The undrawn cards, then one rebuild holding every card in play.
        let limit = 2 * state.destiny_deck().remaining() + state.destiny_discards().len();
        let mut rejected = 0;
        loop {
            let card = state.draw_destiny_card()?;
            state.discard_destiny_card(card);
            let named = card.player;
            debug!(player = %named, "destiny card drawn");

            if named == offense {
                let has_foreign_colony = !state.home_planets_with_foreign_colonies(offense).is_empty();
                if !has_foreign_colony || !state.port(offense).accept_encounter_in_home_system() {
                    rejected += 1;
                    if rejected >= limit {
                        return Err(EngineError::ExhaustedResource(DeckKind::Destiny));
                    }
                    continue;
                }
            }

            state.set_defense_player(named);
            info!(offense = %offense, defense = %named, "defense chosen");
            return Ok(PhaseOutcome::Continue);
        }
    }
}
