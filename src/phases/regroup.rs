//! Regroup: the offense recovers one ship from the warp.

use tracing::debug;

use super::{choose_required_ship, PhaseHandler, PhaseOutcome};
use crate::core::{EngineResult, GameState, Phase};
use crate::decision::ensure_offered;
use crate::ships::{ShipContainer, ShipLocation};

/// Recovers one of the active player's ships from the warp.
///
/// The ship lands on a colony the player picks, or in the hyperspace gate
/// when the player has no colonies. Nothing happens when the warp holds
/// none of the player's ships.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegroupPhase;

impl PhaseHandler for RegroupPhase {
    fn phase(&self) -> Phase {
        Phase::Regroup
    }

    fn execute(&self, state: &mut GameState) -> EngineResult<PhaseOutcome> {
        let player = state.active_player();
        let in_warp = state.warp().ships_of(player);
        if in_warp.is_empty() {
            debug!(player = %player, "no ships to regroup");
            return Ok(PhaseOutcome::Continue);
        }

        let ship = choose_required_ship(state, player, &in_warp)?;
        let colonies = state.colonies_of(player);
        let to = if colonies.is_empty() {
            ShipLocation::HyperspaceGate
        } else {
            let planet = state.port(player).select_planet_to_place_ship(ship, &colonies);
            ensure_offered(player, &planet, &colonies, "colony")?;
            ShipLocation::Planet(planet)
        };

        state.move_ship_from(ship, ShipLocation::Warp, to)?;
        Ok(PhaseOutcome::Continue)
    }
}
