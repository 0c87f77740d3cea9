//! The seven phase handlers.
//!
//! Each handler consumes and mutates a `GameState`, asking players for
//! decisions through their ports. Handlers run in the order of
//! `Phase::ALL`; `crate::encounter::Encounter` drives them.
//!
//! ## Ending an encounter early
//!
//! Most handlers return `PhaseOutcome::Continue`. Planning ends the turn
//! when the offense has no encounter card, and Resolution always finishes
//! the encounter. Both set up the state for what comes next before
//! returning `PhaseOutcome::Finished`.

mod alliance;
mod destiny;
mod launch;
mod planning;
mod regroup;
mod resolution;
mod reveal;

pub use alliance::AlliancePhase;
pub use destiny::DestinyPhase;
pub use launch::LaunchPhase;
pub use planning::PlanningPhase;
pub use regroup::RegroupPhase;
pub use resolution::ResolutionPhase;
pub use reveal::RevealPhase;

use tracing::{debug, info, warn};

use crate::core::{EngineError, EngineResult, GameState, Phase, PlanetId, PlayerId};
use crate::decision::ensure_offered;
use crate::ships::{Ship, ShipContainer, ShipLocation};

/// What follows a finished encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextStep {
    /// Same active player, second encounter.
    NewEncounter,
    /// Next player's turn.
    NewTurn,
}

/// Result of running one phase handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// Run the next phase.
    Continue,
    /// The encounter is over; the state is ready for `NextStep`.
    Finished(NextStep),
}

/// One phase of an encounter.
pub trait PhaseHandler: Send + Sync {
    /// The phase this handler implements.
    fn phase(&self) -> Phase;

    /// Run the phase against `state`.
    fn execute(&self, state: &mut GameState) -> EngineResult<PhaseOutcome>;
}

/// Send every ship left in the gate or in any allied-defender stack home.
///
/// Each ship goes to a colony its owner picks, or to the warp when the
/// owner has no colony left.
pub(crate) fn return_stranded_ships(state: &mut GameState) -> EngineResult<()> {
    let mut stranded: Vec<_> = state
        .gate()
        .ships()
        .iter()
        .map(|&s| (s, ShipLocation::HyperspaceGate))
        .collect();
    for planet in state.planets() {
        stranded.extend(
            planet
                .allied_defenders()
                .ships()
                .iter()
                .map(|&s| (s, ShipLocation::AlliedDefenders(planet.id()))),
        );
    }

    for (ship, from) in stranded {
        let to = match choose_colony(state, ship.owner)? {
            Some(planet) => ShipLocation::Planet(planet),
            None => ShipLocation::Warp,
        };
        state.move_ship_from(ship, from, to)?;
    }
    Ok(())
}

/// Ask `player` to pick one of their colonies, if they have any.
pub(crate) fn choose_colony(state: &GameState, player: PlayerId) -> EngineResult<Option<PlanetId>> {
    let colonies = state.colonies_of(player);
    if colonies.is_empty() {
        return Ok(None);
    }
    debug!(player = %player, candidates = colonies.len(), "choose colony");
    let planet = state.port(player).choose_colony(&colonies);
    ensure_offered(player, &planet, &colonies, "colony")?;
    Ok(Some(planet))
}

/// Ask `player` for one ship from `candidates`, re-asking on a decline.
pub(crate) fn choose_required_ship(
    state: &GameState,
    player: PlayerId,
    candidates: &[Ship],
) -> EngineResult<Ship> {
    let port = state.port(player);
    let max_retries = state.config().max_decision_retries;
    for attempt in 0..=max_retries {
        debug!(player = %player, candidates = candidates.len(), "choose ship");
        if let Some(ship) = port.choose_ship(candidates) {
            ensure_offered(player, &ship, candidates, "ship")?;
            return Ok(ship);
        }
        warn!(player = %player, attempt, "declined a required ship choice");
    }
    Err(EngineError::RetriesExhausted {
        player,
        attempts: max_retries + 1,
    })
}

/// End the turn: pass play to the left and reset for a fresh encounter.
pub(crate) fn finish_turn(state: &mut GameState) -> PhaseOutcome {
    state.advance_to_next_player();
    state.start_new_turn();
    info!(player = %state.active_player(), "turn passed");
    PhaseOutcome::Finished(NextStep::NewTurn)
}
