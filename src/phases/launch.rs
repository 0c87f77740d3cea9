//! Launch: aim the gate and stage the attack.

use tracing::{debug, info};

use super::{PhaseHandler, PhaseOutcome};
use crate::actions::MoveShipsAction;
use crate::core::{EngineError, EngineResult, GameState, Phase};
use crate::decision::ensure_offered;

/// Points the hyperspace gate at a planet and stages the offense's ships.
///
/// The offense picks a planet in the defense's home system. For an
/// encounter in the offense's own system the candidates are the home
/// planets hosting foreign colonies, and the offense then names which
/// foreign owner on the chosen planet becomes the defense.
#[derive(Clone, Copy, Debug, Default)]
pub struct LaunchPhase;

impl PhaseHandler for LaunchPhase {
    fn phase(&self) -> Phase {
        Phase::Launch
    }

    fn execute(&self, state: &mut GameState) -> EngineResult<PhaseOutcome> {
        let offense = state.active_player();
        let defense = state.defense_player()?;
        let port = state.port(offense).clone();

        let candidates = if defense == offense {
            state.home_planets_with_foreign_colonies(offense)
        } else {
            state.planets_of(defense)
        };
        if candidates.is_empty() {
            return Err(EngineError::OutOfPhase("target planet"));
        }

        debug!(player = %offense, candidates = candidates.len(), "choose target planet");
        let target = port.choose_target_planet(&candidates);
        ensure_offered(offense, &target, &candidates, "planet")?;
        state.set_target_planet(target)?;

        let planet = state.planet(target)?;
        if planet.is_owned_by(offense) {
            let opponents = planet.foreign_owners(offense);
            if !opponents.is_empty() {
                let chosen = port.choose_player_to_attack(&opponents);
                ensure_offered(offense, &chosen, &opponents, "player")?;
                state.set_defense_player(chosen);
            }
        }
        info!(offense = %offense, defense = %state.defense_player()?, planet = %target, "gate aimed");

        let bounds = state.config().launch_ships;
        let staged = MoveShipsAction::colonies_to_gate(offense, bounds).execute(state)?;
        debug!(player = %offense, ships = staged, "ships launched");
        Ok(PhaseOutcome::Continue)
    }
}
