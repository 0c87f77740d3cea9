//! Alliance: invitations and side choices.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::{PhaseHandler, PhaseOutcome};
use crate::actions::MoveShipsAction;
use crate::core::{EngineResult, GameState, Phase};
use crate::decision::{ensure_offered, ensure_subset, AllianceSide};

/// Collects allies for both sides.
///
/// The offense invites first, then the defense, both from the players who
/// are neither. Each invited player, clockwise from the left of the
/// offense, picks a side that invited them or neither. Offensive allies
/// stage ships in the gate; defensive allies lend ships to the target
/// planet's allied defenders.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlliancePhase;

impl PhaseHandler for AlliancePhase {
    fn phase(&self) -> Phase {
        Phase::Alliance
    }

    fn execute(&self, state: &mut GameState) -> EngineResult<PhaseOutcome> {
        let offense = state.active_player();
        let defense = state.defense_player()?;
        let target = state.target_planet()?;
        let pool = state.possible_allies()?;
        if pool.is_empty() {
            return Ok(PhaseOutcome::Continue);
        }

        let offense_invites = state.port(offense).invite_offensive_allies(&pool);
        ensure_subset(offense, &offense_invites, &pool, "ally")?;
        let defense_invites = state.port(defense).invite_defensive_allies(&pool);
        ensure_subset(defense, &defense_invites, &pool, "ally")?;
        let offense_invites: FxHashSet<_> = offense_invites.into_iter().collect();
        let defense_invites: FxHashSet<_> = defense_invites.into_iter().collect();
        debug!(
            offense_invites = offense_invites.len(),
            defense_invites = defense_invites.len(),
            "allies invited"
        );

        let bounds = state.config().ally_ships;
        for ally in pool {
            let mut offered = vec![AllianceSide::Neither];
            if offense_invites.contains(&ally) {
                offered.push(AllianceSide::Offense);
            }
            if defense_invites.contains(&ally) {
                offered.push(AllianceSide::Defense);
            }
            if offered.len() == 1 {
                continue;
            }

            let side = state.port(ally).choose_alliance_side(&offered);
            ensure_offered(ally, &side, &offered, "side")?;
            match side {
                AllianceSide::Neither => {}
                AllianceSide::Offense => {
                    MoveShipsAction::colonies_to_gate(ally, bounds).execute(state)?;
                    state.add_offensive_ally(ally);
                }
                AllianceSide::Defense => {
                    MoveShipsAction::colonies_to_allied_defenders(ally, bounds, target)
                        .execute(state)?;
                    state.add_defensive_ally(ally);
                }
            }
            info!(player = %ally, side = ?side, "alliance chosen");
        }
        Ok(PhaseOutcome::Continue)
    }
}
