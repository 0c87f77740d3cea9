//! Running one encounter.
//!
//! `Encounter` sequences the seven phase handlers for a single encounter
//! and reports what should happen next. It does not loop over turns; a
//! game driver calls `run` again for each encounter it wants played.
//!
//! ```no_run
//! use cosmic_rules::{Encounter, GameState, NextStep};
//!
//! fn play_turn(state: &mut GameState) -> cosmic_rules::EngineResult<()> {
//!     let encounter = Encounter::standard();
//!     while encounter.run(state)? == NextStep::NewEncounter {}
//!     Ok(())
//! }
//! ```

use tracing::info;

use crate::core::{EngineError, EngineResult, GameState};
use crate::phases::{
    AlliancePhase, DestinyPhase, LaunchPhase, PhaseHandler, PhaseOutcome, PlanningPhase,
    RegroupPhase, ResolutionPhase, RevealPhase,
};

pub use crate::phases::NextStep;

/// The phase handlers of one encounter, in play order.
pub struct Encounter {
    handlers: Vec<Box<dyn PhaseHandler>>,
}

impl Encounter {
    /// The standard seven phases.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            handlers: vec![
                Box::new(RegroupPhase),
                Box::new(DestinyPhase),
                Box::new(LaunchPhase),
                Box::new(AlliancePhase),
                Box::new(PlanningPhase),
                Box::new(RevealPhase),
                Box::new(ResolutionPhase),
            ],
        }
    }

    /// Replace the handler for one phase, keeping the order.
    #[must_use]
    pub fn with_handler(mut self, handler: Box<dyn PhaseHandler>) -> Self {
        if let Some(slot) = self.handlers.iter_mut().find(|h| h.phase() == handler.phase()) {
            *slot = handler;
        }
        self
    }

    /// Run every phase of one encounter.
    ///
    /// Returns once a handler finishes the encounter. The state is then
    /// already set up for the returned step.
    pub fn run(&self, state: &mut GameState) -> EngineResult<NextStep> {
        if !state.players_registered() {
            return Err(EngineError::PlayersNotRegistered);
        }
        for handler in &self.handlers {
            let phase = handler.phase();
            state.set_phase(phase);
            info!(phase = %phase, player = %state.active_player(), "phase started");
            if let PhaseOutcome::Finished(next) = handler.execute(state)? {
                return Ok(next);
            }
        }
        Err(EngineError::OutOfPhase("encounter result"))
    }
}

impl Default for Encounter {
    fn default() -> Self {
        Self::standard()
    }
}
