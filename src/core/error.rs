//! Engine error taxonomy.

use thiserror::Error;

use super::ids::PlanetId;
use super::player::PlayerId;
use crate::cards::DeckKind;

/// Errors surfaced by phase handlers and game-state operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A decision port answered with something outside the offered choices,
    /// or the engine was asked to remove a piece from a container that does
    /// not hold it.
    #[error("{player} broke the decision protocol: {detail}")]
    ProtocolViolation { player: PlayerId, detail: String },

    /// A deck ran out of cards.
    #[error("the {0} deck is exhausted")]
    ExhaustedResource(DeckKind),

    /// A player never produced a reward split that sums to the budget.
    #[error("{player} gave no valid reward split in {attempts} attempts")]
    InvalidRewardSplit { player: PlayerId, attempts: usize },

    /// A player kept declining a choice they were required to make.
    #[error("{player} declined a required choice {attempts} times")]
    RetriesExhausted { player: PlayerId, attempts: usize },

    /// Players may only be registered once per game.
    #[error("players are already registered")]
    PlayersAlreadyRegistered,

    /// An operation needed the player list before it was registered.
    #[error("players have not been registered")]
    PlayersNotRegistered,

    /// Encounter context was read before the phase that sets it.
    #[error("{0} has not been chosen for this encounter")]
    OutOfPhase(&'static str),

    /// A planet id that the game does not know.
    #[error("unknown {0}")]
    UnknownPlanet(PlanetId),
}

impl EngineError {
    /// Build a protocol violation for `player`.
    pub fn protocol(player: PlayerId, detail: impl Into<String>) -> Self {
        EngineError::ProtocolViolation {
            player,
            detail: detail.into(),
        }
    }
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
