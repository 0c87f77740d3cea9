//! # cosmic-rules
//!
//! Rules engine for a multiplayer space-conquest board game: seven phases
//! per encounter, ships moving between planets, the warp and the
//! hyperspace gate, and a fixed outcome table deciding every encounter.
//!
//! ## Design Principles
//!
//! 1. **No strategy in the engine**: Every judgment call goes through a
//!    `PlayerDecisionPort`. The engine validates answers against what it
//!    offered and never picks for a player.
//!
//! 2. **One container per ship**: Ships only change container through
//!    `GameState::move_ship`, a remove-then-add pair.
//!
//! 3. **Explicit randomness**: No process-wide RNG. Decks shuffle with a
//!    `RandomSource` handed to them, so games replay from a seed.
//!
//! ## Modules
//!
//! - `core`: ids, players, rng, rules config, errors, `GameState`
//! - `cards`: the card union, aliens, fixed deck contents, `Deck`
//! - `ships`: ship containers and planets
//! - `decision`: the player decision port
//! - `actions`: bounded ship collection shared by several phases
//! - `phases`: the seven phase handlers
//! - `outcome`: encounter outcomes and the outcome table
//! - `encounter`: runs the phases of one encounter
//! - `setup`: builds a ready-to-play game

pub mod actions;
pub mod cards;
pub mod core;
pub mod decision;
pub mod encounter;
pub mod outcome;
pub mod phases;
pub mod setup;
pub mod ships;

// Re-export commonly used types
pub use crate::core::{
    EngineError, EngineResult, GameRng, GameRngState, GameState, Phase, PlanetId, PlayerId,
    PlayerMap, RandomSource, RulesConfig, ShipBounds, ShipId, StateSnapshot,
};

pub use crate::cards::{Alien, AlienId, ArtifactKind, Card, Deck, DeckKind, DestinyCard, EncounterCardType};

pub use crate::ships::{HyperspaceGate, Planet, Ship, ShipContainer, ShipLocation, Warp};

pub use crate::decision::{AllianceSide, PlayerDecisionPort, RewardSplit, SharedPort};

pub use crate::actions::MoveShipsAction;

pub use crate::outcome::{
    EncounterOutcome, EncounterRecord, EncounterResult, OutcomeTable, PlayedEncounterCard,
};

pub use crate::phases::{
    AlliancePhase, DestinyPhase, LaunchPhase, NextStep, PhaseHandler, PhaseOutcome,
    PlanningPhase, RegroupPhase, ResolutionPhase, RevealPhase,
};

pub use crate::encounter::Encounter;
pub use crate::setup::GameSetup;
