//! Core engine types: identities, players, randomness, rules, errors, state.
//!
//! Everything here is independent of phase logic. Phase handlers in
//! `crate::phases` read and mutate a `GameState` through the operations
//! defined in this module.

pub mod config;
pub mod error;
pub mod ids;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use config::{Phase, RulesConfig, ShipBounds};
pub use error::{EngineError, EngineResult};
pub use ids::{PlanetId, ShipId};
pub use player::{PlayerId, PlayerMap};
pub use rng::{pick_one, GameRng, GameRngState, RandomSource};
pub use snapshot::{PlanetSnapshot, PlayedView, StateSnapshot};
pub use state::GameState;
