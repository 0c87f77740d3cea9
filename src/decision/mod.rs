//! The boundary into player judgment.
//!
//! The engine never decides anything a player should decide. Every such
//! choice goes through `PlayerDecisionPort`, and every answer is checked
//! against the choices that were offered.

mod port;

pub use port::{AllianceSide, PlayerDecisionPort, RewardSplit, SharedPort};

use std::fmt::Debug;

use crate::core::{EngineError, EngineResult, PlayerId};

/// Fail with a protocol violation unless `choice` is one of `offered`.
pub(crate) fn ensure_offered<T: PartialEq + Debug>(
    player: PlayerId,
    choice: &T,
    offered: &[T],
    what: &str,
) -> EngineResult<()> {
    if offered.contains(choice) {
        Ok(())
    } else {
        Err(EngineError::protocol(
            player,
            format!("chose {what} {choice:?}, which was not offered"),
        ))
    }
}

/// Fail with a protocol violation unless every entry of `chosen` is one of
/// `offered`.
pub(crate) fn ensure_subset<T: PartialEq + Debug>(
    player: PlayerId,
    chosen: &[T],
    offered: &[T],
    what: &str,
) -> EngineResult<()> {
    chosen
        .iter()
        .try_for_each(|c| ensure_offered(player, c, offered, what))
}
