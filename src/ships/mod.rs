//! Ships and the containers that hold them.
//!
//! The warp, the hyperspace gate and planets share the `ShipContainer`
//! contract. Planets additionally carry a separate allied-defender stack.

mod container;
mod planet;

pub use container::{HyperspaceGate, Ship, ShipContainer, ShipLocation, ShipStack, Warp};
pub use planet::Planet;
