//! Multi-step player actions shared by several phases.

mod move_ships;

pub use move_ships::{MoveShipsAction, ShipSink, ShipSource};
