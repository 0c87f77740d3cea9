//! Cards, aliens and decks.
//!
//! ## Key Types
//!
//! - `Card`: closed union over every encounter-deck card
//! - `EncounterCardType`: the playable subset matched by Reveal
//! - `DestinyCard`: names the player whose system is targeted
//! - `Alien` / `AlienId`: flavor identity chosen at setup
//! - `Deck<T>`: ordered draw pile with a cursor
//! - `catalog`: fixed deck contents

pub mod alien;
pub mod card;
pub mod catalog;
pub mod deck;

pub use alien::{Alien, AlienId};
pub use card::{ArtifactKind, Card, DestinyCard, EncounterCardType};
pub use deck::{Deck, DeckKind};
