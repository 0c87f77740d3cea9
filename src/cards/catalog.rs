//! Static deck contents.
//!
//! The encounter deck is a fixed 72-card multiset plus the flare cards drawn
//! during setup. The flare deck holds one flare per alien.

use super::alien::AlienId;
use super::card::{ArtifactKind, Card, DestinyCard};
use crate::core::PlayerId;

/// Attack values in the encounter deck, one entry per card.
pub const ATTACK_VALUES: [u32; 39] = [
    0, 1, 4, 4, 4, 4, 5, 6, 6, 6, 6, 6, 6, 6, 7, 8, 8, 8, 8, 8, 8, 8, 9, 10, 10, 10, 10, 11, 12,
    12, 13, 14, 14, 15, 20, 20, 23, 30, 40,
];

/// Negotiate cards in the encounter deck.
pub const NEGOTIATE_COUNT: usize = 15;

/// Morph cards in the encounter deck.
pub const MORPH_COUNT: usize = 1;

/// Reinforcement modifiers, one entry per card.
pub const REINFORCEMENT_MODIFIERS: [u32; 6] = [2, 2, 3, 3, 3, 5];

/// Artifacts, one entry per card.
pub const ARTIFACTS: [ArtifactKind; 11] = [
    ArtifactKind::CardZap,
    ArtifactKind::CardZap,
    ArtifactKind::CosmicZap,
    ArtifactKind::CosmicZap,
    ArtifactKind::EmotionControl,
    ArtifactKind::ForceField,
    ArtifactKind::IonicGas,
    ArtifactKind::MobiusTubes,
    ArtifactKind::MobiusTubes,
    ArtifactKind::Plague,
    ArtifactKind::Quash,
];

/// Size of the fixed part of the encounter deck.
pub const BASE_ENCOUNTER_DECK_SIZE: usize = ATTACK_VALUES.len()
    + NEGOTIATE_COUNT
    + MORPH_COUNT
    + REINFORCEMENT_MODIFIERS.len()
    + ARTIFACTS.len();

/// The fixed 72-card encounter multiset followed by `flares`.
#[must_use]
pub fn encounter_cards(flares: &[Card]) -> Vec<Card> {
    let mut cards = Vec::with_capacity(BASE_ENCOUNTER_DECK_SIZE + flares.len());
    cards.extend(ATTACK_VALUES.iter().map(|&v| Card::Attack(v)));
    cards.extend(std::iter::repeat(Card::Negotiate).take(NEGOTIATE_COUNT));
    cards.extend(std::iter::repeat(Card::Morph).take(MORPH_COUNT));
    cards.extend(REINFORCEMENT_MODIFIERS.iter().map(|&m| Card::Reinforcement(m)));
    cards.extend(ARTIFACTS.iter().map(|&kind| Card::Artifact(kind)));
    cards.extend_from_slice(flares);
    cards
}

/// One flare card per alien in the catalog.
#[must_use]
pub fn flare_cards() -> Vec<Card> {
    AlienId::all().map(Card::Flare).collect()
}

/// `per_player` destiny cards naming each player, grouped by seat.
#[must_use]
pub fn destiny_cards(players: &[PlayerId], per_player: usize) -> Vec<DestinyCard> {
    players
        .iter()
        .flat_map(|&p| std::iter::repeat(DestinyCard::naming(p)).take(per_player))
        .collect()
}
