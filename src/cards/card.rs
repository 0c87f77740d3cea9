//! The closed card union.
//!
//! Every card in the encounter deck is one variant of `Card`. Reveal
//! matches on `EncounterCardType` exhaustively, so a card that can be
//! played in an encounter always has a real, queryable type.

use serde::{Deserialize, Serialize};

use super::alien::AlienId;
use crate::core::PlayerId;

/// Artifact card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    CardZap,
    CosmicZap,
    EmotionControl,
    ForceField,
    IonicGas,
    MobiusTubes,
    Plague,
    Quash,
}

/// Type of a card that can be committed during Planning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterCardType {
    Attack,
    Negotiate,
    Morph,
}

/// A card from the encounter deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Attack card adding `value` to its side's total.
    Attack(u32),
    /// Negotiate card.
    Negotiate,
    /// Morph card: copies the opposing card.
    Morph,
    /// Reinforcement card. Not playable as an encounter card.
    Reinforcement(u32),
    /// Artifact card. Not playable as an encounter card.
    Artifact(ArtifactKind),
    /// Flare card naming an alien. Not playable as an encounter card.
    Flare(AlienId),
}

impl Card {
    /// The encounter type of this card, or `None` if it cannot be committed
    /// during Planning.
    #[must_use]
    pub fn encounter_type(self) -> Option<EncounterCardType> {
        match self {
            Card::Attack(_) => Some(EncounterCardType::Attack),
            Card::Negotiate => Some(EncounterCardType::Negotiate),
            Card::Morph => Some(EncounterCardType::Morph),
            Card::Reinforcement(_) | Card::Artifact(_) | Card::Flare(_) => None,
        }
    }

    /// Whether this card may be committed during Planning.
    #[must_use]
    pub fn is_encounter_card(self) -> bool {
        self.encounter_type().is_some()
    }

    /// Attack value, if this is an attack card.
    #[must_use]
    pub fn attack_value(self) -> Option<u32> {
        match self {
            Card::Attack(value) => Some(value),
            _ => None,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Attack(value) => write!(f, "Attack {:02}", value),
            Card::Negotiate => f.write_str("Negotiate"),
            Card::Morph => f.write_str("Morph"),
            Card::Reinforcement(modifier) => write!(f, "Reinforcement +{}", modifier),
            Card::Artifact(kind) => write!(f, "Artifact {:?}", kind),
            Card::Flare(alien) => write!(f, "Flare {}", alien.name()),
        }
    }
}

/// A destiny card. Each one names the player whose system is targeted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DestinyCard {
    /// The named player.
    pub player: PlayerId,
}

impl DestinyCard {
    /// Create a destiny card naming `player`.
    #[must_use]
    pub const fn naming(player: PlayerId) -> Self {
        Self { player }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encounter_types() {
        assert_eq!(Card::Attack(8).encounter_type(), Some(EncounterCardType::Attack));
        assert_eq!(Card::Negotiate.encounter_type(), Some(EncounterCardType::Negotiate));
        assert_eq!(Card::Morph.encounter_type(), Some(EncounterCardType::Morph));
        assert_eq!(Card::Reinforcement(3).encounter_type(), None);
        assert_eq!(Card::Artifact(ArtifactKind::Quash).encounter_type(), None);
        assert_eq!(Card::Flare(AlienId::new(4)).encounter_type(), None);
    }

    #[test]
    fn test_attack_value() {
        assert_eq!(Card::Attack(40).attack_value(), Some(40));
        assert_eq!(Card::Negotiate.attack_value(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::Attack(4).to_string(), "Attack 04");
        assert_eq!(Card::Reinforcement(5).to_string(), "Reinforcement +5");
        assert_eq!(Card::Flare(AlienId::new(0)).to_string(), "Flare Amoeba");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::Artifact(ArtifactKind::MobiusTubes);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
