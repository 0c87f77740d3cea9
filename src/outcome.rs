//! Encounter outcomes.
//!
//! Reveal assigns every participant an `EncounterOutcome` flag set and the
//! encounter a single `EncounterResult`. Resolution then applies the flags.
//! The fixed assignments live in `OutcomeTable`.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{PlanetId, PlayerId};

/// Flag set describing what happens to one player's engaged ships.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncounterOutcome(u8);

impl EncounterOutcome {
    /// Nothing happens.
    pub const NO_EFFECT: Self = Self(0);
    /// Every engaged ship goes to the warp.
    pub const ALL_SHIPS_TO_WARP: Self = Self(1);
    /// Every engaged ship lands on the target planet.
    pub const ESTABLISH_COLONY: Self = Self(1 << 1);
    /// Take cards from the principal opponent, one per engaged ship.
    pub const COLLECT_COMPENSATION: Self = Self(1 << 2);
    /// Split one reward per engaged ship between cards and ships.
    pub const DEFENDER_REWARDS: Self = Self(1 << 3);

    /// Whether every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flag is set.
    #[must_use]
    pub const fn is_no_effect(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for EncounterOutcome {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for EncounterOutcome {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for EncounterOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_no_effect() {
            return f.write_str("no effect");
        }
        let names = [
            (Self::ALL_SHIPS_TO_WARP, "ships to warp"),
            (Self::ESTABLISH_COLONY, "establish colony"),
            (Self::COLLECT_COMPENSATION, "collect compensation"),
            (Self::DEFENDER_REWARDS, "defender rewards"),
        ];
        let parts: Vec<_> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&parts.join(" + "))
    }
}

/// Whether the offense succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterResult {
    Success,
    Failure,
}

/// A committed encounter card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedEncounterCard {
    /// The card.
    pub card: Card,
    /// Whether it has been turned face up.
    pub visible: bool,
}

impl PlayedEncounterCard {
    /// A face-down commitment.
    #[must_use]
    pub const fn face_down(card: Card) -> Self {
        Self {
            card,
            visible: false,
        }
    }
}

/// Outcome assignment for one resolved case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTable {
    pub offense: EncounterOutcome,
    pub offensive_allies: EncounterOutcome,
    pub defense: EncounterOutcome,
    pub defensive_allies: EncounterOutcome,
    pub result: EncounterResult,
}

impl OutcomeTable {
    /// Offense attack beats defense attack.
    pub const ATTACK_WINS: Self = Self {
        offense: EncounterOutcome::ESTABLISH_COLONY,
        offensive_allies: EncounterOutcome::ESTABLISH_COLONY,
        defense: EncounterOutcome::ALL_SHIPS_TO_WARP,
        defensive_allies: EncounterOutcome::ALL_SHIPS_TO_WARP,
        result: EncounterResult::Success,
    };

    /// Offense attack loses to (or ties) defense attack.
    pub const ATTACK_LOSES: Self = Self {
        offense: EncounterOutcome::ALL_SHIPS_TO_WARP,
        offensive_allies: EncounterOutcome::ALL_SHIPS_TO_WARP,
        defense: EncounterOutcome::NO_EFFECT,
        defensive_allies: EncounterOutcome::DEFENDER_REWARDS,
        result: EncounterResult::Failure,
    };

    /// Offense attacks, defense negotiates.
    pub const ATTACK_AGAINST_NEGOTIATE: Self = Self {
        offense: EncounterOutcome::ESTABLISH_COLONY,
        offensive_allies: EncounterOutcome::ESTABLISH_COLONY,
        defense: EncounterOutcome(
            EncounterOutcome::ALL_SHIPS_TO_WARP.0 | EncounterOutcome::COLLECT_COMPENSATION.0,
        ),
        defensive_allies: EncounterOutcome::ALL_SHIPS_TO_WARP,
        result: EncounterResult::Success,
    };

    /// Offense negotiates, defense attacks.
    pub const NEGOTIATE_AGAINST_ATTACK: Self = Self {
        offense: EncounterOutcome(
            EncounterOutcome::ALL_SHIPS_TO_WARP.0 | EncounterOutcome::COLLECT_COMPENSATION.0,
        ),
        offensive_allies: EncounterOutcome::ALL_SHIPS_TO_WARP,
        defense: EncounterOutcome::NO_EFFECT,
        defensive_allies: EncounterOutcome::DEFENDER_REWARDS,
        result: EncounterResult::Failure,
    };

    /// Both sides played morph.
    pub const DUAL_MORPH: Self = Self {
        offense: EncounterOutcome::ALL_SHIPS_TO_WARP,
        offensive_allies: EncounterOutcome::ALL_SHIPS_TO_WARP,
        defense: EncounterOutcome::ALL_SHIPS_TO_WARP,
        defensive_allies: EncounterOutcome::ALL_SHIPS_TO_WARP,
        result: EncounterResult::Failure,
    };

    /// Both negotiated and both accepted the deal.
    pub const DEAL_MADE: Self = Self {
        offense: EncounterOutcome::NO_EFFECT,
        offensive_allies: EncounterOutcome::NO_EFFECT,
        defense: EncounterOutcome::NO_EFFECT,
        defensive_allies: EncounterOutcome::NO_EFFECT,
        result: EncounterResult::Success,
    };

    /// Both negotiated and at least one side refused the deal.
    pub const DEAL_FAILED: Self = Self {
        offense: EncounterOutcome::NO_EFFECT,
        offensive_allies: EncounterOutcome::NO_EFFECT,
        defense: EncounterOutcome::NO_EFFECT,
        defensive_allies: EncounterOutcome::NO_EFFECT,
        result: EncounterResult::Failure,
    };
}

/// Summary of one resolved encounter, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterRecord {
    pub turn: u32,
    pub encounter_number: u8,
    pub offense: PlayerId,
    pub defense: PlayerId,
    pub target_planet: PlanetId,
    pub offensive_allies: Vec<PlayerId>,
    pub defensive_allies: Vec<PlayerId>,
    pub result: EncounterResult,
}
