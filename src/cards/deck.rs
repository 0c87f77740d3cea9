//! Ordered draw piles with a cursor.
//!
//! A `Deck` never forgets what it dealt. Cards before the cursor have been
//! drawn; cards at and after the cursor are still to come. Shuffling only
//! permutes the undrawn range, so a shuffle can never rewrite history.
//!
//! ```
//! use cosmic_rules::cards::{Deck, DeckKind};
//! use cosmic_rules::core::GameRng;
//!
//! let mut deck = Deck::new(DeckKind::Encounter, vec![1, 2, 3]);
//! assert_eq!(deck.draw().unwrap(), 1);
//!
//! deck.shuffle(&mut GameRng::new(9));
//! assert_eq!(deck.drawn(), &[1]);
//! assert_eq!(deck.remaining(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, EngineResult};
use crate::core::rng::RandomSource;

/// Which deck a draw came from. Used in error reporting and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    Encounter,
    Destiny,
    Flare,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DeckKind::Encounter => "encounter",
            DeckKind::Destiny => "destiny",
            DeckKind::Flare => "flare",
        };
        f.write_str(name)
    }
}

/// Ordered draw pile with a cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck<T> {
    kind: DeckKind,
    cards: Vec<T>,
    cursor: usize,
}

impl<T: Clone> Deck<T> {
    /// Create a deck whose first draw is `cards[0]`.
    #[must_use]
    pub fn new(kind: DeckKind, cards: Vec<T>) -> Self {
        Self {
            kind,
            cards,
            cursor: 0,
        }
    }

    /// Create an empty deck.
    #[must_use]
    pub fn empty(kind: DeckKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Which deck this is.
    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Draw the card at the cursor and advance.
    ///
    /// Fails with `ExhaustedResource` once every card has been drawn.
    pub fn draw(&mut self) -> EngineResult<T> {
        let card = self
            .cards
            .get(self.cursor)
            .cloned()
            .ok_or(EngineError::ExhaustedResource(self.kind))?;
        self.cursor += 1;
        Ok(card)
    }

    /// Fisher-Yates shuffle of the undrawn range `[cursor, len)`.
    pub fn shuffle(&mut self, rng: &mut dyn RandomSource) {
        let len = self.cards.len();
        for i in self.cursor..len {
            let j = rng.next_range(i, len);
            self.cards.swap(i, j);
        }
    }

    /// Insert a card at the cursor so that it is the next draw.
    pub fn put_card_on_top(&mut self, card: T) {
        self.cards.insert(self.cursor, card);
    }

    /// Append cards to the bottom of the undrawn range.
    ///
    /// Used to rebuild an exhausted deck from a discard pile; callers
    /// shuffle afterwards.
    pub fn replenish(&mut self, cards: impl IntoIterator<Item = T>) {
        self.cards.extend(cards);
    }

    /// Cards already drawn, in draw order.
    #[must_use]
    pub fn drawn(&self) -> &[T] {
        &self.cards[..self.cursor]
    }

    /// Cards still to be drawn, next draw first.
    #[must_use]
    pub fn undrawn(&self) -> &[T] {
        &self.cards[self.cursor..]
    }

    /// Number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Total cards ever placed in this deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether every card has been drawn.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.cards.len()
    }
}
