//! Shuffled draw piles.
//!
//! A deck shuffles once at construction and never structurally changes
//! afterwards: `draw` picks a uniformly random card and leaves it in
//! place, so deck size is an invariant for the whole game. Jail-free
//! cards are tracked on the player's ledger, not removed from the pile.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::Card;

/// Which pile a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    /// Drawn on community chest cells.
    CommunityChest,
    /// Drawn on chance cells.
    Chance,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::CommunityChest => write!(f, "Community Chest"),
            DeckKind::Chance => write!(f, "Chance"),
        }
    }
}

/// A pile of effect cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    kind: DeckKind,
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck, shuffling the cards once with the given RNG.
    #[must_use]
    pub fn new(kind: DeckKind, mut cards: Vec<Card>, rng: &mut GameRng) -> Self {
        assert!(!cards.is_empty(), "Deck must have at least 1 card");
        rng.shuffle(&mut cards);
        Self { kind, cards }
    }

    /// Which pile this is.
    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Number of cards. Constant across draws.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Never true for a constructed deck; present for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in shuffled order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Draw a uniformly random card. The card stays in the deck.
    pub fn draw(&self, rng: &mut GameRng) -> &Card {
        let index = rng.gen_range_usize(0..self.cards.len());
        &self.cards[index]
    }
}
