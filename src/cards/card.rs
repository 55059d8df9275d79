//! Effect cards as pure data.
//!
//! A card is a display text plus one typed `CardEffect`. Cards never
//! execute themselves; `GameEngine::apply_card` is the single interpreter,
//! so adding a card means adding data, and changing how an effect behaves
//! happens in exactly one place.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, CellId};

/// What a drawn card does to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// The drawer pays the bank. Settled as a required payment: short
    /// cash triggers liquidation and, past that, bankruptcy.
    PayBank {
        /// Amount owed.
        amount: i64,
    },
    /// The bank pays the drawer.
    CollectFromBank {
        /// Amount received.
        amount: i64,
    },
    /// Every other player pays the drawer what they can, capped at their
    /// balance. This effect never bankrupts a payer.
    CollectFromEachPlayer {
        /// Amount asked of each player.
        amount: i64,
    },
    /// Move the drawer straight to a cell without resolving the landing.
    MoveToCell {
        /// Destination.
        cell: CellId,
        /// Whether wrapping past Go on the way pays the salary.
        collect_passing_go: bool,
    },
    /// The drawer banks a get-out-of-jail-free card for later.
    GainJailFreeCard,
    /// The drawer pays the bank per improvement they own.
    PayPerImprovement {
        /// Charge per house.
        per_house: i64,
        /// Charge per hotel.
        per_hotel: i64,
    },
    /// The drawer goes to jail: no movement, no salary.
    GoToJail,
}

/// One card in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    description: String,
    effect: CardEffect,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(id: CardId, description: impl Into<String>, effect: CardEffect) -> Self {
        Self {
            id,
            description: description.into(),
            effect,
        }
    }

    /// This card's id, unique within its deck.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The text shown to players.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The typed effect the interpreter runs.
    #[must_use]
    pub fn effect(&self) -> &CardEffect {
        &self.effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_accessors() {
        let card = Card::new(
            CardId::new(3),
            "Pay school fees of $150.",
            CardEffect::PayBank { amount: 150 },
        );

        assert_eq!(card.id(), CardId::new(3));
        assert_eq!(card.description(), "Pay school fees of $150.");
        assert_eq!(*card.effect(), CardEffect::PayBank { amount: 150 });
    }

    #[test]
    fn test_effect_serde_roundtrip() {
        let effects = vec![
            CardEffect::PayBank { amount: 50 },
            CardEffect::CollectFromBank { amount: 200 },
            CardEffect::CollectFromEachPlayer { amount: 10 },
            CardEffect::MoveToCell {
                cell: CellId::new(0),
                collect_passing_go: true,
            },
            CardEffect::GainJailFreeCard,
            CardEffect::PayPerImprovement {
                per_house: 40,
                per_hotel: 115,
            },
            CardEffect::GoToJail,
        ];

        let json = serde_json::to_string(&effects).unwrap();
        let deserialized: Vec<CardEffect> = serde_json::from_str(&json).unwrap();
        assert_eq!(effects, deserialized);
    }
}
