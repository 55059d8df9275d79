//! Chance and community chest cards.
//!
//! Cards are data, decks are shuffled piles, and all behavior lives in
//! the engine's interpreter.

pub mod card;
pub mod deck;

pub use card::{Card, CardEffect};
pub use deck::{Deck, DeckKind};
