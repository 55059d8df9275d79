//! # monopoly-engine
//!
//! A deterministic rules engine for the classic property-trading board
//! game.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, no input loop, no timing. The engine is
//!    a state machine driven entirely by commands; callers decide how (or
//!    whether) to show it.
//!
//! 2. **Deterministic**: One seed fixes the whole game. Dice, deck
//!    shuffles, and card draws all derive from a counter-based RNG, so a
//!    seed plus a command sequence replays identically.
//!
//! 3. **Commands Fail Closed**: An invalid or unaffordable command
//!    returns an error and leaves the state untouched. Forced payments
//!    (rent, taxes, fines) are the only path that liquidates or
//!    bankrupts.
//!
//! ## Architecture
//!
//! - **Id-Indexed State**: Players, parcels, and cells live in flat
//!   tables addressed by newtype ids; events and snapshots carry ids,
//!   never references.
//!
//! - **Single Interpreter**: Every card is data (`CardEffect`); one match
//!   in the turn controller applies them all.
//!
//! ## Modules
//!
//! - `core`: Entity ids, player ledgers, dice and RNG, configuration
//! - `board`: Cells, parcels, ownership, rent, the standard 40-cell layout
//! - `cards`: Chance and Community Chest decks and their effects
//! - `engine`: The turn state machine, events, snapshots, legal actions
//! - `error`: The error taxonomy shared by every fallible operation

pub mod core;
pub mod board;
pub mod cards;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CardId, CellId, PlayerId, PropertyId,
    DiceRoll, GameRng, GameRngState,
    GameConfig, Player, Token,
};

pub use crate::board::{Board, Cell, ColorGroup, Property, PropertyGroup, TaxKind};

pub use crate::cards::{Card, CardEffect, Deck, DeckKind};

pub use crate::engine::{
    GameBuilder, GameEngine, GameEvent,
    PlayerAction, PlayerSnapshot, PropertySnapshot,
    TurnPhase, TurnSnapshot, TurnState,
};

pub use crate::error::GameError;
