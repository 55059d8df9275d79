//! Core types: identifiers, player ledgers, RNG, configuration.
//!
//! Everything in this module is board-agnostic; the standard board and the
//! turn rules build on top of these pieces.

pub mod config;
pub mod ids;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use ids::{CardId, CellId, PlayerId, PropertyId};
pub use player::{Player, Token};
pub use rng::{DiceRoll, GameRng, GameRngState};
