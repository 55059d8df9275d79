//! The turn machine and its command surface.
//!
//! `GameEngine` drives play; `TurnState` tracks whose turn it is and what
//! the engine is waiting for; `GameEvent` records everything that happens;
//! snapshots copy state out for callers.

pub mod actions;
pub mod event;
pub mod game;
pub mod snapshot;
pub mod turn;

pub use actions::PlayerAction;
pub use event::GameEvent;
pub use game::{GameBuilder, GameEngine};
pub use snapshot::{PlayerSnapshot, PropertySnapshot, TurnSnapshot};
pub use turn::{TurnPhase, TurnState};
