//! The track and everything standing on it.
//!
//! `Board` is the id-indexed registry of cells, parcels, and players;
//! `layout` provides the standard 40-cell game.

pub mod board;
pub mod cell;
pub mod layout;
pub mod property;

pub use board::Board;
pub use cell::{Cell, TaxKind};
pub use property::{ColorGroup, Property, PropertyGroup, MAX_HOTELS, MAX_HOUSES};
