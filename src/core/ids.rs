//! Identifier types for board entities.
//!
//! Every addressable object (player, property, cell, card) has a small
//! copyable id. All cross-references between entities are id-based:
//! a `Property` records its owner as a `PlayerId`, never as a reference,
//! so relations cannot dangle or drift when state is cloned.
//!
//! ## ID Layout
//!
//! - `PlayerId`: 0-based seat index, assigned in join order.
//! - `CellId`: 0-based board position, `0..cell_count` (40 on the standard
//!   board, with Go at 0).
//! - `PropertyId`: 0-based index into the board's property table.
//! - `CardId`: 0-based index within one deck.

use serde::{Deserialize, Serialize};

/// Player identifier supporting up to 255 seats.
///
/// Seat indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use monopoly_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Board position identifier, `0..cell_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u8);

impl CellId {
    /// Create a new cell ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw position index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Position reached by moving `steps` cells forward, modulo the board.
    ///
    /// Returns the destination and whether the move wrapped past position 0
    /// (the wrap is what triggers the Go salary).
    ///
    /// ```
    /// use monopoly_engine::core::CellId;
    ///
    /// let (dest, wrapped) = CellId::new(38).advanced(5, 40);
    /// assert_eq!(dest, CellId::new(3));
    /// assert!(wrapped);
    ///
    /// let (dest, wrapped) = CellId::new(3).advanced(7, 40);
    /// assert_eq!(dest, CellId::new(10));
    /// assert!(!wrapped);
    /// ```
    #[must_use]
    pub fn advanced(self, steps: u8, cell_count: usize) -> (Self, bool) {
        let raw = self.index() + steps as usize;
        let dest = raw % cell_count;
        (Self(dest as u8), raw >= cell_count)
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// Property identifier, an index into the board's property table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropertyId(pub u16);

impl PropertyId {
    /// Create a new property ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the table index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Property({})", self.0)
    }
}

/// Card identifier within a single deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the deck index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));
    }

    #[test]
    fn test_cell_advanced_no_wrap() {
        let (dest, wrapped) = CellId::new(0).advanced(12, 40);
        assert_eq!(dest, CellId::new(12));
        assert!(!wrapped);
    }

    #[test]
    fn test_cell_advanced_wraps() {
        let (dest, wrapped) = CellId::new(35).advanced(9, 40);
        assert_eq!(dest, CellId::new(4));
        assert!(wrapped);
    }

    #[test]
    fn test_cell_advanced_lands_on_go() {
        // Landing exactly on Go still counts as a wrap.
        let (dest, wrapped) = CellId::new(34).advanced(6, 40);
        assert_eq!(dest, CellId::new(0));
        assert!(wrapped);
    }

    #[test]
    fn test_card_id_basics() {
        let card = CardId::new(7);

        assert_eq!(card.raw(), 7);
        assert_eq!(card.index(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CellId::new(12)), "Cell(12)");
        assert_eq!(format!("{}", PropertyId::new(3)), "Property(3)");
        assert_eq!(format!("{}", CardId::new(7)), "Card(7)");
    }

    #[test]
    fn test_serialization() {
        let id = PropertyId::new(21);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: PropertyId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
