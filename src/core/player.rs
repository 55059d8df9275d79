//! Player ledgers: cash, position, jail state, and owned properties.
//!
//! ## Invariants
//!
//! - Cash decreases only through `withdraw`, which refuses overdrafts, so a
//!   failed payment can never leave a half-applied transaction.
//! - The owned-property set is maintained exclusively by the board's
//!   purchase/transfer/release operations (the mutators here are
//!   crate-private); it always mirrors the `owner` field on the properties
//!   themselves.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

use super::ids::{CellId, PlayerId, PropertyId};

/// Playing piece assigned to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// The boot.
    Boot,
    /// The dog.
    Dog,
    /// The car.
    Car,
    /// The iron.
    Iron,
    /// The top hat.
    TopHat,
    /// The thimble.
    Thimble,
    /// The wheelbarrow.
    Wheelbarrow,
    /// The battleship.
    Battleship,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Token::Boot => "Boot",
            Token::Dog => "Dog",
            Token::Car => "Car",
            Token::Iron => "Iron",
            Token::TopHat => "Top Hat",
            Token::Thimble => "Thimble",
            Token::Wheelbarrow => "Wheelbarrow",
            Token::Battleship => "Battleship",
        };
        write!(f, "{name}")
    }
}

/// One participant's mutable ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    token: Token,
    cash: i64,
    position: CellId,
    in_jail: bool,
    jail_turns: u8,
    doubles_streak: u8,
    jail_free_cards: u8,
    properties: ImHashSet<PropertyId>,
    bankrupt: bool,
}

impl Player {
    /// Create a player at the given start cell with the given bankroll.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, token: Token, cash: i64, start: CellId) -> Self {
        assert!(cash >= 0, "Starting cash must be non-negative");
        Self {
            id,
            name: name.into(),
            token,
            cash,
            position: start,
            in_jail: false,
            jail_turns: 0,
            doubles_streak: 0,
            jail_free_cards: 0,
            properties: ImHashSet::new(),
            bankrupt: false,
        }
    }

    /// This player's id.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Playing piece.
    #[must_use]
    pub fn token(&self) -> Token {
        self.token
    }

    /// Current cash balance.
    #[must_use]
    pub fn cash(&self) -> i64 {
        self.cash
    }

    /// Current board position.
    #[must_use]
    pub fn position(&self) -> CellId {
        self.position
    }

    /// Whether the player is in jail (not just visiting).
    #[must_use]
    pub fn is_in_jail(&self) -> bool {
        self.in_jail
    }

    /// Failed escape rolls since jailing.
    #[must_use]
    pub fn jail_turns(&self) -> u8 {
        self.jail_turns
    }

    /// Consecutive doubles rolled this sequence of turns, 0..=3.
    #[must_use]
    pub fn doubles_streak(&self) -> u8 {
        self.doubles_streak
    }

    /// Get Out of Jail Free cards held.
    #[must_use]
    pub fn jail_free_cards(&self) -> u8 {
        self.jail_free_cards
    }

    /// Whether the player has been eliminated.
    #[must_use]
    pub fn is_bankrupt(&self) -> bool {
        self.bankrupt
    }

    /// Ids of owned properties, unordered.
    #[must_use]
    pub fn properties(&self) -> &ImHashSet<PropertyId> {
        &self.properties
    }

    /// Ids of owned properties in ascending order.
    ///
    /// Liquidation and snapshots iterate this so results never depend on
    /// hash ordering.
    #[must_use]
    pub fn properties_sorted(&self) -> Vec<PropertyId> {
        let mut ids: Vec<_> = self.properties.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Whether the player owns the given property.
    #[must_use]
    pub fn owns(&self, property: PropertyId) -> bool {
        self.properties.contains(&property)
    }

    // === Cash ===

    /// Remove `amount` from the balance.
    ///
    /// Fails with `InsufficientFunds` without mutating anything if the
    /// balance cannot cover it. This is the only path by which a balance
    /// decreases.
    pub fn withdraw(&mut self, amount: i64) -> Result<(), GameError> {
        assert!(amount >= 0, "Withdrawal amount must be non-negative");
        if amount > self.cash {
            return Err(GameError::InsufficientFunds {
                required: amount,
                available: self.cash,
            });
        }
        self.cash -= amount;
        Ok(())
    }

    /// Add `amount` to the balance.
    pub fn deposit(&mut self, amount: i64) {
        assert!(amount >= 0, "Deposit amount must be non-negative");
        self.cash += amount;
    }

    // === Movement and jail ===

    /// Record a roll for the doubles rule.
    ///
    /// Returns `true` exactly when the third consecutive double was just
    /// reached; the turn controller reacts by jailing.
    pub fn record_doubles(&mut self, is_double: bool) -> bool {
        if is_double {
            self.doubles_streak += 1;
            self.doubles_streak >= 3
        } else {
            self.doubles_streak = 0;
            false
        }
    }

    /// Jail the player: flag set, doubles streak cleared, moved to the jail
    /// cell.
    pub fn send_to_jail(&mut self, jail_cell: CellId) {
        self.in_jail = true;
        self.jail_turns = 0;
        self.doubles_streak = 0;
        self.position = jail_cell;
    }

    /// Release from jail without moving.
    pub fn leave_jail(&mut self) {
        self.in_jail = false;
        self.jail_turns = 0;
    }

    /// Record a failed escape roll; returns the new count.
    pub fn record_jail_turn(&mut self) -> u8 {
        self.jail_turns += 1;
        self.jail_turns
    }

    /// Gain a Get Out of Jail Free card.
    pub fn add_jail_free_card(&mut self) {
        self.jail_free_cards += 1;
    }

    /// Consume a Get Out of Jail Free card if one is held.
    ///
    /// Returns whether a card was spent.
    pub fn use_jail_free_card(&mut self) -> bool {
        if self.jail_free_cards > 0 {
            self.jail_free_cards -= 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn set_position(&mut self, cell: CellId) {
        self.position = cell;
    }

    // === Ownership bookkeeping (board-internal) ===

    pub(crate) fn add_property(&mut self, property: PropertyId) {
        self.properties.insert(property);
    }

    pub(crate) fn remove_property(&mut self, property: PropertyId) {
        self.properties.remove(&property);
    }

    /// Drop every owned property id, returning them in ascending order.
    pub(crate) fn take_properties(&mut self) -> Vec<PropertyId> {
        let ids = self.properties_sorted();
        self.properties = ImHashSet::new();
        ids
    }

    pub(crate) fn mark_bankrupt(&mut self) {
        self.bankrupt = true;
        self.doubles_streak = 0;
        self.in_jail = false;
        self.jail_turns = 0;
    }
}
