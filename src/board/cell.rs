//! Board cell variants.
//!
//! A cell is one of the 40 positions a token can occupy. Cells are pure
//! data, immutable once the board is built; all behavior attached to
//! landing on one lives in the turn controller's dispatch.

use serde::{Deserialize, Serialize};

use crate::core::PropertyId;

/// How a tax cell computes its charge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxKind {
    /// A flat amount.
    Fixed(i64),
    /// A percentage of the landing player's cash balance, rounded down.
    Percentage(i64),
}

impl TaxKind {
    /// Charge owed by a player holding `balance` in cash.
    #[must_use]
    pub fn amount_due(self, balance: i64) -> i64 {
        match self {
            TaxKind::Fixed(amount) => amount,
            TaxKind::Percentage(percent) => balance * percent / 100,
        }
    }
}

/// One board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// The Go corner; passing or landing on it pays the salary.
    Go,
    /// A purchasable parcel, by id into the board's property table.
    Property(PropertyId),
    /// A tax charge paid to the bank.
    Tax(TaxKind),
    /// Draw from the chance deck.
    Chance,
    /// Draw from the community chest deck.
    CommunityChest,
    /// The jail corner; landing here is just visiting.
    Jail,
    /// Sends the landing player to jail.
    GoToJail,
    /// Free parking; a no-op unless the pot house rule is enabled.
    FreeParking,
}

impl Cell {
    /// The property id, if this cell is a parcel.
    #[must_use]
    pub fn property_id(&self) -> Option<PropertyId> {
        match self {
            Cell::Property(id) => Some(*id),
            _ => None,
        }
    }
}
