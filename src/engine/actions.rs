//! Descriptors for the commands a player could issue right now.
//!
//! `GameEngine::legal_actions` enumerates these so callers (UIs, bots)
//! can offer exactly what would succeed instead of probing commands for
//! errors.

use serde::{Deserialize, Serialize};

use crate::core::PropertyId;

/// One currently-legal command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Roll the dice (current player, awaiting a roll).
    RollDice,
    /// Accept the pending purchase offer at `price`.
    BuyProperty { property: PropertyId, price: i64 },
    /// Decline the pending purchase offer.
    DeclinePurchase { property: PropertyId },
    /// Build one house on an owned monopoly parcel.
    BuildHouse { property: PropertyId },
    /// Replace houses with the hotel.
    BuildHotel { property: PropertyId },
    /// Sell one house back for half price.
    SellHouse { property: PropertyId },
    /// Sell the hotel back for half price.
    SellHotel { property: PropertyId },
    /// Mortgage an unimproved parcel.
    Mortgage { property: PropertyId },
    /// Pay off a mortgage with interest.
    Unmortgage { property: PropertyId },
    /// Leave the game, assets to the bank.
    DeclareBankruptcy,
}
