//! Typed events describing everything the engine does.
//!
//! The engine performs no I/O and no logging; instead every observable
//! state change appends a `GameEvent` to the engine's history. Callers
//! render, persist, or assert on the log as they see fit. Events are
//! facts, ids only: look entities up on the board for display data.

use serde::{Deserialize, Serialize};

use crate::cards::DeckKind;
use crate::core::{CardId, CellId, DiceRoll, PlayerId, PropertyId};

/// One observable engine action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A turn opened for `player`.
    TurnStarted { player: PlayerId, turn: u32 },
    /// The current player threw the dice.
    DiceRolled { player: PlayerId, roll: DiceRoll },
    /// Token moved along the track or by card.
    Moved { player: PlayerId, from: CellId, to: CellId },
    /// Salary credited for passing (or landing on) Go.
    SalaryCollected { player: PlayerId, amount: i64 },
    /// An unowned parcel paused the turn for a decision.
    PropertyOffered { player: PlayerId, property: PropertyId },
    /// The offer was accepted at list price.
    PropertyPurchased {
        player: PlayerId,
        property: PropertyId,
        price: i64,
    },
    /// The offer was declined.
    PurchaseDeclined { player: PlayerId, property: PropertyId },
    /// Rent settled with the parcel's owner. `amount` is what actually
    /// moved, which is less than the rent only when the payer went
    /// bankrupt on it.
    RentPaid {
        player: PlayerId,
        owner: PlayerId,
        property: PropertyId,
        amount: i64,
    },
    /// A tax cell charged the player.
    TaxPaid { player: PlayerId, amount: i64 },
    /// A card was drawn from a deck.
    CardDrawn {
        player: PlayerId,
        deck: DeckKind,
        card: CardId,
    },
    /// The bank paid the player (card payout).
    BankCredited { player: PlayerId, amount: i64 },
    /// The player paid the bank (card fee or per-improvement charge).
    BankCharged { player: PlayerId, amount: i64 },
    /// One player paid another outside of rent.
    PlayerCharged {
        from: PlayerId,
        to: PlayerId,
        amount: i64,
    },
    /// A Get Out of Jail Free card was banked.
    JailFreeCardGained { player: PlayerId },
    /// A banked jail-free card was spent.
    JailFreeCardUsed { player: PlayerId },
    /// Player jailed: token on the jail cell, no salary on the way.
    SentToJail { player: PlayerId },
    /// Player left jail (card, doubles, or fine).
    ReleasedFromJail { player: PlayerId },
    /// The third failed escape roll forced the fine.
    JailFinePaid { player: PlayerId, amount: i64 },
    /// A house went up; `houses` is the new count.
    HouseBuilt {
        player: PlayerId,
        property: PropertyId,
        houses: u8,
    },
    /// The hotel went up, replacing any houses.
    HotelBuilt { player: PlayerId, property: PropertyId },
    /// A house was sold back for half price; `houses` is the new count.
    HouseSold {
        player: PlayerId,
        property: PropertyId,
        houses: u8,
        refund: i64,
    },
    /// The hotel was sold back for half price.
    HotelSold {
        player: PlayerId,
        property: PropertyId,
        refund: i64,
    },
    /// Parcel mortgaged for `credit`.
    Mortgaged {
        player: PlayerId,
        property: PropertyId,
        credit: i64,
    },
    /// Mortgage lifted for `cost` (principal plus interest).
    Unmortgaged {
        player: PlayerId,
        property: PropertyId,
        cost: i64,
    },
    /// Ownership moved between players by the trade primitive.
    PropertyTransferred {
        from: PlayerId,
        to: PlayerId,
        property: PropertyId,
    },
    /// The Free Parking pot paid out under the house rule.
    PotCollected { player: PlayerId, amount: i64 },
    /// A double granted a re-roll.
    ExtraRollEarned { player: PlayerId },
    /// Player eliminated; their estate went to `creditor`, or to the bank
    /// if `None`.
    Bankrupted {
        player: PlayerId,
        creditor: Option<PlayerId>,
    },
    /// One solvent player remains.
    GameEnded { winner: PlayerId },
}
