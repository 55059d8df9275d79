//! Error taxonomy for every fallible engine operation.
//!
//! All errors are recoverable: a failed command leaves the game state
//! exactly as it was, and the caller may issue another command. The engine
//! never panics on bad input and never renders user-facing text; these
//! messages exist for logs and test output.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{CellId, PlayerId, PropertyId};

/// Why an engine operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    /// No player with the given id.
    #[error("no player with id {0}")]
    PlayerNotFound(PlayerId),

    /// No property with the given id.
    #[error("no property with id {0}")]
    PropertyNotFound(PropertyId),

    /// No cell with the given id.
    #[error("no cell with id {0}")]
    CellNotFound(CellId),

    /// A withdrawal exceeded the available balance.
    #[error("insufficient funds: {required} required, {available} available")]
    InsufficientFunds {
        /// Amount the operation needed.
        required: i64,
        /// Balance actually available.
        available: i64,
    },

    /// The property belongs to a different player.
    #[error("{property} is already owned by {owner}")]
    AlreadyOwned {
        /// The contested property.
        property: PropertyId,
        /// Its current owner.
        owner: PlayerId,
    },

    /// The property has already been bought this game.
    #[error("{0} has already been purchased")]
    AlreadyPurchased(PropertyId),

    /// Building requires owning the property's full color group.
    #[error("building on {0} requires owning its full color group")]
    MonopolyRequired(PropertyId),

    /// The property cannot hold any more houses or hotels.
    #[error("{0} cannot hold further improvements")]
    MaxImprovementsReached(PropertyId),

    /// The property's current state does not admit the operation
    /// (mortgaging twice, improving a mortgaged parcel, selling from an
    /// empty parcel, and similar conflicts).
    #[error("{0} is not in a state that allows this operation")]
    InvalidState(PropertyId),

    /// The command is not accepted in the current turn phase.
    #[error("command not accepted in the current turn phase")]
    InvalidTransition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::InsufficientFunds {
            required: 300,
            available: 100,
        };
        assert_eq!(err.to_string(), "insufficient funds: 300 required, 100 available");

        let err = GameError::AlreadyOwned {
            property: PropertyId::new(4),
            owner: PlayerId::new(1),
        };
        assert_eq!(err.to_string(), "Property(4) is already owned by Player 1");

        let err = GameError::PlayerNotFound(PlayerId::new(9));
        assert_eq!(err.to_string(), "no player with id Player 9");
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(
            GameError::AlreadyPurchased(PropertyId::new(2)),
            GameError::AlreadyPurchased(PropertyId::new(2)),
        );
        assert_ne!(
            GameError::MonopolyRequired(PropertyId::new(1)),
            GameError::MaxImprovementsReached(PropertyId::new(1)),
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let err = GameError::InvalidState(PropertyId::new(12));
        let json = serde_json::to_string(&err).unwrap();
        let deserialized: GameError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }
}
