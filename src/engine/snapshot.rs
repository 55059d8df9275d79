//! Copied-out views of engine state.
//!
//! Queries never hand out live references into the engine; they build
//! these plain-data snapshots instead, so callers can hold, serialize,
//! and diff them without borrowing the engine.

use serde::{Deserialize, Serialize};

use crate::board::{Property, PropertyGroup};
use crate::core::{CellId, DiceRoll, Player, PlayerId, PropertyId, Token};

use super::TurnPhase;

/// A player's public ledger at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub token: Token,
    pub cash: i64,
    pub position: CellId,
    pub in_jail: bool,
    pub jail_turns: u8,
    pub doubles_streak: u8,
    pub jail_free_cards: u8,
    /// Owned parcels in ascending id order.
    pub properties: Vec<PropertyId>,
    pub bankrupt: bool,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_owned(),
            token: player.token(),
            cash: player.cash(),
            position: player.position(),
            in_jail: player.is_in_jail(),
            jail_turns: player.jail_turns(),
            doubles_streak: player.doubles_streak(),
            jail_free_cards: player.jail_free_cards(),
            properties: player.properties_sorted(),
            bankrupt: player.is_bankrupt(),
        }
    }
}

/// A parcel's ledger state at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySnapshot {
    pub id: PropertyId,
    pub name: String,
    pub price: i64,
    pub group: PropertyGroup,
    pub owner: Option<PlayerId>,
    pub purchased: bool,
    pub mortgaged: bool,
    pub houses: u8,
    pub hotels: u8,
    pub mortgage_value: i64,
    pub unmortgage_cost: i64,
}

impl From<&Property> for PropertySnapshot {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id(),
            name: property.name().to_owned(),
            price: property.price(),
            group: property.group(),
            owner: property.owner(),
            purchased: property.is_purchased(),
            mortgaged: property.is_mortgaged(),
            houses: property.houses(),
            hotels: property.hotels(),
            mortgage_value: property.mortgage_value(),
            unmortgage_cost: property.unmortgage_cost(),
        }
    }
}

/// The turn machine's externally visible state. Returned by every
/// successful command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub current_player: PlayerId,
    pub phase: TurnPhase,
    pub last_roll: Option<DiceRoll>,
    pub turn_number: u32,
    /// Solvent players in seating order.
    pub order: Vec<PlayerId>,
    /// Free Parking pot balance (always 0 without the house rule).
    pub pot: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ColorGroup;

    #[test]
    fn test_player_snapshot_copies_ledger() {
        let mut player = Player::new(PlayerId::new(2), "Cora", Token::TopHat, 800, CellId::new(5));
        player.add_jail_free_card();

        let snapshot = PlayerSnapshot::from(&player);

        assert_eq!(snapshot.id, PlayerId::new(2));
        assert_eq!(snapshot.name, "Cora");
        assert_eq!(snapshot.cash, 800);
        assert_eq!(snapshot.position, CellId::new(5));
        assert_eq!(snapshot.jail_free_cards, 1);
        assert!(!snapshot.bankrupt);
    }

    #[test]
    fn test_property_snapshot_carries_mortgage_figures() {
        let property = Property::new(
            PropertyId::new(4),
            "Phoenix Drive",
            130,
            PropertyGroup::Color(ColorGroup::LightBlue),
        );

        let snapshot = PropertySnapshot::from(&property);

        assert_eq!(snapshot.mortgage_value, 65);
        assert_eq!(snapshot.unmortgage_cost, 71);
        assert_eq!(snapshot.owner, None);
    }

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let snapshot = TurnSnapshot {
            current_player: PlayerId::new(1),
            phase: TurnPhase::AwaitingDecision {
                property: PropertyId::new(9),
            },
            last_roll: Some(DiceRoll::of(4, 4)),
            turn_number: 17,
            order: vec![PlayerId::new(0), PlayerId::new(1)],
            pot: 250,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: TurnSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
