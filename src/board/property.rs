//! Purchasable parcels: ownership, improvements, mortgage, and rent policy.
//!
//! A `Property` is pure ledger state plus the rent computation. The checks
//! that need board context (monopoly detection, category counts) receive a
//! `&Board`; everything else is self-contained. Ownership writes are
//! crate-private so only the board's transactional operations can touch
//! them.
//!
//! ## Rent policy
//!
//! In priority order: mortgaged parcels earn nothing; a hotel or houses use
//! the rent schedule; utilities charge a dice multiple (x4 with one utility
//! owned, x10 with both); railroads charge 25 doubled per additional
//! railroad owned; an undeveloped parcel in a completed color group earns
//! double base rent; otherwise base rent.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PropertyId};

use super::Board;

/// Most houses a single parcel can hold.
pub const MAX_HOUSES: u8 = 4;

/// Most hotels a single parcel can hold.
pub const MAX_HOTELS: u8 = 1;

/// Rent a railroad charges when its owner holds exactly one railroad.
const RAILROAD_BASE_RENT: i64 = 25;

/// The eight color groups on the standard board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorGroup {
    /// Two parcels beside Go.
    Brown,
    /// Three parcels on the first side.
    LightBlue,
    /// First pink stretch after jail.
    Pink,
    /// Second side orange stretch.
    Orange,
    /// Third side red stretch.
    Red,
    /// Third side yellow stretch.
    Yellow,
    /// Fourth side green stretch.
    Green,
    /// The two premium parcels before Go.
    Blue,
}

impl ColorGroup {
    /// All groups, in board order.
    pub const ALL: [ColorGroup; 8] = [
        ColorGroup::Brown,
        ColorGroup::LightBlue,
        ColorGroup::Pink,
        ColorGroup::Orange,
        ColorGroup::Red,
        ColorGroup::Yellow,
        ColorGroup::Green,
        ColorGroup::Blue,
    ];
}

impl std::fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColorGroup::Brown => "Brown",
            ColorGroup::LightBlue => "Light Blue",
            ColorGroup::Pink => "Pink",
            ColorGroup::Orange => "Orange",
            ColorGroup::Red => "Red",
            ColorGroup::Yellow => "Yellow",
            ColorGroup::Green => "Green",
            ColorGroup::Blue => "Blue",
        };
        write!(f, "{name}")
    }
}

/// Rent category of a parcel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyGroup {
    /// A colored street; improvable once the group is complete.
    Color(ColorGroup),
    /// Rent scales with railroads owned; never improvable.
    Railroad,
    /// Rent scales with the dice total; never improvable.
    Utility,
}

impl PropertyGroup {
    /// The color group, if this is a colored street.
    #[must_use]
    pub fn color(self) -> Option<ColorGroup> {
        match self {
            PropertyGroup::Color(group) => Some(group),
            _ => None,
        }
    }
}

/// One purchasable parcel.
///
/// Constructed via `new` plus builder setters:
///
/// ```
/// use monopoly_engine::board::{ColorGroup, Property, PropertyGroup};
/// use monopoly_engine::core::PropertyId;
///
/// let parcel = Property::new(
///     PropertyId::new(0),
///     "San Diego Drive",
///     60,
///     PropertyGroup::Color(ColorGroup::Brown),
/// )
/// .with_rent_schedule([6, 30, 90, 180, 240, 330])
/// .with_improvement_prices(50, 50);
///
/// assert_eq!(parcel.base_rent(), 6);
/// assert_eq!(parcel.mortgage_value(), 30);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    id: PropertyId,
    name: String,
    price: i64,
    group: PropertyGroup,
    /// Rent by improvement level: 0..=4 houses, then hotel.
    rent_schedule: [i64; 6],
    house_price: i64,
    hotel_price: i64,
    owner: Option<PlayerId>,
    purchased: bool,
    mortgaged: bool,
    houses: u8,
    hotels: u8,
}

impl Property {
    /// Create an unowned, unimproved parcel.
    #[must_use]
    pub fn new(id: PropertyId, name: impl Into<String>, price: i64, group: PropertyGroup) -> Self {
        assert!(price >= 0, "Price must be non-negative");
        Self {
            id,
            name: name.into(),
            price,
            group,
            rent_schedule: [0; 6],
            house_price: 0,
            hotel_price: 0,
            owner: None,
            purchased: false,
            mortgaged: false,
            houses: 0,
            hotels: 0,
        }
    }

    /// Set the full rent schedule (0..=4 houses, hotel).
    #[must_use]
    pub fn with_rent_schedule(mut self, schedule: [i64; 6]) -> Self {
        self.rent_schedule = schedule;
        self
    }

    /// Set house and hotel build prices.
    #[must_use]
    pub fn with_improvement_prices(mut self, house: i64, hotel: i64) -> Self {
        self.house_price = house;
        self.hotel_price = hotel;
        self
    }

    // === Accessors ===

    /// This parcel's id.
    #[must_use]
    pub fn id(&self) -> PropertyId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Purchase price.
    #[must_use]
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Rent category.
    #[must_use]
    pub fn group(&self) -> PropertyGroup {
        self.group
    }

    /// Full rent schedule.
    #[must_use]
    pub fn rent_schedule(&self) -> &[i64; 6] {
        &self.rent_schedule
    }

    /// Rent with no improvements and no monopoly.
    #[must_use]
    pub fn base_rent(&self) -> i64 {
        self.rent_schedule[0]
    }

    /// Cost to build one house here.
    #[must_use]
    pub fn house_price(&self) -> i64 {
        self.house_price
    }

    /// Cost to build the hotel here.
    #[must_use]
    pub fn hotel_price(&self) -> i64 {
        self.hotel_price
    }

    /// Current owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Whether the parcel has been bought this game.
    #[must_use]
    pub fn is_purchased(&self) -> bool {
        self.purchased
    }

    /// Whether the parcel is mortgaged.
    #[must_use]
    pub fn is_mortgaged(&self) -> bool {
        self.mortgaged
    }

    /// Houses built, 0..=4.
    #[must_use]
    pub fn houses(&self) -> u8 {
        self.houses
    }

    /// Hotels built, 0..=1.
    #[must_use]
    pub fn hotels(&self) -> u8 {
        self.hotels
    }

    /// Cash credited when mortgaging: half the price.
    #[must_use]
    pub fn mortgage_value(&self) -> i64 {
        self.price / 2
    }

    /// Cash debited when unmortgaging: the mortgage value plus 10% interest.
    #[must_use]
    pub fn unmortgage_cost(&self) -> i64 {
        let half = self.mortgage_value();
        half + half / 10
    }

    /// Total cash still extractable from this parcel by selling back
    /// improvements and mortgaging. Used for the bankruptcy threshold.
    #[must_use]
    pub fn liquidation_value(&self) -> i64 {
        let improvements =
            i64::from(self.houses) * (self.house_price / 2) + i64::from(self.hotels) * (self.hotel_price / 2);
        let mortgage = if self.mortgaged { 0 } else { self.mortgage_value() };
        improvements + mortgage
    }

    // === Rent ===

    /// Rent owed by a player landing here.
    ///
    /// `dice_total` is the roll that brought the player here; utilities are
    /// the only category that uses it, but it is a per-turn fact owned by
    /// the turn controller, so it is passed in rather than recomputed.
    /// Returns 0 for unowned or mortgaged parcels.
    #[must_use]
    pub fn rent_due(&self, board: &Board, dice_total: u8) -> i64 {
        let owner = match self.owner {
            Some(owner) => owner,
            None => return 0,
        };
        if self.mortgaged {
            return 0;
        }
        if self.hotels > 0 {
            return self.rent_schedule[5];
        }
        if self.houses > 0 {
            return self.rent_schedule[self.houses as usize];
        }
        match self.group {
            PropertyGroup::Utility => {
                let multiplier = if board.utility_count(owner) == 1 { 4 } else { 10 };
                i64::from(dice_total) * multiplier
            }
            PropertyGroup::Railroad => {
                let owned = board.railroad_count(owner).max(1);
                RAILROAD_BASE_RENT << (owned - 1)
            }
            PropertyGroup::Color(group) => {
                if board.has_monopoly(owner, group) {
                    self.base_rent() * 2
                } else {
                    self.base_rent()
                }
            }
        }
    }

    // === State transitions (driven by Board/engine) ===

    pub(crate) fn set_owner(&mut self, owner: Option<PlayerId>) {
        self.owner = owner;
    }

    pub(crate) fn mark_purchased(&mut self) {
        self.purchased = true;
    }

    /// Add one house. The monopoly gate is checked by the caller; this
    /// enforces the parcel-local rules.
    pub(crate) fn add_house(&mut self) -> Result<(), crate::error::GameError> {
        if self.mortgaged {
            return Err(crate::error::GameError::InvalidState(self.id));
        }
        if self.hotels > 0 || self.houses >= MAX_HOUSES {
            return Err(crate::error::GameError::MaxImprovementsReached(self.id));
        }
        self.houses += 1;
        Ok(())
    }

    /// Add the hotel, clearing any houses.
    pub(crate) fn add_hotel(&mut self) -> Result<(), crate::error::GameError> {
        if self.mortgaged {
            return Err(crate::error::GameError::InvalidState(self.id));
        }
        if self.hotels >= MAX_HOTELS {
            return Err(crate::error::GameError::MaxImprovementsReached(self.id));
        }
        self.houses = 0;
        self.hotels = 1;
        Ok(())
    }

    /// Remove one house.
    pub(crate) fn sell_house(&mut self) -> Result<(), crate::error::GameError> {
        if self.houses == 0 {
            return Err(crate::error::GameError::InvalidState(self.id));
        }
        self.houses -= 1;
        Ok(())
    }

    /// Remove the hotel.
    pub(crate) fn sell_hotel(&mut self) -> Result<(), crate::error::GameError> {
        if self.hotels == 0 {
            return Err(crate::error::GameError::InvalidState(self.id));
        }
        self.hotels = 0;
        Ok(())
    }

    /// Flag the mortgage. Improved parcels cannot be mortgaged; the
    /// improvements must be sold back first.
    pub(crate) fn set_mortgaged(&mut self, mortgaged: bool) -> Result<(), crate::error::GameError> {
        if self.mortgaged == mortgaged {
            return Err(crate::error::GameError::InvalidState(self.id));
        }
        if mortgaged && (self.houses > 0 || self.hotels > 0) {
            return Err(crate::error::GameError::InvalidState(self.id));
        }
        self.mortgaged = mortgaged;
        Ok(())
    }

    /// Return the parcel to the bank: unowned, unimproved, unmortgaged,
    /// available for purchase again.
    pub(crate) fn reset_to_bank(&mut self) {
        self.owner = None;
        self.purchased = false;
        self.mortgaged = false;
        self.houses = 0;
        self.hotels = 0;
    }
}
