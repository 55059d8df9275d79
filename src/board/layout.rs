//! Standard game content: the classic 40-cell track, its 28 parcels, and
//! the two card decks.
//!
//! Rent schedules for streets derive from price (`base = price / 10`,
//! then 5x/15x/30x/40x/55x for one house through hotel). House prices step
//! up by board side: 50, 100, 150, 200, and the hotel costs the same as a
//! house. Railroads and utilities keep empty improvement prices; their
//! rent comes from the category policy, not the schedule.

use crate::cards::{Card, CardEffect};
use crate::core::{CardId, CellId, Player, PropertyId};

use super::{Board, Cell, ColorGroup, Property, PropertyGroup, TaxKind};

/// Where every game starts.
pub const GO: CellId = CellId::new(0);

/// Just-visiting jail corner.
pub const JAIL: CellId = CellId::new(10);

/// The pot corner (pays out only under the pot house rule).
pub const FREE_PARKING: CellId = CellId::new(20);

/// The corner that jails whoever lands on it.
pub const GO_TO_JAIL: CellId = CellId::new(30);

/// A colored street with a derived rent schedule.
fn street(id: u16, name: &str, price: i64, group: ColorGroup) -> Property {
    let base = price / 10;
    let house = house_price(group);
    Property::new(PropertyId::new(id), name, price, PropertyGroup::Color(group))
        .with_rent_schedule([base, base * 5, base * 15, base * 30, base * 40, base * 55])
        .with_improvement_prices(house, house)
}

fn railroad(id: u16, name: &str) -> Property {
    Property::new(PropertyId::new(id), name, 200, PropertyGroup::Railroad)
        .with_rent_schedule([25, 0, 0, 0, 0, 0])
}

fn utility(id: u16, name: &str, price: i64) -> Property {
    Property::new(PropertyId::new(id), name, price, PropertyGroup::Utility)
}

/// House (and hotel) build price by board side.
fn house_price(group: ColorGroup) -> i64 {
    match group {
        ColorGroup::Brown | ColorGroup::LightBlue => 50,
        ColorGroup::Pink | ColorGroup::Orange => 100,
        ColorGroup::Red | ColorGroup::Yellow => 150,
        ColorGroup::Green | ColorGroup::Blue => 200,
    }
}

/// The 28 standard parcels, in board order.
#[must_use]
pub fn standard_properties() -> Vec<Property> {
    vec![
        street(0, "San Diego Drive", 60, ColorGroup::Brown),
        street(1, "Kansas Drive", 90, ColorGroup::Brown),
        railroad(2, "Beverly Railroad"),
        street(3, "Vermont Drive", 120, ColorGroup::LightBlue),
        street(4, "Phoenix Drive", 130, ColorGroup::LightBlue),
        street(5, "Boston Drive", 150, ColorGroup::LightBlue),
        street(6, "Olivia Gardens", 140, ColorGroup::Pink),
        utility(7, "Car Company", 150),
        street(8, "California Drive", 160, ColorGroup::Pink),
        street(9, "States Drive", 140, ColorGroup::Pink),
        railroad(10, "Manhattan Railroad"),
        street(11, "Bethany Drive", 180, ColorGroup::Orange),
        street(12, "New York Drive", 20, ColorGroup::Orange),
        street(13, "Atlanta Drive", 200, ColorGroup::Orange),
        street(14, "Almond Drive", 200, ColorGroup::Red),
        street(15, "Clement Drive", 200, ColorGroup::Red),
        street(16, "Pacific Drive", 260, ColorGroup::Red),
        utility(17, "Water Works", 60),
        street(18, "Rodeo Drive", 260, ColorGroup::Yellow),
        street(19, "Nashville Drive", 260, ColorGroup::Yellow),
        railroad(20, "Gateway Railroad"),
        street(21, "Oakville", 230, ColorGroup::Yellow),
        street(22, "Atlantic Drive", 300, ColorGroup::Green),
        street(23, "Clement Gardens", 300, ColorGroup::Green),
        street(24, "Riverside", 250, ColorGroup::Green),
        railroad(25, "Short Line"),
        street(26, "Folklore Heights", 200, ColorGroup::Blue),
        street(27, "Salt Lake", 350, ColorGroup::Blue),
    ]
}

/// The 40 standard cells.
#[must_use]
pub fn standard_cells() -> Vec<Cell> {
    let parcel = |id: u16| Cell::Property(PropertyId::new(id));
    vec![
        Cell::Go,
        parcel(0),
        Cell::CommunityChest,
        parcel(1),
        Cell::Tax(TaxKind::Fixed(200)),
        parcel(2),
        parcel(3),
        Cell::Chance,
        parcel(4),
        parcel(5),
        Cell::Jail,
        parcel(6),
        parcel(7),
        parcel(8),
        parcel(9),
        parcel(10),
        parcel(11),
        Cell::CommunityChest,
        parcel(12),
        parcel(13),
        Cell::FreeParking,
        parcel(14),
        Cell::Chance,
        parcel(15),
        parcel(16),
        parcel(17),
        parcel(18),
        parcel(19),
        parcel(20),
        parcel(21),
        Cell::GoToJail,
        parcel(22),
        parcel(23),
        Cell::CommunityChest,
        parcel(24),
        parcel(25),
        Cell::Chance,
        parcel(26),
        Cell::Tax(TaxKind::Fixed(75)),
        parcel(27),
    ]
}

/// Assemble a standard board for the given players.
#[must_use]
pub fn standard_board(players: Vec<Player>) -> Board {
    Board::new(standard_cells(), standard_properties(), players)
}

/// The fifteen community chest cards.
#[must_use]
pub fn community_chest_cards() -> Vec<Card> {
    let card = |id: u16, text: &str, effect: CardEffect| Card::new(CardId::new(id), text, effect);
    vec![
        card(
            0,
            "You win second prize in a beauty contest. Collect $50.",
            CardEffect::CollectFromBank { amount: 50 },
        ),
        card(
            1,
            "Bank error in your favour. Collect $200.",
            CardEffect::CollectFromBank { amount: 200 },
        ),
        card(2, "Doctor's fees. Pay $50.", CardEffect::PayBank { amount: 50 }),
        card(
            3,
            "Go directly to jail. Do not pass Go, do not collect $200.",
            CardEffect::GoToJail,
        ),
        card(
            4,
            "Advance to Go. Collect $200.",
            CardEffect::MoveToCell {
                cell: GO,
                collect_passing_go: true,
            },
        ),
        card(5, "Get out of jail free. Keep this card.", CardEffect::GainJailFreeCard),
        card(
            6,
            "Holiday fund matures. Collect $100.",
            CardEffect::CollectFromBank { amount: 100 },
        ),
        card(
            7,
            "Life insurance matures. Collect $100.",
            CardEffect::CollectFromBank { amount: 100 },
        ),
        card(8, "Pay hospital fees of $100.", CardEffect::PayBank { amount: 100 }),
        card(9, "Pay school fees of $150.", CardEffect::PayBank { amount: 150 }),
        card(
            10,
            "Receive $25 consultancy fee.",
            CardEffect::CollectFromBank { amount: 25 },
        ),
        card(11, "You inherit $100.", CardEffect::CollectFromBank { amount: 100 }),
        card(
            12,
            "From sale of stock you get $50.",
            CardEffect::CollectFromBank { amount: 50 },
        ),
        card(
            13,
            "It is your birthday. Collect $10 from every player.",
            CardEffect::CollectFromEachPlayer { amount: 10 },
        ),
        card(
            14,
            "Street repairs. Pay $40 per house and $115 per hotel.",
            CardEffect::PayPerImprovement {
                per_house: 40,
                per_hotel: 115,
            },
        ),
    ]
}

/// The nine chance cards.
#[must_use]
pub fn chance_cards() -> Vec<Card> {
    let card = |id: u16, text: &str, effect: CardEffect| Card::new(CardId::new(id), text, effect);
    vec![
        card(
            0,
            "Advance to Go. Collect $200.",
            CardEffect::MoveToCell {
                cell: GO,
                collect_passing_go: true,
            },
        ),
        card(
            1,
            "Take a trip to Atlantic Drive. If you pass Go, collect $200.",
            CardEffect::MoveToCell {
                cell: CellId::new(31),
                collect_passing_go: true,
            },
        ),
        card(
            2,
            "Advance to Salt Lake.",
            CardEffect::MoveToCell {
                cell: CellId::new(39),
                collect_passing_go: false,
            },
        ),
        card(
            3,
            "Your building loan matures. Collect $150.",
            CardEffect::CollectFromBank { amount: 150 },
        ),
        card(
            4,
            "Bank pays you a dividend of $50.",
            CardEffect::CollectFromBank { amount: 50 },
        ),
        card(5, "Speeding fine. Pay $15.", CardEffect::PayBank { amount: 15 }),
        card(
            6,
            "Make general repairs on all your property. Pay $25 per house and $100 per hotel.",
            CardEffect::PayPerImprovement {
                per_house: 25,
                per_hotel: 100,
            },
        ),
        card(
            7,
            "Go directly to jail. Do not pass Go, do not collect $200.",
            CardEffect::GoToJail,
        ),
        card(8, "Get out of jail free. Keep this card.", CardEffect::GainJailFreeCard),
    ]
}
