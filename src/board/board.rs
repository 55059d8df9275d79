//! The board registry: cells, parcels, players, and ownership moves.
//!
//! `Board` owns the three id-indexed tables and the derived group indexes
//! (color group membership, railroads, utilities) built once at
//! construction. All multi-entity ownership changes go through the
//! transactional operations here so that a failed cash withdrawal can
//! never leave ownership half-updated: the withdrawal is the only fallible
//! step, and every write after it is infallible.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CellId, Player, PlayerId, PropertyId};
use crate::error::GameError;

use super::{Cell, ColorGroup, Property, PropertyGroup};

/// Cells, parcels, and players for one game, indexed by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
    properties: Vec<Property>,
    players: Vec<Player>,
    jail: CellId,
    group_index: FxHashMap<ColorGroup, SmallVec<[PropertyId; 4]>>,
    railroads: SmallVec<[PropertyId; 4]>,
    utilities: SmallVec<[PropertyId; 2]>,
}

impl Board {
    /// Assemble a board. Ids must equal table indices, every `Cell::Property`
    /// must reference a real parcel, cell 0 must be Go, and exactly one
    /// jail cell must exist.
    #[must_use]
    pub fn new(cells: Vec<Cell>, properties: Vec<Property>, players: Vec<Player>) -> Self {
        assert!(!cells.is_empty(), "Board must have at least one cell");
        assert!(matches!(cells[0], Cell::Go), "Cell 0 must be Go");
        for (index, property) in properties.iter().enumerate() {
            assert_eq!(property.id().index(), index, "Property ids must match indices");
        }
        for (index, player) in players.iter().enumerate() {
            assert_eq!(player.id().index(), index, "Player ids must match indices");
        }
        for cell in &cells {
            if let Some(id) = cell.property_id() {
                assert!(id.index() < properties.len(), "Cell references unknown property {id}");
            }
        }
        let jail_index = cells
            .iter()
            .position(|cell| matches!(cell, Cell::Jail))
            .expect("Board must have a jail cell");

        let mut group_index: FxHashMap<ColorGroup, SmallVec<[PropertyId; 4]>> = FxHashMap::default();
        let mut railroads = SmallVec::new();
        let mut utilities = SmallVec::new();
        for property in &properties {
            match property.group() {
                PropertyGroup::Color(group) => group_index.entry(group).or_default().push(property.id()),
                PropertyGroup::Railroad => railroads.push(property.id()),
                PropertyGroup::Utility => utilities.push(property.id()),
            }
        }

        Self {
            cells,
            properties,
            players,
            jail: CellId::new(jail_index as u8),
            group_index,
            railroads,
            utilities,
        }
    }

    // === Lookups ===

    /// The cell at `id`.
    pub fn cell(&self, id: CellId) -> Result<&Cell, GameError> {
        self.cells.get(id.index()).ok_or(GameError::CellNotFound(id))
    }

    /// The parcel with `id`.
    pub fn property(&self, id: PropertyId) -> Result<&Property, GameError> {
        self.properties.get(id.index()).ok_or(GameError::PropertyNotFound(id))
    }

    pub(crate) fn property_mut(&mut self, id: PropertyId) -> Result<&mut Property, GameError> {
        self.properties.get_mut(id.index()).ok_or(GameError::PropertyNotFound(id))
    }

    /// Current owner of the parcel with `id`, if any.
    pub fn owner_of(&self, id: PropertyId) -> Result<Option<PlayerId>, GameError> {
        Ok(self.property(id)?.owner())
    }

    /// The player with `id`.
    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players.get(id.index()).ok_or(GameError::PlayerNotFound(id))
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        self.players.get_mut(id.index()).ok_or(GameError::PlayerNotFound(id))
    }

    /// All cells in board order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All parcels in id order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// All players in id order, bankrupt ones included.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of cells on the track.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Players still in the game.
    pub fn solvent_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| !player.is_bankrupt())
    }

    /// The jail cell.
    #[must_use]
    pub fn jail_cell(&self) -> CellId {
        self.jail
    }

    // === Group queries ===

    /// Parcel ids in a color group, in id order.
    #[must_use]
    pub fn group_members(&self, group: ColorGroup) -> &[PropertyId] {
        self.group_index.get(&group).map_or(&[], |members| members.as_slice())
    }

    /// Whether `owner` holds every parcel in `group`. Mortgaged parcels
    /// still count as held.
    #[must_use]
    pub fn has_monopoly(&self, owner: PlayerId, group: ColorGroup) -> bool {
        let members = match self.group_index.get(&group) {
            Some(members) if !members.is_empty() => members,
            _ => return false,
        };
        members
            .iter()
            .all(|id| self.properties[id.index()].owner() == Some(owner))
    }

    /// How many railroads `owner` holds.
    #[must_use]
    pub fn railroad_count(&self, owner: PlayerId) -> u32 {
        self.railroads
            .iter()
            .filter(|id| self.properties[id.index()].owner() == Some(owner))
            .count() as u32
    }

    /// How many utilities `owner` holds.
    #[must_use]
    pub fn utility_count(&self, owner: PlayerId) -> u32 {
        self.utilities
            .iter()
            .filter(|id| self.properties[id.index()].owner() == Some(owner))
            .count() as u32
    }

    // === Ownership transactions ===

    /// Buy an unowned parcel at list price. The withdrawal is validated
    /// first; on any error neither cash nor ownership has changed.
    pub fn purchase(&mut self, player: PlayerId, property: PropertyId) -> Result<(), GameError> {
        let (price, id) = {
            let parcel = self.property(property)?;
            if let Some(owner) = parcel.owner() {
                return Err(GameError::AlreadyOwned { property, owner });
            }
            if parcel.is_purchased() {
                return Err(GameError::AlreadyPurchased(property));
            }
            (parcel.price(), parcel.id())
        };
        self.player_mut(player)?.withdraw(price)?;
        // Infallible from here on.
        let parcel = &mut self.properties[id.index()];
        parcel.set_owner(Some(player));
        parcel.mark_purchased();
        self.players[player.index()].add_property(id);
        Ok(())
    }

    /// Grant a parcel to a player without payment. Used when setting up
    /// positions and when a creditor inherits an estate.
    pub fn acquire(&mut self, player: PlayerId, property: PropertyId) -> Result<(), GameError> {
        let parcel = self.property(property)?;
        if let Some(owner) = parcel.owner() {
            return Err(GameError::AlreadyOwned { property, owner });
        }
        self.player(player)?;
        let parcel = &mut self.properties[property.index()];
        parcel.set_owner(Some(player));
        parcel.mark_purchased();
        self.players[player.index()].add_property(property);
        Ok(())
    }

    /// Move one parcel to another player, keeping its mortgage state and
    /// improvements.
    pub(crate) fn move_parcel(&mut self, property: PropertyId, to: PlayerId) -> Result<(), GameError> {
        let owner = self
            .property(property)?
            .owner()
            .ok_or(GameError::InvalidState(property))?;
        self.player(to)?;
        self.players[owner.index()].remove_property(property);
        self.players[to.index()].add_property(property);
        self.properties[property.index()].set_owner(Some(to));
        Ok(())
    }

    /// Move every parcel `from` holds to `to`, keeping mortgage state.
    /// Returns the moved ids in id order.
    pub(crate) fn transfer_properties(
        &mut self,
        from: PlayerId,
        to: PlayerId,
    ) -> Result<Vec<PropertyId>, GameError> {
        self.player(to)?;
        let moved = self.player_mut(from)?.take_properties();
        for &id in &moved {
            self.properties[id.index()].set_owner(Some(to));
            self.players[to.index()].add_property(id);
        }
        Ok(moved)
    }

    /// Return every parcel `from` holds to the bank: unowned, unimproved,
    /// unmortgaged, purchasable again. Returns the released ids in id order.
    pub(crate) fn release_properties(&mut self, from: PlayerId) -> Result<Vec<PropertyId>, GameError> {
        let released = self.player_mut(from)?.take_properties();
        for &id in &released {
            self.properties[id.index()].reset_to_bank();
        }
        Ok(released)
    }
}
