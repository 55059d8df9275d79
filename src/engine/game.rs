//! The turn controller: the only entry point for driving a game.
//!
//! `GameEngine` owns the board, the decks, the RNG, and the turn machine,
//! and exposes a command/query surface. Commands validate, mutate, append
//! events, and return a `TurnSnapshot`; queries copy state out. Callers
//! never hold references into the engine.
//!
//! ## Rolling
//!
//! `roll_and_advance` runs a whole turn segment: dice, doubles
//! bookkeeping, movement with Go salary, landing resolution, and turn
//! hand-off. It returns parked either on the next `AwaitingRoll` or on
//! `AwaitingDecision` when an unowned parcel wants a buy-or-decline
//! answer. `roll_and_advance_with` is the scripted variant for replays
//! and tests: same machine, caller-supplied dice.
//!
//! ## Required payments
//!
//! Rent, taxes, card fees, and the jail fine settle immediately. A short
//! balance triggers liquidation in ascending parcel id order (hotel,
//! houses, then mortgage) until the debt is covered; past total capacity
//! the debtor goes bankrupt and the estate moves to the creditor, or back
//! to the bank when the bank was owed.

use im::Vector;

use crate::board::{layout, Board, Cell};
use crate::cards::{CardEffect, Deck, DeckKind};
use crate::core::{
    CardId, CellId, DiceRoll, GameConfig, GameRng, GameRngState, Player, PlayerId, PropertyId, Token,
};
use crate::error::GameError;

use super::{GameEvent, PlayerAction, PlayerSnapshot, PropertySnapshot, TurnPhase, TurnSnapshot, TurnState};

/// Who a required payment is owed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Creditor {
    Bank,
    Player(PlayerId),
}

/// What a settlement actually did.
#[derive(Clone, Copy, Debug)]
struct Settlement {
    /// Amount that changed hands; below the debt only on bankruptcy.
    paid: i64,
    bankrupted: bool,
}

/// Assembles a `GameEngine` on the standard board.
///
/// ```
/// use monopoly_engine::core::Token;
/// use monopoly_engine::engine::GameBuilder;
///
/// let game = GameBuilder::new()
///     .add_player("Ann", Token::Boot)
///     .add_player("Ben", Token::Dog)
///     .build(42);
///
/// assert_eq!(game.board().players().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    players: Vec<(String, Token, Option<i64>)>,
    config: GameConfig,
}

impl GameBuilder {
    /// Start an empty builder with the classic configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player with the configured starting cash.
    #[must_use]
    pub fn add_player(mut self, name: impl Into<String>, token: Token) -> Self {
        self.players.push((name.into(), token, None));
        self
    }

    /// Add a player with a specific starting cash, overriding the
    /// configured amount.
    #[must_use]
    pub fn add_player_with_cash(mut self, name: impl Into<String>, token: Token, cash: i64) -> Self {
        assert!(cash >= 0, "Starting cash must be non-negative");
        self.players.push((name.into(), token, Some(cash)));
        self
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the engine. Deck shuffles run on forks of the seed RNG, so
    /// the dice stream depends only on the seed.
    #[must_use]
    pub fn build(self, seed: u64) -> GameEngine {
        assert!(
            (2..=8).contains(&self.players.len()),
            "Must have 2 to 8 players"
        );
        let mut rng = GameRng::new(seed);
        let mut chest_rng = rng.fork();
        let mut chance_rng = rng.fork();
        let chest = Deck::new(
            DeckKind::CommunityChest,
            layout::community_chest_cards(),
            &mut chest_rng,
        );
        let chance = Deck::new(DeckKind::Chance, layout::chance_cards(), &mut chance_rng);

        let config = self.config;
        let players: Vec<Player> = self
            .players
            .into_iter()
            .enumerate()
            .map(|(index, (name, token, cash))| {
                Player::new(
                    PlayerId::new(index as u8),
                    name,
                    token,
                    cash.unwrap_or(config.starting_cash),
                    layout::GO,
                )
            })
            .collect();
        let order: Vec<PlayerId> = players.iter().map(Player::id).collect();
        let board = layout::standard_board(players);

        GameEngine {
            board,
            chest,
            chance,
            turn: TurnState::new(order),
            rng,
            config,
            pot: 0,
            events: Vector::new(),
        }
    }
}

/// A running game.
///
/// Not serializable as a whole because it owns the RNG stream; persist
/// the seed (or `rng_state`) plus the command sequence, or snapshot the
/// pieces individually.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    chest: Deck,
    chance: Deck,
    turn: TurnState,
    rng: GameRng,
    config: GameConfig,
    /// Free Parking pot; stays 0 unless the house rule is on.
    pot: i64,
    events: Vector<GameEvent>,
}

impl GameEngine {
    // === Queries ===

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current_player()
    }

    /// The externally visible phase: `AwaitingRoll`, `AwaitingDecision`,
    /// or `GameOver`.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.turn.phase() {
            TurnPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// The board: cells, parcels, players.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The Free Parking pot balance.
    #[must_use]
    pub fn pot(&self) -> i64 {
        self.pot
    }

    /// Everything that has happened, oldest first.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    /// One of the two decks, for card text lookups.
    #[must_use]
    pub fn deck(&self, kind: DeckKind) -> &Deck {
        match kind {
            DeckKind::CommunityChest => &self.chest,
            DeckKind::Chance => &self.chance,
        }
    }

    /// The RNG position, sufficient to reproduce the remaining stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Snapshot of one player's ledger.
    pub fn player_state(&self, player: PlayerId) -> Result<PlayerSnapshot, GameError> {
        Ok(PlayerSnapshot::from(self.board.player(player)?))
    }

    /// Snapshot of one parcel's ledger.
    pub fn property_state(&self, property: PropertyId) -> Result<PropertySnapshot, GameError> {
        Ok(PropertySnapshot::from(self.board.property(property)?))
    }

    /// Snapshot of the turn machine.
    #[must_use]
    pub fn turn_snapshot(&self) -> TurnSnapshot {
        TurnSnapshot {
            current_player: self.turn.current_player(),
            phase: self.turn.phase(),
            last_roll: self.turn.last_roll(),
            turn_number: self.turn.turn_number(),
            order: self.turn.order().to_vec(),
            pot: self.pot,
        }
    }

    /// Every command `player` could issue right now and expect to succeed.
    pub fn legal_actions(&self, player: PlayerId) -> Result<Vec<PlayerAction>, GameError> {
        let subject = self.board.player(player)?;
        let mut actions = Vec::new();
        if subject.is_bankrupt() || matches!(self.turn.phase(), TurnPhase::GameOver { .. }) {
            return Ok(actions);
        }

        if player == self.turn.current_player() {
            match self.turn.phase() {
                TurnPhase::AwaitingRoll => {
                    actions.push(PlayerAction::RollDice);
                    actions.push(PlayerAction::DeclareBankruptcy);
                }
                TurnPhase::AwaitingDecision { property } => {
                    let parcel = self.board.property(property)?;
                    if subject.cash() >= parcel.price() {
                        actions.push(PlayerAction::BuyProperty {
                            property,
                            price: parcel.price(),
                        });
                    }
                    actions.push(PlayerAction::DeclinePurchase { property });
                    actions.push(PlayerAction::DeclareBankruptcy);
                }
                _ => {}
            }
        }

        for property in subject.properties_sorted() {
            let parcel = self.board.property(property)?;
            let monopoly = parcel
                .group()
                .color()
                .is_some_and(|group| self.board.has_monopoly(player, group));

            if monopoly && !parcel.is_mortgaged() {
                if parcel.hotels() == 0
                    && parcel.houses() < crate::board::MAX_HOUSES
                    && subject.cash() >= parcel.house_price()
                {
                    actions.push(PlayerAction::BuildHouse { property });
                }
                if parcel.hotels() == 0 && subject.cash() >= parcel.hotel_price() {
                    actions.push(PlayerAction::BuildHotel { property });
                }
            }
            if parcel.houses() > 0 {
                actions.push(PlayerAction::SellHouse { property });
            }
            if parcel.hotels() > 0 {
                actions.push(PlayerAction::SellHotel { property });
            }
            if !parcel.is_mortgaged() && parcel.houses() == 0 && parcel.hotels() == 0 {
                actions.push(PlayerAction::Mortgage { property });
            }
            if parcel.is_mortgaged() && subject.cash() >= parcel.unmortgage_cost() {
                actions.push(PlayerAction::Unmortgage { property });
            }
        }
        Ok(actions)
    }

    // === Commands: rolling ===

    /// Roll the dice and play the turn segment out.
    pub fn roll_and_advance(&mut self) -> Result<TurnSnapshot, GameError> {
        if !matches!(self.turn.phase(), TurnPhase::AwaitingRoll) {
            return Err(GameError::InvalidTransition);
        }
        let roll = DiceRoll::roll(&mut self.rng);
        self.execute_roll(roll)
    }

    /// Scripted variant of `roll_and_advance`: the caller supplies the
    /// dice. Used for replays and deterministic tests.
    pub fn roll_and_advance_with(&mut self, roll: DiceRoll) -> Result<TurnSnapshot, GameError> {
        assert!(
            (1..=6).contains(&roll.die1) && (1..=6).contains(&roll.die2),
            "Dice values must be 1..=6"
        );
        if !matches!(self.turn.phase(), TurnPhase::AwaitingRoll) {
            return Err(GameError::InvalidTransition);
        }
        self.execute_roll(roll)
    }

    fn execute_roll(&mut self, roll: DiceRoll) -> Result<TurnSnapshot, GameError> {
        let player = self.turn.current_player();
        self.push(GameEvent::TurnStarted {
            player,
            turn: self.turn.turn_number(),
        });

        if self.board.player(player)?.is_in_jail() {
            if self.board.player_mut(player)?.use_jail_free_card() {
                self.push(GameEvent::JailFreeCardUsed { player });
                self.release_from_jail(player)?;
                return self.normal_turn(player, roll);
            }
            return self.jail_turn(player, roll);
        }
        self.normal_turn(player, roll)
    }

    /// A turn for a free player: doubles bookkeeping, movement, landing.
    fn normal_turn(&mut self, player: PlayerId, roll: DiceRoll) -> Result<TurnSnapshot, GameError> {
        self.push(GameEvent::DiceRolled { player, roll });
        self.turn.set_last_roll(roll);

        let third_double = self.board.player_mut(player)?.record_doubles(roll.is_double());
        if third_double {
            // Straight to jail, no movement.
            self.send_to_jail(player)?;
            return self.finish_turn(player);
        }
        if roll.is_double() {
            self.turn.grant_extra_roll();
            self.push(GameEvent::ExtraRollEarned { player });
        }

        self.travel_and_resolve(player, roll)?;
        self.finish_if_pending(player)
    }

    /// A turn for a jailed player with no jail-free card.
    fn jail_turn(&mut self, player: PlayerId, roll: DiceRoll) -> Result<TurnSnapshot, GameError> {
        self.push(GameEvent::DiceRolled { player, roll });
        self.turn.set_last_roll(roll);

        if roll.is_double() {
            // Doubles release and move, but earn no re-roll and do not
            // count toward the doubles streak.
            self.release_from_jail(player)?;
            self.travel_and_resolve(player, roll)?;
            return self.finish_if_pending(player);
        }

        let attempts = self.board.player_mut(player)?.record_jail_turn();
        if attempts < 3 {
            return self.finish_turn(player);
        }

        // Third failed attempt: the fine is a required payment, then the
        // roll is walked.
        let fine = self.config.jail_fine;
        let settlement = self.settle_debt(player, Creditor::Bank, fine, false, |paid| {
            GameEvent::JailFinePaid { player, amount: paid }
        })?;
        if settlement.bankrupted {
            return self.finish_turn(player);
        }
        self.release_from_jail(player)?;
        self.travel_and_resolve(player, roll)?;
        self.finish_if_pending(player)
    }

    // === Commands: purchase decision ===

    /// Answer a pending purchase offer.
    ///
    /// Accepting without the cash fails with `InsufficientFunds` and
    /// leaves the decision pending, so the player can mortgage or sell
    /// improvements and answer again.
    pub fn decide_purchase(&mut self, accept: bool) -> Result<TurnSnapshot, GameError> {
        let TurnPhase::AwaitingDecision { property } = self.turn.phase() else {
            return Err(GameError::InvalidTransition);
        };
        let player = self.turn.current_player();

        if accept {
            let price = self.board.property(property)?.price();
            self.board.purchase(player, property)?;
            self.push(GameEvent::PropertyPurchased {
                player,
                property,
                price,
            });
        } else {
            self.push(GameEvent::PurchaseDeclined { player, property });
        }
        self.finish_turn(player)
    }

    // === Commands: property management ===
    //
    // Open to any parcel owner in any non-terminal phase, including while
    // a purchase decision is pending.

    /// Build one house. Requires the full color group, an unmortgaged
    /// parcel, no hotel, and fewer than the maximum houses.
    pub fn build_house(&mut self, property: PropertyId) -> Result<TurnSnapshot, GameError> {
        self.ensure_active()?;
        let owner = self.improvable_owner(property)?;
        let price = self.board.property(property)?.house_price();
        self.charge_for_improvement(owner, price)?;
        self.board.property_mut(property)?.add_house()?;
        self.board.player_mut(owner)?.withdraw(price)?;
        let houses = self.board.property(property)?.houses();
        self.push(GameEvent::HouseBuilt {
            player: owner,
            property,
            houses,
        });
        Ok(self.turn_snapshot())
    }

    /// Build the hotel, replacing any houses. Requires the full color
    /// group and no existing hotel.
    pub fn build_hotel(&mut self, property: PropertyId) -> Result<TurnSnapshot, GameError> {
        self.ensure_active()?;
        let owner = self.improvable_owner(property)?;
        let price = self.board.property(property)?.hotel_price();
        self.charge_for_improvement(owner, price)?;
        self.board.property_mut(property)?.add_hotel()?;
        self.board.player_mut(owner)?.withdraw(price)?;
        self.push(GameEvent::HotelBuilt {
            player: owner,
            property,
        });
        Ok(self.turn_snapshot())
    }

    /// Sell one house back for half its build price.
    pub fn sell_house(&mut self, property: PropertyId) -> Result<TurnSnapshot, GameError> {
        self.ensure_active()?;
        let owner = self.owner_of(property)?;
        self.board.property_mut(property)?.sell_house()?;
        let parcel = self.board.property(property)?;
        let houses = parcel.houses();
        let refund = parcel.house_price() / 2;
        self.board.player_mut(owner)?.deposit(refund);
        self.push(GameEvent::HouseSold {
            player: owner,
            property,
            houses,
            refund,
        });
        Ok(self.turn_snapshot())
    }

    /// Sell the hotel back for half its build price.
    pub fn sell_hotel(&mut self, property: PropertyId) -> Result<TurnSnapshot, GameError> {
        self.ensure_active()?;
        let owner = self.owner_of(property)?;
        self.board.property_mut(property)?.sell_hotel()?;
        let refund = self.board.property(property)?.hotel_price() / 2;
        self.board.player_mut(owner)?.deposit(refund);
        self.push(GameEvent::HotelSold {
            player: owner,
            property,
            refund,
        });
        Ok(self.turn_snapshot())
    }

    /// Mortgage an unimproved parcel for half its price.
    pub fn mortgage(&mut self, property: PropertyId) -> Result<TurnSnapshot, GameError> {
        self.ensure_active()?;
        let owner = self.owner_of(property)?;
        self.board.property_mut(property)?.set_mortgaged(true)?;
        let credit = self.board.property(property)?.mortgage_value();
        self.board.player_mut(owner)?.deposit(credit);
        self.push(GameEvent::Mortgaged {
            player: owner,
            property,
            credit,
        });
        Ok(self.turn_snapshot())
    }

    /// Pay off a mortgage: the mortgage value plus 10% interest.
    pub fn unmortgage(&mut self, property: PropertyId) -> Result<TurnSnapshot, GameError> {
        self.ensure_active()?;
        let owner = self.owner_of(property)?;
        let cost = self.board.property(property)?.unmortgage_cost();
        let available = self.board.player(owner)?.cash();
        if available < cost {
            return Err(GameError::InsufficientFunds {
                required: cost,
                available,
            });
        }
        self.board.property_mut(property)?.set_mortgaged(false)?;
        self.board.player_mut(owner)?.withdraw(cost)?;
        self.push(GameEvent::Unmortgaged {
            player: owner,
            property,
            cost,
        });
        Ok(self.turn_snapshot())
    }

    /// Hand a parcel to another player, mortgage and improvements
    /// included. The minimal trade primitive; no payment moves.
    pub fn transfer_property(&mut self, property: PropertyId, to: PlayerId) -> Result<TurnSnapshot, GameError> {
        self.ensure_active()?;
        let owner = self.owner_of(property)?;
        if owner == to {
            return Err(GameError::AlreadyOwned { property, owner });
        }
        if self.board.player(to)?.is_bankrupt() {
            return Err(GameError::InvalidState(property));
        }
        self.board.move_parcel(property, to)?;
        self.push(GameEvent::PropertyTransferred {
            from: owner,
            to,
            property,
        });
        Ok(self.turn_snapshot())
    }

    // === Commands: leaving the game ===

    /// The current player concedes: cash and parcels revert to the bank
    /// and the turn passes.
    pub fn declare_bankruptcy(&mut self) -> Result<TurnSnapshot, GameError> {
        if !matches!(
            self.turn.phase(),
            TurnPhase::AwaitingRoll | TurnPhase::AwaitingDecision { .. }
        ) {
            return Err(GameError::InvalidTransition);
        }
        let player = self.turn.current_player();
        let cash = self.board.player(player)?.cash();
        if cash > 0 {
            self.board.player_mut(player)?.withdraw(cash)?;
        }
        self.eliminate(player, Creditor::Bank)?;
        self.finish_turn(player)
    }

    // === Movement and landing ===

    fn travel_and_resolve(&mut self, player: PlayerId, roll: DiceRoll) -> Result<(), GameError> {
        self.turn.set_phase(TurnPhase::Rolled);
        let destination = self.move_player(player, roll.total())?;
        self.turn.set_phase(TurnPhase::Landed);
        self.resolve_landing(player, destination, roll.total())
    }

    /// Walk `steps` forward, crediting the salary when the path wraps
    /// past (or onto) Go.
    fn move_player(&mut self, player: PlayerId, steps: u8) -> Result<CellId, GameError> {
        let from = self.board.player(player)?.position();
        let (destination, wrapped) = from.advanced(steps, self.board.cell_count());
        self.board.player_mut(player)?.set_position(destination);
        self.push(GameEvent::Moved {
            player,
            from,
            to: destination,
        });
        if wrapped {
            self.collect_salary(player)?;
        }
        Ok(destination)
    }

    fn collect_salary(&mut self, player: PlayerId) -> Result<(), GameError> {
        let amount = self.config.salary;
        self.board.player_mut(player)?.deposit(amount);
        self.push(GameEvent::SalaryCollected { player, amount });
        Ok(())
    }

    fn resolve_landing(&mut self, player: PlayerId, cell: CellId, dice_total: u8) -> Result<(), GameError> {
        match *self.board.cell(cell)? {
            Cell::Go | Cell::Jail => Ok(()),
            Cell::FreeParking => {
                if self.config.free_parking_pot && self.pot > 0 {
                    let amount = self.pot;
                    self.pot = 0;
                    self.board.player_mut(player)?.deposit(amount);
                    self.push(GameEvent::PotCollected { player, amount });
                }
                Ok(())
            }
            Cell::GoToJail => self.send_to_jail(player),
            Cell::Tax(kind) => {
                let amount = kind.amount_due(self.board.player(player)?.cash());
                self.settle_debt(player, Creditor::Bank, amount, true, |paid| GameEvent::TaxPaid {
                    player,
                    amount: paid,
                })?;
                Ok(())
            }
            Cell::CommunityChest => self.draw_and_apply(player, DeckKind::CommunityChest),
            Cell::Chance => self.draw_and_apply(player, DeckKind::Chance),
            Cell::Property(property) => self.resolve_property_landing(player, property, dice_total),
        }
    }

    fn resolve_property_landing(
        &mut self,
        player: PlayerId,
        property: PropertyId,
        dice_total: u8,
    ) -> Result<(), GameError> {
        let owner = self.board.owner_of(property)?;
        match owner {
            None => {
                // Offered regardless of cash on hand; the player may
                // mortgage holdings to fund the purchase before deciding.
                self.turn.set_phase(TurnPhase::AwaitingDecision { property });
                self.push(GameEvent::PropertyOffered { player, property });
                Ok(())
            }
            Some(owner) if owner == player => Ok(()),
            Some(owner) => {
                let rent = self.board.property(property)?.rent_due(&self.board, dice_total);
                if rent > 0 {
                    self.settle_debt(player, Creditor::Player(owner), rent, false, |paid| {
                        GameEvent::RentPaid {
                            player,
                            owner,
                            property,
                            amount: paid,
                        }
                    })?;
                }
                Ok(())
            }
        }
    }

    // === Jail plumbing ===

    fn send_to_jail(&mut self, player: PlayerId) -> Result<(), GameError> {
        let jail = self.board.jail_cell();
        self.board.player_mut(player)?.send_to_jail(jail);
        self.turn.clear_extra_roll();
        self.push(GameEvent::SentToJail { player });
        Ok(())
    }

    fn release_from_jail(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.board.player_mut(player)?.leave_jail();
        self.push(GameEvent::ReleasedFromJail { player });
        Ok(())
    }

    // === Cards ===

    fn draw_and_apply(&mut self, player: PlayerId, kind: DeckKind) -> Result<(), GameError> {
        let (card, effect) = {
            let deck = match kind {
                DeckKind::CommunityChest => &self.chest,
                DeckKind::Chance => &self.chance,
            };
            let drawn = deck.draw(&mut self.rng);
            (drawn.id(), *drawn.effect())
        };
        self.push(GameEvent::CardDrawn {
            player,
            deck: kind,
            card,
        });
        self.apply_effect(player, card, effect)
    }

    /// The single interpreter for card effects.
    fn apply_effect(&mut self, player: PlayerId, _card: CardId, effect: CardEffect) -> Result<(), GameError> {
        match effect {
            CardEffect::PayBank { amount } => {
                self.settle_debt(player, Creditor::Bank, amount, true, |paid| {
                    GameEvent::BankCharged { player, amount: paid }
                })?;
                Ok(())
            }
            CardEffect::CollectFromBank { amount } => {
                self.board.player_mut(player)?.deposit(amount);
                self.push(GameEvent::BankCredited { player, amount });
                Ok(())
            }
            CardEffect::CollectFromEachPlayer { amount } => {
                let payers: Vec<PlayerId> = self
                    .board
                    .solvent_players()
                    .map(Player::id)
                    .filter(|&id| id != player)
                    .collect();
                for payer in payers {
                    // Short payers contribute what they have; this effect
                    // never forces liquidation or bankruptcy.
                    let contribution = amount.min(self.board.player(payer)?.cash());
                    if contribution == 0 {
                        continue;
                    }
                    self.board.player_mut(payer)?.withdraw(contribution)?;
                    self.board.player_mut(player)?.deposit(contribution);
                    self.push(GameEvent::PlayerCharged {
                        from: payer,
                        to: player,
                        amount: contribution,
                    });
                }
                Ok(())
            }
            CardEffect::MoveToCell {
                cell,
                collect_passing_go,
            } => {
                self.board.cell(cell)?;
                let from = self.board.player(player)?.position();
                self.board.player_mut(player)?.set_position(cell);
                self.push(GameEvent::Moved {
                    player,
                    from,
                    to: cell,
                });
                // Forward travel wraps past Go exactly when the target
                // index does not exceed the start. Card movement does not
                // re-run landing resolution.
                if collect_passing_go && cell.index() <= from.index() {
                    self.collect_salary(player)?;
                }
                Ok(())
            }
            CardEffect::GainJailFreeCard => {
                self.board.player_mut(player)?.add_jail_free_card();
                self.push(GameEvent::JailFreeCardGained { player });
                Ok(())
            }
            CardEffect::PayPerImprovement { per_house, per_hotel } => {
                let (houses, hotels) = self.improvement_counts(player)?;
                let amount = i64::from(houses) * per_house + i64::from(hotels) * per_hotel;
                if amount > 0 {
                    self.settle_debt(player, Creditor::Bank, amount, true, |paid| {
                        GameEvent::BankCharged { player, amount: paid }
                    })?;
                }
                Ok(())
            }
            CardEffect::GoToJail => self.send_to_jail(player),
        }
    }

    fn improvement_counts(&self, player: PlayerId) -> Result<(u32, u32), GameError> {
        let mut houses = 0u32;
        let mut hotels = 0u32;
        for property in self.board.player(player)?.properties_sorted() {
            let parcel = self.board.property(property)?;
            houses += u32::from(parcel.houses());
            hotels += u32::from(parcel.hotels());
        }
        Ok((houses, hotels))
    }

    // === Required payments ===

    /// Settle a debt `debtor` owes. Liquidates holdings if cash is short;
    /// runs the bankruptcy flow if liquidation cannot cover it. `to_pot`
    /// routes a bank-bound payment into the Free Parking pot when the
    /// house rule is on.
    fn settle_debt(
        &mut self,
        debtor: PlayerId,
        creditor: Creditor,
        amount: i64,
        to_pot: bool,
        on_paid: impl FnOnce(i64) -> GameEvent,
    ) -> Result<Settlement, GameError> {
        if amount <= 0 {
            return Ok(Settlement {
                paid: 0,
                bankrupted: false,
            });
        }
        if self.board.player(debtor)?.cash() < amount {
            self.liquidate(debtor, amount)?;
        }

        let available = self.board.player(debtor)?.cash();
        if available >= amount {
            self.board.player_mut(debtor)?.withdraw(amount)?;
            self.credit(creditor, to_pot, amount)?;
            self.push(on_paid(amount));
            return Ok(Settlement {
                paid: amount,
                bankrupted: false,
            });
        }

        // Beyond total capacity: everything the debtor has goes to the
        // creditor, and the debtor leaves the game.
        if available > 0 {
            self.board.player_mut(debtor)?.withdraw(available)?;
            self.credit(creditor, to_pot, available)?;
        }
        self.push(on_paid(available));
        self.eliminate(debtor, creditor)?;
        Ok(Settlement {
            paid: available,
            bankrupted: true,
        })
    }

    fn credit(&mut self, creditor: Creditor, to_pot: bool, amount: i64) -> Result<(), GameError> {
        match creditor {
            Creditor::Player(player) => self.board.player_mut(player)?.deposit(amount),
            Creditor::Bank if to_pot && self.config.free_parking_pot => self.pot += amount,
            Creditor::Bank => {}
        }
        Ok(())
    }

    /// Raise cash toward `target` by stripping the debtor's holdings in
    /// ascending parcel id order: hotel first, then houses, then the
    /// mortgage. Stops as soon as the target is reachable from cash.
    fn liquidate(&mut self, debtor: PlayerId, target: i64) -> Result<(), GameError> {
        let owned = self.board.player(debtor)?.properties_sorted();
        for property in owned {
            while self.board.player(debtor)?.cash() < target && self.board.property(property)?.hotels() > 0 {
                self.board.property_mut(property)?.sell_hotel()?;
                let refund = self.board.property(property)?.hotel_price() / 2;
                self.board.player_mut(debtor)?.deposit(refund);
                self.push(GameEvent::HotelSold {
                    player: debtor,
                    property,
                    refund,
                });
            }
            while self.board.player(debtor)?.cash() < target && self.board.property(property)?.houses() > 0 {
                self.board.property_mut(property)?.sell_house()?;
                let (houses, refund) = {
                    let parcel = self.board.property(property)?;
                    (parcel.houses(), parcel.house_price() / 2)
                };
                self.board.player_mut(debtor)?.deposit(refund);
                self.push(GameEvent::HouseSold {
                    player: debtor,
                    property,
                    houses,
                    refund,
                });
            }
            if self.board.player(debtor)?.cash() < target && !self.board.property(property)?.is_mortgaged() {
                self.board.property_mut(property)?.set_mortgaged(true)?;
                let credit = self.board.property(property)?.mortgage_value();
                self.board.player_mut(debtor)?.deposit(credit);
                self.push(GameEvent::Mortgaged {
                    player: debtor,
                    property,
                    credit,
                });
            }
            if self.board.player(debtor)?.cash() >= target {
                break;
            }
        }
        Ok(())
    }

    /// Remove a player: estate to the creditor (or the bank), jail-free
    /// cards included, then drop them from the turn order. Ends the game
    /// when one solvent player remains.
    fn eliminate(&mut self, player: PlayerId, creditor: Creditor) -> Result<(), GameError> {
        match creditor {
            Creditor::Player(heir) => {
                while self.board.player_mut(player)?.use_jail_free_card() {
                    self.board.player_mut(heir)?.add_jail_free_card();
                }
                self.board.transfer_properties(player, heir)?;
            }
            Creditor::Bank => {
                while self.board.player_mut(player)?.use_jail_free_card() {}
                self.board.release_properties(player)?;
            }
        }
        self.board.player_mut(player)?.mark_bankrupt();
        self.turn.remove(player);
        let heir = match creditor {
            Creditor::Player(heir) => Some(heir),
            Creditor::Bank => None,
        };
        self.push(GameEvent::Bankrupted {
            player,
            creditor: heir,
        });

        let remaining: Vec<PlayerId> = self.board.solvent_players().map(Player::id).collect();
        if remaining.len() == 1 {
            let winner = remaining[0];
            self.turn.set_phase(TurnPhase::GameOver { winner });
            self.push(GameEvent::GameEnded { winner });
        }
        Ok(())
    }

    // === Turn hand-off ===

    /// Close the turn unless a decision (or the end of the game) holds it
    /// open.
    fn finish_if_pending(&mut self, roller: PlayerId) -> Result<TurnSnapshot, GameError> {
        if matches!(
            self.turn.phase(),
            TurnPhase::AwaitingDecision { .. } | TurnPhase::GameOver { .. }
        ) {
            return Ok(self.turn_snapshot());
        }
        self.finish_turn(roller)
    }

    fn finish_turn(&mut self, roller: PlayerId) -> Result<TurnSnapshot, GameError> {
        if matches!(self.turn.phase(), TurnPhase::GameOver { .. }) {
            return Ok(self.turn_snapshot());
        }
        self.turn.set_phase(TurnPhase::TurnComplete);
        if self.turn.order().contains(&roller) {
            self.turn.advance();
        } else {
            // The roller went bankrupt this turn; removal already aimed
            // the order at the next player.
            self.turn.begin_turn();
        }
        Ok(self.turn_snapshot())
    }

    // === Shared validation ===

    fn ensure_active(&self) -> Result<(), GameError> {
        if matches!(self.turn.phase(), TurnPhase::GameOver { .. }) {
            return Err(GameError::InvalidTransition);
        }
        Ok(())
    }

    fn owner_of(&self, property: PropertyId) -> Result<PlayerId, GameError> {
        self.board
            .owner_of(property)?
            .ok_or(GameError::InvalidState(property))
    }

    /// Owner of `property`, provided the parcel sits in a color group the
    /// owner holds completely.
    fn improvable_owner(&self, property: PropertyId) -> Result<PlayerId, GameError> {
        let owner = self.owner_of(property)?;
        let group = self
            .board
            .property(property)?
            .group()
            .color()
            .ok_or(GameError::MonopolyRequired(property))?;
        if !self.board.has_monopoly(owner, group) {
            return Err(GameError::MonopolyRequired(property));
        }
        Ok(owner)
    }

    fn charge_for_improvement(&self, owner: PlayerId, price: i64) -> Result<(), GameError> {
        let available = self.board.player(owner)?.cash();
        if available < price {
            return Err(GameError::InsufficientFunds {
                required: price,
                available,
            });
        }
        Ok(())
    }

    fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }
}
