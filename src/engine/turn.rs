//! Turn sequencing: whose turn it is and where in the turn they are.
//!
//! ## Phase machine
//!
//! ```text
//! AwaitingRoll -> Rolled -> Landed -> AwaitingDecision? -> TurnComplete
//!                                               \-> GameOver
//! ```
//!
//! `Rolled`, `Landed`, and `TurnComplete` exist only inside a roll
//! command and are never observable from outside: commands always return
//! with the machine in `AwaitingRoll`, `AwaitingDecision`, or `GameOver`.

use serde::{Deserialize, Serialize};

use crate::core::{DiceRoll, PlayerId, PropertyId};

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the current player to roll.
    AwaitingRoll,
    /// Dice thrown, movement not yet applied. Internal to a roll command.
    Rolled,
    /// Movement applied, landing not yet resolved. Internal to a roll command.
    Landed,
    /// Paused on an unowned parcel for a buy-or-decline decision.
    AwaitingDecision {
        /// The parcel on offer.
        property: PropertyId,
    },
    /// Landing resolved, dice about to pass on. Internal to a roll command.
    TurnComplete,
    /// Terminal: one solvent player remains.
    GameOver {
        /// The last player standing.
        winner: PlayerId,
    },
}

/// Turn order and per-turn bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Players still in the game, in seating order.
    order: Vec<PlayerId>,
    /// Index into `order`.
    current: usize,
    phase: TurnPhase,
    /// The most recent roll of the current turn.
    last_roll: Option<DiceRoll>,
    /// A non-jailing double was rolled; the same player rolls again.
    extra_roll: bool,
    turn_number: u32,
}

impl TurnState {
    /// Start at turn 1 with the first player in `order` awaiting a roll.
    #[must_use]
    pub fn new(order: Vec<PlayerId>) -> Self {
        assert!(!order.is_empty(), "Turn order must have at least 1 player");
        Self {
            order,
            current: 0,
            phase: TurnPhase::AwaitingRoll,
            last_roll: None,
            extra_roll: false,
            turn_number: 1,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.order[self.current]
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Players still in the game, in seating order.
    #[must_use]
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    /// The most recent roll of the current turn, if any.
    #[must_use]
    pub fn last_roll(&self) -> Option<DiceRoll> {
        self.last_roll
    }

    /// 1-based count of turns started.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Whether the current player has a pending doubles re-roll.
    #[must_use]
    pub fn extra_roll(&self) -> bool {
        self.extra_roll
    }

    pub(crate) fn set_phase(&mut self, phase: TurnPhase) {
        self.phase = phase;
    }

    pub(crate) fn set_last_roll(&mut self, roll: DiceRoll) {
        self.last_roll = Some(roll);
    }

    pub(crate) fn grant_extra_roll(&mut self) {
        self.extra_roll = true;
    }

    /// Jailing cancels any pending re-roll.
    pub(crate) fn clear_extra_roll(&mut self) {
        self.extra_roll = false;
    }

    /// Hand the dice on: the same player again if a re-roll is pending,
    /// otherwise the next player in order.
    pub(crate) fn advance(&mut self) {
        if self.extra_roll {
            self.extra_roll = false;
        } else {
            self.current = (self.current + 1) % self.order.len();
        }
        self.begin_turn();
    }

    /// Open the next turn for whoever `current` points at, without moving
    /// the index. Used after the roller was eliminated, since removal
    /// already aimed `current` at the next player.
    pub(crate) fn begin_turn(&mut self) {
        self.extra_roll = false;
        self.last_roll = None;
        self.turn_number += 1;
        self.phase = TurnPhase::AwaitingRoll;
    }

    /// Drop a player from the order, keeping `current` pointed at the
    /// same player, or at the next one if the removed player was current.
    pub(crate) fn remove(&mut self, player: PlayerId) {
        let Some(index) = self.order.iter().position(|&p| p == player) else {
            return;
        };
        self.order.remove(index);
        if index < self.current {
            self.current -= 1;
        }
        if self.current >= self.order.len() && !self.order.is_empty() {
            self.current = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raws: &[u8]) -> Vec<PlayerId> {
        raws.iter().map(|&raw| PlayerId::new(raw)).collect()
    }

    #[test]
    fn test_new_starts_with_first_player() {
        let turn = TurnState::new(ids(&[0, 1, 2]));

        assert_eq!(turn.current_player(), PlayerId::new(0));
        assert_eq!(turn.phase(), TurnPhase::AwaitingRoll);
        assert_eq!(turn.turn_number(), 1);
        assert_eq!(turn.last_roll(), None);
    }

    #[test]
    fn test_advance_cycles_in_order() {
        let mut turn = TurnState::new(ids(&[0, 1, 2]));

        turn.advance();
        assert_eq!(turn.current_player(), PlayerId::new(1));
        turn.advance();
        assert_eq!(turn.current_player(), PlayerId::new(2));
        turn.advance();
        assert_eq!(turn.current_player(), PlayerId::new(0));
        assert_eq!(turn.turn_number(), 4);
    }

    #[test]
    fn test_extra_roll_repeats_player() {
        let mut turn = TurnState::new(ids(&[0, 1]));

        turn.grant_extra_roll();
        turn.advance();
        assert_eq!(turn.current_player(), PlayerId::new(0), "Re-roll keeps the turn");
        assert!(!turn.extra_roll(), "Re-roll is consumed by advancing");

        turn.advance();
        assert_eq!(turn.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_advance_clears_roll_and_resets_phase() {
        let mut turn = TurnState::new(ids(&[0, 1]));
        turn.set_last_roll(DiceRoll::of(3, 4));
        turn.set_phase(TurnPhase::TurnComplete);

        turn.advance();

        assert_eq!(turn.last_roll(), None);
        assert_eq!(turn.phase(), TurnPhase::AwaitingRoll);
    }

    #[test]
    fn test_remove_before_current() {
        let mut turn = TurnState::new(ids(&[0, 1, 2]));
        turn.advance(); // current: 1

        turn.remove(PlayerId::new(0));

        assert_eq!(turn.current_player(), PlayerId::new(1));
        assert_eq!(turn.order(), ids(&[1, 2]).as_slice());
    }

    #[test]
    fn test_remove_current_points_at_next() {
        let mut turn = TurnState::new(ids(&[0, 1, 2]));
        turn.advance(); // current: 1

        turn.remove(PlayerId::new(1));

        assert_eq!(turn.current_player(), PlayerId::new(2));
    }

    #[test]
    fn test_remove_last_wraps_to_first() {
        let mut turn = TurnState::new(ids(&[0, 1, 2]));
        turn.advance();
        turn.advance(); // current: 2

        turn.remove(PlayerId::new(2));

        assert_eq!(turn.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_remove_after_current_keeps_player() {
        let mut turn = TurnState::new(ids(&[0, 1, 2]));
        turn.advance(); // current: 1

        turn.remove(PlayerId::new(2));

        assert_eq!(turn.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_begin_turn_does_not_move_index() {
        let mut turn = TurnState::new(ids(&[0, 1, 2]));
        turn.advance(); // current: 1
        turn.remove(PlayerId::new(1)); // current now aims at 2

        turn.begin_turn();

        assert_eq!(turn.current_player(), PlayerId::new(2));
        assert_eq!(turn.turn_number(), 3);
        assert_eq!(turn.phase(), TurnPhase::AwaitingRoll);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut turn = TurnState::new(ids(&[0, 1]));
        turn.set_last_roll(DiceRoll::of(2, 2));
        turn.set_phase(TurnPhase::AwaitingDecision {
            property: PropertyId::new(5),
        });

        let json = serde_json::to_string(&turn).unwrap();
        let deserialized: TurnState = serde_json::from_str(&json).unwrap();
        assert_eq!(turn, deserialized);
    }
}
