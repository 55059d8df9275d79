//! Game configuration.
//!
//! The engine never hardcodes economic constants into its rules logic;
//! construction takes a `GameConfig` so house rules and tests can vary
//! amounts without touching the state machine.

use serde::{Deserialize, Serialize};

/// Economic and house-rule configuration for one game.
///
/// `Default` gives the classic values. Builder setters allow overrides:
///
/// ```
/// use monopoly_engine::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_starting_cash(2000)
///     .with_free_parking_pot(true);
///
/// assert_eq!(config.starting_cash, 2000);
/// assert_eq!(config.salary, 200);
/// assert!(config.free_parking_pot);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cash each player starts with.
    pub starting_cash: i64,

    /// Amount credited for passing (or landing on) Go.
    pub salary: i64,

    /// Fine paid to leave jail after the third failed escape roll.
    pub jail_fine: i64,

    /// House rule: taxes and card fines accumulate in a pot collected by
    /// whoever lands on Free Parking. Off by default.
    pub free_parking_pot: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_cash: 1500,
            salary: 200,
            jail_fine: 50,
            free_parking_pot: false,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the classic values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting cash.
    #[must_use]
    pub fn with_starting_cash(mut self, amount: i64) -> Self {
        assert!(amount >= 0, "Starting cash must be non-negative");
        self.starting_cash = amount;
        self
    }

    /// Set the Go salary.
    #[must_use]
    pub fn with_salary(mut self, amount: i64) -> Self {
        assert!(amount >= 0, "Salary must be non-negative");
        self.salary = amount;
        self
    }

    /// Set the jail fine.
    #[must_use]
    pub fn with_jail_fine(mut self, amount: i64) -> Self {
        assert!(amount >= 0, "Jail fine must be non-negative");
        self.jail_fine = amount;
        self
    }

    /// Enable or disable the Free Parking pot house rule.
    #[must_use]
    pub fn with_free_parking_pot(mut self, enabled: bool) -> Self {
        self.free_parking_pot = enabled;
        self
    }
}
