//! Model Builder
//!
//! Fluent construction of a [`ModelSpec`], finishing with [`ModelBuilder::build`]
//! to run the model to its horizon.

use super::ModelSpec;
use crate::error::Result;
use crate::ledger::CarryForward;
use crate::model::{Account, ScheduledRule, Transaction};
use crate::simulation::{Model, build_model};

/// Periods per year of simulated time
const PERIODS_PER_YEAR: u32 = 12;

/// Builder for assembling a model specification
pub struct ModelBuilder<A: Account> {
    spec: ModelSpec<A>,
}

impl<A: Account> ModelBuilder<A> {
    /// Create a builder for an empty model with horizon 0
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            spec: ModelSpec::new(name, Vec::new(), 0, Vec::new()),
        }
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Set the horizon in periods
    #[must_use]
    pub fn horizon(mut self, periods: u32) -> Self {
        self.spec.time_horizon = periods;
        self
    }

    /// Set the horizon in years of monthly periods
    #[must_use]
    pub fn years(self, years: u32) -> Self {
        self.horizon(years.saturating_mul(PERIODS_PER_YEAR))
    }

    /// Set the calendar date of period 0
    #[must_use]
    pub fn start_date(mut self, date: jiff::civil::Date) -> Self {
        self.spec.start_date = Some(date);
        self
    }

    /// Set the calendar date of period 0 (convenience)
    #[must_use]
    pub fn start(self, year: i16, month: i8, day: i8) -> Self {
        self.start_date(jiff::civil::date(year, month, day))
    }

    // =========================================================================
    // Ledger
    // =========================================================================

    /// Record a seed transaction
    #[must_use]
    pub fn transaction(mut self, transaction: Transaction<A>) -> Self {
        self.spec.initial_transactions.push(transaction);
        self
    }

    /// Record several seed transactions
    #[must_use]
    pub fn transactions(mut self, transactions: impl IntoIterator<Item = Transaction<A>>) -> Self {
        self.spec.initial_transactions.extend(transactions);
        self
    }

    /// Choose how balances carry across periods without activity
    #[must_use]
    pub fn carry_forward(mut self, carry_forward: CarryForward) -> Self {
        self.spec.carry_forward = carry_forward;
        self
    }

    // =========================================================================
    // Rules
    // =========================================================================

    /// Append a scheduled rule; rules fire in the order added
    #[must_use]
    pub fn rule(mut self, rule: ScheduledRule<A>) -> Self {
        self.spec.scheduled.push(rule);
        self
    }

    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = ScheduledRule<A>>) -> Self {
        self.spec.scheduled.extend(rules);
        self
    }

    // =========================================================================
    // Finish
    // =========================================================================

    /// Return the assembled specification without running it
    pub fn into_spec(self) -> ModelSpec<A> {
        self.spec
    }

    /// Build the model and run it to its horizon
    pub fn build(self) -> Result<Model<A>> {
        build_model(self.spec)
    }
}
