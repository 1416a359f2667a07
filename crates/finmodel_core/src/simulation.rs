use std::collections::BTreeMap;

use crate::calendar::PeriodCalendar;
use crate::config::ModelSpec;
use crate::error::Result;
use crate::ledger::{self, CarryForward};
use crate::model::{Account, ModelSnapshot, ScheduledRule, Transaction};
use crate::scheduler;

/// A projection: an append-only ledger plus the rules that extend it
///
/// The model owns its transactions. Initial transactions supplied at
/// construction are moved in, so later changes by the caller cannot reach
/// the ledger.
#[derive(Debug)]
pub struct Model<A: Account> {
    pub(crate) name: String,
    pub(crate) current_period: u32,
    pub(crate) transactions: Vec<Transaction<A>>,
    pub(crate) rules: Vec<ScheduledRule<A>>,
    pub(crate) carry_forward: CarryForward,
    pub(crate) calendar: Option<PeriodCalendar>,
}

/// Build a model from `spec` and run it to the spec's time horizon
pub fn build_model<A: Account>(spec: ModelSpec<A>) -> Result<Model<A>> {
    let ModelSpec {
        name,
        initial_transactions,
        time_horizon,
        scheduled,
        carry_forward,
        start_date,
    } = spec;

    let mut model = Model {
        name,
        current_period: 0,
        transactions: initial_transactions,
        rules: scheduled,
        carry_forward,
        calendar: start_date.map(PeriodCalendar::new),
    };
    model.advance_to(time_horizon)?;
    Ok(model)
}

impl<A: Account> Model<A> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_period(&self) -> u32 {
        self.current_period
    }

    /// Every recorded transaction, in the order it was appended
    pub fn transactions(&self) -> &[Transaction<A>] {
        &self.transactions
    }

    pub fn rules(&self) -> &[ScheduledRule<A>] {
        &self.rules
    }

    pub fn carry_forward(&self) -> CarryForward {
        self.carry_forward
    }

    pub fn calendar(&self) -> Option<&PeriodCalendar> {
        self.calendar.as_ref()
    }

    /// See [`scheduler::advance_to`]
    pub fn advance_to(&mut self, target: u32) -> Result<()> {
        scheduler::advance_to(self, target)
    }

    /// Net amount posted to `account` in each period with activity
    pub fn period_totals(&self, account: &A) -> BTreeMap<u32, f64> {
        ledger::period_totals(&self.transactions, account)
    }

    /// Running balance of `account` keyed by period
    pub fn balance_by_period(&self, account: &A) -> BTreeMap<u32, f64> {
        ledger::cumulative_balances(&self.transactions, account, self.carry_forward)
    }

    /// Balance of `account` at `period`, defaulting to the current period
    pub fn balance_as_of(&self, account: &A, period: Option<u32>) -> f64 {
        ledger::balance_as_of(
            &self.transactions,
            account,
            period.unwrap_or(self.current_period),
            self.carry_forward,
        )
    }

    /// Balance of `account` at the current period
    pub fn balance(&self, account: &A) -> f64 {
        self.balance_as_of(account, None)
    }

    /// Running balance of `account` for every period up to the current one
    pub fn balance_series(&self, account: &A) -> Vec<(u32, f64)> {
        ledger::balance_series(&self.transactions, account, self.current_period)
    }

    /// Export the ledger for serialization
    pub fn snapshot(&self) -> ModelSnapshot<A> {
        ModelSnapshot {
            name: self.name.clone(),
            current_period: self.current_period,
            transactions: self.transactions.clone(),
        }
    }
}
