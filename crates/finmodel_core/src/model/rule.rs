//! Scheduled rules and the account-to-account rule factory

use std::fmt;

use super::recurrence::Recurrence;
use super::transaction::{Account, Transaction};
use crate::error::RuleError;
use crate::simulation::Model;

/// Rule body: reads the model mid-advance and returns the transactions to record
pub type RuleAction<A> =
    Box<dyn Fn(&Model<A>) -> Result<Vec<Transaction<A>>, RuleError> + 'static>;

/// A recurrence-gated function producing zero or more transactions each time it fires
pub struct ScheduledRule<A: Account> {
    pub recurrence: Recurrence,
    label: Option<String>,
    action: RuleAction<A>,
}

impl<A: Account> ScheduledRule<A> {
    /// Create a rule from an action that cannot fail
    pub fn new<F>(recurrence: Recurrence, action: F) -> Self
    where
        F: Fn(&Model<A>) -> Vec<Transaction<A>> + 'static,
    {
        Self {
            recurrence,
            label: None,
            action: Box::new(move |model| Ok(action(model))),
        }
    }

    /// Create a rule from an action that may fail
    ///
    /// A failure aborts the advance that fired the rule. Transactions recorded
    /// earlier in that advance are kept.
    pub fn try_new<F>(recurrence: Recurrence, action: F) -> Self
    where
        F: Fn(&Model<A>) -> Result<Vec<Transaction<A>>, RuleError> + 'static,
    {
        Self {
            recurrence,
            label: None,
            action: Box::new(action),
        }
    }

    /// Attach a name used in logs and errors
    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Run the action against the model at its current period
    pub fn evaluate(&self, model: &Model<A>) -> Result<Vec<Transaction<A>>, RuleError> {
        (self.action)(model)
    }
}

impl<A: Account> fmt::Debug for ScheduledRule<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledRule")
            .field("recurrence", &self.recurrence)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Build a rule that moves an amount derived from `credit`'s prior balance
///
/// When fired at period `P` the rule reads the balance of the *credit*
/// account as of `P - 1`, passes it to `compute_amount`, and records a single
/// transfer from `debit` to `credit` at `P`. A computed amount of exactly zero
/// records nothing.
///
/// Reading the credited account lets growth, interest and fee rules be
/// expressed as a percentage of the account they change, independent of the
/// funding account.
pub fn recurring_between_accounts<A, F>(
    recurrence: Recurrence,
    debit: A,
    credit: A,
    compute_amount: F,
) -> ScheduledRule<A>
where
    A: Account + 'static,
    F: Fn(f64) -> f64 + 'static,
{
    let label = format!("{debit} -> {credit}");
    ScheduledRule::new(recurrence, move |model: &Model<A>| {
        let period = model.current_period();
        // Nothing precedes period 0
        let prior = period
            .checked_sub(1)
            .map_or(0.0, |previous| model.balance_as_of(&credit, Some(previous)));
        let amount = compute_amount(prior);
        if amount == 0.0 {
            return Vec::new();
        }
        let memo = format!("{debit} {amount:.2} {credit}");
        vec![Transaction::new(period, debit.clone(), credit.clone(), amount).with_memo(memo)]
    })
    .labeled(label)
}
