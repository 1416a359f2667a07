//! Model specification
//!
//! `ModelSpec` holds everything needed to build a model: a name, seed
//! transactions, the scheduled rules and the horizon to run to. Rules are
//! closures, so unlike the ledger a spec is not serializable.
//!
//! # Builder DSL
//!
//! ```ignore
//! use finmodel_core::{ModelBuilder, Recurrence, recurring_between_accounts};
//!
//! let model = ModelBuilder::new("savings")
//!     .start(2025, 1, 1)
//!     .years(10)
//!     .rule(recurring_between_accounts(Recurrence::Monthly, "Contributions", "Balance", |_| 500.0))
//!     .rule(recurring_between_accounts(Recurrence::Monthly, "Interest", "Balance", |bal| bal * 0.10 / 12.0))
//!     .build()?;
//! ```

use crate::ledger::CarryForward;
use crate::model::{Account, ScheduledRule, Transaction};

pub mod builder;

pub use builder::ModelBuilder;

/// Everything needed to build and run a model
#[derive(Debug)]
pub struct ModelSpec<A: Account> {
    pub name: String,
    /// Seed transactions, recorded before any rule fires
    pub initial_transactions: Vec<Transaction<A>>,
    /// Final period the model is advanced to
    pub time_horizon: u32,
    /// Rules fired in list order at each period
    pub scheduled: Vec<ScheduledRule<A>>,
    pub carry_forward: CarryForward,
    /// Calendar date of period 0, for reporting
    pub start_date: Option<jiff::civil::Date>,
}

impl<A: Account> ModelSpec<A> {
    pub fn new(
        name: impl Into<String>,
        initial_transactions: Vec<Transaction<A>>,
        time_horizon: u32,
        scheduled: Vec<ScheduledRule<A>>,
    ) -> Self {
        Self {
            name: name.into(),
            initial_transactions,
            time_horizon,
            scheduled,
            carry_forward: CarryForward::default(),
            start_date: None,
        }
    }
}
