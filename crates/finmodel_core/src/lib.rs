//! Discrete-time financial projection library
//!
//! This crate provides a small period-by-period simulation engine. A model
//! holds an append-only ledger of transactions between caller-defined
//! accounts and a list of scheduled rules. Advancing the model fires the
//! rules on their cadence (monthly, quarterly, annually) and records the
//! transactions they produce. Balances are always derived from the ledger.
//!
//! # Builder DSL
//!
//! ```ignore
//! use finmodel_core::{ModelBuilder, Recurrence, recurring_between_accounts};
//!
//! let model = ModelBuilder::new("savings")
//!     .rule(recurring_between_accounts(
//!         Recurrence::Monthly,
//!         "Contributions",
//!         "Balance",
//!         |_| 500.0,
//!     ))
//!     .years(10)
//!     .build()?;
//!
//! assert!((model.balance(&"Balance") - 60_000.0).abs() < 0.01);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod calendar;
pub mod error;
pub mod ledger;
pub mod scheduler;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use calendar::PeriodCalendar;
pub use config::{ModelBuilder, ModelSpec};
pub use error::{ModelError, RuleError};
pub use ledger::{CarryForward, cumulative_balances, period_totals};
pub use model::{
    Account, ModelSnapshot, Recurrence, ScheduledRule, Transaction, recurring_between_accounts,
};
pub use scheduler::advance_to;
pub use simulation::{Model, build_model};
