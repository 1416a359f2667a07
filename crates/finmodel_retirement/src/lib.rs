//! Retirement-provider projections built on `finmodel_core`
//!
//! Each provider is described by its contribution, growth and fee schedule.
//! [`retirement_provider_model`] turns one into a finished projection, and
//! [`compare_providers`] ranks several by the balance they end with.
//!
//! ```ignore
//! use finmodel_retirement::{RetirementProvider, compare_providers};
//!
//! let providers = RetirementProvider::list_from_json(r#"[
//!     { "name": "Index", "monthly_contribution": 500.0, "annual_growth": 0.07 },
//!     { "name": "Managed", "monthly_contribution": 500.0, "annual_growth": 0.07, "annual_asset_fee": 0.01 }
//! ]"#)?;
//! for outcome in compare_providers(&providers)? {
//!     println!("{}: {:.2}", outcome.name, outcome.ending_balance);
//! }
//! ```

#![warn(clippy::all)]

pub mod accounts;
pub mod compare;
pub mod error;
pub mod model;
pub mod provider;

#[cfg(test)]
mod tests;

pub use accounts::RetirementAccount;
pub use compare::{ProviderOutcome, compare_providers};
pub use error::RetirementError;
pub use model::retirement_provider_model;
pub use provider::RetirementProvider;
