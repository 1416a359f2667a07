//! Retirement provider configuration
//!
//! Providers are plain serde data so they can be read from JSON. Every field
//! except `name` has a default; rates are annual fractions (0.07 = 7%).
//!
//! ```json
//! {
//!   "name": "Low-cost index",
//!   "monthly_contribution": 500.0,
//!   "annual_growth": 0.07,
//!   "annual_expense_ratio": 0.0004
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, RetirementError};

fn default_years() -> u32 {
    30
}

/// Contribution, growth and fee schedule of one retirement provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementProvider {
    pub name: String,

    /// Deposited at period 0 and every month after
    #[serde(default)]
    pub monthly_contribution: f64,

    /// Expected annual return, accrued monthly on the prior balance
    #[serde(default)]
    pub annual_growth: f64,

    /// Annual fee on assets, charged quarterly on the prior balance
    #[serde(default)]
    pub annual_asset_fee: f64,

    /// Annual fund expense ratio, charged monthly on the prior balance
    #[serde(default)]
    pub annual_expense_ratio: f64,

    /// Flat account fee charged every month
    #[serde(default)]
    pub monthly_fee: f64,

    /// Length of the projection
    #[serde(default = "default_years")]
    pub years: u32,

    /// Calendar date of the first contribution
    #[serde(default)]
    pub start_date: Option<jiff::civil::Date>,
}

impl RetirementProvider {
    /// Provider with no contributions, growth or fees over the default term
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            monthly_contribution: 0.0,
            annual_growth: 0.0,
            annual_asset_fee: 0.0,
            annual_expense_ratio: 0.0,
            monthly_fee: 0.0,
            years: default_years(),
            start_date: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let provider: Self = serde_json::from_str(json)?;
        provider.validate()?;
        Ok(provider)
    }

    /// Parse a JSON array of providers
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let providers: Vec<Self> = serde_json::from_str(json)?;
        for provider in &providers {
            provider.validate()?;
        }
        Ok(providers)
    }

    /// Number of monthly periods the projection runs for
    pub fn horizon(&self) -> u32 {
        self.years.saturating_mul(12)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name must not be empty"));
        }
        if self.years == 0 {
            return Err(self.invalid("years must be at least 1"));
        }

        let amounts = [
            ("monthly_contribution", self.monthly_contribution),
            ("annual_growth", self.annual_growth),
            ("annual_asset_fee", self.annual_asset_fee),
            ("annual_expense_ratio", self.annual_expense_ratio),
            ("monthly_fee", self.monthly_fee),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(
                    self.invalid(format!("{field} must be a non-negative number, got {value}"))
                );
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> RetirementError {
        RetirementError::InvalidConfig {
            provider: self.name.clone(),
            reason: reason.into(),
        }
    }
}
