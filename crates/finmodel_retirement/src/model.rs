//! Retirement projection model
//!
//! Every rule reads the invested balance as of the previous period. Fees are
//! recorded as negative transfers from `Fees` into `Balance` so that they too
//! are computed from the invested balance.

use finmodel_core::{
    Model, ModelBuilder, Recurrence, ScheduledRule, Transaction, recurring_between_accounts,
};

use crate::accounts::RetirementAccount::{self, Balance, Contributions, Fees, Growth};
use crate::error::Result;
use crate::provider::RetirementProvider;

fn monthly_growth(annual_growth: f64) -> ScheduledRule<RetirementAccount> {
    recurring_between_accounts(Recurrence::Monthly, Growth, Balance, move |bal| {
        bal * annual_growth / 12.0
    })
}

fn monthly_contributions(monthly_amount: f64) -> ScheduledRule<RetirementAccount> {
    recurring_between_accounts(Recurrence::Monthly, Contributions, Balance, move |_| {
        monthly_amount
    })
}

fn asset_fee(annual_rate: f64) -> ScheduledRule<RetirementAccount> {
    recurring_between_accounts(Recurrence::Quarterly, Fees, Balance, move |bal| {
        -(bal * annual_rate / 4.0)
    })
}

fn expense_ratio(annual_rate: f64) -> ScheduledRule<RetirementAccount> {
    recurring_between_accounts(Recurrence::Monthly, Fees, Balance, move |bal| {
        -(bal * annual_rate / 12.0)
    })
}

fn flat_monthly_fee(fee: f64) -> ScheduledRule<RetirementAccount> {
    recurring_between_accounts(Recurrence::Monthly, Fees, Balance, move |_| -fee)
}

/// Build and run the projection for `provider`
///
/// The first contribution is seeded at period 0; rules then run monthly for
/// `provider.years`.
pub fn retirement_provider_model(
    provider: &RetirementProvider,
) -> Result<Model<RetirementAccount>> {
    provider.validate()?;

    let mut builder = ModelBuilder::new(provider.name.clone())
        .horizon(provider.horizon())
        .transaction(Transaction::new(
            0,
            Contributions,
            Balance,
            provider.monthly_contribution,
        ))
        .rule(monthly_growth(provider.annual_growth))
        .rule(monthly_contributions(provider.monthly_contribution))
        .rule(asset_fee(provider.annual_asset_fee))
        .rule(expense_ratio(provider.annual_expense_ratio))
        .rule(flat_monthly_fee(provider.monthly_fee));

    if let Some(start) = provider.start_date {
        builder = builder.start_date(start);
    }

    tracing::debug!(
        provider = %provider.name,
        periods = provider.horizon(),
        "projecting provider"
    );
    Ok(builder.build()?)
}
