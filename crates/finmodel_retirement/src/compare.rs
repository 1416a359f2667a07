use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::accounts::RetirementAccount;
use crate::error::Result;
use crate::model::retirement_provider_model;
use crate::provider::RetirementProvider;

/// Summary of one provider's finished projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderOutcome {
    pub name: String,
    pub ending_balance: f64,
    pub total_contributions: f64,
    pub total_growth: f64,
    pub total_fees: f64,
    /// Calendar date of the final period, when the provider has a start date
    pub end_date: Option<jiff::civil::Date>,
}

impl ProviderOutcome {
    /// Project `provider` and summarize the result
    pub fn project(provider: &RetirementProvider) -> Result<Self> {
        let model = retirement_provider_model(provider)?;

        Ok(Self {
            name: provider.name.clone(),
            ending_balance: model.balance(&RetirementAccount::Balance),
            total_contributions: -model.balance(&RetirementAccount::Contributions),
            total_growth: -model.balance(&RetirementAccount::Growth),
            total_fees: model.balance(&RetirementAccount::Fees),
            end_date: model
                .calendar()
                .map(|calendar| calendar.date_of(model.current_period())),
        })
    }
}

/// Project every provider and rank them by ending balance, highest first
pub fn compare_providers(providers: &[RetirementProvider]) -> Result<Vec<ProviderOutcome>> {
    tracing::info!(providers = providers.len(), "comparing retirement providers");

    #[cfg(feature = "parallel")]
    let outcomes: Result<Vec<ProviderOutcome>> =
        providers.par_iter().map(ProviderOutcome::project).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Result<Vec<ProviderOutcome>> =
        providers.iter().map(ProviderOutcome::project).collect();

    let mut outcomes = outcomes?;
    outcomes.sort_by(|a, b| b.ending_balance.total_cmp(&a.ending_balance));

    if let Some(best) = outcomes.first() {
        tracing::info!(
            provider = %best.name,
            ending_balance = best.ending_balance,
            "best provider"
        );
    }
    Ok(outcomes)
}
