use super::{assert_close, init_tracing};
use crate::compare::{ProviderOutcome, compare_providers};
use crate::provider::RetirementProvider;

fn providers() -> Vec<RetirementProvider> {
    vec![
        RetirementProvider {
            monthly_contribution: 500.0,
            annual_growth: 0.07,
            annual_asset_fee: 0.01,
            annual_expense_ratio: 0.001,
            monthly_fee: 5.0,
            ..RetirementProvider::new("Full service")
        },
        RetirementProvider {
            monthly_contribution: 500.0,
            annual_growth: 0.07,
            ..RetirementProvider::new("Index")
        },
        RetirementProvider {
            monthly_contribution: 500.0,
            ..RetirementProvider::new("Mattress")
        },
    ]
}

#[test]
fn test_compare_ranks_by_ending_balance() {
    init_tracing();
    let outcomes = compare_providers(&providers()).unwrap();

    let names: Vec<&str> = outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Index", "Full service", "Mattress"]);

    assert_close(outcomes[0].ending_balance, 614_043.75, 0.01);
    assert_close(outcomes[1].total_fees, 60_425.17, 0.01);
    assert_close(outcomes[2].ending_balance, 180_500.0, 1e-6);
    assert_eq!(outcomes[2].total_growth, 0.0);
    assert!(outcomes.iter().all(|o| o.end_date.is_none()));
}

#[test]
fn test_outcome_accounts_for_every_dollar() {
    let outcome = ProviderOutcome::project(&providers()[0]).unwrap();
    assert_close(outcome.total_contributions, 180_500.0, 1e-6);
    assert_close(
        outcome.ending_balance,
        outcome.total_contributions + outcome.total_growth - outcome.total_fees,
        1e-4,
    );
}

#[test]
fn test_compare_fails_on_any_invalid_provider() {
    let mut list = providers();
    list[1].years = 0;
    assert!(compare_providers(&list).is_err());
}

#[test]
fn test_compare_empty() {
    assert!(compare_providers(&[]).unwrap().is_empty());
}

#[test]
fn test_outcome_serializes() {
    let outcome = ProviderOutcome::project(&RetirementProvider {
        years: 1,
        monthly_contribution: 10.0,
        start_date: Some(jiff::civil::date(2025, 1, 1)),
        ..RetirementProvider::new("Json")
    })
    .unwrap();

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["name"], "Json");
    assert_eq!(value["end_date"], "2026-01-01");
    assert_eq!(value["ending_balance"], 130.0);
}
