//! Balance accounting over a transaction ledger
//!
//! Nothing here caches a balance. Every query walks the ledger, so the
//! results always reflect the transactions recorded so far.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Account, Transaction};

/// How running balances are carried from one period to the next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarryForward {
    /// Walk every integer period from 0 to the last recorded one, so periods
    /// without activity still hold the running balance.
    #[default]
    Contiguous,
    /// Walk only periods with recorded activity and carry from `period - 1`
    /// alone. A gap in activity drops the balance accumulated before it.
    Sparse,
}

/// Net amount posted to `account` in each period with activity
///
/// Credits add, debits subtract. A transaction whose debit and credit are
/// both `account` still creates an entry for its period, netting to zero.
pub fn period_totals<A: Account>(
    transactions: &[Transaction<A>],
    account: &A,
) -> BTreeMap<u32, f64> {
    let mut totals = BTreeMap::new();
    for tx in transactions {
        if !tx.involves(account) {
            continue;
        }
        *totals.entry(tx.period).or_insert(0.0) += tx.net_for(account);
    }
    totals
}

/// Running balance of `account` keyed by period
pub fn cumulative_balances<A: Account>(
    transactions: &[Transaction<A>],
    account: &A,
    carry_forward: CarryForward,
) -> BTreeMap<u32, f64> {
    let totals = period_totals(transactions, account);
    match carry_forward {
        CarryForward::Contiguous => accumulate_contiguous(&totals),
        CarryForward::Sparse => accumulate_sparse(totals),
    }
}

/// Balance of `account` at the end of `period`
///
/// Contiguous lookups sum the period totals up to `period` directly, so the
/// cost depends on recorded activity rather than on how far apart periods are.
pub fn balance_as_of<A: Account>(
    transactions: &[Transaction<A>],
    account: &A,
    period: u32,
    carry_forward: CarryForward,
) -> f64 {
    match carry_forward {
        CarryForward::Contiguous => period_totals(transactions, account)
            .range(..=period)
            .fold(0.0, |balance, (_, total)| balance + total),
        CarryForward::Sparse => cumulative_balances(transactions, account, carry_forward)
            .get(&period)
            .copied()
            .unwrap_or(0.0),
    }
}

/// Running balance for every period in `0..=through`
pub fn balance_series<A: Account>(
    transactions: &[Transaction<A>],
    account: &A,
    through: u32,
) -> Vec<(u32, f64)> {
    let totals = period_totals(transactions, account);
    running_totals(&totals, through).collect()
}

fn running_totals(
    totals: &BTreeMap<u32, f64>,
    through: u32,
) -> impl Iterator<Item = (u32, f64)> + '_ {
    let mut running = 0.0;
    (0..=through).map(move |period| {
        running += totals.get(&period).copied().unwrap_or(0.0);
        (period, running)
    })
}

fn accumulate_contiguous(totals: &BTreeMap<u32, f64>) -> BTreeMap<u32, f64> {
    match totals.keys().next_back() {
        Some(&last) => running_totals(totals, last).collect(),
        None => BTreeMap::new(),
    }
}

fn accumulate_sparse(mut balances: BTreeMap<u32, f64>) -> BTreeMap<u32, f64> {
    let periods: Vec<u32> = balances.keys().copied().collect();
    for period in periods {
        if period == 0 {
            continue;
        }
        let carried = balances.get(&(period - 1)).copied().unwrap_or(0.0);
        if let Some(balance) = balances.get_mut(&period) {
            *balance += carried;
        }
    }
    balances
}
