//! Ledger records and the account identifier bound
//!
//! Accounts are caller-defined: a string label, an enum, a newtype id. The
//! engine only compares them for equality and renders them in memos.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Any identifier usable as a ledger bucket
pub trait Account: Clone + PartialEq + fmt::Debug + fmt::Display {}

impl<T> Account for T where T: Clone + PartialEq + fmt::Debug + fmt::Display {}

/// A transfer of `amount` out of `debit` and into `credit`, effective at `period`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction<A> {
    pub period: u32,
    pub debit: A,
    pub credit: A,
    pub amount: f64,
    /// Human-readable description of the transfer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl<A: Account> Transaction<A> {
    pub fn new(period: u32, debit: A, credit: A, amount: f64) -> Self {
        Self {
            period,
            debit,
            credit,
            amount,
            memo: None,
        }
    }

    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Net effect of this transaction on `account`
    ///
    /// Positive when the account is credited, negative when debited, and zero
    /// for transfers between an account and itself.
    pub fn net_for(&self, account: &A) -> f64 {
        let mut net = 0.0;
        if self.credit == *account {
            net += self.amount;
        }
        if self.debit == *account {
            net -= self.amount;
        }
        net
    }

    /// Whether this transaction touches `account` on either side
    pub fn involves(&self, account: &A) -> bool {
        self.credit == *account || self.debit == *account
    }
}

impl<A: Account> fmt::Display for Transaction<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.memo {
            Some(memo) => write!(f, "[{}] {memo}", self.period),
            None => write!(
                f,
                "[{}] {} {:.2} {}",
                self.period, self.debit, self.amount, self.credit
            ),
        }
    }
}
