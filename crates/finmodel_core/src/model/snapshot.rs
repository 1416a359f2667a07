//! Serializable view of a finished model
//!
//! Rules are closures and cannot be exported, so a snapshot carries only the
//! ledger and the period it was advanced to.

use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot<A> {
    pub name: String,
    pub current_period: u32,
    /// Every transaction in the order it was recorded
    pub transactions: Vec<Transaction<A>>,
}

impl<A> ModelSnapshot<A> {
    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
