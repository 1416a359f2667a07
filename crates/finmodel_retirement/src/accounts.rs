use std::fmt;

use serde::{Deserialize, Serialize};

/// Ledger buckets of a retirement projection
///
/// `Balance` is the invested account. The others are external sources and
/// sinks: money arrives from `Contributions` and `Growth`, and leaves to `Fees`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RetirementAccount {
    Growth,
    Contributions,
    Balance,
    Fees,
}

impl RetirementAccount {
    pub const ALL: [RetirementAccount; 4] = [
        RetirementAccount::Growth,
        RetirementAccount::Contributions,
        RetirementAccount::Balance,
        RetirementAccount::Fees,
    ];
}

impl fmt::Display for RetirementAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RetirementAccount::Growth => "Growth",
            RetirementAccount::Contributions => "Contributions",
            RetirementAccount::Balance => "Balance",
            RetirementAccount::Fees => "Fees",
        };
        f.write_str(name)
    }
}
