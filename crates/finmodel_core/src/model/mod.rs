mod recurrence;
mod rule;
mod snapshot;
mod transaction;

pub use recurrence::Recurrence;
pub use rule::{RuleAction, ScheduledRule, recurring_between_accounts};
pub use snapshot::ModelSnapshot;
pub use transaction::{Account, Transaction};
