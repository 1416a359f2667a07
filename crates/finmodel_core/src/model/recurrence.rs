use serde::{Deserialize, Serialize};

/// Cadence at which a scheduled rule fires
///
/// Periods are months, counted from period 0 at the start of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Monthly,
    Quarterly,
    Annually,
}

impl Recurrence {
    /// Number of periods between firings
    pub fn interval(&self) -> u32 {
        match self {
            Recurrence::Monthly => 1,
            Recurrence::Quarterly => 3,
            Recurrence::Annually => 12,
        }
    }

    /// Whether a rule with this cadence fires at `period`
    #[inline]
    pub fn fires_at(&self, period: u32) -> bool {
        period % self.interval() == 0
    }
}
