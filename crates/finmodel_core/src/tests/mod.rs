//! Tests for the finmodel projection engine
//!
//! Tests are organized by topic:
//! - `ledger` - Period totals and carry-forward accumulation
//! - `scheduler` - Advancing, recurrence gating and rule failures
//! - `scenarios` - End-to-end savings projections
//! - `builder_dsl` - Builder DSL and snapshot export
//! - `calendar` - Period to date mapping

mod calendar;

use std::fmt;

use tracing_subscriber::EnvFilter;

/// Accounts used throughout the engine tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Acct {
    Contributions,
    Balance,
    Interest,
}

impl fmt::Display for Acct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Acct::Contributions => "Contributions",
            Acct::Balance => "Balance",
            Acct::Interest => "Interest",
        };
        f.write_str(name)
    }
}

/// Route engine logs to the test harness; honours `RUST_LOG`
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("finmodel_core=warn")),
        )
        .with_test_writer()
        .try_init();
}

pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "Expected {expected:.4}, got {actual:.4}"
    );
}
