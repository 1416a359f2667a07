//! Tests for retirement-provider projections
//!
//! - `provider` - Config parsing, defaults and validation
//! - `model` - Projection balances for growth and fee schedules
//! - `compare` - Ranking several providers

mod compare;

use tracing_subscriber::EnvFilter;

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("finmodel_retirement=info,finmodel_core=warn")),
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
