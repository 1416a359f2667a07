use thiserror::Error;

/// Boxed error produced by a user-supplied rule action
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure raised from inside a rule action
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RuleError {
    message: String,
    #[source]
    source: Option<BoxedSource>,
}

impl RuleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while building or advancing a model
#[derive(Debug, Error)]
pub enum ModelError {
    /// The target period lies before the model's current period
    #[error("cannot simulate backwards from period {current} to period {target}")]
    SimulateBackwards { current: u32, target: u32 },

    /// A rule action failed; transactions applied before the failure remain
    #[error("rule {rule} failed at period {period}: {source}")]
    Rule {
        period: u32,
        rule: String,
        #[source]
        source: RuleError,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
