use lol_html::errors::RewritingError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid container tag `{0}` (allowed: [A-Za-z0-9_]+)")]
    InvalidContainerTag(String),

    #[error("stagger step must be a positive number of seconds, got {0}")]
    InvalidStep(f64),

    #[error("initial delay must be a non-negative number of seconds, got {0}")]
    InvalidInitialDelay(f64),

    #[error("delay precision {0} is too large (max {max})", max = crate::config::MAX_PRECISION)]
    PrecisionTooLarge(usize),

    #[error("word style must not contain `\"`: {0}")]
    InvalidWordStyle(String),

    #[error("title selection needs at least one class")]
    EmptySelection,

    #[error("invalid selector class `{0}`")]
    InvalidClass(String),
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to rewrite page: {0}")]
    Rewrite(#[from] RewritingError),
}
