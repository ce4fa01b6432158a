//! Error types for the tutor crate.

use braille_rules::RulesError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by sessions and the tutor.
#[derive(Debug, Error)]
pub enum TutorError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("the current round is not complete yet")]
    RoundInProgress,

    #[error("no training session is running")]
    NotTraining,

    #[error("failed to serialize session snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
