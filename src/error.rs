//! Error types for the projection engine and its collaborators

use crate::params::{RiskProfile, Scenario};
use thiserror::Error;

/// Precondition violation on simulation inputs.
///
/// The UI layer range-validates user input before calling the engine, so
/// one of these surfacing indicates a caller bug rather than a user-facing
/// condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameters {
    #[error("initial amount must be a non-negative finite number, got {0}")]
    InvalidInitialAmount(f64),

    #[error("monthly amount must be a non-negative finite number, got {0}")]
    InvalidMonthlyAmount(f64),

    #[error("horizon must be at least 1 year")]
    ZeroHorizon,

    #[error("unknown risk profile '{0}'")]
    UnknownRiskProfile(String),

    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),

    #[error("no return assumption for profile {profile:?}, scenario {scenario:?}")]
    MissingReturnRate {
        profile: RiskProfile,
        scenario: Scenario,
    },
}

/// Errors from the persistence collaborator and the assumption loader.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse stored simulations: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse assumption file: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid assumption record: {0}")]
    InvalidAssumption(String),

    #[error("no saved simulation with id {0}")]
    NotFound(uuid::Uuid),
}
