//! Simulation input structures matching the Club Invest simulator format

use crate::error::InvalidParameters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Risk profile chosen by the saver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    /// Balanced allocation, 5% average annual return
    Tempere,
    /// Equity-heavy allocation, 8% average annual return
    Audacieux,
}

impl RiskProfile {
    /// All profiles, in display order
    pub const ALL: [RiskProfile; 2] = [RiskProfile::Tempere, RiskProfile::Audacieux];

    /// Wire string used by the simulator UI and assumption files
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Tempere => "tempere",
            RiskProfile::Audacieux => "audacieux",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = InvalidParameters;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tempere" => Ok(RiskProfile::Tempere),
            "audacieux" => Ok(RiskProfile::Audacieux),
            other => Err(InvalidParameters::UnknownRiskProfile(other.to_string())),
        }
    }
}

/// Market scenario applied to the chosen risk profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Pessimiste,
    Moyen,
    Optimiste,
}

impl Scenario {
    /// All scenarios, pessimiste first (the order the result page compares them in)
    pub const ALL: [Scenario; 3] = [Scenario::Pessimiste, Scenario::Moyen, Scenario::Optimiste];

    /// Wire string used by the simulator UI and assumption files
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Pessimiste => "pessimiste",
            Scenario::Moyen => "moyen",
            Scenario::Optimiste => "optimiste",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = InvalidParameters;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pessimiste" => Ok(Scenario::Pessimiste),
            "moyen" => Ok(Scenario::Moyen),
            "optimiste" => Ok(Scenario::Optimiste),
            other => Err(InvalidParameters::UnknownScenario(other.to_string())),
        }
    }
}

/// Inputs for one projection run
///
/// Constructed by the caller from slider/select values, passed once into the
/// engine, then discarded. No identity, no mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    /// Lump sum invested at time zero
    pub initial_amount: f64,

    /// Amount contributed at the start of every month
    pub monthly_amount: f64,

    /// Projection duration in whole years
    pub horizon_years: u32,

    /// Risk profile selecting the return assumption row
    pub risk_profile: RiskProfile,

    /// Scenario selecting which of the three annual rates applies
    pub scenario: Scenario,
}

impl SimulationParams {
    pub fn new(
        initial_amount: f64,
        monthly_amount: f64,
        horizon_years: u32,
        risk_profile: RiskProfile,
        scenario: Scenario,
    ) -> Self {
        Self {
            initial_amount,
            monthly_amount,
            horizon_years,
            risk_profile,
            scenario,
        }
    }

    /// Check engine preconditions
    ///
    /// Amounts must be finite and non-negative, the horizon at least one
    /// year. Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), InvalidParameters> {
        if !self.initial_amount.is_finite() || self.initial_amount < 0.0 {
            return Err(InvalidParameters::InvalidInitialAmount(self.initial_amount));
        }
        if !self.monthly_amount.is_finite() || self.monthly_amount < 0.0 {
            return Err(InvalidParameters::InvalidMonthlyAmount(self.monthly_amount));
        }
        if self.horizon_years == 0 {
            return Err(InvalidParameters::ZeroHorizon);
        }
        Ok(())
    }

    /// Total principal contributed over the full horizon, excluding growth
    pub fn total_planned_deposits(&self) -> f64 {
        self.initial_amount + self.monthly_amount * 12.0 * self.horizon_years as f64
    }
}
