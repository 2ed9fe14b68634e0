//! Projection output structures

use crate::params::SimulationParams;
use serde::{Deserialize, Serialize};

/// One year of projection output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationYear {
    /// Year index, 1-based, chronological
    pub year: u32,

    /// Contributions made during this year
    pub deposits: f64,

    /// Principal contributed through end of year, including the initial lump sum
    pub cumulative_deposits: f64,

    /// Growth accrued during this year alone
    pub gains: f64,

    /// Total growth through end of year
    pub cumulative_gains: f64,

    /// Account value at end of year (= cumulative_deposits + cumulative_gains)
    pub total_value: f64,
}

/// Complete projection result
///
/// A pure function of its `params`: no id, no timestamp. Those are stamped
/// by the persistence collaborator when a simulation is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Echo of the inputs that produced this result
    pub params: SimulationParams,

    /// Account value at the end of the horizon
    pub final_value: f64,

    /// Total principal contributed (initial + all monthly deposits)
    pub total_deposits: f64,

    /// Total investment growth (= final_value - total_deposits)
    pub total_gains: f64,

    /// Annual rate used, as a percentage (5% -> 5.0)
    pub annualized_return: f64,

    /// Year-by-year trajectory, year 1 first, length = horizon_years
    pub year_by_year: Vec<SimulationYear>,
}

impl SimulationResult {
    /// Headline KPI scalars for summary cards
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            horizon_years: self.year_by_year.len() as u32,
            final_value: self.final_value,
            total_deposits: self.total_deposits,
            total_gains: self.total_gains,
            annualized_return: self.annualized_return,
        }
    }

    /// Copy with all monetary amounts rounded to cents
    ///
    /// Rounding is applied uniformly to deposits, gains, and totals so the
    /// value = deposits + gains identity survives within a cent. Used by the
    /// persistence layer; the engine itself never rounds mid-computation.
    pub fn rounded_to_cents(&self) -> Self {
        Self {
            params: self.params.clone(),
            final_value: round2(self.final_value),
            total_deposits: round2(self.total_deposits),
            total_gains: round2(self.total_gains),
            annualized_return: self.annualized_return,
            year_by_year: self
                .year_by_year
                .iter()
                .map(|y| SimulationYear {
                    year: y.year,
                    deposits: round2(y.deposits),
                    cumulative_deposits: round2(y.cumulative_deposits),
                    gains: round2(y.gains),
                    cumulative_gains: round2(y.cumulative_gains),
                    total_value: round2(y.total_value),
                })
                .collect(),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub horizon_years: u32,
    pub final_value: f64,
    pub total_deposits: f64,
    pub total_gains: f64,
    pub annualized_return: f64,
}

fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
