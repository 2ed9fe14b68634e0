//! Scenario runner for what-if batches
//!
//! Pre-loads the return-rate table once, then allows running many
//! projections without re-reading the assumption CSV. Recomputation is
//! synchronous and cheap, so UI callers are expected to re-run on demand
//! rather than keep background work around.

use crate::assumptions::ReturnRateTable;
use crate::error::{InvalidParameters, StorageError};
use crate::params::{Scenario, SimulationParams};
use crate::projection::{ProjectionEngine, SimulationResult};

/// Pre-loaded scenario runner
///
/// # Example
/// ```
/// use club_invest_projection::{ScenarioRunner, SimulationParams};
/// use club_invest_projection::params::{RiskProfile, Scenario};
///
/// let runner = ScenarioRunner::new();
/// let params = SimulationParams::new(10_000.0, 200.0, 10, RiskProfile::Tempere, Scenario::Moyen);
/// let results = runner.run_scenarios(&params).unwrap();
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default in-memory pricing table
    pub fn new() -> Self {
        Self::with_rates(ReturnRateTable::default_pricing())
    }

    /// Create runner by loading the rate table from the default CSV location
    pub fn from_csv() -> Result<Self, StorageError> {
        Ok(Self::with_rates(ReturnRateTable::from_csv()?))
    }

    /// Create runner by loading the rate table from a specific directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, StorageError> {
        Ok(Self::with_rates(ReturnRateTable::from_csv_path(path)?))
    }

    /// Create runner with a pre-built table
    pub fn with_rates(rates: ReturnRateTable) -> Self {
        Self {
            engine: ProjectionEngine::new(rates),
        }
    }

    /// Run a single projection
    pub fn run(&self, params: &SimulationParams) -> Result<SimulationResult, InvalidParameters> {
        self.engine.project(params)
    }

    /// Run projections for multiple parameter sets
    ///
    /// Fails on the first invalid set: callers get all results or none.
    pub fn run_batch(
        &self,
        batch: &[SimulationParams],
    ) -> Result<Vec<SimulationResult>, InvalidParameters> {
        batch.iter().map(|params| self.engine.project(params)).collect()
    }

    /// Project the same inputs under all three scenarios for the chosen
    /// profile, pessimiste/moyen/optimiste ordered
    pub fn run_scenarios(
        &self,
        base: &SimulationParams,
    ) -> Result<Vec<SimulationResult>, InvalidParameters> {
        Scenario::ALL
            .iter()
            .map(|&scenario| {
                let params = SimulationParams {
                    scenario,
                    ..base.clone()
                };
                self.engine.project(&params)
            })
            .collect()
    }

    /// Get reference to the rate table for inspection
    pub fn rates(&self) -> &ReturnRateTable {
        self.engine.rates()
    }

    /// Get mutable reference to the rate table for customization
    pub fn rates_mut(&mut self) -> &mut ReturnRateTable {
        self.engine.rates_mut()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RiskProfile;

    fn base_params() -> SimulationParams {
        SimulationParams::new(10_000.0, 200.0, 10, RiskProfile::Tempere, Scenario::Moyen)
    }

    #[test]
    fn test_run_scenarios_ordering_and_spread() {
        let runner = ScenarioRunner::new();
        let results = runner.run_scenarios(&base_params()).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].params.scenario, Scenario::Pessimiste);
        assert_eq!(results[1].params.scenario, Scenario::Moyen);
        assert_eq!(results[2].params.scenario, Scenario::Optimiste);

        // A better scenario must end higher
        assert!(results[0].final_value < results[1].final_value);
        assert!(results[1].final_value < results[2].final_value);

        // Deposits are scenario-independent
        assert_eq!(results[0].total_deposits, results[2].total_deposits);
    }

    #[test]
    fn test_run_batch_is_atomic() {
        let runner = ScenarioRunner::new();
        let mut bad = base_params();
        bad.horizon_years = 0;

        let batch = vec![base_params(), bad];
        assert!(runner.run_batch(&batch).is_err());

        let good = vec![base_params(), base_params()];
        let results = runner.run_batch(&good).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], results[1]);
    }

    #[test]
    fn test_custom_rates_flow_through() {
        let mut runner = ScenarioRunner::new();
        runner.rates_mut().set(RiskProfile::Tempere, Scenario::Moyen, 0.0);

        let result = runner.run(&base_params()).unwrap();
        assert_eq!(result.annualized_return, 0.0);
        // Zero rate: final value is exactly the principal
        assert!((result.final_value - result.total_deposits).abs() < 1e-9);
    }
}
