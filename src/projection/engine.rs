//! Core projection engine for monthly-compounded growth trajectories
//!
//! One canonical compounding convention, used everywhere:
//!
//! - the annual rate is converted to a monthly rate geometrically,
//!   `(1 + r_annual)^(1/12) - 1`, so twelve months of compounding reproduce
//!   the annual rate exactly (a simple `r_annual / 12` does not);
//! - each month the contribution is added before growth is applied, so a
//!   deposit earns a full month of growth starting immediately
//!   (invest-then-grow).

use crate::assumptions::ReturnRateTable;
use crate::error::InvalidParameters;
use crate::params::SimulationParams;

use super::result::{SimulationResult, SimulationYear};

/// Main projection engine
///
/// Stateless apart from the injected rate table; `project` is a pure
/// function of its inputs and may be called concurrently.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    rates: ReturnRateTable,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given return assumptions
    pub fn new(rates: ReturnRateTable) -> Self {
        Self { rates }
    }

    /// Reference to the injected rate table
    pub fn rates(&self) -> &ReturnRateTable {
        &self.rates
    }

    /// Mutable reference to the rate table for recalibration
    pub fn rates_mut(&mut self) -> &mut ReturnRateTable {
        &mut self.rates
    }

    /// Project the account-value trajectory for the given inputs
    ///
    /// Returns one [`SimulationYear`] per horizon year, with the
    /// principal/gains decomposition satisfying
    /// `total_value == cumulative_deposits + cumulative_gains` for every
    /// year. Fails atomically on any precondition violation.
    pub fn project(&self, params: &SimulationParams) -> Result<SimulationResult, InvalidParameters> {
        params.validate()?;

        let annual_return = self
            .rates
            .get(params.risk_profile, params.scenario)
            .ok_or(InvalidParameters::MissingReturnRate {
                profile: params.risk_profile,
                scenario: params.scenario,
            })?;

        let monthly_return = (1.0 + annual_return).powf(1.0 / 12.0) - 1.0;

        let mut year_by_year = Vec::with_capacity(params.horizon_years as usize);
        let mut total_value = params.initial_amount;
        let mut cumulative_deposits = params.initial_amount;

        for year in 1..=params.horizon_years {
            let start_value = total_value;

            for _month in 1..=12 {
                total_value += params.monthly_amount;
                total_value *= 1.0 + monthly_return;
            }

            let year_deposits = params.monthly_amount * 12.0;
            cumulative_deposits += year_deposits;

            // Back-computed from current state rather than accumulated, so
            // the value = deposits + gains identity holds exactly under f64.
            let year_gains = total_value - start_value - year_deposits;
            let cumulative_gains = total_value - cumulative_deposits;

            year_by_year.push(SimulationYear {
                year,
                deposits: year_deposits,
                cumulative_deposits,
                gains: year_gains,
                cumulative_gains,
                total_value,
            });
        }

        Ok(SimulationResult {
            params: params.clone(),
            final_value: total_value,
            total_deposits: cumulative_deposits,
            total_gains: total_value - cumulative_deposits,
            annualized_return: annual_return * 100.0,
            year_by_year,
        })
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(ReturnRateTable::default_pricing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{RiskProfile, Scenario};
    use approx::assert_relative_eq;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::default()
    }

    fn base_params() -> SimulationParams {
        SimulationParams::new(10_000.0, 200.0, 10, RiskProfile::Tempere, Scenario::Moyen)
    }

    #[test]
    fn test_projection_runs_full_horizon() {
        let result = engine().project(&base_params()).unwrap();

        assert_eq!(result.year_by_year.len(), 10);
        assert_eq!(result.year_by_year[0].year, 1);
        assert_eq!(result.year_by_year[9].year, 10);
        assert_eq!(result.final_value, result.year_by_year[9].total_value);
        assert_eq!(result.annualized_return, 5.0);
    }

    #[test]
    fn test_determinism() {
        let first = engine().project(&base_params()).unwrap();
        let second = engine().project(&base_params()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_value_decomposition_identity() {
        let result = engine().project(&base_params()).unwrap();

        for year in &result.year_by_year {
            assert_relative_eq!(
                year.total_value,
                year.cumulative_deposits + year.cumulative_gains,
                max_relative = 1e-6
            );
        }
        assert_relative_eq!(
            result.final_value,
            result.total_deposits + result.total_gains,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_deposit_accounting_is_exact() {
        let result = engine().project(&base_params()).unwrap();

        for year in &result.year_by_year {
            assert_eq!(year.deposits, 2_400.0);
            assert_eq!(
                year.cumulative_deposits,
                10_000.0 + 2_400.0 * year.year as f64
            );
        }
        assert_eq!(result.total_deposits, 34_000.0);
    }

    #[test]
    fn test_monotonicity() {
        let result = engine().project(&base_params()).unwrap();

        let mut prev_deposits = 0.0;
        let mut prev_value = 0.0;
        for year in &result.year_by_year {
            assert!(year.cumulative_deposits >= prev_deposits);
            assert!(year.total_value > prev_value, "value not strictly increasing at year {}", year.year);
            prev_deposits = year.cumulative_deposits;
            prev_value = year.total_value;
        }
    }

    #[test]
    fn test_lump_sum_degenerates_to_annual_compounding() {
        let params = SimulationParams::new(10_000.0, 0.0, 30, RiskProfile::Tempere, Scenario::Moyen);
        let result = engine().project(&params).unwrap();

        for year in &result.year_by_year {
            assert_relative_eq!(
                year.total_value,
                10_000.0 * 1.05_f64.powi(year.year as i32),
                max_relative = 1e-9
            );
            assert_eq!(year.deposits, 0.0);
            assert_eq!(year.cumulative_deposits, 10_000.0);
        }
    }

    #[test]
    fn test_monthly_rate_reproduces_annual_rate() {
        // 1 euro, no contributions, one year: growth must be exactly the
        // annual rate, proving the geometric monthly conversion.
        for (profile, scenario, rate) in [
            (RiskProfile::Tempere, Scenario::Pessimiste, 0.02),
            (RiskProfile::Tempere, Scenario::Moyen, 0.05),
            (RiskProfile::Tempere, Scenario::Optimiste, 0.07),
            (RiskProfile::Audacieux, Scenario::Pessimiste, 0.04),
            (RiskProfile::Audacieux, Scenario::Moyen, 0.08),
            (RiskProfile::Audacieux, Scenario::Optimiste, 0.12),
        ] {
            let params = SimulationParams::new(1.0, 0.0, 1, profile, scenario);
            let result = engine().project(&params).unwrap();
            assert_relative_eq!(result.final_value, 1.0 + rate, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_reference_scenario() {
        // 10k initial, 200/month, 10 years at 5% under invest-then-grow
        // monthly compounding: closed form is
        //   10000 * 1.05^10 + 200 * (1+i) * ((1+i)^120 - 1) / i
        // with i = 1.05^(1/12) - 1, which evaluates to 47287.36.
        let result = engine().project(&base_params()).unwrap();

        assert_relative_eq!(result.final_value, 47_287.36, max_relative = 0.01);
        assert_eq!(result.total_deposits, 34_000.0);
        assert_relative_eq!(
            result.total_gains,
            result.final_value - 34_000.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_zero_initial_pure_accumulation() {
        let params = SimulationParams::new(0.0, 100.0, 5, RiskProfile::Audacieux, Scenario::Moyen);
        let result = engine().project(&params).unwrap();

        assert_eq!(result.total_deposits, 6_000.0);
        // Every contribution earns at least one month of growth
        assert!(result.final_value > result.total_deposits);
        assert!(result.total_gains > 0.0);
    }

    #[test]
    fn test_long_horizon_stays_finite() {
        let params = SimulationParams::new(5_000.0, 2_000.0, 60, RiskProfile::Audacieux, Scenario::Optimiste);
        let result = engine().project(&params).unwrap();

        assert!(result.final_value.is_finite());
        assert_eq!(result.year_by_year.len(), 60);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut params = base_params();
        params.horizon_years = 0;
        assert_eq!(engine().project(&params), Err(InvalidParameters::ZeroHorizon));

        let mut params = base_params();
        params.initial_amount = -1.0;
        assert_eq!(
            engine().project(&params),
            Err(InvalidParameters::InvalidInitialAmount(-1.0))
        );

        let mut params = base_params();
        params.monthly_amount = -50.0;
        assert_eq!(
            engine().project(&params),
            Err(InvalidParameters::InvalidMonthlyAmount(-50.0))
        );
    }

    #[test]
    fn test_missing_rate_rejected() {
        let mut table = ReturnRateTable::empty();
        table.set(RiskProfile::Tempere, Scenario::Moyen, 0.05);
        let engine = ProjectionEngine::new(table);

        let params = SimulationParams::new(1_000.0, 0.0, 1, RiskProfile::Audacieux, Scenario::Moyen);
        assert_eq!(
            engine.project(&params),
            Err(InvalidParameters::MissingReturnRate {
                profile: RiskProfile::Audacieux,
                scenario: Scenario::Moyen,
            })
        );
    }
}
