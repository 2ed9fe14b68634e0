//! Return-rate assumptions for the projection engine
//!
//! The (risk profile, scenario) → annual return table is domain
//! configuration owned by the product team, not a compiled-in constant:
//! it is injected into the engine at construction and can be recalibrated
//! from CSV without touching the algorithm.

pub mod loader;

pub use loader::DEFAULT_ASSUMPTIONS_PATH;

use crate::params::{RiskProfile, Scenario};
use std::collections::HashMap;
use std::path::Path;

/// Annual nominal return assumptions by (risk profile, scenario)
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnRateTable {
    rates: HashMap<(RiskProfile, Scenario), f64>,
}

impl ReturnRateTable {
    /// Empty table, to be filled via [`set`](Self::set)
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Default pricing assumptions
    ///
    /// Tempere averages 5% (risk 3/7), audacieux 8% (risk 5/7), with
    /// pessimistic and optimistic bands around each.
    pub fn default_pricing() -> Self {
        let mut table = Self::empty();
        table.set(RiskProfile::Tempere, Scenario::Pessimiste, 0.02);
        table.set(RiskProfile::Tempere, Scenario::Moyen, 0.05);
        table.set(RiskProfile::Tempere, Scenario::Optimiste, 0.07);
        table.set(RiskProfile::Audacieux, Scenario::Pessimiste, 0.04);
        table.set(RiskProfile::Audacieux, Scenario::Moyen, 0.08);
        table.set(RiskProfile::Audacieux, Scenario::Optimiste, 0.12);
        table
    }

    /// Load the table from return_rates.csv in the default location
    pub fn from_csv() -> Result<Self, crate::error::StorageError> {
        Self::from_csv_path(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load the table from return_rates.csv in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, crate::error::StorageError> {
        loader::load_return_rates(path)
    }

    /// Set or replace the annual return for one (profile, scenario) cell
    pub fn set(&mut self, profile: RiskProfile, scenario: Scenario, annual_return: f64) {
        self.rates.insert((profile, scenario), annual_return);
    }

    /// Annual nominal return for a (profile, scenario) pair, if configured
    pub fn get(&self, profile: RiskProfile, scenario: Scenario) -> Option<f64> {
        self.rates.get(&(profile, scenario)).copied()
    }

    /// Number of configured cells
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for ReturnRateTable {
    fn default() -> Self {
        Self::default_pricing()
    }
}
