//! CSV-based assumption loader
//!
//! Loads return-rate assumptions from CSV files in data/assumptions/

use crate::error::StorageError;
use crate::params::{RiskProfile, Scenario};
use std::fs::File;
use std::path::Path;

use super::ReturnRateTable;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// Load the return-rate table from return_rates.csv
///
/// Expected columns: `profile,scenario,annual_return` with the annual return
/// as a decimal (0.05 = 5%). Unknown profile or scenario strings are load
/// errors, not silently skipped rows.
pub fn load_return_rates(path: &Path) -> Result<ReturnRateTable, StorageError> {
    let file = File::open(path.join("return_rates.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut table = ReturnRateTable::empty();

    for result in reader.records() {
        let record = result?;
        let profile: RiskProfile = record
            .get(0)
            .ok_or_else(|| StorageError::InvalidAssumption("missing profile column".into()))?
            .parse()
            .map_err(|e| StorageError::InvalidAssumption(format!("{e}")))?;
        let scenario: Scenario = record
            .get(1)
            .ok_or_else(|| StorageError::InvalidAssumption("missing scenario column".into()))?
            .parse()
            .map_err(|e| StorageError::InvalidAssumption(format!("{e}")))?;
        let annual_return: f64 = record
            .get(2)
            .ok_or_else(|| StorageError::InvalidAssumption("missing annual_return column".into()))?
            .parse()
            .map_err(|e| {
                StorageError::InvalidAssumption(format!("bad annual_return for {profile}/{scenario}: {e}"))
            })?;

        if !annual_return.is_finite() {
            return Err(StorageError::InvalidAssumption(format!(
                "non-finite annual_return for {profile}/{scenario}"
            )));
        }

        table.set(profile, scenario, annual_return);
    }

    log::debug!("loaded {} return-rate assumptions from {}", table.len(), path.display());

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_assumptions() {
        let result = load_return_rates(Path::new(DEFAULT_ASSUMPTIONS_PATH));
        assert!(result.is_ok(), "Failed to load assumptions: {:?}", result.err());

        // Shipped file must reproduce the compiled-in pricing table
        assert_eq!(result.unwrap(), ReturnRateTable::default_pricing());
    }

    #[test]
    fn test_unknown_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("return_rates.csv"),
            "profile,scenario,annual_return\ninconnu,moyen,0.05\n",
        )
        .unwrap();

        let result = load_return_rates(dir.path());
        assert!(matches!(result, Err(StorageError::InvalidAssumption(_))));
    }

    #[test]
    fn test_bad_rate_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("return_rates.csv"),
            "profile,scenario,annual_return\ntempere,moyen,cinq\n",
        )
        .unwrap();

        let result = load_return_rates(dir.path());
        assert!(matches!(result, Err(StorageError::InvalidAssumption(_))));
    }
}
