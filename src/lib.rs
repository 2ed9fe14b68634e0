//! Club Invest projection system - deterministic growth projections for
//! retirement savings products
//!
//! This library provides:
//! - A single canonical investment growth projection engine (geometric
//!   monthly rate, invest-then-grow compounding)
//! - Swappable return-rate assumptions with a CSV loader
//! - A scenario runner for what-if batches across market scenarios
//! - A JSON-file persistence collaborator for saved simulations

pub mod assumptions;
pub mod error;
pub mod params;
pub mod projection;
pub mod scenario;
pub mod storage;

// Re-export commonly used types
pub use assumptions::ReturnRateTable;
pub use error::{InvalidParameters, StorageError};
pub use params::SimulationParams;
pub use projection::{ProjectionEngine, SimulationResult, SimulationYear};
pub use scenario::ScenarioRunner;
pub use storage::{SavedSimulation, SimulationStore};
