//! Investment growth projection: engine and output structures

mod engine;
mod result;

pub use engine::ProjectionEngine;
pub use result::{SimulationResult, SimulationSummary, SimulationYear};
