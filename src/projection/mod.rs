//! Projection engine: monthly wealth projection and year-1 analysis

mod state;
mod engine;
mod points;
mod year_one;

pub use state::{GrowthFactors, ProjectionState};
pub use engine::{generate_projection, ProjectionEngine};
pub use points::{ProjectionPoint, ProjectionResult, ProjectionSummary, MID_TERM_MONTH};
pub use year_one::{EngineShare, LeveragedYear1, ThreeEngines, UnleveragedYear1, Year1Results};
