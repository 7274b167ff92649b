pub mod config;
pub mod constants;
pub mod design;
pub mod errors;
pub mod flight;
pub mod report;
pub mod stability;
pub mod utils;

pub use config::SimulationConfig;
pub use constants::*;
pub use errors::SimulationError;

// Re-export the design data model
pub use design::geometry::Geometry;
pub use design::launch_log::LaunchLog;
pub use design::part::{Part, PartCategory};
pub use design::revision::{compare_revisions, DesignRevision, RevisionComparison};
pub use design::DesignDocument;

// Re-export the stability calculations
pub use stability::center_of_gravity::{compute_cg, MassProperties};
pub use stability::center_of_pressure::{compute_cp, PressureEstimate};
pub use stability::margin::{compute_static_margin, StabilityStatus};
pub use stability::suggestions::{apply_delta, suggest, DesignDelta, Suggestion};
pub use stability::StabilityAnalysis;

// Re-export the flight simulation
pub use flight::simulator::{
    frontal_area_m2, simulate_ascent, FlightSimulator, SimulationResult, Vehicle,
};
pub use flight::thrust_curve::{parse_thrust_csv, ThrustCurve, ThrustPoint};
