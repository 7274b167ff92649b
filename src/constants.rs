// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³

// Simulation Parameters
pub const TIME_STEP: f64 = 0.01; // s
pub const MIN_TIME_STEP: f64 = 1e-5; // s
pub const MAX_SIMULATION_TIME: f64 = 120.0; // s

// Center of pressure model
pub const NOSE_CP_FACTOR: f64 = 0.666; // fraction of nose length
pub const NOSE_NORMAL_FORCE_WEIGHT: f64 = 2.0; // stand-in for the nose CNα slope
pub const FIN_CP_MAC_FRACTION: f64 = 0.25; // quarter chord of the MAC

// Static margin thresholds (calibers)
pub const MARGIN_WARN: f64 = 0.5;
pub const MARGIN_GOOD: f64 = 1.0;
pub const MARGIN_OVER: f64 = 2.0;

// Recommendation steps
pub const FIN_LE_STEP_CM: f64 = 10.0; // cm
pub const FIN_SPAN_STEP_CM: f64 = 2.0; // cm
pub const NOSE_MASS_STEP_G: f64 = 30.0; // g
pub const NOSE_MASS_POSITION_CM: f64 = 5.0; // cm

// Default vehicle for the ascent simulation
pub const DEFAULT_LIFTOFF_MASS: f64 = 1.2; // kg
pub const DEFAULT_PROPELLANT_MASS: f64 = 0.25; // kg
pub const DEFAULT_BURN_TIME: f64 = 1.8; // s
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.75;
pub const DEFAULT_BODY_DIAMETER_CM: f64 = 6.0; // cm
