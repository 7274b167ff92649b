pub mod simulator;
pub mod thrust_curve;
