pub mod center_of_gravity;
pub mod center_of_pressure;
pub mod margin;
pub mod suggestions;

use crate::design::geometry::Geometry;
use crate::design::part::Part;

use center_of_gravity::{compute_cg, MassProperties};
use center_of_pressure::{compute_cp, PressureEstimate};
use margin::{compute_static_margin, StabilityStatus};

/// CG, CP, static margin and status of one design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityAnalysis {
    pub mass: MassProperties,
    pub pressure: PressureEstimate,
    pub body_d_cm: f64,
    pub margin_cal: f64,
    pub status: StabilityStatus,
}

impl StabilityAnalysis {
    pub fn evaluate(parts: &[Part], geometry: &Geometry) -> Self {
        let mass = compute_cg(parts);
        let pressure = compute_cp(geometry);
        let margin_cal = compute_static_margin(pressure.cp_cm, mass.cg_cm, geometry.body_d_cm);

        StabilityAnalysis {
            mass,
            pressure,
            body_d_cm: geometry.body_d_cm,
            margin_cal,
            status: StabilityStatus::classify(margin_cal),
        }
    }

    /// CP minus CG in centimeters.
    pub fn separation_cm(&self) -> f64 {
        self.pressure.cp_cm - self.mass.cg_cm
    }
}
