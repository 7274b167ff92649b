use std::f64::consts::PI;

use log::debug;

use super::thrust_curve::ThrustCurve;
use crate::config::SimulationConfig;
use crate::constants::{
    DEFAULT_BODY_DIAMETER_CM, DEFAULT_BURN_TIME, DEFAULT_DRAG_COEFFICIENT, DEFAULT_LIFTOFF_MASS,
    DEFAULT_PROPELLANT_MASS, MIN_TIME_STEP, TIME_STEP,
};
use crate::errors::SimulationError;
use crate::utils::numeric::{finite_or_zero, round_to};

/// Circular cross-section area in m² for a body diameter in cm.
pub fn frontal_area_m2(diameter_cm: f64) -> f64 {
    let radius_m = finite_or_zero(diameter_cm) / 100.0 / 2.0;
    PI * radius_m.powi(2)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    pub mass0_kg: f64,
    pub propellant_mass_kg: f64,
    pub burn_time_s: f64,
    pub drag_coefficient: f64,
    pub area_m2: f64,
}

impl Vehicle {
    pub fn new(
        mass0_kg: f64,
        propellant_mass_kg: f64,
        burn_time_s: f64,
        drag_coefficient: f64,
        area_m2: f64,
    ) -> Self {
        Vehicle {
            mass0_kg,
            propellant_mass_kg,
            burn_time_s,
            drag_coefficient,
            area_m2,
        }
    }

    pub fn with_diameter_cm(
        mass0_kg: f64,
        propellant_mass_kg: f64,
        burn_time_s: f64,
        drag_coefficient: f64,
        diameter_cm: f64,
    ) -> Self {
        Vehicle::new(
            mass0_kg,
            propellant_mass_kg,
            burn_time_s,
            drag_coefficient,
            frontal_area_m2(diameter_cm),
        )
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("initial mass", self.mass0_kg),
            ("propellant mass", self.propellant_mass_kg),
            ("burn time", self.burn_time_s),
            ("drag coefficient", self.drag_coefficient),
            ("frontal area", self.area_m2),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimulationError::InvalidVehicle(format!(
                    "{name} must be a finite number"
                )));
            }
            if value < 0.0 {
                return Err(SimulationError::InvalidVehicle(format!(
                    "{name} cannot be negative"
                )));
            }
        }
        if self.mass0_kg <= 0.0 {
            return Err(SimulationError::InvalidVehicle(
                "initial mass must be positive".to_string(),
            ));
        }
        if self.propellant_mass_kg >= self.mass0_kg {
            return Err(SimulationError::InvalidVehicle(
                "propellant mass must be less than the initial mass".to_string(),
            ));
        }
        Ok(())
    }

    /// Linear propellant depletion over the burn, constant afterwards.
    pub fn mass_at(&self, time: f64) -> f64 {
        if time <= self.burn_time_s && self.burn_time_s > 0.0 {
            self.mass0_kg - self.propellant_mass_kg * time / self.burn_time_s
        } else if time <= self.burn_time_s {
            self.mass0_kg
        } else {
            self.mass0_kg - self.propellant_mass_kg
        }
    }

    fn sanitized(&self) -> Self {
        Vehicle {
            mass0_kg: finite_or_zero(self.mass0_kg),
            propellant_mass_kg: finite_or_zero(self.propellant_mass_kg),
            burn_time_s: finite_or_zero(self.burn_time_s),
            drag_coefficient: finite_or_zero(self.drag_coefficient),
            area_m2: finite_or_zero(self.area_m2),
        }
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Vehicle::with_diameter_cm(
            DEFAULT_LIFTOFF_MASS,
            DEFAULT_PROPELLANT_MASS,
            DEFAULT_BURN_TIME,
            DEFAULT_DRAG_COEFFICIENT,
            DEFAULT_BODY_DIAMETER_CM,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    pub max_alt_m: f64,
    pub burnout_vel_ms: f64,
    pub flight_time_s: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    GroundImpact,
    TimeLimit,
}

/// Vertical 1-D ascent with forward Euler integration.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlightSimulator {
    pub config: SimulationConfig,
}

impl FlightSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        FlightSimulator { config }
    }

    pub fn with_time_step(mut self, time_step_s: f64) -> Self {
        self.config.time_step_s = time_step_s;
        self
    }

    pub fn run(&self, curve: &ThrustCurve, vehicle: &Vehicle) -> SimulationResult {
        let vehicle = vehicle.sanitized();
        let dt = if self.config.time_step_s.is_finite() && self.config.time_step_s > 0.0 {
            self.config.time_step_s.max(MIN_TIME_STEP)
        } else {
            TIME_STEP
        };
        let max_time = finite_or_zero(self.config.max_time_s);
        // one extra step covers the accumulated `time` landing just short of `max_time`
        let max_steps = (max_time / dt).ceil().max(0.0) as usize + 1;
        let gravity = finite_or_zero(self.config.gravity_m_s2);
        let drag_factor = 0.5
            * finite_or_zero(self.config.air_density_kg_m3)
            * vehicle.drag_coefficient
            * vehicle.area_m2;

        let mut time = 0.0;
        let mut velocity: f64 = 0.0;
        let mut altitude = 0.0;
        let mut max_altitude: f64 = 0.0;
        let mut burnout_velocity = 0.0;
        let mut steps = 0usize;

        while time < max_time && altitude >= 0.0 && steps < max_steps {
            let burning = time <= vehicle.burn_time_s;
            let mass = vehicle.mass_at(time);
            let thrust = if burning { curve.thrust_at(time) } else { 0.0 };
            let drag = drag_factor * velocity * velocity.abs();
            let acceleration = (thrust - mass * gravity - drag) / mass;

            velocity += acceleration * dt;
            altitude += velocity * dt;

            if burning {
                burnout_velocity = velocity;
            }
            max_altitude = max_altitude.max(altitude);

            time += dt;
            steps += 1;
        }

        let termination = if altitude < 0.0 {
            Termination::GroundImpact
        } else {
            Termination::TimeLimit
        };
        debug!(
            "Simulation ended by {:?} after {} steps at t={:.2}s",
            termination, steps, time
        );

        SimulationResult {
            max_alt_m: round_to(finite_or_zero(max_altitude), 1),
            burnout_vel_ms: round_to(finite_or_zero(burnout_velocity), 1),
            flight_time_s: round_to(time, 1),
        }
    }
}

/// Runs the ascent with the default environment and an optional time step.
pub fn simulate_ascent(
    curve: &ThrustCurve,
    vehicle: &Vehicle,
    dt: Option<f64>,
) -> SimulationResult {
    FlightSimulator::default()
        .with_time_step(dt.unwrap_or(TIME_STEP))
        .run(curve, vehicle)
}
