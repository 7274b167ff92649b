use std::io::Read;

use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrustPoint {
    pub t: f64, // s
    #[serde(rename = "F")]
    pub force: f64, // N
}

impl ThrustPoint {
    pub fn new(t: f64, force: f64) -> Self {
        ThrustPoint { t, force }
    }
}

/// Non-empty thrust samples in ascending time order.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrustCurve {
    points: Vec<ThrustPoint>,
}

impl ThrustCurve {
    pub fn new(points: Vec<ThrustPoint>) -> Result<Self, SimulationError> {
        if points.is_empty() {
            return Err(SimulationError::EmptyThrustCurve);
        }
        if let Some(index) = points
            .iter()
            .position(|p| !p.t.is_finite() || !p.force.is_finite())
        {
            return Err(SimulationError::InvalidThrustSample { index });
        }
        if let Some(index) = (1..points.len()).find(|&i| points[i].t < points[i - 1].t) {
            return Err(SimulationError::UnsortedThrustCurve { index });
        }
        Ok(ThrustCurve { points })
    }

    /// Reads a `time_seconds,thrust_newtons` upload and validates the result.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SimulationError> {
        ThrustCurve::new(read_thrust_points(reader)?)
    }

    pub fn from_csv_str(text: &str) -> Result<Self, SimulationError> {
        ThrustCurve::new(parse_thrust_csv(text))
    }

    pub fn points(&self) -> &[ThrustPoint] {
        &self.points
    }

    /// Linear interpolation between the bracketing samples. Holds the first sample
    /// before it and returns zero after the last.
    pub fn thrust_at(&self, time: f64) -> f64 {
        let first = self.points[0];
        if time <= first.t {
            return first.force;
        }

        let upper = self.points.partition_point(|p| p.t < time);
        if upper == self.points.len() {
            return 0.0;
        }

        let a = self.points[upper - 1];
        let b = self.points[upper];
        let u = (time - a.t) / (b.t - a.t);
        a.force + u * (b.force - a.force)
    }

    /// Trapezoidal area under the curve in N·s.
    pub fn total_impulse(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| 0.5 * (w[0].force + w[1].force) * (w[1].t - w[0].t))
            .sum()
    }
}

/// Two-column CSV samples. Lines that do not give two finite numbers are skipped.
pub fn read_thrust_points<R: Read>(reader: R) -> Result<Vec<ThrustPoint>, SimulationError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    let mut skipped = 0usize;
    for record in csv_reader.byte_records() {
        let record = record?;
        match (parse_field(record.get(0)), parse_field(record.get(1))) {
            (Some(t), Some(force)) => points.push(ThrustPoint::new(t, force)),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} thrust curve lines without two numbers", skipped);
    }
    Ok(points)
}

pub fn parse_thrust_csv(text: &str) -> Vec<ThrustPoint> {
    // in-memory reads cannot fail
    read_thrust_points(text.as_bytes()).unwrap_or_default()
}

fn parse_field(field: Option<&[u8]>) -> Option<f64> {
    let text = std::str::from_utf8(field?).ok()?.trim();
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
