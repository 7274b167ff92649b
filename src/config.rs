//! Tunable constants of the ascent simulation, loaded from TOML.

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::constants::{AIR_DENSITY_SEA_LEVEL, GRAVITY, MAX_SIMULATION_TIME, TIME_STEP};
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub time_step_s: f64,
    pub max_time_s: f64,
    pub air_density_kg_m3: f64,
    pub gravity_m_s2: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            time_step_s: TIME_STEP,
            max_time_s: MAX_SIMULATION_TIME,
            air_density_kg_m3: AIR_DENSITY_SEA_LEVEL,
            gravity_m_s2: GRAVITY,
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, SimulationError> {
        let config: SimulationConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        info!("Reading simulation config from '{}'", path.display());
        let text = fs::read_to_string(path)?;
        SimulationConfig::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("time_step_s", self.time_step_s),
            ("max_time_s", self.max_time_s),
            ("air_density_kg_m3", self.air_density_kg_m3),
            ("gravity_m_s2", self.gravity_m_s2),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimulationError::Config(format!("{name} must be finite")));
            }
        }
        if self.time_step_s <= 0.0 {
            return Err(SimulationError::Config(
                "time_step_s must be positive".to_string(),
            ));
        }
        if self.max_time_s <= 0.0 {
            return Err(SimulationError::Config(
                "max_time_s must be positive".to_string(),
            ));
        }
        if self.air_density_kg_m3 < 0.0 {
            return Err(SimulationError::Config(
                "air_density_kg_m3 cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.time_step_s, 0.01);
        assert_eq!(config.max_time_s, 120.0);
        assert_eq!(config.air_density_kg_m3, 1.225);
        assert_eq!(config.gravity_m_s2, 9.81);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimulationConfig::from_toml_str("time_step_s = 0.005").unwrap();
        assert_eq!(config.time_step_s, 0.005);
        assert_eq!(config.max_time_s, 120.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            SimulationConfig::from_toml_str("time_step_s = 0.0"),
            Err(SimulationError::Config(_))
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("max_time_s = -1.0"),
            Err(SimulationError::Config(_))
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("gravity_m_s2 = nan"),
            Err(SimulationError::Config(_))
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("time_step_s = \"fast\""),
            Err(SimulationError::Toml(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_time_s = 60.0\nair_density_kg_m3 = 1.0").unwrap();

        let config = SimulationConfig::load(file.path()).unwrap();
        assert_eq!(config.max_time_s, 60.0);
        assert_eq!(config.air_density_kg_m3, 1.0);
        assert_eq!(config.time_step_s, 0.01);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            SimulationConfig::load("/nonexistent/sim.toml"),
            Err(SimulationError::Io(_))
        ));
    }
}
