pub mod geometry;
pub mod launch_log;
pub mod part;
pub mod revision;

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::errors::SimulationError;
use geometry::Geometry;
use part::Part;

/// Editable working set as stored in a design TOML file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DesignDocument {
    pub name: String,
    #[serde(default = "Geometry::zeroed")]
    pub geometry: Geometry,
    pub parts: Vec<Part>,
}

impl DesignDocument {
    pub fn from_toml_str(text: &str) -> Result<Self, SimulationError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        info!("Reading design from '{}'", path.display());
        let text = fs::read_to_string(path)?;
        DesignDocument::from_toml_str(&text)
    }
}
