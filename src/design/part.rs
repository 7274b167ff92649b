use serde::{Deserialize, Serialize};

use crate::utils::numeric::finite_or_zero;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PartCategory {
    Nose,
    Body,
    Fins,
    Electronics,
    Payload,
    Recovery,
    #[default]
    Other,
}

/// A component of the design. `x_cm` is measured from the nose tip along the body axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Part {
    pub id: String,
    pub name: String,
    pub category: PartCategory,
    pub mass_g: f64,
    pub x_cm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Part {
    pub fn new(id: impl Into<String>, name: impl Into<String>, mass_g: f64, x_cm: f64) -> Self {
        Part {
            id: id.into(),
            name: name.into(),
            category: PartCategory::Other,
            mass_g,
            x_cm,
            material: None,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Mass in grams, non-finite treated as zero.
    pub fn get_mass(&self) -> f64 {
        finite_or_zero(self.mass_g)
    }

    /// Mass moment about the nose tip in g·cm, non-finite fields treated as zero.
    pub fn get_moment(&self) -> f64 {
        self.get_mass() * finite_or_zero(self.x_cm)
    }
}
