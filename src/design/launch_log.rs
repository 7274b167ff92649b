use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::revision::DesignRevision;
use crate::utils::ids::generate_id;

/// Record of a real launch of a saved revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchLog {
    pub id: String,
    pub date: DateTime<Utc>,
    pub revision_id: String,
    pub revision_name: String,
    pub motor: String,
    pub weather: String,
    pub max_alt_m: Option<f64>,
    pub flight_time_s: Option<f64>,
    pub note: Option<String>,
}

impl LaunchLog {
    pub fn for_revision(
        revision: &DesignRevision,
        motor: impl Into<String>,
        weather: impl Into<String>,
    ) -> Self {
        LaunchLog {
            id: generate_id(),
            date: Utc::now(),
            revision_id: revision.id.clone(),
            revision_name: revision.name.clone(),
            motor: motor.into(),
            weather: weather.into(),
            max_alt_m: None,
            flight_time_s: None,
            note: None,
        }
    }

    pub fn with_altitude(mut self, max_alt_m: f64) -> Self {
        self.max_alt_m = Some(max_alt_m).filter(|alt| alt.is_finite());
        self
    }

    pub fn with_flight_time(mut self, flight_time_s: f64) -> Self {
        self.flight_time_s = Some(flight_time_s).filter(|time| time.is_finite());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.is_empty() { None } else { Some(note) };
        self
    }
}
