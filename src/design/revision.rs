use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use super::{geometry::Geometry, part::Part};
use crate::stability::{margin::StabilityStatus, StabilityAnalysis};
use crate::utils::ids::generate_id;

/// Immutable snapshot of a design. Never edited in place; restored into a
/// working set or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRevision {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub parts: Vec<Part>,
    pub geometry: Geometry,
}

impl DesignRevision {
    pub fn snapshot(name: impl Into<String>, parts: &[Part], geometry: &Geometry) -> Self {
        let revision = DesignRevision {
            id: generate_id(),
            name: name.into(),
            created_at: Utc::now(),
            parts: parts.to_vec(),
            geometry: *geometry,
        };
        debug!(
            "Saved revision '{}' ({}) with {} parts",
            revision.name,
            revision.id,
            revision.parts.len()
        );
        revision
    }

    /// Copies of the stored parts and geometry for the editor.
    pub fn restore(&self) -> (Vec<Part>, Geometry) {
        debug!("Restoring revision '{}' ({})", self.name, self.id);
        (self.parts.clone(), self.geometry)
    }

    pub fn analyze(&self) -> StabilityAnalysis {
        StabilityAnalysis::evaluate(&self.parts, &self.geometry)
    }
}

/// Removes the revision with `id`. Returns whether one was removed.
pub fn delete_revision(revisions: &mut Vec<DesignRevision>, id: &str) -> bool {
    let before = revisions.len();
    revisions.retain(|revision| revision.id != id);
    revisions.len() != before
}

/// One row of the revision comparison table. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RevisionComparison {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub cg_cm: f64,
    pub cp_cm: f64,
    pub margin_cal: f64,
    pub status: StabilityStatus,
}

pub fn compare_revisions(revisions: &[DesignRevision]) -> Vec<RevisionComparison> {
    revisions
        .iter()
        .map(|revision| {
            let analysis = revision.analyze();
            RevisionComparison {
                id: revision.id.clone(),
                name: revision.name.clone(),
                created_at: revision.created_at,
                cg_cm: analysis.mass.cg_cm,
                cp_cm: analysis.pressure.cp_cm,
                margin_cal: analysis.margin_cal,
                status: analysis.status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_parts() -> Vec<Part> {
        vec![
            Part::new("a", "Nose cone", 100.0, 10.0),
            Part::new("b", "Motor", 50.0, 60.0),
        ]
    }

    #[test]
    fn test_snapshot_is_independent_of_editor() {
        let mut parts = sample_parts();
        let mut geometry = Geometry::default();
        let revision = DesignRevision::snapshot("v1", &parts, &geometry);

        parts[0].mass_g = 999.0;
        geometry.fin_span_cm = 20.0;

        assert_eq!(revision.name, "v1");
        assert_eq!(revision.parts, sample_parts());
        assert_eq!(revision.geometry, Geometry::default());
    }

    #[test]
    fn test_restore_returns_copies() {
        let revision = DesignRevision::snapshot("v1", &sample_parts(), &Geometry::default());
        let (mut parts, _) = revision.restore();
        parts.clear();

        assert_eq!(revision.parts.len(), 2);
    }

    #[test]
    fn test_delete_revision() {
        let mut revisions = vec![
            DesignRevision::snapshot("v1", &sample_parts(), &Geometry::default()),
            DesignRevision::snapshot("v2", &[], &Geometry::default()),
        ];
        let id = revisions[0].id.clone();

        assert!(delete_revision(&mut revisions, &id));
        assert!(!delete_revision(&mut revisions, &id));
        assert_eq!(revisions.len(), 1);
        assert_eq!(revisions[0].name, "v2");
    }

    #[test]
    fn test_compare_revisions() {
        let unstable = Geometry {
            fin_x_le_cm: 10.0,
            fin_span_cm: 2.0,
            ..Geometry::default()
        };
        let revisions = vec![
            DesignRevision::snapshot("v1", &sample_parts(), &unstable),
            DesignRevision::snapshot("v2", &sample_parts(), &Geometry::default()),
        ];

        let rows = compare_revisions(&revisions);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "v1");
        assert_eq!(rows[0].status, StabilityStatus::Danger);
        assert_relative_eq!(rows[1].cg_cm, 26.7);
        assert_relative_eq!(rows[1].cp_cm, 49.79);
        assert_relative_eq!(rows[1].margin_cal, 3.85);
        assert_eq!(rows[1].status, StabilityStatus::Over);
    }
}
