use crate::design::part::Part;
use crate::utils::numeric::round_to;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassProperties {
    pub total_mass_g: f64,
    pub cg_cm: f64,
}

impl MassProperties {
    pub fn empty() -> Self {
        MassProperties {
            total_mass_g: 0.0,
            cg_cm: 0.0,
        }
    }
}

/// Total mass and center of gravity (from the nose tip), both rounded to 0.1.
/// A non-positive total mass yields `{0, 0}`.
pub fn compute_cg(parts: &[Part]) -> MassProperties {
    let total_mass: f64 = parts.iter().map(Part::get_mass).sum();
    if total_mass <= 0.0 {
        return MassProperties::empty();
    }

    let moment: f64 = parts.iter().map(Part::get_moment).sum();

    MassProperties {
        total_mass_g: round_to(total_mass, 1),
        cg_cm: round_to(moment / total_mass, 1),
    }
}
