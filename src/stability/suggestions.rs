use crate::constants::{
    FIN_LE_STEP_CM, FIN_SPAN_STEP_CM, MARGIN_GOOD, MARGIN_WARN, NOSE_MASS_POSITION_CM,
    NOSE_MASS_STEP_G,
};
use crate::design::geometry::Geometry;
use crate::design::part::Part;
use crate::utils::ids::generate_id;
use crate::utils::numeric::round_to;

/// A design change proposed by [`suggest`]. Applied with [`apply_delta`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DesignDelta {
    FinLeadingEdge { delta_cm: f64 },
    FinSpan { delta_cm: f64 },
    NoseMass { delta_g: f64, x_cm: f64 },
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub title: String,
    pub rationale: String,
    pub delta: DesignDelta,
}

impl Suggestion {
    fn new(title: &str, rationale: &str, delta: DesignDelta) -> Self {
        Suggestion {
            title: title.to_string(),
            rationale: rationale.to_string(),
            delta,
        }
    }
}

fn move_fins_aft() -> Suggestion {
    Suggestion::new(
        "Fin LE x +10 cm (move fins aft)",
        "Most direct way to move CP aft, which raises the static margin",
        DesignDelta::FinLeadingEdge {
            delta_cm: FIN_LE_STEP_CM,
        },
    )
}

fn grow_fin_span() -> Suggestion {
    Suggestion::new(
        "Fin span +2 cm (larger fins)",
        "Raises the fin normal-force weight so CP shifts toward the fins, which raises the static margin",
        DesignDelta::FinSpan {
            delta_cm: FIN_SPAN_STEP_CM,
        },
    )
}

fn add_nose_mass() -> Suggestion {
    Suggestion::new(
        "Nose mass +30 g (move CG forward)",
        "Pulls CG forward so CP - CG grows, which raises the static margin",
        DesignDelta::NoseMass {
            delta_g: NOSE_MASS_STEP_G,
            x_cm: NOSE_MASS_POSITION_CM,
        },
    )
}

/// Ordered design suggestions for the current margin. Most effective first when unstable.
pub fn suggest(_geometry: &Geometry, margin_cal: f64) -> Vec<Suggestion> {
    if margin_cal.is_nan() || margin_cal < MARGIN_WARN {
        return vec![move_fins_aft(), add_nose_mass(), grow_fin_span()];
    }
    if margin_cal < MARGIN_GOOD {
        return vec![move_fins_aft(), grow_fin_span(), add_nose_mass()];
    }

    vec![
        Suggestion::new(
            "Margin is sufficient: consider reducing drag",
            "Over-stability or oversized fins add drag; oversized fins cost altitude",
            DesignDelta::None,
        ),
        move_fins_aft(),
        grow_fin_span(),
        add_nose_mass(),
    ]
}

/// Applies a suggestion to the editor's working set.
pub fn apply_delta(delta: DesignDelta, parts: &mut Vec<Part>, geometry: &mut Geometry) {
    match delta {
        DesignDelta::FinLeadingEdge { delta_cm } => {
            geometry.fin_x_le_cm = round_to(geometry.fin_x_le_cm + delta_cm, 1);
        }
        DesignDelta::FinSpan { delta_cm } => {
            geometry.fin_span_cm = round_to(geometry.fin_span_cm + delta_cm, 1);
        }
        DesignDelta::NoseMass { delta_g, x_cm } => {
            let nose = parts
                .iter_mut()
                .find(|part| part.name.to_lowercase().contains("nose"));
            match nose {
                Some(part) => part.mass_g = round_to(part.mass_g + delta_g, 1),
                None => parts.insert(
                    0,
                    Part::new(generate_id(), "Nose mass", delta_g, x_cm)
                        .with_note("auto recommendation"),
                ),
            }
        }
        DesignDelta::None => {}
    }
}
