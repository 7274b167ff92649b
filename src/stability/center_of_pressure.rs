//! Barrowman-style center of pressure approximation.
//!
//! The estimate is a single-weight linear blend of a nose term and a fin term.
//! The body tube contributes nothing (slender-body assumption) and both
//! normal-force weights are proportional surrogates rather than real CNα slopes,
//! so `cp_cm` is only meaningful for comparing designs against each other.

use crate::constants::{FIN_CP_MAC_FRACTION, NOSE_CP_FACTOR, NOSE_NORMAL_FORCE_WEIGHT};
use crate::design::geometry::Geometry;
use crate::utils::numeric::round_to;

/// All distances from the nose tip, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureEstimate {
    pub cp_cm: f64,
    pub cp_nose_cm: f64,
    pub cp_fin_cm: f64,
    pub weight_nose: f64,
    pub weight_fin: f64,
}

/// Mean aerodynamic chord of a trapezoidal fin.
pub fn mean_aerodynamic_chord(root_chord: f64, tip_chord: f64) -> f64 {
    let taper = tip_chord / root_chord;
    (2.0 / 3.0) * root_chord * (1.0 + taper + taper.powi(2)) / (1.0 + taper)
}

/// Distance from the root leading edge back to the MAC leading edge.
pub fn mac_leading_edge_offset(sweep: f64, root_chord: f64, tip_chord: f64) -> f64 {
    let mut chord_sum = root_chord + tip_chord;
    if chord_sum == 0.0 {
        chord_sum = 1.0;
    }
    sweep * (root_chord + 2.0 * tip_chord) / (3.0 * chord_sum)
}

pub fn compute_cp(geometry: &Geometry) -> PressureEstimate {
    let geom = geometry.sanitized();

    let (cp_nose, weight_nose) = if geom.nose_l_cm > 0.0 {
        (NOSE_CP_FACTOR * geom.nose_l_cm, NOSE_NORMAL_FORCE_WEIGHT)
    } else {
        (0.0, 0.0)
    };

    let (cp_fin, weight_fin) = fin_contribution(&geom);

    let weight_sum = weight_nose + weight_fin;
    let cp = if weight_sum > 0.0 {
        (weight_nose * cp_nose + weight_fin * cp_fin) / weight_sum
    } else {
        0.0
    };

    PressureEstimate {
        cp_cm: round_to(cp, 2),
        cp_nose_cm: round_to(cp_nose, 2),
        cp_fin_cm: round_to(cp_fin, 2),
        weight_nose: round_to(weight_nose, 2),
        weight_fin: round_to(weight_fin, 2),
    }
}

fn fin_contribution(geom: &Geometry) -> (f64, f64) {
    let root = geom.fin_root_cm;
    let tip = geom.fin_tip_cm;
    let span = geom.fin_span_cm;

    if geom.fin_n <= 0.0 || root <= 0.0 || span <= 0.0 {
        return (0.0, 0.0);
    }

    let mac = mean_aerodynamic_chord(root, tip);
    let x_mac_le = mac_leading_edge_offset(geom.fin_sweep_cm, root, tip);
    let cp_fin = geom.fin_x_le_cm + x_mac_le + FIN_CP_MAC_FRACTION * mac;

    let span_ratio = if geom.body_d_cm > 0.0 {
        span / geom.body_d_cm
    } else {
        0.0
    };

    (cp_fin, geom.fin_n * span_ratio.powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_reference_geometry() {
        let cp = compute_cp(&Geometry::default());

        assert_relative_eq!(cp.cp_nose_cm, 13.32, epsilon = EPSILON);
        assert_relative_eq!(cp.cp_fin_cm, 74.11, epsilon = EPSILON);
        assert_relative_eq!(cp.cp_cm, 49.79, epsilon = EPSILON);
        assert_relative_eq!(cp.weight_nose, 2.0, epsilon = EPSILON);
        assert_relative_eq!(cp.weight_fin, 3.0, epsilon = EPSILON);
    }

    #[test]
    fn test_mean_aerodynamic_chord() {
        assert_relative_eq!(mean_aerodynamic_chord(12.0, 6.0), 28.0 / 3.0, epsilon = EPSILON);
        // rectangular fin: MAC equals the chord
        assert_relative_eq!(mean_aerodynamic_chord(10.0, 10.0), 10.0, epsilon = EPSILON);
        // delta fin
        assert_relative_eq!(mean_aerodynamic_chord(9.0, 0.0), 6.0, epsilon = EPSILON);
    }

    #[test]
    fn test_mac_leading_edge_offset() {
        assert_relative_eq!(mac_leading_edge_offset(4.0, 12.0, 6.0), 16.0 / 9.0, epsilon = EPSILON);
        assert_relative_eq!(mac_leading_edge_offset(3.0, 0.0, 0.0), 0.0, epsilon = EPSILON);
        assert_relative_eq!(mac_leading_edge_offset(0.0, 12.0, 6.0), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_no_fins_falls_back_to_nose() {
        let geom = Geometry {
            fin_n: 0.0,
            ..Geometry::default()
        };
        let cp = compute_cp(&geom);

        assert_eq!(cp.cp_fin_cm, 0.0);
        assert_eq!(cp.weight_fin, 0.0);
        assert_eq!(cp.cp_cm, cp.cp_nose_cm);
    }

    #[test]
    fn test_fins_need_root_chord_and_span() {
        let no_root = Geometry {
            fin_root_cm: 0.0,
            ..Geometry::default()
        };
        let no_span = Geometry {
            fin_span_cm: 0.0,
            ..Geometry::default()
        };

        assert_eq!(compute_cp(&no_root).weight_fin, 0.0);
        assert_eq!(compute_cp(&no_span).weight_fin, 0.0);
        assert_eq!(compute_cp(&no_root).cp_cm, 13.32);
    }

    #[test]
    fn test_all_zero_geometry() {
        let cp = compute_cp(&Geometry::zeroed());

        assert_eq!(cp.cp_cm, 0.0);
        assert_eq!(cp.cp_nose_cm, 0.0);
        assert_eq!(cp.cp_fin_cm, 0.0);
        assert_eq!(cp.weight_nose, 0.0);
        assert_eq!(cp.weight_fin, 0.0);
    }

    #[test]
    fn test_zero_body_diameter_drops_fin_weight() {
        let geom = Geometry {
            body_d_cm: 0.0,
            ..Geometry::default()
        };
        let cp = compute_cp(&geom);

        assert_relative_eq!(cp.cp_fin_cm, 74.11, epsilon = EPSILON);
        assert_eq!(cp.weight_fin, 0.0);
        assert_relative_eq!(cp.cp_cm, 13.32, epsilon = EPSILON);
    }

    #[test]
    fn test_fins_only() {
        let geom = Geometry {
            nose_l_cm: 0.0,
            ..Geometry::default()
        };
        let cp = compute_cp(&geom);

        assert_eq!(cp.weight_nose, 0.0);
        assert_relative_eq!(cp.cp_cm, cp.cp_fin_cm, epsilon = EPSILON);
    }

    #[test]
    fn test_non_finite_geometry_does_not_propagate() {
        let geom = Geometry {
            fin_sweep_cm: f64::NAN,
            body_d_cm: f64::INFINITY,
            ..Geometry::default()
        };
        let cp = compute_cp(&geom);

        assert!(cp.cp_cm.is_finite());
        assert_eq!(cp.weight_fin, 0.0);
        assert_relative_eq!(cp.cp_fin_cm, 72.33, epsilon = EPSILON);
    }

    #[test]
    fn test_negative_tip_chord_is_treated_as_zero() {
        let geom = Geometry {
            fin_tip_cm: -12.0,
            ..Geometry::default()
        };
        let cp = compute_cp(&geom);

        assert!(cp.cp_cm.is_finite());
        assert!(cp.cp_fin_cm.is_finite());
        assert_relative_eq!(cp.cp_fin_cm, 73.33, epsilon = EPSILON);
        assert_relative_eq!(cp.cp_cm, 49.33, epsilon = EPSILON);
    }

    #[test]
    fn test_negative_fin_placement_is_treated_as_zero() {
        let geom = Geometry {
            fin_tip_cm: -6.0,
            fin_sweep_cm: -4.0,
            fin_x_le_cm: -70.0,
            ..Geometry::default()
        };
        let cp = compute_cp(&geom);

        assert_relative_eq!(cp.cp_fin_cm, 2.0, epsilon = EPSILON);
        assert_relative_eq!(cp.cp_cm, 6.53, epsilon = EPSILON);
        assert_relative_eq!(cp.weight_fin, 3.0, epsilon = EPSILON);
    }

    #[test]
    fn test_larger_span_moves_cp_aft() {
        let base = compute_cp(&Geometry::default());
        let bigger = compute_cp(&Geometry {
            fin_span_cm: 8.0,
            ..Geometry::default()
        });

        assert!(bigger.cp_cm > base.cp_cm);
        assert!(bigger.weight_fin > base.weight_fin);
    }
}
