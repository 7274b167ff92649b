use serde::{Deserialize, Serialize};

use crate::utils::numeric::finite_or_zero;

/// External shape of one rocket. All lengths in centimeters; the fin set is a
/// trapezoid whose root leading edge sits `fin_x_le_cm` behind the nose tip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default = "Geometry::zeroed")]
pub struct Geometry {
    pub body_d_cm: f64,
    pub body_l_cm: f64,
    pub nose_l_cm: f64,
    pub fin_n: f64,
    pub fin_root_cm: f64,
    pub fin_tip_cm: f64,
    pub fin_span_cm: f64,
    pub fin_sweep_cm: f64,
    pub fin_x_le_cm: f64,
}

impl Geometry {
    pub fn zeroed() -> Self {
        Geometry {
            body_d_cm: 0.0,
            body_l_cm: 0.0,
            nose_l_cm: 0.0,
            fin_n: 0.0,
            fin_root_cm: 0.0,
            fin_tip_cm: 0.0,
            fin_span_cm: 0.0,
            fin_sweep_cm: 0.0,
            fin_x_le_cm: 0.0,
        }
    }

    /// Copy with every non-finite or negative field replaced by zero and the
    /// fin count rounded to a whole number.
    pub fn sanitized(&self) -> Self {
        Geometry {
            body_d_cm: non_negative(self.body_d_cm),
            body_l_cm: non_negative(self.body_l_cm),
            nose_l_cm: non_negative(self.nose_l_cm),
            fin_n: non_negative(self.fin_n).round(),
            fin_root_cm: non_negative(self.fin_root_cm),
            fin_tip_cm: non_negative(self.fin_tip_cm),
            fin_span_cm: non_negative(self.fin_span_cm),
            fin_sweep_cm: non_negative(self.fin_sweep_cm),
            fin_x_le_cm: non_negative(self.fin_x_le_cm),
        }
    }
}

fn non_negative(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            body_d_cm: 6.0,
            body_l_cm: 100.0,
            nose_l_cm: 20.0,
            fin_n: 3.0,
            fin_root_cm: 12.0,
            fin_tip_cm: 6.0,
            fin_span_cm: 6.0,
            fin_sweep_cm: 4.0,
            fin_x_le_cm: 70.0,
        }
    }
}
