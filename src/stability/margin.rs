use std::fmt;

use crate::constants::{MARGIN_GOOD, MARGIN_OVER, MARGIN_WARN};
use crate::utils::numeric::{finite_or_zero, round_to};

/// Static margin in calibers, rounded to 0.01. Zero when the diameter is not positive.
pub fn compute_static_margin(cp_cm: f64, cg_cm: f64, body_d_cm: f64) -> f64 {
    let diameter = finite_or_zero(body_d_cm);
    if diameter <= 0.0 {
        return 0.0;
    }
    round_to((finite_or_zero(cp_cm) - finite_or_zero(cg_cm)) / diameter, 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StabilityStatus {
    Danger,
    Warn,
    Good,
    Over,
}

impl StabilityStatus {
    pub fn classify(margin_cal: f64) -> Self {
        if !margin_cal.is_finite() || margin_cal < MARGIN_WARN {
            StabilityStatus::Danger
        } else if margin_cal < MARGIN_GOOD {
            StabilityStatus::Warn
        } else if margin_cal <= MARGIN_OVER {
            StabilityStatus::Good
        } else {
            StabilityStatus::Over
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StabilityStatus::Danger => "danger",
            StabilityStatus::Warn => "warn",
            StabilityStatus::Good => "good",
            StabilityStatus::Over => "over",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            StabilityStatus::Danger => "DANGER",
            StabilityStatus::Warn => "CAUTION",
            StabilityStatus::Good => "RECOMMENDED",
            StabilityStatus::Over => "OVER-STABLE",
        }
    }

    /// One-line automated judgment shown next to the margin.
    pub fn judgment(&self) -> &'static str {
        match self {
            StabilityStatus::Danger => {
                "Insufficient static stability: CP is ahead of or close to CG, rework fin and mass layout"
            }
            StabilityStatus::Warn => {
                "Small stability margin: adjust fin position/area or nose mass"
            }
            StabilityStatus::Good => {
                "Within the stable range (approximate): margin suits iterative design and testing"
            }
            StabilityStatus::Over => {
                "Possibly over-stable: stable, but extra fin area adds drag; tune for your goal"
            }
        }
    }

    pub fn tip(&self) -> &'static str {
        match self {
            StabilityStatus::Danger => {
                "Try: move the fin leading edge aft, increase fin span, add nose mass"
            }
            StabilityStatus::Warn => "Try: fin leading edge +5 to 10 cm or fin span +1 to 2 cm",
            StabilityStatus::Good => {
                "Try: save this state as a new revision, then fine-tune toward the altitude target"
            }
            StabilityStatus::Over => {
                "Try: trim fin area/span slightly to cut drag if altitude is the goal"
            }
        }
    }
}

impl fmt::Display for StabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
