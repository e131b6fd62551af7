use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default absolute floor for the adaptive zero test.
pub const DEFAULT_ABS_TOLERANCE: f64 = 1e-12;
/// Default relative factor for the adaptive zero test.
pub const DEFAULT_REL_TOLERANCE: f64 = 1e-9;

/// Zero-comparison policy used for determinant, cross-term and pivot tests.
///
/// Classification never needs the magnitude of these quantities, only
/// whether they vanish, so the whole numeric behavior of the crate is
/// concentrated in this one decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroTolerance {
    /// Compare against zero with `== 0.0`.
    ///
    /// This reproduces the textbook test and is only reliable for integer
    /// or exact-rational coefficients, where the compared quantities are
    /// computed without rounding.
    Exact,
    /// Treat `value` as zero when `|value| <= max(abs, rel * scale)`, where
    /// `scale` is the cancellation magnitude of the computation that
    /// produced it (for a difference `p - q`, the magnitude `|p| + |q|`).
    ///
    /// `rel` guards against rounding noise in large cancellations, `abs`
    /// against underflow when the inputs themselves are tiny.
    Adaptive { abs: f64, rel: f64 },
}

impl Default for ZeroTolerance {
    fn default() -> Self {
        ZeroTolerance::Adaptive {
            abs: DEFAULT_ABS_TOLERANCE,
            rel: DEFAULT_REL_TOLERANCE,
        }
    }
}

impl ZeroTolerance {
    /// Decide whether `value` is numerically zero, given the cancellation
    /// scale of the computation that produced it.
    pub fn is_zero(&self, value: f64, scale: f64) -> bool {
        match self {
            ZeroTolerance::Exact => value == 0.0,
            ZeroTolerance::Adaptive { abs, rel } => value.abs() <= abs.max(rel * scale),
        }
    }
}

impl FromStr for ZeroTolerance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(ZeroTolerance::Exact),
            "adaptive" => Ok(ZeroTolerance::default()),
            _ => Err(format!(
                "Unknown tolerance profile: {}. Expected 'exact' or 'adaptive'",
                s
            )),
        }
    }
}
