use std::error::Error;
use std::fmt;

/// Custom error type for system validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    /// An equation contains a NaN or infinite coefficient. The index is the
    /// 1-based position of the equation in the system.
    NonFiniteCoefficient { equation: usize },
    /// A coefficient magnitude exceeds [`crate::system::MAX_COEFFICIENT`],
    /// so the cross products the classification is built on could overflow
    /// to infinity. The index is the 1-based position of the equation in
    /// the system.
    OversizedCoefficient { equation: usize },
    /// Every left-hand-side coefficient of an equation is zero, so it does
    /// not describe a line or plane ("0 = 0" and "0 = c" both land here).
    /// The index is the 1-based position of the equation in the system.
    DegenerateEquation { equation: usize },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClassifyError::NonFiniteCoefficient { equation } => {
                write!(f, "Equation {} has a non-finite coefficient", equation)
            }
            ClassifyError::OversizedCoefficient { equation } => {
                write!(
                    f,
                    "Equation {} has a coefficient too large to classify without overflow",
                    equation
                )
            }
            ClassifyError::DegenerateEquation { equation } => {
                write!(
                    f,
                    "Equation {} has an all-zero left-hand side and describes no line or plane",
                    equation
                )
            }
        }
    }
}

impl Error for ClassifyError {}
